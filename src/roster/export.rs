//! # CSV Export
//!
//! Serializes a roster snapshot to CSV and summarizes it for the export preview.
//!
//! The output is meant for spreadsheet tools: UTF-8, comma-delimited, one record
//! per line with the header first. A cell is quoted only when it contains a comma,
//! a double quote or a newline; inside a quoted cell every `"` becomes `""`.
//! Lines are joined with `\n` and there is no trailing newline, so `N` records
//! always produce exactly `N + 1` lines.
//!
//! Exporting nothing is an error ([`RosterError::EmptyExport`]) rather than a
//! header-only file. Callers are expected to warn and skip writing.

use crate::error::{Result, RosterError};
use crate::model::{Department, Employee, Status};
use chrono::NaiveDate;
use std::borrow::Cow;
use std::collections::BTreeMap;

pub const CSV_HEADERS: [&str; 8] = [
    "Employee ID",
    "Name",
    "Department",
    "Role",
    "Joining Date",
    "Status",
    "Performance Score (%)",
    "Archived",
];

/// Quotes a cell if it contains a comma, a double quote or a newline.
pub fn escape_cell(cell: &str) -> Cow<'_, str> {
    if cell.contains([',', '"', '\n']) {
        Cow::Owned(format!("\"{}\"", cell.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(cell)
    }
}

fn row(emp: &Employee) -> [String; 8] {
    [
        emp.id.clone(),
        emp.name.clone(),
        emp.department.to_string(),
        emp.role.clone(),
        emp.joining_date.format("%Y-%m-%d").to_string(),
        emp.status.to_string(),
        emp.performance_score.to_string(),
        if emp.archived { "Yes" } else { "No" }.to_string(),
    ]
}

fn join_cells<S: AsRef<str>>(cells: &[S]) -> String {
    cells
        .iter()
        .map(|c| escape_cell(c.as_ref()))
        .collect::<Vec<_>>()
        .join(",")
}

/// Serializes `records` to CSV text.
pub fn to_csv(records: &[Employee]) -> Result<String> {
    if records.is_empty() {
        return Err(RosterError::EmptyExport);
    }

    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push(join_cells(&CSV_HEADERS));
    lines.extend(records.iter().map(|emp| join_cells(&row(emp))));
    Ok(lines.join("\n"))
}

/// Which set of employees an export covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportScope {
    /// The displayed roster after filters.
    Filtered,
    /// The whole displayed roster, ignoring filters.
    All,
}

impl ExportScope {
    /// Default file name, stamped with `date`.
    pub fn file_name(&self, date: NaiveDate) -> String {
        let prefix = match self {
            ExportScope::Filtered => "filtered_employees",
            ExportScope::All => "all_employees",
        };
        format!("{}_{}.csv", prefix, date.format("%Y-%m-%d"))
    }
}

/// Summary shown before exporting.
#[derive(Debug, Clone, PartialEq)]
pub struct Stats {
    pub total: usize,
    pub active: usize,
    pub inactive: usize,
    /// Always holds every department, zero counts included.
    pub per_department: BTreeMap<Department, usize>,
    /// Mean performance score; 0 for an empty set.
    pub avg_performance: f64,
}

pub fn compute_stats(records: &[Employee]) -> Stats {
    let mut per_department: BTreeMap<Department, usize> =
        Department::ALL.into_iter().map(|d| (d, 0)).collect();
    let mut active = 0;
    let mut inactive = 0;
    let mut score_sum: u64 = 0;

    for emp in records {
        *per_department.entry(emp.department).or_insert(0) += 1;
        match emp.status {
            Status::Active => active += 1,
            Status::Inactive => inactive += 1,
        }
        score_sum += u64::from(emp.performance_score);
    }

    let avg_performance = if records.is_empty() {
        0.0
    } else {
        score_sum as f64 / records.len() as f64
    };

    Stats {
        total: records.len(),
        active,
        inactive,
        per_department,
        avg_performance,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SAMPLE_EMPLOYEES;

    fn two_records() -> Vec<Employee> {
        let mut eng = SAMPLE_EMPLOYEES[0].clone();
        eng.performance_score = 85;
        let mut mkt = SAMPLE_EMPLOYEES[1].clone();
        mkt.status = Status::Inactive;
        mkt.performance_score = 50;
        vec![eng, mkt]
    }

    #[test]
    fn empty_input_is_an_error() {
        assert!(matches!(to_csv(&[]), Err(RosterError::EmptyExport)));
    }

    #[test]
    fn header_then_one_line_per_record() {
        let records = SAMPLE_EMPLOYEES.clone();
        let csv = to_csv(&records).unwrap();
        let lines: Vec<&str> = csv.split('\n').collect();
        assert_eq!(lines.len(), records.len() + 1);
        assert_eq!(
            lines[0],
            "Employee ID,Name,Department,Role,Joining Date,Status,Performance Score (%),Archived"
        );
        assert_eq!(
            lines[1],
            "EMP001,Jon Doe,Engineering,Senior Developer,2024-01-15,Active,85,No"
        );
        assert!(!csv.ends_with('\n'));
    }

    #[test]
    fn archived_flag_renders_yes() {
        let mut emp = SAMPLE_EMPLOYEES[2].clone();
        emp.archived = true;
        let csv = to_csv(&[emp]).unwrap();
        assert!(csv.lines().nth(1).unwrap().ends_with(",78,Yes"));
    }

    #[test]
    fn cells_with_commas_and_quotes_are_escaped() {
        let mut emp = SAMPLE_EMPLOYEES[0].clone();
        emp.name = "Smith, Jr.".into();
        emp.role = "He said \"go\"".into();
        let csv = to_csv(&[emp]).unwrap();
        assert_eq!(
            csv.lines().nth(1).unwrap(),
            "EMP001,\"Smith, Jr.\",Engineering,\"He said \"\"go\"\"\",2024-01-15,Active,85,No"
        );
    }

    #[test]
    fn newline_in_cell_is_quoted() {
        assert_eq!(escape_cell("line one\nline two"), "\"line one\nline two\"");
        assert_eq!(escape_cell("plain text"), "plain text");
        assert!(matches!(escape_cell("plain"), Cow::Borrowed(_)));
    }

    #[test]
    fn newline_cell_adds_a_physical_line_but_not_a_record() {
        let mut emp = SAMPLE_EMPLOYEES[0].clone();
        emp.role = "Lead\nDeveloper".into();
        let csv = to_csv(&[emp]).unwrap();
        assert_eq!(csv.split('\n').count(), 3);
        assert!(csv.contains("\"Lead\nDeveloper\""));
    }

    #[test]
    fn output_is_deterministic() {
        let records = SAMPLE_EMPLOYEES.clone();
        assert_eq!(to_csv(&records).unwrap(), to_csv(&records).unwrap());
    }

    #[test]
    fn stats_for_empty_input() {
        let stats = compute_stats(&[]);
        assert_eq!(stats.total, 0);
        assert_eq!(stats.active, 0);
        assert_eq!(stats.inactive, 0);
        assert_eq!(stats.avg_performance, 0.0);
        assert_eq!(stats.per_department.len(), 4);
        assert!(stats.per_department.values().all(|n| *n == 0));
    }

    #[test]
    fn stats_for_two_records() {
        let stats = compute_stats(&two_records());
        assert_eq!(stats.total, 2);
        assert_eq!(stats.active, 1);
        assert_eq!(stats.inactive, 1);
        assert_eq!(stats.avg_performance, 67.5);
        assert_eq!(stats.per_department[&Department::Engineering], 1);
        assert_eq!(stats.per_department[&Department::Marketing], 1);
        assert_eq!(stats.per_department[&Department::HR], 0);
        assert_eq!(stats.per_department[&Department::Sales], 0);
    }

    #[test]
    fn department_keys_follow_display_order() {
        let keys: Vec<_> = compute_stats(&[]).per_department.into_keys().collect();
        assert_eq!(keys, Department::ALL.to_vec());
    }

    #[test]
    fn file_names_carry_scope_and_date() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 7).unwrap();
        assert_eq!(
            ExportScope::Filtered.file_name(date),
            "filtered_employees_2025-03-07.csv"
        );
        assert_eq!(ExportScope::All.file_name(date), "all_employees_2025-03-07.csv");
    }
}
