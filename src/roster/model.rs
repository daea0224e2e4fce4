use crate::error::{Result, RosterError};
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const MIN_NAME_LEN: usize = 2;
pub const MIN_ROLE_LEN: usize = 2;
pub const MIN_SCORE: u8 = 1;
pub const MAX_SCORE: u8 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Department {
    Engineering,
    Marketing,
    HR,
    Sales,
}

impl Department {
    /// Every department, in display order.
    pub const ALL: [Department; 4] = [
        Department::Engineering,
        Department::Marketing,
        Department::HR,
        Department::Sales,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Department::Engineering => "Engineering",
            Department::Marketing => "Marketing",
            Department::HR => "HR",
            Department::Sales => "Sales",
        }
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Department {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Department::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                format!(
                    "unknown department '{}' (expected one of: Engineering, Marketing, HR, Sales)",
                    s
                )
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    Active,
    Inactive,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Active => "Active",
            Status::Inactive => "Inactive",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("active") {
            Ok(Status::Active)
        } else if s.eq_ignore_ascii_case("inactive") {
            Ok(Status::Inactive)
        } else {
            Err(format!(
                "unknown status '{}' (expected Active or Inactive)",
                s
            ))
        }
    }
}

/// A single roster entry.
///
/// Field names on disk match the dashboard's storage format (`joiningDate`,
/// `performanceScore`), so existing exports of that data load unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: String,
    pub name: String,
    pub department: Department,
    pub role: String,
    pub joining_date: NaiveDate,
    pub status: Status,
    pub performance_score: u8,
    #[serde(default)]
    pub archived: bool,
}

/// The user-editable fields of an employee, before an id is assigned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeDraft {
    pub name: String,
    pub department: Department,
    pub role: String,
    pub joining_date: NaiveDate,
    pub status: Status,
    pub performance_score: u8,
}

impl EmployeeDraft {
    /// Checks the input rules the add and edit forms enforce.
    ///
    /// Lengths count the text as entered, surrounding spaces included.
    /// `today` is passed in so the future-date rule is testable.
    pub fn validate(&self, today: NaiveDate) -> Result<()> {
        if self.name.chars().count() < MIN_NAME_LEN {
            return Err(RosterError::Validation(format!(
                "Name must be at least {} characters",
                MIN_NAME_LEN
            )));
        }
        if self.role.chars().count() < MIN_ROLE_LEN {
            return Err(RosterError::Validation(format!(
                "Role must be at least {} characters",
                MIN_ROLE_LEN
            )));
        }
        if !(MIN_SCORE..=MAX_SCORE).contains(&self.performance_score) {
            return Err(RosterError::Validation(format!(
                "Score must be between {} and {}",
                MIN_SCORE, MAX_SCORE
            )));
        }
        if self.joining_date > today {
            return Err(RosterError::Validation(
                "Joining date cannot be in the future".to_string(),
            ));
        }
        Ok(())
    }

    pub fn into_employee(self, id: String) -> Employee {
        Employee {
            id,
            name: self.name,
            department: self.department,
            role: self.role,
            joining_date: self.joining_date,
            status: self.status,
            performance_score: self.performance_score,
            archived: false,
        }
    }
}

impl From<&Employee> for EmployeeDraft {
    fn from(emp: &Employee) -> Self {
        Self {
            name: emp.name.clone(),
            department: emp.department,
            role: emp.role.clone(),
            joining_date: emp.joining_date,
            status: emp.status,
            performance_score: emp.performance_score,
        }
    }
}

/// A partial edit. `None` fields keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeUpdate {
    pub name: Option<String>,
    pub department: Option<Department>,
    pub role: Option<String>,
    pub joining_date: Option<NaiveDate>,
    pub status: Option<Status>,
    pub performance_score: Option<u8>,
}

impl EmployeeUpdate {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Merges this update over `current`, producing the draft to validate.
    pub fn merge(&self, current: &Employee) -> EmployeeDraft {
        let base = EmployeeDraft::from(current);
        EmployeeDraft {
            name: self.name.clone().unwrap_or(base.name),
            department: self.department.unwrap_or(base.department),
            role: self.role.clone().unwrap_or(base.role),
            joining_date: self.joining_date.unwrap_or(base.joining_date),
            status: self.status.unwrap_or(base.status),
            performance_score: self.performance_score.unwrap_or(base.performance_score),
        }
    }
}

/// Parses a `YYYY-MM-DD` date.
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| RosterError::InvalidDate(s.into()))
}

/// `(id, name, department, role, (y, m, d), status, score)`
type SampleRow = (
    &'static str,
    &'static str,
    Department,
    &'static str,
    (i32, u32, u32),
    Status,
    u8,
);

fn sample(row: SampleRow) -> Employee {
    let (id, name, department, role, (y, m, d), status, performance_score) = row;
    Employee {
        id: id.to_string(),
        name: name.to_string(),
        department,
        role: role.to_string(),
        joining_date: NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default(),
        status,
        performance_score,
        archived: false,
    }
}

/// The roster a fresh store is seeded with.
pub static SAMPLE_EMPLOYEES: Lazy<Vec<Employee>> = Lazy::new(|| {
    use Department::*;
    use Status::*;
    let rows: [SampleRow; 5] = [
        ("EMP001", "Jon Doe", Engineering, "Senior Developer", (2024, 1, 15), Active, 85),
        ("EMP002", "Jane Smith", Marketing, "Marketing Manager", (2023, 11, 20), Active, 92),
        ("EMP003", "Mike Johnson", HR, "HR Executive", (2024, 3, 10), Inactive, 78),
        ("EMP004", "Sarah Williams", Sales, "Sales Lead", (2023, 8, 5), Active, 88),
        ("EMP005", "David Brown", Engineering, "Junior Developer", (2024, 5, 22), Active, 72),
    ];
    rows.into_iter().map(sample).collect()
});

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
    }

    fn draft() -> EmployeeDraft {
        EmployeeDraft {
            name: "Ada Lovelace".into(),
            department: Department::Engineering,
            role: "Analyst".into(),
            joining_date: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            status: Status::Active,
            performance_score: 90,
        }
    }

    #[test]
    fn serializes_with_dashboard_field_names() {
        let emp = SAMPLE_EMPLOYEES[0].clone();
        let json = serde_json::to_value(&emp).unwrap();
        assert_eq!(json["joiningDate"], "2024-01-15");
        assert_eq!(json["performanceScore"], 85);
        assert_eq!(json["department"], "Engineering");
        assert_eq!(json["archived"], false);
    }

    #[test]
    fn missing_archived_flag_defaults_to_false() {
        let json = r#"{"id":"EMP009","name":"Al","department":"HR","role":"Rep",
            "joiningDate":"2020-01-01","status":"Inactive","performanceScore":40}"#;
        let emp: Employee = serde_json::from_str(json).unwrap();
        assert!(!emp.archived);
        assert_eq!(emp.department, Department::HR);
    }

    #[test]
    fn parses_enums_case_insensitively() {
        assert_eq!("hr".parse::<Department>().unwrap(), Department::HR);
        assert_eq!("SALES".parse::<Department>().unwrap(), Department::Sales);
        assert_eq!("inactive".parse::<Status>().unwrap(), Status::Inactive);
        assert!("Finance".parse::<Department>().is_err());
    }

    #[test]
    fn valid_draft_passes() {
        assert!(draft().validate(today()).is_ok());
    }

    #[test]
    fn rejects_short_name_and_role() {
        let mut d = draft();
        d.name = "A".into();
        assert!(matches!(d.validate(today()), Err(RosterError::Validation(_))));

        let mut d = draft();
        d.role = "x".into();
        assert!(matches!(d.validate(today()), Err(RosterError::Validation(_))));
    }

    #[test]
    fn lengths_count_the_raw_text() {
        let mut d = draft();
        d.role = " x ".into();
        assert!(d.validate(today()).is_ok());
        d.name = "Jó".into();
        assert!(d.validate(today()).is_ok());
    }

    #[test]
    fn rejects_out_of_range_score() {
        for score in [0, 101] {
            let mut d = draft();
            d.performance_score = score;
            assert!(d.validate(today()).is_err(), "score {} accepted", score);
        }
    }

    #[test]
    fn joining_today_is_allowed_but_tomorrow_is_not() {
        let mut d = draft();
        d.joining_date = today();
        assert!(d.validate(today()).is_ok());
        d.joining_date = today().succ_opt().unwrap();
        assert!(d.validate(today()).is_err());
    }

    #[test]
    fn update_merges_over_current_values() {
        let current = SAMPLE_EMPLOYEES[2].clone();
        let update = EmployeeUpdate {
            status: Some(Status::Active),
            performance_score: Some(81),
            ..Default::default()
        };
        let merged = update.merge(&current);
        assert_eq!(merged.name, current.name);
        assert_eq!(merged.status, Status::Active);
        assert_eq!(merged.performance_score, 81);
    }

    #[test]
    fn parse_date_reports_bad_input() {
        assert!(parse_date("2024-02-30").is_err());
        assert_eq!(
            parse_date("2024-02-29").unwrap(),
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
        );
    }
}
