//! # Rendering Module
//!
//! Turns `CmdResult` pieces into terminal text. Every `render_*` function returns
//! a `String` so output can be tested without a terminal; the handlers print it.
//!
//! Layout math (column widths, truncation) is Unicode-aware via `unicode-width`.
//! Colors come from `colored`, which switches itself off when stdout is not a
//! terminal or `NO_COLOR` is set.

use chrono::NaiveDate;
use colored::{ColoredString, Colorize};
use roster::api::{CmdMessage, ListSummary, MessageLevel, RosterView};
use roster::export::Stats;
use roster::model::{Department, Employee, Status};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Line width used when the terminal size is unknown.
pub const LINE_WIDTH: usize = 100;
const BAR_CELLS: usize = 10;
const GAP: &str = "  ";

pub fn terminal_width() -> usize {
    console::Term::stdout()
        .size_checked()
        .map(|(_, cols)| cols as usize)
        .unwrap_or(LINE_WIDTH)
}

pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => eprintln!("{}", message.content.red()),
        }
    }
}

fn department_colored(dept: Department) -> ColoredString {
    let s = dept.as_str();
    match dept {
        Department::Engineering => s.blue(),
        Department::Marketing => s.green(),
        Department::HR => s.yellow(),
        Department::Sales => s.magenta(),
    }
}

fn status_colored(status: Status) -> ColoredString {
    match status {
        Status::Active => status.as_str().green(),
        Status::Inactive => status.as_str().red(),
    }
}

/// Colors a score by tier: above 70 is good, above 40 is fair.
fn score_colored(score: u8, text: String) -> ColoredString {
    if score > 70 {
        text.green()
    } else if score > 40 {
        text.yellow()
    } else {
        text.red()
    }
}

pub fn performance_bar(score: u8) -> String {
    let filled = (usize::from(score) * BAR_CELLS + 50) / 100;
    let filled = filled.min(BAR_CELLS);
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_CELLS - filled))
}

pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }
    result
}

fn pad(s: &str, width: usize) -> String {
    let cell = truncate_to_width(s, width);
    let fill = width.saturating_sub(cell.width());
    format!("{}{}", cell, " ".repeat(fill))
}

/// "3 of 5 employees (2 filters active)"
pub fn render_summary(summary: &ListSummary) -> String {
    let title = match summary.view {
        RosterView::Active => "Employee List",
        RosterView::Archived => "Archived Employees",
    };
    let mut line = format!(
        "{}\n{} of {} employees",
        title.bold(),
        summary.shown,
        summary.displayed
    );
    if summary.active_filters > 0 {
        let plural = if summary.active_filters > 1 { "s" } else { "" };
        line.push_str(&format!(
            " {}",
            format!("({} filter{} active)", summary.active_filters, plural).cyan()
        ));
    }
    line.push('\n');
    line
}

const ID_W: usize = 7;
const DEPT_W: usize = 11;
const DATE_W: usize = 10;
const STATUS_W: usize = 8;
const SCORE_W: usize = 5;

/// Renders employees as an aligned table fitted to `line_width`.
pub fn render_table(employees: &[Employee], line_width: usize) -> String {
    if employees.is_empty() {
        return "No employees found.\n".to_string();
    }

    let fixed = ID_W + DEPT_W + DATE_W + STATUS_W + SCORE_W + GAP.len() * 6;
    let flexible = line_width.saturating_sub(fixed).max(20);
    let name_w = flexible / 2;
    let role_w = flexible - name_w;

    let mut out = String::new();
    let header = [
        pad("ID", ID_W),
        pad("Name", name_w),
        pad("Department", DEPT_W),
        pad("Role", role_w),
        pad("Joined", DATE_W),
        pad("Status", STATUS_W),
        pad("Score", SCORE_W),
    ]
    .join(GAP);
    out.push_str(&format!("{}\n", header.trim_end().bold()));

    for emp in employees {
        // Padding is computed on the plain text; ANSI codes have no width.
        let dept_fill = " ".repeat(DEPT_W.saturating_sub(emp.department.as_str().width()));
        let status_fill = " ".repeat(STATUS_W.saturating_sub(emp.status.as_str().width()));
        let score = format!("{:>3}%", emp.performance_score);
        let cells = [
            pad(&emp.id, ID_W),
            pad(&emp.name, name_w),
            format!("{}{}", department_colored(emp.department), dept_fill),
            pad(&emp.role, role_w),
            emp.joining_date.format("%Y-%m-%d").to_string(),
            format!("{}{}", status_colored(emp.status), status_fill),
            score_colored(emp.performance_score, score).to_string(),
        ];
        out.push_str(cells.join(GAP).trim_end());
        out.push('\n');
    }
    out
}

/// Renders employees as detail cards. `today` drives the tenure line.
pub fn render_cards(employees: &[Employee], today: NaiveDate) -> String {
    if employees.is_empty() {
        return "No employees found.\n".to_string();
    }

    let formatter = timeago::Formatter::new();
    let cards: Vec<String> = employees
        .iter()
        .map(|emp| {
            let tenure = (today - emp.joining_date).to_std().unwrap_or_default();
            let marker = if emp.archived {
                "  (archived)".dimmed().to_string()
            } else {
                String::new()
            };
            let mut card = format!("{}  {}{}\n", emp.id.yellow(), emp.name.bold(), marker);
            card.push_str(&format!(
                "  {} · {}\n",
                department_colored(emp.department),
                emp.role
            ));
            card.push_str(&format!(
                "  Joined {} ({})\n",
                emp.joining_date.format("%Y-%m-%d"),
                formatter.convert(tenure).dimmed()
            ));
            card.push_str(&format!("  Status {}\n", status_colored(emp.status)));
            card.push_str(&format!(
                "  Performance {} {}%\n",
                score_colored(emp.performance_score, performance_bar(emp.performance_score)),
                emp.performance_score
            ));
            card
        })
        .collect();
    cards.join("\n")
}

pub fn render_stats(stats: &Stats) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", "Export Preview".bold()));
    out.push_str(&format!("  Total        {}\n", stats.total));
    out.push_str(&format!("  Active       {}\n", stats.active.to_string().green()));
    out.push_str(&format!("  Inactive     {}\n", stats.inactive.to_string().red()));
    out.push_str(&format!("  Avg. score   {:.1}%\n", stats.avg_performance));
    out.push_str(&format!("{}\n", "By department".bold()));
    for (dept, count) in &stats.per_department {
        let label = pad(dept.as_str(), 12);
        out.push_str(&format!("  {}{}\n", label, count));
    }
    out
}
