use crate::config::RosterConfig;
use crate::export::Stats;
use crate::model::Employee;
use std::path::PathBuf;

pub mod add;
pub mod archive;
pub mod clear;
pub mod config;
pub mod edit;
pub mod export;
pub mod helpers;
pub mod init;
pub mod list;
pub mod stats;
pub mod view;

#[derive(Debug, Clone)]
pub struct RosterPaths {
    pub data_dir: PathBuf,
}

/// Which half of the roster a command looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RosterView {
    /// Employees that are not archived.
    #[default]
    Active,
    /// Archived employees only.
    Archived,
}

impl RosterView {
    pub fn includes(&self, emp: &Employee) -> bool {
        match self {
            RosterView::Active => !emp.archived,
            RosterView::Archived => emp.archived,
        }
    }

    /// The displayed subset of `roster` for this view, in stored order.
    pub fn select(&self, roster: &[Employee]) -> Vec<Employee> {
        roster.iter().filter(|e| self.includes(e)).cloned().collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Counts behind a listing's "X of Y employees" header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListSummary {
    pub view: RosterView,
    pub shown: usize,
    pub displayed: usize,
    pub active_filters: usize,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_employees: Vec<Employee>,
    pub listed_employees: Vec<Employee>,
    pub summary: Option<ListSummary>,
    pub stats: Option<Stats>,
    pub export_path: Option<PathBuf>,
    pub config: Option<RosterConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_employees(mut self, employees: Vec<Employee>) -> Self {
        self.affected_employees = employees;
        self
    }

    pub fn with_listed_employees(mut self, employees: Vec<Employee>) -> Self {
        self.listed_employees = employees;
        self
    }

    pub fn with_summary(mut self, summary: ListSummary) -> Self {
        self.summary = Some(summary);
        self
    }

    pub fn with_stats(mut self, stats: Stats) -> Self {
        self.stats = Some(stats);
        self
    }

    pub fn with_config(mut self, config: RosterConfig) -> Self {
        self.config = Some(config);
        self
    }
}
