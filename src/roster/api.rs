//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single entry
//! point for every roster operation, whatever the UI.
//!
//! It dispatches to `commands::*`, fills in ambient inputs (today's date, the
//! configured export directory) and returns `Result<CmdResult>`. It does no
//! business logic and no printing.
//!
//! `RosterApi<S: DataStore>` is generic over storage:
//! - Production: `RosterApi<FileStore>`
//! - Testing: `RosterApi<InMemoryStore>`

use crate::commands;
use crate::config::RosterConfig;
use crate::error::Result;
use crate::export::ExportScope;
use crate::filter::FilterSpec;
use crate::model::{EmployeeDraft, EmployeeUpdate};
use crate::store::DataStore;
use chrono::{Local, NaiveDate};
use std::path::PathBuf;

/// The main API facade for roster operations.
pub struct RosterApi<S: DataStore> {
    store: S,
    paths: commands::RosterPaths,
    config: RosterConfig,
    today: fn() -> NaiveDate,
}

fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

impl<S: DataStore> RosterApi<S> {
    pub fn new(store: S, paths: commands::RosterPaths, config: RosterConfig) -> Self {
        Self {
            store,
            paths,
            config,
            today: local_today,
        }
    }

    /// Overrides the clock used for date validation and export file names.
    pub fn with_clock(mut self, today: fn() -> NaiveDate) -> Self {
        self.today = today;
        self
    }

    pub fn today(&self) -> NaiveDate {
        (self.today)()
    }

    pub fn list_employees(&self, view: RosterView, spec: &FilterSpec) -> Result<CmdResult> {
        commands::list::run(&self.store, view, spec)
    }

    pub fn view_employees<I: AsRef<str>>(&self, ids: &[I]) -> Result<CmdResult> {
        commands::view::run(&self.store, ids)
    }

    pub fn add_employee(&mut self, draft: EmployeeDraft) -> Result<CmdResult> {
        let today = self.today();
        commands::add::run(&mut self.store, draft, today)
    }

    pub fn edit_employee(&mut self, id: &str, update: &EmployeeUpdate) -> Result<CmdResult> {
        let today = self.today();
        commands::edit::run(&mut self.store, id, update, today)
    }

    pub fn archive_employees<I: AsRef<str>>(&mut self, ids: &[I]) -> Result<CmdResult> {
        commands::archive::archive(&mut self.store, ids)
    }

    pub fn restore_employees<I: AsRef<str>>(&mut self, ids: &[I]) -> Result<CmdResult> {
        commands::archive::restore(&mut self.store, ids)
    }

    pub fn export_employees(
        &self,
        view: RosterView,
        scope: ExportScope,
        spec: FilterSpec,
        output: Option<PathBuf>,
    ) -> Result<CmdResult> {
        let request = commands::export::ExportRequest {
            view,
            scope,
            spec,
            output,
            export_dir: self.config.export_dir.clone(),
            today: self.today(),
        };
        commands::export::run(&self.store, &request)
    }

    pub fn stats(
        &self,
        view: RosterView,
        scope: ExportScope,
        spec: &FilterSpec,
    ) -> Result<CmdResult> {
        commands::stats::run(&self.store, view, scope, spec)
    }

    pub fn clear(&mut self) -> Result<CmdResult> {
        commands::clear::run(&mut self.store)
    }

    pub fn seed_if_empty(&mut self) -> Result<bool> {
        commands::init::ensure_seeded(&mut self.store, &self.config)
    }

    pub fn init(&mut self) -> Result<CmdResult> {
        commands::init::run(&mut self.store, &self.paths, &self.config)
    }

    pub fn config(&self, action: ConfigAction) -> Result<CmdResult> {
        commands::config::run(&self.paths, action)
    }

    pub fn settings(&self) -> &RosterConfig {
        &self.config
    }

    pub fn paths(&self) -> &commands::RosterPaths {
        &self.paths
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, ListSummary, MessageLevel, RosterPaths, RosterView};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::Choice;
    use crate::model::{Department, Status};
    use crate::store::memory::InMemoryStore;
    use tempfile::tempdir;

    fn fixed_today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 2, 14).unwrap()
    }

    fn api(dir: &std::path::Path) -> RosterApi<InMemoryStore> {
        let config = RosterConfig {
            export_dir: Some(dir.join("exports")),
            ..Default::default()
        };
        let paths = RosterPaths {
            data_dir: dir.to_path_buf(),
        };
        RosterApi::new(InMemoryStore::new(), paths, config).with_clock(fixed_today)
    }

    fn draft() -> EmployeeDraft {
        EmployeeDraft {
            name: "Alan Turing".into(),
            department: Department::Engineering,
            role: "Researcher".into(),
            joining_date: fixed_today(),
            status: Status::Active,
            performance_score: 99,
        }
    }

    #[test]
    fn add_uses_injected_clock() {
        let dir = tempdir().unwrap();
        let mut api = api(dir.path());
        assert!(api.add_employee(draft()).is_ok());

        let mut future = draft();
        future.joining_date = fixed_today().succ_opt().unwrap();
        assert!(api.add_employee(future).is_err());
    }

    #[test]
    fn seeded_roster_flows_through_list_archive_restore() {
        let dir = tempdir().unwrap();
        let mut api = api(dir.path());
        assert!(api.seed_if_empty().unwrap());

        api.archive_employees(&["EMP003"]).unwrap();
        let active = api
            .list_employees(RosterView::Active, &FilterSpec::default())
            .unwrap();
        assert_eq!(active.listed_employees.len(), 4);

        api.restore_employees(&["EMP003"]).unwrap();
        let spec = FilterSpec {
            status: Choice::Only(Status::Inactive),
            ..Default::default()
        };
        let inactive = api.list_employees(RosterView::Active, &spec).unwrap();
        assert_eq!(inactive.listed_employees[0].id, "EMP003");
    }

    #[test]
    fn export_goes_to_configured_dir_with_stamped_name() {
        let dir = tempdir().unwrap();
        let mut api = api(dir.path());
        api.seed_if_empty().unwrap();
        let result = api
            .export_employees(RosterView::Active, ExportScope::All, FilterSpec::default(), None)
            .unwrap();
        assert_eq!(
            result.export_path.unwrap(),
            dir.path().join("exports").join("all_employees_2025-02-14.csv")
        );
    }
}
