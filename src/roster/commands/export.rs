use crate::commands::{CmdMessage, CmdResult, RosterView};
use crate::error::{Result, RosterError};
use crate::export::{compute_stats, to_csv, ExportScope};
use crate::filter::{apply, FilterSpec};
use crate::model::Employee;
use crate::store::DataStore;
use chrono::NaiveDate;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct ExportRequest {
    /// Active roster or archived list; the export covers that displayed set.
    pub view: RosterView,
    pub scope: ExportScope,
    pub spec: FilterSpec,
    /// Explicit destination file; wins over `export_dir`.
    pub output: Option<PathBuf>,
    /// Directory for the default, date-stamped file name.
    pub export_dir: Option<PathBuf>,
    pub today: NaiveDate,
}

impl ExportRequest {
    pub fn destination(&self) -> PathBuf {
        match &self.output {
            Some(path) => path.clone(),
            None => self
                .export_dir
                .clone()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(self.scope.file_name(self.today)),
        }
    }
}

/// The employees an export covers: the displayed set for `view`, narrowed by
/// `spec` unless the scope is [`ExportScope::All`].
pub fn resolve_employees<S: DataStore>(
    store: &S,
    view: RosterView,
    scope: ExportScope,
    spec: &FilterSpec,
) -> Result<Vec<Employee>> {
    let displayed = view.select(&store.load_employees()?);
    Ok(match scope {
        ExportScope::Filtered => apply(&displayed, spec),
        ExportScope::All => displayed,
    })
}

pub fn run<S: DataStore>(store: &S, request: &ExportRequest) -> Result<CmdResult> {
    let employees = resolve_employees(store, request.view, request.scope, &request.spec)?;

    let csv = match to_csv(&employees) {
        Ok(csv) => csv,
        Err(RosterError::EmptyExport) => {
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::warning("No employees to export"));
            return Ok(result);
        }
        Err(e) => return Err(e),
    };

    let path = request.destination();
    write_file(&path, &csv)?;
    debug!(path = %path.display(), count = employees.len(), "roster exported");

    let mut result = CmdResult::default().with_stats(compute_stats(&employees));
    result.add_message(CmdMessage::success(format!(
        "Successfully exported {} employees to {}",
        employees.len(),
        path.display()
    )));
    result.export_path = Some(path);
    Ok(result)
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(RosterError::Io)?;
        }
    }
    fs::write(path, content).map_err(RosterError::Io)
}
