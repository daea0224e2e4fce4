use crate::commands::{CmdResult, RosterView};
use crate::error::Result;
use crate::export::{compute_stats, ExportScope};
use crate::filter::FilterSpec;
use crate::store::DataStore;

use super::export::resolve_employees;

/// Summary of what an export with the same arguments would contain.
pub fn run<S: DataStore>(
    store: &S,
    view: RosterView,
    scope: ExportScope,
    spec: &FilterSpec,
) -> Result<CmdResult> {
    let employees = resolve_employees(store, view, scope, spec)?;
    Ok(CmdResult::default().with_stats(compute_stats(&employees)))
}
