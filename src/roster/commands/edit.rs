use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::EmployeeUpdate;
use crate::store::DataStore;
use chrono::NaiveDate;
use tracing::debug;

use super::helpers::{position_of, replace_at};

/// Applies `update` to the employee with `id`. The id and archived flag are kept.
pub fn run<S: DataStore>(
    store: &mut S,
    id: &str,
    update: &EmployeeUpdate,
    today: NaiveDate,
) -> Result<CmdResult> {
    let roster = store.load_employees()?;
    let pos = position_of(&roster, id)?;
    let current = &roster[pos];

    let mut result = CmdResult::default();
    if update.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "Nothing to change for {}",
            current.id
        )));
        return Ok(result);
    }

    let draft = update.merge(current);
    draft.validate(today)?;

    let mut updated = draft.into_employee(current.id.clone());
    updated.archived = current.archived;

    let next = replace_at(&roster, pos, updated.clone());
    store.save_employees(&next)?;
    debug!(id = %updated.id, "employee updated");

    result.add_message(CmdMessage::success(format!(
        "Employee updated ({}): {}",
        updated.id, updated.name
    )));
    Ok(result.with_affected_employees(vec![updated]))
}
