use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;
use tracing::debug;

use super::helpers::resolve_ids;

pub fn archive<S: DataStore, I: AsRef<str>>(store: &mut S, ids: &[I]) -> Result<CmdResult> {
    set_archived(store, ids, true)
}

pub fn restore<S: DataStore, I: AsRef<str>>(store: &mut S, ids: &[I]) -> Result<CmdResult> {
    set_archived(store, ids, false)
}

fn set_archived<S: DataStore, I: AsRef<str>>(
    store: &mut S,
    ids: &[I],
    archived: bool,
) -> Result<CmdResult> {
    let roster = store.load_employees()?;
    let positions = resolve_ids(&roster, ids)?;
    let mut next = roster.clone();
    let mut result = CmdResult::default();
    let verb = if archived { "archived" } else { "restored" };

    for pos in positions {
        let emp = &mut next[pos];
        if emp.archived == archived {
            result.add_message(CmdMessage::warning(format!(
                "{} ({}) is already {}",
                emp.name, emp.id, verb
            )));
            continue;
        }
        emp.archived = archived;
        result.add_message(CmdMessage::success(format!(
            "{} {} successfully ({})",
            emp.name, verb, emp.id
        )));
        result.affected_employees.push(emp.clone());
    }

    if !result.affected_employees.is_empty() {
        store.save_employees(&next)?;
        debug!(count = result.affected_employees.len(), archived, "archive flag changed");
    }

    Ok(result)
}
