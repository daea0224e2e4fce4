use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

/// Wipes the stored roster. Confirmation is the caller's job.
pub fn run<S: DataStore>(store: &mut S) -> Result<CmdResult> {
    let count = store.load_employees()?.len();
    store.clear()?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Cleared {} employees from storage",
        count
    )));
    Ok(result)
}
