use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::DataStore;

use super::helpers::resolve_ids;

pub fn run<S: DataStore, I: AsRef<str>>(store: &S, ids: &[I]) -> Result<CmdResult> {
    let roster = store.load_employees()?;
    let listed = resolve_ids(&roster, ids)?
        .into_iter()
        .map(|pos| roster[pos].clone())
        .collect();
    Ok(CmdResult::default().with_listed_employees(listed))
}
