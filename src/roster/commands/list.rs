use crate::commands::{CmdResult, ListSummary, RosterView};
use crate::error::Result;
use crate::filter::{apply, count_active, FilterSpec};
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &S, view: RosterView, spec: &FilterSpec) -> Result<CmdResult> {
    let roster = store.load_employees()?;
    let displayed = view.select(&roster);
    let listed = apply(&displayed, spec);

    let summary = ListSummary {
        view,
        shown: listed.len(),
        displayed: displayed.len(),
        active_filters: count_active(spec),
    };

    Ok(CmdResult::default()
        .with_listed_employees(listed)
        .with_summary(summary))
}
