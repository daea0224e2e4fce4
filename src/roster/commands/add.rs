use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::ids::next_employee_id;
use crate::model::EmployeeDraft;
use crate::store::DataStore;
use chrono::NaiveDate;
use tracing::debug;

pub fn run<S: DataStore>(
    store: &mut S,
    draft: EmployeeDraft,
    today: NaiveDate,
) -> Result<CmdResult> {
    draft.validate(today)?;

    let roster = store.load_employees()?;
    let id = next_employee_id(&roster)?;
    let employee = draft.into_employee(id);

    let mut next = roster;
    next.push(employee.clone());
    store.save_employees(&next)?;
    debug!(id = %employee.id, "employee added");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Employee added ({}): {}",
        employee.id, employee.name
    )));
    Ok(result.with_affected_employees(vec![employee]))
}
