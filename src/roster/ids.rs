//! Employee id generation.
//!
//! Ids look like `EMP001`: a fixed prefix and a zero-padded sequence number of at
//! least three digits. A new id is one past the highest sequence number in use.
//!
//! The store does not enforce uniqueness, so this is the only thing keeping ids
//! distinct. An existing id that does not follow the pattern makes the maximum
//! unknowable; rather than guess, generation fails with
//! [`RosterError::MalformedEmployeeId`] and the caller aborts the add.

use crate::error::{Result, RosterError};
use crate::model::Employee;

pub const ID_PREFIX: &str = "EMP";
const ID_DIGITS: usize = 3;

/// Extracts the sequence number from an id like `EMP042`.
pub fn parse_sequence(id: &str) -> Result<u32> {
    let digits = id
        .strip_prefix(ID_PREFIX)
        .filter(|rest| !rest.is_empty() && rest.chars().all(|c| c.is_ascii_digit()))
        .ok_or_else(|| RosterError::MalformedEmployeeId(id.to_string()))?;
    digits
        .parse()
        .map_err(|_| RosterError::MalformedEmployeeId(id.to_string()))
}

pub fn format_id(sequence: u32) -> String {
    format!("{}{:0width$}", ID_PREFIX, sequence, width = ID_DIGITS)
}

/// Returns the id the next added employee should get.
///
/// Archived employees count: their ids stay reserved.
pub fn next_employee_id(existing: &[Employee]) -> Result<String> {
    let mut max = 0u32;
    for emp in existing {
        max = max.max(parse_sequence(&emp.id)?);
    }
    let next = max
        .checked_add(1)
        .ok_or_else(|| RosterError::Store("employee id sequence exhausted".to_string()))?;
    Ok(format_id(next))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SAMPLE_EMPLOYEES;

    fn with_ids(ids: &[&str]) -> Vec<Employee> {
        ids.iter()
            .map(|id| {
                let mut emp = SAMPLE_EMPLOYEES[0].clone();
                emp.id = id.to_string();
                emp
            })
            .collect()
    }

    #[test]
    fn empty_roster_starts_at_one() {
        assert_eq!(next_employee_id(&[]).unwrap(), "EMP001");
    }

    #[test]
    fn increments_past_the_highest_suffix_not_the_count() {
        let roster = with_ids(&["EMP001", "EMP007", "EMP003"]);
        assert_eq!(next_employee_id(&roster).unwrap(), "EMP008");
    }

    #[test]
    fn archived_ids_stay_reserved() {
        let mut roster = with_ids(&["EMP001", "EMP002"]);
        roster[1].archived = true;
        assert_eq!(next_employee_id(&roster).unwrap(), "EMP003");
    }

    #[test]
    fn grows_beyond_three_digits() {
        let roster = with_ids(&["EMP999"]);
        assert_eq!(next_employee_id(&roster).unwrap(), "EMP1000");
    }

    #[test]
    fn malformed_ids_fail_fast() {
        for bad in ["X12", "EMP", "EMP12a", "emp001", ""] {
            let roster = with_ids(&["EMP001", bad]);
            match next_employee_id(&roster) {
                Err(RosterError::MalformedEmployeeId(id)) => assert_eq!(id, bad),
                other => panic!("expected malformed id error for {:?}, got {:?}", bad, other),
            }
        }
    }
}
