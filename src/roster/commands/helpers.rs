use crate::error::{Result, RosterError};
use crate::model::Employee;

/// Position of the first employee with `id`.
///
/// Ids are matched case-insensitively so `emp001` finds `EMP001`.
pub fn position_of(roster: &[Employee], id: &str) -> Result<usize> {
    roster
        .iter()
        .position(|e| e.id.eq_ignore_ascii_case(id))
        .ok_or_else(|| RosterError::EmployeeNotFound(id.to_string()))
}

/// Looks up every id, failing on the first unknown one.
pub fn resolve_ids<I: AsRef<str>>(roster: &[Employee], ids: &[I]) -> Result<Vec<usize>> {
    ids.iter().map(|id| position_of(roster, id.as_ref())).collect()
}

/// Replaces the record at `pos`, returning the new roster.
pub fn replace_at(roster: &[Employee], pos: usize, updated: Employee) -> Vec<Employee> {
    roster
        .iter()
        .enumerate()
        .map(|(i, e)| if i == pos { updated.clone() } else { e.clone() })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SAMPLE_EMPLOYEES;

    #[test]
    fn finds_ids_case_insensitively() {
        assert_eq!(position_of(&SAMPLE_EMPLOYEES, "emp003").unwrap(), 2);
    }

    #[test]
    fn unknown_id_is_not_found() {
        let err = resolve_ids(&SAMPLE_EMPLOYEES, &["EMP001", "EMP404"]).unwrap_err();
        assert!(matches!(err, RosterError::EmployeeNotFound(id) if id == "EMP404"));
    }

    #[test]
    fn replace_at_leaves_the_original_untouched() {
        let roster = SAMPLE_EMPLOYEES.clone();
        let mut changed = roster[1].clone();
        changed.name = "Renamed".into();
        let next = replace_at(&roster, 1, changed);
        assert_eq!(next[1].name, "Renamed");
        assert_eq!(roster[1].name, "Jane Smith");
        assert_eq!(next.len(), roster.len());
    }
}
