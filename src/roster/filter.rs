//! # Filter Engine
//!
//! Narrows a roster snapshot down to the employees matching a [`FilterSpec`].
//!
//! A spec has four independent dimensions, combined with AND:
//!
//! | dimension     | inactive when            | matches                                        |
//! |---------------|--------------------------|------------------------------------------------|
//! | `search_text` | empty                    | case-insensitive substring of name, role, department or id |
//! | `department`  | [`Choice::All`]          | exact department                               |
//! | `status`      | [`Choice::All`]          | exact status                                   |
//! | `date_range`  | either bound missing     | `start <= joining_date <= end`                 |
//!
//! Search text is matched literally: it is not trimmed, so `" "` only matches
//! fields containing a space.
//!
//! [`apply`] is a stable filter. It never reorders, never invents records and
//! never touches its input.

use crate::model::{Department, Employee, Status};
use chrono::NaiveDate;
use std::fmt;
use std::str::FromStr;

/// Either the `all` sentinel or one specific value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Choice<T> {
    #[default]
    All,
    Only(T),
}

impl<T: PartialEq> Choice<T> {
    pub fn is_all(&self) -> bool {
        matches!(self, Choice::All)
    }

    pub fn accepts(&self, value: &T) -> bool {
        match self {
            Choice::All => true,
            Choice::Only(wanted) => wanted == value,
        }
    }
}

impl<T: FromStr> FromStr for Choice<T> {
    type Err = T::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            Ok(Choice::All)
        } else {
            s.parse().map(Choice::Only)
        }
    }
}

impl<T: fmt::Display> fmt::Display for Choice<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Choice::All => f.write_str("all"),
            Choice::Only(v) => v.fmt(f),
        }
    }
}

/// Joining-date bounds, both inclusive. Only filters when both are set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    pub fn between(start: NaiveDate, end: NaiveDate) -> Self {
        Self::new(Some(start), Some(end))
    }

    /// Both bounds, if the range is complete.
    pub fn bounds(&self) -> Option<(NaiveDate, NaiveDate)> {
        match (self.start, self.end) {
            (Some(start), Some(end)) => Some((start, end)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterSpec {
    pub search_text: String,
    pub department: Choice<Department>,
    pub status: Choice<Status>,
    pub date_range: Option<DateRange>,
}

impl FilterSpec {
    fn active_bounds(&self) -> Option<(NaiveDate, NaiveDate)> {
        self.date_range.as_ref().and_then(DateRange::bounds)
    }

    /// Whether `emp` satisfies every active predicate. `needle` is the search
    /// text, lowercased once by the caller.
    fn admits(&self, emp: &Employee, needle: &str) -> bool {
        if !needle.is_empty() && !matches_search(emp, needle) {
            return false;
        }
        if !self.department.accepts(&emp.department) || !self.status.accepts(&emp.status) {
            return false;
        }
        match self.active_bounds() {
            Some((start, end)) => start <= emp.joining_date && emp.joining_date <= end,
            None => true,
        }
    }
}

fn matches_search(emp: &Employee, needle: &str) -> bool {
    [
        emp.name.as_str(),
        emp.role.as_str(),
        emp.department.as_str(),
        emp.id.as_str(),
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(needle))
}

/// Returns the employees matching `spec`, in input order.
pub fn apply(records: &[Employee], spec: &FilterSpec) -> Vec<Employee> {
    let needle = spec.search_text.to_lowercase();
    records
        .iter()
        .filter(|emp| spec.admits(emp, &needle))
        .cloned()
        .collect()
}

/// Number of dimensions currently constraining results, 0 to 4.
pub fn count_active(spec: &FilterSpec) -> usize {
    [
        !spec.search_text.is_empty(),
        !spec.department.is_all(),
        !spec.status.is_all(),
        spec.active_bounds().is_some(),
    ]
    .into_iter()
    .filter(|active| *active)
    .count()
}
