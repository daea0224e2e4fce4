//! # Storage Layer
//!
//! The roster is persisted as a single document: the whole employee list is read
//! at once and written back at once after every mutation. [`DataStore`] is that
//! key-value style contract, so commands never know where the data lives.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage, a pretty-printed JSON array in
//!   `<data dir>/employees.json`.
//! - [`memory::InMemoryStore`]: No persistence, for tests.
//!
//! ## Degrading gracefully
//!
//! A missing, unreadable or malformed data file loads as an empty roster. The
//! problem is logged at `warn` and never reaches the core. Unreadable data is
//! still reported by [`DataStore::has_unreadable_data`] so seeding leaves it
//! alone, and `FileStore` copies it to `employees.json.bak` before the first
//! save replaces it.
//!
//! ## Storage Format
//!
//! ```text
//! <data dir>/
//! ├── employees.json   # JSON array of employees
//! ├── employees.json.bak  # unreadable data kept aside, if any
//! └── config.json      # RosterConfig
//! ```

use crate::error::Result;
use crate::model::Employee;

pub mod fs;
pub mod memory;

/// Abstract interface for roster storage.
pub trait DataStore {
    /// Load the full roster, in stored order.
    fn load_employees(&self) -> Result<Vec<Employee>>;

    /// Replace the stored roster with `employees`.
    fn save_employees(&mut self, employees: &[Employee]) -> Result<()>;

    /// Whether stored data exists that could not be loaded.
    fn has_unreadable_data(&self) -> bool;

    /// Remove all stored data.
    fn clear(&mut self) -> Result<()>;
}
