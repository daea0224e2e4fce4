use super::DataStore;
use crate::error::Result;
use crate::model::Employee;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    employees: Vec<Employee>,
    saves: usize,
    unreadable: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// How many times the roster has been written.
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl DataStore for InMemoryStore {
    fn load_employees(&self) -> Result<Vec<Employee>> {
        Ok(self.employees.clone())
    }

    fn save_employees(&mut self, employees: &[Employee]) -> Result<()> {
        self.employees = employees.to_vec();
        self.saves += 1;
        self.unreadable = false;
        Ok(())
    }

    fn has_unreadable_data(&self) -> bool {
        self.unreadable
    }

    fn clear(&mut self) -> Result<()> {
        self.employees.clear();
        self.unreadable = false;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{Department, Status, SAMPLE_EMPLOYEES};
    use chrono::NaiveDate;

    pub struct StoreFixture {
        pub store: InMemoryStore,
        roster: Vec<Employee>,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
                roster: Vec::new(),
            }
        }

        /// The five sample employees, EMP001..EMP005.
        pub fn with_samples(mut self) -> Self {
            self.roster.extend(SAMPLE_EMPLOYEES.iter().cloned());
            self.sync()
        }

        pub fn with_employee(
            mut self,
            id: &str,
            name: &str,
            department: Department,
            status: Status,
        ) -> Self {
            self.roster.push(Employee {
                id: id.to_string(),
                name: name.to_string(),
                department,
                role: "Staff".to_string(),
                joining_date: NaiveDate::from_ymd_opt(2022, 6, 1).unwrap(),
                status,
                performance_score: 60,
                archived: false,
            });
            self.sync()
        }

        pub fn with_archived(mut self, id: &str, name: &str) -> Self {
            self = self.with_employee(id, name, Department::Sales, Status::Inactive);
            if let Some(last) = self.roster.last_mut() {
                last.archived = true;
            }
            self.sync()
        }

        /// An empty load backed by data that failed to parse.
        pub fn with_unreadable_data(mut self) -> Self {
            self.roster.clear();
            self = self.sync();
            self.store.unreadable = true;
            self
        }

        fn sync(mut self) -> Self {
            self.store.save_employees(&self.roster).unwrap();
            self.store.saves = 0;
            self
        }
    }
}
