use super::EmployeeStore;
use crate::error::{PayrollError, Result};
use crate::model::Employee;
use std::collections::HashMap;

/// Roster held in memory: records in hire order plus a name → position index.
#[derive(Debug, Default, Clone)]
pub struct InMemoryStore {
    employees: Vec<Employee>,
    by_name: HashMap<String, usize>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EmployeeStore for InMemoryStore {
    fn insert(&mut self, employee: Employee) -> Result<()> {
        if self.by_name.contains_key(employee.name()) {
            return Err(PayrollError::DuplicateEmployee(employee.name().to_string()));
        }
        self.by_name
            .insert(employee.name().to_string(), self.employees.len());
        self.employees.push(employee);
        Ok(())
    }

    fn get(&self, name: &str) -> Option<&Employee> {
        self.by_name
            .get(name)
            .and_then(|&pos| self.employees.get(pos))
    }

    fn get_mut(&mut self, name: &str) -> Option<&mut Employee> {
        let pos = *self.by_name.get(name)?;
        self.employees.get_mut(pos)
    }

    fn employees(&self) -> &[Employee] {
        &self.employees
    }

    fn employees_mut(&mut self) -> &mut [Employee] {
        &mut self.employees
    }
}

/// Builds a roster from existing records without the uniqueness check.
///
/// If two records share a name, lookups resolve to the one that came last.
impl FromIterator<Employee> for InMemoryStore {
    fn from_iter<I: IntoIterator<Item = Employee>>(iter: I) -> Self {
        let employees: Vec<Employee> = iter.into_iter().collect();
        let by_name = employees
            .iter()
            .enumerate()
            .map(|(pos, e)| (e.name().to_string(), pos))
            .collect();
        Self { employees, by_name }
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: InMemoryStore,
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
            }
        }

        pub fn with_salaried(mut self, name: &str, yearly_salary: f64) -> Self {
            self.store
                .insert(Employee::salaried(name, yearly_salary))
                .unwrap();
            self
        }

        pub fn with_commissioned(mut self, name: &str, commission_rate: f64) -> Self {
            self.store
                .insert(Employee::commissioned(name, commission_rate))
                .unwrap();
            self
        }

        /// Adds `count` salaried employees named "Worker 1", "Worker 2", ...
        pub fn with_workers(mut self, count: usize) -> Self {
            for i in 0..count {
                let name = format!("Worker {}", i + 1);
                self = self.with_salaried(&name, 26_000.0);
            }
            self
        }
    }
}
