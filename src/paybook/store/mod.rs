//! # Employee Registry
//!
//! The [`EmployeeStore`] trait is the roster an account keeps its employees in.
//! Commands only talk to the trait, so the account logic does not care how
//! records are held.
//!
//! ## Contract
//!
//! - Records come back in hire order from [`EmployeeStore::employees`].
//! - Names are exact-match keys. [`EmployeeStore::insert`] refuses a name that
//!   is already present and leaves the roster untouched.
//! - Records are never removed. Accumulators are reset in place through
//!   [`EmployeeStore::employees_mut`].
//!
//! ## Implementations
//!
//! - [`memory::InMemoryStore`]: a `Vec` in hire order plus a name index.

use crate::error::Result;
use crate::model::Employee;

pub mod memory;

pub trait EmployeeStore {
    /// Append a record. Fails with `DuplicateEmployee` if the name is taken.
    fn insert(&mut self, employee: Employee) -> Result<()>;

    /// Look up a record by exact name
    fn get(&self, name: &str) -> Option<&Employee>;

    /// Mutable lookup by exact name
    fn get_mut(&mut self, name: &str) -> Option<&mut Employee>;

    /// All records, in hire order
    fn employees(&self) -> &[Employee];

    /// All records, in hire order, for in-place updates
    fn employees_mut(&mut self) -> &mut [Employee];

    fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    fn len(&self) -> usize {
        self.employees().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
