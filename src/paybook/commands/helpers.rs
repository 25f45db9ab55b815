use crate::error::{PayrollError, Result};
use crate::model::Employee;
use crate::store::EmployeeStore;

/// A usable name has at least one non-whitespace character.
pub fn validate_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(PayrollError::InvalidName(name.to_string()));
    }
    Ok(())
}

pub fn find_employee<'a, S: EmployeeStore>(store: &'a S, name: &str) -> Result<&'a Employee> {
    store
        .get(name)
        .ok_or_else(|| PayrollError::EmployeeNotFound(name.to_string()))
}

pub fn find_employee_mut<'a, S: EmployeeStore>(
    store: &'a mut S,
    name: &str,
) -> Result<&'a mut Employee> {
    store
        .get_mut(name)
        .ok_or_else(|| PayrollError::EmployeeNotFound(name.to_string()))
}
