use crate::store::EmployeeStore;

/// Zeroes hours and sales on every record. Salaries and commission rates are
/// untouched. Returns how many records were reset.
pub fn start_new<S: EmployeeStore>(store: &mut S) -> usize {
    let employees = store.employees_mut();
    for employee in employees.iter_mut() {
        employee.reset_period();
    }
    employees.len()
}
