use crate::error::{PayrollError, Result};
use crate::store::EmployeeStore;
use tracing::debug;

use super::helpers::{find_employee, find_employee_mut};

/// Records a sale and returns the employee's new period total.
///
/// Salaried employees accept the call but their total stays at zero.
pub fn log<S: EmployeeStore>(store: &mut S, name: &str, amount: f64) -> Result<f64> {
    if !amount.is_finite() || amount <= 0.0 {
        debug!(employee = %name, amount, "rejected non-positive sale");
        return Err(PayrollError::InvalidSaleAmount(amount));
    }

    let employee = find_employee_mut(store, name)?;
    let total = employee.add_sale(amount);
    debug!(employee = %name, amount, total, "logged sale");
    Ok(total)
}

pub fn for_employee<S: EmployeeStore>(store: &S, name: &str) -> Result<f64> {
    Ok(find_employee(store, name)?.sales_amount())
}
