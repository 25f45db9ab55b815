use crate::config::PayrollConfig;
use crate::error::{PayrollError, Result};
use crate::store::EmployeeStore;
use tracing::debug;

use super::helpers::{find_employee, find_employee_mut};

/// Logs hours against an employee and returns their new period total.
///
/// Non-positive hours are refused before the name is looked up, and so are
/// entries too large for the period total.
pub fn log<S: EmployeeStore>(
    store: &mut S,
    config: &PayrollConfig,
    name: &str,
    hours: i64,
) -> Result<u32> {
    let hours = match u32::try_from(hours) {
        Ok(h) if h > 0 => h,
        _ => {
            debug!(employee = %name, hours, "rejected hours entry");
            return Err(PayrollError::InvalidHours(hours));
        }
    };

    let employee = find_employee_mut(store, name)?;
    let total = employee
        .add_hours(hours, config)
        .inspect_err(|err| debug!(employee = %name, error = %err, "hours refused"))?;
    debug!(employee = %name, hours, total, "logged hours");
    Ok(total)
}

pub fn for_employee<S: EmployeeStore>(store: &S, name: &str) -> Result<u32> {
    Ok(find_employee(store, name)?.hours_worked())
}
