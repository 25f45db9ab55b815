use crate::error::{PayrollError, Result};
use crate::model::{AccountTier, Employee};
use crate::store::EmployeeStore;
use tracing::{debug, info};
use uuid::Uuid;

use super::helpers::validate_name;

pub fn commissioned<S: EmployeeStore>(
    store: &mut S,
    tier: AccountTier,
    name: &str,
    commission_rate: f64,
) -> Result<Uuid> {
    validate_name(name)
        .and_then(|_| {
            if commission_rate > 0.0 && commission_rate < 100.0 {
                Ok(())
            } else {
                Err(PayrollError::InvalidCommissionRate(commission_rate))
            }
        })
        .and_then(|_| admit(store, tier, Employee::commissioned(name, commission_rate)))
        .inspect_err(|err| debug!(employee = %name, error = %err, "hire rejected"))
}

pub fn salaried<S: EmployeeStore>(
    store: &mut S,
    tier: AccountTier,
    name: &str,
    yearly_salary: f64,
) -> Result<Uuid> {
    validate_name(name)
        .and_then(|_| {
            if yearly_salary > 0.0 && yearly_salary.is_finite() {
                Ok(())
            } else {
                Err(PayrollError::InvalidSalary(yearly_salary))
            }
        })
        .and_then(|_| admit(store, tier, Employee::salaried(name, yearly_salary)))
        .inspect_err(|err| debug!(employee = %name, error = %err, "hire rejected"))
}

/// Duplicate check, then capacity, then insert. Nothing is written unless
/// both pass.
fn admit<S: EmployeeStore>(store: &mut S, tier: AccountTier, employee: Employee) -> Result<Uuid> {
    if store.contains(employee.name()) {
        return Err(PayrollError::DuplicateEmployee(employee.name().to_string()));
    }
    if !tier.has_room_for(store.len()) {
        return Err(PayrollError::CapacityExceeded {
            limit: tier.employee_limit(),
        });
    }

    let id = employee.id();
    info!(employee = %employee.name(), kind = %employee.kind(), "hired employee");
    store.insert(employee)?;
    Ok(id)
}
