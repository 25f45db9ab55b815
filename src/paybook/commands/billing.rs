use crate::config::PayrollConfig;
use crate::model::AccountTier;
use crate::store::EmployeeStore;

use super::Bill;

/// Service charge for an account.
///
/// Only free accounts are billed, at a flat fee per employee on the roster.
/// Paid accounts owe nothing here.
pub fn bill<S: EmployeeStore>(store: &S, tier: AccountTier, config: &PayrollConfig) -> Bill {
    let employee_count = store.len();
    let rate = match tier {
        AccountTier::Paid => 0.0,
        AccountTier::Free { .. } => config.per_employee_fee,
    };

    Bill {
        tier,
        employee_count,
        rate,
        amount: rate * employee_count as f64,
    }
}

pub fn amount<S: EmployeeStore>(store: &S, tier: AccountTier, config: &PayrollConfig) -> f64 {
    bill(store, tier, config).amount
}
