//! Account factory.
//!
//! A [`BusinessOffice`] opens accounts under one set of pay rules. The free
//! functions [`create_paid_account`] and [`create_free_account`] use the
//! default rules.

use crate::api::Account;
use crate::commands::helpers::validate_name;
use crate::config::PayrollConfig;
use crate::error::{PayrollError, Result};
use crate::model::AccountTier;
use crate::store::memory::InMemoryStore;
use crate::store::EmployeeStore;
use tracing::{debug, info};

#[derive(Debug, Clone, Default)]
pub struct BusinessOffice {
    config: PayrollConfig,
}

impl BusinessOffice {
    pub fn new() -> Self {
        Self::default()
    }

    /// An office whose accounts follow `config`. The config is checked once
    /// here.
    pub fn with_config(config: PayrollConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &PayrollConfig {
        &self.config
    }

    /// Opens an account with no headcount cap.
    pub fn create_paid_account(&self, name: &str) -> Result<Account> {
        self.open_account(name, AccountTier::Paid, InMemoryStore::new())
    }

    /// Opens an account capped at `max_employees`, which must be at least 1.
    pub fn create_free_account(&self, name: &str, max_employees: usize) -> Result<Account> {
        AccountTier::free(max_employees)
            .inspect_err(|err| debug!(account = %name, error = %err, "account rejected"))
            .and_then(|tier| self.open_account(name, tier, InMemoryStore::new()))
    }

    /// Opens an account on a caller-supplied roster.
    pub fn open_account<S: EmployeeStore>(
        &self,
        name: &str,
        tier: AccountTier,
        store: S,
    ) -> Result<Account<S>> {
        validate_name(name)
            .inspect_err(|err| debug!(account = %name, error = %err, "account rejected"))?;
        if let AccountTier::Free { max_employees } = tier {
            AccountTier::free(max_employees)?;
        }
        check_roster(&store, tier)
            .inspect_err(|err| debug!(account = %name, error = %err, "account rejected"))?;

        info!(account = %name, tier = ?tier, "opened account");
        Ok(Account::new(
            name.to_string(),
            tier,
            self.config.clone(),
            store,
        ))
    }
}

/// A supplied roster must already satisfy what hiring enforces: unique
/// names and a headcount within the tier's cap.
fn check_roster<S: EmployeeStore>(store: &S, tier: AccountTier) -> Result<()> {
    for employee in store.employees() {
        let resolved = store.get(employee.name()).map(|e| e.id());
        if resolved != Some(employee.id()) {
            return Err(PayrollError::DuplicateEmployee(employee.name().to_string()));
        }
    }
    if let Some(limit) = tier.capacity() {
        if store.len() > limit {
            return Err(PayrollError::CapacityExceeded { limit });
        }
    }
    Ok(())
}

/// Opens a paid (unlimited) account with the default pay rules.
pub fn create_paid_account(name: &str) -> Result<Account> {
    BusinessOffice::new().create_paid_account(name)
}

/// Opens a free account capped at `max_employees`, with the default pay rules.
pub fn create_free_account(name: &str, max_employees: usize) -> Result<Account> {
    BusinessOffice::new().create_free_account(name, max_employees)
}
