use crate::config::PayrollConfig;
use crate::error::{PayrollError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Sentinel returned by `employee_limit()` for accounts without a cap.
pub const UNLIMITED_EMPLOYEES: usize = usize::MAX;

/// How an employee is paid. Fixed at hire time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EmployeeKind {
    Salaried { yearly_salary: f64 },
    Commissioned { commission_rate: f64 },
}

impl EmployeeKind {
    pub fn label(&self) -> &'static str {
        match self {
            EmployeeKind::Salaried { .. } => "salaried",
            EmployeeKind::Commissioned { .. } => "commissioned",
        }
    }
}

impl fmt::Display for EmployeeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Whether an account is paid (no cap) or free (capped headcount).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "tier", rename_all = "snake_case")]
pub enum AccountTier {
    Paid,
    Free { max_employees: usize },
}

impl AccountTier {
    /// A capped tier. Zero is not a usable cap.
    pub fn free(max_employees: usize) -> Result<Self> {
        if max_employees == 0 {
            return Err(PayrollError::InvalidEmployeeLimit(max_employees));
        }
        Ok(AccountTier::Free { max_employees })
    }

    pub fn is_limited(&self) -> bool {
        matches!(self, AccountTier::Free { .. })
    }

    pub fn capacity(&self) -> Option<usize> {
        match self {
            AccountTier::Paid => None,
            AccountTier::Free { max_employees } => Some(*max_employees),
        }
    }

    pub fn employee_limit(&self) -> usize {
        self.capacity().unwrap_or(UNLIMITED_EMPLOYEES)
    }

    /// True when one more employee fits.
    pub fn has_room_for(&self, current: usize) -> bool {
        match self.capacity() {
            None => true,
            Some(max) => current < max,
        }
    }
}

/// The pay period an account is currently accumulating into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayPeriod {
    pub number: u32,
    pub started_at: DateTime<Utc>,
}

impl PayPeriod {
    pub fn first() -> Self {
        Self {
            number: 1,
            started_at: Utc::now(),
        }
    }

    pub fn next(&self) -> Self {
        Self {
            number: self.number.saturating_add(1),
            started_at: Utc::now(),
        }
    }
}

/// One worker on an account's roster.
///
/// The name is the lookup key and never changes after hire. `hours_worked` and
/// `sales_amount` accumulate over the current pay period only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    id: Uuid,
    name: String,
    hired_at: DateTime<Utc>,
    hours_worked: u32,
    sales_amount: f64,
    kind: EmployeeKind,
}

impl Employee {
    pub fn new(name: impl Into<String>, kind: EmployeeKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            hired_at: Utc::now(),
            hours_worked: 0,
            sales_amount: 0.0,
            kind,
        }
    }

    pub fn salaried(name: impl Into<String>, yearly_salary: f64) -> Self {
        Self::new(name, EmployeeKind::Salaried { yearly_salary })
    }

    pub fn commissioned(name: impl Into<String>, commission_rate: f64) -> Self {
        Self::new(name, EmployeeKind::Commissioned { commission_rate })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn hired_at(&self) -> DateTime<Utc> {
        self.hired_at
    }

    pub fn hours_worked(&self) -> u32 {
        self.hours_worked
    }

    pub fn sales_amount(&self) -> f64 {
        self.sales_amount
    }

    pub fn kind(&self) -> EmployeeKind {
        self.kind
    }

    /// Exact, case-sensitive comparison against the stored name.
    pub fn matches_name(&self, name: &str) -> bool {
        self.name == name
    }

    /// Adds hours to the current period and returns the new total.
    ///
    /// Salaried employees are refused once they are at or above the hour cap.
    /// The cap is checked before adding, so a single large entry may carry
    /// the total past it.
    pub fn add_hours(&mut self, hours: u32, config: &PayrollConfig) -> Result<u32> {
        if let EmployeeKind::Salaried { .. } = self.kind {
            if self.hours_worked >= config.salaried_hour_cap {
                return Err(PayrollError::HourCapReached {
                    name: self.name.clone(),
                    hours: self.hours_worked,
                    cap: config.salaried_hour_cap,
                });
            }
        }
        self.hours_worked = self
            .hours_worked
            .checked_add(hours)
            .ok_or(PayrollError::InvalidHours(i64::from(hours)))?;
        Ok(self.hours_worked)
    }

    /// Adds a sale and returns the new period total. Salaried pay ignores
    /// sales, so their total stays at zero.
    pub fn add_sale(&mut self, amount: f64) -> f64 {
        if let EmployeeKind::Commissioned { .. } = self.kind {
            self.sales_amount += amount;
        }
        self.sales_amount
    }

    /// Pay owed for the current period.
    pub fn total_pay(&self, config: &PayrollConfig) -> f64 {
        match self.kind {
            EmployeeKind::Salaried { yearly_salary } => {
                yearly_salary / f64::from(config.pay_periods_per_year)
            }
            EmployeeKind::Commissioned { commission_rate } => {
                commission_rate / 100.0 * self.sales_amount
            }
        }
    }

    pub(crate) fn reset_period(&mut self) {
        self.hours_worked = 0;
        self.sales_amount = 0.0;
    }
}
