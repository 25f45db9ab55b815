//! # Account Facade
//!
//! [`Account`] is the public surface of paybook. It owns one company's roster
//! and dispatches every operation to the matching command module; it holds no
//! pay rules of its own.
//!
//! Accounts are created by the [`office`](crate::office) factory, which
//! validates the company name and the tier.
//!
//! ## Failure reporting
//!
//! Every failure is a [`PayrollError`](crate::error::PayrollError) value:
//!
//! - unknown names give `EmployeeNotFound` (queries and mutations alike)
//! - bad input gives the matching `Invalid*` variant
//! - hiring can also fail with `DuplicateEmployee` or `CapacityExceeded`
//! - logging hours for a salaried employee at the cap gives `HourCapReached`
//!
//! A failed operation never changes the account.
//!
//! ## Generic Over EmployeeStore
//!
//! `Account<S: EmployeeStore>` defaults to [`InMemoryStore`]. Any roster that
//! honours the [`EmployeeStore`] contract can be plugged in through
//! [`BusinessOffice::open_account`](crate::office::BusinessOffice::open_account).

use crate::commands::{self, Bill, PayrollReport};
use crate::config::PayrollConfig;
use crate::error::Result;
use crate::model::{AccountTier, Employee, PayPeriod};
use crate::store::memory::InMemoryStore;
use crate::store::EmployeeStore;
use chrono::{DateTime, Utc};
use tracing::info;
use uuid::Uuid;

/// One company's payroll books.
#[derive(Debug)]
pub struct Account<S: EmployeeStore = InMemoryStore> {
    id: Uuid,
    name: String,
    tier: AccountTier,
    created_at: DateTime<Utc>,
    period: PayPeriod,
    config: PayrollConfig,
    store: S,
}

impl<S: EmployeeStore> Account<S> {
    pub(crate) fn new(name: String, tier: AccountTier, config: PayrollConfig, store: S) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            tier,
            created_at: Utc::now(),
            period: PayPeriod::first(),
            config,
            store,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// The company name the account was opened under.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tier(&self) -> AccountTier {
        self.tier
    }

    pub fn is_limited(&self) -> bool {
        self.tier.is_limited()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn config(&self) -> &PayrollConfig {
        &self.config
    }

    pub fn current_period(&self) -> PayPeriod {
        self.period
    }

    // --- Hiring ---

    /// Hires an employee paid `commission_rate` percent of their sales.
    /// Returns the new employee's id.
    pub fn hire_commissioned(&mut self, name: &str, commission_rate: f64) -> Result<Uuid> {
        commands::hire::commissioned(&mut self.store, self.tier, name, commission_rate)
    }

    /// Hires an employee paid a fixed share of `yearly_salary` each period.
    /// Returns the new employee's id.
    pub fn hire_salaried(&mut self, name: &str, yearly_salary: f64) -> Result<Uuid> {
        commands::hire::salaried(&mut self.store, self.tier, name, yearly_salary)
    }

    // --- Roster ---

    pub fn is_employee(&self, name: &str) -> bool {
        self.store.contains(name)
    }

    pub fn employee_count(&self) -> usize {
        self.store.len()
    }

    /// The headcount cap, or [`UNLIMITED_EMPLOYEES`](crate::model::UNLIMITED_EMPLOYEES)
    /// for paid accounts.
    pub fn employee_limit(&self) -> usize {
        self.tier.employee_limit()
    }

    /// The headcount cap, if there is one.
    pub fn capacity(&self) -> Option<usize> {
        self.tier.capacity()
    }

    pub fn employee(&self, name: &str) -> Option<&Employee> {
        self.store.get(name)
    }

    /// Every employee, in hire order.
    pub fn employees(&self) -> &[Employee] {
        self.store.employees()
    }

    // --- Hours and sales ---

    /// Returns the employee's hours for the period after logging.
    pub fn log_hours(&mut self, name: &str, hours: i64) -> Result<u32> {
        commands::hours::log(&mut self.store, &self.config, name, hours)
    }

    pub fn hours_for(&self, name: &str) -> Result<u32> {
        commands::hours::for_employee(&self.store, name)
    }

    /// Returns the employee's sales for the period after logging.
    pub fn log_sale(&mut self, name: &str, amount: f64) -> Result<f64> {
        commands::sales::log(&mut self.store, name, amount)
    }

    pub fn sales_for(&self, name: &str) -> Result<f64> {
        commands::sales::for_employee(&self.store, name)
    }

    // --- Pay ---

    pub fn pay_for(&self, name: &str) -> Result<f64> {
        commands::pay::for_employee(&self.store, &self.config, name)
    }

    pub fn total_payroll(&self) -> f64 {
        commands::pay::total(&self.store, &self.config)
    }

    pub fn payroll_report(&self) -> PayrollReport {
        commands::pay::report(&self.store, &self.config, self.period)
    }

    /// Closes the current period: hours and sales go back to zero for
    /// everyone. Returns the new period.
    pub fn start_new_pay_period(&mut self) -> PayPeriod {
        let reset = commands::period::start_new(&mut self.store);
        self.period = self.period.next();
        info!(
            account = %self.name,
            period = self.period.number,
            employees = reset,
            "started new pay period"
        );
        self.period
    }

    // --- Billing ---

    pub fn bill_amount(&self) -> f64 {
        commands::billing::amount(&self.store, self.tier, &self.config)
    }

    pub fn bill(&self) -> Bill {
        commands::billing::bill(&self.store, self.tier, &self.config)
    }
}
