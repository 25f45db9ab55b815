//! # Commands
//!
//! Business rules for an account, one module per concern. Every function takes
//! the roster (any [`EmployeeStore`](crate::store::EmployeeStore)) plus whatever
//! account settings it needs, and returns plain Rust values. Nothing here
//! knows about the [`Account`](crate::api::Account) facade.

use crate::model::{AccountTier, EmployeeKind, PayPeriod};
use serde::Serialize;
use uuid::Uuid;

pub mod billing;
pub mod helpers;
pub mod hire;
pub mod hours;
pub mod pay;
pub mod period;
pub mod sales;

/// What one employee is owed for the current period.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PayStub {
    pub employee_id: Uuid,
    pub name: String,
    pub kind: EmployeeKind,
    pub hours_worked: u32,
    pub sales_amount: f64,
    pub pay: f64,
}

/// Pay stubs for the whole roster, in hire order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PayrollReport {
    pub period: PayPeriod,
    pub stubs: Vec<PayStub>,
    pub total: f64,
}

/// What the account holder owes for using the service.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bill {
    pub tier: AccountTier,
    pub employee_count: usize,
    pub rate: f64,
    pub amount: f64,
}
