//! # Paybook Architecture
//!
//! Paybook is an **in-memory payroll bookkeeping library**. A business opens an
//! account, hires salaried or commissioned employees under it, logs their hours
//! and sales, and asks what everyone is owed and what the account is billed.
//! Nothing is persisted: an account lives as long as the value that holds it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Factory (office.rs)                                        │
//! │  - Validates the company name and tier, opens accounts      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Account: thin facade, one method per operation           │
//! │  - Holds tier, pay period and config; no rules of its own   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Hiring checks, hour and sale logging, pay, billing       │
//! │  - Operates on any EmployeeStore, returns Rust types        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Registry (store/)                                          │
//! │  - EmployeeStore trait, InMemoryStore (hire order + index)  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Pay Rules
//!
//! - Salaried: `yearly_salary / 26` per period, whatever the hours or sales.
//!   Hours are refused once the period total has reached 80.
//! - Commissioned: `commission_rate / 100 * sales` for the period. No hour cap.
//! - Free accounts are billed 10.0 per employee; paid accounts are billed
//!   nothing.
//!
//! The constants live in [`config::PayrollConfig`] and can be changed per
//! [`office::BusinessOffice`].
//!
//! ## Errors
//!
//! Nothing panics and nothing is signalled with magic numbers. Every failure is
//! a [`error::PayrollError`] variant, so callers can tell an unknown employee
//! from a full account from bad input.
//!
//! ## Logging
//!
//! The library emits [`tracing`] events (hires, pay-period changes, rejected
//! operations) and leaves installing a subscriber to the application.
//!
//! ## Module Overview
//!
//! - [`office`]: Account factory
//! - [`api`]: The `Account` facade
//! - [`commands`]: Business rules for each operation
//! - [`store`]: Employee registry abstraction and the in-memory roster
//! - [`model`]: Core data types (`Employee`, `EmployeeKind`, `AccountTier`)
//! - [`config`]: Pay rule constants
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod office;
pub mod store;

pub use api::Account;
pub use error::{PayrollError, Result};
pub use model::{AccountTier, Employee, EmployeeKind, PayPeriod, UNLIMITED_EMPLOYEES};
pub use office::{create_free_account, create_paid_account, BusinessOffice};
