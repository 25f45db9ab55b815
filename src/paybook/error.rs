use thiserror::Error;

#[derive(Error, Debug)]
pub enum PayrollError {
    #[error("Invalid name: {0:?}")]
    InvalidName(String),

    #[error("Commission rate must be between 0 and 100 (exclusive), got {0}")]
    InvalidCommissionRate(f64),

    #[error("Yearly salary must be a positive amount, got {0}")]
    InvalidSalary(f64),

    #[error("Hours must be a positive count that fits the period total, got {0}")]
    InvalidHours(i64),

    #[error("Sale amount must be positive, got {0}")]
    InvalidSaleAmount(f64),

    #[error("Employee limit must be at least 1, got {0}")]
    InvalidEmployeeLimit(usize),

    #[error("Employee already exists: {0}")]
    DuplicateEmployee(String),

    #[error("Employee limit of {limit} reached")]
    CapacityExceeded { limit: usize },

    #[error("Employee not found: {0}")]
    EmployeeNotFound(String),

    #[error("{name} already logged {hours} hours this pay period (cap is {cap})")]
    HourCapReached { name: String, hours: u32, cap: u32 },

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PayrollError>;
