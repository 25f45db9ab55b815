use crate::error::{PayrollError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "payroll.json";
const DEFAULT_PAY_PERIODS_PER_YEAR: u32 = 26;
const DEFAULT_SALARIED_HOUR_CAP: u32 = 80;
const DEFAULT_PER_EMPLOYEE_FEE: f64 = 10.0;

/// Pay rules shared by every account an office creates.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PayrollConfig {
    /// Salaried pay per period is the yearly salary divided by this.
    #[serde(default = "default_pay_periods")]
    pub pay_periods_per_year: u32,

    /// Salaried employees cannot log more hours once they reach this.
    #[serde(default = "default_hour_cap")]
    pub salaried_hour_cap: u32,

    /// Billed per employee on free accounts.
    #[serde(default = "default_fee")]
    pub per_employee_fee: f64,
}

fn default_pay_periods() -> u32 {
    DEFAULT_PAY_PERIODS_PER_YEAR
}

fn default_hour_cap() -> u32 {
    DEFAULT_SALARIED_HOUR_CAP
}

fn default_fee() -> f64 {
    DEFAULT_PER_EMPLOYEE_FEE
}

impl Default for PayrollConfig {
    fn default() -> Self {
        Self {
            pay_periods_per_year: DEFAULT_PAY_PERIODS_PER_YEAR,
            salaried_hour_cap: DEFAULT_SALARIED_HOUR_CAP,
            per_employee_fee: DEFAULT_PER_EMPLOYEE_FEE,
        }
    }
}

impl PayrollConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: PayrollConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.pay_periods_per_year == 0 {
            return Err(PayrollError::Config(
                "pay_periods_per_year must be at least 1".to_string(),
            ));
        }
        if self.salaried_hour_cap == 0 {
            return Err(PayrollError::Config(
                "salaried_hour_cap must be at least 1".to_string(),
            ));
        }
        if !self.per_employee_fee.is_finite() || self.per_employee_fee < 0.0 {
            return Err(PayrollError::Config(format!(
                "per_employee_fee must be a non-negative amount, got {}",
                self.per_employee_fee
            )));
        }
        Ok(())
    }
}
