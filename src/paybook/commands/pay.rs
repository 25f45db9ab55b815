use crate::config::PayrollConfig;
use crate::error::Result;
use crate::model::PayPeriod;
use crate::store::EmployeeStore;

use super::helpers::find_employee;
use super::{PayStub, PayrollReport};

pub fn for_employee<S: EmployeeStore>(
    store: &S,
    config: &PayrollConfig,
    name: &str,
) -> Result<f64> {
    Ok(find_employee(store, name)?.total_pay(config))
}

/// Sum of every employee's pay for the current period. Zero when the roster
/// is empty.
pub fn total<S: EmployeeStore>(store: &S, config: &PayrollConfig) -> f64 {
    store.employees().iter().map(|e| e.total_pay(config)).sum()
}

pub fn report<S: EmployeeStore>(
    store: &S,
    config: &PayrollConfig,
    period: PayPeriod,
) -> PayrollReport {
    let stubs: Vec<PayStub> = store
        .employees()
        .iter()
        .map(|e| PayStub {
            employee_id: e.id(),
            name: e.name().to_string(),
            kind: e.kind(),
            hours_worked: e.hours_worked(),
            sales_amount: e.sales_amount(),
            pay: e.total_pay(config),
        })
        .collect();
    let total: f64 = stubs.iter().map(|s| s.pay).sum();

    PayrollReport {
        period,
        stubs,
        total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::sales;
    use crate::error::PayrollError;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    #[test]
    fn salaried_pay_is_a_fraction_of_salary() {
        let store = StoreFixture::new().with_salaried("Alice", 2_600.0).store;
        let pay = for_employee(&store, &PayrollConfig::default(), "Alice").unwrap();
        assert_close(pay, 100.0);
    }

    #[test]
    fn commissioned_pay_follows_sales() {
        let config = PayrollConfig::default();
        let mut store = StoreFixture::new().with_commissioned("Bob", 10.0).store;
        assert_close(for_employee(&store, &config, "Bob").unwrap(), 0.0);

        sales::log(&mut store, "Bob", 500.0).unwrap();
        assert_close(for_employee(&store, &config, "Bob").unwrap(), 50.0);
    }

    #[test]
    fn unknown_employee_has_no_pay() {
        let store = InMemoryStore::new();
        assert!(matches!(
            for_employee(&store, &PayrollConfig::default(), "Nobody"),
            Err(PayrollError::EmployeeNotFound(_))
        ));
    }

    #[test]
    fn total_sums_every_employee() {
        let config = PayrollConfig::default();
        assert_eq!(total(&InMemoryStore::new(), &config), 0.0);

        let mut store = StoreFixture::new()
            .with_salaried("Alice", 2_600.0)
            .with_commissioned("Bob", 10.0)
            .with_commissioned("Carol", 50.0)
            .store;
        sales::log(&mut store, "Bob", 500.0).unwrap();
        sales::log(&mut store, "Carol", 20.0).unwrap();

        assert_close(total(&store, &config), 100.0 + 50.0 + 10.0);
    }

    #[test]
    fn report_lists_stubs_in_hire_order() {
        let config = PayrollConfig::default();
        let mut store = StoreFixture::new()
            .with_commissioned("Bob", 10.0)
            .with_salaried("Alice", 2_600.0)
            .store;
        sales::log(&mut store, "Bob", 500.0).unwrap();

        let period = PayPeriod::first();
        let report = report(&store, &config, period);

        assert_eq!(report.period, period);
        let names: Vec<&str> = report.stubs.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Bob", "Alice"]);
        assert_close(report.stubs[0].pay, 50.0);
        assert_eq!(report.stubs[0].sales_amount, 500.0);
        assert_close(report.total, total(&store, &config));
    }
}
