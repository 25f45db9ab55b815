use paybook::{create_free_account, create_paid_account, Account, EmployeeKind, PayrollError};

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {}, got {}",
        expected,
        actual
    );
}

fn setup() -> Account {
    let mut account = create_paid_account("Acme Corp").unwrap();
    account.hire_salaried("Alice", 2_600.0).unwrap();
    account.hire_commissioned("Bob", 10.0).unwrap();
    account
}

#[test]
fn test_hire_makes_employee_visible() {
    let mut account = create_paid_account("Acme Corp").unwrap();
    for (i, name) in ["Alice", "Bob", "Carol"].iter().enumerate() {
        assert!(!account.is_employee(name));
        account.hire_salaried(name, 40_000.0).unwrap();
        assert!(account.is_employee(name));
        assert_eq!(account.employee_count(), i + 1);
    }
}

#[test]
fn test_second_hire_with_same_name_fails() {
    let mut account = setup();
    assert!(matches!(
        account.hire_salaried("Alice", 1_000.0),
        Err(PayrollError::DuplicateEmployee(_))
    ));
    assert!(matches!(
        account.hire_commissioned("Bob", 20.0),
        Err(PayrollError::DuplicateEmployee(_))
    ));
    assert_eq!(account.employee_count(), 2);
}

#[test]
fn test_free_account_fills_to_its_cap() {
    let mut account = create_free_account("Tiny LLC", 3).unwrap();
    account.hire_salaried("A", 1.0).unwrap();
    account.hire_salaried("B", 1.0).unwrap();
    // at max - 1
    account.hire_commissioned("C", 5.0).unwrap();
    // at max
    assert!(matches!(
        account.hire_commissioned("D", 5.0),
        Err(PayrollError::CapacityExceeded { limit: 3 })
    ));
    assert_eq!(account.employee_count(), 3);
    assert!(!account.is_employee("D"));
}

#[test]
fn test_salaried_hour_cap() {
    let mut account = setup();

    assert_eq!(account.log_hours("Alice", 50).unwrap(), 50);
    // still under the cap before adding, so this lands
    assert_eq!(account.log_hours("Alice", 40).unwrap(), 90);
    assert!(matches!(
        account.log_hours("Alice", 1),
        Err(PayrollError::HourCapReached { .. })
    ));
    assert_eq!(account.hours_for("Alice").unwrap(), 90);
}

#[test]
fn test_commissioned_hours_always_accepted() {
    let mut account = setup();
    for _ in 0..5 {
        account.log_hours("Bob", 40).unwrap();
    }
    assert_eq!(account.hours_for("Bob").unwrap(), 200);
}

#[test]
fn test_pay_amounts() {
    let mut account = setup();
    assert_close(account.pay_for("Alice").unwrap(), 100.0);

    account.log_sale("Bob", 500.0).unwrap();
    assert_close(account.pay_for("Bob").unwrap(), 50.0);
    assert_close(account.total_payroll(), 150.0);

    // salaried pay ignores hours and sales
    account.log_hours("Alice", 10).unwrap();
    account.log_sale("Alice", 9_999.0).unwrap();
    assert_close(account.pay_for("Alice").unwrap(), 100.0);
    assert_eq!(account.sales_for("Alice").unwrap(), 0.0);
}

#[test]
fn test_new_pay_period_resets_accumulators() {
    let mut account = setup();
    account.log_hours("Alice", 80).unwrap();
    account.log_hours("Bob", 30).unwrap();
    account.log_sale("Bob", 500.0).unwrap();

    account.start_new_pay_period();

    for name in ["Alice", "Bob"] {
        assert_eq!(account.hours_for(name).unwrap(), 0);
        assert_eq!(account.sales_for(name).unwrap(), 0.0);
    }
    assert_close(account.pay_for("Alice").unwrap(), 100.0);
    assert_close(account.pay_for("Bob").unwrap(), 0.0);

    account.log_sale("Bob", 200.0).unwrap();
    assert_close(account.pay_for("Bob").unwrap(), 20.0);
    assert_eq!(
        account.employee("Bob").unwrap().kind(),
        EmployeeKind::Commissioned {
            commission_rate: 10.0
        }
    );
}

#[test]
fn test_billing() {
    let mut free = create_free_account("Tiny LLC", 5).unwrap();
    for name in ["A", "B", "C"] {
        free.hire_salaried(name, 1_000.0).unwrap();
    }
    assert_eq!(free.bill_amount(), 30.0);

    let mut paid = create_paid_account("Big Inc").unwrap();
    assert_eq!(paid.bill_amount(), 0.0);
    for i in 0..20 {
        paid.hire_commissioned(&format!("Rep {}", i), 5.0).unwrap();
    }
    assert_eq!(paid.bill_amount(), 0.0);
}

#[test]
fn test_unknown_names() {
    let mut account = setup();
    account.log_sale("Bob", 100.0).unwrap();

    for name in ["Zed", "alice", ""] {
        assert!(matches!(
            account.hours_for(name),
            Err(PayrollError::EmployeeNotFound(_))
        ));
        assert!(matches!(
            account.sales_for(name),
            Err(PayrollError::EmployeeNotFound(_))
        ));
        assert!(matches!(
            account.pay_for(name),
            Err(PayrollError::EmployeeNotFound(_))
        ));
        assert!(matches!(
            account.log_hours(name, 1),
            Err(PayrollError::EmployeeNotFound(_))
        ));
        assert!(matches!(
            account.log_sale(name, 1.0),
            Err(PayrollError::EmployeeNotFound(_))
        ));
    }
}

#[test]
fn test_queries_are_repeatable() {
    let mut account = setup();
    account.log_hours("Bob", 7).unwrap();
    account.log_sale("Bob", 123.0).unwrap();

    let first = (
        account.is_employee("Bob"),
        account.hours_for("Bob").unwrap(),
        account.sales_for("Bob").unwrap(),
        account.pay_for("Bob").unwrap(),
        account.total_payroll(),
    );
    for _ in 0..3 {
        let again = (
            account.is_employee("Bob"),
            account.hours_for("Bob").unwrap(),
            account.sales_for("Bob").unwrap(),
            account.pay_for("Bob").unwrap(),
            account.total_payroll(),
        );
        assert_eq!(first, again);
    }
}

#[test]
fn test_payroll_report_serializes() {
    let mut account = setup();
    account.log_sale("Bob", 500.0).unwrap();

    let report = account.payroll_report();
    assert_eq!(report.stubs.len(), 2);
    assert_close(report.total, account.total_payroll());

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["stubs"][0]["name"], "Alice");
    assert_eq!(json["stubs"][1]["kind"]["type"], "commissioned");
    assert_eq!(json["period"]["number"], 1);
}
