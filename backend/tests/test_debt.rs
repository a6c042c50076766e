//! Tests for the Debt model
//!
//! Covers payment capping, settlement epsilon behavior, interest
//! compounding, and the informational remaining-term counter.

use debt_simulator_core_rs::{Debt, SETTLEMENT_EPSILON};

#[test]
fn test_debt_new() {
    let debt = Debt::new("Credit Card".to_string(), 4803.58, 0.12, 1000.0);

    assert_eq!(debt.name(), "Credit Card");
    assert_eq!(debt.balance(), 4803.58);
    assert_eq!(debt.monthly_rate(), 0.12);
    assert_eq!(debt.minimum_payment(), 1000.0);
    assert_eq!(debt.remaining_term(), None);
}

#[test]
fn test_debt_builder_chain() {
    let debt = Debt::new("Car".to_string(), 28146.99, 0.0, 1236.89).with_remaining_term(31);

    assert_eq!(debt.remaining_term(), Some(31));
}

#[test]
fn test_pay_returns_applied_amount() {
    let mut debt = Debt::new("Card".to_string(), 500.0, 0.1, 50.0);

    assert_eq!(debt.pay(200.0), 200.0);
    assert_eq!(debt.pay(400.0), 300.0);
    assert_eq!(debt.balance(), 0.0);
}

#[test]
fn test_pay_sequence_never_goes_negative() {
    let mut debt = Debt::new("Card".to_string(), 123.45, 0.1, 50.0);

    for _ in 0..10 {
        debt.pay(20.0);
        assert!(debt.balance() >= 0.0);
    }
    assert_eq!(debt.balance(), 0.0);
}

#[test]
fn test_settlement_epsilon_boundary() {
    let at_epsilon = Debt::new("A".to_string(), SETTLEMENT_EPSILON, 0.1, 5.0);
    assert!(at_epsilon.is_settled());

    let above_epsilon = Debt::new("B".to_string(), SETTLEMENT_EPSILON * 2.0, 0.1, 5.0);
    assert!(!above_epsilon.is_settled());
}

#[test]
fn test_settled_debt_is_inert() {
    let mut debt = Debt::new("Dust".to_string(), 0.009, 0.50, 100.0);

    // No interest compounds on epsilon-dust; the balance snaps to 0
    assert_eq!(debt.accrue_interest(), 0.0);
    assert_eq!(debt.balance(), 0.0);
    assert_eq!(debt.accrue_interest(), 0.0);
    assert_eq!(debt.balance(), 0.0);
}

#[test]
fn test_interest_compounds_month_over_month() {
    let mut debt = Debt::new("Card".to_string(), 1000.0, 0.10, 0.0);

    let first = debt.accrue_interest();
    let second = debt.accrue_interest();

    assert_eq!(first, 100.0);
    // Second month compounds on the grown balance
    assert!((second - 110.0).abs() < 1e-9);
    assert!((debt.balance() - 1210.0).abs() < 1e-9);
}

#[test]
fn test_remaining_term_counts_down_while_active() {
    let mut debt = Debt::new("Car".to_string(), 1000.0, 0.0, 100.0).with_remaining_term(2);

    debt.accrue_interest();
    debt.accrue_interest();
    debt.accrue_interest();

    // Decrements to zero and stays there; never gates accrual
    assert_eq!(debt.remaining_term(), Some(0));
    assert_eq!(debt.balance(), 1000.0);
}

#[test]
fn test_scenario_json_without_term_field() {
    let json = r#"{"name":"Card","balance":250.0,"monthly_rate":0.05,"minimum_payment":25.0}"#;

    let debt: Debt = serde_json::from_str(json).unwrap();

    assert_eq!(debt.remaining_term(), None);
    assert_eq!(debt.balance(), 250.0);
}
