//! Tests for the two-pass payment allocator
//!
//! Mandatory minimums always run first, in input order; surplus is
//! allocated greedily in policy order only when budget remains.

use debt_simulator_core_rs::allocation::allocate_month;
use debt_simulator_core_rs::policy::{AvalanchePolicy, SnowballPolicy};
use debt_simulator_core_rs::Debt;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn two_card_scenario() -> Vec<Debt> {
    vec![
        Debt::new("A".to_string(), 1000.0, 0.10, 50.0),
        Debt::new("B".to_string(), 200.0, 0.05, 20.0),
    ]
}

#[test]
fn test_avalanche_first_month_arithmetic() {
    let mut debts = two_card_scenario();

    let summary = allocate_month(&mut debts, 300.0, &AvalanchePolicy::new());

    // Minimums: A 50, B 20. Surplus 230 goes entirely to A (10% > 5%).
    assert!(approx(summary.mandatory_paid, 70.0));
    assert!(approx(summary.surplus_paid, 230.0));
    assert!(approx(summary.remaining_budget, 0.0));
    assert!(approx(debts[0].balance(), 1000.0 - 50.0 - 230.0_f64.min(950.0)));
    assert!(approx(debts[1].balance(), 200.0 - 20.0));
}

#[test]
fn test_snowball_first_month_arithmetic() {
    let mut debts = two_card_scenario();

    allocate_month(&mut debts, 300.0, &SnowballPolicy::new());

    // Surplus 230 retires B (smallest balance, 180 left), spillover 50 to A
    assert!(approx(debts[1].balance(), 0.0));
    assert!(approx(debts[0].balance(), 1000.0 - 50.0 - 50.0));
}

#[test]
fn test_minimums_paid_even_on_deficit_budget() {
    let mut debts = two_card_scenario();

    let summary = allocate_month(&mut debts, -100.0, &AvalanchePolicy::new());

    // Budget sign is ignored by the mandatory pass
    assert!(approx(summary.mandatory_paid, 70.0));
    assert!(approx(summary.remaining_budget, -170.0));
    assert!(approx(summary.surplus_paid, 0.0));
    assert!(approx(debts[0].balance(), 950.0));
    assert!(approx(debts[1].balance(), 180.0));
}

#[test]
fn test_surplus_never_runs_without_leftover() {
    let mut debts = two_card_scenario();

    // Budget exactly covers the minimums
    let summary = allocate_month(&mut debts, 70.0, &SnowballPolicy::new());

    assert!(approx(summary.surplus_paid, 0.0));
    assert!(approx(summary.remaining_budget, 0.0));
}

#[test]
fn test_surplus_cascades_through_policy_order() {
    let mut debts = vec![
        Debt::new("High".to_string(), 100.0, 0.20, 0.0),
        Debt::new("Mid".to_string(), 100.0, 0.10, 0.0),
        Debt::new("Low".to_string(), 100.0, 0.05, 0.0),
    ];

    let summary = allocate_month(&mut debts, 250.0, &AvalanchePolicy::new());

    // 100 to High, 100 to Mid, remaining 50 to Low
    assert!(approx(debts[0].balance(), 0.0));
    assert!(approx(debts[1].balance(), 0.0));
    assert!(approx(debts[2].balance(), 50.0));
    assert!(approx(summary.surplus_paid, 250.0));
}

#[test]
fn test_leftover_budget_when_everything_settles() {
    let mut debts = vec![Debt::new("Last".to_string(), 80.0, 0.10, 25.0)];

    let summary = allocate_month(&mut debts, 500.0, &SnowballPolicy::new());

    assert!(approx(debts[0].balance(), 0.0));
    assert!(approx(summary.total_paid(), 80.0));
    assert!(approx(summary.remaining_budget, 420.0));
}
