//! Avalanche Policy
//!
//! Directs surplus budget to the highest-interest-rate debt first.
//!
//! # Behavior
//!
//! - Orders active debts by descending `monthly_rate`
//! - Ties keep original input order (stable sort)
//! - Mathematically optimal: minimizes total interest paid
//!
//! # Use Case
//!
//! - Default strategy when the goal is the cheapest payoff
//! - Baseline for comparing the interest cost of snowball

use super::PayoffPolicy;
use crate::models::debt::Debt;

/// Avalanche policy: highest monthly rate first
///
/// # Example
///
/// ```
/// use debt_simulator_core_rs::policy::{AvalanchePolicy, PayoffPolicy};
/// use debt_simulator_core_rs::Debt;
///
/// let debts = vec![
///     Debt::new("Low".to_string(), 1000.0, 0.05, 50.0),
///     Debt::new("High".to_string(), 1000.0, 0.12, 50.0),
/// ];
///
/// let policy = AvalanchePolicy::new();
/// assert_eq!(policy.order_active(&debts), vec![1, 0]);
/// ```
pub struct AvalanchePolicy;

impl AvalanchePolicy {
    /// Create new avalanche policy
    pub fn new() -> Self {
        Self
    }
}

impl Default for AvalanchePolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl PayoffPolicy for AvalanchePolicy {
    fn order_active(&self, debts: &[Debt]) -> Vec<usize> {
        let mut order: Vec<usize> = (0..debts.len())
            .filter(|&i| !debts[i].is_settled())
            .collect();
        // Stable sort: equal rates keep input order
        order.sort_by(|&a, &b| debts[b].monthly_rate().total_cmp(&debts[a].monthly_rate()));
        order
    }

    fn name(&self) -> &'static str {
        "avalanche"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orders_by_descending_rate() {
        let debts = vec![
            Debt::new("A".to_string(), 500.0, 0.02, 10.0),
            Debt::new("B".to_string(), 500.0, 0.12, 10.0),
            Debt::new("C".to_string(), 500.0, 0.07, 10.0),
        ];

        let order = AvalanchePolicy::new().order_active(&debts);

        assert_eq!(order, vec![1, 2, 0]);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let debts = vec![
            Debt::new("First".to_string(), 900.0, 0.12, 10.0),
            Debt::new("Second".to_string(), 100.0, 0.12, 10.0),
            Debt::new("Third".to_string(), 500.0, 0.12, 10.0),
        ];

        let order = AvalanchePolicy::new().order_active(&debts);

        assert_eq!(order, vec![0, 1, 2]);
    }

    #[test]
    fn test_settled_debts_excluded() {
        let mut debts = vec![
            Debt::new("A".to_string(), 500.0, 0.15, 10.0),
            Debt::new("B".to_string(), 500.0, 0.05, 10.0),
        ];
        debts[0].pay(500.0);

        let order = AvalanchePolicy::new().order_active(&debts);

        assert_eq!(order, vec![1]);
    }

    #[test]
    fn test_empty_set() {
        let order = AvalanchePolicy::new().order_active(&[]);
        assert!(order.is_empty());
    }
}
