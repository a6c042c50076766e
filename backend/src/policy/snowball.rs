//! Snowball Policy
//!
//! Directs surplus budget to the smallest-balance debt first.
//!
//! # Behavior
//!
//! - Orders active debts by ascending `balance`
//! - Ties keep original input order (stable sort)
//! - Retires individual debts as early as possible; typically pays more
//!   total interest than avalanche on the same input
//!
//! # Use Case
//!
//! - Strategy for users motivated by a quickly shrinking debt count

use super::PayoffPolicy;
use crate::models::debt::Debt;

/// Snowball policy: smallest balance first
///
/// # Example
///
/// ```
/// use debt_simulator_core_rs::policy::{PayoffPolicy, SnowballPolicy};
/// use debt_simulator_core_rs::Debt;
///
/// let debts = vec![
///     Debt::new("Big".to_string(), 9000.0, 0.12, 50.0),
///     Debt::new("Small".to_string(), 300.0, 0.05, 50.0),
/// ];
///
/// let policy = SnowballPolicy::new();
/// assert_eq!(policy.order_active(&debts), vec![1, 0]);
/// ```
pub struct SnowballPolicy;

impl SnowballPolicy {
    /// Create new snowball policy
    pub fn new() -> Self {
        Self
    }
}

impl Default for SnowballPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl PayoffPolicy for SnowballPolicy {
    fn order_active(&self, debts: &[Debt]) -> Vec<usize> {
        let mut order: Vec<usize> = (0..debts.len())
            .filter(|&i| !debts[i].is_settled())
            .collect();
        // Stable sort: equal balances keep input order
        order.sort_by(|&a, &b| debts[a].balance().total_cmp(&debts[b].balance()));
        order
    }

    fn name(&self) -> &'static str {
        "snowball"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orders_by_ascending_balance() {
        let debts = vec![
            Debt::new("A".to_string(), 5000.0, 0.02, 10.0),
            Debt::new("B".to_string(), 150.0, 0.12, 10.0),
            Debt::new("C".to_string(), 900.0, 0.07, 10.0),
        ];

        let order = SnowballPolicy::new().order_active(&debts);

        assert_eq!(order, vec![1, 2, 0]);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let debts = vec![
            Debt::new("First".to_string(), 500.0, 0.12, 10.0),
            Debt::new("Second".to_string(), 500.0, 0.01, 10.0),
        ];

        let order = SnowballPolicy::new().order_active(&debts);

        assert_eq!(order, vec![0, 1]);
    }

    #[test]
    fn test_reorders_as_balances_change() {
        let mut debts = vec![
            Debt::new("A".to_string(), 400.0, 0.02, 10.0),
            Debt::new("B".to_string(), 600.0, 0.12, 10.0),
        ];
        let policy = SnowballPolicy::new();
        assert_eq!(policy.order_active(&debts), vec![0, 1]);

        // After a large payment to B the ranking flips
        debts[1].pay(450.0);
        assert_eq!(policy.order_active(&debts), vec![1, 0]);
    }

    #[test]
    fn test_settled_debts_excluded() {
        let mut debts = vec![
            Debt::new("A".to_string(), 100.0, 0.15, 10.0),
            Debt::new("B".to_string(), 500.0, 0.05, 10.0),
        ];
        debts[0].pay(100.0);

        let order = SnowballPolicy::new().order_active(&debts);

        assert_eq!(order, vec![1]);
    }
}
