//! Interest Accrual Module
//!
//! Month-end compounding across the working debt set, applied once per
//! debt per month after both payment passes. Order across debts is
//! irrelevant - there is no cross-debt dependency.
//!
//! Settled debts are skipped and clamped to exactly 0 by
//! `Debt::accrue_interest`, so residual epsilon-dust never compounds.

use crate::models::debt::Debt;

/// Interest added across the working set in one month
#[derive(Debug, Clone, PartialEq)]
pub struct AccrualOutcome {
    /// Sum of interest across all debts
    pub total: f64,

    /// Per-debt interest, aligned with working-set indices
    pub by_debt: Vec<f64>,
}

/// Compound one month of interest on every debt
pub fn accrue_all(debts: &mut [Debt]) -> AccrualOutcome {
    let by_debt: Vec<f64> = debts.iter_mut().map(|d| d.accrue_interest()).collect();
    let total = by_debt.iter().sum();

    AccrualOutcome { total, by_debt }
}
