//! Simulation State
//!
//! Holds the mutable state of one payoff simulation run: the private
//! working copies of the configured debts, the elapsed month counter,
//! the running interest total, and the aggregate balance history.
//!
//! # Critical Invariants
//!
//! 1. **Membership is fixed**: the debt list never grows or shrinks
//!    during a run; only balances (and term counters) mutate in place.
//!    Settled debts stay in the list at balance 0.
//! 2. **No aliasing**: the working copies are clones of the caller's
//!    configured debts, so a run never mutates caller state and the same
//!    configuration can be re-run (e.g., with the other strategy).
//! 3. **History is chronological**: one entry per simulated month, in
//!    order, recording the aggregate balance before that month's payments.

use crate::models::debt::Debt;
use serde::{Deserialize, Serialize};

/// One point of the aggregate balance time series
///
/// `month` is the zero-based month index; `total_balance` is the sum of
/// all outstanding balances before that month's payments were applied.
/// Charting consumes this as (x = month, y = total_balance).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BalancePoint {
    pub month: usize,
    pub total_balance: f64,
}

/// Complete state of a running payoff simulation
#[derive(Debug, Clone)]
pub struct SimulationState {
    /// Private working copies of the configured debts, in input order
    debts: Vec<Debt>,

    /// Elapsed months (0 before the first simulated month)
    month: usize,

    /// Interest accrued so far, summed across all months and debts
    total_interest: f64,

    /// Aggregate balance recorded at the start of each simulated month
    balance_history: Vec<BalancePoint>,
}

impl SimulationState {
    /// Create state for a fresh run from the caller's configured debts
    ///
    /// The engine passes an already-cloned vector; the caller's records
    /// are never aliased into a run.
    pub fn new(debts: Vec<Debt>) -> Self {
        Self {
            debts,
            month: 0,
            total_interest: 0.0,
            balance_history: Vec::new(),
        }
    }

    /// Sum of all outstanding balances
    ///
    /// Settled debts contribute their clamped balance of 0.
    pub fn total_balance(&self) -> f64 {
        self.debts.iter().map(|d| d.balance()).sum()
    }

    /// Number of debts still carrying a balance
    pub fn active_count(&self) -> usize {
        self.debts.iter().filter(|d| !d.is_settled()).count()
    }

    /// Number of debts in the working set (settled included)
    pub fn num_debts(&self) -> usize {
        self.debts.len()
    }

    /// Working debts, in input order
    pub fn debts(&self) -> &[Debt] {
        &self.debts
    }

    /// Mutable working debts (for the allocator and accrual passes)
    pub fn debts_mut(&mut self) -> &mut [Debt] {
        &mut self.debts
    }

    /// Elapsed month counter
    pub fn month(&self) -> usize {
        self.month
    }

    /// Interest accrued so far
    pub fn total_interest(&self) -> f64 {
        self.total_interest
    }

    /// Aggregate balance history, chronological
    pub fn history(&self) -> &[BalancePoint] {
        &self.balance_history
    }

    /// Record the aggregate balance at the start of the current month
    pub fn record_balance(&mut self, total_balance: f64) {
        self.balance_history.push(BalancePoint {
            month: self.month,
            total_balance,
        });
    }

    /// Add one month's accrued interest to the running total
    pub fn add_interest(&mut self, interest: f64) {
        self.total_interest += interest;
    }

    /// Advance the month counter by one
    pub fn advance_month(&mut self) {
        self.month += 1;
    }

    /// Tear the state apart at the end of a run
    ///
    /// Returns `(debts, balance_history, total_interest)` by value so the
    /// engine can move them into the result without cloning.
    pub fn into_parts(self) -> (Vec<Debt>, Vec<BalancePoint>, f64) {
        (self.debts, self.balance_history, self.total_interest)
    }
}
