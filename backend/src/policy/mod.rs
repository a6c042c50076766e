//! Payoff Policy Module
//!
//! This module defines the strategy interface for the surplus-allocation
//! pass. Once mandatory minimums are paid, any budget left over is
//! directed to the remaining debts in an order chosen by the policy:
//!
//! 1. **Avalanche**: highest monthly rate first - minimizes total
//!    interest paid over the run.
//! 2. **Snowball**: smallest balance first - retires debts quickest for
//!    the psychological win of a shrinking list.
//!
//! The ordering is derived fresh every month, since balances (and which
//! debts remain active) change between months. Policies return a sorted
//! *view* (indices into the working set); they never reorder or mutate
//! the canonical debt collection.
//!
//! # Policy Interface
//!
//! All policies implement the `PayoffPolicy` trait:
//! ```rust
//! use debt_simulator_core_rs::policy::PayoffPolicy;
//! use debt_simulator_core_rs::Debt;
//!
//! struct OldestFirst;
//!
//! impl PayoffPolicy for OldestFirst {
//!     fn order_active(&self, debts: &[Debt]) -> Vec<usize> {
//!         (0..debts.len()).filter(|&i| !debts[i].is_settled()).collect()
//!     }
//!
//!     fn name(&self) -> &'static str {
//!         "oldest_first"
//!     }
//! }
//! ```
//!
//! Policies are selected through the [`StrategyKind`] config enum and
//! instantiated by its factory:
//!
//! ```rust
//! use debt_simulator_core_rs::policy::StrategyKind;
//!
//! let policy = StrategyKind::Avalanche.build();
//! assert_eq!(policy.name(), "avalanche");
//! ```

use crate::models::debt::Debt;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub mod avalanche;
pub mod snowball;

// Re-exports
pub use avalanche::AvalanchePolicy;
pub use snowball::SnowballPolicy;

/// Surplus-allocation ordering policy
///
/// Implementations rank the still-active debts for the surplus pass.
/// Ties must preserve original input order, which both built-in policies
/// get from a stable sort.
pub trait PayoffPolicy: Send + Sync {
    /// Indices of unsettled debts, in surplus-payment priority order
    ///
    /// Called once per month, after the mandatory pass. The slice is the
    /// full working set in input order; settled debts must be excluded
    /// from the returned view.
    fn order_active(&self, debts: &[Debt]) -> Vec<usize>;

    /// Stable policy name (matches the config spelling)
    fn name(&self) -> &'static str;
}

/// Strategy selection for a simulation run
///
/// Determines which payoff policy orders the surplus pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyKind {
    /// Highest monthly rate first (minimizes total interest)
    #[default]
    Avalanche,

    /// Smallest balance first (retires debts soonest)
    Snowball,
}

impl StrategyKind {
    /// Instantiate the policy for this strategy
    pub fn build(self) -> Box<dyn PayoffPolicy> {
        match self {
            StrategyKind::Avalanche => Box::new(AvalanchePolicy::new()),
            StrategyKind::Snowball => Box::new(SnowballPolicy::new()),
        }
    }

    /// Config spelling of the strategy
    pub fn as_str(self) -> &'static str {
        match self {
            StrategyKind::Avalanche => "avalanche",
            StrategyKind::Snowball => "snowball",
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown strategy name
#[derive(Debug, Error, PartialEq)]
#[error("unknown strategy '{0}' (expected 'avalanche' or 'snowball')")]
pub struct ParseStrategyError(String);

impl FromStr for StrategyKind {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "avalanche" => Ok(StrategyKind::Avalanche),
            "snowball" => Ok(StrategyKind::Snowball),
            other => Err(ParseStrategyError(other.to_string())),
        }
    }
}
