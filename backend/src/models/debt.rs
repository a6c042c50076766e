//! Debt model
//!
//! Represents a single liability in the payoff simulation.
//! Each debt has:
//! - Display name (uniqueness not enforced)
//! - Outstanding balance (f64 currency units)
//! - Monthly interest rate as a fraction (0.12 = 12% per month)
//! - Mandatory minimum payment per month
//! - Optional remaining-term counter (informational only)
//!
//! CRITICAL: balances never go negative. A payment is capped at the
//! outstanding balance, and a balance at or below [`SETTLEMENT_EPSILON`]
//! is treated as settled and clamped to exactly 0.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Balance at or below this value (in currency units) counts as settled.
///
/// Prevents residual cent-dust from keeping a debt active forever and
/// accruing micro-interest.
pub const SETTLEMENT_EPSILON: f64 = 0.01;

/// Errors that can occur when building a debt from untrusted input
#[derive(Debug, Error, PartialEq)]
pub enum DebtError {
    #[error("debt '{name}': {field} must be non-negative, got {value}")]
    NegativeField {
        name: String,
        field: &'static str,
        value: f64,
    },

    #[error("debt '{name}': {field} must be finite, got {value}")]
    NonFiniteField {
        name: String,
        field: &'static str,
        value: f64,
    },
}

/// A single liability: balance, rate, and mandatory minimum payment
///
/// Debts are configured once by the caller and cloned into a private
/// working set by the simulation engine; a run never mutates the
/// caller's records.
///
/// # Example
/// ```
/// use debt_simulator_core_rs::Debt;
///
/// let mut card = Debt::new("Credit Card".to_string(), 4800.0, 0.12, 1000.0);
/// let applied = card.pay(1000.0);
/// assert_eq!(applied, 1000.0);
/// assert_eq!(card.balance(), 3800.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Debt {
    /// Display name (e.g., "Credit Card A"). Not required to be unique.
    name: String,

    /// Outstanding balance (f64 currency units). Never negative.
    balance: f64,

    /// Monthly interest rate as a fraction (0.12 = 12% per month).
    ///
    /// May be 0 for instruments whose interest is already embedded in a
    /// fixed installment (e.g., car financing).
    monthly_rate: f64,

    /// Mandatory payment floor each month while the balance is positive.
    minimum_payment: f64,

    /// Months left on a fixed-term instrument, if known.
    ///
    /// Purely informational: decremented while the debt is active, never
    /// used to terminate payment or accrual.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    remaining_term: Option<u32>,
}

impl Debt {
    /// Create a new debt
    ///
    /// # Arguments
    /// * `name` - Display name
    /// * `balance` - Opening balance (must be non-negative and finite)
    /// * `monthly_rate` - Monthly rate fraction (must be non-negative and finite)
    /// * `minimum_payment` - Mandatory monthly floor (must be non-negative and finite)
    ///
    /// # Panics
    /// Panics if any numeric field is negative or non-finite. Untrusted
    /// input (e.g., a deserialized scenario file) is instead validated by
    /// `Simulator::new`, which reports `SimulationError::InvalidDebt`.
    ///
    /// # Example
    /// ```
    /// use debt_simulator_core_rs::Debt;
    ///
    /// let car = Debt::new("Car Loan".to_string(), 28146.99, 0.0, 1236.89)
    ///     .with_remaining_term(31);
    /// assert_eq!(car.remaining_term(), Some(31));
    /// ```
    pub fn new(name: String, balance: f64, monthly_rate: f64, minimum_payment: f64) -> Self {
        assert!(
            balance.is_finite() && balance >= 0.0,
            "balance must be non-negative and finite"
        );
        assert!(
            monthly_rate.is_finite() && monthly_rate >= 0.0,
            "monthly_rate must be non-negative and finite"
        );
        assert!(
            minimum_payment.is_finite() && minimum_payment >= 0.0,
            "minimum_payment must be non-negative and finite"
        );

        Self {
            name,
            balance,
            monthly_rate,
            minimum_payment,
            remaining_term: None,
        }
    }

    /// Set the remaining-term counter (builder style)
    pub fn with_remaining_term(mut self, months: u32) -> Self {
        self.remaining_term = Some(months);
        self
    }

    /// Validate a debt that was built from untrusted input (serde)
    ///
    /// `Debt::new` asserts its preconditions, but deserialization bypasses
    /// the constructor, so the engine re-checks every numeric field here.
    pub fn validate(&self) -> Result<(), DebtError> {
        for (field, value) in [
            ("balance", self.balance),
            ("monthly_rate", self.monthly_rate),
            ("minimum_payment", self.minimum_payment),
        ] {
            if !value.is_finite() {
                return Err(DebtError::NonFiniteField {
                    name: self.name.clone(),
                    field,
                    value,
                });
            }
            if value < 0.0 {
                return Err(DebtError::NegativeField {
                    name: self.name.clone(),
                    field,
                    value,
                });
            }
        }
        Ok(())
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current outstanding balance
    pub fn balance(&self) -> f64 {
        self.balance
    }

    /// Monthly interest rate fraction
    pub fn monthly_rate(&self) -> f64 {
        self.monthly_rate
    }

    /// Mandatory monthly payment floor
    pub fn minimum_payment(&self) -> f64 {
        self.minimum_payment
    }

    /// Months left on the instrument, if tracked
    pub fn remaining_term(&self) -> Option<u32> {
        self.remaining_term
    }

    /// Whether this debt counts as paid off
    ///
    /// A balance at or below [`SETTLEMENT_EPSILON`] is settled; settled
    /// debts receive no further payments and accrue no further interest.
    pub fn is_settled(&self) -> bool {
        self.balance <= SETTLEMENT_EPSILON
    }

    // ========================================================================
    // Operations
    // ========================================================================

    /// Apply a payment, capped at the outstanding balance
    ///
    /// Reduces the balance by `min(amount, balance)` and returns the
    /// amount actually applied. Paying more than the balance leaves the
    /// balance at exactly 0 - never negative.
    ///
    /// # Panics
    /// Panics if `amount` is negative.
    pub fn pay(&mut self, amount: f64) -> f64 {
        assert!(amount >= 0.0, "payment amount must be non-negative");

        let applied = amount.min(self.balance);
        self.balance -= applied;
        applied
    }

    /// Compound one month of interest on the outstanding balance
    ///
    /// Computes `balance * monthly_rate`, adds it to the balance, and
    /// returns the interest amount. While the debt is active the
    /// remaining-term counter (if present and positive) is decremented,
    /// even when the rate is 0 and no interest accrues.
    ///
    /// Settled debts are a no-op: the balance is clamped to exactly 0 and
    /// 0 interest is returned, so epsilon-dust can never compound.
    pub fn accrue_interest(&mut self) -> f64 {
        if self.is_settled() {
            self.balance = 0.0;
            return 0.0;
        }

        let interest = self.balance * self.monthly_rate;
        self.balance += interest;

        if let Some(term) = self.remaining_term.as_mut() {
            if *term > 0 {
                *term -= 1;
            }
        }

        interest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_debt() {
        let debt = Debt::new("Card".to_string(), 5000.0, 0.12, 500.0);

        assert_eq!(debt.name(), "Card");
        assert_eq!(debt.balance(), 5000.0);
        assert_eq!(debt.monthly_rate(), 0.12);
        assert_eq!(debt.minimum_payment(), 500.0);
        assert_eq!(debt.remaining_term(), None);
        assert!(!debt.is_settled());
    }

    #[test]
    fn test_pay_partial() {
        let mut debt = Debt::new("Card".to_string(), 1000.0, 0.1, 50.0);

        let applied = debt.pay(300.0);

        assert_eq!(applied, 300.0);
        assert_eq!(debt.balance(), 700.0);
    }

    #[test]
    fn test_pay_overshoot_leaves_exact_zero() {
        let mut debt = Debt::new("Card".to_string(), 250.0, 0.1, 50.0);

        let applied = debt.pay(1000.0);

        assert_eq!(applied, 250.0);
        assert_eq!(debt.balance(), 0.0);
        assert!(debt.is_settled());
    }

    #[test]
    #[should_panic(expected = "non-negative")]
    fn test_pay_negative_amount_panics() {
        let mut debt = Debt::new("Card".to_string(), 100.0, 0.0, 10.0);
        debt.pay(-1.0);
    }

    #[test]
    fn test_accrue_interest() {
        let mut debt = Debt::new("Card".to_string(), 1000.0, 0.12, 50.0);

        let interest = debt.accrue_interest();

        assert_eq!(interest, 120.0);
        assert_eq!(debt.balance(), 1120.0);
    }

    #[test]
    fn test_accrue_interest_zero_rate() {
        let mut debt = Debt::new("Car".to_string(), 10000.0, 0.0, 500.0);

        let interest = debt.accrue_interest();

        assert_eq!(interest, 0.0);
        assert_eq!(debt.balance(), 10000.0);
    }

    #[test]
    fn test_accrue_interest_settled_clamps_to_zero() {
        let mut debt = Debt::new("Card".to_string(), 0.005, 0.12, 50.0);
        assert!(debt.is_settled());

        let interest = debt.accrue_interest();

        assert_eq!(interest, 0.0);
        assert_eq!(debt.balance(), 0.0);
    }

    #[test]
    fn test_term_decrements_even_without_interest() {
        let mut debt = Debt::new("Car".to_string(), 10000.0, 0.0, 500.0).with_remaining_term(3);

        debt.accrue_interest();
        assert_eq!(debt.remaining_term(), Some(2));

        debt.accrue_interest();
        debt.accrue_interest();
        assert_eq!(debt.remaining_term(), Some(0));

        // Stops at zero, never underflows
        debt.accrue_interest();
        assert_eq!(debt.remaining_term(), Some(0));
    }

    #[test]
    fn test_term_not_decremented_when_settled() {
        let mut debt = Debt::new("Car".to_string(), 0.0, 0.0, 500.0).with_remaining_term(5);

        debt.accrue_interest();

        assert_eq!(debt.remaining_term(), Some(5));
    }

    #[test]
    fn test_validate_rejects_negative_field() {
        let mut debt = Debt::new("Card".to_string(), 100.0, 0.1, 10.0);
        debt.balance = -5.0;

        let err = debt.validate().unwrap_err();
        assert_eq!(
            err,
            DebtError::NegativeField {
                name: "Card".to_string(),
                field: "balance",
                value: -5.0,
            }
        );
    }

    #[test]
    fn test_validate_rejects_non_finite_field() {
        let mut debt = Debt::new("Card".to_string(), 100.0, 0.1, 10.0);
        debt.monthly_rate = f64::NAN;

        assert!(matches!(
            debt.validate(),
            Err(DebtError::NonFiniteField {
                field: "monthly_rate",
                ..
            })
        ));
    }

    #[test]
    fn test_serde_round_trip() {
        let debt = Debt::new("Card".to_string(), 4803.58, 0.12, 1000.0).with_remaining_term(12);

        let json = serde_json::to_string(&debt).unwrap();
        let back: Debt = serde_json::from_str(&json).unwrap();

        assert_eq!(back, debt);
    }
}
