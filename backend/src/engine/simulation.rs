//! Simulation Engine
//!
//! Main month-by-month payoff loop integrating all components:
//! - Payment allocation (mandatory minimums + strategy-ordered surplus)
//! - Interest accrual (month-end compounding)
//! - Balance history collection (aggregate time series)
//! - Event logging (complete run history)
//!
//! # Architecture
//!
//! The Simulator advances one month per `step()`:
//!
//! ```text
//! For each month m:
//! 1. Aggregate outstanding balance across the working set
//! 2. Terminal check: paid off (aggregate <= threshold) or cap reached
//! 3. Record (m, aggregate) in the balance history
//! 4. Mandatory pass (minimum payments, input order)
//! 5. Surplus pass (policy-ordered greedy allocation)
//! 6. Interest accrual on remaining balances
//! 7. Log events, accumulate interest, advance the month counter
//! ```
//!
//! # Determinism
//!
//! A run is a pure sequential computation over a private clone of the
//! configured debts. Same config = identical months, history, and
//! interest; re-runs (e.g., with the other strategy) never observe
//! mutations from earlier runs.
//!
//! # Example
//!
//! ```rust
//! use debt_simulator_core_rs::engine::{SimulationConfig, SimulationOutcome, Simulator};
//! use debt_simulator_core_rs::policy::StrategyKind;
//! use debt_simulator_core_rs::Debt;
//!
//! let config = SimulationConfig::new(
//!     300.0,
//!     vec![
//!         Debt::new("Card A".to_string(), 1000.0, 0.10, 50.0),
//!         Debt::new("Card B".to_string(), 200.0, 0.05, 20.0),
//!     ],
//!     StrategyKind::Avalanche,
//! );
//!
//! let result = Simulator::new(config).unwrap().run();
//! assert_eq!(result.outcome, SimulationOutcome::PaidOff);
//! assert!(result.months_to_payoff <= 120);
//! ```

use crate::accrual;
use crate::allocation;
use crate::models::debt::Debt;
use crate::models::event::{Event, EventLog};
use crate::models::state::{BalancePoint, SimulationState};
use crate::policy::{PayoffPolicy, StrategyKind};
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// Configuration Types
// ============================================================================

/// Default safety cap: stop after 10 simulated years
pub const DEFAULT_MAX_MONTHS: usize = 120;

/// Default payoff threshold: one currency unit of aggregate balance
pub const DEFAULT_PAYOFF_THRESHOLD: f64 = 1.0;

fn default_max_months() -> usize {
    DEFAULT_MAX_MONTHS
}

fn default_payoff_threshold() -> f64 {
    DEFAULT_PAYOFF_THRESHOLD
}

/// Complete simulation configuration
///
/// The caller computes `monthly_budget` as total net income minus fixed
/// non-debt expenses and passes it as one number. The core holds no
/// state between runs; the config is the entire input.
///
/// # Fields
///
/// * `monthly_budget` - Net budget available for debt payments each month
/// * `debts` - Ordered debt list (input order breaks strategy ties)
/// * `strategy` - Surplus-allocation ordering (avalanche | snowball)
/// * `max_months` - Safety cap preventing unbounded loops (default 120)
/// * `payoff_threshold` - Aggregate balance treated as fully paid (default 1.0)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Net budget available for debt payments each month
    ///
    /// Zero or negative is a valid-but-degenerate input: minimums are
    /// still paid and the surplus pass never executes. Callers are
    /// expected to pre-check and present a "cannot simulate" message.
    pub monthly_budget: f64,

    /// Configured debts, in input order
    pub debts: Vec<Debt>,

    /// Surplus-allocation strategy
    #[serde(default)]
    pub strategy: StrategyKind,

    /// Hard iteration bound (months)
    ///
    /// Guards against configurations that can never pay off, e.g. when
    /// minimum payments don't cover accruing interest.
    #[serde(default = "default_max_months")]
    pub max_months: usize,

    /// Aggregate balance at or below this counts as paid off
    #[serde(default = "default_payoff_threshold")]
    pub payoff_threshold: f64,
}

impl SimulationConfig {
    /// Create a config with the default cap and payoff threshold
    pub fn new(monthly_budget: f64, debts: Vec<Debt>, strategy: StrategyKind) -> Self {
        Self {
            monthly_budget,
            debts,
            strategy,
            max_months: DEFAULT_MAX_MONTHS,
            payoff_threshold: DEFAULT_PAYOFF_THRESHOLD,
        }
    }
}

// ============================================================================
// Result Types
// ============================================================================

/// Terminal state of a run
///
/// Both outcomes are legitimate results - `TimedOut` signals the
/// configuration is likely unpayable under the current budget, so
/// callers can present "more than 10 years" messaging instead of a
/// false payoff month count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SimulationOutcome {
    /// Aggregate balance reached the payoff threshold
    PaidOff,

    /// The month cap was reached with balance outstanding
    TimedOut,
}

impl SimulationOutcome {
    /// Stable lowercase tag (matches the serde spelling)
    pub fn as_str(self) -> &'static str {
        match self {
            SimulationOutcome::PaidOff => "paid_off",
            SimulationOutcome::TimedOut => "timed_out",
        }
    }
}

/// Result of a single simulated month
#[derive(Debug, Clone, PartialEq)]
pub struct MonthResult {
    /// Zero-based month index that was just simulated
    pub month: usize,

    /// Total applied during the mandatory pass
    pub mandatory_paid: f64,

    /// Total applied during the surplus pass
    pub surplus_paid: f64,

    /// Interest accrued across all debts this month
    pub interest_accrued: f64,

    /// Aggregate balance after payments and accrual
    pub total_balance: f64,

    /// Debts still carrying a balance after this month
    pub active_debts: usize,
}

/// Complete result of a run
///
/// Plain structured data, suitable for tabular display, charting
/// (x = month, y = total_balance), or export via [`RunReport`].
///
/// [`RunReport`]: crate::engine::report::RunReport
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Terminal state (paid off vs. cap reached)
    pub outcome: SimulationOutcome,

    /// Month counter at termination
    pub months_to_payoff: usize,

    /// Aggregate balance at the start of each simulated month
    pub balance_history: Vec<BalancePoint>,

    /// Interest accrued across all months and debts (non-negative)
    pub total_interest_accrued: f64,

    /// Post-run snapshot of the working debts, in input order
    pub final_debts: Vec<Debt>,

    /// Strategy the run used
    pub strategy: StrategyKind,

    /// Budget the run used
    pub monthly_budget: f64,

    /// Complete event history of the run
    pub events: EventLog,
}

/// Simulation error types
#[derive(Debug, Error, PartialEq)]
pub enum SimulationError {
    /// Configuration validation error
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// A configured debt failed numeric validation
    #[error(transparent)]
    InvalidDebt(#[from] crate::models::debt::DebtError),
}

// ============================================================================
// Simulator
// ============================================================================

/// Main simulator owning the month loop
///
/// Owns a private working copy of the configured debts plus the policy,
/// event log, and accumulated history. Construction validates the
/// config; `step()` advances one month; `run()` drives to a terminal
/// state and returns the [`SimulationResult`].
pub struct Simulator {
    /// Immutable run configuration
    config: SimulationConfig,

    /// Working debt copies, month counter, interest total, history
    state: SimulationState,

    /// Surplus-ordering policy built from `config.strategy`
    policy: Box<dyn PayoffPolicy>,

    /// Event log (all simulation events)
    event_log: EventLog,

    /// Terminal outcome, set once the run finishes
    outcome: Option<SimulationOutcome>,
}

impl Simulator {
    /// Create a new simulator from configuration
    ///
    /// Clones the configured debts into a private working set - the
    /// caller's records are never aliased into the run.
    ///
    /// # Returns
    ///
    /// * `Ok(Simulator)` - ready to run
    /// * `Err(SimulationError)` - configuration validation failed
    pub fn new(config: SimulationConfig) -> Result<Self, SimulationError> {
        Self::validate_config(&config)?;

        let state = SimulationState::new(config.debts.clone());
        let policy = config.strategy.build();

        Ok(Self {
            config,
            state,
            policy,
            event_log: EventLog::new(),
            outcome: None,
        })
    }

    /// Validate configuration
    ///
    /// Debts deserialized from a scenario file bypass the `Debt::new`
    /// assertions, so every numeric field is re-checked here.
    fn validate_config(config: &SimulationConfig) -> Result<(), SimulationError> {
        if !config.monthly_budget.is_finite() {
            return Err(SimulationError::InvalidConfig(format!(
                "monthly_budget must be finite, got {}",
                config.monthly_budget
            )));
        }

        if config.max_months == 0 {
            return Err(SimulationError::InvalidConfig(
                "max_months must be > 0".to_string(),
            ));
        }

        if !config.payoff_threshold.is_finite() || config.payoff_threshold < 0.0 {
            return Err(SimulationError::InvalidConfig(format!(
                "payoff_threshold must be non-negative and finite, got {}",
                config.payoff_threshold
            )));
        }

        for debt in &config.debts {
            debt.validate()?;
        }

        Ok(())
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Elapsed months
    pub fn current_month(&self) -> usize {
        self.state.month()
    }

    /// Terminal outcome, if the run has finished
    pub fn outcome(&self) -> Option<SimulationOutcome> {
        self.outcome
    }

    /// Reference to the working state
    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    /// Reference to the event log
    pub fn event_log(&self) -> &EventLog {
        &self.event_log
    }

    // ========================================================================
    // Month Loop
    // ========================================================================

    /// Check for a terminal state without advancing
    ///
    /// Payoff is evaluated before the cap, so a configuration that pays
    /// off exactly at the cap month reports `PaidOff`, and an empty debt
    /// set is `PaidOff` at month 0.
    fn terminal_outcome(&self) -> Option<SimulationOutcome> {
        if self.state.total_balance() <= self.config.payoff_threshold {
            return Some(SimulationOutcome::PaidOff);
        }
        if self.state.month() >= self.config.max_months {
            return Some(SimulationOutcome::TimedOut);
        }
        None
    }

    /// Mark the run finished and log the terminal event
    fn finish(&mut self, outcome: SimulationOutcome) {
        self.outcome = Some(outcome);
        self.event_log.log(Event::SimulationFinished {
            month: self.state.month(),
            outcome,
            total_interest: self.state.total_interest(),
        });
    }

    /// Execute one simulated month
    ///
    /// Returns `Some(MonthResult)` when a month was simulated, or `None`
    /// once the run has reached a terminal state (the outcome is then
    /// available via `outcome()`).
    pub fn step(&mut self) -> Option<MonthResult> {
        if self.outcome.is_some() {
            return None;
        }

        if let Some(outcome) = self.terminal_outcome() {
            self.finish(outcome);
            return None;
        }

        let month = self.state.month();
        let aggregate = self.state.total_balance();
        self.state.record_balance(aggregate);

        let was_settled: Vec<bool> = self.state.debts().iter().map(|d| d.is_settled()).collect();

        // Payments first, then accrual on whatever remains
        let alloc = allocation::allocate_month(
            self.state.debts_mut(),
            self.config.monthly_budget,
            self.policy.as_ref(),
        );
        let accrued = accrual::accrue_all(self.state.debts_mut());

        for payment in &alloc.payments {
            let debt = self.state.debts()[payment.index].name().to_string();
            if payment.mandatory > 0.0 {
                self.event_log.log(Event::MinimumPaid {
                    month,
                    debt: debt.clone(),
                    amount: payment.mandatory,
                });
            }
            if payment.extra > 0.0 {
                self.event_log.log(Event::ExtraPaid {
                    month,
                    debt: debt.clone(),
                    amount: payment.extra,
                });
            }
        }

        for (i, &amount) in accrued.by_debt.iter().enumerate() {
            if amount > 0.0 {
                self.event_log.log(Event::InterestAccrued {
                    month,
                    debt: self.state.debts()[i].name().to_string(),
                    amount,
                });
            }
        }

        for (i, was) in was_settled.into_iter().enumerate() {
            if !was && self.state.debts()[i].is_settled() {
                self.event_log.log(Event::DebtSettled {
                    month,
                    debt: self.state.debts()[i].name().to_string(),
                });
            }
        }

        self.state.add_interest(accrued.total);
        self.state.advance_month();

        Some(MonthResult {
            month,
            mandatory_paid: alloc.mandatory_paid,
            surplus_paid: alloc.surplus_paid,
            interest_accrued: accrued.total,
            total_balance: self.state.total_balance(),
            active_debts: self.state.active_count(),
        })
    }

    /// Drive the loop to a terminal state and return the result
    pub fn run(mut self) -> SimulationResult {
        let outcome = loop {
            if let Some(outcome) = self.outcome {
                break outcome;
            }
            self.step();
        };

        let months_to_payoff = self.state.month();
        let strategy = self.config.strategy;
        let monthly_budget = self.config.monthly_budget;
        let (final_debts, balance_history, total_interest_accrued) = self.state.into_parts();

        SimulationResult {
            outcome,
            months_to_payoff,
            balance_history,
            total_interest_accrued,
            final_debts,
            strategy,
            monthly_budget,
            events: self.event_log,
        }
    }
}

/// Run a configuration to completion on a fresh working copy
///
/// Convenience for repeated what-if runs: the config is cloned, so the
/// caller can immediately re-run with a different strategy or budget.
pub fn run_simulation(config: &SimulationConfig) -> Result<SimulationResult, SimulationError> {
    Ok(Simulator::new(config.clone())?.run())
}
