//! Debt Payoff Simulator Core - Rust Engine
//!
//! Month-by-month debt amortization simulator with deterministic execution.
//!
//! # Architecture
//!
//! - **models**: Domain types (Debt, SimulationState, Event)
//! - **policy**: Surplus-allocation strategies (avalanche, snowball)
//! - **allocation**: Two-pass monthly payment allocator
//! - **accrual**: Month-end interest compounding
//! - **engine**: Main simulation loop and structured report export
//!
//! # Critical Invariants
//!
//! 1. Balances are f64 currency units and never go negative
//! 2. A run operates on a private clone of the configured debts -
//!    caller state is never aliased into a simulation
//! 3. Same config = identical result (no randomness in the loop)
//!
//! # Example
//!
//! ```rust
//! use debt_simulator_core_rs::{
//!     run_simulation, Debt, SimulationConfig, SimulationOutcome, StrategyKind,
//! };
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
//! let result = run_simulation(&config).unwrap();
//! assert_eq!(result.outcome, SimulationOutcome::PaidOff);
//! ```

// Module declarations
pub mod accrual;
pub mod allocation;
pub mod engine;
pub mod models;
pub mod policy;

// Re-exports for convenience
pub use accrual::{accrue_all, AccrualOutcome};
pub use allocation::{allocate_month, AllocationSummary, DebtPayment};
pub use engine::{
    run_simulation, DebtReportRow, MonthResult, ReportError, RunReport, SimulationConfig,
    SimulationError, SimulationOutcome, SimulationResult, Simulator,
};
pub use models::{
    debt::{Debt, DebtError, SETTLEMENT_EPSILON},
    event::{Event, EventLog},
    state::{BalancePoint, SimulationState},
};
pub use policy::{AvalanchePolicy, ParseStrategyError, PayoffPolicy, SnowballPolicy, StrategyKind};
