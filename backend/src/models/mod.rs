//! Domain models for the debt payoff simulator

pub mod debt;
pub mod event;
pub mod state;

// Re-exports
pub use debt::{Debt, DebtError, SETTLEMENT_EPSILON};
pub use event::{Event, EventLog};
pub use state::{BalancePoint, SimulationState};
