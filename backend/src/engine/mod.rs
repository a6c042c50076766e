//! Simulation engine - the month-by-month payoff loop
//!
//! See `simulation.rs` for the loop itself and `report.rs` for the
//! structured export surface.

pub mod report;
pub mod simulation;

// Re-export main types for convenience
pub use report::{config_digest, DebtReportRow, ReportError, RunReport};
pub use simulation::{
    run_simulation, MonthResult, SimulationConfig, SimulationError, SimulationOutcome,
    SimulationResult, Simulator, DEFAULT_MAX_MONTHS, DEFAULT_PAYOFF_THRESHOLD,
};
