//! Event logging for simulation auditing and analysis.
//!
//! This module defines the Event enum which captures every significant
//! state change during a payoff run. Events enable:
//! - Debugging (understand which debt was paid what, and when)
//! - Auditing (verify allocator and accrual behavior month by month)
//! - Analysis (extract per-debt payment and interest series)
//!
//! # Event Types
//!
//! Events are categorized by simulation phase:
//! - **MinimumPaid**: mandatory pass applied a minimum payment
//! - **ExtraPaid**: surplus pass directed extra budget to a debt
//! - **InterestAccrued**: month-end compounding added interest
//! - **DebtSettled**: a debt's balance reached the settlement epsilon
//! - **SimulationFinished**: the run reached a terminal state
//!
//! # Example
//!
//! ```rust
//! use debt_simulator_core_rs::models::Event;
//!
//! let event = Event::MinimumPaid {
//!     month: 3,
//!     debt: "Credit Card".to_string(),
//!     amount: 1000.0,
//! };
//!
//! assert_eq!(event.month(), 3);
//! assert_eq!(event.event_type(), "minimum_paid");
//! ```

use crate::engine::SimulationOutcome;
use serde::{Deserialize, Serialize};

/// Simulation event capturing a state change.
///
/// All events carry the zero-based month index they occurred in.
/// Events are logged in the order they occur within a month:
/// payments first, then accrual, then settlements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    /// Mandatory pass paid (part of) a debt's minimum payment
    MinimumPaid {
        month: usize,
        debt: String,
        amount: f64,
    },

    /// Surplus pass directed extra budget to a debt
    ExtraPaid {
        month: usize,
        debt: String,
        amount: f64,
    },

    /// Month-end compounding added interest to a debt's balance
    InterestAccrued {
        month: usize,
        debt: String,
        amount: f64,
    },

    /// A debt's balance reached the settlement epsilon this month
    DebtSettled { month: usize, debt: String },

    /// The run reached a terminal state
    SimulationFinished {
        month: usize,
        outcome: SimulationOutcome,
        total_interest: f64,
    },
}

impl Event {
    /// Month index this event occurred in
    pub fn month(&self) -> usize {
        match self {
            Event::MinimumPaid { month, .. }
            | Event::ExtraPaid { month, .. }
            | Event::InterestAccrued { month, .. }
            | Event::DebtSettled { month, .. }
            | Event::SimulationFinished { month, .. } => *month,
        }
    }

    /// Debt name this event refers to, if any
    pub fn debt_name(&self) -> Option<&str> {
        match self {
            Event::MinimumPaid { debt, .. }
            | Event::ExtraPaid { debt, .. }
            | Event::InterestAccrued { debt, .. }
            | Event::DebtSettled { debt, .. } => Some(debt),
            Event::SimulationFinished { .. } => None,
        }
    }

    /// Stable type tag (matches the serde tag)
    pub fn event_type(&self) -> &'static str {
        match self {
            Event::MinimumPaid { .. } => "minimum_paid",
            Event::ExtraPaid { .. } => "extra_paid",
            Event::InterestAccrued { .. } => "interest_accrued",
            Event::DebtSettled { .. } => "debt_settled",
            Event::SimulationFinished { .. } => "simulation_finished",
        }
    }
}

/// Append-only log of simulation events
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventLog {
    events: Vec<Event>,
}

impl EventLog {
    /// Create a new empty event log
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Add an event to the log
    pub fn log(&mut self, event: Event) {
        self.events.push(event);
    }

    /// Get the number of events logged
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Check if the log is empty
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Get all events
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Get events for a specific month
    pub fn events_at_month(&self, month: usize) -> Vec<&Event> {
        self.events.iter().filter(|e| e.month() == month).collect()
    }

    /// Get events of a specific type
    pub fn events_of_type(&self, event_type: &str) -> Vec<&Event> {
        self.events
            .iter()
            .filter(|e| e.event_type() == event_type)
            .collect()
    }

    /// Get events for a specific debt
    pub fn events_for_debt(&self, debt: &str) -> Vec<&Event> {
        self.events
            .iter()
            .filter(|e| e.debt_name() == Some(debt))
            .collect()
    }

    /// Clear all events
    pub fn clear(&mut self) {
        self.events.clear();
    }
}
