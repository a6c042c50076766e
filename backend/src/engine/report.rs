//! Run Report - Structured Export
//!
//! Serializes a finished run into plain structured data for the
//! presentation layers (tables, charts, spreadsheet export). The core
//! depends on no rendering mechanism; consumers read the JSON.
//!
//! # Report Identity
//!
//! Each report carries a fresh UUID run id, an Rfc3339 generation
//! timestamp, and a SHA256 digest of the canonical config JSON, so any
//! exported report can be matched back to the exact configuration that
//! produced it.

use crate::engine::simulation::{SimulationConfig, SimulationOutcome, SimulationResult};
use crate::models::debt::Debt;
use crate::models::state::BalancePoint;
use crate::policy::StrategyKind;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;
use uuid::Uuid;

/// Errors that can occur while building or serializing a report
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to format report timestamp: {0}")]
    Timestamp(#[from] time::error::Format),

    #[error("failed to serialize report data: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// One row of the per-debt snapshot table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebtReportRow {
    pub name: String,
    pub starting_balance: f64,
    pub final_balance: f64,
    pub monthly_rate: f64,
    pub minimum_payment: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remaining_term: Option<u32>,
}

/// Complete exportable report of one finished run
///
/// Summary fields first, then the full month-by-balance series and the
/// per-debt snapshot table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunReport {
    /// Fresh UUID identifying this export
    pub run_id: String,

    /// Rfc3339 generation timestamp (UTC)
    pub generated_at: String,

    /// Strategy the run used
    pub strategy: StrategyKind,

    /// Budget the run used
    pub monthly_budget: f64,

    /// Terminal state of the run
    pub outcome: SimulationOutcome,

    /// Month counter at termination
    pub months_to_payoff: usize,

    /// Interest accrued across all months and debts
    pub total_interest_accrued: f64,

    /// SHA256 hex digest of the canonical config JSON
    pub config_digest: String,

    /// Aggregate balance series (x = month, y = total balance)
    pub series: Vec<BalancePoint>,

    /// Per-debt snapshot table, in input order
    pub debts: Vec<DebtReportRow>,
}

impl RunReport {
    /// Build a report from a config and the result it produced
    ///
    /// Rows pair each configured debt with its post-run counterpart by
    /// position - the working set preserves input order and membership.
    pub fn build(
        config: &SimulationConfig,
        result: &SimulationResult,
    ) -> Result<Self, ReportError> {
        let generated_at = OffsetDateTime::now_utc().format(&Rfc3339)?;

        let debts = config
            .debts
            .iter()
            .zip(result.final_debts.iter())
            .map(|(start, end)| debt_row(start, end))
            .collect();

        Ok(Self {
            run_id: Uuid::new_v4().to_string(),
            generated_at,
            strategy: result.strategy,
            monthly_budget: result.monthly_budget,
            outcome: result.outcome,
            months_to_payoff: result.months_to_payoff,
            total_interest_accrued: result.total_interest_accrued,
            config_digest: config_digest(config)?,
            series: result.balance_history.clone(),
            debts,
        })
    }

    /// Compact JSON encoding
    pub fn to_json(&self) -> Result<String, ReportError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Pretty-printed JSON encoding (for files meant to be read)
    pub fn to_json_pretty(&self) -> Result<String, ReportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn debt_row(start: &Debt, end: &Debt) -> DebtReportRow {
    DebtReportRow {
        name: start.name().to_string(),
        starting_balance: start.balance(),
        final_balance: end.balance(),
        monthly_rate: start.monthly_rate(),
        minimum_payment: start.minimum_payment(),
        remaining_term: end.remaining_term(),
    }
}

/// SHA256 hex digest of the canonical config JSON
///
/// Identical configs produce identical digests, so a stored report can
/// be matched to the configuration that generated it.
pub fn config_digest(config: &SimulationConfig) -> Result<String, ReportError> {
    let canonical = serde_json::to_vec(config)?;
    let mut hasher = Sha256::new();
    hasher.update(&canonical);
    Ok(format!("{:x}", hasher.finalize()))
}
