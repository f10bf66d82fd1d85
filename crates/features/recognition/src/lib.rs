//! # Revenue Recognition Engine
//!
//! This crate computes a simplified revenue-recognition allocation for a
//! contract with multiple performance obligations, using the cost-based
//! percentage-of-completion method (ASC 606-style revenue schedules).
//!
//! ## Calculation
//!
//! The engine is a single pure pipeline:
//!
//! 1.  **Validation:** an ordered guard chain over the contract economics and
//!     the obligation sequences; the first violated rule is reported and
//!     nothing else runs.
//! 2.  **Allocation:** standalone selling prices are prorated by their
//!     realization probabilities (variable consideration) and capped at the
//!     transaction price.
//! 3.  **Progress:** percentage of completion as the ratio of costs incurred
//!     to total estimated costs, capped at one.
//! 4.  **Schedule:** a two-point schedule (inception and the current period)
//!     carrying the recognized revenue.
//!
//! An empty obligation set is a defined zero-result, not an error. Everything
//! else that fails validation surfaces as a [`RecognitionError`] before any
//! output exists.

mod allocation;
mod error;
mod progress;
mod validate;

pub use crate::allocation::ALLOCATION_CAP_TOLERANCE;
pub use crate::error::{RecognitionError, RecognitionErrorExt};
pub use crate::progress::percentage_complete;
pub use crate::validate::PROBABILITY_SUM_TOLERANCE;

use crate::validate::ValidatedContract;
use revkit_domain::contract::ContractInputs;
use revkit_domain::obligation::PerformanceObligation;
use serde::{Deserialize, Serialize};

/// One row of a recognition schedule.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SchedulePoint {
    /// Zero-based reporting period index.
    pub period: u32,
    /// Cumulative completion fraction in `[0, 1]`.
    pub percentage_complete: f64,
    /// Cumulative revenue recognized through this period.
    pub recognized_revenue: f64,
}

/// The result of a recognition calculation.
///
/// Carries the ordered schedule plus the total recognized revenue. This
/// structure is what callers persist or transmit; see [`Self::to_json`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RecognitionOutcome {
    /// Schedule rows in period order.
    pub schedule: Vec<SchedulePoint>,
    /// Total revenue recognized to date.
    pub revenue: f64,
}

impl RecognitionOutcome {
    /// Serializes the outcome into a human-readable JSON string.
    ///
    /// # Errors
    /// Returns [`RecognitionError::Serialization`] if serialization fails.
    pub fn to_json(&self) -> Result<String, RecognitionError> {
        serde_json::to_string(self).map_err(RecognitionError::from)
    }

    /// Deserializes an outcome from a JSON string.
    ///
    /// # Errors
    /// Returns [`RecognitionError::Serialization`] if the JSON is malformed.
    pub fn from_json(json: &str) -> Result<Self, RecognitionError> {
        serde_json::from_str(json).map_err(RecognitionError::from)
    }
}

/// Computes the revenue recognized to date and the two-point schedule for a
/// contract.
///
/// This is the primary entry point of the engine. Inputs are validated in a
/// fixed order (scalar signs, sequence lengths, per-element probability and
/// price bounds, probability budget, cost basis) and the first violation is
/// returned. With no obligations at all the call short-circuits to an empty
/// schedule and zero revenue.
///
/// # Arguments
/// * `transaction_price` - Total consideration expected from the contract.
/// * `costs_incurred` - Cumulative costs incurred to date.
/// * `total_estimated_costs` - Total expected costs for the project.
/// * `standalone_selling_prices` - One price per obligation.
/// * `performance_obligations` - The obligations; only their count is read.
/// * `probabilities` - Realization probability per obligation, within `[0, 1]`,
///   summing to at most one.
///
/// # Errors
/// * [`RecognitionError::NegativeAmount`] for a negative scalar input.
/// * [`RecognitionError::LengthMismatch`] when the sequences disagree in length.
/// * [`RecognitionError::ProbabilityOutOfRange`] for a probability outside `[0, 1]`.
/// * [`RecognitionError::NegativeSellingPrice`] for a negative standalone price.
/// * [`RecognitionError::ProbabilitySumExceeded`] when probabilities sum past one.
/// * [`RecognitionError::ZeroCostBasis`] when obligations exist but
///   `total_estimated_costs` is zero.
pub fn calculate_revenue_recognition(
    transaction_price: f64,
    costs_incurred: f64,
    total_estimated_costs: f64,
    standalone_selling_prices: &[f64],
    performance_obligations: &[PerformanceObligation],
    probabilities: &[f64],
) -> Result<RecognitionOutcome, RecognitionError> {
    let contract = ContractInputs::new(transaction_price, costs_incurred, total_estimated_costs);

    let validated = validate::validate_inputs(
        &contract,
        standalone_selling_prices,
        performance_obligations.len(),
        probabilities,
    )
    .inspect_err(|error| tracing::debug!(%error, "Recognition inputs rejected"))?;

    if validated == ValidatedContract::Empty {
        return Ok(RecognitionOutcome { schedule: Vec::new(), revenue: 0.0 });
    }

    // The per-obligation amounts stop at the cap; the schedule below depends
    // only on the completion percentage.
    let _allocated = allocation::allocate_transaction_price(
        transaction_price,
        standalone_selling_prices,
        probabilities,
    );

    let pct = percentage_complete(costs_incurred, total_estimated_costs).min(1.0);
    let revenue = transaction_price * pct;

    tracing::trace!(revenue, percentage_complete = pct, "Revenue recognized");

    Ok(RecognitionOutcome {
        schedule: vec![
            SchedulePoint { period: 0, percentage_complete: 0.0, recognized_revenue: 0.0 },
            SchedulePoint { period: 1, percentage_complete: pct, recognized_revenue: revenue },
        ],
        revenue,
    })
}
