//! Input validation for the recognition calculation.
//!
//! Checks run in a fixed order and the first violated rule is reported.
//! Callers never see partial results: nothing is computed until the whole
//! chain passes.

use crate::error::RecognitionError;
use revkit_domain::contract::ContractInputs;

/// Tolerance applied when testing the probability sum against one.
///
/// Accumulated floating-point rounding across many obligations can push an
/// otherwise-exact sum slightly past 1.0; sums within the tolerance are
/// accepted.
pub const PROBABILITY_SUM_TOLERANCE: f64 = 1e-8;

/// Outcome of a successful validation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ValidatedContract {
    /// No obligations: the calculation short-circuits to an empty schedule.
    Empty,
    /// Inputs are complete; allocation and progress may proceed.
    Ready,
}

/// Runs the ordered guard chain over the contract economics and the
/// obligation sequences.
///
/// Scalar sign checks come first, then the per-element scans over
/// probabilities and selling prices, then the aggregate probability budget,
/// and finally the cost-basis guard. An all-empty obligation set is a defined
/// zero-result, not an error, and skips the cost-basis guard entirely.
#[allow(clippy::float_cmp)]
pub(crate) fn validate_inputs(
    contract: &ContractInputs,
    standalone_selling_prices: &[f64],
    performance_obligations: usize,
    probabilities: &[f64],
) -> Result<ValidatedContract, RecognitionError> {
    if contract.transaction_price < 0.0 {
        return Err(RecognitionError::NegativeAmount {
            message: format!("Transaction price is {}", contract.transaction_price).into(),
            context: Some("Contract economics".into()),
        });
    }

    if contract.costs_incurred < 0.0 {
        return Err(RecognitionError::NegativeAmount {
            message: format!("Costs incurred is {}", contract.costs_incurred).into(),
            context: Some("Contract economics".into()),
        });
    }

    if contract.total_estimated_costs < 0.0 {
        return Err(RecognitionError::NegativeAmount {
            message: format!("Total estimated costs is {}", contract.total_estimated_costs).into(),
            context: Some("Contract economics".into()),
        });
    }

    if standalone_selling_prices.len() != probabilities.len() {
        return Err(RecognitionError::LengthMismatch {
            message: format!(
                "{} standalone selling prices but {} probabilities",
                standalone_selling_prices.len(),
                probabilities.len()
            )
            .into(),
            context: None,
        });
    }

    for (index, probability) in probabilities.iter().enumerate() {
        if !(0.0..=1.0).contains(probability) {
            return Err(RecognitionError::ProbabilityOutOfRange {
                message: format!("Probability at index {index} is {probability}").into(),
                context: Some("Expected a value within [0, 1]".into()),
            });
        }
    }

    for (index, price) in standalone_selling_prices.iter().enumerate() {
        if *price < 0.0 {
            return Err(RecognitionError::NegativeSellingPrice {
                message: format!("Standalone selling price at index {index} is {price}").into(),
                context: None,
            });
        }
    }

    let probability_sum: f64 = probabilities.iter().sum();
    if probability_sum > 1.0 + PROBABILITY_SUM_TOLERANCE {
        return Err(RecognitionError::ProbabilitySumExceeded {
            message: format!("Probabilities sum to {probability_sum}").into(),
            context: None,
        });
    }

    if standalone_selling_prices.len() != performance_obligations {
        return Err(RecognitionError::LengthMismatch {
            message: format!(
                "{} standalone selling prices but {} performance obligations",
                standalone_selling_prices.len(),
                performance_obligations
            )
            .into(),
            context: None,
        });
    }

    // Lengths agree at this point, so one emptiness check covers all three
    // sequences. The cost-basis guard below must not run for this case.
    if standalone_selling_prices.is_empty() {
        return Ok(ValidatedContract::Empty);
    }

    if contract.total_estimated_costs == 0.0 {
        return Err(RecognitionError::ZeroCostBasis {
            message: "Total estimated costs must be positive when obligations exist".into(),
            context: Some("Allocation would divide by zero".into()),
        });
    }

    Ok(ValidatedContract::Ready)
}
