use serde::{Deserialize, Serialize};

/// Contract economics supplied to a recognition calculation.
///
/// Plain data: bounds (non-negative amounts, positive cost basis when any
/// obligation exists) are enforced by the recognition engine, not at
/// construction time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ContractInputs {
    /// Total consideration expected from the contract.
    pub transaction_price: f64,
    /// Cumulative costs incurred to date.
    pub costs_incurred: f64,
    /// Total expected costs for the project.
    pub total_estimated_costs: f64,
}

impl ContractInputs {
    /// Bundles the contract economics scalars.
    #[must_use]
    pub const fn new(
        transaction_price: f64,
        costs_incurred: f64,
        total_estimated_costs: f64,
    ) -> Self {
        Self { transaction_price, costs_incurred, total_estimated_costs }
    }
}
