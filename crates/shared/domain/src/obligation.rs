use serde::{Deserialize, Serialize};

/// A distinct promise to transfer a good or service under a contract.
///
/// Only the *count* of obligations participates in the recognition
/// calculation; the identifier is never interpreted and exists so callers can
/// correlate results with their own records.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PerformanceObligation {
    /// Caller-assigned opaque identifier.
    pub id: String,
}

impl PerformanceObligation {
    /// Creates an obligation with the given identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}
