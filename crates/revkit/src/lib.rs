//! Facade crate for `RevKit` features and shared modules.
//! Re-exports domain primitives and the recognition engine.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Add `revkit` as a dependency and pull what you need from [`prelude`].
//! - Initialize logging through [`logger`] once per process if you want the
//!   engine's diagnostics on your console or in files.

pub use revkit_domain as domain;
pub use revkit_logger as logger;
pub use revkit_recognition as recognition;

pub use revkit_recognition::{
    RecognitionError, RecognitionErrorExt, RecognitionOutcome, SchedulePoint,
    calculate_revenue_recognition, percentage_complete,
};

/// Commonly used items for downstream callers.
pub mod prelude {
    pub use revkit_domain::contract::ContractInputs;
    pub use revkit_domain::obligation::PerformanceObligation;
    pub use revkit_recognition::{
        ALLOCATION_CAP_TOLERANCE, PROBABILITY_SUM_TOLERANCE, RecognitionError,
        RecognitionErrorExt, RecognitionOutcome, SchedulePoint, calculate_revenue_recognition,
        percentage_complete,
    };
}
