use std::borrow::Cow;

/// Error types specific to the recognition feature.
///
/// Every variant except [`RecognitionError::Serialization`] and
/// [`RecognitionError::Internal`] reports invalid caller input; the engine
/// produces no partial results once a check fails.
#[revkit_derive::revkit_error]
pub enum RecognitionError {
    #[error("Negative amount{}: {message}", format_context(.context))]
    NegativeAmount { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Sequence length mismatch{}: {message}", format_context(.context))]
    LengthMismatch { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Probability out of range{}: {message}", format_context(.context))]
    ProbabilityOutOfRange { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Probability sum exceeds one{}: {message}", format_context(.context))]
    ProbabilitySumExceeded { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Negative standalone selling price{}: {message}", format_context(.context))]
    NegativeSellingPrice { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Zero estimated costs with obligations present; the allocation would divide by zero.
    #[error("Zero cost basis{}: {message}", format_context(.context))]
    ZeroCostBasis { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Serde serialization error with optional context.
    #[error("Serialization error{}: {source}", format_context(.context))]
    Serialization { source: serde_json::Error, context: Option<Cow<'static, str>> },

    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal recognition error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
