//! Token rejection reasons for consist parsing.

use thiserror::Error;

/// Ways a consist token can fail validation.
///
/// Batch parsing drops rejected lines silently; callers that need the
/// reason (strict validators, diagnostics) get it from
/// [`Wagon::from_token`](crate::Wagon::from_token) directly.
#[derive(Debug, Error)]
pub enum TokenError {
    /// The token has no `-` between tag and number.
    #[error("token '{0}' has no tag-number separator")]
    MissingSeparator(String),

    /// The number part does not parse as a non-negative base-10 integer.
    #[error("token '{0}' does not carry a valid wagon number")]
    BadNumber(String),

    /// The tag names no direction served by the yard.
    #[error("unknown direction tag '{0}'")]
    UnknownDirection(String),
}
