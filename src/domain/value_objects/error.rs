//! Validation failures raised while constructing value objects.

/// Reason a raw primitive could not become a value object.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Identifier was zero or negative. Carries the entity name ("user", "post").
    #[error("{0} ID must be positive")]
    NonPositiveId(&'static str),

    /// Identifier string was not a decimal integer.
    #[error("invalid {0} ID format")]
    MalformedId(&'static str),

    #[error("email cannot be empty")]
    EmptyEmail,

    #[error("invalid email format")]
    MalformedEmail,
}
