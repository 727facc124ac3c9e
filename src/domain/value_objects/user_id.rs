//! User identifier value object.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::ValidationError;

/// Positive integer identifying a user.
///
/// The only ways to obtain one are [`UserId::new`] and [`str::parse`], both of
/// which reject zero, negative and non-numeric input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct UserId(i64);

impl UserId {
    /// Validate and wrap a raw identifier.
    pub fn new(value: i64) -> Result<Self, ValidationError> {
        if value <= 0 {
            return Err(ValidationError::NonPositiveId("user"));
        }
        Ok(Self(value))
    }

    /// Get the raw i64 value.
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl FromStr for UserId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s
            .parse::<i64>()
            .map_err(|_| ValidationError::MalformedId("user"))?;
        Self::new(value)
    }
}

impl TryFrom<i64> for UserId {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<UserId> for i64 {
    fn from(id: UserId) -> Self {
        id.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(1 ; "smallest")]
    #[test_case(42 ; "typical")]
    #[test_case(i64::MAX ; "largest")]
    fn test_positive_ids_roundtrip_through_string(value: i64) {
        let id = UserId::new(value).unwrap();
        let parsed: UserId = id.to_string().parse().unwrap();

        assert_eq!(parsed, id);
        assert_eq!(parsed.value(), value);
    }

    #[test_case(0 ; "zero")]
    #[test_case(-1 ; "negative")]
    #[test_case(i64::MIN ; "most negative")]
    fn test_non_positive_ids_are_rejected(value: i64) {
        assert_eq!(
            UserId::new(value),
            Err(ValidationError::NonPositiveId("user"))
        );
    }

    #[test_case("abc" ; "letters")]
    #[test_case("" ; "empty")]
    #[test_case("1.5" ; "decimal")]
    #[test_case(" 7" ; "leading space")]
    #[test_case("99999999999999999999" ; "overflow")]
    fn test_non_numeric_strings_are_rejected(raw: &str) {
        assert_eq!(
            raw.parse::<UserId>(),
            Err(ValidationError::MalformedId("user"))
        );
    }

    #[test]
    fn test_parsed_zero_reports_non_positive() {
        assert_eq!(
            "0".parse::<UserId>(),
            Err(ValidationError::NonPositiveId("user"))
        );
        assert_eq!(
            "-3".parse::<UserId>().unwrap_err().to_string(),
            "user ID must be positive"
        );
    }

    #[test]
    fn test_serializes_as_plain_number() {
        let id = UserId::new(7).unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "7");
    }
}
