//! Post identifier value object.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::ValidationError;

/// Positive integer identifying a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct PostId(i64);

impl PostId {
    /// Validate and wrap a raw identifier.
    pub fn new(value: i64) -> Result<Self, ValidationError> {
        if value <= 0 {
            return Err(ValidationError::NonPositiveId("post"));
        }
        Ok(Self(value))
    }

    /// Get the raw i64 value.
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl FromStr for PostId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s
            .parse::<i64>()
            .map_err(|_| ValidationError::MalformedId("post"))?;
        Self::new(value)
    }
}

impl TryFrom<i64> for PostId {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PostId> for i64 {
    fn from(id: PostId) -> Self {
        id.0
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
