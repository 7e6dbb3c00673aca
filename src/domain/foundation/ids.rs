//! Strongly-typed integer identifier value objects.
//!
//! Every aggregate root is identified by a positive integer handed out by
//! its repository, starting at 1 and never reused.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

use super::ValidationError;

/// Identifier issued from a per-type monotonically increasing sequence.
pub trait SequentialId:
    Copy + Ord + Hash + fmt::Debug + fmt::Display + Send + Sync + 'static
{
    /// Wraps the raw sequence value.
    fn from_sequence(value: u64) -> Self;

    /// Returns the raw sequence value.
    fn value(&self) -> u64;
}

macro_rules! sequential_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            /// Creates an identifier from a raw value.
            pub fn new(value: u64) -> Self {
                Self(value)
            }
        }

        impl SequentialId for $name {
            fn from_sequence(value: u64) -> Self {
                Self(value)
            }

            fn value(&self) -> u64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.trim().parse()?))
            }
        }

        impl From<u64> for $name {
            fn from(value: u64) -> Self {
                Self(value)
            }
        }
    };
}

sequential_id!(
    /// Unique identifier for a client.
    ClientId
);

sequential_id!(
    /// Unique identifier for an initiative.
    InitiativeId
);

sequential_id!(
    /// Unique identifier for a mentorship engagement.
    MentorshipId
);

sequential_id!(
    /// Unique identifier for a client-portal service.
    ServiceId
);

sequential_id!(
    /// Unique identifier for a podcast episode.
    EpisodeId
);

/// Identifier as received from callers: either a JSON number or a string.
///
/// Kept raw so that the malformed-identifier case can be reported as a
/// validation failure instead of a deserialization failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawId {
    Number(i64),
    Text(String),
}

impl RawId {
    /// Parses into a typed identifier.
    ///
    /// # Errors
    ///
    /// - `EmptyField` for `0` or a blank string
    /// - `InvalidFormat` for negative numbers or non-numeric text
    pub fn parse<I: SequentialId>(&self, field: &str) -> Result<I, ValidationError> {
        let value = match self {
            RawId::Number(n) => *n,
            RawId::Text(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return Err(ValidationError::empty_field(field));
                }
                trimmed.parse::<i64>().map_err(|_| {
                    ValidationError::invalid_format(field, "must be a valid integer")
                })?
            }
        };

        match value {
            0 => Err(ValidationError::empty_field(field)),
            n if n < 0 => Err(ValidationError::invalid_format(
                field,
                "must be a positive integer",
            )),
            n => Ok(I::from_sequence(n as u64)),
        }
    }
}

impl From<u64> for RawId {
    fn from(value: u64) -> Self {
        i64::try_from(value)
            .map(RawId::Number)
            .unwrap_or_else(|_| RawId::Text(value.to_string()))
    }
}

impl From<&str> for RawId {
    fn from(value: &str) -> Self {
        RawId::Text(value.to_string())
    }
}
