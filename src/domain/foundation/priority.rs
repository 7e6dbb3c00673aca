//! Priority value object for initiatives (1 = most urgent, 5 = least).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Urgency of an initiative, always within 1..=5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Priority(u8);

impl Priority {
    pub const HIGHEST: i64 = 1;
    pub const LOWEST: i64 = 5;

    /// Creates a priority, rejecting values outside 1..=5.
    pub fn new(value: i64) -> Result<Self, ValidationError> {
        if (Self::HIGHEST..=Self::LOWEST).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(ValidationError::out_of_range(
                "priority",
                Self::HIGHEST,
                Self::LOWEST,
                value,
            ))
        }
    }

    /// Returns the numeric value.
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl Default for Priority {
    fn default() -> Self {
        Self(3)
    }
}

impl TryFrom<i64> for Priority {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Priority> for i64 {
    fn from(priority: Priority) -> Self {
        priority.0 as i64
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Priority as received from callers.
///
/// Any JSON value deserializes; booleans, arrays and objects land in
/// `Other` and never resolve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PriorityInput {
    Number(i64),
    Decimal(f64),
    Text(String),
    Other(serde_json::Value),
}

impl PriorityInput {
    /// Converts to a validated priority.
    ///
    /// Decimals are truncated toward zero; text must hold an integer.
    pub fn resolve(&self) -> Result<Priority, ValidationError> {
        match self {
            PriorityInput::Number(n) => Priority::new(*n),
            PriorityInput::Decimal(d) if d.is_finite() => Priority::new(d.trunc() as i64),
            PriorityInput::Decimal(_) => Err(ValidationError::invalid_format(
                "priority",
                "must be a finite number",
            )),
            PriorityInput::Text(s) => s
                .trim()
                .parse::<i64>()
                .map_err(|_| ValidationError::invalid_format("priority", "must be an integer"))
                .and_then(Priority::new),
            PriorityInput::Other(_) => Err(ValidationError::invalid_format(
                "priority",
                "must be a number",
            )),
        }
    }
}

impl From<i64> for PriorityInput {
    fn from(value: i64) -> Self {
        PriorityInput::Number(value)
    }
}

impl From<&str> for PriorityInput {
    fn from(value: &str) -> Self {
        PriorityInput::Text(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_priority_is_three() {
        assert_eq!(Priority::default().value(), 3);
    }

    #[test]
    fn accepts_bounds() {
        assert_eq!(Priority::new(1).unwrap().value(), 1);
        assert_eq!(Priority::new(5).unwrap().value(), 5);
    }

    #[test]
    fn rejects_out_of_range() {
        assert!(matches!(
            Priority::new(0),
            Err(ValidationError::OutOfRange { actual: 0, .. })
        ));
        assert!(Priority::new(6).is_err());
    }

    #[test]
    fn lower_value_sorts_first() {
        assert!(Priority::new(1).unwrap() < Priority::new(3).unwrap());
    }

    #[test]
    fn input_resolves_numbers_text_and_decimals() {
        assert_eq!(PriorityInput::from(2).resolve().unwrap().value(), 2);
        assert_eq!(PriorityInput::from(" 4 ").resolve().unwrap().value(), 4);
        assert_eq!(PriorityInput::Decimal(1.9).resolve().unwrap().value(), 1);
    }

    #[test]
    fn input_rejects_non_numeric_text() {
        assert!(matches!(
            PriorityInput::from("urgent").resolve(),
            Err(ValidationError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn input_deserializes_from_number_or_string() {
        let n: PriorityInput = serde_json::from_str("2").unwrap();
        let s: PriorityInput = serde_json::from_str("\"2\"").unwrap();
        assert_eq!(n.resolve().unwrap(), s.resolve().unwrap());
    }

    #[test]
    fn non_numeric_json_values_deserialize_but_never_resolve() {
        for raw in ["true", "[1]", r#"{"v":1}"#] {
            let input: PriorityInput = serde_json::from_str(raw).unwrap();
            assert!(matches!(input, PriorityInput::Other(_)), "{raw}");
            assert!(matches!(
                input.resolve(),
                Err(ValidationError::InvalidFormat { .. })
            ));
        }
    }

    #[test]
    fn serializes_as_plain_number() {
        assert_eq!(serde_json::to_string(&Priority::new(4).unwrap()).unwrap(), "4");
    }
}
