//! Shared behavior of the closed status enumerations.

use std::fmt::Debug;

/// A status drawn from a small fixed set of snake_case labels.
pub trait StatusLabel: Sized + Copy + PartialEq + Debug + Send + Sync + 'static {
    /// Field name used in validation messages.
    const FIELD: &'static str;

    /// Returns the wire label.
    fn as_str(&self) -> &'static str;

    /// Parses a wire label. Returns `None` for anything outside the set.
    fn parse(label: &str) -> Option<Self>;
}
