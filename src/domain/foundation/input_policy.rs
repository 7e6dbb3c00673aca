//! Input leniency policy.
//!
//! Several inputs are absorbed rather than rejected: an out-of-range
//! priority becomes the default, an unknown status leaves the current one
//! in place, a mentorship reassigned to a missing client keeps its client.
//! Every such decision goes through [`InputPolicy`] so the strict variant
//! can be switched on from configuration without touching handlers.

use serde::Deserialize;

use super::{Priority, PriorityInput, StatusLabel, ValidationError};

/// How handlers treat recoverable bad input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputPolicy {
    /// Absorb bad input with a fallback or a no-op.
    #[default]
    Lenient,
    /// Reject bad input with a validation error.
    Strict,
}

impl InputPolicy {
    /// Builds the policy from the `strict_input` feature flag.
    pub fn from_strict_flag(strict: bool) -> Self {
        if strict {
            InputPolicy::Strict
        } else {
            InputPolicy::Lenient
        }
    }

    /// Priority for a new initiative. Lenient: anything invalid becomes 3.
    pub fn priority_on_create(
        &self,
        raw: Option<&PriorityInput>,
    ) -> Result<Priority, ValidationError> {
        match raw {
            None => Ok(Priority::default()),
            Some(input) => self
                .absorb(input.resolve())
                .map(|resolved| resolved.unwrap_or_default()),
        }
    }

    /// Priority change on update. Lenient: anything invalid is ignored.
    pub fn priority_on_update(
        &self,
        raw: &PriorityInput,
    ) -> Result<Option<Priority>, ValidationError> {
        self.absorb(raw.resolve())
    }

    /// Status for a new entity. Lenient: unknown labels become the default.
    pub fn status_on_create<S>(&self, raw: Option<&str>) -> Result<S, ValidationError>
    where
        S: StatusLabel + Default,
    {
        match raw {
            None => Ok(S::default()),
            Some(label) => self
                .absorb(parse_status::<S>(label))
                .map(|status| status.unwrap_or_default()),
        }
    }

    /// Status change on update. Lenient: unknown labels are ignored.
    pub fn status_on_update<S: StatusLabel>(
        &self,
        raw: &str,
    ) -> Result<Option<S>, ValidationError> {
        self.absorb(parse_status::<S>(raw))
    }

    /// Applies the policy to any fallible input.
    ///
    /// Lenient turns an error into `Ok(None)`; strict propagates it.
    pub fn absorb<T>(&self, result: Result<T, ValidationError>) -> Result<Option<T>, ValidationError> {
        match (result, self) {
            (Ok(value), _) => Ok(Some(value)),
            (Err(err), InputPolicy::Lenient) => {
                tracing::debug!("Ignoring invalid input: {}", err);
                Ok(None)
            }
            (Err(err), InputPolicy::Strict) => Err(err),
        }
    }
}

fn parse_status<S: StatusLabel>(label: &str) -> Result<S, ValidationError> {
    S::parse(label).ok_or_else(|| ValidationError::unknown_value(S::FIELD, label))
}
