//! Feature flags configuration

use serde::Deserialize;

use crate::domain::foundation::InputPolicy;

/// Feature flags for enabling/disabling functionality
#[derive(Debug, Clone, Deserialize)]
pub struct FeatureFlags {
    /// Load sample podcast episodes and the example portal service at startup
    #[serde(default = "default_seed_sample_data")]
    pub seed_sample_data: bool,

    /// Reject recoverable bad input instead of absorbing it
    #[serde(default)]
    pub strict_input: bool,

    /// Show detailed error messages (disable in production!)
    #[serde(default)]
    pub verbose_errors: bool,
}

impl FeatureFlags {
    pub fn input_policy(&self) -> InputPolicy {
        InputPolicy::from_strict_flag(self.strict_input)
    }
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            seed_sample_data: default_seed_sample_data(),
            strict_input: false,
            verbose_errors: false,
        }
    }
}

fn default_seed_sample_data() -> bool {
    true
}
