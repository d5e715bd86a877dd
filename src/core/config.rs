//! Engine configuration with documented constants
//!
//! The reliability engine never reaches out to ambient global state:
//! a config value is built once by the host and passed explicitly into
//! every call that needs it.

use serde::{Deserialize, Serialize};

/// Configuration for the reliability engine
///
/// These values have been tuned against the stock part profiles.
/// Changing them affects how aggressively parts wear and how forgiving
/// the repair economy is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Window (in sim seconds) used to detect a fresh session start
    ///
    /// A part re-arms only when the current clock reads earlier than
    /// `time_of_last_reset + reset_epsilon`. A reload mid-session lands
    /// well past this window, so age is preserved; a revert or a brand
    /// new session lands inside it and re-zeroes the tracker.
    pub reset_epsilon: f64,

    /// Temperature above which a part cannot be serviced
    ///
    /// Repairs are denied while the part is hotter than this, forcing
    /// the operator to wait for it to cool down first.
    pub service_temp_limit: f64,

    /// Resource names that tanks will never pick as a leak target
    ///
    /// Structural or abstract resources (e.g. ablator) make no sense
    /// as a leak and are skipped during leak-target selection.
    pub leak_blacklist: Vec<String>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            reset_epsilon: 1.0,
            service_temp_limit: 100.0,
            leak_blacklist: Vec::new(),
        }
    }
}

impl EngineConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether a resource name is barred from leaking
    pub fn is_leak_blacklisted(&self, resource: &str) -> bool {
        self.leak_blacklist.iter().any(|name| name == resource)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<(), String> {
        if !(self.reset_epsilon > 0.0) {
            return Err(format!(
                "reset_epsilon ({}) must be a positive number of seconds",
                self.reset_epsilon
            ));
        }

        if !self.service_temp_limit.is_finite() {
            return Err("service_temp_limit must be finite".into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(EngineConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_zero_epsilon() {
        let config = EngineConfig {
            reset_epsilon: 0.0,
            ..EngineConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_leak_blacklist_lookup() {
        let config = EngineConfig {
            leak_blacklist: vec!["Ablator".into()],
            ..EngineConfig::default()
        };
        assert!(config.is_leak_blacklisted("Ablator"));
        assert!(!config.is_leak_blacklisted("Oxidizer"));
    }
}
