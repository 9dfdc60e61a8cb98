//! Engine configuration
//!
//! Configuration is read from TOML and can be overridden from the
//! environment. Every field has a default, so an empty document is valid.
//!
//! ```toml
//! reuse_diagnostics = true
//! log_profile = "production"
//! ```

use serde::Deserialize;
use std::rc::Rc;

use crate::errors::{DequalError, Result};
use crate::lazy::{ReuseObserver, TracingReuseObserver};
use crate::logging_facility::Profile;

/// Environment variable enabling lazy-sequence reuse diagnostics
pub const ENV_REUSE_DIAGNOSTICS: &str = "DEQUAL_REUSE_DIAGNOSTICS";
/// Environment variable selecting the logging profile
pub const ENV_LOG_PROFILE: &str = "DEQUAL_LOG_PROFILE";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Warn when a lazy sequence is consumed more than once
    pub reuse_diagnostics: bool,
    pub log_profile: Profile,
}

impl EngineConfig {
    /// Parse a TOML document
    ///
    /// # Errors
    ///
    /// * `InvalidConfig` - malformed TOML, unknown keys or bad values
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Apply overrides from the process environment
    ///
    /// # Errors
    ///
    /// * `InvalidConfig` - a variable is set to an unrecognised value
    pub fn apply_env(self) -> Result<Self> {
        self.apply_overrides(|name| std::env::var(name).ok())
    }

    /// Apply overrides from an arbitrary variable lookup
    ///
    /// # Errors
    ///
    /// * `InvalidConfig` - a variable is set to an unrecognised value
    pub fn apply_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(ENV_REUSE_DIAGNOSTICS) {
            self.reuse_diagnostics = parse_flag(ENV_REUSE_DIAGNOSTICS, &raw)?;
        }
        if let Some(raw) = lookup(ENV_LOG_PROFILE) {
            self.log_profile = raw.parse()?;
        }
        Ok(self)
    }

    /// The reuse observer implied by this configuration, if any
    pub fn reuse_observer(&self) -> Option<Rc<dyn ReuseObserver>> {
        if self.reuse_diagnostics {
            Some(Rc::new(TracingReuseObserver))
        } else {
            None
        }
    }
}

fn parse_flag(name: &str, raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => Err(DequalError::InvalidConfig {
            reason: format!("{} must be a boolean flag, got '{}'", name, other),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = EngineConfig::from_toml_str("").unwrap();
        assert_eq!(config, EngineConfig::default());
        assert!(config.reuse_observer().is_none());
    }

    #[test]
    fn test_toml_fields() {
        let config =
            EngineConfig::from_toml_str("reuse_diagnostics = true\nlog_profile = \"production\"\n")
                .unwrap();
        assert!(config.reuse_diagnostics);
        assert_eq!(config.log_profile, Profile::Production);
        assert!(config.reuse_observer().is_some());
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = EngineConfig::from_toml_str("verbose = true").unwrap_err();
        assert!(matches!(err, DequalError::InvalidConfig { .. }));
    }

    #[test]
    fn test_overrides_win_over_document() {
        let config = EngineConfig::from_toml_str("reuse_diagnostics = false")
            .unwrap()
            .apply_overrides(lookup_from(&[
                (ENV_REUSE_DIAGNOSTICS, "1"),
                (ENV_LOG_PROFILE, "test"),
            ]))
            .unwrap();
        assert!(config.reuse_diagnostics);
        assert_eq!(config.log_profile, Profile::Test);
    }

    #[test]
    fn test_bad_flag_rejected() {
        let err = EngineConfig::default()
            .apply_overrides(lookup_from(&[(ENV_REUSE_DIAGNOSTICS, "maybe")]))
            .unwrap_err();
        assert!(err.to_string().contains("maybe"));
    }
}
