//! Configuration presets

use super::DiagnosticsConfig;

/// Diagnostic filter used when no environment override is present
pub const DEFAULT_DIAGNOSTICS_LEVEL: &str = "warn";

/// Environment variables consulted for the diagnostic filter, in order
pub const LEVEL_ENV_VARS: [&str; 2] = ["HOSTPROBE_LOG", "RUST_LOG"];

impl DiagnosticsConfig {
    /// Create configuration from environment variables
    ///
    /// `HOSTPROBE_LOG` wins over `RUST_LOG`; blank values are ignored.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create configuration from an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(level) = LEVEL_ENV_VARS
            .iter()
            .filter_map(|key| lookup(key))
            .find(|value| !value.trim().is_empty())
        {
            config.level = level;
        }

        config
    }

    /// Verbose configuration (debug level, no colors)
    #[must_use]
    pub fn verbose() -> Self {
        Self {
            level: "debug".to_string(),
            colors: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_default_level() {
        let config = DiagnosticsConfig::from_lookup(lookup(&[]));
        assert_eq!(config.level, DEFAULT_DIAGNOSTICS_LEVEL);
    }

    #[test]
    fn test_hostprobe_log_wins() {
        let config = DiagnosticsConfig::from_lookup(lookup(&[
            ("RUST_LOG", "trace"),
            ("HOSTPROBE_LOG", "hostprobe_system=debug"),
        ]));
        assert_eq!(config.level, "hostprobe_system=debug");
    }

    #[test]
    fn test_rust_log_fallback_and_blank_values() {
        let config =
            DiagnosticsConfig::from_lookup(lookup(&[("HOSTPROBE_LOG", "  "), ("RUST_LOG", "info")]));
        assert_eq!(config.level, "info");
    }
}
