//! Diagnostic logger builder

use tracing_subscriber::{EnvFilter, Registry, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::DiagnosticsConfig;
use crate::core::{LogError, LogResult};

/// Builds the global stderr subscriber for diagnostics
#[derive(Debug)]
pub struct DiagnosticsBuilder {
    config: DiagnosticsConfig,
}

impl DiagnosticsBuilder {
    /// Create builder from config
    #[must_use]
    pub fn from_config(config: DiagnosticsConfig) -> Self {
        Self { config }
    }

    /// Parse the filter directive
    ///
    /// # Errors
    ///
    /// Returns [`LogError::Filter`] if the directive cannot be parsed
    pub fn filter(&self) -> LogResult<EnvFilter> {
        EnvFilter::try_new(&self.config.level)
            .map_err(|e| LogError::Filter(format!("{}: {}", self.config.level, e)))
    }

    /// Build and install the subscriber
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Filter string cannot be parsed
    /// - A global subscriber is already installed
    pub fn build(self) -> LogResult<()> {
        let filter = self.filter()?;

        let fmt_layer = tracing_subscriber::fmt::layer()
            .compact()
            .with_writer(std::io::stderr)
            .with_ansi(self.config.colors)
            .with_target(true);

        Registry::default()
            .with(filter)
            .with(fmt_layer)
            .try_init()
            .map_err(|e| LogError::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn builder(level: &str) -> DiagnosticsBuilder {
        DiagnosticsBuilder::from_config(DiagnosticsConfig {
            level: level.to_string(),
            colors: false,
        })
    }

    #[rstest]
    #[case("warn")]
    #[case("hostprobe_system=debug,warn")]
    #[case("trace")]
    fn test_valid_filters(#[case] level: &str) {
        assert!(builder(level).filter().is_ok());
    }

    #[test]
    fn test_invalid_filter() {
        let error = builder("hostprobe=loud").filter().unwrap_err();
        assert!(matches!(error, LogError::Filter(_)));
        assert!(error.to_string().contains("hostprobe=loud"));
    }
}
