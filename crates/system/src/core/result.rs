//! Extension traits for turning platform answers into `SystemResult`

use crate::core::error::{SystemError, SystemResult};

/// Extension trait for `Option` values returned by platform queries
///
/// Most OS facilities answer "unknown" with `None`; these helpers attach the
/// metric name so a degraded field can be reported meaningfully.
pub trait SystemOptionExt<T> {
    /// Convert `None` into [`SystemError::NotFound`] for the named metric
    fn or_not_found(self, metric: impl Into<String>) -> SystemResult<T>;

    /// Convert `None` into [`SystemError::NotSupported`] for the named metric
    fn or_not_supported(self, metric: impl Into<String>) -> SystemResult<T>;
}

impl<T> SystemOptionExt<T> for Option<T> {
    fn or_not_found(self, metric: impl Into<String>) -> SystemResult<T> {
        self.ok_or_else(|| SystemError::NotFound(metric.into()))
    }

    fn or_not_supported(self, metric: impl Into<String>) -> SystemResult<T> {
        self.ok_or_else(|| SystemError::feature_not_supported(metric))
    }
}

/// Extension trait for results of system operations
pub trait SystemResultExt<T> {
    /// Prefix the error message with the component that produced it
    fn with_component(self, component: &str) -> SystemResult<T>;
}

impl<T> SystemResultExt<T> for SystemResult<T> {
    fn with_component(self, component: &str) -> SystemResult<T> {
        self.map_err(|e| match e {
            SystemError::CollectionFailed(msg) => {
                SystemError::CollectionFailed(format!("{component}: {msg}"))
            }
            other => SystemError::platform_error(format!(
                "System operation failed in component {component}: {other}"
            )),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_or_not_found() {
        let missing: Option<u64> = None;
        let error = missing.or_not_found("total memory").unwrap_err();
        assert!(matches!(error, SystemError::NotFound(ref m) if m == "total memory"));

        assert_eq!(Some(7).or_not_found("cores").unwrap(), 7);
    }

    #[test]
    fn test_or_not_supported() {
        let missing: Option<String> = None;
        let error = missing.or_not_supported("host name").unwrap_err();
        assert!(matches!(error, SystemError::NotSupported(_)));
    }

    #[test]
    fn test_with_component() {
        let result: SystemResult<()> = Err(SystemError::NotFound("pid 42".into()));
        let error = result.with_component("process").unwrap_err();
        assert!(matches!(error, SystemError::PlatformError(_)));
        assert!(error.to_string().contains("component process"));

        let fatal: SystemResult<()> = Err(SystemError::CollectionFailed("empty".into()));
        let error = fatal.with_component("process").unwrap_err();
        assert!(!error.is_recoverable());
        assert_eq!(error.to_string(), "Metric collection failed: process: empty");
    }
}
