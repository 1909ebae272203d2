//! Configuration for dispatch cycles.

use std::time::Duration;

use fanout_common::error::{CommonError, Result};

/// Dispatch configuration.
#[derive(Debug, Clone)]
pub struct DispatchConfig {
    /// Shared deadline applied uniformly to all workers in a cycle.
    pub timeout: Duration,
    /// Simulated per-payload work duration.
    pub work_delay: Duration,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_millis(200),
            work_delay: Duration::from_millis(500),
        }
    }
}

impl DispatchConfig {
    /// Create a configuration with the given timeout and work delay.
    pub fn new(timeout: Duration, work_delay: Duration) -> Self {
        Self {
            timeout,
            work_delay,
        }
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.timeout.is_zero() {
            return Err(CommonError::configuration_error("timeout must be non-zero"));
        }
        if self.work_delay.is_zero() {
            return Err(CommonError::configuration_error(
                "work delay must be non-zero",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DispatchConfig::default();
        assert_eq!(config.timeout, Duration::from_millis(200));
        assert_eq!(config.work_delay, Duration::from_millis(500));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_durations_rejected() {
        let config = DispatchConfig::new(Duration::ZERO, Duration::from_millis(500));
        assert!(matches!(
            config.validate(),
            Err(CommonError::ConfigurationError { .. })
        ));

        let config = DispatchConfig::new(Duration::from_millis(200), Duration::ZERO);
        assert!(matches!(
            config.validate(),
            Err(CommonError::ConfigurationError { .. })
        ));
    }
}
