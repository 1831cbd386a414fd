//! Configured Flag Source
//!
//! Serves the flag resolved from configuration at startup.

use std::sync::Arc;

use crate::application::config::ChallengeConfig;
use crate::domain::repository::FlagSource;

/// Flag fixed for the lifetime of the process
#[derive(Clone)]
pub struct StaticFlagSource {
    flag: Arc<str>,
}

impl StaticFlagSource {
    pub fn new(flag: impl Into<Arc<str>>) -> Self {
        Self { flag: flag.into() }
    }
}

impl From<&ChallengeConfig> for StaticFlagSource {
    fn from(config: &ChallengeConfig) -> Self {
        Self::new(config.flag.as_str())
    }
}

impl FlagSource for StaticFlagSource {
    async fn flag(&self) -> String {
        self.flag.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::config::DEFAULT_FLAG;

    #[tokio::test]
    async fn test_from_default_config() {
        let source = StaticFlagSource::from(&ChallengeConfig::default());
        assert_eq!(source.flag().await, DEFAULT_FLAG);
    }

    #[tokio::test]
    async fn test_from_custom_config() {
        let source = StaticFlagSource::from(&ChallengeConfig::with_flag("custom{test}"));
        assert_eq!(source.flag().await, "custom{test}");
    }
}
