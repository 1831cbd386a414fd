//! Application Configuration
//!
//! Configuration for the challenge, resolved once at startup.

use std::fmt;

use crate::error::{ChallengeError, ChallengeResult};

/// Flag revealed when `FLAG` is unset or empty
pub const DEFAULT_FLAG: &str = "flag{sql_injection_success}";

/// Environment variable holding the flag
pub const FLAG_ENV: &str = "FLAG";

/// Environment variable overriding the form body limit
pub const MAX_FORM_BYTES_ENV: &str = "MAX_FORM_BYTES";

/// Challenge configuration
#[derive(Clone)]
pub struct ChallengeConfig {
    /// Flag revealed on a successful bypass
    pub flag: String,
    /// Largest accepted form body, in bytes
    pub max_form_bytes: usize,
}

impl Default for ChallengeConfig {
    fn default() -> Self {
        Self {
            flag: DEFAULT_FLAG.to_string(),
            max_form_bytes: 64 * 1024,
        }
    }
}

impl ChallengeConfig {
    /// Build config from the process environment
    pub fn from_env() -> ChallengeResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup
    ///
    /// An empty `FLAG` counts as unset.
    pub fn from_lookup<F>(lookup: F) -> ChallengeResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let flag = lookup(FLAG_ENV)
            .filter(|flag| !flag.is_empty())
            .unwrap_or(defaults.flag);

        let max_form_bytes = match lookup(MAX_FORM_BYTES_ENV).filter(|raw| !raw.trim().is_empty()) {
            Some(raw) => raw
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|bytes| *bytes > 0)
                .ok_or_else(|| ChallengeError::InvalidConfig {
                    key: MAX_FORM_BYTES_ENV,
                    value: raw.clone(),
                })?,
            None => defaults.max_form_bytes,
        };

        Ok(Self {
            flag,
            max_form_bytes,
        })
    }

    /// Config with a fixed flag (for tests and embedding)
    pub fn with_flag(flag: impl Into<String>) -> Self {
        Self {
            flag: flag.into(),
            ..Default::default()
        }
    }

    pub fn uses_default_flag(&self) -> bool {
        self.flag == DEFAULT_FLAG
    }
}

// フラグ値はログに出さない
impl fmt::Debug for ChallengeConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChallengeConfig")
            .field("flag", &"<redacted>")
            .field("max_form_bytes", &self.max_form_bytes)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = ChallengeConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.flag, DEFAULT_FLAG);
        assert!(config.uses_default_flag());
        assert_eq!(config.max_form_bytes, 64 * 1024);
    }

    #[test]
    fn test_flag_from_env() {
        let config = ChallengeConfig::from_lookup(lookup_from(&[("FLAG", "custom{test}")])).unwrap();
        assert_eq!(config.flag, "custom{test}");
        assert!(!config.uses_default_flag());
    }

    #[test]
    fn test_empty_flag_falls_back() {
        let config = ChallengeConfig::from_lookup(lookup_from(&[("FLAG", "")])).unwrap();
        assert_eq!(config.flag, DEFAULT_FLAG);
    }

    #[test]
    fn test_flag_is_not_trimmed() {
        let config = ChallengeConfig::from_lookup(lookup_from(&[("FLAG", " f{x} ")])).unwrap();
        assert_eq!(config.flag, " f{x} ");
    }

    #[test]
    fn test_max_form_bytes_override() {
        let config =
            ChallengeConfig::from_lookup(lookup_from(&[("MAX_FORM_BYTES", "1024")])).unwrap();
        assert_eq!(config.max_form_bytes, 1024);
    }

    #[test]
    fn test_empty_max_form_bytes_falls_back() {
        let config = ChallengeConfig::from_lookup(lookup_from(&[("MAX_FORM_BYTES", " ")])).unwrap();
        assert_eq!(config.max_form_bytes, 64 * 1024);
    }

    #[test]
    fn test_invalid_max_form_bytes() {
        let err = ChallengeConfig::from_lookup(lookup_from(&[("MAX_FORM_BYTES", "lots")]))
            .unwrap_err();
        assert!(matches!(
            err,
            ChallengeError::InvalidConfig { key: "MAX_FORM_BYTES", .. }
        ));

        let err =
            ChallengeConfig::from_lookup(lookup_from(&[("MAX_FORM_BYTES", "0")])).unwrap_err();
        assert!(matches!(err, ChallengeError::InvalidConfig { .. }));
    }

    #[test]
    fn test_debug_redacts_flag() {
        let config = ChallengeConfig::with_flag("secret{value}");
        let debug = format!("{:?}", config);
        assert!(!debug.contains("secret{value}"));
        assert!(debug.contains("<redacted>"));
    }
}
