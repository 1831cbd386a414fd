//! Domain Entities

/// Result of evaluating one login submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    /// The simulated query was rewritten; carries the flag to reveal
    Success { flag: String },
    /// The query kept its intended logic
    Failure,
}

impl LoginOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, LoginOutcome::Success { .. })
    }

    /// Revealed flag, only present on success
    pub fn flag(&self) -> Option<&str> {
        match self {
            LoginOutcome::Success { flag } => Some(flag),
            LoginOutcome::Failure => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_exposes_flag() {
        let outcome = LoginOutcome::Success {
            flag: "flag{x}".to_string(),
        };
        assert!(outcome.is_success());
        assert_eq!(outcome.flag(), Some("flag{x}"));
    }

    #[test]
    fn test_failure_has_no_flag() {
        assert!(!LoginOutcome::Failure.is_success());
        assert_eq!(LoginOutcome::Failure.flag(), None);
    }
}
