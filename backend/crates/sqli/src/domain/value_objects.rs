//! Domain Value Objects
//!
//! Immutable value types for the login challenge.

use std::fmt;

/// Substrings that mark a submission as having rewritten the query's logic.
///
/// Checked in this order, case-sensitive, exact.
pub const BYPASS_PATTERNS: [&str; 2] = ["' OR '1'='1", "' OR 1=1"];

/// Submitted login credentials
///
/// Values are taken exactly as received. Nothing is trimmed, normalized, or
/// length-checked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// A string shaped like the SQL a vulnerable login would run
///
/// It is never executed. Its only use is [`SimulatedQuery::matched_pattern`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulatedQuery(String);

impl SimulatedQuery {
    /// Interpolate the credentials into the query template with no escaping.
    pub fn build(credentials: &Credentials) -> Self {
        Self(format!(
            "SELECT * FROM users WHERE username = '{}' AND password = '{}'",
            credentials.username, credentials.password
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First bypass pattern found in the query, if any
    pub fn matched_pattern(&self) -> Option<&'static str> {
        BYPASS_PATTERNS
            .iter()
            .copied()
            .find(|pattern| self.0.contains(pattern))
    }
}

impl fmt::Display for SimulatedQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_interpolates_verbatim() {
        let query = SimulatedQuery::build(&Credentials::new("admin", "secret"));
        assert_eq!(
            query.as_str(),
            "SELECT * FROM users WHERE username = 'admin' AND password = 'secret'"
        );
    }

    #[test]
    fn test_build_does_not_escape_quotes() {
        let query = SimulatedQuery::build(&Credentials::new("o'brien", ""));
        assert_eq!(
            query.as_str(),
            "SELECT * FROM users WHERE username = 'o'brien' AND password = ''"
        );
    }

    #[test]
    fn test_plain_credentials_do_not_bypass() {
        let query = SimulatedQuery::build(&Credentials::new("admin", "wrongpass"));
        assert_eq!(query.matched_pattern(), None);
    }

    #[test]
    fn test_empty_credentials_do_not_bypass() {
        let query = SimulatedQuery::build(&Credentials::default());
        assert_eq!(query.matched_pattern(), None);
    }

    #[test]
    fn test_quoted_tautology_in_username() {
        let query = SimulatedQuery::build(&Credentials::new("admin' OR '1'='1", "x"));
        assert_eq!(query.matched_pattern(), Some("' OR '1'='1"));
    }

    #[test]
    fn test_numeric_tautology_in_username() {
        let query = SimulatedQuery::build(&Credentials::new("admin' OR 1=1", "x"));
        assert_eq!(query.matched_pattern(), Some("' OR 1=1"));
    }

    #[test]
    fn test_tautology_in_password() {
        let query = SimulatedQuery::build(&Credentials::new("admin", "' OR '1'='1"));
        assert_eq!(query.matched_pattern(), Some("' OR '1'='1"));
    }

    #[test]
    fn test_first_pattern_wins_when_both_present() {
        let query = SimulatedQuery::build(&Credentials::new("a' OR 1=1", "b' OR '1'='1"));
        assert_eq!(query.matched_pattern(), Some("' OR '1'='1"));
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        let query = SimulatedQuery::build(&Credentials::new("admin' or '1'='1", "x"));
        assert_eq!(query.matched_pattern(), None);
    }

    #[test]
    fn test_matching_requires_exact_spacing() {
        let query = SimulatedQuery::build(&Credentials::new("admin'  OR 1=1", "x"));
        assert_eq!(query.matched_pattern(), None);

        let query = SimulatedQuery::build(&Credentials::new("admin' OR 1 = 1", "x"));
        assert_eq!(query.matched_pattern(), None);
    }

    #[test]
    fn test_template_quote_completes_password_payload() {
        // the opening quote around the password comes from the template
        let query = SimulatedQuery::build(&Credentials::new("admin", " OR 1=1"));
        assert_eq!(query.matched_pattern(), Some("' OR 1=1"));
    }
}
