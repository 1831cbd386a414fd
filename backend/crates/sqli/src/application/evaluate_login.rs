//! Evaluate Login Use Case
//!
//! Builds the simulated query from a submission and decides whether the
//! submission rewrote its logic.

use std::sync::Arc;

use crate::domain::entities::LoginOutcome;
use crate::domain::repository::FlagSource;
use crate::domain::value_objects::{Credentials, SimulatedQuery};

/// Input DTO for evaluate login
#[derive(Debug, Clone, Default)]
pub struct EvaluateLoginInput {
    pub username: String,
    pub password: String,
}

impl From<EvaluateLoginInput> for Credentials {
    fn from(input: EvaluateLoginInput) -> Self {
        Credentials::new(input.username, input.password)
    }
}

/// Evaluate Login Use Case
pub struct EvaluateLoginUseCase<F>
where
    F: FlagSource,
{
    flag_source: Arc<F>,
}

impl<F> EvaluateLoginUseCase<F>
where
    F: FlagSource,
{
    pub fn new(flag_source: Arc<F>) -> Self {
        Self { flag_source }
    }

    /// Evaluate one submission. The flag source is only consulted on success.
    pub async fn execute(&self, input: EvaluateLoginInput) -> LoginOutcome {
        let credentials = Credentials::from(input);
        let query = SimulatedQuery::build(&credentials);

        tracing::debug!(query = %query, "Built simulated query");

        match query.matched_pattern() {
            Some(pattern) => {
                tracing::info!(pattern = pattern, "Login bypass succeeded");
                LoginOutcome::Success {
                    flag: self.flag_source.flag().await,
                }
            }
            None => {
                tracing::debug!("Login rejected");
                LoginOutcome::Failure
            }
        }
    }
}
