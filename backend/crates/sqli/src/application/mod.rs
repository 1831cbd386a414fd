//! Application Layer - Use Cases
//!
//! This layer orchestrates domain logic and the flag source.

pub mod config;
pub mod evaluate_login;

// Re-exports
pub use config::ChallengeConfig;
pub use evaluate_login::{EvaluateLoginInput, EvaluateLoginUseCase};
