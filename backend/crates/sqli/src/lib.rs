//! SQL Injection Login Challenge
//!
//! Clean Architecture structure:
//! - `domain/` - Credentials, simulated query, outcome, flag source trait
//! - `application/` - Configuration and the evaluate-login use case
//! - `infra/` - Flag source implementations
//! - `presentation/` - Form DTO and extractor, HTML page, handlers, router
//!
//! ## Challenge Model
//! - No database: the "query" is a string that is only pattern-matched
//! - Form values are interpolated without escaping, on purpose
//! - A submission whose query contains `' OR '1'='1` or `' OR 1=1` reveals the flag
//! - Every request is independent; nothing is stored between requests

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::{ChallengeConfig, DEFAULT_FLAG};
pub use error::{ChallengeError, ChallengeResult};
pub use infra::flag::StaticFlagSource;
pub use presentation::router::challenge_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

pub mod models {
    pub use crate::domain::entities::*;
    pub use crate::domain::value_objects::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod router {
    pub use crate::presentation::router::*;
}
