//! Presentation Layer
//!
//! Form DTO and extractor, HTML page, handlers, and router.

pub mod dto;
pub mod extract;
pub mod handlers;
pub mod page;
pub mod router;

pub use handlers::ChallengeAppState;
pub use router::{challenge_router, challenge_router_generic};
