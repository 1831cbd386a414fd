//! Domain Layer
//!
//! Contains entities, value objects, and the flag source trait.

pub mod entities;
pub mod repository;
pub mod value_objects;

// Re-exports
pub use entities::LoginOutcome;
pub use repository::FlagSource;
pub use value_objects::{BYPASS_PATTERNS, Credentials, SimulatedQuery};
