//! Infrastructure Layer
//!
//! Flag source implementations.

pub mod flag;
