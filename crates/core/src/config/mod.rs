//! Configuration loading and schema definitions
//!
//! Shared configuration types used across the discovery stack.

mod loader;
mod schema;

pub use loader::Config;
pub use schema::*;
