//! Core types and rules for todo-read
//!
//! Domain types, parameter validation, filter translation, null-aware
//! ordering and pagination arithmetic shared by every other crate.

pub mod constants;
pub mod env_config;
mod error;
mod pagination;
mod query;
mod todo;

pub use constants::*;
pub use env_config::{env_parse_with_default, env_required};
pub use error::*;
pub use pagination::*;
pub use query::*;
pub use todo::*;
