//! Service layer for todo-read
//!
//! Orchestrates the list query between transports and the repository port.

#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]

mod error;
pub mod reporter;
mod todo_query_service;

pub use error::ServiceError;
pub use reporter::{
    DatabaseErrorReport, NoopReporter, QueryPerformance, QueryReporter, TracingReporter,
};
pub use todo_query_service::TodoQueryService;
