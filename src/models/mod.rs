//! Domain models and HTTP response bodies
//!
//! `problem` holds the resolved catalog entry handed to callers;
//! `responses` holds the DTOs serialized by the lookup server.

pub mod problem;
pub mod responses;

// Re-export commonly used types
pub use problem::{MetaData, Parameter, Problem, Stats};
pub use responses::{ErrorResponse, HealthResponse, StatsResponse};
