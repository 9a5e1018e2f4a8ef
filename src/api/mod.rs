//! API Module
//!
//! HTTP handlers and routing for the problem lookup server.
//!
//! # Endpoints
//! - `GET /problems/slug/:slug` - Resolve a problem by slug
//! - `GET /problems/id/:id` - Resolve a problem by numeric ID
//! - `GET /problems/title/:title` - Resolve a problem by display title
//! - `GET /problems/daily` - Resolve today's featured problem
//! - `GET /stats` - Get cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
