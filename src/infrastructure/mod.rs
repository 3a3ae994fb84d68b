//! Infrastructure Layer
//!
//! Contains implementations for external collaborators:
//! - SQLite connection pool and schema migrations
//! - Repository implementations of the domain traits

pub mod database;
pub mod repositories;
