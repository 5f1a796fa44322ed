//! Repository Tests Module
//!
//! Tests against PostgreSQL using SQLx native testing. Each test gets a fresh
//! database with `migrations/` applied.

pub mod connection;
pub mod documents;
