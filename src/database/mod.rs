//! # Database Connection
//!
//! Pool construction from [`DatabaseConfig`](crate::config::DatabaseConfig).
//! The pool is the executor every repository helper runs against.

pub mod connection;

pub use connection::DatabaseConnection;
