#![allow(clippy::doc_markdown)] // Allow technical terms like PostgreSQL, SQLx in docs
#![allow(clippy::missing_errors_doc)] // Allow public functions without # Errors sections
#![allow(clippy::must_use_candidate)] // Allow methods without must_use when context is clear

//! # Folio Query
//!
//! Dynamic query construction and pagination for PostgreSQL-backed repositories.
//!
//! ## Overview
//!
//! Repositories declare once how their table columns map to logical field names,
//! then compose per-request filters, free-text search, sorting and paging through
//! method calls. The builder renders SQL text plus a flat, correctly numbered
//! argument list; no caller-supplied value is ever concatenated into SQL.
//!
//! ## Module Organization
//!
//! - [`query_builder`] - projections, conditions, the builder, sort and pagination types
//! - [`repository`] - transaction wrapper, query execution, storage error mapping
//! - [`documents`] - a complete repository built on the above
//! - [`config`] - layered configuration with startup validation
//! - [`database`] - connection pool setup
//! - [`logging`] - structured `tracing` initialisation
//! - [`error`] - crate-level error type
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use folio_query::config::ConfigLoader;
//! use folio_query::database::DatabaseConnection;
//! use folio_query::documents::{DocumentFilters, DocumentRepository};
//! use folio_query::query_builder::PageRequest;
//!
//! # async fn example() -> folio_query::Result<()> {
//! folio_query::logging::init_structured_logging();
//! let config = ConfigLoader::load()?;
//! let db = DatabaseConnection::connect(&config.database).await?;
//!
//! let documents = DocumentRepository::new(db.pool().clone(), config.pagination);
//! let request = PageRequest::new(1, 20).with_search("invoice").with_sort("-created_at");
//! let page = documents.list(request, &DocumentFilters::default()).await?;
//! println!("{} of {} documents", page.data.len(), page.total);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod database;
pub mod documents;
pub mod error;
pub mod logging;
pub mod query_builder;
pub mod repository;

pub use config::{ConfigLoader, ConfigurationError, FolioConfig, PaginationConfig};
pub use error::{FolioError, Result};
pub use query_builder::{
    parse_sort_fields, Builder, PageRequest, PageResult, ProjectionMap, SortDirection, SortField,
    SqlArg,
};
pub use repository::{exec_expect_one, map_error, query_many, query_one, with_tx};
