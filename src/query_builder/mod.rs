//! # Query Builder System
//!
//! Projection-driven SQL construction for domain repositories.
//!
//! ## Overview
//!
//! A repository declares once how its table columns map to logical field names
//! ([`ProjectionMap`]), then builds one [`Builder`] per request from optional
//! client filters, sort and paging. Every value travels as a positional `$N`
//! argument ([`SqlArg`]); SQL text is only ever assembled from projection
//! entries and fixed keywords.
//!
//! ## Key Components
//!
//! - [`projection`] - table, alias, joins and logical-to-column mapping
//! - [`conditions`] - WHERE fragments carrying their own argument slots
//! - [`builder`] - condition accumulation and the five query shapes
//! - [`sort`] - the `name,-created_at` sort DSL
//! - [`pagination`] - page request normalization and page results
//!
//! ## Example Usage
//!
//! ```rust
//! use folio_query::query_builder::{Builder, ProjectionMap, SortField};
//!
//! let projection = ProjectionMap::new("public", "documents", "d")
//!     .project("id", "id")
//!     .project("title", "title")
//!     .project("created_at", "created_at");
//!
//! let (sql, args) = Builder::new(&projection, [SortField::desc("created_at")])
//!     .where_search(Some("invoice"), &["title"])
//!     .build_page(2, 20);
//!
//! assert!(sql.ends_with("ORDER BY d.created_at DESC LIMIT 20 OFFSET 20"));
//! assert_eq!(args.len(), 1);
//! ```

pub mod args;
pub mod builder;
pub mod conditions;
pub mod joins;
pub mod pagination;
pub mod projection;
pub mod sort;

pub(crate) use args::bind_args;

pub use args::{ArgKind, SqlArg, TypedArg};
pub use builder::Builder;
pub use conditions::{escape_like, Comparison, Condition};
pub use joins::{JoinClause, JoinType};
pub use pagination::{total_pages, LimitOffset, PageRequest, PageResult};
pub use projection::ProjectionMap;
pub use sort::{parse_sort_fields, SortDirection, SortField};
