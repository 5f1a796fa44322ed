//! # Documents Repository
//!
//! Document listing, lookup and mutation over `public.documents`, joined with
//! `public.categories` for the category name.

pub mod filters;
pub mod model;
pub mod repository;

pub use filters::DocumentFilters;
pub use model::{document_projection, Document, DocumentError, NewDocument};
pub use repository::{DocumentRepository, SEARCH_FIELDS};
