use crate::query_builder::{JoinType, ProjectionMap};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::sync::OnceLock;
use thiserror::Error;
use uuid::Uuid;

/// Document row joined with its category name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Document {
    pub id: Uuid,
    pub title: String,
    pub status: String,
    pub tag: Option<String>,
    pub content_type: String,
    pub checksum: String,
    pub category_id: Option<Uuid>,
    pub category_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// New Document for creation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewDocument {
    pub title: String,
    pub status: String,
    pub tag: Option<String>,
    pub content_type: String,
    pub checksum: String,
    pub category_id: Option<Uuid>,
}

#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("Document not found")]
    NotFound,

    #[error("Document with this checksum already exists")]
    Duplicate,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl DocumentError {
    /// Storage error to domain error via [`map_error`](crate::repository::map_error)
    pub fn from_storage(err: sqlx::Error) -> Self {
        crate::repository::map_error(err, DocumentError::NotFound, DocumentError::Duplicate)
    }
}

/// Projection over `public.documents d LEFT JOIN public.categories c`
pub fn document_projection() -> &'static ProjectionMap {
    static PROJECTION: OnceLock<ProjectionMap> = OnceLock::new();
    PROJECTION.get_or_init(|| {
        ProjectionMap::new("public", "documents", "d")
            .project("id", "id")
            .project("title", "title")
            .project("status", "status")
            .project("tag", "tag")
            .project("content_type", "content_type")
            .project("checksum", "checksum")
            .project("category_id", "category_id")
            .project("created_at", "created_at")
            .project("updated_at", "updated_at")
            .join(
                "public",
                "categories",
                "c",
                JoinType::Left,
                "c.id = d.category_id",
            )
            .project_as("name", "category_name")
    })
}
