use crate::query_builder::{Builder, Comparison};
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Optional document list filters; every `None`/empty field is skipped
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentFilters {
    pub status: Option<String>,
    pub tag: Option<String>,
    pub content_type: Option<String>,
    /// Substring match on the title
    pub title: Option<String>,
    pub category_ids: Vec<Uuid>,
    /// `Some(None)` selects uncategorized documents
    pub category: Option<Option<Uuid>>,
    pub created_after: Option<DateTime<Utc>>,
    pub created_before: Option<DateTime<Utc>>,
}

impl DocumentFilters {
    pub fn apply<'p>(&self, builder: Builder<'p>) -> Builder<'p> {
        let builder = builder
            .where_equals("status", self.status.as_deref())
            .where_equals("tag", self.tag.as_deref())
            .where_equals("content_type", self.content_type.as_deref())
            .where_contains("title", self.title.as_deref())
            .where_in("category_id", self.category_ids.iter().copied())
            .where_compare("created_at", Comparison::Gte, self.created_after)
            .where_compare("created_at", Comparison::Lt, self.created_before);

        match self.category {
            Some(category) => builder.where_nullable("category_id", category),
            None => builder,
        }
    }
}
