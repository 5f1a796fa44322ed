use super::{document_projection, Document, DocumentError, DocumentFilters, NewDocument};
use crate::config::PaginationConfig;
use crate::query_builder::{Builder, PageRequest, PageResult, SortField, SqlArg};
use crate::repository::{
    exec_expect_one, query_count, query_many, query_one, query_optional, with_tx,
};
use sqlx::PgPool;
use tracing::debug;
use uuid::Uuid;

/// Fields a free-text `search` is matched against
pub const SEARCH_FIELDS: &[&str] = &["title", "category_name"];

const INSERT_DOCUMENT: &str = "INSERT INTO public.documents \
     (title, status, tag, content_type, checksum, category_id) \
     VALUES ($1, $2, $3, $4, $5, $6) RETURNING id";

const UPDATE_STATUS: &str =
    "UPDATE public.documents SET status = $1, updated_at = NOW() WHERE id = $2";

const DELETE_DOCUMENT: &str = "DELETE FROM public.documents WHERE id = $1";

#[derive(Debug, Clone)]
pub struct DocumentRepository {
    pool: PgPool,
    pagination: PaginationConfig,
}

impl DocumentRepository {
    pub fn new(pool: PgPool, pagination: PaginationConfig) -> Self {
        Self { pool, pagination }
    }

    /// Builder over the document projection, newest first by default
    pub fn builder() -> Builder<'static> {
        Builder::new(document_projection(), [SortField::desc("created_at")])
    }

    /// The filtered, searched and sorted builder backing [`list`](Self::list)
    pub fn list_builder(request: &PageRequest, filters: &DocumentFilters) -> Builder<'static> {
        filters
            .apply(Self::builder())
            .where_search(request.search.as_deref(), SEARCH_FIELDS)
            .order_by_fields(request.sort.clone())
    }

    pub async fn list(
        &self,
        request: PageRequest,
        filters: &DocumentFilters,
    ) -> Result<PageResult<Document>, DocumentError> {
        let request = request.normalized(&self.pagination);
        let builder = Self::list_builder(&request, filters);

        let (count_sql, count_args) = builder.build_count();
        let total = query_count(&self.pool, &count_sql, &count_args).await?;

        if total == 0 || request.offset() >= total {
            debug!(total, page = request.page, "No documents on requested page");
            return Ok(PageResult::for_request(Vec::new(), total, &request));
        }

        let (sql, args) = builder.build_page(request.page, request.page_size);
        let data = query_many(&self.pool, &sql, &args).await?;

        Ok(PageResult::for_request(data, total, &request))
    }

    pub async fn get(&self, id: Uuid) -> Result<Document, DocumentError> {
        let (sql, args) = Self::builder().build_single("id", id);
        query_one(&self.pool, &sql, &args)
            .await
            .map_err(DocumentError::from_storage)
    }

    pub async fn find_by_checksum(&self, checksum: &str) -> Result<Option<Document>, DocumentError> {
        let (sql, args) = Self::builder()
            .where_equals("checksum", Some(checksum))
            .build_single_or_null();
        Ok(query_optional(&self.pool, &sql, &args).await?)
    }

    /// Insert and return the stored row, `Duplicate` when the checksum exists
    pub async fn create(&self, new_document: NewDocument) -> Result<Document, DocumentError> {
        with_tx(&self.pool, |tx| {
            Box::pin(async move {
                let args = vec![
                    SqlArg::from(new_document.title),
                    SqlArg::from(new_document.status),
                    SqlArg::from(new_document.tag),
                    SqlArg::from(new_document.content_type),
                    SqlArg::from(new_document.checksum),
                    SqlArg::from(new_document.category_id),
                ];

                let (id,): (Uuid,) = query_one(&mut **tx, INSERT_DOCUMENT, &args)
                    .await
                    .map_err(DocumentError::from_storage)?;

                let (sql, args) = Self::builder().build_single("id", id);
                let document: Document = query_one(&mut **tx, &sql, &args)
                    .await
                    .map_err(DocumentError::from_storage)?;
                Ok::<_, DocumentError>(document)
            })
        })
        .await
    }

    pub async fn update_status(&self, id: Uuid, status: &str) -> Result<(), DocumentError> {
        let args = [SqlArg::from(status), SqlArg::from(id)];
        exec_expect_one(&self.pool, UPDATE_STATUS, &args)
            .await
            .map_err(DocumentError::from_storage)?;
        Ok(())
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), DocumentError> {
        exec_expect_one(&self.pool, DELETE_DOCUMENT, &[SqlArg::from(id)])
            .await
            .map_err(DocumentError::from_storage)?;
        Ok(())
    }
}
