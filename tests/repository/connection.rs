use folio_query::database::DatabaseConnection;
use folio_query::documents::{DocumentFilters, DocumentRepository};
use folio_query::query_builder::PageRequest;
use folio_query::PaginationConfig;
use sqlx::PgPool;

#[sqlx::test]
#[ignore = "requires PostgreSQL at DATABASE_URL"]
async fn test_connection_lifecycle(pool: PgPool) -> folio_query::Result<()> {
    let db = DatabaseConnection::from_pool(pool);
    assert!(db.health_check().await?);
    assert!(!db.is_closed());

    let documents = DocumentRepository::new(db.pool().clone(), PaginationConfig::default());
    let page = documents
        .list(PageRequest::default(), &DocumentFilters::default())
        .await?;
    assert_eq!(page.total, 0);
    assert_eq!(page.page_size, 20);

    let handle = db.clone();
    db.close().await;
    assert!(handle.is_closed());
    assert!(handle.health_check().await.is_err());

    Ok(())
}
