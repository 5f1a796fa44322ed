use folio_query::config::PaginationConfig;
use folio_query::documents::{DocumentError, DocumentFilters, DocumentRepository, NewDocument};
use folio_query::query_builder::{PageRequest, SqlArg};
use folio_query::repository::query_one;
use sqlx::PgPool;
use uuid::Uuid;

fn repository(pool: PgPool) -> DocumentRepository {
    DocumentRepository::new(
        pool,
        PaginationConfig {
            default_page_size: 2,
            max_page_size: 5,
        },
    )
}

fn new_document(title: &str, status: &str, category_id: Option<Uuid>) -> NewDocument {
    NewDocument {
        title: title.to_string(),
        status: status.to_string(),
        tag: None,
        content_type: "application/pdf".to_string(),
        checksum: format!("sha256:{}", title.to_lowercase().replace(' ', "-")),
        category_id,
    }
}

async fn category(pool: &PgPool, name: &str) -> sqlx::Result<Uuid> {
    let (id,): (Uuid,) = query_one(
        pool,
        "INSERT INTO public.categories (name) VALUES ($1) RETURNING id",
        &[SqlArg::from(name)],
    )
    .await?;
    Ok(id)
}

#[sqlx::test]
#[ignore = "requires PostgreSQL at DATABASE_URL"]
async fn test_document_crud(pool: PgPool) -> Result<(), DocumentError> {
    let receipts = category(&pool, "Receipts").await?;
    let documents = repository(pool);

    let created = documents
        .create(new_document("March Invoice", "draft", Some(receipts)))
        .await?;
    assert_eq!(created.title, "March Invoice");
    assert_eq!(created.category_name.as_deref(), Some("Receipts"));
    assert_eq!(created.tag, None);

    let found = documents.get(created.id).await?;
    assert_eq!(found, created);

    let by_checksum = documents.find_by_checksum(&created.checksum).await?;
    assert_eq!(by_checksum.map(|d| d.id), Some(created.id));
    assert!(documents.find_by_checksum("sha256:missing").await?.is_none());

    documents.update_status(created.id, "final").await?;
    assert_eq!(documents.get(created.id).await?.status, "final");

    documents.delete(created.id).await?;
    assert!(matches!(
        documents.get(created.id).await,
        Err(DocumentError::NotFound)
    ));
    assert!(matches!(
        documents.delete(created.id).await,
        Err(DocumentError::NotFound)
    ));
    assert!(matches!(
        documents.update_status(created.id, "final").await,
        Err(DocumentError::NotFound)
    ));

    Ok(())
}

#[sqlx::test]
#[ignore = "requires PostgreSQL at DATABASE_URL"]
async fn test_duplicate_checksum_rolls_back(pool: PgPool) -> Result<(), DocumentError> {
    let documents = repository(pool.clone());
    documents.create(new_document("Lease", "final", None)).await?;

    let duplicate = documents.create(new_document("Lease", "draft", None)).await;
    assert!(matches!(duplicate, Err(DocumentError::Duplicate)));

    let page = documents
        .list(PageRequest::default(), &DocumentFilters::default())
        .await?;
    assert_eq!(page.total, 1);
    assert_eq!(page.data[0].status, "final");

    Ok(())
}

#[sqlx::test]
#[ignore = "requires PostgreSQL at DATABASE_URL"]
async fn test_list_pages_filters_and_search(pool: PgPool) -> Result<(), DocumentError> {
    let receipts = category(&pool, "Receipts").await?;
    let contracts = category(&pool, "Contracts").await?;
    let documents = repository(pool);

    for (title, status, category_id) in [
        ("Alpha Receipt", "final", Some(receipts)),
        ("Beta Receipt", "draft", Some(receipts)),
        ("Gamma Lease", "final", Some(contracts)),
        ("Delta Notes", "final", None),
        ("100% Refund", "draft", None),
    ] {
        documents
            .create(new_document(title, status, category_id))
            .await?;
    }

    // default page size applies, sorted by title
    let first = documents
        .list(
            PageRequest::default().with_sort("title"),
            &DocumentFilters::default(),
        )
        .await?;
    assert_eq!(first.total, 5);
    assert_eq!(first.page_size, 2);
    assert_eq!(first.total_pages, 3);
    let titles: Vec<&str> = first.data.iter().map(|d| d.title.as_str()).collect();
    assert_eq!(titles, vec!["100% Refund", "Alpha Receipt"]);

    let finals = DocumentFilters {
        status: Some("final".to_string()),
        ..DocumentFilters::default()
    };
    let page = documents
        .list(PageRequest::new(1, 5).with_sort("-title"), &finals)
        .await?;
    let titles: Vec<&str> = page.data.iter().map(|d| d.title.as_str()).collect();
    assert_eq!(titles, vec!["Gamma Lease", "Delta Notes", "Alpha Receipt"]);

    // search also matches the joined category name
    let page = documents
        .list(
            PageRequest::new(1, 5).with_search("contracts"),
            &DocumentFilters::default(),
        )
        .await?;
    assert_eq!(page.total, 1);
    assert_eq!(page.data[0].title, "Gamma Lease");

    // `%` in the search text is literal
    let page = documents
        .list(
            PageRequest::new(1, 5).with_search("0%"),
            &DocumentFilters::default(),
        )
        .await?;
    assert_eq!(page.total, 1);
    assert_eq!(page.data[0].title, "100% Refund");

    let uncategorized = DocumentFilters {
        category: Some(None),
        ..DocumentFilters::default()
    };
    let page = documents
        .list(PageRequest::new(1, 5), &uncategorized)
        .await?;
    assert_eq!(page.total, 2);

    let in_categories = DocumentFilters {
        category_ids: vec![receipts, contracts],
        status: Some("final".to_string()),
        ..DocumentFilters::default()
    };
    let page = documents
        .list(PageRequest::new(1, 5), &in_categories)
        .await?;
    assert_eq!(page.total, 2);

    Ok(())
}

#[sqlx::test]
#[ignore = "requires PostgreSQL at DATABASE_URL"]
async fn test_list_empty_and_past_last_page(pool: PgPool) -> Result<(), DocumentError> {
    let documents = repository(pool);

    let empty = documents
        .list(PageRequest::default(), &DocumentFilters::default())
        .await?;
    assert_eq!(empty.total, 0);
    assert_eq!(empty.total_pages, 1);
    assert!(empty.data.is_empty());

    documents.create(new_document("Only", "draft", None)).await?;
    let past = documents
        .list(PageRequest::new(9, 2), &DocumentFilters::default())
        .await?;
    assert_eq!(past.total, 1);
    assert_eq!(past.page, 9);
    assert!(past.data.is_empty());

    Ok(())
}
