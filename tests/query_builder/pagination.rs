use folio_query::config::PaginationConfig;
use folio_query::query_builder::{total_pages, LimitOffset, PageRequest, PageResult, SortField};

fn config() -> PaginationConfig {
    PaginationConfig {
        default_page_size: 25,
        max_page_size: 50,
    }
}

#[test]
fn test_normalize_applies_defaults_and_bounds() {
    let request = PageRequest::new(0, 0).normalized(&config());
    assert_eq!(request.page, 1);
    assert_eq!(request.page_size, 25);

    let request = PageRequest::new(-3, 500).normalized(&config());
    assert_eq!(request.page, 1);
    assert_eq!(request.page_size, 50);

    let request = PageRequest::new(4, 10).normalized(&config());
    assert_eq!(request.page, 4);
    assert_eq!(request.page_size, 10);
    assert_eq!(request.offset(), 30);
}

#[test]
fn test_normalize_drops_blank_search() {
    let request = PageRequest::new(1, 10).with_search("   ").normalized(&config());
    assert_eq!(request.search, None);

    let request = PageRequest::new(1, 10)
        .with_search("  invoice ")
        .normalized(&config());
    assert_eq!(request.search.as_deref(), Some("invoice"));
}

#[test]
fn test_request_from_query_json() {
    let request: PageRequest = serde_json::from_value(serde_json::json!({
        "page": 2,
        "page_size": 15,
        "sort": "title,-created_at"
    }))
    .unwrap();

    assert_eq!(request.page, 2);
    assert_eq!(
        request.sort,
        vec![SortField::asc("title"), SortField::desc("created_at")]
    );

    let request: PageRequest = serde_json::from_value(serde_json::json!({})).unwrap();
    assert_eq!(request, PageRequest::default());
}

#[test]
fn test_total_pages_floor_of_one() {
    assert_eq!(total_pages(0, 10), 1);
    assert_eq!(total_pages(1, 10), 1);
    assert_eq!(total_pages(10, 10), 1);
    assert_eq!(total_pages(11, 10), 2);
    assert_eq!(total_pages(95, 20), 5);
}

#[test]
fn test_page_result_navigation() {
    let result = PageResult::new(vec![1, 2, 3], 23, 2, 10);
    assert_eq!(result.total_pages, 3);
    assert!(result.has_next_page());

    let last = PageResult::new(vec![21, 22, 23], 23, 3, 10);
    assert!(!last.has_next_page());
}

#[test]
fn test_empty_result_serializes_empty_array() {
    let result: PageResult<String> = PageResult::empty(1, 20);
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["data"], serde_json::json!([]));
    assert_eq!(json["total"], 0);
    assert_eq!(json["total_pages"], 1);
}

#[test]
fn test_null_data_deserializes_empty() {
    let result: PageResult<String> = serde_json::from_value(serde_json::json!({
        "data": null,
        "total": 0,
        "page": 1,
        "page_size": 20,
        "total_pages": 1
    }))
    .unwrap();
    assert!(result.data.is_empty());
}

#[test]
fn test_limit_offset_sql() {
    assert_eq!(LimitOffset::from_page(1, 20).to_sql(), " LIMIT 20 OFFSET 0");
    assert_eq!(LimitOffset::from_page(3, 20).to_sql(), " LIMIT 20 OFFSET 40");
}
