use super::sort::{parse_sort_fields, SortField};
use crate::config::PaginationConfig;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// LIMIT/OFFSET pair rendered onto paged queries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LimitOffset {
    pub limit: i64,
    pub offset: i64,
}

impl LimitOffset {
    /// Create from a 1-indexed page number and page size
    pub fn from_page(page: i64, page_size: i64) -> Self {
        let page = page.max(1);
        Self {
            limit: page_size,
            offset: (page - 1).saturating_mul(page_size),
        }
    }

    /// Convert to SQL string
    pub fn to_sql(&self) -> String {
        format!(" LIMIT {} OFFSET {}", self.limit, self.offset)
    }
}

/// Client-facing page request
///
/// Deserializes from query-string style input where `sort` is a comma-separated
/// field list (`"title,-created_at"`). Call [`normalize`](Self::normalize) before use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    #[serde(default = "default_page")]
    pub page: i64,
    #[serde(default)]
    pub page_size: i64,
    #[serde(default)]
    pub search: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_sort",
        serialize_with = "serialize_sort"
    )]
    pub sort: Vec<SortField>,
}

fn default_page() -> i64 {
    1
}

fn deserialize_sort<'de, D>(deserializer: D) -> Result<Vec<SortField>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.map(|s| parse_sort_fields(&s)).unwrap_or_default())
}

fn serialize_sort<S>(sort: &[SortField], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let rendered: Vec<String> = sort.iter().map(ToString::to_string).collect();
    serializer.serialize_str(&rendered.join(","))
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: default_page(),
            page_size: 0,
            search: None,
            sort: Vec::new(),
        }
    }
}

impl PageRequest {
    pub fn new(page: i64, page_size: i64) -> Self {
        Self {
            page,
            page_size,
            ..Self::default()
        }
    }

    pub fn with_search(mut self, search: &str) -> Self {
        self.search = Some(search.to_string());
        self
    }

    pub fn with_sort(mut self, sort: &str) -> Self {
        self.sort = parse_sort_fields(sort);
        self
    }

    /// Clamp page and page size into the configured bounds
    ///
    /// Afterwards `page >= 1` and `1 <= page_size <= max_page_size`; blank search
    /// strings become `None`. Applying it twice is the same as applying it once.
    pub fn normalize(&mut self, config: &PaginationConfig) {
        if self.page < 1 {
            self.page = 1;
        }
        if self.page_size < 1 {
            self.page_size = i64::from(config.default_page_size);
        }
        if self.page_size > i64::from(config.max_page_size) {
            self.page_size = i64::from(config.max_page_size);
        }

        self.search = self
            .search
            .take()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());
    }

    /// Consuming variant of [`normalize`](Self::normalize)
    pub fn normalized(mut self, config: &PaginationConfig) -> Self {
        self.normalize(config);
        self
    }

    /// Rows to skip: `(page - 1) * page_size`
    pub fn offset(&self) -> i64 {
        (self.page.max(1) - 1).saturating_mul(self.page_size)
    }

    pub fn limit_offset(&self) -> LimitOffset {
        LimitOffset::from_page(self.page, self.page_size)
    }
}

/// One page of results plus the totals a client needs to page further
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound(serialize = "T: Serialize", deserialize = "T: Deserialize<'de>"))]
pub struct PageResult<T> {
    #[serde(default = "Vec::new", deserialize_with = "deserialize_data")]
    pub data: Vec<T>,
    pub total: i64,
    pub page: i64,
    pub page_size: i64,
    pub total_pages: i64,
}

fn deserialize_data<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let data: Option<Vec<T>> = Option::deserialize(deserializer)?;
    Ok(data.unwrap_or_default())
}

impl<T> PageResult<T> {
    pub fn new(data: Vec<T>, total: i64, page: i64, page_size: i64) -> Self {
        Self {
            data,
            total,
            page,
            page_size,
            total_pages: total_pages(total, page_size),
        }
    }

    /// Build from a normalized request, echoing its page and page size
    pub fn for_request(data: Vec<T>, total: i64, request: &PageRequest) -> Self {
        Self::new(data, total, request.page, request.page_size)
    }

    pub fn empty(page: i64, page_size: i64) -> Self {
        Self::new(Vec::new(), 0, page, page_size)
    }

    pub fn has_next_page(&self) -> bool {
        self.page < self.total_pages
    }

    /// Convert the rows while keeping the paging totals
    pub fn map<U, F>(self, f: F) -> PageResult<U>
    where
        F: FnMut(T) -> U,
    {
        PageResult {
            data: self.data.into_iter().map(f).collect(),
            total: self.total,
            page: self.page,
            page_size: self.page_size,
            total_pages: self.total_pages,
        }
    }
}

/// `ceil(total / page_size)`, never less than 1
pub fn total_pages(total: i64, page_size: i64) -> i64 {
    if page_size < 1 || total <= 0 {
        return 1;
    }
    let mut pages = total / page_size;
    if total % page_size != 0 {
        pages += 1;
    }
    pages.max(1)
}
