use super::{Comparison, Condition, LimitOffset, ProjectionMap, SortField, SqlArg, TypedArg};
use tracing::debug;

/// Per-request query builder over a shared [`ProjectionMap`]
///
/// Filters are AND-combined in the order they are added. Every `where_*` method
/// taking an optional value is a no-op when the value is absent, so optional
/// request filters chain without branching:
///
/// ```rust
/// use folio_query::query_builder::{Builder, ProjectionMap, SortField};
///
/// let projection = ProjectionMap::new("public", "documents", "d")
///     .project("id", "id")
///     .project("status", "status")
///     .project("tag", "tag");
///
/// let status: Option<&str> = Some("review");
/// let owner: Option<&str> = None;
///
/// let (sql, args) = Builder::new(&projection, [SortField::asc("id")])
///     .where_equals("status", status)
///     .where_equals("owner", owner)
///     .where_in("tag", ["a", "b"])
///     .build();
///
/// assert_eq!(
///     sql,
///     "SELECT d.id, d.status, d.tag FROM public.documents d \
///      WHERE d.status = $1 AND d.tag IN ($2, $3) ORDER BY d.id ASC"
/// );
/// assert_eq!(args.len(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct Builder<'p> {
    projection: &'p ProjectionMap,
    conditions: Vec<Condition>,
    order_by: Vec<SortField>,
    default_order_by: Vec<SortField>,
}

impl<'p> Builder<'p> {
    /// Create a builder with the sort used when no override is given
    pub fn new(
        projection: &'p ProjectionMap,
        default_sort: impl IntoIterator<Item = SortField>,
    ) -> Self {
        Self {
            projection,
            conditions: Vec::new(),
            order_by: Vec::new(),
            default_order_by: default_sort.into_iter().collect(),
        }
    }

    /// Add a condition built by the caller
    pub fn where_condition(mut self, condition: Condition) -> Self {
        self.conditions.push(condition);
        self
    }

    /// `field = value`, skipped when `value` is `None`
    ///
    /// Values must be concrete [`TypedArg`]s, so a nested `Option` cannot slip a
    /// NULL into an `=` comparison. Use [`where_nullable`](Self::where_nullable)
    /// to match NULL.
    ///
    /// ```rust,compile_fail
    /// use folio_query::query_builder::{Builder, ProjectionMap};
    ///
    /// let projection = ProjectionMap::new("public", "documents", "d").project("tag", "tag");
    /// let _ = Builder::new(&projection, Vec::new()).where_equals("tag", Some(None::<String>));
    /// ```
    pub fn where_equals<V: TypedArg>(self, field: &str, value: Option<V>) -> Self {
        self.where_compare(field, Comparison::Eq, value)
    }

    /// `field <op> value`, skipped when `value` is `None`
    pub fn where_compare<V: TypedArg>(
        self,
        field: &str,
        comparison: Comparison,
        value: Option<V>,
    ) -> Self {
        match value {
            Some(value) => {
                let column = self.projection.column(field);
                let condition = Condition::compare(column, comparison, value.into());
                self.where_condition(condition)
            }
            None => self,
        }
    }

    /// Case-insensitive substring match, skipped when `value` is `None` or blank
    pub fn where_contains(self, field: &str, value: Option<&str>) -> Self {
        match non_blank(value) {
            Some(needle) => {
                let condition = Condition::contains(self.projection.column(field), needle);
                self.where_condition(condition)
            }
            None => self,
        }
    }

    /// `field IN (...)`, skipped when `values` is empty
    pub fn where_in<I, V>(self, field: &str, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: TypedArg,
    {
        let values: Vec<SqlArg> = values.into_iter().map(Into::into).collect();
        match Condition::in_list(self.projection.column(field), values) {
            Some(condition) => self.where_condition(condition),
            None => self,
        }
    }

    /// `field IS NULL` when `value` is `None`, otherwise `field = value`
    pub fn where_nullable<V: TypedArg>(self, field: &str, value: Option<V>) -> Self {
        let column = self.projection.column(field);
        let condition = match value {
            Some(value) => Condition::equals(column, value.into()),
            None => Condition::is_null(column),
        };
        self.where_condition(condition)
    }

    /// One parenthesised OR-group matching `search` against every field
    ///
    /// Skipped when `search` is `None` or blank, or when `fields` is empty.
    pub fn where_search(self, search: Option<&str>, fields: &[&str]) -> Self {
        let Some(needle) = non_blank(search) else {
            return self;
        };

        let conditions = fields
            .iter()
            .map(|field| Condition::contains(self.projection.column(field), needle))
            .collect();

        match Condition::any(conditions) {
            Some(group) => self.where_condition(group),
            None => self,
        }
    }

    /// Replace the default sort; an empty list keeps the default
    pub fn order_by_fields(mut self, fields: Vec<SortField>) -> Self {
        self.order_by = fields;
        self
    }

    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    /// Total arguments the current conditions contribute
    pub fn param_count(&self) -> usize {
        self.conditions.iter().map(Condition::placeholder_count).sum()
    }

    /// Render ` WHERE ...` with placeholders numbered from `start_index`
    ///
    /// Returns an empty string and no arguments when there are no conditions.
    pub fn build_where(&self, start_index: usize) -> (String, Vec<SqlArg>) {
        if self.conditions.is_empty() {
            return (String::new(), Vec::new());
        }

        let mut next_index = start_index;
        let mut args = Vec::with_capacity(self.param_count());
        let parts: Vec<String> = self
            .conditions
            .iter()
            .map(|condition| condition.render(&mut next_index, &mut args))
            .collect();

        (format!(" WHERE {}", parts.join(" AND ")), args)
    }

    /// Render ` ORDER BY ...` from the override, falling back to the default
    ///
    /// Override fields come from clients, so names missing from the projection are
    /// dropped rather than passed through as raw SQL. When nothing usable remains the
    /// default sort applies.
    pub fn build_order_by(&self) -> String {
        let mut entries: Vec<String> = self
            .order_by
            .iter()
            .filter_map(|sort| match self.projection.lookup(&sort.field) {
                Some(column) => Some(render_sort(column, sort)),
                None => {
                    debug!(field = %sort.field, "Ignoring sort on unprojected field");
                    None
                }
            })
            .collect();

        if entries.is_empty() {
            entries = self
                .default_order_by
                .iter()
                .map(|sort| render_sort(self.projection.column(&sort.field), sort))
                .collect();
        }

        if entries.is_empty() {
            String::new()
        } else {
            format!(" ORDER BY {}", entries.join(", "))
        }
    }

    /// Full select over every condition, ordered
    pub fn build(&self) -> (String, Vec<SqlArg>) {
        let (where_sql, args) = self.build_where(1);
        let sql = format!(
            "SELECT {} FROM {}{}{}",
            self.projection.columns(),
            self.projection.from(),
            where_sql,
            self.build_order_by()
        );
        (sql, args)
    }

    /// `COUNT(*)` over every condition, unordered
    pub fn build_count(&self) -> (String, Vec<SqlArg>) {
        let (where_sql, args) = self.build_where(1);
        let sql = format!("SELECT COUNT(*) FROM {}{}", self.projection.from(), where_sql);
        (sql, args)
    }

    /// [`build`](Self::build) limited to one page
    pub fn build_page(&self, page: i64, page_size: i64) -> (String, Vec<SqlArg>) {
        let (mut sql, args) = self.build();
        sql.push_str(&LimitOffset::from_page(page, page_size).to_sql());
        (sql, args)
    }

    /// Single row by id; ignores every accumulated condition
    pub fn build_single(&self, id_field: &str, id: impl Into<SqlArg>) -> (String, Vec<SqlArg>) {
        let sql = format!(
            "SELECT {} FROM {} WHERE {} = $1",
            self.projection.columns(),
            self.projection.from(),
            self.projection.column(id_field)
        );
        (sql, vec![id.into()])
    }

    /// First row matching the conditions, for fetches that may find nothing
    pub fn build_single_or_null(&self) -> (String, Vec<SqlArg>) {
        let (mut sql, args) = self.build();
        sql.push_str(" LIMIT 1");
        (sql, args)
    }
}

fn render_sort(column: &str, sort: &SortField) -> String {
    format!("{} {}", column, sort.direction.to_sql())
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
