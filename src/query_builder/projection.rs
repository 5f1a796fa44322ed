use super::{JoinClause, JoinType};
use std::collections::HashMap;

/// One registered SELECT column
#[derive(Debug, Clone, PartialEq, Eq)]
struct ProjectedColumn {
    logical: String,
    qualified: String,
    /// Rendered as `qualified AS alias` in the select list when set
    select_alias: Option<String>,
}

impl ProjectedColumn {
    fn to_select_sql(&self) -> String {
        match self.select_alias {
            Some(ref alias) => format!("{} AS {}", self.qualified, alias),
            None => self.qualified.clone(),
        }
    }
}

/// Maps logical field names to schema-qualified column expressions
///
/// Built once per repository, then shared read-only across requests:
///
/// ```rust
/// use folio_query::query_builder::{JoinType, ProjectionMap};
///
/// let projection = ProjectionMap::new("public", "documents", "d")
///     .project("id", "id")
///     .project("title", "title")
///     .join("public", "categories", "c", JoinType::Left, "c.id = d.category_id")
///     .project_as("name", "category_name");
///
/// assert_eq!(projection.column("title"), "d.title");
/// assert_eq!(projection.column("category_name"), "c.name");
/// assert_eq!(projection.columns(), "d.id, d.title, c.name AS category_name");
/// ```
#[derive(Debug, Clone)]
pub struct ProjectionMap {
    schema: String,
    table: String,
    alias: String,
    current_alias: String,
    columns: Vec<ProjectedColumn>,
    by_logical: HashMap<String, usize>,
    joins: Vec<JoinClause>,
}

impl ProjectionMap {
    /// Create a projection over `schema.table alias`
    pub fn new(schema: &str, table: &str, alias: &str) -> Self {
        Self {
            schema: schema.to_string(),
            table: table.to_string(),
            alias: alias.to_string(),
            current_alias: alias.to_string(),
            columns: Vec::new(),
            by_logical: HashMap::new(),
            joins: Vec::new(),
        }
    }

    /// Register `current_alias.column` under `logical_name`
    pub fn project(self, column: &str, logical_name: &str) -> Self {
        self.register(column, logical_name, None)
    }

    /// Register a column that is selected as `current_alias.column AS logical_name`
    pub fn project_as(self, column: &str, logical_name: &str) -> Self {
        self.register(column, logical_name, Some(logical_name.to_string()))
    }

    fn register(mut self, column: &str, logical_name: &str, select_alias: Option<String>) -> Self {
        let projected = ProjectedColumn {
            logical: logical_name.to_string(),
            qualified: format!("{}.{}", self.current_alias, column),
            select_alias,
        };

        match self.by_logical.get(logical_name) {
            Some(&position) => self.columns[position] = projected,
            None => {
                self.by_logical
                    .insert(logical_name.to_string(), self.columns.len());
                self.columns.push(projected);
            }
        }
        self
    }

    /// Register a JOIN and qualify subsequent projections against `alias`
    pub fn join(
        mut self,
        schema: &str,
        table: &str,
        alias: &str,
        join_type: JoinType,
        on_condition: &str,
    ) -> Self {
        match self.joins.iter().position(|join| join.alias == alias) {
            Some(position) => {
                self.joins[position] =
                    JoinClause::new(join_type, schema, table, alias, on_condition, position);
            }
            None => {
                let index = self.joins.len();
                self.joins.push(JoinClause::new(
                    join_type,
                    schema,
                    table,
                    alias,
                    on_condition,
                    index,
                ));
            }
        }
        self.current_alias = alias.to_string();
        self
    }

    /// Render the FROM target including joins, in registration order
    pub fn from(&self) -> String {
        let mut sql = format!("{}.{} {}", self.schema, self.table, self.alias);
        for join in &self.joins {
            sql.push(' ');
            sql.push_str(&join.to_sql());
        }
        sql
    }

    /// Qualified column for `logical_name`, or the input unchanged when unmapped
    ///
    /// The pass-through lets trusted callers reference already-qualified
    /// identifiers. Never feed client-supplied names through here; use
    /// [`lookup`](Self::lookup) for those.
    pub fn column<'a>(&'a self, logical_name: &'a str) -> &'a str {
        self.lookup(logical_name).unwrap_or(logical_name)
    }

    /// Qualified column for `logical_name`, `None` when unmapped
    pub fn lookup(&self, logical_name: &str) -> Option<&str> {
        self.by_logical
            .get(logical_name)
            .map(|&position| self.columns[position].qualified.as_str())
    }

    /// Comma-joined select list in registration order
    pub fn columns(&self) -> String {
        self.columns
            .iter()
            .map(ProjectedColumn::to_select_sql)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Logical field names in registration order
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|column| column.logical.as_str())
    }

    pub fn base_alias(&self) -> &str {
        &self.alias
    }

    pub fn joins(&self) -> &[JoinClause] {
        &self.joins
    }
}
