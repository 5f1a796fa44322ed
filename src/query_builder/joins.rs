/// Represents different types of SQL JOINs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinType {
    Inner,
    Left,
    Right,
    Full,
}

impl JoinType {
    pub fn to_sql(&self) -> &'static str {
        match self {
            JoinType::Inner => "INNER JOIN",
            JoinType::Left => "LEFT JOIN",
            JoinType::Right => "RIGHT JOIN",
            JoinType::Full => "FULL OUTER JOIN",
        }
    }
}

/// A JOIN registered on a [`ProjectionMap`](super::ProjectionMap)
///
/// `index` records registration order so `FROM` rendering stays stable no matter
/// how clauses are looked up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinClause {
    pub join_type: JoinType,
    pub schema: String,
    pub table: String,
    pub alias: String,
    pub on_condition: String,
    pub index: usize,
}

impl JoinClause {
    pub fn new(
        join_type: JoinType,
        schema: &str,
        table: &str,
        alias: &str,
        on_condition: &str,
        index: usize,
    ) -> Self {
        Self {
            join_type,
            schema: schema.to_string(),
            table: table.to_string(),
            alias: alias.to_string(),
            on_condition: on_condition.to_string(),
            index,
        }
    }

    /// Convert to SQL string
    pub fn to_sql(&self) -> String {
        format!(
            "{} {}.{} {} ON {}",
            self.join_type.to_sql(),
            self.schema,
            self.table,
            self.alias,
            self.on_condition
        )
    }
}
