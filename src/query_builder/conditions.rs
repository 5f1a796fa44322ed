use super::SqlArg;

/// Binary comparison operators accepted by [`Condition::compare`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    Eq,
    NotEq,
    Gt,
    Gte,
    Lt,
    Lte,
}

impl Comparison {
    pub fn to_sql(&self) -> &'static str {
        match self {
            Comparison::Eq => "=",
            Comparison::NotEq => "<>",
            Comparison::Gt => ">",
            Comparison::Gte => ">=",
            Comparison::Lt => "<",
            Comparison::Lte => "<=",
        }
    }
}

/// One WHERE fragment paired with its positional arguments
///
/// The clause is held as SQL text segments with an argument slot between each
/// consecutive pair, so `segments.len() == args.len() + 1` always holds. Slots are
/// numbered only when the owning builder renders, which is what lets an IN-list of
/// N values sit between single-value conditions without disturbing their numbers.
#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    segments: Vec<String>,
    args: Vec<SqlArg>,
}

impl Condition {
    fn sql(text: impl Into<String>) -> Self {
        Self {
            segments: vec![text.into()],
            args: Vec::new(),
        }
    }

    fn push_sql(&mut self, text: &str) {
        if let Some(last) = self.segments.last_mut() {
            last.push_str(text);
        }
    }

    fn push_arg(&mut self, arg: SqlArg) {
        self.args.push(arg);
        self.segments.push(String::new());
    }

    fn append(&mut self, other: Condition) {
        let mut segments = other.segments.into_iter();
        if let Some(first) = segments.next() {
            self.push_sql(&first);
        }
        self.segments.extend(segments);
        self.args.extend(other.args);
    }

    /// `column = $n`
    pub fn equals(column: &str, value: SqlArg) -> Self {
        Self::compare(column, Comparison::Eq, value)
    }

    /// `column <op> $n`
    pub fn compare(column: &str, comparison: Comparison, value: SqlArg) -> Self {
        let mut condition = Self::sql(format!("{} {} ", column, comparison.to_sql()));
        condition.push_arg(value);
        condition
    }

    /// `column ILIKE $n` with the needle wrapped as `%needle%`
    ///
    /// LIKE wildcards inside the needle are escaped and match literally.
    pub fn contains(column: &str, needle: &str) -> Self {
        let mut condition = Self::sql(format!("{} ILIKE ", column));
        condition.push_arg(SqlArg::Text(format!("%{}%", escape_like(needle))));
        condition
    }

    /// `column IN ($n, $n+1, ...)`, `None` for an empty value list
    pub fn in_list(column: &str, values: Vec<SqlArg>) -> Option<Self> {
        if values.is_empty() {
            return None;
        }

        let mut condition = Self::sql(format!("{} IN (", column));
        for (position, value) in values.into_iter().enumerate() {
            if position > 0 {
                condition.push_sql(", ");
            }
            condition.push_arg(value);
        }
        condition.push_sql(")");
        Some(condition)
    }

    /// `column IS NULL`
    pub fn is_null(column: &str) -> Self {
        Self::sql(format!("{} IS NULL", column))
    }

    /// Combine conditions with OR inside parentheses, `None` when empty
    pub fn any(conditions: Vec<Condition>) -> Option<Self> {
        let mut conditions = conditions.into_iter();
        let first = conditions.next()?;

        let mut group = Self::sql("(");
        group.append(first);
        for condition in conditions {
            group.push_sql(" OR ");
            group.append(condition);
        }
        group.push_sql(")");
        Some(group)
    }

    /// Number of argument slots in the clause
    pub fn placeholder_count(&self) -> usize {
        self.segments.len() - 1
    }

    pub fn args(&self) -> &[SqlArg] {
        &self.args
    }

    /// Render with slots numbered from `*next_index`, advancing it past every slot
    pub fn render(&self, next_index: &mut usize, args: &mut Vec<SqlArg>) -> String {
        let mut sql = String::new();
        for (position, segment) in self.segments.iter().enumerate() {
            if position > 0 {
                sql.push_str(&format!("${}", *next_index));
                *next_index += 1;
            }
            sql.push_str(segment);
        }
        args.extend(self.args.iter().cloned());
        sql
    }
}

/// Escape `\`, `%` and `_` so they match literally in a LIKE/ILIKE pattern
pub fn escape_like(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}
