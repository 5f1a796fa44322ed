use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A positional argument value bound to a `$N` placeholder
///
/// Rendered queries carry their arguments as a flat `Vec<SqlArg>` whose order
/// matches the placeholder numbering. Values are never interpolated into SQL text.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlArg {
    Text(String),
    Int(i32),
    BigInt(i64),
    Float(f64),
    Bool(bool),
    Uuid(Uuid),
    Timestamp(DateTime<Utc>),
    Json(serde_json::Value),
    /// A NULL carrying the type PostgreSQL should see for its parameter
    Null(ArgKind),
}

/// Parameter type of a [`SqlArg`], used to type NULL arguments
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgKind {
    Text,
    Int,
    BigInt,
    Float,
    Bool,
    Uuid,
    Timestamp,
    Json,
}

/// Rust types with a fixed [`ArgKind`], so `Option<V>` converts into a typed NULL
pub trait TypedArg: Into<SqlArg> {
    const KIND: ArgKind;
}

impl<V: TypedArg> From<Option<V>> for SqlArg {
    fn from(value: Option<V>) -> Self {
        match value {
            Some(value) => value.into(),
            None => SqlArg::Null(V::KIND),
        }
    }
}

impl From<&str> for SqlArg {
    fn from(value: &str) -> Self {
        SqlArg::Text(value.to_string())
    }
}

impl From<String> for SqlArg {
    fn from(value: String) -> Self {
        SqlArg::Text(value)
    }
}

impl From<&String> for SqlArg {
    fn from(value: &String) -> Self {
        SqlArg::Text(value.clone())
    }
}

impl From<i32> for SqlArg {
    fn from(value: i32) -> Self {
        SqlArg::Int(value)
    }
}

impl From<i64> for SqlArg {
    fn from(value: i64) -> Self {
        SqlArg::BigInt(value)
    }
}

impl From<f64> for SqlArg {
    fn from(value: f64) -> Self {
        SqlArg::Float(value)
    }
}

impl From<bool> for SqlArg {
    fn from(value: bool) -> Self {
        SqlArg::Bool(value)
    }
}

impl From<Uuid> for SqlArg {
    fn from(value: Uuid) -> Self {
        SqlArg::Uuid(value)
    }
}

impl From<DateTime<Utc>> for SqlArg {
    fn from(value: DateTime<Utc>) -> Self {
        SqlArg::Timestamp(value)
    }
}

impl From<serde_json::Value> for SqlArg {
    fn from(value: serde_json::Value) -> Self {
        SqlArg::Json(value)
    }
}

macro_rules! typed_arg {
    ($($ty:ty => $kind:ident),* $(,)?) => {
        $(impl TypedArg for $ty {
            const KIND: ArgKind = ArgKind::$kind;
        })*
    };
}

typed_arg! {
    &str => Text,
    String => Text,
    i32 => Int,
    i64 => BigInt,
    f64 => Float,
    bool => Bool,
    Uuid => Uuid,
    DateTime<Utc> => Timestamp,
    serde_json::Value => Json,
}

/// Bind a slice of [`SqlArg`] onto any sqlx query type exposing `.bind()`
///
/// Works for `Query`, `QueryAs` and `QueryScalar` alike; arguments are bound in
/// slice order, which is placeholder order.
macro_rules! bind_args {
    ($query:expr, $args:expr) => {{
        let mut query = $query;
        for arg in $args {
            query = match arg {
                $crate::query_builder::SqlArg::Text(v) => query.bind(v.clone()),
                $crate::query_builder::SqlArg::Int(v) => query.bind(*v),
                $crate::query_builder::SqlArg::BigInt(v) => query.bind(*v),
                $crate::query_builder::SqlArg::Float(v) => query.bind(*v),
                $crate::query_builder::SqlArg::Bool(v) => query.bind(*v),
                $crate::query_builder::SqlArg::Uuid(v) => query.bind(*v),
                $crate::query_builder::SqlArg::Timestamp(v) => query.bind(*v),
                $crate::query_builder::SqlArg::Json(v) => {
                    query.bind(sqlx::types::Json(v.clone()))
                }
                $crate::query_builder::SqlArg::Null(kind) => match kind {
                    $crate::query_builder::ArgKind::Text => query.bind(None::<String>),
                    $crate::query_builder::ArgKind::Int => query.bind(None::<i32>),
                    $crate::query_builder::ArgKind::BigInt => query.bind(None::<i64>),
                    $crate::query_builder::ArgKind::Float => query.bind(None::<f64>),
                    $crate::query_builder::ArgKind::Bool => query.bind(None::<bool>),
                    $crate::query_builder::ArgKind::Uuid => query.bind(None::<uuid::Uuid>),
                    $crate::query_builder::ArgKind::Timestamp => {
                        query.bind(None::<chrono::DateTime<chrono::Utc>>)
                    }
                    $crate::query_builder::ArgKind::Json => {
                        query.bind(None::<sqlx::types::Json<serde_json::Value>>)
                    }
                },
            };
        }
        query
    }};
}

pub(crate) use bind_args;
