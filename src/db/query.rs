//! Parameterized query construction
//!
//! [`QueryBuilder`] owns both the SQL text and the bound-parameter list, so the
//! `$n` placeholder it writes is always the position of the value it just
//! pushed. Values never end up in the SQL text.

use postgres_types::ToSql;
use std::fmt::Write;

/// A bound query parameter
#[derive(Debug, Clone, PartialEq)]
pub enum SqlParam {
    Int(i32),
    Text(String),
}

impl SqlParam {
    pub fn as_sql(&self) -> &(dyn ToSql + Sync) {
        match self {
            SqlParam::Int(v) => v,
            SqlParam::Text(v) => v,
        }
    }
}

impl From<i32> for SqlParam {
    fn from(value: i32) -> Self {
        SqlParam::Int(value)
    }
}

impl From<String> for SqlParam {
    fn from(value: String) -> Self {
        SqlParam::Text(value)
    }
}

impl From<&str> for SqlParam {
    fn from(value: &str) -> Self {
        SqlParam::Text(value.to_string())
    }
}

/// A finished query: SQL template plus its positional arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    sql: String,
    params: Vec<SqlParam>,
}

impl Query {
    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn params(&self) -> &[SqlParam] {
        &self.params
    }
}

/// Builds a `SELECT` by appending bound predicates to a base statement.
///
/// The base statement must not contain a `WHERE` clause; the first predicate
/// opens one and later predicates are joined with `AND`.
#[derive(Debug)]
pub struct QueryBuilder {
    sql: String,
    params: Vec<SqlParam>,
    has_where: bool,
}

impl QueryBuilder {
    pub fn new(base: &str) -> Self {
        Self {
            sql: base.trim_end().to_string(),
            params: Vec::new(),
            has_where: false,
        }
    }

    /// Pushes a value and returns its placeholder.
    pub fn bind(&mut self, value: impl Into<SqlParam>) -> String {
        self.params.push(value.into());
        format!("${}", self.params.len())
    }

    /// Appends a raw predicate. Any values it refers to must come from [`bind`](Self::bind).
    pub fn predicate<F>(mut self, build: F) -> Self
    where
        F: FnOnce(&mut Self) -> String,
    {
        let clause = build(&mut self);
        let keyword = if self.has_where { "AND" } else { "WHERE" };
        // Writing into a String cannot fail
        let _ = write!(self.sql, "\n    {} {}", keyword, clause);
        self.has_where = true;
        self
    }

    /// Appends `expr = $n`.
    pub fn eq(self, expr: &str, value: impl Into<SqlParam>) -> Self {
        let value = value.into();
        self.predicate(|q| format!("{} = {}", expr, q.bind(value)))
    }

    /// Appends `expr = $n` only when a value is present.
    pub fn eq_opt<T: Into<SqlParam>>(self, expr: &str, value: Option<T>) -> Self {
        match value {
            Some(value) => self.eq(expr, value),
            None => self,
        }
    }

    /// Appends a case-insensitive substring match on `expr`.
    pub fn contains_ignore_case(self, expr: &str, needle: &str) -> Self {
        let pattern = format!("%{}%", needle);
        self.predicate(|q| format!("{} ILIKE {}", expr, q.bind(pattern)))
    }

    pub fn order_by(mut self, ordering: &str) -> Self {
        let _ = write!(self.sql, "\n    ORDER BY {}", ordering);
        self
    }

    pub fn build(self) -> Query {
        Query {
            sql: self.sql,
            params: self.params,
        }
    }
}
