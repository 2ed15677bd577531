//! SQL fragments with bound parameters.

/// A bound SQL parameter.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlParam {
    /// Text parameter, passed to the store as supplied.
    Text(String),
    /// Integer parameter.
    Integer(i64),
}

impl SqlParam {
    /// Creates a text parameter.
    pub fn text(s: impl Into<String>) -> Self {
        SqlParam::Text(s.into())
    }

    /// Creates an integer parameter.
    pub fn integer(i: i64) -> Self {
        SqlParam::Integer(i)
    }
}

/// A piece of SQL together with the values bound to its `?` placeholders.
///
/// Parameters are stored in placeholder order. Every method that adds text
/// with placeholders also adds the matching values in the same call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SqlFragment {
    /// The SQL text.
    pub sql: String,
    /// Bound parameter values.
    pub params: Vec<SqlParam>,
}

impl SqlFragment {
    /// Creates a fragment without parameters.
    pub fn new(sql: impl Into<String>) -> Self {
        Self {
            sql: sql.into(),
            params: Vec::new(),
        }
    }

    /// Creates a fragment with parameters.
    pub fn with_params(sql: impl Into<String>, params: Vec<SqlParam>) -> Self {
        Self {
            sql: sql.into(),
            params,
        }
    }

    /// Appends parameter-free SQL text, separated by a single space.
    pub fn push_sql(&mut self, sql: &str) {
        if !self.sql.is_empty() && !sql.is_empty() {
            self.sql.push(' ');
        }
        self.sql.push_str(sql);
    }

    /// Appends another fragment, keeping its parameters in order.
    pub fn append(&mut self, other: SqlFragment) {
        self.push_sql(&other.sql);
        self.params.extend(other.params);
    }

    /// Combines fragments with `AND`.
    ///
    /// Returns `None` when there is nothing to combine, so callers can skip
    /// the `WHERE` keyword entirely.
    pub fn and_all(fragments: Vec<SqlFragment>) -> Option<SqlFragment> {
        let mut iter = fragments.into_iter().filter(|f| !f.is_empty());
        let mut combined = iter.next()?;
        for fragment in iter {
            combined.sql.push_str(" AND ");
            combined.sql.push_str(&fragment.sql);
            combined.params.extend(fragment.params);
        }
        Some(combined)
    }

    /// Returns true if this fragment has no SQL text.
    pub fn is_empty(&self) -> bool {
        self.sql.is_empty()
    }

    /// Number of `?` placeholders in the SQL text.
    pub fn placeholder_count(&self) -> usize {
        self.sql.matches('?').count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_sql_spacing() {
        let mut fragment = SqlFragment::new("SELECT 1");
        fragment.push_sql("FROM movie");
        fragment.push_sql("");
        assert_eq!(fragment.sql, "SELECT 1 FROM movie");
    }

    #[test]
    fn test_append_keeps_param_order() {
        let mut fragment = SqlFragment::with_params("a = ?", vec![SqlParam::text("x")]);
        fragment.append(SqlFragment::with_params(
            "AND b = ?",
            vec![SqlParam::integer(2)],
        ));

        assert_eq!(fragment.sql, "a = ? AND b = ?");
        assert_eq!(
            fragment.params,
            vec![SqlParam::text("x"), SqlParam::integer(2)]
        );
    }

    #[test]
    fn test_and_all() {
        let combined = SqlFragment::and_all(vec![
            SqlFragment::with_params("a = ?", vec![SqlParam::text("1")]),
            SqlFragment::default(),
            SqlFragment::with_params("b >= ?", vec![SqlParam::text("2")]),
        ])
        .unwrap();

        assert_eq!(combined.sql, "a = ? AND b >= ?");
        assert_eq!(combined.params.len(), 2);
    }

    #[test]
    fn test_and_all_empty() {
        assert!(SqlFragment::and_all(Vec::new()).is_none());
        assert!(SqlFragment::and_all(vec![SqlFragment::default()]).is_none());
    }
}
