use crate::error::SQLError;

/// A dynamically-typed SQL parameter value.
///
/// The task schema only carries INTEGER and TEXT columns, so the value
/// space is deliberately that small.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Integer(i64),
    Text(String),
}

/// A row returned from a SQL query: column name to value.
#[derive(Debug, Clone)]
pub struct Row {
    pub columns: Vec<(String, Value)>,
}

impl Row {
    /// Get a column value by name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.columns.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    /// Get a text column value by name.
    pub fn get_str(&self, name: &str) -> Option<&str> {
        match self.get(name) {
            Some(Value::Text(s)) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Get an integer column value by name.
    pub fn get_i64(&self, name: &str) -> Option<i64> {
        match self.get(name) {
            Some(Value::Integer(i)) => Some(*i),
            _ => None,
        }
    }
}

/// SQLStore provides a SQL execution interface backed by an embedded
/// database.
///
/// Implementations serialize access internally; every call acquires the
/// backing handle, performs one unit of work, and releases it on all exit
/// paths. Calls may block on I/O.
pub trait SQLStore: Send + Sync {
    /// Execute a query and return rows.
    fn query(&self, sql: &str, params: &[Value]) -> Result<Vec<Row>, SQLError>;

    /// Execute a statement (UPDATE/DELETE) and return the affected row
    /// count. A zero count is a normal outcome, not an error; callers
    /// decide whether it means "not found".
    fn exec(&self, sql: &str, params: &[Value]) -> Result<u64, SQLError>;

    /// Execute an INSERT and return the rowid assigned to the new row.
    /// The statement and the rowid read happen under one handle
    /// acquisition, so a concurrent insert cannot interleave.
    fn insert(&self, sql: &str, params: &[Value]) -> Result<i64, SQLError>;

    /// Execute a multi-statement script (schema setup, seed data).
    fn exec_batch(&self, sql: &str) -> Result<(), SQLError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_lookup_by_name() {
        let row = Row {
            columns: vec![
                ("id".to_string(), Value::Integer(7)),
                ("name".to_string(), Value::Text("laundry".to_string())),
                ("enddate".to_string(), Value::Text(String::new())),
            ],
        };
        assert_eq!(row.get_i64("id"), Some(7));
        assert_eq!(row.get_str("name"), Some("laundry"));
        assert_eq!(row.get_str("enddate"), Some(""));
        assert_eq!(row.get("missing"), None);
        // Type mismatches are None, not panics.
        assert_eq!(row.get_str("id"), None);
        assert_eq!(row.get_i64("name"), None);
    }
}
