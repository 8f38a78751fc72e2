//! Ad-hoc store queries and their results.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A request to read every record of a table in the context of an app.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateQuery {
    pub app_name: String,
    pub table_name: String,
}

impl StateQuery {
    pub fn new(app_name: impl Into<String>, table_name: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
            table_name: table_name.into(),
        }
    }

    /// The Siddhi query text sent to the store API.
    pub fn query_text(&self) -> String {
        format!("from {} select *", self.table_name)
    }
}

/// One row returned by a store query, as ordered field values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QueryRecord(pub Vec<String>);

impl fmt::Display for QueryRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(","))
    }
}

impl<S: Into<String>> FromIterator<S> for QueryRecord {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// All rows returned by a store query, in response order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryResult {
    pub records: Vec<QueryRecord>,
}

impl QueryResult {
    pub const fn new(records: Vec<QueryRecord>) -> Self {
        Self { records }
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl fmt::Display for QueryResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for record in &self.records {
            writeln!(f, "{record}")?;
        }
        Ok(())
    }
}
