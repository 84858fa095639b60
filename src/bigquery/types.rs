//! Types for the BigQuery `jobs.query` REST endpoint.
//!
//! Based on the BigQuery v2 API. Result cells arrive as strings under
//! `rows[].f[].v` regardless of column type; callers parse them.

use serde::{Deserialize, Serialize};

use crate::utils::error::BigQueryError;

/// Fully qualified reference to the source table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRef {
    /// GCP project that owns the table
    pub project: String,

    /// Dataset containing the table
    pub dataset: String,

    /// Table name
    pub table: String,
}

impl TableRef {
    /// Create a new table reference
    pub fn new(
        project: impl Into<String>,
        dataset: impl Into<String>,
        table: impl Into<String>,
    ) -> Self {
        Self {
            project: project.into(),
            dataset: dataset.into(),
            table: table.into(),
        }
    }

    /// Backtick-quoted name usable inside standard SQL
    pub fn qualified(&self) -> String {
        format!("`{}.{}.{}`", self.project, self.dataset, self.table)
    }
}

/// Request body for `jobs.query`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryRequest {
    /// Standard SQL query text
    pub query: String,

    /// Must be false; legacy SQL cannot express our date filters
    pub use_legacy_sql: bool,

    /// Server-side wait before returning with jobComplete=false
    pub timeout_ms: u64,
}

impl QueryRequest {
    /// Create a standard SQL query request with the given wait deadline
    pub fn new(query: impl Into<String>, timeout_ms: u64) -> Self {
        Self {
            query: query.into(),
            use_legacy_sql: false,
            timeout_ms,
        }
    }
}

/// Successful response body for `jobs.query`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryResponse {
    /// False when the job is still running at the deadline
    #[serde(default)]
    pub job_complete: bool,

    /// Result rows (absent for empty results)
    #[serde(default)]
    pub rows: Vec<TableRow>,

    /// Total row count, as a string per the API
    #[serde(default)]
    pub total_rows: Option<String>,
}

/// One result row: a list of cells in column order
#[derive(Debug, Deserialize)]
pub struct TableRow {
    pub f: Vec<TableCell>,
}

/// One result cell; `v` is null for NULL column values
#[derive(Debug, Deserialize)]
pub struct TableCell {
    #[serde(default)]
    pub v: Option<String>,
}

impl TableRow {
    /// Non-null cell value at a column index
    ///
    /// # Errors
    /// * `BigQueryError::MalformedRow` - Missing column or NULL value
    pub fn cell(&self, index: usize) -> Result<&str, BigQueryError> {
        self.f
            .get(index)
            .and_then(|cell| cell.v.as_deref())
            .ok_or_else(|| {
                BigQueryError::MalformedRow(format!("missing value in column {}", index))
            })
    }
}

/// Error response body returned with non-success HTTP statuses
#[derive(Debug, Deserialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

/// The `error` object inside an error response
#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    pub code: i64,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qualified_table_name() {
        let table = TableRef::new("acme-analytics", "daily", "domain_metrics");
        assert_eq!(table.qualified(), "`acme-analytics.daily.domain_metrics`");
    }

    #[test]
    fn test_cell_returns_value() {
        let row: TableRow =
            serde_json::from_str(r#"{"f":[{"v":"2025-08-06"},{"v":"42"}]}"#).unwrap();
        assert_eq!(row.cell(0).unwrap(), "2025-08-06");
        assert_eq!(row.cell(1).unwrap(), "42");
    }

    #[test]
    fn test_cell_rejects_null_and_missing() {
        let row: TableRow = serde_json::from_str(r#"{"f":[{"v":null}]}"#).unwrap();
        assert!(row.cell(0).is_err());
        assert!(row.cell(5).is_err());
    }

    #[test]
    fn test_query_request_serializes_camel_case() {
        let request = QueryRequest::new("SELECT 1", 10_000);
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["useLegacySql"], false);
        assert_eq!(json["timeoutMs"], 10_000);
    }
}
