//! Tests for BigQuery wire types and row decoding.
//!
//! These run against JSON fixtures; no network involved.

use domain_pulse::bigquery::client::{domain_snapshots_sql, parse_snapshot_row, recent_dates_sql};
use domain_pulse::bigquery::types::{QueryRequest, QueryResponse, TableRef, TableRow};
use chrono::NaiveDate;
use pretty_assertions::assert_eq;

fn table() -> TableRef {
    TableRef::new("acme-analytics", "daily", "domain_metrics")
}

#[test]
fn test_query_request_body() {
    let request = QueryRequest::new("SELECT 1", 60_000);
    let body = serde_json::to_value(&request).unwrap();

    assert_eq!(body["query"], "SELECT 1");
    assert_eq!(body["useLegacySql"], false);
    assert_eq!(body["timeoutMs"], 60_000);
}

#[test]
fn test_decode_query_response() {
    let response: QueryResponse = serde_json::from_str(
        r#"{
            "kind": "bigquery#queryResponse",
            "jobComplete": true,
            "totalRows": "2",
            "rows": [
                {"f": [{"v": "2025-08-06"}]},
                {"f": [{"v": "2025-08-05"}]}
            ]
        }"#,
    )
    .unwrap();

    assert!(response.job_complete);
    assert_eq!(response.rows.len(), 2);
    assert_eq!(response.total_rows.as_deref(), Some("2"));
    assert_eq!(response.rows[0].cell(0).unwrap(), "2025-08-06");
}

#[test]
fn test_decode_response_without_rows() {
    // Empty results omit the rows field entirely
    let response: QueryResponse =
        serde_json::from_str(r#"{"jobComplete": true}"#).unwrap();

    assert!(response.rows.is_empty());
}

#[test]
fn test_decode_incomplete_job() {
    let response: QueryResponse =
        serde_json::from_str(r#"{"jobComplete": false}"#).unwrap();

    assert!(!response.job_complete);
}

#[test]
fn test_parse_snapshot_rows_from_fixture() {
    let rows: Vec<TableRow> = serde_json::from_str(
        r#"[
            {"f": [{"v": "2025-08-05"}, {"v": "domainA"}, {"v": "100"}, {"v": "1000"}]},
            {"f": [{"v": "2025-08-06"}, {"v": "domainA"}, {"v": "120"}, {"v": "900"}]}
        ]"#,
    )
    .unwrap();

    let snapshots: Vec<_> = rows
        .iter()
        .map(parse_snapshot_row)
        .collect::<Result<_, _>>()
        .unwrap();

    assert_eq!(snapshots.len(), 2);
    assert_eq!(snapshots[0].date, NaiveDate::from_ymd_opt(2025, 8, 5).unwrap());
    assert_eq!(snapshots[0].active_users, 100);
    assert_eq!(snapshots[1].pageviews, 900);
}

#[test]
fn test_parse_snapshot_row_rejects_null_domain() {
    let row: TableRow = serde_json::from_str(
        r#"{"f": [{"v": "2025-08-06"}, {"v": null}, {"v": "1"}, {"v": "1"}]}"#,
    )
    .unwrap();

    assert!(parse_snapshot_row(&row).is_err());
}

#[test]
fn test_recent_dates_sql_shape() {
    let sql = recent_dates_sql(&table());

    assert!(sql.starts_with("SELECT DISTINCT DATE(date)"));
    assert!(sql.contains("`acme-analytics.daily.domain_metrics`"));
    assert!(sql.contains("ORDER BY date DESC"));
    assert!(sql.ends_with("LIMIT 2"));
}

#[test]
fn test_domain_snapshots_sql_shape() {
    let previous = NaiveDate::from_ymd_opt(2025, 8, 5).unwrap();
    let latest = NaiveDate::from_ymd_opt(2025, 8, 6).unwrap();
    let sql = domain_snapshots_sql(&table(), previous, latest);

    assert!(sql.contains("SUM(total_activeUsers) AS active_users"));
    assert!(sql.contains("SUM(total_screenPageViews) AS pageviews"));
    assert!(sql.contains("WHERE DATE(date) IN ('2025-08-05', '2025-08-06')"));
    assert!(sql.contains("GROUP BY date, domain_name"));
}

#[test]
fn test_table_ref_qualified() {
    assert_eq!(
        table().qualified(),
        "`acme-analytics.daily.domain_metrics`"
    );
}
