//! HTTP client for the BigQuery REST API.

use chrono::NaiveDate;
use log::{debug, info};
use reqwest::blocking::Client;

use crate::snapshot::MetricSnapshot;
use crate::utils::config::{BIGQUERY_API_BASE, DEFAULT_QUERY_TIMEOUT};
use crate::utils::error::BigQueryError;

use super::types::{ApiErrorResponse, QueryRequest, QueryResponse, TableRef, TableRow};

/// Date format used by BigQuery DATE columns
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Blocking client for running queries against one GCP project
pub struct BigQueryClient {
    client: Client,
    api_base: String,
    token: String,
}

impl BigQueryClient {
    /// Create a new client authenticated with an OAuth bearer token
    pub fn new(token: impl Into<String>) -> Result<Self, BigQueryError> {
        Self::with_api_base(token, BIGQUERY_API_BASE)
    }

    /// Create a client against a non-default API base (tests, emulators)
    pub fn with_api_base(
        token: impl Into<String>,
        api_base: impl Into<String>,
    ) -> Result<Self, BigQueryError> {
        let client = Client::builder()
            .timeout(DEFAULT_QUERY_TIMEOUT)
            .build()
            .map_err(BigQueryError::RequestFailed)?;

        Ok(Self {
            client,
            api_base: api_base.into(),
            token: token.into(),
        })
    }

    /// Find the two most recent dates present in the table
    ///
    /// # Returns
    /// `(previous_date, latest_date)`
    ///
    /// # Errors
    /// * `BigQueryError::InsufficientDates` - Fewer than two distinct dates
    ///   exist; comparison preconditions fail before any diff runs
    pub fn recent_dates(
        &self,
        table: &TableRef,
    ) -> Result<(NaiveDate, NaiveDate), BigQueryError> {
        let sql = recent_dates_sql(table);

        info!("Querying for most recent dates...");
        let response = self.query(&table.project, &sql)?;

        if response.rows.len() < 2 {
            return Err(BigQueryError::InsufficientDates(response.rows.len()));
        }

        let latest = parse_date(response.rows[0].cell(0)?)?;
        let previous = parse_date(response.rows[1].cell(0)?)?;

        info!("Latest date: {}", latest);
        info!("Previous date: {}", previous);

        Ok((previous, latest))
    }

    /// Fetch aggregated per-domain rows for the two comparison dates
    ///
    /// Measures are summed across all sub-dimensions by the query itself,
    /// so each `(date, domain)` appears at most once in the result.
    pub fn domain_snapshots(
        &self,
        table: &TableRef,
        previous_date: NaiveDate,
        latest_date: NaiveDate,
    ) -> Result<Vec<MetricSnapshot>, BigQueryError> {
        let sql = domain_snapshots_sql(table, previous_date, latest_date);

        info!("Extracting domain data from BigQuery...");
        let response = self.query(&table.project, &sql)?;

        let snapshots = response
            .rows
            .iter()
            .map(parse_snapshot_row)
            .collect::<Result<Vec<_>, _>>()?;

        info!("Retrieved {} records", snapshots.len());
        Ok(snapshots)
    }

    /// Run one synchronous query via `jobs.query`
    fn query(&self, project: &str, sql: &str) -> Result<QueryResponse, BigQueryError> {
        let url = format!("{}/projects/{}/queries", self.api_base, project);
        let request = QueryRequest::new(sql, DEFAULT_QUERY_TIMEOUT.as_millis() as u64);

        debug!("Query: {}", sql);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.token)
            .json(&request)
            .send()
            .map_err(BigQueryError::RequestFailed)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            // Error bodies carry a structured `error` object when the API
            // itself rejected the request
            if let Ok(api_error) = serde_json::from_str::<ApiErrorResponse>(&body) {
                return Err(BigQueryError::ApiError {
                    code: api_error.error.code,
                    message: api_error.error.message,
                });
            }
            return Err(BigQueryError::InvalidResponse(format!(
                "HTTP {}: {}",
                status, body
            )));
        }

        let query_response: QueryResponse = response
            .json()
            .map_err(BigQueryError::RequestFailed)?;

        if !query_response.job_complete {
            return Err(BigQueryError::JobIncomplete);
        }

        Ok(query_response)
    }
}

/// SQL for the two-most-recent-dates probe
pub fn recent_dates_sql(table: &TableRef) -> String {
    format!(
        "SELECT DISTINCT DATE(date) AS date \
         FROM {} \
         ORDER BY date DESC \
         LIMIT 2",
        table.qualified()
    )
}

/// SQL for the aggregated per-domain rows on the two comparison dates
pub fn domain_snapshots_sql(
    table: &TableRef,
    previous_date: NaiveDate,
    latest_date: NaiveDate,
) -> String {
    format!(
        "SELECT DATE(date) AS date, domain_name, \
         SUM(total_activeUsers) AS active_users, \
         SUM(total_screenPageViews) AS pageviews \
         FROM {} \
         WHERE DATE(date) IN ('{}', '{}') \
         GROUP BY date, domain_name \
         ORDER BY domain_name, date",
        table.qualified(),
        previous_date.format(DATE_FORMAT),
        latest_date.format(DATE_FORMAT)
    )
}

/// Decode one result row into a snapshot
///
/// Column order matches `domain_snapshots_sql`:
/// date, domain_name, active_users, pageviews.
pub fn parse_snapshot_row(row: &TableRow) -> Result<MetricSnapshot, BigQueryError> {
    Ok(MetricSnapshot {
        date: parse_date(row.cell(0)?)?,
        domain_name: row.cell(1)?.to_string(),
        active_users: parse_count(row.cell(2)?)?,
        pageviews: parse_count(row.cell(3)?)?,
    })
}

fn parse_date(raw: &str) -> Result<NaiveDate, BigQueryError> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .map_err(|e| BigQueryError::MalformedRow(format!("bad date '{}': {}", raw, e)))
}

fn parse_count(raw: &str) -> Result<u64, BigQueryError> {
    raw.parse::<u64>()
        .map_err(|e| BigQueryError::MalformedRow(format!("bad count '{}': {}", raw, e)))
}
