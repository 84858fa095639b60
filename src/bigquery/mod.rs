//! BigQuery data source.
//!
//! A thin blocking client for the BigQuery REST API. It issues the two
//! queries this tool needs: the most recent dates present in the table,
//! and the aggregated per-domain rows for those dates.

pub mod client;
pub mod types;

// Re-export main entry points
pub use client::BigQueryClient;
pub use types::TableRef;
