//! Domain Pulse
//!
//! Day-over-day domain analytics reporting from BigQuery.
//!
//! This crate provides the core implementation for the
//! `domain-pulse` CLI tool: it fetches per-domain activity
//! metrics for the two most recent dates in a table, computes
//! the change per domain, and writes text and CSV reports.

pub mod bigquery;
pub mod commands;
pub mod diff;
pub mod output;
pub mod report;
pub mod snapshot;
pub mod utils;
