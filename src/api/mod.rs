//! Dashboard Service API
//!
//! HTTP client and wire types for the dashboard service.

pub mod client;

pub use client::{
    fetch_chart_data, fetch_dengue_clusters, fetch_history, fetch_rainfall_stations, send_prompt,
    ChartRow, HistoryEntry,
};
