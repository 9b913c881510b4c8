//! Data ingestion layer for swipe statistics.
//!
//! Reads a JSON data export, sums its per-date counters and runs the
//! pipeline that produces a [`analysis::StatsReport`].

pub mod analysis;
pub mod reader;
