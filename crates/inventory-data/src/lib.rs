//! Data ingestion layer for the aged-inventory converter.
//!
//! Parses fixed-width report text into rows, then filters them by age and
//! computes the summary totals.

pub mod aggregator;
pub mod reader;

pub use inventory_core as core;
