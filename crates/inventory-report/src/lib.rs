//! Spreadsheet output for the aged-inventory converter.
//!
//! Renders the filtered records and their totals into a two-sheet `.xlsx`
//! workbook with styled headers and content-sized columns.

pub mod styles;
pub mod workbook;

pub use inventory_core as core;
