//! Shared building blocks for the aged-inventory converter.
//!
//! Holds the record types that flow between the parser, the filter and the
//! spreadsheet writer, together with the error type, CLI settings and the
//! small date / text helpers every stage needs.

pub mod error;
pub mod formatting;
pub mod models;
pub mod settings;
pub mod time_utils;
