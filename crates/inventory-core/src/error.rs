use std::path::PathBuf;
use thiserror::Error;

/// All errors produced while converting an inventory report.
#[derive(Error, Debug)]
pub enum InventoryError {
    /// The input report could not be opened or read from disk.
    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The output workbook could not be written to disk.
    #[error("Failed to write file {path}: {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A six-digit report date is not a real calendar date.
    #[error("Invalid report date: {0}")]
    DateParse(String),

    /// A piece or weight column does not fit an unsigned integer.
    #[error("Invalid {field} value: {value}")]
    InvalidQuantity { field: &'static str, value: String },

    /// The spreadsheet library rejected a cell, format or sheet name.
    #[error("Workbook error: {0}")]
    Workbook(#[from] rust_xlsxwriter::XlsxError),
}

/// Convenience alias used throughout the inventory crates.
pub type Result<T> = std::result::Result<T, InventoryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_file_read() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err = InventoryError::FileRead {
            path: PathBuf::from("/reports/inv.txt"),
            source: io_err,
        };
        let msg = err.to_string();
        assert!(msg.contains("Failed to read file"));
        assert!(msg.contains("/reports/inv.txt"));
        assert!(msg.contains("no such file"));
    }

    #[test]
    fn test_error_display_file_write() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        let err = InventoryError::FileWrite {
            path: PathBuf::from("Filtered_Inventory.xlsx"),
            source: io_err,
        };
        let msg = err.to_string();
        assert!(msg.starts_with("Failed to write file Filtered_Inventory.xlsx"));
        assert!(msg.contains("read-only"));
    }

    #[test]
    fn test_error_display_date_parse() {
        let err = InventoryError::DateParse("133124".to_string());
        assert_eq!(err.to_string(), "Invalid report date: 133124");
    }

    #[test]
    fn test_error_display_invalid_quantity() {
        let err = InventoryError::InvalidQuantity {
            field: "weight",
            value: "99999999999999999999999".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid weight value: 99999999999999999999999"
        );
    }

    #[test]
    fn test_error_from_xlsx() {
        let xlsx_err = rust_xlsxwriter::XlsxError::RowColumnLimitError;
        let err: InventoryError = xlsx_err.into();
        assert!(matches!(err, InventoryError::Workbook(_)));
        assert!(err.to_string().starts_with("Workbook error: "));
    }
}
