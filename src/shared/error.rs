use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// Lets scripts distinguish "the query had no answer" from real failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Query answered
    Success = 0,
    /// Query ran but produced nothing (no path, unknown tree root)
    EmptyResult = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (missing inventory, parse error, file I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::EmptyResult => write!(f, "Empty Result (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// User-facing errors raised outside the pure graph services.
#[derive(Debug, Error)]
pub enum CmdbError {
    #[error("Inventory file not found: {path}\n\n💡 Hint: {suggestion}")]
    InventoryNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to parse inventory file: {path}\nDetails: {details}\n\n💡 Hint: The inventory must contain 'cis' and 'relationships' lists in JSON, YAML or TOML")]
    InventoryParseError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Invalid inventory path: {path}\nReason: {reason}\n\n💡 Hint: Pass an inventory file with --input or set 'input' in the config file")]
    InvalidInventoryPath { path: PathBuf, reason: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::EmptyResult.as_i32(), 1);
        assert_eq!(ExitCode::InvalidArguments.as_i32(), 2);
        assert_eq!(ExitCode::ApplicationError.as_i32(), 3);
    }

    #[test]
    fn test_exit_code_display() {
        assert_eq!(format!("{}", ExitCode::Success), "Success (0)");
        assert_eq!(format!("{}", ExitCode::EmptyResult), "Empty Result (1)");
        assert_eq!(
            format!("{}", ExitCode::ApplicationError),
            "Application Error (3)"
        );
    }

    #[test]
    fn test_inventory_not_found_display() {
        let error = CmdbError::InventoryNotFound {
            path: PathBuf::from("/data/inventory.json"),
            suggestion: "Export the CMDB first".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Inventory file not found"));
        assert!(display.contains("/data/inventory.json"));
        assert!(display.contains("💡 Hint:"));
        assert!(display.contains("Export the CMDB first"));
    }

    #[test]
    fn test_inventory_parse_error_display() {
        let error = CmdbError::InventoryParseError {
            path: PathBuf::from("/data/inventory.yml"),
            details: "missing field `name`".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to parse inventory file"));
        assert!(display.contains("missing field `name`"));
    }

    #[test]
    fn test_file_write_error_display() {
        let error = CmdbError::FileWriteError {
            path: PathBuf::from("/out/graph.json"),
            details: "Permission denied".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to write to file"));
        assert!(display.contains("Permission denied"));
    }

    #[test]
    fn test_validation_display() {
        let error = CmdbError::Validation {
            message: "page must be at least 1".to_string(),
        };
        assert_eq!(
            format!("{}", error),
            "Validation error: page must be at least 1"
        );
    }

    #[test]
    fn test_security_error_display() {
        let error = CmdbError::SecurityError {
            path: PathBuf::from("/tmp/link"),
            reason: "Symbolic links are not allowed".to_string(),
            hint: "Use a regular file instead".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Security violation"));
        assert!(display.contains("Use a regular file instead"));
    }
}
