use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes let scripts distinguish a missing selection from a hard failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - the assembly was loaded and rendered
    Success = 0,
    /// The requested node id does not exist in the loaded assembly
    NodeNotFound = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (fetch failure, rejected build, file I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Picks the exit code for an error returned by the application
    pub fn for_error(error: &anyhow::Error) -> Self {
        match error.downcast_ref::<BomError>() {
            Some(BomError::NodeNotFound { .. }) => ExitCode::NodeNotFound,
            _ => ExitCode::ApplicationError,
        }
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::NodeNotFound => write!(f, "Node Not Found (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for assembly browsing.
///
/// Only `RecordFetchFailure` and `NodeNotFound` occur under the default build
/// policies; the rest are raised by opt-in strict policies, the cycle guard of
/// the path walk, or the I/O adapters.
#[derive(Debug, Error)]
pub enum BomError {
    #[error("Failed to fetch BOM records from: {source_name}\nDetails: {details}\n\n💡 Hint: Please verify that the record source is reachable and returns a JSON array of BOM records")]
    RecordFetchFailure {
        source_name: String,
        details: String,
    },

    #[error("Node with id {id} not found in the assembly tree\n\n💡 Hint: Pick an id shown in the assembly tree output")]
    NodeNotFound { id: i64 },

    #[error("Orphan record: '{component_name}' (id {id}) references unknown parent '{parent_name}'\n\n💡 Hint: Fix the parent reference or use --on-orphan drop to skip such records")]
    OrphanRecord {
        id: i64,
        component_name: String,
        parent_name: String,
    },

    #[error("Duplicate component name: '{component_name}' is used by records {first_id} and {duplicate_id}\n\n💡 Hint: Make component names unique or use --on-duplicate last-wins")]
    DuplicateComponentName {
        component_name: String,
        first_id: i64,
        duplicate_id: i64,
    },

    #[error("Cyclic hierarchy detected at component '{component_name}'\n\n💡 Hint: Check the PARENT_NAME chain of this component for a loop")]
    CyclicHierarchy { component_name: String },

    #[error("Invalid record source: {source_name}\nReason: {reason}\n\n💡 Hint: Specify an http(s) URL or the path of a JSON file with --source")]
    InvalidSource { source_name: String, reason: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    /// Validation error for configuration values and policy names
    #[error("Validation error: {message}")]
    Validation { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::NodeNotFound.as_i32(), 1);
        assert_eq!(ExitCode::InvalidArguments.as_i32(), 2);
        assert_eq!(ExitCode::ApplicationError.as_i32(), 3);
    }

    #[test]
    fn test_exit_code_display() {
        assert_eq!(format!("{}", ExitCode::Success), "Success (0)");
        assert_eq!(format!("{}", ExitCode::NodeNotFound), "Node Not Found (1)");
        assert_eq!(
            format!("{}", ExitCode::ApplicationError),
            "Application Error (3)"
        );
    }

    #[test]
    fn test_exit_code_for_node_not_found() {
        let error: anyhow::Error = BomError::NodeNotFound { id: 42 }.into();
        assert_eq!(ExitCode::for_error(&error), ExitCode::NodeNotFound);
    }

    #[test]
    fn test_exit_code_for_other_errors() {
        let error: anyhow::Error = BomError::CyclicHierarchy {
            component_name: "VALVE".to_string(),
        }
        .into();
        assert_eq!(ExitCode::for_error(&error), ExitCode::ApplicationError);

        let plain = anyhow::anyhow!("something else");
        assert_eq!(ExitCode::for_error(&plain), ExitCode::ApplicationError);
    }

    #[test]
    fn test_exit_code_for_wrapped_node_not_found() {
        let error = anyhow::Error::from(BomError::NodeNotFound { id: 7 })
            .context("while selecting a node");
        assert_eq!(ExitCode::for_error(&error), ExitCode::NodeNotFound);
    }

    #[test]
    fn test_record_fetch_failure_display() {
        let error = BomError::RecordFetchFailure {
            source_name: "https://example.com/api".to_string(),
            details: "connection refused".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to fetch BOM records"));
        assert!(display.contains("https://example.com/api"));
        assert!(display.contains("connection refused"));
        assert!(display.contains("💡 Hint:"));
    }

    #[test]
    fn test_node_not_found_display() {
        let display = format!("{}", BomError::NodeNotFound { id: 99 });
        assert!(display.contains("Node with id 99 not found"));
    }

    #[test]
    fn test_orphan_record_display() {
        let error = BomError::OrphanRecord {
            id: 4,
            component_name: "GASKET".to_string(),
            parent_name: "MISSING".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("GASKET"));
        assert!(display.contains("MISSING"));
        assert!(display.contains("--on-orphan"));
    }

    #[test]
    fn test_duplicate_component_name_display() {
        let error = BomError::DuplicateComponentName {
            component_name: "SEAT".to_string(),
            first_id: 2,
            duplicate_id: 5,
        };
        let display = format!("{}", error);
        assert!(display.contains("'SEAT'"));
        assert!(display.contains("records 2 and 5"));
    }

    #[test]
    fn test_file_read_error_display() {
        let error = BomError::FileReadError {
            path: PathBuf::from("/test/records.json"),
            details: "File not found".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to read file"));
        assert!(display.contains("/test/records.json"));
        assert!(display.contains("💡 Hint:"));
    }

    #[test]
    fn test_file_write_error_display() {
        let error = BomError::FileWriteError {
            path: PathBuf::from("/test/output.md"),
            details: "Permission denied".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to write to file"));
        assert!(display.contains("Permission denied"));
    }
}
