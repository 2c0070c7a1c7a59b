use crate::adapters::outbound::filesystem::FileRecordSource;
use crate::adapters::outbound::network::HttpRecordSource;
use crate::ports::outbound::RecordSource;
use crate::shared::error::BomError;
use crate::shared::Result;
use std::path::PathBuf;

/// Kind of record source named by a `--source` value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceKind {
    /// Base URL of the BOM web API
    Http(String),
    /// JSON export on disk
    File(PathBuf),
}

impl SourceKind {
    /// Classifies a source string: `http://` and `https://` select the web
    /// API, anything else is taken as a file path
    ///
    /// # Errors
    /// Returns `InvalidSource` for an empty string
    pub fn detect(source: &str) -> Result<Self> {
        let trimmed = source.trim();
        if trimmed.is_empty() {
            return Err(BomError::InvalidSource {
                source_name: source.to_string(),
                reason: "the source is empty".to_string(),
            }
            .into());
        }

        let lower = trimmed.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            Ok(SourceKind::Http(trimmed.to_string()))
        } else {
            Ok(SourceKind::File(PathBuf::from(trimmed)))
        }
    }
}

/// Factory for creating record sources
pub struct RecordSourceFactory;

impl RecordSourceFactory {
    /// Creates the record source adapter for a `--source` value
    ///
    /// # Errors
    /// Returns `InvalidSource` if the value is empty or not a usable URL
    pub fn create(source: &str) -> Result<Box<dyn RecordSource>> {
        match SourceKind::detect(source)? {
            SourceKind::Http(url) => Ok(Box::new(HttpRecordSource::new(&url)?)),
            SourceKind::File(path) => Ok(Box::new(FileRecordSource::new(path))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_http() {
        assert_eq!(
            SourceKind::detect("https://localhost:44357/api/BOMappAPI").unwrap(),
            SourceKind::Http("https://localhost:44357/api/BOMappAPI".to_string())
        );
        assert!(matches!(
            SourceKind::detect("HTTP://example.com").unwrap(),
            SourceKind::Http(_)
        ));
    }

    #[test]
    fn test_detect_file() {
        assert_eq!(
            SourceKind::detect(" data/records.json ").unwrap(),
            SourceKind::File(PathBuf::from("data/records.json"))
        );
    }

    #[test]
    fn test_detect_empty_is_invalid() {
        let error = SourceKind::detect("   ").unwrap_err();
        assert!(matches!(
            error.downcast_ref::<BomError>(),
            Some(BomError::InvalidSource { .. })
        ));
    }

    #[test]
    fn test_create_names_source() {
        let source = RecordSourceFactory::create("records.json").unwrap();
        assert_eq!(source.source_name(), "records.json");

        let source = RecordSourceFactory::create("http://example.com/api").unwrap();
        assert_eq!(source.source_name(), "http://example.com/api");
    }
}
