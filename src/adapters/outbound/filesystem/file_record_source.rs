use crate::assembly::domain::BomRecord;
use crate::ports::outbound::RecordSource;
use crate::shared::error::BomError;
use crate::shared::security::read_checked;
use crate::shared::Result;
use anyhow::Context;
use async_trait::async_trait;
use std::path::PathBuf;

/// FileRecordSource adapter reading BOM records from a JSON export
///
/// The file holds the same array the web API serves. It is re-read on
/// every fetch, so a reload picks up edits.
pub struct FileRecordSource {
    path: PathBuf,
}

impl FileRecordSource {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    fn read_records(&self) -> Result<Vec<BomRecord>> {
        let content = read_checked(&self.path, "record file")?;
        let records: Vec<BomRecord> = serde_json::from_str(&content)
            .with_context(|| format!("{} is not a JSON array of BOM records", self.path.display()))?;
        Ok(records)
    }
}

#[async_trait]
impl RecordSource for FileRecordSource {
    fn source_name(&self) -> String {
        self.path.display().to_string()
    }

    async fn fetch_records(&self) -> Result<Vec<BomRecord>> {
        self.read_records().map_err(|e| {
            BomError::RecordFetchFailure {
                source_name: self.source_name(),
                details: format!("{:#}", e),
            }
            .into()
        })
    }
}
