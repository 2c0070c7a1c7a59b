use crate::assembly::domain::BomRecord;
use crate::shared::Result;
use async_trait::async_trait;

/// RecordSource port for fetching the flat BOM record list
///
/// This port abstracts where the records come from (the BOM web API,
/// a JSON export on disk, etc.). One call returns the complete list;
/// there is no paging or incremental fetch.
///
/// Implementations must be `Send + Sync`.
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Human-readable name of the source, recorded in snapshot metadata
    fn source_name(&self) -> String;

    /// Fetches every record the source currently holds
    ///
    /// # Returns
    /// The records in source order. Order matters: duplicate component
    /// names resolve to the last occurrence.
    ///
    /// # Errors
    /// Returns `RecordFetchFailure` if:
    /// - The source is unreachable or answers with an error status
    /// - The payload is not a JSON array of records
    async fn fetch_records(&self) -> Result<Vec<BomRecord>>;
}

#[async_trait]
impl RecordSource for Box<dyn RecordSource> {
    fn source_name(&self) -> String {
        (**self).source_name()
    }

    async fn fetch_records(&self) -> Result<Vec<BomRecord>> {
        (**self).fetch_records().await
    }
}
