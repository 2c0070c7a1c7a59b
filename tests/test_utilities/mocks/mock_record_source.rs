use async_trait::async_trait;
use bom_master::prelude::*;
use bom_master::shared::error::BomError;
use std::sync::{Arc, Mutex};

/// Mock RecordSource serving a replaceable record list
///
/// Clones share state, so a test can keep a handle, hand a clone to the
/// browser, and change what the next fetch returns.
#[derive(Clone, Default)]
pub struct MockRecordSource {
    records: Arc<Mutex<Vec<BomRecord>>>,
    failure: Arc<Mutex<Option<String>>>,
    fetch_count: Arc<Mutex<usize>>,
}

#[allow(dead_code)]
impl MockRecordSource {
    pub fn new(records: Vec<BomRecord>) -> Self {
        Self {
            records: Arc::new(Mutex::new(records)),
            ..Self::default()
        }
    }

    /// Replaces what subsequent fetches return
    pub fn set_records(&self, records: Vec<BomRecord>) {
        *self.records.lock().unwrap() = records;
        *self.failure.lock().unwrap() = None;
    }

    /// Makes subsequent fetches fail
    pub fn fail_with(&self, details: &str) {
        *self.failure.lock().unwrap() = Some(details.to_string());
    }

    pub fn fetch_count(&self) -> usize {
        *self.fetch_count.lock().unwrap()
    }
}

#[async_trait]
impl RecordSource for MockRecordSource {
    fn source_name(&self) -> String {
        "mock-source".to_string()
    }

    async fn fetch_records(&self) -> Result<Vec<BomRecord>> {
        *self.fetch_count.lock().unwrap() += 1;

        let failure = self.failure.lock().unwrap().clone();
        if let Some(details) = failure {
            return Err(BomError::RecordFetchFailure {
                source_name: self.source_name(),
                details,
            }
            .into());
        }

        Ok(self.records.lock().unwrap().clone())
    }
}
