use crate::assembly::domain::BomRecord;
use crate::ports::outbound::RecordSource;
use crate::shared::error::BomError;
use crate::shared::Result;
use async_trait::async_trait;
use reqwest::Url;
use std::time::Duration;

/// Path segment appended to the API base URL
const GET_DATA_ENDPOINT: &str = "GetData";

/// Outcome of a failed attempt
enum AttemptError {
    Retryable(anyhow::Error),
    Final(anyhow::Error),
}

/// HttpRecordSource adapter fetching BOM records from the BOM web API
///
/// This adapter implements the RecordSource port. It issues
/// `GET {api_url}/GetData` and expects a JSON array of records.
///
/// Transport errors and 5xx answers are retried with a linear back-off.
/// Other statuses and undecodable bodies fail on the first attempt. The
/// browser itself never retries.
pub struct HttpRecordSource {
    client: reqwest::Client,
    api_url: Url,
    max_retries: u32,
}

impl HttpRecordSource {
    /// Creates a new HTTP record source
    ///
    /// # Arguments
    /// * `api_url` - Base URL of the API, e.g. `https://localhost:44357/api/BOMappAPI`
    ///
    /// # Errors
    /// Returns `InvalidSource` if the URL does not parse or is not http(s),
    /// or an error if the HTTP client cannot be built.
    pub fn new(api_url: &str) -> Result<Self> {
        let api_url = Self::parse_api_url(api_url)?;

        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("bom-master/{}", version);
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            api_url,
            max_retries: 3,
        })
    }

    /// Overrides the number of attempts made per fetch (minimum 1)
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries.max(1);
        self
    }

    fn parse_api_url(api_url: &str) -> Result<Url> {
        let url = Url::parse(api_url.trim()).map_err(|e| BomError::InvalidSource {
            source_name: api_url.to_string(),
            reason: format!("not a valid URL: {}", e),
        })?;

        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(BomError::InvalidSource {
                source_name: api_url.to_string(),
                reason: format!("unsupported URL scheme '{}'", other),
            }
            .into()),
        }
    }

    /// URL of the record endpoint
    pub fn endpoint(&self) -> String {
        format!(
            "{}/{}",
            self.api_url.as_str().trim_end_matches('/'),
            GET_DATA_ENDPOINT
        )
    }

    /// Fetches the records with retry logic (async)
    async fn fetch_with_retry(&self) -> Result<Vec<BomRecord>> {
        let mut last_error = None;

        for attempt in 1..=self.max_retries {
            match self.fetch_once().await {
                Ok(records) => return Ok(records),
                Err(AttemptError::Final(e)) => return Err(e),
                Err(AttemptError::Retryable(e)) => {
                    last_error = Some(e);
                    if attempt < self.max_retries {
                        tokio::time::sleep(Duration::from_millis(100 * attempt as u64)).await;
                    }
                }
            }
        }

        Err(last_error.unwrap_or_else(|| anyhow::anyhow!("no request was attempted")))
    }

    async fn fetch_once(&self) -> std::result::Result<Vec<BomRecord>, AttemptError> {
        let response = self
            .client
            .get(self.endpoint())
            .send()
            .await
            .map_err(|e| AttemptError::Retryable(e.into()))?;

        let status = response.status();
        if !status.is_success() {
            let error = anyhow::anyhow!("BOM API returned status code {}", status);
            return Err(if status.is_server_error() {
                AttemptError::Retryable(error)
            } else {
                AttemptError::Final(error)
            });
        }

        response.json::<Vec<BomRecord>>().await.map_err(|e| {
            if e.is_decode() {
                AttemptError::Final(e.into())
            } else {
                AttemptError::Retryable(e.into())
            }
        })
    }
}

#[async_trait]
impl RecordSource for HttpRecordSource {
    fn source_name(&self) -> String {
        self.api_url.to_string()
    }

    async fn fetch_records(&self) -> Result<Vec<BomRecord>> {
        self.fetch_with_retry().await.map_err(|e| {
            BomError::RecordFetchFailure {
                source_name: self.endpoint(),
                details: format!("{:#}", e),
            }
            .into()
        })
    }
}
