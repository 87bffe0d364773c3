use rudder_sync::{ApiError, SyncStatus};

/// Result of fetching the status endpoint.
///
/// On HTTP success the raw body text is kept alongside the parsed payload
/// so callers can persist the response verbatim.
#[derive(Debug)]
pub enum StatusReply {
    Ok { raw: String, payload: SyncStatus },
    HttpError(u16),
}

/// HTTP client for the RudderStack Reverse ETL source endpoints.
///
/// This is a pure transport utility — it issues requests and reports what
/// came back without deciding what any HTTP status means for the caller.
pub struct RudderClient {
    client: reqwest::Client,
    token: String,
    api_base_url: Option<String>,
}

impl RudderClient {
    pub fn new(token: impl Into<String>, api_base_url: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            token: token.into(),
            api_base_url,
        }
    }

    fn api_base(&self) -> &str {
        self.api_base_url
            .as_deref()
            .unwrap_or("https://api.rudderstack.com")
    }

    fn build_request(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        builder
            .header("authorization", format!("Bearer {}", self.token))
            .header("Content-Type", "application/json")
    }

    /// Start a sync run for a source.
    ///
    /// Returns the HTTP status code of the response; only transport
    /// failures surface as errors.
    pub async fn start_sync(&self, source_id: &str) -> Result<u16, ApiError> {
        let url = format!("{}/v2/sources/{}/start", self.api_base(), source_id);

        let response = self
            .build_request(self.client.post(&url))
            .send()
            .await
            .map_err(|e| ApiError::Network(format!("trigger request failed: {e}")))?;

        Ok(response.status().as_u16())
    }

    /// Fetch the status of the most recent sync run for a source.
    pub async fn source_status(&self, source_id: &str) -> Result<StatusReply, ApiError> {
        let url = format!("{}/v2/sources/{}/status", self.api_base(), source_id);

        let response = self
            .build_request(self.client.get(&url))
            .send()
            .await
            .map_err(|e| ApiError::Network(format!("status request failed: {e}")))?;

        let http_status = response.status().as_u16();
        if !response.status().is_success() {
            return Ok(StatusReply::HttpError(http_status));
        }

        let raw = response
            .text()
            .await
            .map_err(|e| ApiError::Network(format!("failed to read status body: {e}")))?;

        let payload: SyncStatus = serde_json::from_str(&raw)
            .map_err(|e| ApiError::Parse(format!("status body is not valid JSON: {e}")))?;

        Ok(StatusReply::Ok { raw, payload })
    }
}
