use std::time::Duration;

use reqwest::Client;

use crate::error::ProbeError;
use crate::measure::harness::RtsSource;
use crate::records::types::RtsData;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP handle to a canister's runtime-system counter endpoint.
///
/// Speaks only the snapshot half of the measurement contract; callers drive
/// their own update calls and hand the harness the resulting instruction
/// count.
#[derive(Clone)]
pub struct RtsClient {
    client: Client,
    base_url: String,
}

impl RtsClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .unwrap_or_else(|_| Client::new()),
            base_url: base_url.into(),
        }
    }
}

impl RtsSource for RtsClient {
    async fn rts_data(&self) -> Result<RtsData, ProbeError> {
        let response = self
            .client
            .get(format!("{}/rts_data", self.base_url))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ProbeError::Remote(format!(
                "snapshot endpoint returned {}",
                response.status()
            )));
        }

        Ok(response.json().await?)
    }
}
