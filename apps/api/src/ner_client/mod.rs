//! NER client — the single point of entry for entity-recognition calls.
//!
//! No other module talks to the NER service directly; the resolver in
//! `analysis::name` goes through this client. The endpoint is configured
//! once at startup and the service is treated as a black box that labels
//! spans in free text.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Entity label the name resolver looks for.
const PERSON_LABEL: &str = "PERSON";
const REQUEST_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Error)]
pub enum NerError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("NER service error (status {status}): {message}")]
    Api { status: u16, message: String },
}

#[derive(Debug, Serialize)]
struct NerRequest<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct NerResponse {
    entities: Vec<Entity>,
}

/// A labeled span as reported by the service. Casing and spacing of `text`
/// are preserved verbatim.
#[derive(Debug, Deserialize)]
struct Entity {
    label: String,
    text: String,
}

/// Thin HTTP client for an external entity-recognition service.
#[derive(Clone)]
pub struct NerClient {
    client: Client,
    endpoint: String,
}

impl NerClient {
    pub fn new(endpoint: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()
                .expect("Failed to build HTTP client"),
            endpoint,
        }
    }

    /// Returns the first PERSON entity in the text, or `None` when the
    /// service finds no person. Transport and service errors are returned
    /// to the caller, which decides how to degrade.
    pub async fn first_person(&self, text: &str) -> Result<Option<String>, NerError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&NerRequest { text })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(NerError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: NerResponse = response.json().await?;
        debug!("NER call returned {} entities", body.entities.len());

        Ok(body
            .entities
            .into_iter()
            .find(|e| e.label == PERSON_LABEL)
            .map(|e| e.text))
    }
}
