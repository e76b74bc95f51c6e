//! Remote embedding provider: a JSON HTTP service hosting the actual
//! model. Expensive to stand up, so availability is probed once at
//! construction; per-request failures surface as inference errors.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::warn;

use casemap_core::errors::{CasemapResult, EmbeddingError};
use casemap_core::traits::EmbeddingProvider;

const PROBE_TIMEOUT: Duration = Duration::from_secs(2);
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Serialize)]
struct EmbedRequest<'a> {
    texts: &'a [String],
}

#[derive(Deserialize)]
struct EmbedResponse {
    embeddings: Vec<Vec<f32>>,
}

pub struct RemoteProvider {
    endpoint: String,
    dimensions: usize,
    client: Option<reqwest::blocking::Client>,
    available: bool,
}

impl RemoteProvider {
    /// Construct and probe the endpoint's health route once.
    pub fn new(endpoint: &str, dimensions: usize) -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .ok();

        let available = match (&client, endpoint.is_empty()) {
            (Some(client), false) => client
                .get(format!("{endpoint}/health"))
                .timeout(PROBE_TIMEOUT)
                .send()
                .map(|r| r.status().is_success())
                .unwrap_or(false),
            _ => false,
        };

        if !available {
            warn!(endpoint, "remote embedding endpoint not reachable");
        }

        Self {
            endpoint: endpoint.to_string(),
            dimensions,
            client,
            available,
        }
    }

    fn request(&self, texts: &[String]) -> CasemapResult<Vec<Vec<f32>>> {
        let client = self.client.as_ref().ok_or_else(|| {
            EmbeddingError::ProviderUnavailable {
                provider: "remote".to_string(),
            }
        })?;

        let response = client
            .post(format!("{}/embed", self.endpoint))
            .json(&EmbedRequest { texts })
            .send()
            .map_err(|e| EmbeddingError::InferenceFailed {
                reason: e.to_string(),
            })?;

        if !response.status().is_success() {
            return Err(EmbeddingError::InferenceFailed {
                reason: format!("endpoint returned {}", response.status()),
            }
            .into());
        }

        let body: EmbedResponse =
            response
                .json()
                .map_err(|e| EmbeddingError::InferenceFailed {
                    reason: e.to_string(),
                })?;

        for vector in &body.embeddings {
            if vector.len() != self.dimensions {
                return Err(EmbeddingError::DimensionMismatch {
                    expected: self.dimensions,
                    actual: vector.len(),
                }
                .into());
            }
        }

        Ok(body.embeddings)
    }
}

impl EmbeddingProvider for RemoteProvider {
    fn embed(&self, text: &str) -> CasemapResult<Vec<f32>> {
        let texts = [text.to_string()];
        let mut vectors = self.request(&texts)?;
        vectors.pop().ok_or_else(|| {
            EmbeddingError::InferenceFailed {
                reason: "endpoint returned no embeddings".to_string(),
            }
            .into()
        })
    }

    fn embed_batch(&self, texts: &[String]) -> CasemapResult<Vec<Vec<f32>>> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }
        let vectors = self.request(texts)?;
        if vectors.len() != texts.len() {
            return Err(EmbeddingError::InferenceFailed {
                reason: format!("expected {} embeddings, got {}", texts.len(), vectors.len()),
            }
            .into());
        }
        Ok(vectors)
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        "remote"
    }

    fn is_available(&self) -> bool {
        self.available
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_endpoint_is_unavailable() {
        let p = RemoteProvider::new("", 256);
        assert!(!p.is_available());
    }

    #[test]
    fn unavailable_without_client_errors_on_embed() {
        let p = RemoteProvider {
            endpoint: String::new(),
            dimensions: 256,
            client: None,
            available: false,
        };
        assert!(p.embed("anything").is_err());
    }
}
