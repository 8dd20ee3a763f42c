//! Client for the remote inference endpoint.
//!
//! One POST per prompt, JSON in and JSON out. Any non-success status or
//! network failure is a uniform transport error; the caller decides what to
//! show the user.

use reqwest::Client;
use serde::{Deserialize, Serialize};

/// Transport failure from the inference endpoint. Terminal for the request
/// that produced it; the session stays usable.
#[derive(Debug, thiserror::Error)]
pub enum AskError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("endpoint returned status {0}")]
    Status(reqwest::StatusCode),
}

#[derive(Serialize)]
struct AskRequest<'a> {
    prompt: &'a str,
}

#[derive(Deserialize)]
struct AskResponse {
    response: String,
}

/// HTTP client for the question-answering endpoint.
pub struct AskClient {
    client: Client,
    api_url: String,
}

impl AskClient {
    pub fn new(api_url: &str) -> Self {
        Self {
            client: Client::new(),
            api_url: api_url.to_string(),
        }
    }

    /// Send one prompt and return the raw response text.
    pub async fn ask(&self, prompt: &str) -> Result<String, AskError> {
        let response = self
            .client
            .post(&self.api_url)
            .json(&AskRequest { prompt })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AskError::Status(response.status()));
        }

        let body: AskResponse = response.json().await?;
        Ok(body.response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_body_shape() {
        let body = serde_json::to_value(AskRequest { prompt: "Hello" }).unwrap();
        assert_eq!(body, serde_json::json!({"prompt": "Hello"}));
    }

    #[test]
    fn response_decodes_response_field() {
        let body: AskResponse = serde_json::from_str(r#"{"response": "Hi"}"#).unwrap();
        assert_eq!(body.response, "Hi");
    }

    #[test]
    fn response_without_response_field_is_error() {
        assert!(serde_json::from_str::<AskResponse>(r#"{"answer": "Hi"}"#).is_err());
    }
}
