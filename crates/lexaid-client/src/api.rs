use reqwest::multipart;
use reqwest::StatusCode;
use serde_json::Value;

use lexaid_core::state::AnalysisResult;
use lexaid_core::state::UserRole;

use super::error::ClientError;
use super::error::Result;
use super::reply::extract_reply;
use super::reply::UNEXPECTED_REPLY;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

/// HTTP client for the remote analysis/chat backend. The backend is a
/// black box: this type only knows the two operations and their error
/// envelope (`{"error": "..."}` on non-2xx).
#[derive(Debug, Clone)]
pub struct BackendClient {
    base_url: String,
    client: reqwest::Client,
}

impl BackendClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Upload one document for analysis. On success the body is the full
    /// `AnalysisResult`; on failure the backend's message and status
    /// propagate.
    pub async fn process_document(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
        role: UserRole,
    ) -> Result<AnalysisResult> {
        let file = multipart::Part::bytes(bytes).file_name(file_name.to_string());
        let form = multipart::Form::new()
            .part("file", file)
            .text("user_role", role.form_value());

        let response = self
            .client
            .post(format!("{}/process-document", self.base_url))
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(backend_error(status, response.json().await.ok()));
        }
        Ok(response.json::<AnalysisResult>().await?)
    }

    /// Ask one question grounded in the given document text. Degrades to
    /// the fixed fallback reply when the response envelope is unrecognized.
    pub async fn chat(&self, question: &str, context: &str, user_role: &str) -> Result<String> {
        let response = self
            .client
            .post(format!("{}/chat", self.base_url))
            .json(&serde_json::json!({
                "question": question,
                "context": context,
                "user_role": user_role,
            }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(backend_error(status, response.json().await.ok()));
        }

        let body: Value = response.json().await?;
        Ok(extract_reply(&body).unwrap_or_else(|| {
            tracing::warn!("chat response matched no known envelope shape");
            UNEXPECTED_REPLY.to_string()
        }))
    }
}

impl Default for BackendClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

fn backend_error(status: StatusCode, body: Option<Value>) -> ClientError {
    let message = body
        .as_ref()
        .and_then(|value| value.get("error"))
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| format!("HTTP error! status: {}", status.as_u16()));
    ClientError::Backend {
        status: status.as_u16(),
        message,
    }
}
