//! HTTP client for the assistant backend.
//!
//! The backend owns every piece of business logic: Gmail OAuth, mailbox
//! retrieval, draft generation, and SMTP sending. This crate only speaks its
//! HTTP surface: `POST /assistant`, `POST /send-email`, and the `/auth` /
//! `/logout` browser hand-off URLs.

use reqwest::Client;
use shared::{
    error::ApiError,
    protocol::{AssistantRequest, AssistantResponse, SendEmailRequest},
};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ClientError {
    /// Non-2xx response whose body carried a structured [`ApiError`] with a
    /// usable message.
    #[error("{0}")]
    Backend(String),
    /// Connection/request failures, and non-2xx responses without a
    /// structured body.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

/// Which remote operation failed. Selects the fallback wording when neither
/// the backend nor the transport layer supplied a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    FetchMessage,
    SendEmail,
}

impl Operation {
    pub fn fallback_text(self) -> &'static str {
        match self {
            Operation::FetchMessage => "Unknown error fetching message",
            Operation::SendEmail => "Unknown error sending email",
        }
    }
}

/// User-facing text for a failed request, in priority order: the backend's
/// structured message, then the transport error's own message, then the
/// fixed per-operation fallback.
pub fn failure_text(err: &ClientError, operation: Operation) -> String {
    match err {
        ClientError::Backend(message) if !message.trim().is_empty() => message.clone(),
        other => {
            let text = other.to_string();
            if text.trim().is_empty() {
                operation.fallback_text().to_string()
            } else {
                text
            }
        }
    }
}

/// Thin wrapper over one shared [`reqwest::Client`]. The base URL is fixed at
/// construction; requests are single-shot with no retry and no timeout.
/// Cloning shares the underlying connection pool.
#[derive(Clone)]
pub struct AssistantClient {
    http: Client,
    base_url: String,
}

impl AssistantClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Browser target that starts the backend's OAuth flow. The response is a
    /// full-page redirect chain this client never consumes.
    pub fn auth_url(&self) -> String {
        format!("{}/auth", self.base_url)
    }

    /// Browser target that ends the backend session.
    pub fn logout_url(&self) -> String {
        format!("{}/logout", self.base_url)
    }

    /// Fetch the most recent message for `recipient_email` together with the
    /// AI-drafted reply.
    pub async fn fetch_last_message(
        &self,
        recipient_email: &str,
    ) -> Result<AssistantResponse, ClientError> {
        debug!(recipient_email, "assistant: fetching last message");
        let response = self
            .http
            .post(format!("{}/assistant", self.base_url))
            .json(&AssistantRequest {
                recipient_email: recipient_email.to_string(),
            })
            .send()
            .await?;
        let response = check_status(response).await?;
        Ok(response.json().await?)
    }

    /// Submit a reply for sending. The success body, if any, is ignored.
    pub async fn send_email(
        &self,
        recipient_email: &str,
        subject: &str,
        body: &str,
    ) -> Result<(), ClientError> {
        debug!(recipient_email, subject, "assistant: sending email");
        let response = self
            .http
            .post(format!("{}/send-email", self.base_url))
            .json(&SendEmailRequest {
                recipient_email: recipient_email.to_string(),
                subject: subject.to_string(),
                body: body.to_string(),
            })
            .send()
            .await?;
        check_status(response).await?;
        Ok(())
    }
}

/// On a non-2xx status, prefer the backend's structured error body over the
/// bare status error.
async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    let status_err = response.error_for_status_ref().err();
    let Some(status_err) = status_err else {
        return Ok(response);
    };
    match response.json::<ApiError>().await {
        Ok(api) if !api.message.is_empty() => Err(ClientError::Backend(api.message)),
        _ => Err(ClientError::Transport(status_err)),
    }
}

#[cfg(test)]
mod tests;
