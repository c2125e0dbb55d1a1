//! Request/response bodies for the assistant backend endpoints.
//!
//! Field names are camelCase on the wire; the backend contract predates this
//! client and is not negotiable here.

use serde::{Deserialize, Serialize};

/// Body of `POST {backend}/assistant`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssistantRequest {
    pub recipient_email: String,
}

/// Response of `POST {backend}/assistant`: the most recent message for the
/// address plus the AI-drafted reply.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssistantResponse {
    pub message: String,
    pub generated_response: String,
}

/// Body of `POST {backend}/send-email`. The response body is unspecified and
/// ignored beyond success/failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendEmailRequest {
    pub recipient_email: String,
    pub subject: String,
    pub body: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assistant_request_uses_camel_case_on_the_wire() {
        let body = serde_json::to_string(&AssistantRequest {
            recipient_email: "alice@example.com".to_string(),
        })
        .expect("serialize");
        assert_eq!(body, r#"{"recipientEmail":"alice@example.com"}"#);
    }

    #[test]
    fn assistant_response_parses_camel_case_fields() {
        let parsed: AssistantResponse = serde_json::from_str(
            r#"{"message":"Hello?","generatedResponse":"Hi, thanks for reaching out."}"#,
        )
        .expect("deserialize");
        assert_eq!(parsed.message, "Hello?");
        assert_eq!(parsed.generated_response, "Hi, thanks for reaching out.");
    }

    #[test]
    fn send_email_request_uses_camel_case_on_the_wire() {
        let body = serde_json::to_string(&SendEmailRequest {
            recipient_email: "alice@example.com".to_string(),
            subject: "Response".to_string(),
            body: "Sounds good.".to_string(),
        })
        .expect("serialize");
        assert_eq!(
            body,
            r#"{"recipientEmail":"alice@example.com","subject":"Response","body":"Sounds good."}"#
        );
    }
}
