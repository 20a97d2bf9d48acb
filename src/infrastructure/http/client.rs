// SPDX-License-Identifier: MPL-2.0
//! `reqwest` adapter implementing both collaborator ports.

use super::endpoints::Endpoints;
use crate::application::port::{
    AnalyticsError, AnalyticsSink, ContactApi, ContactError, ContactReceipt,
};
use crate::config::Config;
use crate::diagnostics::sanitize_message;
use crate::domain::analytics::SectionViewEvent;
use crate::domain::contact::ContactFields;
use crate::domain::timing::RequestTimeout;
use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Confirmation shown when the backend accepts a message without wording one.
pub const CONTACT_SUCCESS_FALLBACK: &str = "Message sent successfully!";

#[derive(Serialize)]
struct AnalyticsRequest<'a> {
    section: &'a str,
    #[serde(rename = "userAgent")]
    user_agent: &'a str,
}

#[derive(Serialize)]
struct ContactRequest<'a> {
    name: &'a str,
    email: &'a str,
    subject: &'a str,
    message: &'a str,
}

impl<'a> From<&'a ContactFields> for ContactRequest<'a> {
    fn from(fields: &'a ContactFields) -> Self {
        Self {
            name: &fields.name,
            email: &fields.email,
            subject: &fields.subject,
            message: &fields.message,
        }
    }
}

#[derive(Deserialize)]
struct ContactResponseBody {
    success: bool,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    id: Option<String>,
}

/// HTTP client for the portfolio backend.
///
/// Cheap to clone; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: reqwest::Client,
    endpoints: Endpoints,
}

impl HttpBackend {
    pub fn new(endpoints: Endpoints, user_agent: &str, timeout: RequestTimeout) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(timeout.as_duration())
            .build()?;
        Ok(Self { client, endpoints })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(
            config.endpoints()?,
            &config.user_agent,
            config.request_timeout(),
        )
    }

    #[must_use]
    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }
}

#[async_trait]
impl AnalyticsSink for HttpBackend {
    async fn record_event(&self, event: &SectionViewEvent) -> std::result::Result<(), AnalyticsError> {
        let body = AnalyticsRequest {
            section: event.section.as_str(),
            user_agent: &event.client_context,
        };
        let response = self
            .client
            .post(self.endpoints.analytics().clone())
            .json(&body)
            .send()
            .await
            .map_err(|e| AnalyticsError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AnalyticsError::Rejected {
                status: status.as_u16(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl ContactApi for HttpBackend {
    async fn submit_contact_message(
        &self,
        fields: &ContactFields,
    ) -> std::result::Result<ContactReceipt, ContactError> {
        let response = self
            .client
            .post(self.endpoints.contact().clone())
            .json(&ContactRequest::from(fields))
            .send()
            .await
            .map_err(|e| ContactError::TransportFailure(sanitize_message(&e.to_string())))?;

        let status = response.status().as_u16();
        // A status line arrived, so a truncated body is a server-side failure.
        let body = response.bytes().await.map_err(|e| {
            tracing::debug!(
                status,
                error = %sanitize_message(&e.to_string()),
                "contact body unreadable"
            );
            ContactError::ServerFailure {
                status,
                detail: None,
            }
        })?;

        classify_contact_response(status, &body)
    }
}

/// Maps a contact response onto a receipt or a [`ContactError`].
///
/// - 2xx with `success: true` is a receipt
/// - 2xx with `success: false` or an unreadable body is a server failure
/// - 4xx is a validation rejection
/// - anything else is a server failure
///
/// Only a string `detail` is kept. The backend's validation errors carry a
/// list of objects under `detail`, which is not fit for display.
pub(crate) fn classify_contact_response(
    status: u16,
    body: &[u8],
) -> std::result::Result<ContactReceipt, ContactError> {
    let json: Option<Value> = serde_json::from_slice(body).ok();
    let detail = json
        .as_ref()
        .and_then(|v| v.get("detail"))
        .and_then(Value::as_str)
        .map(str::to_string);

    match status {
        200..=299 => {
            let parsed = json.and_then(|v| serde_json::from_value::<ContactResponseBody>(v).ok());
            match parsed {
                Some(body) if body.success => Ok(ContactReceipt {
                    message: body
                        .message
                        .filter(|m| !m.trim().is_empty())
                        .unwrap_or_else(|| CONTACT_SUCCESS_FALLBACK.to_string()),
                    id: body.id,
                }),
                _ => Err(ContactError::ServerFailure { status, detail }),
            }
        }
        400..=499 => Err(ContactError::ValidationRejected { status, detail }),
        _ => Err(ContactError::ServerFailure { status, detail }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_body_becomes_receipt() {
        let body = br#"{"success":true,"message":"Thanks","id":"abc-123"}"#;
        let receipt = classify_contact_response(200, body).unwrap();
        assert_eq!(receipt.message, "Thanks");
        assert_eq!(receipt.id.as_deref(), Some("abc-123"));
    }

    #[test]
    fn success_without_message_uses_fallback_text() {
        let receipt = classify_contact_response(200, br#"{"success":true}"#).unwrap();
        assert_eq!(receipt.message, CONTACT_SUCCESS_FALLBACK);
        assert_eq!(receipt.id, None);
    }

    #[test]
    fn success_false_is_server_failure() {
        let err = classify_contact_response(200, br#"{"success":false}"#).unwrap_err();
        assert_eq!(
            err,
            ContactError::ServerFailure {
                status: 200,
                detail: None
            }
        );
    }

    #[test]
    fn success_false_keeps_string_detail() {
        let err = classify_contact_response(200, br#"{"success":false,"detail":"Mailbox full"}"#)
            .unwrap_err();
        assert_eq!(err.detail(), Some("Mailbox full"));
    }

    #[test]
    fn unreadable_success_body_is_server_failure() {
        let err = classify_contact_response(200, b"<html>proxy</html>").unwrap_err();
        assert!(matches!(err, ContactError::ServerFailure { status: 200, detail: None }));
    }

    #[test]
    fn client_errors_are_validation_rejections() {
        let err = classify_contact_response(400, br#"{"detail":"Invalid subject"}"#).unwrap_err();
        assert_eq!(
            err,
            ContactError::ValidationRejected {
                status: 400,
                detail: Some("Invalid subject".into())
            }
        );
    }

    #[test]
    fn structured_validation_detail_is_ignored() {
        let body = br#"{"detail":[{"loc":["body","email"],"msg":"value is not a valid email address","type":"value_error.email"}]}"#;
        let err = classify_contact_response(422, body).unwrap_err();
        assert!(matches!(err, ContactError::ValidationRejected { status: 422, detail: None }));
    }

    #[test]
    fn server_errors_keep_detail() {
        let err =
            classify_contact_response(500, br#"{"detail":"Internal server error"}"#).unwrap_err();
        assert_eq!(err.user_message(), "Internal server error");
        assert_eq!(err.kind(), crate::diagnostics::FailureKind::ContactServer);
    }

    #[test]
    fn empty_error_body_has_no_detail() {
        let err = classify_contact_response(502, b"").unwrap_err();
        assert!(matches!(err, ContactError::ServerFailure { status: 502, detail: None }));
    }

    #[test]
    fn analytics_body_uses_camel_case_user_agent() {
        let body = AnalyticsRequest {
            section: "skills",
            user_agent: "agent/1.0",
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json, serde_json::json!({"section": "skills", "userAgent": "agent/1.0"}));
    }

    #[test]
    fn contact_body_carries_the_four_fields() {
        let fields = ContactFields::new("Ada", "ada@example.com", "Hi", "Hello there");
        let json = serde_json::to_value(ContactRequest::from(&fields)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Ada",
                "email": "ada@example.com",
                "subject": "Hi",
                "message": "Hello there"
            })
        );
    }
}
