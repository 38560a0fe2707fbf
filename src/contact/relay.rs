use std::future::Future;

use serde::Serialize;
use thiserror::Error;

use super::fields::FormFields;

pub const EMAILJS_SEND_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RelayError {
    #[error("mail relay is not configured: missing {0}")]
    NotConfigured(&'static str),
    #[error("mail relay is only reachable from the browser")]
    Unavailable,
    #[error("couldn't reach mail relay: {0}")]
    Transport(String),
    #[error("mail relay rejected the message ({status}): {body}")]
    Rejected { status: u16, body: String },
}

/// Snapshot of the form handed to the relay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl From<&FormFields> for ContactPayload {
    fn from(fields: &FormFields) -> Self {
        Self {
            name: fields.name.clone(),
            email: fields.email.clone(),
            message: fields.message.clone(),
        }
    }
}

/// Identifiers passed through to the relay untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RelayConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

impl RelayConfig {
    /// Reads the ids forwarded by `build.rs` from the build environment.
    pub fn from_build_env() -> Self {
        Self {
            service_id: env!("EMAILJS_SERVICE_ID").to_string(),
            template_id: env!("EMAILJS_TEMPLATE_ID").to_string(),
            public_key: env!("EMAILJS_PUBLIC_KEY").to_string(),
        }
    }

    pub fn ensure_complete(&self) -> Result<(), RelayError> {
        if self.service_id.is_empty() {
            return Err(RelayError::NotConfigured("service id"));
        }
        if self.template_id.is_empty() {
            return Err(RelayError::NotConfigured("template id"));
        }
        if self.public_key.is_empty() {
            return Err(RelayError::NotConfigured("public key"));
        }
        Ok(())
    }
}

/// Delivers a contact message on the site's behalf.
///
/// Any `Err` is treated the same way by the controller; implementations
/// should not expect callers to inspect the variant beyond logging it.
pub trait MailRelay {
    fn send(
        &self,
        config: &RelayConfig,
        payload: &ContactPayload,
    ) -> impl Future<Output = Result<(), RelayError>>;
}

#[derive(Debug, Serialize)]
struct EmailJsRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a ContactPayload,
}

impl<'a> EmailJsRequest<'a> {
    fn new(config: &'a RelayConfig, payload: &'a ContactPayload) -> Self {
        Self {
            service_id: &config.service_id,
            template_id: &config.template_id,
            user_id: &config.public_key,
            template_params: payload,
        }
    }
}

/// Relay backed by the EmailJS REST endpoint.
#[derive(Debug, Clone)]
pub struct EmailJsRelay {
    endpoint: String,
}

impl Default for EmailJsRelay {
    fn default() -> Self {
        Self::new(EMAILJS_SEND_URL)
    }
}

impl EmailJsRelay {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl MailRelay for EmailJsRelay {
    async fn send(&self, config: &RelayConfig, payload: &ContactPayload) -> Result<(), RelayError> {
        config.ensure_complete()?;
        self.post(&EmailJsRequest::new(config, payload)).await
    }
}

impl EmailJsRelay {
    #[cfg(feature = "hydrate")]
    async fn post(&self, request: &EmailJsRequest<'_>) -> Result<(), RelayError> {
        use gloo_net::http::Request;

        let response = Request::post(&self.endpoint)
            .json(request)
            .map_err(|e| RelayError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| RelayError::Transport(e.to_string()))?;

        if response.ok() {
            return Ok(());
        }
        let body = response.text().await.unwrap_or_default();
        Err(RelayError::Rejected {
            status: response.status(),
            body,
        })
    }

    #[cfg(not(feature = "hydrate"))]
    async fn post(&self, request: &EmailJsRequest<'_>) -> Result<(), RelayError> {
        log::debug!(
            "dropping message from {} to {}: relay unavailable outside the browser",
            request.template_params.email,
            self.endpoint
        );
        Err(RelayError::Unavailable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    fn config() -> RelayConfig {
        RelayConfig {
            service_id: "service_abc".to_string(),
            template_id: "template_xyz".to_string(),
            public_key: "pk-123".to_string(),
        }
    }

    #[test]
    fn test_emailjs_request_shape() {
        let payload = ContactPayload {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            message: "Hello from the contact form".to_string(),
        };
        let config = config();
        let json = serde_json::to_value(EmailJsRequest::new(&config, &payload))
            .expect("request should serialize");

        assert_eq!(
            json,
            serde_json::json!({
                "service_id": "service_abc",
                "template_id": "template_xyz",
                "user_id": "pk-123",
                "template_params": {
                    "name": "Ada",
                    "email": "ada@example.com",
                    "message": "Hello from the contact form",
                }
            })
        );
    }

    #[test]
    fn test_payload_from_fields() {
        let fields = FormFields {
            name: " Ada ".to_string(),
            email: "ada@example.com".to_string(),
            message: "unchanged text".to_string(),
        };
        let payload = ContactPayload::from(&fields);
        // values are passed through as typed
        assert_eq!(payload.name, " Ada ");
        assert_eq!(payload.email, fields.email);
        assert_eq!(payload.message, fields.message);
    }

    #[test]
    fn test_incomplete_config() {
        assert_eq!(config().ensure_complete(), Ok(()));

        let mut missing = config();
        missing.template_id.clear();
        assert_eq!(
            missing.ensure_complete(),
            Err(RelayError::NotConfigured("template id"))
        );
        assert_eq!(
            RelayConfig::default().ensure_complete(),
            Err(RelayError::NotConfigured("service id"))
        );
    }

    #[test]
    fn test_emailjs_relay_rejects_missing_config() {
        let relay = EmailJsRelay::default();
        assert_eq!(relay.endpoint(), EMAILJS_SEND_URL);

        let payload = ContactPayload::from(&FormFields::default());
        let res = block_on(relay.send(&RelayConfig::default(), &payload));
        assert_eq!(res, Err(RelayError::NotConfigured("service id")));
    }

    #[cfg(not(feature = "hydrate"))]
    #[test]
    fn test_emailjs_relay_unavailable_off_browser() {
        let relay = EmailJsRelay::new("http://localhost/send");
        let payload = ContactPayload::from(&FormFields::default());
        let res = block_on(relay.send(&config(), &payload));
        assert_eq!(res, Err(RelayError::Unavailable));
    }
}
