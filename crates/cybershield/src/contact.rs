//! Contact-form delivery.
//!
//! The contact path is the only networked part of the system: one JSON POST
//! to a configured endpoint, one JSON response, no retry and no cancellation.
//! Everything behind the endpoint (spam checks, rate limiting, routing to a
//! human) belongs to the service operating it, not to this crate.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::Result;

/// The JSON request body sent to the contact endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    /// Sender's name.
    pub name: String,
    /// Sender's email address; may be empty.
    pub email: String,
    /// Sender's phone number; may be empty.
    pub phone: String,
    /// The message body.
    pub message: String,
}

/// The JSON response body returned by the contact endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactReceipt {
    /// Whether the endpoint accepted the message.
    pub ok: bool,
    /// Ticket assigned by the endpoint, when it issues one.
    #[serde(rename = "ticketId", skip_serializing_if = "Option::is_none")]
    pub ticket_id: Option<String>,
}

/// Transport for delivering contact messages.
///
/// The HTTP implementation below is the real one; tests substitute their own.
#[async_trait]
pub trait ContactGateway: Send + Sync {
    /// The name of this gateway (for logging/debugging).
    fn name(&self) -> &'static str;

    /// Deliver one message and return the endpoint's receipt.
    ///
    /// A single request-response exchange. Not cancelable once started, never
    /// retried here; the caller decides whether to try again.
    ///
    /// # Errors
    ///
    /// Returns a network error when the endpoint is unreachable, responds
    /// with a failure status, or returns a malformed receipt.
    async fn deliver(&self, message: &ContactMessage) -> Result<ContactReceipt>;
}

/// Contact gateway that POSTs JSON to an HTTP endpoint.
#[derive(Debug, Clone)]
pub struct HttpContactGateway {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpContactGateway {
    /// Create a gateway targeting the given endpoint URL.
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// The endpoint URL this gateway targets.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ContactGateway for HttpContactGateway {
    fn name(&self) -> &'static str {
        "http"
    }

    async fn deliver(&self, message: &ContactMessage) -> Result<ContactReceipt> {
        debug!("Posting contact message to {}", self.endpoint);
        let response = self
            .client
            .post(&self.endpoint)
            .json(message)
            .send()
            .await?
            .error_for_status()?;

        let receipt: ContactReceipt = response.json().await?;
        info!(ok = receipt.ok, "Contact endpoint responded");
        Ok(receipt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    /// Gateway double that records the last message and returns a canned receipt.
    #[derive(Debug)]
    struct FixedGateway {
        receipt: ContactReceipt,
        sent: std::sync::Mutex<Vec<ContactMessage>>,
    }

    impl FixedGateway {
        fn accepting(ticket: &str) -> Self {
            Self {
                receipt: ContactReceipt {
                    ok: true,
                    ticket_id: Some(ticket.to_string()),
                },
                sent: std::sync::Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl ContactGateway for FixedGateway {
        fn name(&self) -> &'static str {
            "fixed"
        }

        async fn deliver(&self, message: &ContactMessage) -> Result<ContactReceipt> {
            self.sent.lock().unwrap().push(message.clone());
            Ok(self.receipt.clone())
        }
    }

    fn sample_message() -> ContactMessage {
        ContactMessage {
            name: "Rina".to_string(),
            email: "rina@example.com".to_string(),
            phone: String::new(),
            message: "I need help getting a fake profile taken down.".to_string(),
        }
    }

    #[test]
    fn test_message_wire_shape() {
        let json = serde_json::to_value(sample_message()).unwrap();
        assert_eq!(json["name"], "Rina");
        assert_eq!(json["email"], "rina@example.com");
        assert_eq!(json["phone"], "");
        assert!(json["message"].as_str().unwrap().contains("fake profile"));
    }

    #[test]
    fn test_receipt_parses_camel_case_ticket() {
        let receipt: ContactReceipt =
            serde_json::from_str(r#"{"ok": true, "ticketId": "T-8812"}"#).unwrap();
        assert!(receipt.ok);
        assert_eq!(receipt.ticket_id, Some("T-8812".to_string()));
    }

    #[test]
    fn test_receipt_ticket_optional() {
        let receipt: ContactReceipt = serde_json::from_str(r#"{"ok": false}"#).unwrap();
        assert!(!receipt.ok);
        assert!(receipt.ticket_id.is_none());
    }

    #[tokio::test]
    async fn test_gateway_trait_delivery() {
        let gateway = FixedGateway::accepting("T-100");
        let receipt = gateway.deliver(&sample_message()).await.unwrap();

        assert!(receipt.ok);
        assert_eq!(receipt.ticket_id, Some("T-100".to_string()));
        assert_eq!(gateway.sent.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_http_gateway_unreachable_is_network_error() {
        // Nothing listens on this port; the request fails at connect time.
        let gateway = HttpContactGateway::new("http://127.0.0.1:9/contact");
        let result = gateway.deliver(&sample_message()).await;

        match result {
            Err(Error::Network(_)) => {}
            other => panic!("expected network error, got {other:?}"),
        }
    }

    #[test]
    fn test_http_gateway_endpoint_accessor() {
        let gateway = HttpContactGateway::new("https://cybershield-bd.example/api/contact");
        assert_eq!(gateway.name(), "http");
        assert_eq!(
            gateway.endpoint(),
            "https://cybershield-bd.example/api/contact"
        );
    }
}
