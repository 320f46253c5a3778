use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::{CONTACT_ACCESS_KEY, CONTACT_ENDPOINT};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("Missing or invalid {0}")]
    Incomplete(&'static str),
    #[error("Couldn't reach the form relay: {0}")]
    Network(String),
    #[error("Form relay rejected the message: {0}")]
    Rejected(String),
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ContactPayload {
    pub access_key: String,
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RelayResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

impl RelayResponse {
    pub fn into_result(self) -> Result<(), ContactError> {
        if self.success {
            Ok(())
        } else {
            Err(ContactError::Rejected(
                self.message.unwrap_or_else(|| "no reason given".to_string()),
            ))
        }
    }
}

/// What the user is told once a submission settles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Sent,
    Failed,
}

impl Notice {
    pub fn text(self) -> &'static str {
        match self {
            Notice::Sent => "Message sent! I'll get back to you soon.",
            Notice::Failed => "Something went wrong. Please try again.",
        }
    }

    pub fn is_error(self) -> bool {
        matches!(self, Notice::Failed)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn validate(&self) -> Result<(), ContactError> {
        if self.name.trim().is_empty() {
            return Err(ContactError::Incomplete("name"));
        }
        if !is_plausible_email(self.email.trim()) {
            return Err(ContactError::Incomplete("email"));
        }
        if self.message.trim().is_empty() {
            return Err(ContactError::Incomplete("message"));
        }
        Ok(())
    }

    pub fn payload(&self, access_key: &str) -> Result<ContactPayload, ContactError> {
        self.validate()?;
        Ok(ContactPayload {
            access_key: access_key.to_string(),
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            message: self.message.trim().to_string(),
        })
    }

    /// Applies a finished submission: success clears every field, failure keeps them.
    pub fn settle(&mut self, outcome: &Result<(), ContactError>) -> Notice {
        match outcome {
            Ok(()) => {
                *self = Self::default();
                Notice::Sent
            }
            Err(_) => Notice::Failed,
        }
    }
}

fn is_plausible_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
        None => false,
    }
}

/// Sends the payload once. No retry and no client-side timeout.
pub async fn send(payload: &ContactPayload) -> Result<(), ContactError> {
    let response = reqwest::Client::new()
        .post(CONTACT_ENDPOINT)
        .header("Accept", "application/json")
        .json(payload)
        .send()
        .await
        .map_err(|e| ContactError::Network(e.to_string()))?;
    let body = response
        .json::<RelayResponse>()
        .await
        .map_err(|e| ContactError::Network(e.to_string()))?;
    body.into_result()
}

/// Validates `form` and sends it to the relay.
pub async fn submit(form: &ContactForm) -> Result<(), ContactError> {
    let payload = form.payload(CONTACT_ACCESS_KEY)?;
    let outcome = send(&payload).await;
    match &outcome {
        Ok(()) => log::info!("contact message delivered"),
        Err(e) => log::warn!("contact submission failed: {e}"),
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            message: "Hello there".to_string(),
        }
    }

    fn response(json: &str) -> Result<(), ContactError> {
        serde_json::from_str::<RelayResponse>(json)
            .expect("response should parse")
            .into_result()
    }

    #[test]
    fn test_success_clears_fields() {
        let mut form = filled();
        let notice = form.settle(&response(r#"{"success": true, "message": "Email sent"}"#));
        assert_eq!(notice, Notice::Sent);
        assert!(!notice.is_error());
        assert_eq!(form, ContactForm::default());
        assert_eq!(form.name, "");
        assert_eq!(form.email, "");
        assert_eq!(form.message, "");
    }

    #[test]
    fn test_rejection_keeps_fields() {
        let mut form = filled();
        let outcome = response(r#"{"success": false, "message": "Invalid access key"}"#);
        assert_eq!(
            outcome,
            Err(ContactError::Rejected("Invalid access key".to_string()))
        );
        let notice = form.settle(&outcome);
        assert_eq!(notice, Notice::Failed);
        assert!(notice.is_error());
        assert_eq!(form, filled());
    }

    #[test]
    fn test_network_error_keeps_fields() {
        let mut form = filled();
        let notice = form.settle(&Err(ContactError::Network("connection reset".to_string())));
        assert_eq!(notice, Notice::Failed);
        assert_eq!(form, filled());
    }

    #[test]
    fn test_rejection_without_message() {
        assert_eq!(
            response(r#"{"success": false}"#),
            Err(ContactError::Rejected("no reason given".to_string()))
        );
    }

    #[test]
    fn test_payload_shape() {
        let mut form = filled();
        form.name = "  Ada  ".to_string();
        let payload = form.payload("key-123").unwrap();
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "access_key": "key-123",
                "name": "Ada",
                "email": "ada@example.com",
                "message": "Hello there",
            })
        );
    }

    #[test]
    fn test_invalid_form_is_not_sent() {
        let mut form = filled();
        form.email = "not-an-address".to_string();
        let before = form.clone();

        // fails on validation, before any request is built
        let outcome = futures::executor::block_on(submit(&form));
        assert_eq!(outcome, Err(ContactError::Incomplete("email")));

        let notice = form.settle(&outcome);
        assert_eq!(notice, Notice::Failed);
        assert_eq!(form, before);
    }

    #[test]
    fn test_validation() {
        let mut form = filled();
        form.name = "   ".to_string();
        assert_eq!(form.validate(), Err(ContactError::Incomplete("name")));

        let mut form = filled();
        for bad in ["", "ada", "@example.com", "ada@", "a@b@c"] {
            form.email = bad.to_string();
            assert_eq!(form.validate(), Err(ContactError::Incomplete("email")), "{bad}");
        }

        let mut form = filled();
        form.message = "\n".to_string();
        assert_eq!(form.payload("k"), Err(ContactError::Incomplete("message")));

        assert!(filled().validate().is_ok());
    }
}
