use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const SUCCESS_MESSAGE: &str =
    "Your message has been sent successfully! I will get back to you soon.";
pub const FAILURE_MESSAGE: &str =
    "An error occurred while sending your message. Please try again.";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("invalid email address: {0}")]
    InvalidEmail(String),
    #[error("relay is not configured: {0} is unset")]
    Unconfigured(&'static str),
    #[error("relay request failed: {0}")]
    Transport(String),
    #[error("relay rejected the message ({status}): {body}")]
    Rejected { status: u16, body: String },
}

impl ContactForm {
    pub fn new(name: String, email: String, subject: String, message: String) -> Self {
        Self {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            subject: subject.trim().to_string(),
            message: message.trim().to_string(),
        }
    }

    pub fn validate(&self) -> Result<(), ContactError> {
        let fields = [
            ("name", &self.name),
            ("email", &self.email),
            ("subject", &self.subject),
            ("message", &self.message),
        ];
        if let Some((field, _)) = fields.iter().find(|(_, v)| v.trim().is_empty()) {
            return Err(ContactError::MissingField(*field));
        }
        if !is_plausible_email(&self.email) {
            return Err(ContactError::InvalidEmail(self.email.clone()));
        }
        Ok(())
    }
}

fn is_plausible_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !email.contains(char::is_whitespace)
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
}

/// What the form shows after a send attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub success: bool,
    pub message: &'static str,
}

impl SubmitOutcome {
    pub fn from_result<T, E>(res: &Result<T, E>) -> Self {
        match res {
            Ok(_) => Self {
                success: true,
                message: SUCCESS_MESSAGE,
            },
            Err(_) => Self {
                success: false,
                message: FAILURE_MESSAGE,
            },
        }
    }
}

/// Fields handed to the email template.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TemplateParams {
    pub from_name: String,
    pub from_email: String,
    pub subject: String,
    pub message: String,
    pub to_name: String,
    pub reply_to: String,
}

impl TemplateParams {
    pub fn new(form: &ContactForm, to_name: &str) -> Self {
        Self {
            from_name: form.name.clone(),
            from_email: form.email.clone(),
            subject: form.subject.clone(),
            message: form.message.clone(),
            to_name: to_name.to_string(),
            reply_to: form.email.clone(),
        }
    }
}

/// Request body for the EmailJS send endpoint.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RelayPayload {
    pub service_id: String,
    pub template_id: String,
    pub user_id: String,
    #[serde(rename = "accessToken", skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
    pub template_params: TemplateParams,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayConfig {
    pub endpoint: String,
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    pub private_key: Option<String>,
    pub recipient_name: String,
}

pub const DEFAULT_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

impl RelayConfig {
    /// Builds the config from a variable lookup so tests need not touch the
    /// process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ContactError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let required = |key: &'static str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .ok_or(ContactError::Unconfigured(key))
        };
        Ok(Self {
            endpoint: lookup("EMAILJS_ENDPOINT").unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            service_id: required("EMAILJS_SERVICE_ID")?,
            template_id: required("EMAILJS_TEMPLATE_ID")?,
            public_key: required("EMAILJS_PUBLIC_KEY")?,
            private_key: lookup("EMAILJS_PRIVATE_KEY").filter(|v| !v.trim().is_empty()),
            recipient_name: lookup("CONTACT_RECIPIENT_NAME")
                .unwrap_or_else(|| crate::content::OWNER_NAME.to_string()),
        })
    }

    #[cfg(feature = "ssr")]
    pub fn from_env() -> Result<Self, ContactError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn payload(&self, form: &ContactForm) -> RelayPayload {
        RelayPayload {
            service_id: self.service_id.clone(),
            template_id: self.template_id.clone(),
            user_id: self.public_key.clone(),
            access_token: self.private_key.clone(),
            template_params: TemplateParams::new(form, &self.recipient_name),
        }
    }
}

/// Validates and forwards one message. No retries.
#[cfg(feature = "ssr")]
pub async fn deliver(client: &reqwest::Client, form: &ContactForm) -> Result<(), ContactError> {
    form.validate()?;
    let config = RelayConfig::from_env()?;
    let payload = config.payload(form);

    tracing::info!(
        service = %config.service_id,
        template = %config.template_id,
        "relaying contact message from {}",
        form.email
    );
    let response = client
        .post(&config.endpoint)
        .json(&payload)
        .send()
        .await
        .map_err(|e| ContactError::Transport(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "could not read response body".to_string());
        tracing::error!("email relay rejected message: {} {}", status, body);
        return Err(ContactError::Rejected {
            status: status.as_u16(),
            body,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn filled_form() -> ContactForm {
        ContactForm::new(
            " Ada ".to_string(),
            "ada@example.com".to_string(),
            "Hello".to_string(),
            "Let's build something.".to_string(),
        )
    }

    fn env(pairs: &[(&'static str, &str)]) -> HashMap<&'static str, String> {
        pairs.iter().map(|(k, v)| (*k, v.to_string())).collect()
    }

    #[test]
    fn test_valid_form_passes() {
        let form = filled_form();
        assert_eq!(form.name, "Ada");
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_missing_fields_reported_in_order() {
        let mut form = filled_form();
        form.subject = "   ".to_string();
        assert_eq!(form.validate(), Err(ContactError::MissingField("subject")));

        let empty = ContactForm::default();
        assert_eq!(empty.validate(), Err(ContactError::MissingField("name")));
    }

    #[test]
    fn test_email_shape() {
        let mut form = filled_form();
        for bad in ["ada", "@example.com", "ada@example", "ada@.com", "a da@example.com"] {
            form.email = bad.to_string();
            assert!(
                matches!(form.validate(), Err(ContactError::InvalidEmail(_))),
                "{bad} should be rejected"
            );
        }
        form.email = "ada.lovelace@mail.example.org".to_string();
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_config_requires_ids() {
        let vars = env(&[("EMAILJS_SERVICE_ID", "svc"), ("EMAILJS_TEMPLATE_ID", "tpl")]);
        let res = RelayConfig::from_lookup(|k| vars.get(k).cloned());
        assert_eq!(res, Err(ContactError::Unconfigured("EMAILJS_PUBLIC_KEY")));
    }

    #[test]
    fn test_payload_shape() {
        let vars = env(&[
            ("EMAILJS_SERVICE_ID", "svc"),
            ("EMAILJS_TEMPLATE_ID", "tpl"),
            ("EMAILJS_PUBLIC_KEY", "pub"),
            ("CONTACT_RECIPIENT_NAME", "Mai"),
        ]);
        let config = RelayConfig::from_lookup(|k| vars.get(k).cloned()).unwrap();
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);

        let json = serde_json::to_value(config.payload(&filled_form())).unwrap();
        assert_eq!(json["service_id"], "svc");
        assert_eq!(json["user_id"], "pub");
        assert!(json.get("accessToken").is_none());
        assert_eq!(json["template_params"]["from_name"], "Ada");
        assert_eq!(json["template_params"]["to_name"], "Mai");
        assert_eq!(json["template_params"]["reply_to"], "ada@example.com");
    }

    #[test]
    fn test_private_key_sent_as_access_token() {
        let vars = env(&[
            ("EMAILJS_SERVICE_ID", "svc"),
            ("EMAILJS_TEMPLATE_ID", "tpl"),
            ("EMAILJS_PUBLIC_KEY", "pub"),
            ("EMAILJS_PRIVATE_KEY", "secret"),
        ]);
        let config = RelayConfig::from_lookup(|k| vars.get(k).cloned()).unwrap();
        let json = serde_json::to_value(config.payload(&filled_form())).unwrap();
        assert_eq!(json["accessToken"], "secret");
        assert_eq!(json["template_params"]["to_name"], crate::content::OWNER_NAME);
    }

    #[test]
    fn test_outcome_messages() {
        let ok: Result<(), ContactError> = Ok(());
        let outcome = SubmitOutcome::from_result(&ok);
        assert!(outcome.success);
        assert_eq!(outcome.message, SUCCESS_MESSAGE);

        let err: Result<(), ContactError> = Err(ContactError::Transport("timeout".to_string()));
        let outcome = SubmitOutcome::from_result(&err);
        assert!(!outcome.success);
        assert_eq!(outcome.message, FAILURE_MESSAGE);
    }
}
