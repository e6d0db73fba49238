//! Contact form state and submission flow

use super::transport::FormTransport;
use crate::config::ContactConfig;
use crate::error::ContactError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::info;

/// Address shown when a submission cannot be delivered
pub const SUPPORT_EMAIL: &str = "vedanco.official@gmail.com";

/// Subject options of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Subject {
    #[default]
    GeneralInquiry,
    BusinessPartnership,
    MediaPress,
    Careers,
    ItAiSolutions,
    RealEstateInteriors,
}

impl Subject {
    pub const ALL: [Subject; 6] = [
        Subject::GeneralInquiry,
        Subject::BusinessPartnership,
        Subject::MediaPress,
        Subject::Careers,
        Subject::ItAiSolutions,
        Subject::RealEstateInteriors,
    ];

    /// Label shown in the select, also the submitted value
    pub fn label(&self) -> &'static str {
        match self {
            Subject::GeneralInquiry => "General Inquiry",
            Subject::BusinessPartnership => "Business Partnership",
            Subject::MediaPress => "Media & Press",
            Subject::Careers => "Careers",
            Subject::ItAiSolutions => "IT & AI Solutions",
            Subject::RealEstateInteriors => "Real Estate & Interiors",
        }
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Subject {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Subject::ALL
            .into_iter()
            .find(|subject| subject.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                let options: Vec<_> = Subject::ALL.iter().map(Subject::label).collect();
                format!("Unknown subject '{}'. Options: {}", s, options.join(", "))
            })
    }
}

/// Values entered into the form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub subject: Subject,
    pub message: String,
}

impl ContactForm {
    /// Labels of required fields left blank
    pub fn missing_required(&self) -> Vec<&'static str> {
        [
            ("First Name", &self.first_name),
            ("Email", &self.email),
            ("Message", &self.message),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(label, _)| label)
        .collect()
    }

    /// Wire fields in submission order
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("FirstName", self.first_name.clone()),
            ("LastName", self.last_name.clone()),
            ("Email", self.email.clone()),
            ("Phone", self.phone.clone()),
            ("Subject", self.subject.label().to_string()),
            ("Message", self.message.clone()),
        ]
    }
}

/// Submission status shown under the form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error(String),
}

/// A regional office listed beside the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Office {
    pub city: &'static str,
    pub country: &'static str,
    pub address: Option<&'static str>,
    pub phone: Option<&'static str>,
    pub email: Option<&'static str>,
    /// Upcoming offices are listed without contact details
    pub active: bool,
}

pub const OFFICES: &[Office] = &[
    Office {
        city: "Gandhinagar",
        country: "India",
        address: Some("InfoCity, Super Mall 1, Office No. 421M, Gandhinagar, Gujarat \u{2013} India"),
        phone: Some("+91 6353 097 642"),
        email: Some(SUPPORT_EMAIL),
        active: true,
    },
    Office {
        city: "Dubai",
        country: "UAE",
        address: None,
        phone: None,
        email: None,
        active: false,
    },
    Office {
        city: "London",
        country: "UK",
        address: None,
        phone: None,
        email: None,
        active: false,
    },
    Office {
        city: "New York",
        country: "USA",
        address: None,
        phone: None,
        email: None,
        active: false,
    },
];

/// Drives the form through a submission
pub struct ContactController {
    endpoint: Option<String>,
    transport: Box<dyn FormTransport>,
    form: ContactForm,
    status: FormStatus,
}

impl ContactController {
    pub fn new(config: &ContactConfig, transport: Box<dyn FormTransport>) -> Self {
        Self {
            endpoint: config.endpoint.clone().filter(|e| !e.trim().is_empty()),
            transport,
            form: ContactForm::default(),
            status: FormStatus::Idle,
        }
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut ContactForm {
        &mut self.form
    }

    pub fn status(&self) -> &FormStatus {
        &self.status
    }

    /// Submit the current form.
    ///
    /// The endpoint is checked before the fields, so a misconfigured site
    /// reports that even for an empty form. On success every field is
    /// cleared; on failure the entered values are kept.
    pub async fn submit(&mut self) -> Result<(), ContactError> {
        self.status = FormStatus::Submitting;

        let result = self.deliver().await;
        match &result {
            Ok(()) => {
                info!("Contact form submitted");
                self.form = ContactForm::default();
                self.status = FormStatus::Success;
            }
            Err(e) => self.status = FormStatus::Error(e.to_string()),
        }
        result
    }

    async fn deliver(&self) -> Result<(), ContactError> {
        let endpoint = self.endpoint.as_deref().ok_or(ContactError::MissingEndpoint)?;

        let missing = self.form.missing_required();
        if !missing.is_empty() {
            return Err(ContactError::Validation { missing });
        }

        self.transport
            .post_form(endpoint, &self.form.fields())
            .await
            .map_err(|source| ContactError::Network {
                support_email: SUPPORT_EMAIL,
                source,
            })
    }

    /// "Send another message": back to the empty form
    pub fn reset_status(&mut self) {
        self.status = FormStatus::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TransportError;
    use async_trait::async_trait;
    use std::io;
    use std::sync::{Arc, Mutex};

    type Calls = Arc<Mutex<Vec<(String, Vec<(&'static str, String)>)>>>;

    #[derive(Clone, Default)]
    struct RecordingTransport {
        calls: Calls,
        fail: bool,
    }

    #[async_trait]
    impl FormTransport for RecordingTransport {
        async fn post_form(&self, endpoint: &str, fields: &[(&'static str, String)]) -> Result<(), TransportError> {
            self.calls
                .lock()
                .unwrap()
                .push((endpoint.to_string(), fields.to_vec()));
            if self.fail {
                Err(io::Error::new(io::ErrorKind::ConnectionReset, "connection reset").into())
            } else {
                Ok(())
            }
        }
    }

    fn controller(endpoint: Option<&str>, transport: &RecordingTransport) -> ContactController {
        let config = ContactConfig {
            endpoint: endpoint.map(str::to_string),
        };
        ContactController::new(&config, Box::new(transport.clone()))
    }

    fn fill(form: &mut ContactForm) {
        form.first_name = "Asha".to_string();
        form.email = "asha@example.com".to_string();
        form.subject = Subject::Careers;
        form.message = "Hello".to_string();
    }

    #[tokio::test]
    async fn test_empty_message_is_rejected_without_network() {
        let transport = RecordingTransport::default();
        let mut contact = controller(Some("https://forms.test/exec"), &transport);
        fill(contact.form_mut());
        contact.form_mut().message = "   ".to_string();

        let err = contact.submit().await.unwrap_err();

        assert!(matches!(err, ContactError::Validation { ref missing } if missing == &["Message"]));
        assert_eq!(
            contact.status(),
            &FormStatus::Error("Please fill in all required fields marked with *".to_string())
        );
        assert!(transport.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_success_clears_fields() {
        let transport = RecordingTransport::default();
        let mut contact = controller(Some("https://forms.test/exec"), &transport);
        fill(contact.form_mut());

        contact.submit().await.unwrap();

        assert_eq!(contact.status(), &FormStatus::Success);
        assert_eq!(contact.form(), &ContactForm::default());

        let calls = transport.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        let (endpoint, fields) = &calls[0];
        assert_eq!(endpoint, "https://forms.test/exec");
        let names: Vec<_> = fields.iter().map(|(name, _)| *name).collect();
        assert_eq!(names, ["FirstName", "LastName", "Email", "Phone", "Subject", "Message"]);
        assert_eq!(fields[4].1, "Careers");
    }

    #[tokio::test]
    async fn test_missing_endpoint_is_checked_first() {
        let transport = RecordingTransport::default();
        let mut contact = controller(None, &transport);

        let err = contact.submit().await.unwrap_err();

        assert!(matches!(err, ContactError::MissingEndpoint));
        assert!(transport.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_network_failure_keeps_fields() {
        let transport = RecordingTransport {
            fail: true,
            ..Default::default()
        };
        let mut contact = controller(Some("https://forms.test/exec"), &transport);
        fill(contact.form_mut());

        let err = contact.submit().await.unwrap_err();

        assert!(matches!(
            err,
            ContactError::Network { source: TransportError::Io(ref e), .. }
                if e.kind() == io::ErrorKind::ConnectionReset
        ));
        assert_eq!(contact.form().first_name, "Asha");
        match contact.status() {
            FormStatus::Error(message) => assert!(message.contains(SUPPORT_EMAIL)),
            other => panic!("unexpected status {:?}", other),
        }

        contact.reset_status();
        assert_eq!(contact.status(), &FormStatus::Idle);
    }

    #[test]
    fn test_subject_parsing() {
        assert_eq!("media & press".parse::<Subject>(), Ok(Subject::MediaPress));
        assert!("Sales".parse::<Subject>().is_err());
        assert_eq!(Subject::default().label(), "General Inquiry");
    }

    #[test]
    fn test_only_first_office_is_active() {
        let active: Vec<_> = OFFICES.iter().filter(|o| o.active).map(|o| o.city).collect();
        assert_eq!(active, ["Gandhinagar"]);
    }
}
