//! Contact form submission
//!
//! The form state, its validation, and the transport that posts it to the
//! configured form-processing endpoint.

pub mod form;
pub mod transport;

pub use form::{ContactController, ContactForm, FormStatus, Office, Subject, OFFICES, SUPPORT_EMAIL};
pub use transport::{FormTransport, HttpFormTransport};
