use folio_models::contact::ContactForm;
use serde::Deserialize;

/// Contact form payload as it arrives on the wire. Absent fields map to
/// empty strings so that the feature service reports them as missing
/// instead of the deserializer rejecting the request.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ApiContactForm {
    /// Full name of the sender
    pub name: String,
    /// Email address of the sender
    pub email: String,
    /// Subject of the message
    pub subject: String,
    /// Content of the message
    pub message: String,
    /// Honeypot field, must stay empty
    pub website: Option<String>,
}

impl From<ApiContactForm> for ContactForm {
    fn from(value: ApiContactForm) -> Self {
        Self {
            name: value.name,
            email: value.email,
            subject: value.subject,
            message: value.message,
            website: value.website,
        }
    }
}
