use std::future::Future;

use folio_models::contact::ContactForm;
use thiserror::Error;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactFeatureService: Send + Sync + 'static {
    /// Validates the given contact form submission and relays it to the
    /// configured recipient.
    ///
    /// A submission that trips the honeypot is discarded without any side
    /// effect and without signaling the detection to the sender.
    fn submit(
        &self,
        form: ContactForm,
    ) -> impl Future<Output = Result<ContactSubmitOutcome, ContactSubmitError>> + Send;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactSubmitOutcome {
    /// The message passed validation and was handed to the mail transport.
    Relayed,
    /// The honeypot was tripped. The caller is told the submission
    /// succeeded, but nothing was sent.
    Discarded,
}

#[derive(Debug, Error)]
pub enum ContactSubmitError {
    #[error("All fields are required.")]
    MissingFields,
    #[error("Invalid email address.")]
    InvalidEmail,
    #[error("Input too long.")]
    FieldTooLong,
    #[error("Failed to send message.")]
    Send,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[cfg(feature = "mock")]
impl MockContactFeatureService {
    pub fn with_submit(
        mut self,
        form: ContactForm,
        result: Result<ContactSubmitOutcome, ContactSubmitError>,
    ) -> Self {
        self.expect_submit()
            .once()
            .with(mockall::predicate::eq(form))
            .return_once(move |_| Box::pin(std::future::ready(result)));
        self
    }
}
