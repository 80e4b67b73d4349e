use folio_core_contact_contracts::{ContactFeatureService, ContactSubmitError, ContactSubmitOutcome};
use folio_email_contracts::{Email, EmailBody, EmailService};
use folio_models::{
    contact::{
        ContactForm, ContactMessage, ContactMessageAuthor, ContactMessageAuthorName,
        ContactMessageContent, ContactMessageSubject,
    },
    email_address::{EmailAddress, EmailAddressWithName},
};
use folio_templates_contracts::{ContactMessageTemplate, TemplateService};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct ContactFeatureServiceImpl<Email, Template> {
    email: Email,
    template: Template,
    config: ContactFeatureConfig,
}

#[derive(Debug, Clone)]
pub struct ContactFeatureConfig {
    pub recipient: EmailAddressWithName,
}

impl<Email, Template> ContactFeatureServiceImpl<Email, Template> {
    pub fn new(email: Email, template: Template, config: ContactFeatureConfig) -> Self {
        Self {
            email,
            template,
            config,
        }
    }
}

impl<EmailS, Template> ContactFeatureService for ContactFeatureServiceImpl<EmailS, Template>
where
    EmailS: EmailService,
    Template: TemplateService,
{
    async fn submit(
        &self,
        form: ContactForm,
    ) -> Result<ContactSubmitOutcome, ContactSubmitError> {
        // Checked before validation: bots that fill the hidden field get a
        // success response and the payload is dropped.
        if form
            .website
            .as_deref()
            .is_some_and(|website| !website.trim().is_empty())
        {
            debug!("honeypot tripped, discarding submission");
            return Ok(ContactSubmitOutcome::Discarded);
        }

        let message = validate(form)?;
        let text = text_body(&message);

        let ContactMessage {
            author: ContactMessageAuthor { name, email },
            subject,
            content,
        } = message;

        let html = self.template.render(&ContactMessageTemplate {
            name: (*name).clone(),
            email: email.as_str().into(),
            subject: (*subject).clone(),
            message: (*content).clone(),
        })?;

        let email = Email {
            recipient: self.config.recipient.clone(),
            subject: format!("[Contact Form] {}", *subject),
            body: EmailBody::Alternative { text, html },
            reply_to: Some(email.with_name((*name).clone())),
        };

        if !self.email.send(email).await? {
            return Err(ContactSubmitError::Send);
        }

        Ok(ContactSubmitOutcome::Relayed)
    }
}

/// Applies the validation rules in order, first failing rule wins: required
/// fields, email syntax, field lengths.
fn validate(form: ContactForm) -> Result<ContactMessage, ContactSubmitError> {
    let name = form.name.trim();
    let email = form.email.trim();
    let subject = form.subject.trim();
    let message = form.message.trim();

    if name.is_empty() || email.is_empty() || subject.is_empty() || message.is_empty() {
        return Err(ContactSubmitError::MissingFields);
    }

    let email = email
        .parse::<EmailAddress>()
        .map_err(|_| ContactSubmitError::InvalidEmail)?;

    let name = ContactMessageAuthorName::try_from(name.to_owned())
        .map_err(|_| ContactSubmitError::FieldTooLong)?;
    let subject = ContactMessageSubject::try_from(subject.to_owned())
        .map_err(|_| ContactSubmitError::FieldTooLong)?;
    let content = ContactMessageContent::try_from(message.to_owned())
        .map_err(|_| ContactSubmitError::FieldTooLong)?;

    Ok(ContactMessage {
        author: ContactMessageAuthor { name, email },
        subject,
        content,
    })
}

fn text_body(message: &ContactMessage) -> String {
    format!(
        "Name: {}\nEmail: {}\nSubject: {}\nMessage:\n{}",
        *message.author.name, message.author.email, *message.subject, *message.content
    )
}

#[cfg(test)]
mod tests {
    use folio_email_contracts::MockEmailService;
    use folio_templates_contracts::MockTemplateService;
    use folio_utils::assert_matches;

    use super::*;

    #[tokio::test]
    async fn ok() {
        // Arrange
        let email = MockEmailService::new().with_send(expected_email(), true);
        let template = MockTemplateService::new()
            .with_render(expected_template(), "<rendered html>".into());

        let sut = ContactFeatureServiceImpl {
            email,
            template,
            config: config(),
        };

        // Act
        let result = sut.submit(form()).await;

        // Assert
        assert_matches!(result, Ok(ContactSubmitOutcome::Relayed));
    }

    #[tokio::test]
    async fn ok_trims_fields() {
        // Arrange
        let email = MockEmailService::new().with_send(expected_email(), true);
        let template = MockTemplateService::new()
            .with_render(expected_template(), "<rendered html>".into());

        let sut = ContactFeatureServiceImpl {
            email,
            template,
            config: config(),
        };

        let form = ContactForm {
            name: "  Ava ".into(),
            email: " ava@example.com ".into(),
            subject: " Hi\t".into(),
            message: "\nHello there\n".into(),
            website: None,
        };

        // Act
        let result = sut.submit(form).await;

        // Assert
        assert_matches!(result, Ok(ContactSubmitOutcome::Relayed));
    }

    #[tokio::test]
    async fn honeypot_discards_silently() {
        // Arrange
        let email = MockEmailService::new();
        let template = MockTemplateService::new();

        let sut = ContactFeatureServiceImpl {
            email,
            template,
            config: config(),
        };

        let form = ContactForm {
            name: String::new(),
            email: "not-an-email".into(),
            website: Some("https://spam.example".into()),
            ..form()
        };

        // Act
        let result = sut.submit(form).await;

        // Assert
        assert_matches!(result, Ok(ContactSubmitOutcome::Discarded));
    }

    #[tokio::test]
    async fn missing_fields() {
        for missing in ["name", "email", "subject", "message"] {
            // Arrange
            let email = MockEmailService::new();
            let template = MockTemplateService::new();

            let sut = ContactFeatureServiceImpl {
                email,
                template,
                config: config(),
            };

            let mut form = form();
            match missing {
                "name" => form.name = String::new(),
                "email" => form.email = "   ".into(),
                "subject" => form.subject = String::new(),
                "message" => form.message = "\n".into(),
                _ => unreachable!(),
            }

            // Act
            let result = sut.submit(form).await;

            // Assert
            assert_matches!(result, Err(ContactSubmitError::MissingFields));
        }
    }

    #[tokio::test]
    async fn invalid_email() {
        // Arrange
        let email = MockEmailService::new();
        let template = MockTemplateService::new();

        let sut = ContactFeatureServiceImpl {
            email,
            template,
            config: config(),
        };

        let form = ContactForm {
            email: "not-an-email".into(),
            ..form()
        };

        // Act
        let result = sut.submit(form).await;

        // Assert
        assert_matches!(result, Err(ContactSubmitError::InvalidEmail));
    }

    #[tokio::test]
    async fn field_too_long() {
        for form in [
            ContactForm {
                name: "x".repeat(101),
                ..form()
            },
            ContactForm {
                subject: "x".repeat(201),
                ..form()
            },
            ContactForm {
                message: "x".repeat(5001),
                ..form()
            },
        ] {
            // Arrange
            let email = MockEmailService::new();
            let template = MockTemplateService::new();

            let sut = ContactFeatureServiceImpl {
                email,
                template,
                config: config(),
            };

            // Act
            let result = sut.submit(form).await;

            // Assert
            assert_matches!(result, Err(ContactSubmitError::FieldTooLong));
        }
    }

    #[tokio::test]
    async fn missing_fields_checked_before_email_syntax() {
        // Arrange
        let email = MockEmailService::new();
        let template = MockTemplateService::new();

        let sut = ContactFeatureServiceImpl {
            email,
            template,
            config: config(),
        };

        let form = ContactForm {
            name: String::new(),
            email: "not-an-email".into(),
            ..form()
        };

        // Act
        let result = sut.submit(form).await;

        // Assert
        assert_matches!(result, Err(ContactSubmitError::MissingFields));
    }

    #[tokio::test]
    async fn email_syntax_checked_before_lengths() {
        // Arrange
        let email = MockEmailService::new();
        let template = MockTemplateService::new();

        let sut = ContactFeatureServiceImpl {
            email,
            template,
            config: config(),
        };

        let form = ContactForm {
            email: "not-an-email".into(),
            message: "x".repeat(5001),
            ..form()
        };

        // Act
        let result = sut.submit(form).await;

        // Assert
        assert_matches!(result, Err(ContactSubmitError::InvalidEmail));
    }

    #[tokio::test]
    async fn error() {
        // Arrange
        let email = MockEmailService::new().with_send(expected_email(), false);
        let template = MockTemplateService::new()
            .with_render(expected_template(), "<rendered html>".into());

        let sut = ContactFeatureServiceImpl {
            email,
            template,
            config: config(),
        };

        // Act
        let result = sut.submit(form()).await;

        // Assert
        assert_matches!(result, Err(ContactSubmitError::Send));
    }

    fn config() -> ContactFeatureConfig {
        ContactFeatureConfig {
            recipient: "owner@example.com".parse().unwrap(),
        }
    }

    fn form() -> ContactForm {
        ContactForm {
            name: "Ava".into(),
            email: "ava@example.com".into(),
            subject: "Hi".into(),
            message: "Hello there".into(),
            website: None,
        }
    }

    fn expected_template() -> ContactMessageTemplate {
        ContactMessageTemplate {
            name: "Ava".into(),
            email: "ava@example.com".into(),
            subject: "Hi".into(),
            message: "Hello there".into(),
        }
    }

    fn expected_email() -> Email {
        Email {
            recipient: "owner@example.com".parse().unwrap(),
            subject: "[Contact Form] Hi".into(),
            body: EmailBody::Alternative {
                text: "Name: Ava\nEmail: ava@example.com\nSubject: Hi\nMessage:\nHello there"
                    .into(),
                html: "<rendered html>".into(),
            },
            reply_to: Some("Ava <ava@example.com>".parse().unwrap()),
        }
    }
}
