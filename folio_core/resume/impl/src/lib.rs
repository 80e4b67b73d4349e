use folio_core_resume_contracts::{ResumeFeatureService, ResumeRequestDownloadError};
use folio_email_contracts::{Email, EmailBody, EmailService};
use folio_models::email_address::EmailAddressWithName;
use folio_shared_contracts::time::TimeService;
use url::Url;

#[derive(Debug, Clone)]
pub struct ResumeFeatureServiceImpl<Time, Email> {
    time: Time,
    email: Email,
    config: ResumeFeatureConfig,
}

#[derive(Debug, Clone)]
pub struct ResumeFeatureConfig {
    pub recipient: EmailAddressWithName,
    pub filename: String,
}

impl<Time, Email> ResumeFeatureServiceImpl<Time, Email> {
    pub fn new(time: Time, email: Email, config: ResumeFeatureConfig) -> Self {
        Self {
            time,
            email,
            config,
        }
    }
}

impl<Time, EmailS> ResumeFeatureService for ResumeFeatureServiceImpl<Time, EmailS>
where
    Time: TimeService,
    EmailS: EmailService,
{
    async fn request_download(&self, base_url: Url) -> Result<Url, ResumeRequestDownloadError> {
        let now = self.time.now();

        let email = Email {
            recipient: self.config.recipient.clone(),
            subject: "[Resume] Download requested".into(),
            body: EmailBody::Text(format!(
                "Someone requested the resume at {}.",
                now.format("%Y-%m-%d %H:%M:%S UTC")
            )),
            reply_to: None,
        };

        if !self.email.send(email).await? {
            return Err(ResumeRequestDownloadError::Send);
        }

        base_url
            .join(&self.config.filename)
            .map_err(|err| ResumeRequestDownloadError::Other(err.into()))
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use folio_email_contracts::MockEmailService;
    use folio_shared_contracts::time::MockTimeService;
    use folio_utils::assert_matches;

    use super::*;

    #[tokio::test]
    async fn ok() {
        // Arrange
        let time = MockTimeService::new().with_now(Utc.with_ymd_and_hms(2024, 5, 17, 9, 30, 0).unwrap());
        let email = MockEmailService::new().with_send(expected_email(), true);

        let sut = ResumeFeatureServiceImpl {
            time,
            email,
            config: config(),
        };

        // Act
        let result = sut
            .request_download("https://folio.example".parse().unwrap())
            .await;

        // Assert
        assert_eq!(
            result.unwrap().as_str(),
            "https://folio.example/resume.pdf"
        );
    }

    #[tokio::test]
    async fn error() {
        // Arrange
        let time = MockTimeService::new().with_now(Utc.with_ymd_and_hms(2024, 5, 17, 9, 30, 0).unwrap());
        let email = MockEmailService::new().with_send(expected_email(), false);

        let sut = ResumeFeatureServiceImpl {
            time,
            email,
            config: config(),
        };

        // Act
        let result = sut
            .request_download("https://folio.example".parse().unwrap())
            .await;

        // Assert
        assert_matches!(result, Err(ResumeRequestDownloadError::Send));
    }

    fn config() -> ResumeFeatureConfig {
        ResumeFeatureConfig {
            recipient: "owner@example.com".parse().unwrap(),
            filename: "resume.pdf".into(),
        }
    }

    fn expected_email() -> Email {
        Email {
            recipient: "owner@example.com".parse().unwrap(),
            subject: "[Resume] Download requested".into(),
            body: EmailBody::Text(
                "Someone requested the resume at 2024-05-17 09:30:00 UTC.".into(),
            ),
            reply_to: None,
        }
    }
}
