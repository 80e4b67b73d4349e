use anyhow::Context;
use folio_config::EmailConfig;
use folio_email_impl::EmailServiceImpl;

/// Set up the SMTP transport
pub fn connect(config: &EmailConfig) -> anyhow::Result<EmailServiceImpl> {
    EmailServiceImpl::new(config.smtp_url.as_str(), config.from.clone())
        .context("Failed to set up SMTP transport")
}
