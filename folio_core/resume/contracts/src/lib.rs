use std::future::Future;

use thiserror::Error;
use url::Url;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ResumeFeatureService: Send + Sync + 'static {
    /// Notifies the site owner that the resume is being downloaded and
    /// returns the absolute URL of the statically hosted file.
    ///
    /// `base_url` is the scheme and host the current request came in on.
    fn request_download(
        &self,
        base_url: Url,
    ) -> impl Future<Output = Result<Url, ResumeRequestDownloadError>> + Send;
}

#[derive(Debug, Error)]
pub enum ResumeRequestDownloadError {
    #[error("Failed to send notification.")]
    Send,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
