use serde::Serialize;
use url::Url;

#[derive(Serialize)]
pub struct ApiResumeDownload {
    #[serde(rename = "fileUrl")]
    pub file_url: Url,
}
