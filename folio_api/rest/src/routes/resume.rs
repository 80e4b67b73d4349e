use std::sync::Arc;

use anyhow::Context;
use axum::{
    extract::{Host, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use folio_core_resume_contracts::{ResumeFeatureService, ResumeRequestDownloadError};
use url::Url;

use super::{error, internal_server_error};
use crate::models::resume::ApiResumeDownload;

pub fn router(service: Arc<impl ResumeFeatureService>) -> Router<()> {
    Router::new()
        .route("/download-resume", routing::post(request_download))
        .with_state(service)
}

async fn request_download(
    service: State<Arc<impl ResumeFeatureService>>,
    Host(host): Host,
    headers: HeaderMap,
) -> Response {
    let base_url = match request_base_url(&headers, &host) {
        Ok(base_url) => base_url,
        Err(err) => return internal_server_error(err),
    };

    match service.request_download(base_url).await {
        Ok(file_url) => Json(ApiResumeDownload { file_url }).into_response(),
        Err(ResumeRequestDownloadError::Send) => error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Could not send notification",
        ),
        Err(ResumeRequestDownloadError::Other(err)) => internal_server_error(err),
    }
}

/// Scheme and host the request came in on. Behind a reverse proxy the
/// original scheme arrives in `X-Forwarded-Proto`.
fn request_base_url(headers: &HeaderMap, host: &str) -> anyhow::Result<Url> {
    let scheme = headers
        .get("x-forwarded-proto")
        .and_then(|value| value.to_str().ok())
        .unwrap_or("http");

    format!("{scheme}://{host}/")
        .parse()
        .context("Failed to build base url from request")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_defaults_to_http() {
        let url = request_base_url(&HeaderMap::new(), "folio.example").unwrap();
        assert_eq!(url.as_str(), "http://folio.example/");
    }

    #[test]
    fn base_url_honors_forwarded_proto() {
        let mut headers = HeaderMap::new();
        headers.insert("x-forwarded-proto", "https".parse().unwrap());
        let url = request_base_url(&headers, "folio.example").unwrap();
        assert_eq!(url.as_str(), "https://folio.example/");
    }
}
