use anyhow::Context;
use axum::{
    http::{header, HeaderValue, Method},
    Router,
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

/// Restricts cross-origin callers to the configured origin set. An empty
/// set leaves the API open to any origin.
pub fn add<S: Clone + Send + Sync + 'static>(
    allowed_origins: &[String],
) -> anyhow::Result<impl FnOnce(Router<S>) -> Router<S>> {
    let layer = if allowed_origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins = allowed_origins
            .iter()
            .map(|origin| {
                origin
                    .parse::<HeaderValue>()
                    .with_context(|| format!("Invalid allowed origin {origin:?}"))
            })
            .collect::<anyhow::Result<Vec<_>>>()?;

        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods([Method::GET, Method::POST])
            .allow_headers([header::CONTENT_TYPE])
    };

    Ok(move |router: Router<S>| router.layer(layer))
}
