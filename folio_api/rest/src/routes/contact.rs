use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::Response,
    routing, Json, Router,
};
use folio_core_contact_contracts::{ContactFeatureService, ContactSubmitError};

use super::{error, internal_server_error, ok};
use crate::models::contact::ApiContactForm;

pub fn router(service: Arc<impl ContactFeatureService>) -> Router<()> {
    Router::new()
        .route("/contact", routing::post(submit))
        .route("/api/contact", routing::post(submit))
        .with_state(service)
}

async fn submit(
    service: State<Arc<impl ContactFeatureService>>,
    Json(form): Json<ApiContactForm>,
) -> Response {
    match service.submit(form.into()).await {
        // Silently discarded honeypot hits report success as well.
        Ok(_) => ok(),
        Err(
            err @ (ContactSubmitError::MissingFields
            | ContactSubmitError::InvalidEmail
            | ContactSubmitError::FieldTooLong),
        ) => error(StatusCode::BAD_REQUEST, err.to_string()),
        Err(ContactSubmitError::Send) => {
            error(StatusCode::INTERNAL_SERVER_ERROR, "Could not send message")
        }
        Err(ContactSubmitError::Other(err)) => internal_server_error(err),
    }
}
