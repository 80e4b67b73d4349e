use serde::Serialize;

pub mod contact;
pub mod resume;

#[derive(Serialize)]
pub struct ApiStatus {
    pub ok: bool,
}

#[derive(Serialize)]
pub struct ApiError {
    pub ok: bool,
    pub error: String,
}
