use std::{
    net::{IpAddr, SocketAddr},
    path::PathBuf,
    sync::Arc,
    time::Duration,
};

use axum::Router;
use folio_core_contact_contracts::ContactFeatureService;
use folio_core_resume_contracts::ResumeFeatureService;
use folio_utils::Apply;
use tokio::net::TcpListener;
use tower_http::services::ServeDir;

mod middlewares;
mod models;
mod routes;

#[derive(Debug, Clone)]
pub struct RestServer<Contact, Resume> {
    contact: Contact,
    resume: Resume,
    config: RestServerConfig,
}

#[derive(Debug, Clone)]
pub struct RestServerConfig {
    pub addr: SocketAddr,
    /// Origins allowed to call the API cross-origin. Empty list: any origin.
    pub allowed_origins: Vec<String>,
    /// Directory served for requests no API route matches.
    pub static_dir: PathBuf,
    pub rate_limit: RateLimitPolicy,
    pub real_ip_config: Option<Arc<RealIpConfig>>,
}

/// Cap on requests per client within the given window, enforced on the
/// contact related routes only.
#[derive(Debug, Clone, Copy)]
pub struct RateLimitPolicy {
    pub window: Duration,
    pub max_requests: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RealIpConfig {
    pub header: String,
    pub set_from: IpAddr,
}

impl<Contact, Resume> RestServer<Contact, Resume>
where
    Contact: ContactFeatureService,
    Resume: ResumeFeatureService,
{
    pub fn new(contact: Contact, resume: Resume, config: RestServerConfig) -> Self {
        Self {
            contact,
            resume,
            config,
        }
    }

    pub async fn serve(self) -> anyhow::Result<()> {
        let addr = self.config.addr;
        let router = self.router()?;
        let listener = TcpListener::bind(addr).await?;
        axum::serve(
            listener,
            router.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .await
        .map_err(Into::into)
    }

    fn router(self) -> anyhow::Result<Router<()>> {
        let contact_routes = Router::new()
            .merge(routes::contact::router(self.contact.into()))
            .merge(routes::resume::router(self.resume.into()))
            .apply(middlewares::rate_limit::add(self.config.rate_limit)?);

        let router = Router::new()
            .merge(routes::health::router())
            .merge(contact_routes)
            .fallback_service(ServeDir::new(&self.config.static_dir))
            .apply(middlewares::cors::add(&self.config.allowed_origins)?)
            .apply(middlewares::trace::add)
            .apply(middlewares::request_id::add)
            .apply(middlewares::client_ip::add(self.config.real_ip_config))
            .apply(middlewares::panic_handler::add);

        Ok(router)
    }
}
