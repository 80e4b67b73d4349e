use std::{net::SocketAddr, sync::Arc};

use folio_api_rest::{RateLimitPolicy, RealIpConfig, RestServer, RestServerConfig};
use folio_config::Config;
use folio_core_contact_impl::{ContactFeatureConfig, ContactFeatureServiceImpl};
use folio_core_resume_impl::{ResumeFeatureConfig, ResumeFeatureServiceImpl};
use folio_email_contracts::EmailService;
use folio_shared_impl::time::TimeServiceImpl;
use folio_templates_impl::TemplateServiceImpl;
use tracing::{info, warn};

use crate::email;

pub async fn serve(config: Config) -> anyhow::Result<()> {
    info!("Connecting to smtp server");
    let email = email::connect(&config.email)?;
    if let Err(err) = email.ping().await {
        // Not fatal: the server stays up and reports transport failures per
        // request, and /health has to answer regardless.
        warn!("Failed to ping smtp server: {err:#}");
    }

    let contact = ContactFeatureServiceImpl::new(
        email.clone(),
        TemplateServiceImpl::default(),
        ContactFeatureConfig {
            recipient: config.contact.recipient.clone(),
        },
    );

    let resume = ResumeFeatureServiceImpl::new(
        TimeServiceImpl,
        email,
        ResumeFeatureConfig {
            recipient: config.resume.recipient.clone(),
            filename: config.resume.filename.clone(),
        },
    );

    let addr = SocketAddr::new(config.http.host, config.http.port);
    let server = RestServer::new(
        contact,
        resume,
        RestServerConfig {
            addr,
            allowed_origins: config.http.allowed_origins.clone(),
            static_dir: config.http.static_dir.clone(),
            rate_limit: RateLimitPolicy {
                window: config.contact.rate_limit.window.into(),
                max_requests: config.contact.rate_limit.max_requests,
            },
            real_ip_config: config.http.real_ip.as_ref().map(|real_ip| {
                Arc::new(RealIpConfig {
                    header: real_ip.header.clone(),
                    set_from: real_ip.set_from,
                })
            }),
        },
    );

    info!("Starting http server on {addr}");
    server.serve().await
}
