use std::{net::IpAddr, sync::Arc};

use anyhow::Context;
use axum::Router;
use tower_governor::{
    governor::GovernorConfigBuilder, key_extractor::KeyExtractor, GovernorError, GovernorLayer,
};

use super::client_ip::ClientIp;
use crate::RateLimitPolicy;

/// Caps requests per client on the routes it is applied to. The quota
/// replenishes continuously, amounting to `max_requests` per `window`.
pub fn add<S: Clone + Send + Sync + 'static>(
    policy: RateLimitPolicy,
) -> anyhow::Result<impl FnOnce(Router<S>) -> Router<S>> {
    let period = policy
        .window
        .checked_div(policy.max_requests)
        .filter(|period| !period.is_zero())
        .context("Invalid rate limit configuration")?;

    let config = GovernorConfigBuilder::default()
        .key_extractor(ClientIpKeyExtractor)
        .period(period)
        .burst_size(policy.max_requests)
        .finish()
        .context("Invalid rate limit configuration")?;
    let config = Arc::new(config);

    Ok(move |router: Router<S>| router.layer(GovernorLayer { config }))
}

/// Keys the limiter by the address resolved by the client ip middleware,
/// which has to run before this layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClientIpKeyExtractor;

impl KeyExtractor for ClientIpKeyExtractor {
    type Key = IpAddr;

    fn extract<T>(&self, request: &axum::http::Request<T>) -> Result<Self::Key, GovernorError> {
        request
            .extensions()
            .get::<ClientIp>()
            .map(|client_ip| client_ip.0)
            .ok_or(GovernorError::UnableToExtractKey)
    }

    fn name(&self) -> &'static str {
        "client ip"
    }
}
