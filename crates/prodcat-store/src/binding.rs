//! Service-binding descriptor parsing.
//!
//! Platform-bound deployments expose attached services through a JSON
//! blob (the `VCAP_SERVICES` convention): a map of service type to bound
//! instances, each carrying a credential block. The catalog only cares
//! about the `redis` entry.

use serde::Deserialize;
use thiserror::Error;

/// Errors raised while extracting store credentials from a descriptor.
#[derive(Debug, Error)]
pub enum BindingError {
    /// The descriptor is not well-formed, or a credential block is
    /// missing a required field.
    #[error("Service binding descriptor invalid: {0}")]
    Malformed(#[from] serde_json::Error),

    /// The descriptor parsed but lists no redis service instance.
    #[error("No redis service declared in binding descriptor")]
    MissingRedisService,
}

/// Credentials for reaching the external key-value store.
#[derive(Debug, Clone, Deserialize)]
pub struct StoreCredentials {
    pub host: String,
    pub port: u16,
    pub password: String,
}

#[derive(Debug, Deserialize)]
struct BindingDescriptor {
    #[serde(default)]
    redis: Vec<ServiceInstance>,
}

#[derive(Debug, Deserialize)]
struct ServiceInstance {
    credentials: StoreCredentials,
}

/// Extract store credentials from a service-binding descriptor.
///
/// A single bound redis instance is assumed; when several are bound the
/// first entry wins. Any other service types in the descriptor are
/// ignored.
pub fn parse(descriptor: &str) -> Result<StoreCredentials, BindingError> {
    let parsed: BindingDescriptor = serde_json::from_str(descriptor)?;
    parsed
        .redis
        .into_iter()
        .next()
        .map(|instance| instance.credentials)
        .ok_or(BindingError::MissingRedisService)
}
