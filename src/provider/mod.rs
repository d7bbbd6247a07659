//! Provider-side glue
//!
//! [`Meta`] is the configured provider handed to every resource handler.
//! [`ResourceData`] is the read-only view of a resource's attributes the
//! handlers resolve their locality from.
//!
//! # Module Structure
//!
//! - [`flatten`] - Attribute map type and scalar flattening helpers

pub mod flatten;

use crate::config::ScwConfig;
use crate::error::{Error, Result};
use crate::scw::client::ScwClient;
use crate::scw::locality::{Region, Zone};
use serde_json::{Map, Value};
use std::collections::HashMap;

/// Configured provider, shared by every resource
#[derive(Debug, Clone)]
pub struct Meta {
    pub scw_client: ScwClient,
}

impl Meta {
    /// Build the provider state from the effective configuration.
    ///
    /// The default region falls back to the region of the default zone.
    pub fn new(config: &ScwConfig) -> Result<Self> {
        let profile = &config.profile;

        let default_zone = profile.default_zone.as_deref().map(Zone::parse).transpose()?;
        let default_region = match profile.default_region.as_deref() {
            Some(region) => Some(Region::parse(region)?),
            None => default_zone.as_ref().map(Zone::region),
        };

        let scw_client = ScwClient::new(config.api_url())?
            .with_secret_key(profile.secret_key.clone())
            .with_default_project_id(profile.default_project_id.clone())
            .with_default_zone(default_zone)
            .with_default_region(default_region);

        Ok(Self { scw_client })
    }

    pub fn from_client(scw_client: ScwClient) -> Self {
        Self { scw_client }
    }
}

/// Read access to a resource's configured attributes, keyed by schema name
pub trait ResourceData {
    /// String value of `key`, `None` when unset
    fn get_str(&self, key: &str) -> Option<&str>;
}

impl ResourceData for Map<String, Value> {
    fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }
}

impl ResourceData for Value {
    fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }
}

impl ResourceData for HashMap<String, String> {
    fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).map(String::as_str)
    }
}

/// Zone of a resource being created: its `zone` attribute, else the default zone
pub fn extract_zone(data: &impl ResourceData, meta: &Meta) -> Result<Zone> {
    if let Some(zone) = data.get_str("zone").filter(|z| !z.is_empty()) {
        return Zone::parse(zone);
    }
    meta.scw_client.default_zone().cloned().ok_or(Error::ZoneNotFound)
}

/// Region of a resource being created: its `region` attribute, else the default region
pub fn extract_region(data: &impl ResourceData, meta: &Meta) -> Result<Region> {
    if let Some(region) = data.get_str("region").filter(|r| !r.is_empty()) {
        return Region::parse(region);
    }
    meta.scw_client.default_region().cloned().ok_or(Error::RegionNotFound)
}
