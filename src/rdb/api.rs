//! Managed Database API (v1)

use crate::error::Result;
use crate::scw::client::ScwClient;
use crate::scw::locality::Region;
use serde::{Deserialize, Serialize};
use std::net::IpAddr;

const API_PATH: &str = "rdb/v1";

/// Regions where the rdb API is served
pub const SUPPORTED_REGIONS: &[&str] = &["fr-par", "nl-ams", "pl-waw"];

/// Network endpoint of an instance or of one of its read replicas
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoint {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub ip: Option<IpAddr>,
    pub port: u32,
    #[serde(default)]
    pub name: Option<String>,
}

/// Database instance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instance {
    pub id: String,
    pub name: String,
    pub region: Region,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub engine: String,
    #[serde(default)]
    pub endpoint: Option<Endpoint>,
    #[serde(default)]
    pub read_replicas: Option<Vec<Endpoint>>,
}

/// Rdb API client
#[derive(Debug, Clone)]
pub struct RdbApi {
    client: ScwClient,
}

impl RdbApi {
    pub fn new(client: &ScwClient) -> Self {
        Self {
            client: client.clone(),
        }
    }

    /// Whether `region` is served by this API
    pub fn supports_region(region: &Region) -> bool {
        SUPPORTED_REGIONS.contains(&region.as_str())
    }

    pub async fn get_instance(&self, region: &Region, instance_id: &str) -> Result<Instance> {
        let url = self.client.regional_url(
            API_PATH,
            region,
            &format!("instances/{}", urlencoding::encode(instance_id)),
        );
        self.client.get(&url, &[]).await
    }
}
