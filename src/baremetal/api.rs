//! Baremetal API (v1alpha1)
//!
//! Typed wrapper over the few Elastic Metal endpoints the provider reads:
//! the offer catalog and servers.

use super::offers::{self, OfferCatalog};
use crate::error::Result;
use crate::scw::client::ScwClient;
use crate::scw::locality::Zone;
use crate::scw::pagination::Page;
use serde::{Deserialize, Serialize};
use std::net::IpAddr;

const API_PATH: &str = "baremetal/v1alpha1";

/// Zones where the baremetal API is served
pub const SUPPORTED_ZONES: &[&str] = &["fr-par-1", "fr-par-2", "nl-ams-1"];

/// CPU of an offer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cpu {
    pub name: String,
    #[serde(rename = "core_count")]
    pub cores: u32,
    #[serde(rename = "thread_count")]
    pub threads: u32,
    /// MHz
    pub frequency: u32,
}

/// Disk of an offer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Disk {
    /// Bytes
    pub capacity: u64,
    #[serde(rename = "type")]
    pub disk_type: String,
}

/// Memory module of an offer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Memory {
    /// Bytes
    pub capacity: u64,
    #[serde(rename = "type")]
    pub memory_type: String,
    /// MHz
    pub frequency: u32,
    #[serde(alias = "is_ecc")]
    pub ecc: bool,
}

/// IP attached to a server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ip {
    pub id: String,
    pub address: IpAddr,
    #[serde(default)]
    pub reverse: String,
    #[serde(default)]
    pub version: String,
}

/// Catalog entry describing a purchasable server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Offer {
    pub id: String,
    /// Always uppercase, e.g. `GP-BM1-S`
    pub name: String,
    #[serde(default)]
    pub stock: String,
    /// Bits per second
    #[serde(default)]
    pub bandwidth: u64,
    #[serde(default)]
    pub commercial_range: String,
    #[serde(default)]
    pub enable: bool,
    #[serde(default)]
    pub cpus: Option<Vec<Cpu>>,
    #[serde(default)]
    pub memories: Option<Vec<Memory>>,
    #[serde(default)]
    pub disks: Option<Vec<Disk>>,
}

/// Elastic Metal server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Server {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub project_id: Option<String>,
    pub zone: Zone,
    pub offer_id: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub ips: Option<Vec<Ip>>,
}

/// Parameters of a single `ListOffers` call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListOffersRequest {
    pub zone: Zone,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListOffersResponse {
    #[serde(default)]
    pub offers: Vec<Offer>,
    #[serde(default)]
    pub total_count: u64,
}

impl Page for ListOffersResponse {
    type Item = Offer;

    fn total_count(&self) -> u64 {
        self.total_count
    }

    fn into_items(self) -> Vec<Offer> {
        self.offers
    }
}

/// Baremetal API client
#[derive(Debug, Clone)]
pub struct BaremetalApi {
    client: ScwClient,
}

impl BaremetalApi {
    pub fn new(client: &ScwClient) -> Self {
        Self {
            client: client.clone(),
        }
    }

    /// Whether `zone` is served by this API
    pub fn supports_zone(zone: &Zone) -> bool {
        SUPPORTED_ZONES.contains(&zone.as_str())
    }

    /// One page of the zone's offer catalog
    pub async fn list_offers(&self, request: &ListOffersRequest) -> Result<ListOffersResponse> {
        let url = self.client.zoned_url(API_PATH, &request.zone, "offers");

        let mut query = Vec::new();
        if let Some(page) = request.page {
            query.push(("page", page.to_string()));
        }
        if let Some(page_size) = request.page_size {
            query.push(("page_size", page_size.to_string()));
        }

        self.client.get(&url, &query).await
    }

    /// Every offer of the zone, walking all pages
    pub async fn list_all_offers(&self, zone: &Zone) -> Result<Vec<Offer>> {
        offers::list_all_offers(self, zone).await
    }

    pub async fn get_server(&self, zone: &Zone, server_id: &str) -> Result<Server> {
        let url = self.client.zoned_url(
            API_PATH,
            zone,
            &format!("servers/{}", urlencoding::encode(server_id)),
        );
        self.client.get(&url, &[]).await
    }
}

impl OfferCatalog for BaremetalApi {
    async fn list_offers_page(&self, request: &ListOffersRequest) -> Result<ListOffersResponse> {
        self.list_offers(request).await
    }
}
