//! Scaleway Client
//!
//! Shared client handed to every API wrapper: credentials, HTTP transport,
//! API base URL and the provider-level default locality.

use super::http::ScwHttpClient;
use super::locality::{Region, Zone};
use crate::error::Result;
use serde::de::DeserializeOwned;
use url::Url;

/// Production API endpoint
pub const DEFAULT_API_URL: &str = "https://api.scaleway.com";

/// Main Scaleway client
#[derive(Clone)]
pub struct ScwClient {
    http: ScwHttpClient,
    api_url: Url,
    secret_key: Option<String>,
    default_project_id: Option<String>,
    default_zone: Option<Zone>,
    default_region: Option<Region>,
}

impl std::fmt::Debug for ScwClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScwClient")
            .field("api_url", &self.api_url.as_str())
            .field("secret_key", &self.secret_key.as_ref().map(|_| "<redacted>"))
            .field("default_project_id", &self.default_project_id)
            .field("default_zone", &self.default_zone)
            .field("default_region", &self.default_region)
            .finish()
    }
}

impl ScwClient {
    /// Create a client against `api_url`. No request is made.
    pub fn new(api_url: &str) -> Result<Self> {
        Ok(Self {
            http: ScwHttpClient::new()?,
            api_url: Url::parse(api_url)?,
            secret_key: None,
            default_project_id: None,
            default_zone: None,
            default_region: None,
        })
    }

    /// Secret key sent as `X-Auth-Token` on every request
    pub fn with_secret_key(mut self, secret_key: Option<String>) -> Self {
        self.secret_key = secret_key;
        self
    }

    pub fn with_default_project_id(mut self, project_id: Option<String>) -> Self {
        self.default_project_id = project_id;
        self
    }

    pub fn with_default_zone(mut self, zone: Option<Zone>) -> Self {
        self.default_zone = zone;
        self
    }

    pub fn with_default_region(mut self, region: Option<Region>) -> Self {
        self.default_region = region;
        self
    }

    pub fn default_zone(&self) -> Option<&Zone> {
        self.default_zone.as_ref()
    }

    pub fn default_region(&self) -> Option<&Region> {
        self.default_region.as_ref()
    }

    pub fn default_project_id(&self) -> Option<&str> {
        self.default_project_id.as_deref()
    }

    pub fn api_url(&self) -> &Url {
        &self.api_url
    }

    /// Make an authenticated GET request to a Scaleway API
    pub async fn get<T: DeserializeOwned>(&self, url: &str, query: &[(&str, String)]) -> Result<T> {
        self.http.get(url, query, self.secret_key.as_deref()).await
    }

    // =========================================================================
    // URL helpers
    // =========================================================================

    /// Build an API URL from already-encoded path segments
    pub fn api_path_url(&self, path: &str) -> String {
        format!("{}/{}", self.api_url.as_str().trim_end_matches('/'), path)
    }

    /// Build a zoned API URL, e.g. `baremetal/v1alpha1/zones/fr-par-1/offers`
    pub fn zoned_url(&self, api: &str, zone: &Zone, resource: &str) -> String {
        self.api_path_url(&format!(
            "{}/zones/{}/{}",
            api,
            urlencoding::encode(zone.as_str()),
            resource
        ))
    }

    /// Build a regional API URL, e.g. `rdb/v1/regions/fr-par/instances`
    pub fn regional_url(&self, api: &str, region: &Region, resource: &str) -> String {
        self.api_path_url(&format!(
            "{}/regions/{}/{}",
            api,
            urlencoding::encode(region.as_str()),
            resource
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zoned_url() {
        let client = ScwClient::new("https://api.scaleway.com").unwrap();
        let zone = Zone::parse("fr-par-2").unwrap();
        assert_eq!(
            client.zoned_url("baremetal/v1alpha1", &zone, "offers"),
            "https://api.scaleway.com/baremetal/v1alpha1/zones/fr-par-2/offers"
        );
    }

    #[test]
    fn test_regional_url_with_trailing_slash_base() {
        let client = ScwClient::new("http://127.0.0.1:8080/").unwrap();
        let region = Region::parse("nl-ams").unwrap();
        assert_eq!(
            client.regional_url("rdb/v1", &region, "instances/abc"),
            "http://127.0.0.1:8080/rdb/v1/regions/nl-ams/instances/abc"
        );
    }

    #[test]
    fn test_invalid_api_url() {
        assert!(ScwClient::new("not a url").is_err());
    }

    #[test]
    fn test_debug_redacts_secret_key() {
        let client = ScwClient::new(DEFAULT_API_URL)
            .unwrap()
            .with_secret_key(Some("super-secret".to_string()));
        let debug = format!("{:?}", client);
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("<redacted>"));
    }
}
