//! Error types
//!
//! Every helper either succeeds or returns one of these. Nothing is retried
//! locally: API failures are surfaced to the resource code untouched.

use thiserror::Error;

/// Errors returned by the provider helpers
#[derive(Error, Debug)]
pub enum Error {
    /// A zone string that is neither `xx-yyy-N` nor a legacy alias
    #[error("bad zone format {0:?}, expected something like fr-par-1")]
    InvalidZone(String),

    /// A region string that is neither `xx-yyy` nor a legacy alias
    #[error("bad region format {0:?}, expected something like fr-par")]
    InvalidRegion(String),

    /// No `zone` attribute and no default zone in the provider configuration
    #[error("could not detect zone: set the zone attribute or a default zone")]
    ZoneNotFound,

    /// No `region` attribute and no default region in the provider configuration
    #[error("could not detect region: set the region attribute or a default region")]
    RegionNotFound,

    #[error("zone {zone} is not available for the {api} API")]
    UnsupportedZone { api: &'static str, zone: String },

    #[error("region {region} is not available for the {api} API")]
    UnsupportedRegion { api: &'static str, region: String },

    /// Composite identifier that is not `<locality>/<id>`
    #[error("cant parse localized id: {0}")]
    InvalidId(String),

    /// Listing succeeded but nothing matched
    #[error("cannot find the offer {0}")]
    OfferNotFound(String),

    /// Non-success HTTP status returned by the Scaleway API
    #[error("API request failed: {status} {message}")]
    Api { status: u16, message: String },

    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("failed to parse response JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid API URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("failed to parse config file: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for the helpers
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns true for a missing offer or a 404 from the API
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::OfferNotFound(_) => true,
            Error::Api { status, .. } => *status == 404,
            _ => false,
        }
    }

    /// Returns true when the zone/region or composite ID could not be resolved
    #[must_use]
    pub fn is_location_error(&self) -> bool {
        matches!(
            self,
            Error::InvalidZone(_)
                | Error::InvalidRegion(_)
                | Error::ZoneNotFound
                | Error::RegionNotFound
                | Error::UnsupportedZone { .. }
                | Error::UnsupportedRegion { .. }
                | Error::InvalidId(_)
        )
    }
}
