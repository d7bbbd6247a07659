//! Scaleway API interaction module
//!
//! This module provides the plumbing shared by every API wrapper: the HTTP
//! client, localities and localized IDs, and page walking.
//!
//! # Module Structure
//!
//! - [`client`] - Shared Scaleway client (credentials, base URL, defaults)
//! - [`http`] - HTTP utilities for REST API calls
//! - [`locality`] - Zones, regions and `<locality>/<id>` identifiers
//! - [`pagination`] - Walking `page`/`page_size` listings
//!
//! # Example
//!
//! ```ignore
//! use tfscw::scw::{client::ScwClient, locality::Zone};
//!
//! let client = ScwClient::new("https://api.scaleway.com")?;
//! let url = client.zoned_url("baremetal/v1alpha1", &Zone::parse("fr-par-2")?, "offers");
//! ```

pub mod client;
pub mod http;
pub mod locality;
pub mod pagination;
