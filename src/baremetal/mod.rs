//! Elastic Metal (baremetal) resources
//!
//! Zoned resource family: servers live in a zone and are identified in state
//! as `<zone>/<server id>`.
//!
//! # Module Structure
//!
//! - [`api`] - Typed API client and response types
//! - [`helpers`] - Client resolvers and schema flatteners
//! - [`offers`] - Offer lookup by name or ID over the paginated catalog

pub mod api;
pub mod helpers;
pub mod offers;

pub use api::{BaremetalApi, Cpu, Disk, Ip, Memory, Offer, Server};
pub use helpers::{
    baremetal_api_with_zone, baremetal_api_with_zone_and_id, flatten_baremetal_cpus,
    flatten_baremetal_disks, flatten_baremetal_ips, flatten_baremetal_memory,
};
pub use offers::{baremetal_offer_by_id, baremetal_offer_by_name, OfferCatalog};
