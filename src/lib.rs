//! Scaleway helpers for a Terraform provider
//!
//! Resource handlers use this crate to:
//!
//! - build an API client bound to the zone or region of a resource, either
//!   from its attributes (create) or from its `<locality>/<id>` identifier
//!   (read, update, delete);
//! - resolve a baremetal offer from its name or ID;
//! - flatten nested API structs into the attribute maps stored in state.
//!
//! # Example
//!
//! ```ignore
//! use tfscw::{baremetal, config::ScwConfig, Meta};
//!
//! async fn read_offer(id: &str) -> tfscw::Result<()> {
//!     let meta = Meta::new(&ScwConfig::load(None)?)?;
//!     let (api, zone, _server_id) = baremetal::baremetal_api_with_zone_and_id(&meta, id)?;
//!     let offer = baremetal::baremetal_offer_by_name(&api, &zone, "gp-bm1-s").await?;
//!     let _disks = baremetal::flatten_baremetal_disks(offer.disks.as_deref());
//!     Ok(())
//! }
//! ```

pub mod baremetal;
pub mod config;
pub mod error;
pub mod provider;
pub mod rdb;
pub mod scw;

pub use error::{Error, Result};
pub use provider::{Meta, ResourceData};
