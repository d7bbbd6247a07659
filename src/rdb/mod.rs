//! Managed Database (rdb) resources
//!
//! Regional resource family: instances are identified in state as
//! `<region>/<instance id>`.

pub mod api;
pub mod helpers;

pub use api::{Endpoint, Instance, RdbApi};
pub use helpers::{flatten_rdb_instance_read_replicas, rdb_api_with_region, rdb_api_with_region_and_id};
