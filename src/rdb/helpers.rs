//! Helpers used by the rdb instance resource

use super::api::{Endpoint, RdbApi};
use crate::error::{Error, Result};
use crate::provider::flatten::{flatten_ip_ptr, flatten_list, flatten_string_ptr, AttributeMap};
use crate::provider::{extract_region, Meta, ResourceData};
use crate::scw::locality::{parse_regional_id, Region};
use serde_json::Value;
use std::time::Duration;

pub const RDB_WAIT_FOR_TIMEOUT: Duration = Duration::from_secs(10 * 60);

/// Rdb API and region for a Create request
pub fn rdb_api_with_region(meta: &Meta, data: &impl ResourceData) -> Result<(RdbApi, Region)> {
    let region = extract_region(data, meta)?;
    if !RdbApi::supports_region(&region) {
        return Err(Error::UnsupportedRegion {
            api: "rdb",
            region: region.to_string(),
        });
    }

    Ok((RdbApi::new(&meta.scw_client), region))
}

/// Rdb API with region and ID extracted from the state
pub fn rdb_api_with_region_and_id(meta: &Meta, id: &str) -> Result<(RdbApi, Region, String)> {
    let (region, id) = parse_regional_id(id)?;
    Ok((RdbApi::new(&meta.scw_client), region, id))
}

/// Flatten read replicas. An unset `ip` or `name` is stored as null.
pub fn flatten_rdb_instance_read_replicas(
    read_replicas: Option<&[Endpoint]>,
) -> Option<Vec<AttributeMap>> {
    flatten_list(read_replicas, |replica| {
        AttributeMap::from_iter([
            ("ip".to_string(), flatten_ip_ptr(replica.ip.as_ref())),
            ("port".to_string(), Value::from(i64::from(replica.port))),
            ("name".to_string(), flatten_string_ptr(replica.name.as_deref())),
        ])
    })
}
