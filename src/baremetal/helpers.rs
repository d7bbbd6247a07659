//! Helpers used by the baremetal server resource

use super::api::{BaremetalApi, Cpu, Disk, Ip, Memory};
use crate::error::{Error, Result};
use crate::provider::flatten::{flatten_list, AttributeMap};
use crate::provider::{extract_zone, Meta, ResourceData};
use crate::scw::locality::{parse_zoned_id, Zone};
use serde_json::json;
use std::time::Duration;

pub const BAREMETAL_SERVER_WAIT_FOR_TIMEOUT: Duration = Duration::from_secs(60 * 60);

/// Some retry functions wait for the server themselves
pub const BAREMETAL_SERVER_RETRY_FUNC_TIMEOUT: Duration =
    Duration::from_secs(BAREMETAL_SERVER_WAIT_FOR_TIMEOUT.as_secs() + 60);

pub const BAREMETAL_SERVER_RESOURCE_TIMEOUT: Duration =
    Duration::from_secs(BAREMETAL_SERVER_RETRY_FUNC_TIMEOUT.as_secs() + 60);

/// Baremetal API and zone for a Create request
pub fn baremetal_api_with_zone(
    meta: &Meta,
    data: &impl ResourceData,
) -> Result<(BaremetalApi, Zone)> {
    let zone = extract_zone(data, meta)?;
    if !BaremetalApi::supports_zone(&zone) {
        return Err(Error::UnsupportedZone {
            api: "baremetal",
            zone: zone.to_string(),
        });
    }

    Ok((BaremetalApi::new(&meta.scw_client), zone))
}

/// Baremetal API with zone and ID extracted from the state
pub fn baremetal_api_with_zone_and_id(
    meta: &Meta,
    id: &str,
) -> Result<(BaremetalApi, Zone, String)> {
    let (zone, id) = parse_zoned_id(id)?;
    Ok((BaremetalApi::new(&meta.scw_client), zone, id))
}

pub fn flatten_baremetal_cpus(cpus: Option<&[Cpu]>) -> Option<Vec<AttributeMap>> {
    flatten_list(cpus, |cpu| {
        AttributeMap::from_iter([
            ("name".to_string(), json!(cpu.name)),
            ("core_count".to_string(), json!(cpu.cores)),
            ("frequency".to_string(), json!(cpu.frequency)),
            ("thread_count".to_string(), json!(cpu.threads)),
        ])
    })
}

pub fn flatten_baremetal_disks(disks: Option<&[Disk]>) -> Option<Vec<AttributeMap>> {
    flatten_list(disks, |disk| {
        AttributeMap::from_iter([
            ("type".to_string(), json!(disk.disk_type)),
            ("capacity".to_string(), json!(disk.capacity)),
        ])
    })
}

pub fn flatten_baremetal_memory(memories: Option<&[Memory]>) -> Option<Vec<AttributeMap>> {
    flatten_list(memories, |memory| {
        AttributeMap::from_iter([
            ("type".to_string(), json!(memory.memory_type)),
            ("capacity".to_string(), json!(memory.capacity)),
            ("frequency".to_string(), json!(memory.frequency)),
            ("ecc".to_string(), json!(memory.ecc)),
        ])
    })
}

pub fn flatten_baremetal_ips(ips: Option<&[Ip]>) -> Option<Vec<AttributeMap>> {
    flatten_list(ips, |ip| {
        AttributeMap::from_iter([
            ("id".to_string(), json!(ip.id)),
            ("address".to_string(), json!(ip.address.to_string())),
            ("reverse".to_string(), json!(ip.reverse)),
        ])
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scw::client::ScwClient;
    use serde_json::Value;

    fn meta() -> Meta {
        let client = ScwClient::new("https://api.scaleway.com")
            .unwrap()
            .with_default_zone(Some(Zone::parse("fr-par-2").unwrap()));
        Meta::from_client(client)
    }

    fn keys(map: &AttributeMap) -> Vec<&str> {
        let mut keys: Vec<&str> = map.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    #[test]
    fn test_api_with_zone_from_default() {
        let (_, zone) = baremetal_api_with_zone(&meta(), &Value::Null).unwrap();
        assert_eq!(zone.as_str(), "fr-par-2");
    }

    #[test]
    fn test_api_with_zone_from_attribute() {
        let data = json!({"zone": "nl-ams-1"});
        let (_, zone) = baremetal_api_with_zone(&meta(), &data).unwrap();
        assert_eq!(zone.as_str(), "nl-ams-1");
    }

    #[test]
    fn test_api_with_unsupported_zone() {
        let data = json!({"zone": "pl-waw-2"});
        let err = baremetal_api_with_zone(&meta(), &data).unwrap_err();
        assert!(matches!(err, Error::UnsupportedZone { api: "baremetal", .. }));
    }

    #[test]
    fn test_api_with_zone_and_id() {
        let (_, zone, id) =
            baremetal_api_with_zone_and_id(&meta(), "fr-par-1/11111111-1111-1111-1111-111111111111")
                .unwrap();
        assert_eq!(zone.as_str(), "fr-par-1");
        assert_eq!(id, "11111111-1111-1111-1111-111111111111");
    }

    #[test]
    fn test_api_with_zone_and_id_malformed() {
        let err = baremetal_api_with_zone_and_id(&meta(), "11111111-1111-1111-1111-111111111111")
            .unwrap_err();
        assert!(matches!(err, Error::InvalidId(_)));
    }

    #[test]
    fn test_flatten_disks_keeps_order() {
        let disks = vec![
            Disk {
                disk_type: "nvme".to_string(),
                capacity: 500,
            },
            Disk {
                disk_type: "ssd".to_string(),
                capacity: 250,
            },
        ];

        let flattened = flatten_baremetal_disks(Some(disks.as_slice())).unwrap();
        assert_eq!(
            Value::from(flattened.into_iter().map(Value::Object).collect::<Vec<_>>()),
            json!([
                {"type": "nvme", "capacity": 500},
                {"type": "ssd", "capacity": 250}
            ])
        );
    }

    #[test]
    fn test_flatten_cpus_renames_counts() {
        let cpus = vec![Cpu {
            name: "AMD EPYC 7281".to_string(),
            cores: 16,
            threads: 32,
            frequency: 2100,
        }];

        let flattened = flatten_baremetal_cpus(Some(cpus.as_slice())).unwrap();
        assert_eq!(flattened.len(), 1);
        assert_eq!(keys(&flattened[0]), vec!["core_count", "frequency", "name", "thread_count"]);
        assert_eq!(flattened[0]["core_count"], json!(16));
        assert_eq!(flattened[0]["thread_count"], json!(32));
        assert_eq!(flattened[0]["name"], json!("AMD EPYC 7281"));
    }

    #[test]
    fn test_flatten_memory() {
        let memories = vec![Memory {
            capacity: 34_359_738_368,
            memory_type: "DDR4".to_string(),
            frequency: 2666,
            ecc: true,
        }];

        let flattened = flatten_baremetal_memory(Some(memories.as_slice())).unwrap();
        assert_eq!(keys(&flattened[0]), vec!["capacity", "ecc", "frequency", "type"]);
        assert_eq!(flattened[0]["capacity"], json!(34_359_738_368_u64));
        assert_eq!(flattened[0]["ecc"], json!(true));
    }

    #[test]
    fn test_flatten_ips() {
        let ips = vec![
            Ip {
                id: "ip-2".to_string(),
                address: "2001:bc8:1201::1".parse().unwrap(),
                reverse: String::new(),
                version: "IPv6".to_string(),
            },
            Ip {
                id: "ip-1".to_string(),
                address: "51.159.0.10".parse().unwrap(),
                reverse: "bm.example.com".to_string(),
                version: "IPv4".to_string(),
            },
        ];

        let flattened = flatten_baremetal_ips(Some(ips.as_slice())).unwrap();
        assert_eq!(keys(&flattened[0]), vec!["address", "id", "reverse"]);
        assert_eq!(flattened[0]["id"], json!("ip-2"));
        assert_eq!(flattened[0]["address"], json!("2001:bc8:1201::1"));
        assert_eq!(flattened[1]["reverse"], json!("bm.example.com"));
    }

    #[test]
    fn test_absent_lists_stay_absent() {
        assert_eq!(flatten_baremetal_cpus(None), None);
        assert_eq!(flatten_baremetal_disks(None), None);
        assert_eq!(flatten_baremetal_memory(None), None);
        assert_eq!(flatten_baremetal_ips(None), None);

        assert_eq!(flatten_baremetal_ips(Some(&[][..])), Some(vec![]));
    }

    #[test]
    fn test_timeouts() {
        assert_eq!(BAREMETAL_SERVER_WAIT_FOR_TIMEOUT, Duration::from_secs(3600));
        assert_eq!(BAREMETAL_SERVER_RESOURCE_TIMEOUT, Duration::from_secs(3720));
    }
}
