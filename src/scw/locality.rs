//! Zones, regions and localized identifiers
//!
//! Every Scaleway resource lives either in a zone (`fr-par-1`) or a region
//! (`fr-par`). Terraform state stores the locality inside the resource ID as
//! `<locality>/<id>`, which is the only way to recover it on read, update
//! and delete.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Availability zone, e.g. `fr-par-1`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Zone(String);

/// Region, e.g. `fr-par`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Region(String);

/// Zones known to exist
pub const ALL_ZONES: &[&str] = &[
    "fr-par-1", "fr-par-2", "fr-par-3", "nl-ams-1", "nl-ams-2", "nl-ams-3", "pl-waw-1", "pl-waw-2",
    "pl-waw-3",
];

/// Regions known to exist
pub const ALL_REGIONS: &[&str] = &["fr-par", "nl-ams", "pl-waw"];

/// Check `xx-yyy` where x and y are ascii lowercase letters
fn is_region_format(s: &str) -> bool {
    let mut parts = s.split('-');
    let (Some(country), Some(city), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    country.len() == 2
        && city.len() == 3
        && country.chars().chain(city.chars()).all(|c| c.is_ascii_lowercase())
}

/// Check `xx-yyy-N` where N is a digit from 1 to 9
fn is_zone_format(s: &str) -> bool {
    let Some((region, number)) = s.rsplit_once('-') else {
        return false;
    };
    is_region_format(region)
        && number.len() == 1
        && number.chars().all(|c| ('1'..='9').contains(&c))
}

impl Zone {
    /// Parse a zone, accepting the legacy `par1` and `ams1` names
    pub fn parse(zone: &str) -> Result<Self> {
        match zone {
            "par1" => return Ok(Self("fr-par-1".to_string())),
            "ams1" => return Ok(Self("nl-ams-1".to_string())),
            _ => {},
        }

        if !is_zone_format(zone) {
            return Err(Error::InvalidZone(zone.to_string()));
        }
        let zone = Self(zone.to_string());
        if !zone.is_known() {
            tracing::warn!("{} is an unknown zone", zone);
        }
        Ok(zone)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the zone is one of [`ALL_ZONES`]
    pub fn is_known(&self) -> bool {
        ALL_ZONES.contains(&self.as_str())
    }

    /// Region containing this zone (`fr-par-1` -> `fr-par`)
    pub fn region(&self) -> Region {
        // The format check guarantees a trailing `-N`
        let region = self.0.rsplit_once('-').map_or(self.0.as_str(), |(r, _)| r);
        Region(region.to_string())
    }
}

impl Region {
    /// Parse a region, accepting the legacy `par1` and `ams1` names
    pub fn parse(region: &str) -> Result<Self> {
        match region {
            "par1" => return Ok(Self("fr-par".to_string())),
            "ams1" => return Ok(Self("nl-ams".to_string())),
            _ => {},
        }

        if !is_region_format(region) {
            return Err(Error::InvalidRegion(region.to_string()));
        }
        let region = Self(region.to_string());
        if !region.is_known() {
            tracing::warn!("{} is an unknown region", region);
        }
        Ok(region)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the region is one of [`ALL_REGIONS`]
    pub fn is_known(&self) -> bool {
        ALL_REGIONS.contains(&self.as_str())
    }
}

impl FromStr for Zone {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl FromStr for Region {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Zone {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl TryFrom<String> for Region {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<Zone> for String {
    fn from(zone: Zone) -> Self {
        zone.0
    }
}

impl From<Region> for String {
    fn from(region: Region) -> Self {
        region.0
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Split `<locality>/<id>` into its two parts.
///
/// Anything other than exactly one `/` is rejected.
pub fn parse_localized_id(localized_id: &str) -> Result<(&str, &str)> {
    let mut parts = localized_id.split('/');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(locality), Some(id), None) => Ok((locality, id)),
        _ => Err(Error::InvalidId(localized_id.to_string())),
    }
}

/// Decode a `<zone>/<id>` identifier
pub fn parse_zoned_id(zoned_id: &str) -> Result<(Zone, String)> {
    let (locality, id) = parse_localized_id(zoned_id)?;
    let zone = Zone::parse(locality)?;
    Ok((zone, id.to_string()))
}

/// Decode a `<region>/<id>` identifier
pub fn parse_regional_id(regional_id: &str) -> Result<(Region, String)> {
    let (locality, id) = parse_localized_id(regional_id)?;
    let region = Region::parse(locality)?;
    Ok((region, id.to_string()))
}

/// Build the Terraform ID of a zoned resource
pub fn new_zoned_id(zone: &Zone, id: &str) -> String {
    format!("{}/{}", zone, id)
}

/// Build the Terraform ID of a regional resource
pub fn new_regional_id(region: &Region, id: &str) -> String {
    format!("{}/{}", region, id)
}
