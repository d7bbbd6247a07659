//! Helpers shared by the resource flatteners
//!
//! Terraform state is a tree of generic values. A nested block is stored as
//! a list of attribute maps; `None` means the value is unknown and is kept
//! apart from a known empty list.

use serde_json::{Map, Value};
use std::net::IpAddr;

/// One flattened nested block
pub type AttributeMap = Map<String, Value>;

/// Optional IP address as a state value, `null` when absent
pub fn flatten_ip_ptr(ip: Option<&IpAddr>) -> Value {
    ip.map_or(Value::Null, |ip| Value::String(ip.to_string()))
}

/// Optional string as a state value, `null` when absent
pub fn flatten_string_ptr(s: Option<&str>) -> Value {
    s.map_or(Value::Null, |s| Value::String(s.to_string()))
}

/// Flatten a whole list with `f`, keeping the order and the absent case
pub fn flatten_list<T>(items: Option<&[T]>, f: impl Fn(&T) -> AttributeMap) -> Option<Vec<AttributeMap>> {
    items.map(|items| items.iter().map(f).collect())
}
