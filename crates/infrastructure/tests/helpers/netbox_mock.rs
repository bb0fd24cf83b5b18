#![allow(dead_code)]
use netbox_resolver_domain::ResolverSettings;
use serde_json::{json, Value};
use std::net::Ipv4Addr;
use std::time::Duration;
use wiremock::MockServer;

pub const TOKEN: &str = "mytoken";
pub const IP_ADDRESSES: &str = "/api/ipam/ip-addresses/";
pub const DEVICES: &str = "/api/dcim/devices/";

/// Resolver settings pointing at a mock inventory
pub fn settings_for(server: &MockServer, ttl: Duration) -> ResolverSettings {
    ResolverSettings::new(server.uri().parse().unwrap(), TOKEN, ttl)
        .with_request_timeout(Duration::from_secs(2))
}

/// Paginated list body as returned by the inventory
pub fn page(results: Vec<Value>, next: Option<String>) -> Value {
    json!({
        "count": results.len(),
        "next": next,
        "previous": null,
        "results": results,
    })
}

pub fn empty_page() -> Value {
    page(vec![], None)
}

/// IP address declaring a DNS name, not assigned to anything
pub fn named_ip(address: &str, dns_name: &str) -> Value {
    json!({
        "address": address,
        "family": {"value": 4, "label": "IPv4"},
        "dns_name": dns_name,
        "assigned_object": null,
    })
}

/// IP address on a virtual machine interface
pub fn vm_ip(address: &str, vm: &str) -> Value {
    json!({
        "address": address,
        "family": {"value": 4, "label": "IPv4"},
        "dns_name": "",
        "assigned_object_type": "virtualization.vminterface",
        "assigned_object": {"name": "eth0", "virtual_machine": {"name": vm}},
    })
}

/// IP address on a device interface
pub fn device_ip(address: &str, device: &str, display: &str) -> Value {
    json!({
        "address": address,
        "family": {"value": 4, "label": "IPv4"},
        "dns_name": "",
        "assigned_object_type": "dcim.interface",
        "assigned_object": {
            "name": "eth0",
            "device": {"name": device, "display": display}
        },
    })
}

/// Device list item with a primary IPv4
pub fn device(name: &str, primary_ip4: Option<&str>) -> Value {
    json!({
        "name": name,
        "display": name,
        "primary_ip4": primary_ip4.map(|address| json!({"address": address, "family": 4})),
    })
}

pub fn ip(s: &str) -> Ipv4Addr {
    s.parse().unwrap()
}
