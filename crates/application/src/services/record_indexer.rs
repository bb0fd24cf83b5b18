use netbox_resolver_domain::{normalize_lookup_key, InventoryRecord, RecordOwner};
use std::net::Ipv4Addr;
use tracing::debug;

use crate::ports::NameIndex;

/// Build the name → addresses index used by the full-index refresh.
///
/// - non-IPv4 records are dropped, prefixes are stripped
/// - VM-owned records index under the VM name
/// - device-owned records index under the device name and, when it differs,
///   under the display name too
/// - owned records with a declared DNS name also index under that name
/// - records without an owner are skipped
///
/// Several records sharing a name accumulate in first-seen order; an address
/// appears at most once per name.
pub fn index_records(records: &[InventoryRecord]) -> NameIndex {
    let mut index = NameIndex::new();
    let mut skipped = 0usize;

    for record in records {
        let Some(address) = usable_address(record) else {
            skipped += 1;
            continue;
        };

        let keys = index_keys(record);
        if keys.is_empty() {
            debug!(address = %record.raw_address, "Record has no device or VM owner, skipping");
            skipped += 1;
            continue;
        }

        for key in keys {
            push_unique(index.entry(key.to_string()).or_default(), address);
        }
    }

    debug!(
        records = records.len(),
        names = index.len(),
        skipped,
        "Inventory records indexed"
    );

    index
}

/// Addresses of records returned by a targeted query, in response order.
///
/// The query already matched the requested key, so ownership is not required.
pub fn record_addresses(records: &[InventoryRecord]) -> Vec<Ipv4Addr> {
    let mut addresses = Vec::with_capacity(records.len());
    for record in records {
        if let Some(address) = usable_address(record) {
            push_unique(&mut addresses, address);
        }
    }
    addresses
}

/// Append `address` unless it is already present.
pub fn push_unique(addresses: &mut Vec<Ipv4Addr>, address: Ipv4Addr) {
    if !addresses.contains(&address) {
        addresses.push(address);
    }
}

fn usable_address(record: &InventoryRecord) -> Option<Ipv4Addr> {
    if !record.is_ipv4() {
        debug!(address = %record.raw_address, "Skipping non-IPv4 record");
        return None;
    }

    match record.host_address() {
        Ok(address) => Some(address),
        Err(e) => {
            debug!(error = %e, "Skipping record with unparsable address");
            None
        }
    }
}

fn index_keys(record: &InventoryRecord) -> Vec<&str> {
    let mut keys: Vec<&str> = Vec::with_capacity(3);

    match &record.owner {
        RecordOwner::VirtualMachine { name } => keys.push(name),
        RecordOwner::Device { name, display } => {
            keys.push(name);
            if let Some(display) = display {
                keys.push(display);
            }
        }
        RecordOwner::Unassigned => return keys,
    }

    if let Some(dns_name) = &record.dns_name {
        keys.push(dns_name);
    }

    let mut unique: Vec<&str> = Vec::with_capacity(keys.len());
    for key in keys.into_iter().map(normalize_lookup_key).filter(|k| !k.is_empty()) {
        if !unique.contains(&key) {
            unique.push(key);
        }
    }
    unique
}
