//! Sighting report formatting.
//!
//! When a device decodes another device's beacon it tells the arbiter with a
//! single line: a role prefix, a colon, and the observed address as two
//! uppercase hex digits. Fire-and-forget; the arbiter never acknowledges.

use crate::config::Role;

/// Format the outbound line reporting an observed beacon address.
pub fn report_line(role: Role, address: u8) -> String {
    format!("{}:{:02X}\n", role.seen_prefix(), address)
}
