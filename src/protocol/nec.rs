//! NEC beacon codec.
//!
//! Beacons are 32-bit NEC words carrying an 8-bit address and an 8-bit
//! command, each paired with its bitwise complement:
//!
//! ```text
//! +---------+----------+---------+----------+
//! | address | ~address | command | ~command |
//! |  (u8)   |   (u8)   |  (u8)   |   (u8)   |
//! +---------+----------+---------+----------+
//! ```
//!
//! most-significant byte first. Decoding reads the address and command from
//! their bit positions and deliberately does not reject words whose
//! complement bytes are wrong; [`is_well_formed`] exposes that check
//! separately for receivers that want it.

use byteorder::{BigEndian, ByteOrder};

/// A decoded beacon: the sender's address and command byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Beacon {
    pub address: u8,
    pub command: u8,
}

/// Build the 32-bit NEC word for an address/command pair.
pub fn encode(address: u8, command: u8) -> u32 {
    (address as u32) << 24 | (!address as u32) << 16 | (command as u32) << 8 | !command as u32
}

/// Extract the address and command from a 32-bit NEC word.
///
/// Lenient: the complement bytes are ignored, so every word decodes.
pub fn decode(raw: u32) -> Beacon {
    Beacon {
        address: (raw >> 24) as u8,
        command: (raw >> 8) as u8,
    }
}

/// Check that both complement bytes match their counterparts.
pub fn is_well_formed(raw: u32) -> bool {
    let [address, address_inv, command, command_inv] = raw.to_be_bytes();
    address_inv == !address && command_inv == !command
}

/// Serialize a word into its 4-byte wire layout.
pub fn to_wire_bytes(raw: u32) -> [u8; 4] {
    let mut buf = [0u8; 4];
    BigEndian::write_u32(&mut buf, raw);
    buf
}

/// Read a word back from the first four bytes of its wire layout.
///
/// Callers must hand in at least four bytes.
pub fn from_wire_bytes(buf: &[u8]) -> u32 {
    BigEndian::read_u32(buf)
}
