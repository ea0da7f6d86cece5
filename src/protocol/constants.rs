//! Wire protocol constants for the tag game.
//!
//! Inbound command lines are exactly four hex characters: a command class
//! byte followed by an opcode byte. Outbound sighting lines carry a
//! role-specific prefix and the observed infrared address.

use std::time::Duration;

/// Game control commands: disable/enable the device (Arbiter->Device)
pub const CLASS_GAME: u8 = 0x80;

/// Drive directive commands (Arbiter->Car)
pub const CLASS_DRIVE: u8 = 0x02;

/// Shoot pulse commands (Arbiter->Car)
pub const CLASS_SHOOT: u8 = 0x03;

/// Take the device out of play (class 0x80)
pub const OP_DISABLE: u8 = 0x01;

/// Put the device back in play (class 0x80)
pub const OP_ENABLE: u8 = 0x02;

/// Drive forward (class 0x02)
pub const OP_FORWARD: u8 = 0x01;

/// Drive backward (class 0x02)
pub const OP_BACKWARD: u8 = 0x02;

/// Turn left (class 0x02)
pub const OP_LEFT: u8 = 0x03;

/// Turn right (class 0x02)
pub const OP_RIGHT: u8 = 0x04;

/// Stop the motors (class 0x02)
pub const OP_STOP: u8 = 0x05;

/// Fire the shooter (class 0x03)
pub const OP_SHOOT: u8 = 0x01;

/// Sighting prefix used by the base station role (Device->Arbiter)
pub const PREFIX_BS_SEEN: &str = "BS_SEEN";

/// Sighting prefix used by the car role (Device->Arbiter)
pub const PREFIX_CAR_SEEN: &str = "CAR_SEEN";

/// How long the shooter stays active after a shoot command
pub const SHOOT_PULSE: Duration = Duration::from_millis(100);
