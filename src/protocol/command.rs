//! Inbound command line parsing.
//!
//! The arbiter pushes commands as lines of exactly four hex characters: two
//! for the command class, two for the opcode. Anything else is discarded,
//! but every discard carries a reason so callers can log it or assert on it
//! instead of observing a silent no-op.
//!
//! # Error Handling
//!
//! [`CommandDiscard`] covers malformed lines as well as unrecognized
//! class/opcode pairs. None of these are fatal: the control loop logs the
//! reason and moves on to the next pass.

use super::constants::*;
use crate::state::DriveDirective;

/// A decoded arbiter command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Take this device out of play
    Disable,
    /// Put this device back in play
    Enable,
    /// Set the drive directive
    Drive(DriveDirective),
    /// Start the timed shoot pulse
    Shoot,
}

/// Why an inbound line was not applied.
#[derive(Debug, PartialEq, Eq)]
pub enum CommandDiscard {
    /// Line was not exactly 4 characters long
    WrongLength(usize),
    /// Line contained non-hex characters
    NotHex,
    /// Unrecognized command class byte
    UnknownClass(u8),
    /// Recognized class carrying an unrecognized opcode
    UnknownOpcode { class: u8, opcode: u8 },
}

impl std::fmt::Display for CommandDiscard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandDiscard::WrongLength(len) => write!(f, "expected 4 characters, got {}", len),
            CommandDiscard::NotHex => write!(f, "non-hex characters in command line"),
            CommandDiscard::UnknownClass(class) => write!(f, "unknown command class 0x{:02x}", class),
            CommandDiscard::UnknownOpcode { class, opcode } => write!(
                f,
                "unknown opcode 0x{:02x} for class 0x{:02x}",
                opcode, class
            ),
        }
    }
}

impl std::error::Error for CommandDiscard {}

/// Parse one inbound line (line break already stripped) into a [`Command`].
pub fn parse(line: &str) -> Result<Command, CommandDiscard> {
    if line.len() != 4 {
        return Err(CommandDiscard::WrongLength(line.len()));
    }

    let bytes = hex::decode(line).map_err(|_| CommandDiscard::NotHex)?;
    let (class, opcode) = (bytes[0], bytes[1]);

    match (class, opcode) {
        (CLASS_GAME, OP_DISABLE) => Ok(Command::Disable),
        (CLASS_GAME, OP_ENABLE) => Ok(Command::Enable),
        (CLASS_DRIVE, OP_FORWARD) => Ok(Command::Drive(DriveDirective::Forward)),
        (CLASS_DRIVE, OP_BACKWARD) => Ok(Command::Drive(DriveDirective::Backward)),
        (CLASS_DRIVE, OP_LEFT) => Ok(Command::Drive(DriveDirective::Left)),
        (CLASS_DRIVE, OP_RIGHT) => Ok(Command::Drive(DriveDirective::Right)),
        (CLASS_DRIVE, OP_STOP) => Ok(Command::Drive(DriveDirective::Stop)),
        (CLASS_SHOOT, OP_SHOOT) => Ok(Command::Shoot),
        (CLASS_GAME | CLASS_DRIVE | CLASS_SHOOT, opcode) => {
            Err(CommandDiscard::UnknownOpcode { class, opcode })
        }
        (class, _) => Err(CommandDiscard::UnknownClass(class)),
    }
}
