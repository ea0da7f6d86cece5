pub mod command;
pub mod constants;
pub mod nec;
pub mod sighting;

// Re-exports for convenience
pub use command::{Command, CommandDiscard};
pub use nec::Beacon;
