//! Device state machine.
//!
//! Holds the enabled flag, the current drive directive and the shoot-pulse
//! expiry. Mutated only by commands arriving over the command channel; the
//! shoot pulse additionally self-expires once its deadline passes, checked
//! at the top of every control-loop pass. The actuation layer reads this
//! state through the accessors and never writes it.

use std::time::Instant;

use crate::protocol::Command;
use crate::protocol::constants::SHOOT_PULSE;

/// The car's commanded movement state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriveDirective {
    Forward,
    Backward,
    Left,
    Right,
    Stop,
}

#[derive(Debug)]
pub struct DeviceState {
    enabled: bool,
    drive: DriveDirective,
    shoot_until: Option<Instant>,
}

impl DeviceState {
    /// Devices start enabled, stopped, and not shooting.
    pub fn new() -> Self {
        Self {
            enabled: true,
            drive: DriveDirective::Stop,
            shoot_until: None,
        }
    }

    /// Apply one arbiter command.
    ///
    /// Disabling only clears `enabled`: an in-flight shoot pulse keeps
    /// running and the drive directive stays as last commanded.
    pub fn apply(&mut self, command: Command, now: Instant) {
        match command {
            Command::Disable => self.enabled = false,
            Command::Enable => self.enabled = true,
            Command::Drive(directive) => self.drive = directive,
            Command::Shoot => self.shoot_until = Some(now + SHOOT_PULSE),
        }
    }

    /// Clear the shoot pulse once its deadline has passed.
    ///
    /// Level-triggered: there is no timer behind this, it must be polled
    /// every pass.
    pub fn expire_shoot(&mut self, now: Instant) {
        if let Some(until) = self.shoot_until {
            if now >= until {
                self.shoot_until = None;
            }
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn drive(&self) -> DriveDirective {
        self.drive
    }

    pub fn is_shooting(&self, now: Instant) -> bool {
        self.shoot_until.is_some_and(|until| now < until)
    }
}
