//! Device configuration.
//!
//! Everything the control loop needs is carried in one immutable
//! [`DeviceConfig`] handed to it at start; there are no module globals.
//! Configs load from a JSON file, or come from the per-role constructors
//! that match the two deployed parameter sets.

use std::time::Duration;

use anyhow::Context;
use serde::Deserialize;

use crate::protocol::constants::{PREFIX_BS_SEEN, PREFIX_CAR_SEEN};

/// Which role this device plays in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Car,
    BaseStation,
}

impl Role {
    /// The prefix this role tags its sighting reports with.
    pub fn seen_prefix(self) -> &'static str {
        match self {
            Role::Car => PREFIX_CAR_SEEN,
            Role::BaseStation => PREFIX_BS_SEEN,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DeviceConfig {
    pub role: Role,
    /// This device's 8-bit infrared address, unique within a game session
    pub ir_address: u8,
    /// Arbiter endpoint, `host:port`
    pub arbiter: String,
    /// Base beacon broadcast interval in milliseconds
    pub beacon_interval_ms: u64,
    /// Upper bound of the per-broadcast collision-avoidance jitter
    #[serde(default)]
    pub beacon_jitter_ms: u64,
    /// How long a failed connect attempt stalls the device
    pub reconnect_delay_ms: u64,
    /// Local bind address for the bench infrared link
    pub ir_listen: String,
    /// Broadcast peer address for the bench infrared link
    pub ir_peer: String,
}

impl DeviceConfig {
    /// The deployed car parameters: relaxed beacon cadence with jitter, and
    /// a long stall when the arbiter is away.
    pub fn car(ir_address: u8) -> Self {
        Self {
            role: Role::Car,
            ir_address,
            arbiter: "192.168.77.2:5000".to_string(),
            beacon_interval_ms: 500,
            beacon_jitter_ms: 100,
            reconnect_delay_ms: 5000,
            ir_listen: "0.0.0.0:7700".to_string(),
            ir_peer: "255.255.255.255:7700".to_string(),
        }
    }

    /// The deployed base station parameters: tight cadence, no jitter, and a
    /// short reconnect stall.
    pub fn base_station(ir_address: u8) -> Self {
        Self {
            role: Role::BaseStation,
            ir_address,
            arbiter: "192.168.77.2:5000".to_string(),
            beacon_interval_ms: 200,
            beacon_jitter_ms: 0,
            reconnect_delay_ms: 1000,
            ir_listen: "0.0.0.0:7700".to_string(),
            ir_peer: "255.255.255.255:7700".to_string(),
        }
    }

    pub fn load(path: &str) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path))?;
        let config = serde_json::from_str(&text)
            .with_context(|| format!("parsing config file {}", path))?;
        Ok(config)
    }

    pub fn beacon_interval(&self) -> Duration {
        Duration::from_millis(self.beacon_interval_ms)
    }

    pub fn beacon_jitter(&self) -> Duration {
        Duration::from_millis(self.beacon_jitter_ms)
    }

    pub fn reconnect_delay(&self) -> Duration {
        Duration::from_millis(self.reconnect_delay_ms)
    }
}
