//! Beacon broadcast scheduling.

use std::time::{Duration, Instant};

use rand::Rng;

/// Decides when the device's own beacon goes out.
///
/// A beacon is due once more than `base_interval` plus a fresh random jitter
/// has elapsed since the last broadcast. The jitter is redrawn on every poll,
/// which bounds, but does not eliminate, the chance of two devices keying
/// the shared infrared channel at once. Disabled devices never broadcast.
pub struct BeaconScheduler {
    last_broadcast: Instant,
    base_interval: Duration,
    jitter_bound: Duration,
}

impl BeaconScheduler {
    pub fn new(base_interval: Duration, jitter_bound: Duration, now: Instant) -> Self {
        Self {
            last_broadcast: now,
            base_interval,
            jitter_bound,
        }
    }

    /// Check whether a beacon is due, resetting the broadcast clock when it
    /// is. A disabled device is never due and its clock is left alone.
    pub fn poll(&mut self, now: Instant, enabled: bool) -> bool {
        if !enabled {
            return false;
        }

        let jitter_ms = rand::rng().random_range(0..=self.jitter_bound.as_millis() as u64);
        if now.duration_since(self.last_broadcast) > self.base_interval + Duration::from_millis(jitter_ms) {
            self.last_broadcast = now;
            true
        } else {
            false
        }
    }
}
