//! The device control loop.
//!
//! Single-threaded cooperative scheduling: one task runs one pass at a time,
//! each pass performing the same five steps in a fixed order. `DeviceState`
//! is only ever touched from inside this loop, so nothing needs a lock, and
//! a command applied in one pass is already visible to every check that runs
//! after it.

use std::time::{Duration, Instant};

use crate::channel::CommandChannel;
use crate::config::DeviceConfig;
use crate::ir::{IrEvent, IrTransceiver};
use crate::protocol::{command, nec, sighting};
use crate::scheduler::BeaconScheduler;
use crate::state::DeviceState;

/// Delay between control-loop passes.
const PASS_INTERVAL: Duration = Duration::from_millis(10);

pub struct Device<T: IrTransceiver> {
    config: DeviceConfig,
    state: DeviceState,
    scheduler: BeaconScheduler,
    channel: CommandChannel,
    ir: T,
}

impl<T: IrTransceiver> Device<T> {
    pub fn new(config: DeviceConfig, ir: T, now: Instant) -> Self {
        let scheduler =
            BeaconScheduler::new(config.beacon_interval(), config.beacon_jitter(), now);
        let channel = CommandChannel::new(config.arbiter.clone(), config.reconnect_delay());
        Self {
            config,
            state: DeviceState::new(),
            scheduler,
            channel,
            ir,
        }
    }

    /// Run the control loop for the life of the device.
    pub async fn run(mut self) {
        self.channel.connect().await;
        loop {
            self.pass(Instant::now()).await;
            tokio::time::sleep(PASS_INTERVAL).await;
        }
    }

    /// One cooperative pass.
    ///
    /// Nothing here blocks except a reconnect attempt, which stalls the
    /// whole pass for the configured retry delay.
    pub async fn pass(&mut self, now: Instant) {
        // 1. Expire the shoot pulse
        self.state.expire_shoot(now);

        // 2. Broadcast our own beacon
        if self.scheduler.poll(now, self.state.is_enabled()) {
            let code = nec::encode(self.config.ir_address, 0);
            if let Err(e) = self.ir.transmit(code) {
                eprintln!("IR transmit failed: {:?}", e);
            }
        }

        // 3. Report any beacon we saw
        match self.ir.poll_receive() {
            Some(IrEvent::Word(raw)) => {
                let beacon = nec::decode(raw);
                println!("Saw beacon from {:02X}", beacon.address);
                let line = sighting::report_line(self.config.role, beacon.address);
                self.channel.send_line(&line).await;
            }
            Some(IrEvent::Noise { len }) => {
                eprintln!("Ignoring non-NEC signal ({} bytes)", len);
            }
            None => {}
        }

        // 4. Apply one arbiter command
        if let Some(line) = self.channel.poll_line() {
            match command::parse(&line) {
                Ok(cmd) => {
                    println!("Arbiter command: {:?}", cmd);
                    self.state.apply(cmd, now);
                }
                Err(reason) => eprintln!("Discarding command line {:?}: {}", line, reason),
            }
        }

        // 5. Connection liveness
        self.channel.ensure_connected().await;
    }

    pub fn state(&self) -> &DeviceState {
        &self.state
    }
}
