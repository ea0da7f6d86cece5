use std::env;
use std::time::Instant;

use anyhow::{Context, bail};

mod channel;
mod config;
mod device;
mod ir;
mod protocol;
mod scheduler;
mod state;

use config::DeviceConfig;
use device::Device;
use ir::UdpIr;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().collect();

    let config = match args.get(1).map(String::as_str) {
        Some("car") => DeviceConfig::car(parse_address(&args)?),
        Some("base") => DeviceConfig::base_station(parse_address(&args)?),
        Some(path) => DeviceConfig::load(path)?,
        None => bail!("usage: irtag <config.json> | irtag car|base <ir-address>"),
    };

    println!(
        "Starting {:?} with IR address {:02X}",
        config.role, config.ir_address
    );

    let ir = UdpIr::bind(&config.ir_listen, &config.ir_peer)
        .await
        .context("binding infrared bench link")?;

    let device = Device::new(config, ir, Instant::now());
    device.run().await;

    Ok(())
}

fn parse_address(args: &[String]) -> anyhow::Result<u8> {
    let raw = args.get(2).context("missing <ir-address> argument")?;
    u8::from_str_radix(raw, 16).with_context(|| format!("bad IR address {:?}", raw))
}
