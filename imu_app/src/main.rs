mod config;
mod console;
mod core_data_types;
mod linux_i2c;
mod sensor_hub_control;
mod shared_i2c;

#[cfg(test)]
mod sim_bus;

use std::cell::RefCell;
use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use anyhow::Context;
use log::{info, trace, warn};

use crate::console::Console;
use crate::linux_i2c::{BusError, BusNode, DevNode};
use crate::sensor_hub_control::SensorHub;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let running = Arc::new(AtomicBool::new(true));
    {
        let running = running.clone();
        ctrlc::set_handler(move || running.store(false, Ordering::SeqCst))
            .context("installing Ctrl+C handler")?;
    }

    let mut console = Console::new(io::stdout().lock());
    let result = start(
        || DevNode::open(config::I2C_DEV),
        &mut console,
        &running,
        config::REFRESH_INTERVAL,
    );
    let frames = settle(result, console.finish())?;
    info!("stopped after {frames} frames, closed {}", config::I2C_DEV);
    Ok(())
}

/// Opens the bus, then hands it to `run`. The bus is released when this returns.
fn start<N: BusNode, W: Write>(
    open: impl FnOnce() -> Result<N, BusError>,
    console: &mut Console<W>,
    running: &AtomicBool,
    interval: Duration,
) -> anyhow::Result<u64> {
    let bus = RefCell::new(open()?);
    info!("opened {}", config::I2C_DEV);
    run(&bus, console, running, interval)
}

/// A stream error wins over a failure to finish the console line.
fn settle(result: anyhow::Result<u64>, finished: io::Result<()>) -> anyhow::Result<u64> {
    match (result, finished) {
        (Ok(frames), finished) => {
            finished.context("writing to stdout")?;
            Ok(frames)
        }
        (Err(err), Err(finish_err)) => {
            warn!("could not finish console line: {finish_err}");
            Err(err)
        }
        (Err(err), Ok(())) => Err(err),
    }
}

/// Identify, configure, then stream until `running` is cleared or the bus fails.
/// Returns the number of rows printed.
fn run<N: BusNode, W: Write>(
    bus: &RefCell<N>,
    console: &mut Console<W>,
    running: &AtomicBool,
    interval: Duration,
) -> anyhow::Result<u64> {
    let mut hub = SensorHub::new(bus, config::LSM6DS33_ADDR, config::LIS3MDL_ADDR);

    let id = hub.identify().context("reading WHO_AM_I")?;
    console.identity(&id).context("writing to stdout")?;

    hub.configure().context("configuring sensors")?;
    info!("configured sensors, streaming");
    console.banner().context("writing to stdout")?;

    stream(&mut hub, console, running, interval)
}

fn stream<N: BusNode, W: Write>(
    hub: &mut SensorHub<'_, N>,
    console: &mut Console<W>,
    running: &AtomicBool,
    interval: Duration,
) -> anyhow::Result<u64> {
    let mut frames = 0u64;
    while running.load(Ordering::SeqCst) {
        let frame = hub.read_frame().context("reading sample frame")?;
        trace!("frame {frames}: {frame:?}");
        console.frame(&frame).context("writing to stdout")?;
        frames += 1;
        thread::sleep(interval);
    }
    Ok(frames)
}
