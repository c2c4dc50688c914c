use std::io::{self, Write};

use crate::core_data_types::{SampleFrame, ThreeAxes};
use crate::sensor_hub_control::Identity;

pub const HEADER: &str = "  Gx     Gy     Gz  |  Ax     Ay     Az  |  Mx     My     Mz";
pub const RULE: &str = "-----------------------------------------------------------------";

fn axes(a: &ThreeAxes) -> String {
    format!("{:>6} {:>6} {:>6}", a.x, a.y, a.z)
}

/// Fixed-width row matching `HEADER`, without line terminator.
pub fn format_frame(frame: &SampleFrame) -> String {
    format!("{} | {} | {}", axes(&frame.gyro), axes(&frame.accel), axes(&frame.mag))
}

/// Human-facing output. Sample rows are rewritten in place with `\r`.
pub struct Console<W: Write> {
    out: W,
    row_open: bool,
}

impl<W: Write> Console<W> {
    pub fn new(out: W) -> Self {
        Self { out, row_open: false }
    }

    pub fn identity(&mut self, id: &Identity) -> io::Result<()> {
        writeln!(self.out, "LSM6DS33 WHO_AM_I = {:#x}", id.lsm6ds33)?;
        writeln!(self.out, "LIS3MDL  WHO_AM_I = {:#x}", id.lis3mdl)?;
        writeln!(self.out)?;
        self.out.flush()
    }

    pub fn banner(&mut self) -> io::Result<()> {
        writeln!(self.out, "Configured sensors. Streaming raw data...")?;
        writeln!(self.out, "Press Ctrl+C to stop.")?;
        writeln!(self.out)?;
        writeln!(self.out, "{HEADER}")?;
        writeln!(self.out, "{RULE}")?;
        self.out.flush()
    }

    pub fn frame(&mut self, frame: &SampleFrame) -> io::Result<()> {
        write!(self.out, "{}\r", format_frame(frame))?;
        self.row_open = true;
        self.out.flush()
    }

    /// Moves past the last sample row so later output starts on a fresh line.
    pub fn finish(&mut self) -> io::Result<()> {
        if self.row_open {
            writeln!(self.out)?;
            self.row_open = false;
        }
        self.out.flush()
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}
