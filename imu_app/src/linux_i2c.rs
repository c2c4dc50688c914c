use std::io;
use std::path::{Path, PathBuf};

use embedded_hal::i2c::{self, ErrorKind, NoAcknowledgeSource};
use i2cdev::core::I2CDevice;
use i2cdev::linux::LinuxI2CDevice;
use thiserror::Error;

// Bound at open only; every transaction selects its own device.
const OPEN_ADDRESS: u16 = 0x00;

/// Raw access to an i2c-dev style bus node.
///
/// `select` binds the following plain reads and writes to one 7-bit address.
/// `write` and `read` report how many bytes were transferred and leave the
/// short-count check to the caller.
pub trait BusNode {
    fn select(&mut self, address: u8) -> io::Result<()>;
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize>;
    fn read(&mut self, buffer: &mut [u8]) -> io::Result<usize>;
}

#[derive(Debug, Error)]
pub enum BusError {
    #[error("failed to open {}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to select I2C device {address:#04x}")]
    Select {
        address: u8,
        #[source]
        source: io::Error,
    },
    #[error("I2C write to {address:#04x} failed")]
    Write {
        address: u8,
        #[source]
        source: io::Error,
    },
    #[error("I2C write to {address:#04x} transferred {written} of {expected} bytes")]
    ShortWrite {
        address: u8,
        written: usize,
        expected: usize,
    },
    #[error("I2C read from {address:#04x} failed")]
    Read {
        address: u8,
        #[source]
        source: io::Error,
    },
    #[error("I2C read from {address:#04x} returned {read} of {expected} bytes")]
    ShortRead {
        address: u8,
        read: usize,
        expected: usize,
    },
}

impl i2c::Error for BusError {
    fn kind(&self) -> ErrorKind {
        match self {
            BusError::Write { .. } | BusError::Read { .. } => ErrorKind::Bus,
            BusError::ShortWrite { .. } | BusError::ShortRead { .. } => {
                ErrorKind::NoAcknowledge(NoAcknowledgeSource::Unknown)
            }
            BusError::Open { .. } | BusError::Select { .. } => ErrorKind::Other,
        }
    }
}

/// An open `/dev/i2c-N` node.
pub struct DevNode {
    dev: LinuxI2CDevice,
}

impl DevNode {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, BusError> {
        let path = path.as_ref();
        let dev = LinuxI2CDevice::new(path, OPEN_ADDRESS).map_err(|err| BusError::Open {
            path: path.to_path_buf(),
            source: io::Error::other(err),
        })?;
        Ok(Self { dev })
    }
}

impl BusNode for DevNode {
    fn select(&mut self, address: u8) -> io::Result<()> {
        self.dev
            .set_slave_address(address.into())
            .map_err(io::Error::other)
    }

    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        I2CDevice::write(&mut self.dev, bytes).map_err(io::Error::other)?;
        Ok(bytes.len())
    }

    fn read(&mut self, buffer: &mut [u8]) -> io::Result<usize> {
        I2CDevice::read(&mut self.dev, buffer).map_err(io::Error::other)?;
        Ok(buffer.len())
    }
}
