#![cfg_attr(not(test), no_std)]

pub mod registers;
pub mod configs;

use embedded_hal::i2c::I2c;
use log::debug;

use registers::*;

pub use configs::CONFIG_STREAMING;

/// Trait alias to support both I2c<SevenBitAddress> and I2c without address mode.
pub trait CompatibleI2c<E>: I2c<Error = E> {}
impl<T, E> CompatibleI2c<E> for T where T: I2c<Error = E> {}

pub struct Lsm6ds33<I2C, E> {
    i2c: I2C,
    address: u8,
    _error: core::marker::PhantomData<E>,
}

#[derive(Debug, thiserror::Error)]
pub enum Error<E> {
    #[error("LSM6DS33 bus transfer failed")]
    I2c(#[source] E),
}

impl<I2C, E> Lsm6ds33<I2C, E>
where
    I2C: CompatibleI2c<E>,
    E: core::fmt::Debug,
{
    pub fn new(i2c: I2C, address: u8) -> Self {
        Self {
            i2c,
            address,
            _error: core::marker::PhantomData,
        }
    }

    pub fn address(&self) -> u8 {
        self.address
    }

    pub fn who_am_i(&mut self) -> Result<u8, Error<E>> {
        self.read_reg(MainReg::WhoAmI.into())
    }

    /// Single register read: one register-address write, one byte back.
    pub fn read_reg(&mut self, reg: u8) -> Result<u8, Error<E>> {
        let mut buf = [0u8];
        self.i2c
            .write_read(self.address, &[reg], &mut buf)
            .map_err(Error::I2c)?;
        Ok(buf[0])
    }

    pub fn write_reg(&mut self, reg: u8, val: u8) -> Result<(), Error<E>> {
        self.i2c
            .write(self.address, &[reg, val])
            .map_err(Error::I2c)?;
        Ok(())
    }

    /// Reads `low_reg` and `low_reg + 1` as two separate transactions and
    /// joins them little-endian. The pair is not read atomically.
    pub fn read_word_le(&mut self, low_reg: u8) -> Result<i16, Error<E>> {
        let lo = self.read_reg(low_reg)?;
        let hi = self.read_reg(low_reg.wrapping_add(1))?;
        Ok(i16::from_le_bytes([lo, hi]))
    }

    fn read_axes(&mut self, start: MainReg) -> Result<[i16; 3], Error<E>> {
        let base = start.addr();
        Ok([
            self.read_word_le(base)?,
            self.read_word_le(base + 2)?,
            self.read_word_le(base + 4)?,
        ])
    }

    /// Raw angular rate counts, X/Y/Z.
    pub fn read_gyro(&mut self) -> Result<[i16; 3], Error<E>> {
        self.read_axes(GYRO_OUT_START)
    }

    /// Raw linear acceleration counts, X/Y/Z.
    pub fn read_accel(&mut self) -> Result<[i16; 3], Error<E>> {
        self.read_axes(ACCEL_OUT_START)
    }

    /// Accepts any register type that implements the `Register` trait
    pub fn apply_config<R>(&mut self, config: &[RegConfig<R>]) -> Result<(), Error<E>>
    where
        R: Register + NamedRegister + Copy,
    {
        for entry in config {
            let addr = entry.reg.addr();
            debug!("write_reg {:<21}({:#04X}) = {:#04x}", entry.reg.name(), addr, entry.value);
            self.write_reg(addr, entry.value)?;
        }
        Ok(())
    }
}
