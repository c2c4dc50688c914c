use std::cell::RefCell;

use embedded_hal::i2c::{ErrorType, I2c, Operation, SevenBitAddress};

use crate::linux_i2c::{BusError, BusNode};

/// One bus node shared by several drivers.
///
/// The node keeps no notion of a current device, so every transaction starts
/// with a fresh device select. Transfers that move fewer bytes than asked are
/// errors.
///
/// Each operation is its own `write()` or `read()` on the node, so a write
/// followed by a read is two bus messages with a STOP between them, not the
/// repeated START that `I2c::transaction` promises. The LSM6DS33 and LIS3MDL
/// keep their register pointer across a STOP. Drivers that need a repeated
/// START must not be put on this bus.
pub struct SharedI2c<'a, N: BusNode> {
    bus: &'a RefCell<N>,
}

impl<'a, N: BusNode> SharedI2c<'a, N> {
    pub fn new(bus: &'a RefCell<N>) -> Self {
        Self { bus }
    }
}

// Required by the embedded-hal I2c trait
impl<N: BusNode> ErrorType for SharedI2c<'_, N> {
    type Error = BusError;
}

impl<N: BusNode> I2c for SharedI2c<'_, N> {
    fn transaction(
        &mut self,
        address: SevenBitAddress,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        let mut node = self.bus.borrow_mut();
        node.select(address)
            .map_err(|source| BusError::Select { address, source })?;

        for op in operations {
            match op {
                Operation::Write(bytes) => {
                    let expected = bytes.len();
                    let written = node
                        .write(bytes)
                        .map_err(|source| BusError::Write { address, source })?;
                    if written != expected {
                        return Err(BusError::ShortWrite { address, written, expected });
                    }
                }
                Operation::Read(buffer) => {
                    let expected = buffer.len();
                    let read = node
                        .read(buffer)
                        .map_err(|source| BusError::Read { address, source })?;
                    if read != expected {
                        return Err(BusError::ShortRead { address, read, expected });
                    }
                }
            }
        }
        Ok(())
    }
}
