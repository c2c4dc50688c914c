use std::cell::RefCell;

use lis3mdl::Lis3mdl;
use log::info;
use lsm6ds33::Lsm6ds33;
use thiserror::Error;

use crate::core_data_types::SampleFrame;
use crate::linux_i2c::{BusError, BusNode};
use crate::shared_i2c::SharedI2c;

#[derive(Debug, Error)]
pub enum HubError {
    #[error(transparent)]
    Imu(#[from] lsm6ds33::Error<BusError>),
    #[error(transparent)]
    Mag(#[from] lis3mdl::Error<BusError>),
}

/// WHO_AM_I values as read, never checked against the datasheet ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Identity {
    pub lsm6ds33: u8,
    pub lis3mdl: u8,
}

/// Gyro/accel and magnetometer sharing one bus.
pub struct SensorHub<'a, N: BusNode> {
    imu: Lsm6ds33<SharedI2c<'a, N>, BusError>,
    mag: Lis3mdl<SharedI2c<'a, N>, BusError>,
}

impl<'a, N: BusNode> SensorHub<'a, N> {
    pub fn new(bus: &'a RefCell<N>, imu_address: u8, mag_address: u8) -> Self {
        Self {
            imu: Lsm6ds33::new(SharedI2c::new(bus), imu_address),
            mag: Lis3mdl::new(SharedI2c::new(bus), mag_address),
        }
    }

    pub fn identify(&mut self) -> Result<Identity, HubError> {
        let lsm6ds33 = self.imu.who_am_i()?;
        let lis3mdl = self.mag.who_am_i()?;
        Ok(Identity { lsm6ds33, lis3mdl })
    }

    pub fn configure(&mut self) -> Result<(), HubError> {
        info!("CONFIG_STREAMING LSM6DS33 @ {:#04x}", self.imu.address());
        self.imu.apply_config(lsm6ds33::CONFIG_STREAMING)?;
        info!("CONFIG_STREAMING LIS3MDL @ {:#04x}", self.mag.address());
        self.mag.apply_config(lis3mdl::CONFIG_STREAMING)?;
        Ok(())
    }

    /// Nine words, gyro then accel then mag, 18 single-byte reads in total.
    pub fn read_frame(&mut self) -> Result<SampleFrame, HubError> {
        Ok(SampleFrame {
            gyro: self.imu.read_gyro()?.into(),
            accel: self.imu.read_accel()?.into(),
            mag: self.mag.read_mag()?.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_data_types::ThreeAxes;
    use crate::sim_bus::{Event, SimBus};

    const IMU: u8 = 0x6B;
    const MAG: u8 = 0x1E;

    fn hub(bus: &RefCell<SimBus>) -> SensorHub<'_, SimBus> {
        SensorHub::new(bus, IMU, MAG)
    }

    #[test]
    fn identify_then_configure_issues_documented_sequence() {
        let bus = RefCell::new(SimBus::new().with_reg(IMU, 0x0F, 0x69).with_reg(MAG, 0x0F, 0x3D));
        let mut hub = hub(&bus);

        let id = hub.identify().unwrap();
        hub.configure().unwrap();

        assert_eq!(id, Identity { lsm6ds33: 0x69, lis3mdl: 0x3D });
        let bus = bus.borrow();
        assert_eq!(
            bus.events[..6],
            [
                Event::Select(IMU),
                Event::Write(IMU, vec![0x0F]),
                Event::Read(IMU, 1),
                Event::Select(MAG),
                Event::Write(MAG, vec![0x0F]),
                Event::Read(MAG, 1),
            ]
        );
        assert_eq!(
            bus.register_writes(),
            vec![
                (IMU, 0x10, 0x20),
                (IMU, 0x11, 0x24),
                (MAG, 0x20, 0x6C),
                (MAG, 0x21, 0x00),
                (MAG, 0x22, 0x00),
            ]
        );
        // no read-back after configuration
        assert_eq!(bus.events.len(), 6 + 5 * 2);
    }

    #[test]
    fn identify_does_not_validate() {
        let bus = RefCell::new(SimBus::new().with_reg(IMU, 0x0F, 0x00).with_reg(MAG, 0x0F, 0xFF));
        let id = hub(&bus).identify().unwrap();
        assert_eq!(id, Identity { lsm6ds33: 0x00, lis3mdl: 0xFF });
    }

    #[test]
    fn short_write_aborts_configuration() {
        let bus = RefCell::new(SimBus::new().short_write_at(MAG, 0x21));
        let mut hub = hub(&bus);

        let err = hub.configure().unwrap_err();

        assert!(matches!(
            err,
            HubError::Mag(lis3mdl::Error::I2c(BusError::ShortWrite { address: MAG, written: 1, expected: 2 }))
        ));
        let bus = bus.borrow();
        assert_eq!(bus.events.last(), Some(&Event::Write(MAG, vec![0x21, 0x00])));
        assert_eq!(bus.reg(MAG, 0x22), 0);
        assert!(!bus.events.contains(&Event::Write(MAG, vec![0x22, 0x00])));
    }

    #[test]
    fn frame_is_eighteen_selected_single_byte_reads() {
        let bus = RefCell::new(SimBus::new());
        let mut hub = hub(&bus);

        hub.read_frame().unwrap();

        let bus = bus.borrow();
        assert_eq!(bus.events.len(), 18 * 3);
        let expected: Vec<(u8, u8)> = (0x22..=0x2D)
            .map(|reg| (IMU, reg))
            .chain((0x28..=0x2D).map(|reg| (MAG, reg)))
            .collect();
        for (chunk, &(address, reg)) in bus.events.chunks(3).zip(&expected) {
            assert_eq!(
                chunk,
                [Event::Select(address), Event::Write(address, vec![reg]), Event::Read(address, 1)]
            );
        }
    }

    #[test]
    fn frame_words_land_in_their_axes() {
        let bus = RefCell::new(
            SimBus::new()
                .with_word(IMU, 0x22, 4660)
                .with_word(IMU, 0x24, -1)
                .with_word(IMU, 0x26, 3)
                .with_word(IMU, 0x28, -16384)
                .with_word(IMU, 0x2A, 5)
                .with_word(IMU, 0x2C, 16384)
                .with_word(MAG, 0x28, i16::MIN)
                .with_word(MAG, 0x2A, i16::MAX)
                .with_word(MAG, 0x2C, -7),
        );

        let frame = hub(&bus).read_frame().unwrap();

        assert_eq!(frame.gyro, ThreeAxes { x: 4660, y: -1, z: 3 });
        assert_eq!(frame.accel, ThreeAxes { x: -16384, y: 5, z: 16384 });
        assert_eq!(frame.mag, ThreeAxes { x: i16::MIN, y: i16::MAX, z: -7 });
    }

    #[test]
    fn read_failure_mid_frame_aborts_the_frame() {
        let bus = RefCell::new(SimBus::new().short_read_at(IMU, 0x2B));
        let err = hub(&bus).read_frame().unwrap_err();

        assert!(matches!(
            err,
            HubError::Imu(lsm6ds33::Error::I2c(BusError::ShortRead { address: IMU, .. }))
        ));
        // the magnetometer is never touched
        assert!(!bus.borrow().events.contains(&Event::Select(MAG)));
    }
}
