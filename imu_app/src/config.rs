use std::time::Duration;

pub const I2C_DEV: &str = "/dev/i2c-1";

pub const LSM6DS33_ADDR: u8 = 0x6B; // gyro+accel, SA0 high
pub const LIS3MDL_ADDR: u8 = 0x1E; // magnetometer, SA1 high

// 20 Hz console refresh
pub const REFRESH_INTERVAL: Duration = Duration::from_millis(50);
