use crate::registers::*;

// Accel 26 Hz / ±2g / 400 Hz AA filter, gyro 26 Hz / ±500 dps
pub const CONFIG_STREAMING: &[RegConfig<MainReg>] = &[
    RegConfig {
        reg: MainReg::Ctrl1Xl,
        value: (Odr::Hz26 as u8) << CTRL1_XL_ODR_LOC
            | (AccelFullScale::G2 as u8) << CTRL1_XL_FS_LOC
            | (AccelBandwidth::Hz400 as u8) << CTRL1_XL_BW_LOC, // 0x20
    },
    RegConfig {
        reg: MainReg::Ctrl2G,
        value: (Odr::Hz26 as u8) << CTRL2_G_ODR_LOC | (GyroFullScale::DPS500 as u8) << CTRL2_G_FS_LOC, // 0x24
    },
];
