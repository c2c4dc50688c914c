use crate::registers::*;

pub const CONFIG_STREAMING: &[RegConfig<MagReg>] = &[
    RegConfig {
        reg: MagReg::CtrlReg1,
        value: (MagOM::UltraPowerMode as u8) << MAG_OM_LOC | (MagOdr::Hz5 as u8) << MAG_ODR_LOC, // 0x6C, temp sensor off
    },
    RegConfig {
        reg: MagReg::CtrlReg2,
        value: (MagFullScale::G4 as u8) << MAG_FS_LOC, // ±4 gauss
    },
    RegConfig {
        reg: MagReg::CtrlReg3,
        value: (MagConvMode::Continuous as u8) << MAG_MD_LOC, // Continuous-conversion mode
    },
];
