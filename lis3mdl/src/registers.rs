macro_rules! registers {
    (
        $enum_name:ident, $slice_name:ident {
            $($name:ident = $val:expr),* $(,)?
        }
    ) => {
        #[repr(u8)]
        #[derive(Copy, Clone, Debug, PartialEq, Eq)]
        pub enum $enum_name {
            $($name = $val),*
        }

        pub const $slice_name: &[$enum_name] = &[
            $($enum_name::$name),*
        ];

        impl $enum_name {
            pub fn name(&self) -> &'static str {
                match self {
                    $($enum_name::$name => stringify!($name),)*
                }
            }
        }

        impl Register for $enum_name {
            fn addr(self) -> u8 {
                self as u8
            }
        }

        impl NamedRegister for $enum_name {
            fn name(&self) -> &'static str {
                self.name()
            }
        }

        impl From<$enum_name> for u8 {
            fn from(r: $enum_name) -> u8 {
                r as u8
            }
        }
    };
}

pub trait NamedRegister: Register {
    fn name(&self) -> &'static str;
}

pub trait Register: Copy {
    fn addr(self) -> u8;
}

pub struct RegConfig<R: Register> {
    pub reg: R,
    pub value: u8,
}

registers! {
    MagReg, MAG_REGS {
        OffsetXRegLM = 0x05,
        OffsetXRegHM = 0x06,
        OffsetYRegLM = 0x07,
        OffsetYRegHM = 0x08,
        OffsetZRegLM = 0x09,
        OffsetZRegHM = 0x0A,
        WhoAmI = 0x0F,
        CtrlReg1 = 0x20,
        CtrlReg2 = 0x21,
        CtrlReg3 = 0x22,
        CtrlReg4 = 0x23,
        CtrlReg5 = 0x24,
        StatusReg = 0x27,
        OutXL = 0x28,
        OutXH = 0x29,
        OutYL = 0x2A,
        OutYH = 0x2B,
        OutZL = 0x2C,
        OutZH = 0x2D,
        TempOutL = 0x2E,
        TempOutH = 0x2F,
        IntCfg = 0x30,
        IntSrc = 0x31,
        IntThsL = 0x32,
        IntThsH = 0x33,
    }
}

/* CTRL_REG1
 * B7   B6   B5   B4   B3   B2   B1   B0
 * TEMP OM1  OM0  DO2  DO1  DO0  FODR ST
*/
pub const MAG_TEMP_EN_LOC: u8 = 7;
pub const MAG_FAST_ODR_LOC: u8 = 1;
pub const MAG_ST_LOC: u8 = 0;

pub const MAG_ODR_LOC: u8 = 2;
pub const MAG_ODR_MASK: u8 = 0b111 << MAG_ODR_LOC;
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MagOdr {
    Hz0_625 = 0,
    Hz1_25  = 1,
    Hz2_5   = 2,
    Hz5     = 3,
    Hz10    = 4,
    Hz20    = 5,
    Hz40    = 6,
    Hz80    = 7,
}

// X/Y operating mode
pub const MAG_OM_LOC: u8 = 5;
pub const MAG_OM_MASK: u8 = 0b11 << MAG_OM_LOC;
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MagOM {
    LowPowerMode    = 0,
    MedPowerMode    = 1,
    HighPowerMode   = 2,
    UltraPowerMode  = 3,
}

/* CTRL_REG2
 * B7   B6   B5   B4   B3     B2       B1   B0
 * 0    FS1  FS0  0    REBOOT SOFT_RST 0    0
*/
pub const MAG_FS_LOC: u8 = 5;
pub const MAG_FS_MASK: u8 = 0b11 << MAG_FS_LOC;
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MagFullScale {
    G4  = 0,
    G8  = 1,
    G12 = 2,
    G16 = 3,
}

/* CTRL_REG3
 * B7   B6   B5   B4   B3   B2   B1   B0
 * 0    0    LP   0    0    SIM  MD1  MD0
*/
pub const MAG_MD_LOC: u8 = 0;
pub const MAG_MD_MASK: u8 = 0b11 << MAG_MD_LOC;
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MagConvMode {
    Continuous  = 0,
    SingleConv  = 1,
    PowerDown   = 3,
}

pub const MAG_OUT_START: MagReg = MagReg::OutXL;
