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
    MainReg, MAIN_REGS {
        FuncCfgAccess   = 0x01,
        FifoCtrl1       = 0x06,
        FifoCtrl2       = 0x07,
        FifoCtrl3       = 0x08,
        FifoCtrl4       = 0x09,
        FifoCtrl5       = 0x0A,
        OrientCfgG      = 0x0B,
        Int1Ctrl        = 0x0D,
        Int2Ctrl        = 0x0E,
        WhoAmI          = 0x0F,
        Ctrl1Xl         = 0x10,
        Ctrl2G          = 0x11,
        Ctrl3C          = 0x12,
        Ctrl4C          = 0x13,
        Ctrl5C          = 0x14,
        Ctrl6C          = 0x15,
        Ctrl7G          = 0x16,
        Ctrl8Xl         = 0x17,
        Ctrl9Xl         = 0x18,
        Ctrl10C         = 0x19,
        WakeUpSrc       = 0x1B,
        TapSrc          = 0x1C,
        D6dSrc          = 0x1D,
        StatusReg       = 0x1E,
        OutTempL        = 0x20,
        OutTempH        = 0x21,
        OutxLG          = 0x22,
        OutxHG          = 0x23,
        OutyLG          = 0x24,
        OutyHG          = 0x25,
        OutzLG          = 0x26,
        OutzHG          = 0x27,
        OutxLXl         = 0x28,
        OutxHXl         = 0x29,
        OutyLXl         = 0x2A,
        OutyHXl         = 0x2B,
        OutzLXl         = 0x2C,
        OutzHXl         = 0x2D,
    }
}

/* CTRL1_XL
 * B7     B6     B5     B4     B3     B2     B1     B0
 * ODR_XL3 ODR_XL2 ODR_XL1 ODR_XL0 FS_XL1 FS_XL0 BW_XL1 BW_XL0
*/
pub const CTRL1_XL_ODR_LOC: u8 = 4;
pub const CTRL1_XL_FS_LOC: u8 = 2;
pub const CTRL1_XL_BW_LOC: u8 = 0;

/* CTRL2_G
 * B7     B6     B5     B4     B3     B2     B1     B0
 * ODR_G3 ODR_G2 ODR_G1 ODR_G0 FS_G1  FS_G0  FS_125 0
*/
pub const CTRL2_G_ODR_LOC: u8 = 4;
pub const CTRL2_G_FS_LOC: u8 = 2;
pub const CTRL2_G_FS_125_LOC: u8 = 1;

/// Output data rate, shared by the accelerometer and gyroscope blocks.
/// The gyroscope tops out at 1.66 kHz.
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Odr {
    PowerDown   = 0b0000,
    Hz12_5      = 0b0001,
    Hz26        = 0b0010,
    Hz52        = 0b0011,
    Hz104       = 0b0100,
    Hz208       = 0b0101,
    Hz416       = 0b0110,
    Hz833       = 0b0111,
    Hz1660      = 0b1000,
    Hz3330      = 0b1001,
    Hz6660      = 0b1010,
}

pub const CTRL1_XL_ODR_MASK: u8 = 0b1111 << CTRL1_XL_ODR_LOC;
pub const CTRL2_G_ODR_MASK: u8 = 0b1111 << CTRL2_G_ODR_LOC;

#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AccelFullScale {
    G2  = 0b00,
    G16 = 0b01,
    G4  = 0b10,
    G8  = 0b11,
}

pub const CTRL1_XL_FS_MASK: u8 = 0b11 << CTRL1_XL_FS_LOC;

/// Anti-aliasing filter bandwidth
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AccelBandwidth {
    Hz400 = 0b00,
    Hz200 = 0b01,
    Hz100 = 0b10,
    Hz50  = 0b11,
}

pub const CTRL1_XL_BW_MASK: u8 = 0b11 << CTRL1_XL_BW_LOC;

#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GyroFullScale {
    DPS245  = 0b00,
    DPS500  = 0b01,
    DPS1000 = 0b10,
    DPS2000 = 0b11,
}

pub const CTRL2_G_FS_MASK: u8 = 0b11 << CTRL2_G_FS_LOC;

// Gyro and accel output words: X, Y, Z little-endian pairs
pub const GYRO_OUT_START: MainReg = MainReg::OutxLG;
pub const ACCEL_OUT_START: MainReg = MainReg::OutxLXl;
