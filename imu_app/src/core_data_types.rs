/// Raw sensor counts for one three-axis block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ThreeAxes {
    pub x: i16,
    pub y: i16,
    pub z: i16,
}

impl From<[i16; 3]> for ThreeAxes {
    fn from([x, y, z]: [i16; 3]) -> Self {
        Self { x, y, z }
    }
}

/// One pass over all nine output words.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SampleFrame {
    pub gyro: ThreeAxes,
    pub accel: ThreeAxes,
    pub mag: ThreeAxes,
}
