// src/common/config.rs

use super::registers::{Register, CONFIG_DLPF_CFG_1, FS_SEL_0};

// === Fixed operating point set at probe time ===

/// Output data rate with the DLPF enabled and SMPLRT_DIV at its reset value.
pub const SAMPLE_RATE_HZ: u16 = 1000;
/// Accelerometer LSB per g at ±2 g (datasheet: 16384, the C driver uses 16383).
pub const ACCEL_SCALE: u16 = 16383;
/// Gyroscope LSB per °/s at ±250 °/s.
pub const GYRO_SCALE: u16 = 131;

// === Platform binding ===
// The host glue that registers the device uses these; the driver itself never does.

/// Name the bus driver registers under.
pub const DRIVER_NAME: &str = "gl_mpu6050";
/// Device names this driver binds to.
pub const ID_TABLE: &[&str] = &[DRIVER_NAME];
/// Name of the readout device node.
pub const DEVICE_NAME: &str = "imu_rt";
/// Device class the node is created under.
pub const CLASS_NAME: &str = "mpu6050";
/// Permission bits suggested for the device node (read-only for owner and group).
pub const DEVICE_MODE: u32 = 0o440;

/// Returns true if a bus device named `name` should be probed by this driver.
pub fn matches_binding(name: &str) -> bool {
    ID_TABLE.contains(&name)
}

/// One single-byte register write.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RegWrite {
    pub reg: Register,
    pub value: u8,
}

impl RegWrite {
    pub const fn new(reg: Register, value: u8) -> Self {
        RegWrite { reg, value }
    }
}

/// Number of writes in [`CONFIG_SEQUENCE`].
pub const CONFIG_WRITES: usize = 9;

/// Writes issued by probe, in order. The power management registers go last
/// so the device only wakes once everything else is set.
pub const CONFIG_SEQUENCE: [RegWrite; CONFIG_WRITES] = [
    RegWrite::new(Register::Config, CONFIG_DLPF_CFG_1),
    RegWrite::new(Register::GyroConfig, FS_SEL_0),
    RegWrite::new(Register::AccelConfig, FS_SEL_0),
    RegWrite::new(Register::FifoEn, 0),
    RegWrite::new(Register::IntPinCfg, 0),
    RegWrite::new(Register::IntEnable, 0),
    RegWrite::new(Register::UserCtrl, 0),
    RegWrite::new(Register::PwrMgmt1, 0),
    RegWrite::new(Register::PwrMgmt2, 0),
];
