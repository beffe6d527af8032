// src/common/registers.rs

//! MPU6050 register map.
//!
//! Addresses follow the MPU-6000/MPU-6050 Register Map and Descriptions,
//! revision 4.2. Output registers are listed by their high byte; the low byte
//! sits at the next address and is fetched by the same word read.

/// Value of WHO_AM_I on a genuine MPU6050 (bits 6..1 of the 7-bit address, AD0 ignored).
pub const WHO_AM_I_VALUE: u8 = 0x68;

/// CONFIG: DLPF_CFG field, bits 2..0.
pub const CONFIG_DLPF_CFG_MASK: u8 = 0b0000_0111;
/// DLPF setting 1: accel 184 Hz / gyro 188 Hz bandwidth, 1 kHz gyro output rate.
pub const CONFIG_DLPF_CFG_1: u8 = 0b0000_0001;

/// GYRO_CONFIG / ACCEL_CONFIG: FS_SEL / AFS_SEL field, bits 4..3.
pub const FS_SEL_MASK: u8 = 0b0001_1000;
/// Full-scale select 0: ±250 °/s for the gyro, ±2 g for the accelerometer.
pub const FS_SEL_0: u8 = 0b0000_0000;

/// PWR_MGMT_1: SLEEP bit. Cleared to wake the device.
pub const PWR_MGMT_1_SLEEP: u8 = 0b0100_0000;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Register {
    /// Sample rate divider
    SmplrtDiv = 0x19,
    /// External sync and digital low pass filter
    Config = 0x1A,
    /// Gyro self-test and full-scale range
    GyroConfig = 0x1B,
    /// Accel self-test and full-scale range
    AccelConfig = 0x1C,
    /// Which sensor outputs are written to the FIFO
    FifoEn = 0x23,
    /// INT pin / bypass configuration
    IntPinCfg = 0x37,
    /// Interrupt enable
    IntEnable = 0x38,
    AccelXoutH = 0x3B,
    AccelYoutH = 0x3D,
    AccelZoutH = 0x3F,
    TempOutH = 0x41,
    GyroXoutH = 0x43,
    GyroYoutH = 0x45,
    GyroZoutH = 0x47,
    /// FIFO, I2C master and signal path reset controls
    UserCtrl = 0x6A,
    /// Power mode and clock source
    PwrMgmt1 = 0x6B,
    /// Per-axis standby and low-power wake frequency
    PwrMgmt2 = 0x6C,
    /// Device identity, read-only
    WhoAmI = 0x75,
}

impl Register {
    #[inline]
    pub const fn addr(self) -> u8 {
        self as u8
    }

    /// Datasheet name, used in log output.
    pub const fn name(self) -> &'static str {
        match self {
            Register::SmplrtDiv => "SMPLRT_DIV",
            Register::Config => "CONFIG",
            Register::GyroConfig => "GYRO_CONFIG",
            Register::AccelConfig => "ACCEL_CONFIG",
            Register::FifoEn => "FIFO_EN",
            Register::IntPinCfg => "INT_PIN_CFG",
            Register::IntEnable => "INT_ENABLE",
            Register::AccelXoutH => "ACCEL_XOUT_H",
            Register::AccelYoutH => "ACCEL_YOUT_H",
            Register::AccelZoutH => "ACCEL_ZOUT_H",
            Register::TempOutH => "TEMP_OUT_H",
            Register::GyroXoutH => "GYRO_XOUT_H",
            Register::GyroYoutH => "GYRO_YOUT_H",
            Register::GyroZoutH => "GYRO_ZOUT_H",
            Register::UserCtrl => "USER_CTRL",
            Register::PwrMgmt1 => "PWR_MGMT_1",
            Register::PwrMgmt2 => "PWR_MGMT_2",
            Register::WhoAmI => "WHO_AM_I",
        }
    }
}

impl From<Register> for u8 {
    fn from(reg: Register) -> Self {
        reg.addr()
    }
}

/// Accelerometer output registers, X/Y/Z.
pub const ACCEL_OUT: [Register; 3] = [Register::AccelXoutH, Register::AccelYoutH, Register::AccelZoutH];
/// Gyroscope output registers, X/Y/Z.
pub const GYRO_OUT: [Register; 3] = [Register::GyroXoutH, Register::GyroYoutH, Register::GyroZoutH];
