// src/readout/record.rs

use crate::common::{error::Mpu6050Error, hal_traits::BusTransport};
use crate::driver::{Measurement, Mpu6050};
use arrayvec::ArrayString;
use core::fmt::{self, Write};

/// Room for the longest possible record, with margin.
pub const RECORD_CAPACITY: usize = 100;

/// One formatted readout line.
pub type Record = ArrayString<RECORD_CAPACITY>;

/// `MPU6050: ACC:[ax ay az]mg GYR:[gx gy gz]deg/s TEMP:[t]°C F:[f]Hz\n`
impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [ax, ay, az] = self.accel_mg;
        let [gx, gy, gz] = self.gyro_dps;
        writeln!(
            f,
            "MPU6050: ACC:[{} {} {}]mg GYR:[{} {} {}]deg/s TEMP:[{}]°C F:[{}]Hz",
            ax, ay, az, gx, gy, gz, self.temperature_c, self.sample_rate_hz
        )
    }
}

/// Formats `measurement` into a fixed-size record.
pub fn format_record(measurement: &Measurement) -> Result<Record, fmt::Error> {
    let mut record = Record::new();
    write!(record, "{}", measurement)?;
    Ok(record)
}

/// Takes a fresh sample and formats it. Nothing is cached: every call is a
/// full bus transaction.
pub fn read_record<B: BusTransport>(driver: &mut Mpu6050<B>) -> Result<Record, Mpu6050Error<B::Error>> {
    driver.update()?;
    let measurement = driver.measurement().ok_or(Mpu6050Error::NoDevice)?;
    format_record(&measurement).map_err(|_| Mpu6050Error::FormatFailed)
}

/// Byte-oriented read: takes a fresh sample and copies the whole record into
/// `buf`, returning its length. There is no read offset; each call yields a
/// complete record.
pub fn read_into<B: BusTransport>(driver: &mut Mpu6050<B>, buf: &mut [u8]) -> Result<usize, Mpu6050Error<B::Error>> {
    let record = read_record(driver)?;
    let bytes = record.as_bytes();
    if buf.len() < bytes.len() {
        return Err(Mpu6050Error::BufferOverflow { needed: bytes.len(), got: buf.len() });
    }
    buf[..bytes.len()].copy_from_slice(bytes);
    Ok(bytes.len())
}
