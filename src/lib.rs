// src/lib.rs

#![cfg_attr(not(any(test, feature = "std")), no_std)] // no_std unless testing or std is requested

pub mod common;
pub mod driver;
pub mod readout;

// Re-export key types for convenience
pub use common::{BusTransport, DeviceAddr, Mpu6050Error, Register};
pub use driver::{ConfigReport, Measurement, Mpu6050};
pub use readout::{Record, SharedMpu6050};
