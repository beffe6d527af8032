// src/readout/mod.rs

//! On-demand text readout.
//!
//! Each read triggers a fresh `update()` and renders the result as
//! `MPU6050: ACC:[ax ay az]mg GYR:[gx gy gz]deg/s TEMP:[t]°C F:[f]Hz\n`.
//! Registering a device node that serves these records is left to the host.

mod record;
mod shared;

pub use record::{format_record, read_into, read_record, Record, RECORD_CAPACITY};
pub use shared::SharedMpu6050;
