// src/common/mod.rs

// --- Declare all public modules within common ---
pub mod address;
pub mod config;
pub mod decode;
pub mod error;
pub mod hal_traits;
pub mod registers;

#[cfg(test)]
pub(crate) mod mock;

// --- Re-export key types/traits/functions for easier access ---

// From address.rs
pub use address::DeviceAddr;

// From config.rs
pub use config::{RegWrite, CONFIG_SEQUENCE};

// From decode.rs
pub use decode::{decode_accel_mg, decode_gyro_dps, decode_temperature, raw_from_word};

// From error.rs
pub use error::Mpu6050Error;

// From hal_traits.rs
pub use hal_traits::BusTransport;

// From registers.rs
pub use registers::{Register, WHO_AM_I_VALUE};

// --- Feature-gated re-exports ---

#[cfg(feature = "impl-generic-hal")]
pub use hal_traits::HalBus;
