// src/common/decode.rs

//! Integer conversions from raw MPU6050 readings to physical units.
//!
//! Everything here is fixed-point on purpose: results must match the C
//! driver's output bit for bit, including its truncation.

/// Offset in raw counts: 36.53 °C * 340 LSB/°C, rounded.
pub const TEMP_OFFSET_RAW: i32 = 12420;
/// Temperature sensitivity in LSB per °C.
pub const TEMP_SENSITIVITY: i32 = 340;
/// Half the divisor, added before the truncating division to round.
pub const TEMP_ROUNDING_BIAS: i32 = TEMP_SENSITIVITY / 2;

/// Reinterprets a high-byte-first register word as a two's-complement reading.
#[inline]
pub const fn raw_from_word(word: u16) -> i16 {
    word as i16
}

/// Whole degrees Celsius: `(raw + 12420 + 170) / 340`, truncating.
///
/// Approximates `raw / 340 + 36.53`. Never overflows for any `i16` input.
#[inline]
pub const fn decode_temperature(raw: i16) -> i16 {
    ((raw as i32 + TEMP_OFFSET_RAW + TEMP_ROUNDING_BIAS) / TEMP_SENSITIVITY) as i16
}

/// Acceleration in milli-g. Widened to `i32` before the multiply.
///
/// `scale` must be non-zero.
#[inline]
pub const fn decode_accel_mg(raw: i16, scale: u16) -> i32 {
    (raw as i32) * 1000 / (scale as i32)
}

/// Angular rate in whole degrees per second, truncated toward zero.
///
/// `scale` must be non-zero.
#[inline]
pub const fn decode_gyro_dps(raw: i16, scale: u16) -> i16 {
    ((raw as i32) / (scale as i32)) as i16
}
