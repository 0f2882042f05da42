//! 8-bit SAE J1850 CRC for end-to-end protected frames.

pub mod config;
pub mod crc;
pub mod payload;
pub mod selftest;

pub use crc::{
    CHECK, Crc8, CrcError, INITIAL_VALUE, MAGIC_CHECK, XOR_VALUE, calculate_crc8,
    calculate_crc8_default, verify_crc8,
};
pub use payload::{Payload, PayloadKind, calculate_crc8_payload};
