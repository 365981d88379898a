//! Innex Retro-Bit USB HID adapter protocol.
//!
//! Retro-Bit adapters present classic Atari, SNES and NES controllers as USB
//! HID gamepads. Their firmware encodes a lone "left" or lone "up" with a bit
//! pattern the generic HID decoder cannot represent; this crate holds the
//! device constants and the pure byte transform that fixes those reports.
//!
//! # VID / PID
//! - Vendor ID: `0x1292` (Innex)
//! - Atari: `0x4154` (dual-port), SNES: `0x5346` (dual-port), NES: `0x4643` (single-port)
//!
//! This crate is intentionally I/O-free and allocation-free.

#![deny(unsafe_op_in_unsafe_fn)]
#![deny(static_mut_refs)]
#![deny(clippy::unwrap_used)]

pub mod dpad;
pub mod ids;
pub mod report;
pub mod types;

pub use dpad::{
    DPAD_MASK, DpadDirection, LR_MASK, Normalized, UD_MASK, dpad_index, normalize_dpad,
    normalize_report,
};
pub use ids::{
    ALL_PRODUCTS, PRODUCT_ATARI, PRODUCT_NES, PRODUCT_SNES, VENDOR_ID, is_retrobit, product_name,
};
pub use report::{PLAYER_ONE, PLAYER_TWO, ReportView, ViewError};
pub use types::{PortLayout, RetrobitModel};

#[cfg(doctest)]
#[doc = include_str!("../README.md")]
struct ReadmeDoctests;
