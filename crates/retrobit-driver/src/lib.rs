//! HID driver glue for Innex Retro-Bit adapters.
//!
//! The host HID framework drives everything: it matches devices against
//! [`RetrobitDriver`]'s device table, calls [`HidDriver::probe`] on attach,
//! [`HidDriver::raw_event`] for every report and [`HidDriver::remove`] on
//! detach. This crate supplies the driver side of that contract and a
//! [`HidHost`] trait describing the host operations the driver relies on.

#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::unwrap_used)]

pub mod device_id;
pub mod driver;
pub mod error;
pub mod host;
pub mod quirks;
pub mod retrobit;

pub use device_id::{DEVICE_TABLE, HidDeviceId, match_device};
pub use driver::{DeviceContext, HidDriver, RawEventOutcome, ReportKind};
pub use error::{BindError, BindResult};
pub use host::{HidHost, HostError, HostResult};
pub use quirks::{ConnectMask, HidQuirks};
pub use retrobit::{DRIVER_NAME, RetrobitDriver};

#[cfg(doctest)]
#[doc = include_str!("../README.md")]
struct ReadmeDoctests;
