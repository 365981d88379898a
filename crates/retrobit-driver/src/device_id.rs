//! Exact-match device table.
//!
//! The host consults [`HidDriver::id_table`](crate::HidDriver::id_table)
//! before binding; a device reaches `probe` only when its VID/PID appear
//! here verbatim.

use crate::quirks::HidQuirks;
use retrobit_hid_protocol::{PRODUCT_ATARI, PRODUCT_NES, PRODUCT_SNES, RetrobitModel, VENDOR_ID};
use serde::Serialize;

/// One entry of a driver's device table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct HidDeviceId {
    pub vendor_id: u16,
    pub product_id: u16,
    /// Quirks applied to the device when it binds.
    pub driver_data: HidQuirks,
}

impl HidDeviceId {
    /// A USB device entry with no driver data.
    pub const fn usb(vendor_id: u16, product_id: u16) -> Self {
        Self {
            vendor_id,
            product_id,
            driver_data: HidQuirks::empty(),
        }
    }

    pub const fn with_driver_data(mut self, driver_data: HidQuirks) -> Self {
        self.driver_data = driver_data;
        self
    }

    pub fn matches(&self, vendor_id: u16, product_id: u16) -> bool {
        self.vendor_id == vendor_id && self.product_id == product_id
    }

    pub fn is_multi_input(&self) -> bool {
        self.driver_data.contains(HidQuirks::MULTI_INPUT)
    }

    pub fn model(&self) -> Option<RetrobitModel> {
        if self.vendor_id != VENDOR_ID {
            return None;
        }
        RetrobitModel::from_pid(self.product_id)
    }
}

/// Retro-Bit adapters handled by [`RetrobitDriver`](crate::RetrobitDriver).
pub static DEVICE_TABLE: [HidDeviceId; 3] = [
    HidDeviceId::usb(VENDOR_ID, PRODUCT_ATARI).with_driver_data(HidQuirks::MULTI_INPUT),
    HidDeviceId::usb(VENDOR_ID, PRODUCT_SNES).with_driver_data(HidQuirks::MULTI_INPUT),
    HidDeviceId::usb(VENDOR_ID, PRODUCT_NES),
];

/// Find the entry of `table` matching the VID/PID pair exactly.
pub fn match_device(
    table: &'static [HidDeviceId],
    vendor_id: u16,
    product_id: u16,
) -> Option<&'static HidDeviceId> {
    table.iter().find(|id| id.matches(vendor_id, product_id))
}
