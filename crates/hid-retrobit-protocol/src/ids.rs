//! Innex Retro-Bit USB vendor and product ID constants.
//!
//! Innex ships a family of "Retro-Bit" USB adapters that expose classic
//! console controllers as USB HID gamepads. All of them enumerate under
//! VID `0x1292`.
//!
//! Sources:
//! - Linux kernel `hid-ids.h` (`USB_VENDOR_ID_INNEX = 0x1292`)
//! - Out-of-tree `hid-atari-retrobit` driver device table (all three PIDs)
//!
//! The product IDs are ASCII pairs: `0x4154` = `"AT"`, `0x5346` = `"SF"`
//! (Super Famicom), `0x4643` = `"FC"` (Famicom).

/// Innex USB Vendor ID.
pub const VENDOR_ID: u16 = 0x1292;

/// Atari 2600 / 7800 joystick adapter (two ports, multi-input).
pub const PRODUCT_ATARI: u16 = 0x4154;

/// SNES / Super Famicom controller adapter (two ports, multi-input).
pub const PRODUCT_SNES: u16 = 0x5346;

/// NES / Famicom controller adapter (one port).
pub const PRODUCT_NES: u16 = 0x4643;

/// All known product IDs, in device-table order.
pub const ALL_PRODUCTS: [u16; 3] = [PRODUCT_ATARI, PRODUCT_SNES, PRODUCT_NES];

/// Returns `true` if the VID/PID pair identifies a known Retro-Bit adapter.
pub fn is_retrobit(vid: u16, pid: u16) -> bool {
    vid == VENDOR_ID && matches!(pid, PRODUCT_ATARI | PRODUCT_SNES | PRODUCT_NES)
}

/// Returns the product name for a known Retro-Bit PID, or `None`.
pub fn product_name(pid: u16) -> Option<&'static str> {
    match pid {
        PRODUCT_ATARI => Some("Retro-Bit Atari Controller Adapter"),
        PRODUCT_SNES => Some("Retro-Bit SNES Controller Adapter"),
        PRODUCT_NES => Some("Retro-Bit NES Controller Adapter"),
        _ => None,
    }
}
