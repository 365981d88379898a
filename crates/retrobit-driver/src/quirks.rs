//! Host HID flag sets shared between the driver and the host framework.

use bitflags::bitflags;
use serde::Serialize;

bitflags! {
    /// Per-device quirk flags understood by the host's generic HID pipeline.
    ///
    /// The bit values match the host's own quirk word, so a device table
    /// entry's `driver_data` can be OR-ed straight into the device.
    #[repr(transparent)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
    pub struct HidQuirks: u32 {
        /// Device multiplexes several controllers into one report stream,
        /// each report prefixed with a selector byte.
        const MULTI_INPUT = 1 << 6;
    }
}

bitflags! {
    /// Which host-side consumers `hw_start` should connect.
    #[repr(transparent)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ConnectMask: u32 {
        /// Translate reports into input events.
        const HIDINPUT = 0x01;
        /// Expose the raw report node.
        const HIDRAW   = 0x04;
        /// Expose the legacy hiddev node.
        const HIDDEV   = 0x08;
        /// Attach force feedback, if the device has any.
        const FF       = 0x20;

        const DEFAULT = Self::HIDINPUT.bits()
            | Self::HIDRAW.bits()
            | Self::HIDDEV.bits()
            | Self::FF.bits();
    }
}
