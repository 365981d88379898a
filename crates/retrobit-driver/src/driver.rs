//! Driver lifecycle interface invoked by the host framework.

use crate::device_id::HidDeviceId;
use crate::error::BindResult;
use crate::host::HidHost;
use crate::quirks::HidQuirks;
use retrobit_hid_protocol::PortLayout;

/// HID report type tag passed through from the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportKind {
    Input,
    Output,
    Feature,
}

/// What the host should do with a report after `raw_event`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawEventOutcome {
    /// Continue with default decoding of the (possibly rewritten) report.
    Continue,
    /// The driver fully handled the report; skip default decoding.
    ///
    /// [`RetrobitDriver`](crate::RetrobitDriver) never returns this: its
    /// reports always go on to default decoding.
    Consumed,
}

/// Per-device state created by a successful `probe`.
///
/// Stored by the host alongside its device handle and handed back on every
/// report and on `remove`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceContext {
    id: &'static HidDeviceId,
    quirks: HidQuirks,
}

impl DeviceContext {
    pub fn new(id: &'static HidDeviceId, quirks: HidQuirks) -> Self {
        Self { id, quirks }
    }

    /// The table entry the device bound through.
    pub fn id(&self) -> &'static HidDeviceId {
        self.id
    }

    pub fn quirks(&self) -> HidQuirks {
        self.quirks
    }

    pub fn is_multi_input(&self) -> bool {
        self.quirks.contains(HidQuirks::MULTI_INPUT)
    }

    /// Report layout implied by the quirks attached at bind time.
    pub fn port_layout(&self) -> PortLayout {
        if self.is_multi_input() {
            PortLayout::DualPort
        } else {
            PortLayout::SinglePort
        }
    }
}

/// A HID driver as the host framework sees it.
pub trait HidDriver: Send + Sync {
    fn name(&self) -> &'static str;

    /// Devices this driver binds to. Matching is exact on VID/PID.
    fn id_table(&self) -> &'static [HidDeviceId];

    /// Bind to a device the host matched against [`id_table`](Self::id_table).
    ///
    /// # Errors
    /// Returns the host failure that stopped the bind; the device is left
    /// unbound.
    fn probe(
        &self,
        host: &mut dyn HidHost,
        id: &'static HidDeviceId,
    ) -> BindResult<DeviceContext>;

    /// Unbind a device. Consumes its context.
    fn remove(&self, host: &mut dyn HidHost, ctx: DeviceContext);

    /// Pre-process one raw report before the host decodes it.
    fn raw_event(
        &self,
        ctx: &DeviceContext,
        kind: ReportKind,
        data: &mut [u8],
    ) -> RawEventOutcome;
}
