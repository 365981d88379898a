//! Retro-Bit adapter driver.
//!
//! Binds the adapters in [`DEVICE_TABLE`], tags dual-port units with
//! [`HidQuirks::MULTI_INPUT`] and fixes the d-pad byte of every report before
//! the host's generic decoder sees it.

use crate::device_id::{DEVICE_TABLE, HidDeviceId};
use crate::driver::{DeviceContext, HidDriver, RawEventOutcome, ReportKind};
use crate::error::{BindError, BindResult};
use crate::host::HidHost;
use crate::quirks::ConnectMask;
use retrobit_hid_protocol::{Normalized, ReportView, normalize_report};
use tracing::{debug, error, trace};

/// Name the driver registers under.
pub const DRIVER_NAME: &str = "atari";

#[derive(Debug, Clone, Copy, Default)]
pub struct RetrobitDriver;

impl RetrobitDriver {
    pub fn new() -> Self {
        Self
    }
}

impl HidDriver for RetrobitDriver {
    fn name(&self) -> &'static str {
        DRIVER_NAME
    }

    fn id_table(&self) -> &'static [HidDeviceId] {
        &DEVICE_TABLE
    }

    fn probe(
        &self,
        host: &mut dyn HidHost,
        id: &'static HidDeviceId,
    ) -> BindResult<DeviceContext> {
        debug!(
            "{}: probing VID=0x{:04X} PID=0x{:04X} model={:?}",
            host.name(),
            id.vendor_id,
            id.product_id,
            id.model()
        );

        let previous = host.quirks();
        let quirks = previous | id.driver_data;
        host.set_quirks(quirks);

        if let Err(err) = host.parse() {
            error!("{}: parse failed: {err}", host.name());
            host.set_quirks(previous);
            return Err(BindError::Parse(err));
        }

        if let Err(err) = host.hw_start(ConnectMask::DEFAULT) {
            error!("{}: hw start failed: {err}", host.name());
            host.set_quirks(previous);
            return Err(BindError::HwStart(err));
        }

        let ctx = DeviceContext::new(id, quirks);
        debug!(
            "{}: bound, multi_input={}",
            host.name(),
            ctx.is_multi_input()
        );
        Ok(ctx)
    }

    fn remove(&self, host: &mut dyn HidHost, ctx: DeviceContext) {
        host.hw_stop();
        debug!(
            "{}: removed VID=0x{:04X} PID=0x{:04X}",
            host.name(),
            ctx.id().vendor_id,
            ctx.id().product_id
        );
    }

    fn raw_event(
        &self,
        ctx: &DeviceContext,
        kind: ReportKind,
        data: &mut [u8],
    ) -> RawEventOutcome {
        let before = match ReportView::parse(data, ctx.port_layout()) {
            Ok(view) => view,
            Err(err) => {
                trace!("{kind:?} report skipped: {err}");
                return RawEventOutcome::Continue;
            }
        };
        match normalize_report(data, ctx.is_multi_input()) {
            Normalized::Rewritten { after, .. } => {
                let fixed = ReportView {
                    dpad: after,
                    ..before
                };
                trace!("{kind:?} report ({} bytes): {before} -> {fixed}", data.len());
            }
            Normalized::Unchanged | Normalized::Skipped => {
                trace!("{kind:?} report ({} bytes): {before} unchanged", data.len());
            }
        }
        RawEventOutcome::Continue
    }
}
