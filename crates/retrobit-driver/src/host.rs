//! The seam to the host HID framework.
//!
//! The host owns the device handle, parses the report descriptor, starts
//! and stops the hardware, and turns reports into input events. A driver
//! only ever sees the host through [`HidHost`].

use crate::quirks::{ConnectMask, HidQuirks};
use thiserror::Error;

/// A failure reported by the host framework.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message} (code {code})")]
pub struct HostError {
    /// Host status code, negative errno style.
    pub code: i32,
    pub message: String,
}

impl HostError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

pub type HostResult<T> = Result<T, HostError>;

/// Host-side view of one attached HID device.
pub trait HidHost {
    /// Name used in log lines.
    fn name(&self) -> &str;

    fn quirks(&self) -> HidQuirks;

    fn set_quirks(&mut self, quirks: HidQuirks);

    /// Parse the device's report descriptor.
    fn parse(&mut self) -> HostResult<()>;

    /// Start the hardware and connect the requested consumers.
    fn hw_start(&mut self, connect: ConnectMask) -> HostResult<()>;

    fn hw_stop(&mut self);
}

pub mod mock {
    use super::*;

    /// One call a driver made into the host.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum HostCall {
        Parse,
        HwStart(ConnectMask),
        HwStop,
    }

    /// Scriptable in-memory host for tests.
    #[derive(Debug, Clone, Default)]
    pub struct MockHidHost {
        name: String,
        quirks: HidQuirks,
        parse_error: Option<HostError>,
        hw_start_error: Option<HostError>,
        started: bool,
        calls: Vec<HostCall>,
    }

    impl MockHidHost {
        pub fn new(name: impl Into<String>) -> Self {
            Self {
                name: name.into(),
                ..Self::default()
            }
        }

        /// Make the next `parse` fail with `error`.
        pub fn fail_parse(mut self, error: HostError) -> Self {
            self.parse_error = Some(error);
            self
        }

        /// Make the next `hw_start` fail with `error`.
        pub fn fail_hw_start(mut self, error: HostError) -> Self {
            self.hw_start_error = Some(error);
            self
        }

        pub fn is_started(&self) -> bool {
            self.started
        }

        pub fn calls(&self) -> &[HostCall] {
            &self.calls
        }
    }

    impl HidHost for MockHidHost {
        fn name(&self) -> &str {
            &self.name
        }

        fn quirks(&self) -> HidQuirks {
            self.quirks
        }

        fn set_quirks(&mut self, quirks: HidQuirks) {
            self.quirks = quirks;
        }

        fn parse(&mut self) -> HostResult<()> {
            self.calls.push(HostCall::Parse);
            match self.parse_error.take() {
                Some(err) => Err(err),
                None => Ok(()),
            }
        }

        fn hw_start(&mut self, connect: ConnectMask) -> HostResult<()> {
            self.calls.push(HostCall::HwStart(connect));
            if let Some(err) = self.hw_start_error.take() {
                return Err(err);
            }
            self.started = true;
            Ok(())
        }

        fn hw_stop(&mut self) {
            self.calls.push(HostCall::HwStop);
            self.started = false;
        }
    }
}
