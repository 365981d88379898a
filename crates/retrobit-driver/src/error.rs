//! Bind-time errors.

use crate::host::HostError;
use thiserror::Error;

/// Why a device failed to bind. Binding is not retried.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BindError {
    #[error("report descriptor parse failed: {0}")]
    Parse(HostError),

    #[error("hardware start failed: {0}")]
    HwStart(HostError),
}

impl BindError {
    /// The host status code behind the failure.
    pub fn code(&self) -> i32 {
        match self {
            BindError::Parse(err) | BindError::HwStart(err) => err.code,
        }
    }
}

pub type BindResult<T> = Result<T, BindError>;
