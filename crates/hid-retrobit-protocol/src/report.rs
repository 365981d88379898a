//! Read-only view over a Retro-Bit input report.
//!
//! Used for diagnostics and trace output; the generic HID decoder remains
//! the consumer of the actual report bytes.

use crate::dpad::{DpadDirection, dpad_index};
use crate::types::PortLayout;

/// Player selector value for the first port of a dual-port adapter.
pub const PLAYER_ONE: u8 = 1;

/// Player selector value for the second port of a dual-port adapter.
pub const PLAYER_TWO: u8 = 2;

/// Borrowed, decoded view of one report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportView {
    /// Player selector (`1` or `2`) on dual-port adapters, `None` otherwise.
    pub player: Option<u8>,
    /// Raw d-pad byte.
    pub dpad: u8,
    /// Action-button bitmask, if the report carries one.
    pub buttons: Option<u8>,
}

/// Errors returned by [`ReportView::parse`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewError {
    /// The byte slice was too short to contain the d-pad byte.
    TooShort { got: usize, need: usize },
}

impl core::fmt::Display for ViewError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ViewError::TooShort { got, need } => {
                write!(f, "report too short: got {got} bytes, need {need}")
            }
        }
    }
}

impl core::error::Error for ViewError {}

impl ReportView {
    /// Split `data` into player selector, d-pad and button bytes for `layout`.
    ///
    /// Dual-port reports start with the player selector, so their d-pad byte
    /// is at index 1; single-port reports start with the d-pad byte. The
    /// button byte follows the d-pad byte when present.
    ///
    /// # Errors
    /// Returns [`ViewError::TooShort`] when `data` ends before the d-pad byte.
    ///
    /// # Examples
    /// ```
    /// use retrobit_hid_protocol::{DpadDirection, PortLayout, ReportView, ViewError};
    /// let view = ReportView::parse(&[2, 0x0C, 0x01], PortLayout::DualPort)?;
    /// assert_eq!(view.player, Some(2));
    /// assert_eq!(view.direction(), DpadDirection::Up);
    /// assert!(view.button(0));
    /// assert!(ReportView::parse(&[2], PortLayout::DualPort).is_err());
    /// # Ok::<(), ViewError>(())
    /// ```
    pub fn parse(data: &[u8], layout: PortLayout) -> Result<Self, ViewError> {
        let index = dpad_index(layout.is_multi_input());
        let Some(&dpad) = data.get(index) else {
            return Err(ViewError::TooShort {
                got: data.len(),
                need: index + 1,
            });
        };
        let player = if layout.is_multi_input() {
            data.first().copied()
        } else {
            None
        };
        Ok(Self {
            player,
            dpad,
            buttons: data.get(index + 1).copied(),
        })
    }

    /// Decoded direction of the d-pad byte.
    pub fn direction(&self) -> DpadDirection {
        DpadDirection::from_mask(self.dpad)
    }

    /// Whether action button `n` (0-based, 0..8) is pressed.
    pub fn button(&self, n: u8) -> bool {
        match (self.buttons, 1u8.checked_shl(u32::from(n))) {
            (Some(mask), Some(bit)) => mask & bit != 0,
            _ => false,
        }
    }
}

impl core::fmt::Display for ReportView {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if let Some(player) = self.player {
            write!(f, "player={player} ")?;
        }
        write!(f, "dpad={:#04x} ({:?})", self.dpad, self.direction())?;
        if let Some(buttons) = self.buttons {
            write!(f, " buttons={buttons:#010b}")?;
        }
        Ok(())
    }
}
