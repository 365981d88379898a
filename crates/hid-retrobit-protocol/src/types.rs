//! Retro-Bit adapter model classification and port layout.

use crate::ids::{PRODUCT_ATARI, PRODUCT_NES, PRODUCT_SNES};

/// How many controller ports an adapter multiplexes into one report stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PortLayout {
    /// One controller; reports start directly with the d-pad byte.
    SinglePort,
    /// Two controllers; every report is prefixed with a player-selector byte.
    DualPort,
}

impl PortLayout {
    /// Whether reports carry a leading player-selector byte.
    pub fn is_multi_input(self) -> bool {
        matches!(self, PortLayout::DualPort)
    }
}

/// Retro-Bit adapter model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RetrobitModel {
    /// Atari 2600 / 7800 joystick adapter.
    Atari,
    /// SNES / Super Famicom controller adapter.
    Snes,
    /// NES / Famicom controller adapter.
    Nes,
}

impl RetrobitModel {
    /// Construct a model from a USB product ID, returning `None` for unknown PIDs.
    pub fn from_pid(pid: u16) -> Option<Self> {
        match pid {
            PRODUCT_ATARI => Some(RetrobitModel::Atari),
            PRODUCT_SNES => Some(RetrobitModel::Snes),
            PRODUCT_NES => Some(RetrobitModel::Nes),
            _ => None,
        }
    }

    /// USB product ID for this model.
    pub fn product_id(self) -> u16 {
        match self {
            RetrobitModel::Atari => PRODUCT_ATARI,
            RetrobitModel::Snes => PRODUCT_SNES,
            RetrobitModel::Nes => PRODUCT_NES,
        }
    }

    /// Whether the adapter has one controller port or two.
    ///
    /// The Atari and SNES adapters multiplex two controllers; the NES
    /// adapter has a single port.
    pub fn port_layout(self) -> PortLayout {
        match self {
            RetrobitModel::Atari | RetrobitModel::Snes => PortLayout::DualPort,
            RetrobitModel::Nes => PortLayout::SinglePort,
        }
    }

    /// `true` for dual-port models, whose reports lead with a player selector.
    pub fn is_multi_input(self) -> bool {
        self.port_layout().is_multi_input()
    }

    /// Human-readable product name.
    pub fn name(self) -> &'static str {
        match self {
            RetrobitModel::Atari => "Retro-Bit Atari Controller Adapter",
            RetrobitModel::Snes => "Retro-Bit SNES Controller Adapter",
            RetrobitModel::Nes => "Retro-Bit NES Controller Adapter",
        }
    }
}
