//! D-pad byte normalization.
//!
//! # Report layout
//! | Offset (single-port) | Offset (dual-port) | Field                         |
//! |----------------------|--------------------|-------------------------------|
//! | —                    | 0                  | player selector (1 or 2)      |
//! | 0                    | 1                  | d-pad bitmask                 |
//! | 1                    | 2                  | action buttons bitmask        |
//!
//! The d-pad byte packs two 2-bit fields: bits 0–1 carry left/right
//! (`1` = right, `2` = left) and bits 2–3 carry up/down (`4` = down,
//! `8` = up). Diagonals combine one value from each field.
//!
//! The generic HID decoder reads each field as a signed 2-bit axis, so the
//! firmware's lone "left" (`0b10`) and lone "up" (`0b10 << 2`) fall outside
//! the logical `-1..=1` range and get dropped. [`normalize_dpad`] rewrites
//! both to `0b11`, which the decoder reads as `-1`.

/// Mask of the left/right field (bits 0–1).
pub const LR_MASK: u8 = 0x03;

/// Mask of the up/down field (bits 2–3).
pub const UD_MASK: u8 = 0x0C;

/// Mask of every bit the normalizer may touch.
pub const DPAD_MASK: u8 = LR_MASK | UD_MASK;

/// Raw left/right value the firmware emits for a lone "left".
pub const LR_LONE_LEFT: u8 = 0x02;

/// Raw up/down value the firmware emits for a lone "up".
pub const UD_LONE_UP: u8 = 0x08;

/// Offset of the d-pad byte within a report.
///
/// Multi-input adapters prefix every report with a player-selector byte.
#[inline]
pub const fn dpad_index(multi_input: bool) -> usize {
    if multi_input { 1 } else { 0 }
}

/// Rewrite one d-pad byte into the canonical encoding.
///
/// Idempotent, and never touches bits outside [`DPAD_MASK`].
#[inline]
pub const fn normalize_dpad(byte: u8) -> u8 {
    let mut out = byte;
    if out & LR_MASK == LR_LONE_LEFT {
        out |= LR_MASK;
    }
    if out & UD_MASK == UD_LONE_UP {
        out |= UD_MASK;
    }
    out
}

/// What [`normalize_report`] did to a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Normalized {
    /// The d-pad byte was already canonical.
    Unchanged,
    /// The d-pad byte was rewritten.
    Rewritten { before: u8, after: u8 },
    /// The report is too short to contain a d-pad byte.
    Skipped,
}

/// Normalize the d-pad byte of `report` in place.
///
/// Only the byte at [`dpad_index`] is ever written. A report too short to
/// hold it is left alone.
pub fn normalize_report(report: &mut [u8], multi_input: bool) -> Normalized {
    let Some(byte) = report.get_mut(dpad_index(multi_input)) else {
        return Normalized::Skipped;
    };
    let before = *byte;
    let after = normalize_dpad(before);
    if after == before {
        return Normalized::Unchanged;
    }
    *byte = after;
    Normalized::Rewritten { before, after }
}

/// Eight-way d-pad direction as the generic decoder sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DpadDirection {
    /// No direction pressed (low nibble `0`).
    Neutral,
    /// Up only (`0x08` raw, `0x0C` normalized).
    Up,
    /// Up and right.
    UpRight,
    /// Right only (`0x01`).
    Right,
    /// Down and right.
    DownRight,
    /// Down only (`0x04`).
    Down,
    /// Down and left.
    DownLeft,
    /// Left only (`0x02` raw, `0x03` normalized).
    Left,
    /// Up and left.
    UpLeft,
}

impl DpadDirection {
    /// Decode the low nibble of a d-pad byte.
    ///
    /// Accepts both the raw firmware encoding and the normalized one, so
    /// `from_mask(normalize_dpad(b)) == from_mask(b)` for every `b`.
    pub fn from_mask(byte: u8) -> Self {
        let x = axis(byte & LR_MASK);
        let y = axis((byte & UD_MASK) >> 2);
        match (x, y) {
            (0, 0) => DpadDirection::Neutral,
            (0, -1) => DpadDirection::Up,
            (1, -1) => DpadDirection::UpRight,
            (1, 0) => DpadDirection::Right,
            (1, 1) => DpadDirection::DownRight,
            (0, 1) => DpadDirection::Down,
            (-1, 1) => DpadDirection::DownLeft,
            (-1, 0) => DpadDirection::Left,
            _ => DpadDirection::UpLeft,
        }
    }

    /// Hat-switch value: `None` when neutral, otherwise `0..=7` clockwise from Up.
    pub fn hat(self) -> Option<u8> {
        match self {
            DpadDirection::Neutral => None,
            DpadDirection::Up => Some(0),
            DpadDirection::UpRight => Some(1),
            DpadDirection::Right => Some(2),
            DpadDirection::DownRight => Some(3),
            DpadDirection::Down => Some(4),
            DpadDirection::DownLeft => Some(5),
            DpadDirection::Left => Some(6),
            DpadDirection::UpLeft => Some(7),
        }
    }

    /// `true` for the four two-axis directions.
    pub fn is_diagonal(self) -> bool {
        matches!(
            self,
            DpadDirection::UpRight
                | DpadDirection::DownRight
                | DpadDirection::DownLeft
                | DpadDirection::UpLeft
        )
    }
}

/// Two-bit field to axis value: `1` is positive, `2` and `3` are negative.
#[inline]
fn axis(field: u8) -> i8 {
    match field {
        0 => 0,
        1 => 1,
        _ => -1,
    }
}
