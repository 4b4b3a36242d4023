//! Code-unit classification for Brahmic text.

use crate::script::{Block, Script};

/// Devanagari units that have a counterpart in every other script.
pub const PIVOT_WINDOW: Block = Block {
    lower: 2304,
    upper: 2427,
};

/// Devanagari sign virama (halant), U+094D.
pub const VIRAMA: u16 = 2381;

/// `|`, used wherever a target script reuses the Devanagari danda.
pub const VERTICAL_BAR: u16 = 124;

pub fn is_pivot_unit(unit: u16) -> bool {
    PIVOT_WINDOW.contains(unit)
}

/// The script whose block holds `unit`, if any.
pub fn script_of_unit(unit: u16) -> Option<Script> {
    Script::DETECTION_ORDER
        .into_iter()
        .find(|script| script.block().contains(unit))
}

/// Empty or whitespace-only text, which is never converted.
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

pub fn is_blank_utf16(units: &[u16]) -> bool {
    char::decode_utf16(units.iter().copied()).all(|c| c.is_ok_and(char::is_whitespace))
}
