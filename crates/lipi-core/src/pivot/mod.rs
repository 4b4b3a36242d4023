//! Conversion into and out of the Devanagari pivot.
//!
//! Every supported script lays its letters out at the same relative
//! positions as Devanagari, so most units move by the script's block offset.
//! The tables in [`exceptions`] cover the slots where that does not hold.
//!
//! Conversion works on UTF-16 code units. Each unit is mapped on its own;
//! toPivot may expand one unit into two, fromPivot never changes the length.

pub mod exceptions;


use tracing::debug_span;

use crate::error::TranslitError;
use crate::script::Script;
use crate::unicode::is_pivot_unit;

use exceptions::{find, fold_shared, source_exceptions, target_exceptions};

/// Map one source unit into the pivot. The second unit is a trailing mark.
pub fn to_pivot_unit(unit: u16, from: Script) -> (u16, Option<u16>) {
    if from == Script::PIVOT {
        return (unit, None);
    }
    let offset = from.offset();
    if let Some(e) = find(source_exceptions(from), unit) {
        return (e.to - offset, e.trailing);
    }
    if from.block().contains(unit) {
        let shifted = unit - offset;
        if is_pivot_unit(shifted) {
            return (shifted, None);
        }
    }
    (unit, None)
}

/// Map one pivot unit into the target script.
pub fn from_pivot_unit(unit: u16, to: Script) -> u16 {
    if to == Script::PIVOT || !is_pivot_unit(unit) {
        return unit;
    }
    let shifted = unit + to.offset();
    let corrected = find(target_exceptions(to), shifted).map_or(shifted, |e| e.to);
    fold_shared(corrected)
}

pub fn to_pivot_utf16(units: &[u16], from: Script) -> Vec<u16> {
    if from == Script::PIVOT {
        return units.to_vec();
    }
    let mut out = Vec::with_capacity(units.len());
    for &unit in units {
        let (first, trailing) = to_pivot_unit(unit, from);
        out.push(first);
        out.extend(trailing);
    }
    out
}

pub fn from_pivot_utf16(units: &[u16], to: Script) -> Vec<u16> {
    if to == Script::PIVOT {
        return units.to_vec();
    }
    units.iter().map(|&unit| from_pivot_unit(unit, to)).collect()
}

/// Shift `text` from `from` into Devanagari.
pub fn to_pivot(text: &str, from: Script) -> Result<String, TranslitError> {
    let _span = debug_span!("to_pivot", script = from.code(), len = text.len()).entered();
    if from == Script::PIVOT {
        return Ok(text.to_string());
    }
    map_bmp_units(text, |unit, out| {
        let (first, trailing) = to_pivot_unit(unit, from);
        out.push(first);
        out.extend(trailing);
    })
}

/// Project Devanagari `text` into `to`.
pub fn from_pivot(text: &str, to: Script) -> Result<String, TranslitError> {
    let _span = debug_span!("from_pivot", script = to.code(), len = text.len()).entered();
    if to == Script::PIVOT {
        return Ok(text.to_string());
    }
    map_bmp_units(text, |unit, out| out.push(from_pivot_unit(unit, to)))
}

/// Run `map` over every BMP unit of `text`. Supplementary characters are
/// copied through whole, matching the unit-wise passthrough of their
/// surrogate halves.
fn map_bmp_units<F>(text: &str, mut map: F) -> Result<String, TranslitError>
where
    F: FnMut(u16, &mut Vec<u16>),
{
    let mut out = String::with_capacity(text.len());
    let mut mapped = Vec::with_capacity(2);
    let mut index = 0;
    for c in text.chars() {
        let Ok(unit) = u16::try_from(u32::from(c)) else {
            out.push(c);
            index += c.len_utf16();
            continue;
        };
        mapped.clear();
        map(unit, &mut mapped);
        for &m in &mapped {
            let ch = char::from_u32(u32::from(m)).ok_or_else(|| {
                TranslitError::ConversionFailure {
                    index,
                    reason: format!("unit {unit} mapped to unpaired surrogate {m}"),
                }
            })?;
            out.push(ch);
        }
        index += 1;
    }
    Ok(out)
}
