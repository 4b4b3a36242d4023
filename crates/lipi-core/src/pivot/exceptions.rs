//! Slots where a script's block layout departs from the Devanagari one.
//!
//! Source-side exceptions are keyed on the source unit and name a position in
//! the source block; the offset shift is applied on emission. Target-side
//! exceptions are keyed on the already shifted unit.

use crate::script::Script;
use crate::unicode::{VERTICAL_BAR, VIRAMA};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointException {
    pub from: u16,
    pub to: u16,
    /// Unit emitted right after `to`.
    pub trailing: Option<u16>,
}

const fn remap(from: u16, to: u16) -> PointException {
    PointException {
        from,
        to,
        trailing: None,
    }
}

const fn with_virama(from: u16, to: u16) -> PointException {
    PointException {
        from,
        to,
        trailing: Some(VIRAMA),
    }
}

// --- source -> pivot -------------------------------------------------------

/// Assamese ra/wa and yya fold onto the plain Bengali letters.
const BENGALI_SOURCE: &[PointException] = &[
    remap(2544, 2480),
    remap(2545, 2485),
    remap(2527, 2479),
];

/// Chillu letters have no single Devanagari unit: consonant + virama.
const MALAYALAM_SOURCE: &[PointException] = &[
    with_virama(3450, 3375),
    with_virama(3451, 3376),
    with_virama(3452, 3377),
    with_virama(3453, 3378),
    with_virama(3454, 3379),
    with_virama(3455, 3400),
];

// --- pivot -> target -------------------------------------------------------

const KANNADA_TARGET: &[PointException] = &[remap(3252, 3294)];

const ORIYA_TARGET: &[PointException] = &[
    remap(2886, 2887),
    remap(2890, 2891),
    remap(2868, 2866),
];

const GUJARATI_TARGET: &[PointException] = &[
    remap(2758, 2759),
    remap(2762, 2763),
    remap(2740, 2738),
];

// 2612 -> 1610 lands in the Arabic block. Kept as found in the mapping data.
const GURMUKHI_TARGET: &[PointException] = &[
    remap(2630, 2631),
    remap(2615, 2614),
    remap(2634, 2635),
    remap(2612, 1610),
];

const BENGALI_TARGET: &[PointException] = &[
    remap(2485, 2545),
    remap(2483, 2482),
    remap(2446, 2447),
    remap(2450, 2451),
    remap(2502, 2503),
    remap(2506, 2507),
    remap(2484, 2482),
];

/// Tamil writes one letter per place of articulation; aspirated and voiced
/// stops fold onto the plain one.
const TAMIL_TARGET: &[PointException] = &[
    remap(2966, 2965),
    remap(2967, 2965),
    remap(2968, 2965),
    remap(2971, 2970),
    remap(2973, 2972),
    remap(2981, 2980),
    remap(2982, 2980),
    remap(2983, 2980),
    remap(2987, 2986),
    remap(2988, 2986),
    remap(2989, 2986),
    remap(2976, 2975),
    remap(2977, 2975),
    remap(2979, 2975),
];

pub fn source_exceptions(script: Script) -> &'static [PointException] {
    match script {
        Script::Bengali => BENGALI_SOURCE,
        Script::Malayalam => MALAYALAM_SOURCE,
        _ => &[],
    }
}

pub fn target_exceptions(script: Script) -> &'static [PointException] {
    match script {
        Script::Kannada => KANNADA_TARGET,
        Script::Oriya => ORIYA_TARGET,
        Script::Gujarati => GUJARATI_TARGET,
        Script::Gurmukhi => GURMUKHI_TARGET,
        Script::Bengali => BENGALI_TARGET,
        Script::Tamil => TAMIL_TARGET,
        Script::Devanagari | Script::Telugu | Script::Malayalam => &[],
    }
}

pub(crate) fn find(table: &[PointException], unit: u16) -> Option<&PointException> {
    table.iter().find(|e| e.from == unit)
}

// --- shared target folds ---------------------------------------------------

/// Where the Devanagari danda lands in each target block.
pub const DANDA_SLOTS: [u16; 8] = [3300, 2532, 2660, 2788, 2916, 3044, 3172, 3428];

/// Where Devanagari yya lands; folded back 48 slots onto ya.
pub const YYA_SLOTS: [u16; 6] = [3295, 3423, 3167, 3039, 2783, 2655];

/// Where Devanagari nnna lands; folded back one slot onto na.
pub const NNNA_SLOTS: [u16; 7] = [2473, 2601, 2729, 2857, 3113, 3241, 3369];

/// Corrections shared by every target, applied after the target's own table.
pub fn fold_shared(unit: u16) -> u16 {
    if DANDA_SLOTS.contains(&unit) {
        VERTICAL_BAR
    } else if YYA_SLOTS.contains(&unit) {
        unit - 48
    } else if NNNA_SLOTS.contains(&unit) {
        unit - 1
    } else {
        unit
    }
}

/// Whether the shifted unit is touched by any target-side correction.
#[cfg(test)]
pub(crate) fn is_target_exception(script: Script, unit: u16) -> bool {
    find(target_exceptions(script), unit).is_some() || fold_shared(unit) != unit
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_have_unique_keys() {
        for script in Script::ALL {
            for table in [source_exceptions(script), target_exceptions(script)] {
                for (i, e) in table.iter().enumerate() {
                    assert!(
                        table[i + 1..].iter().all(|o| o.from != e.from),
                        "{script}: duplicate key {}",
                        e.from
                    );
                }
            }
        }
    }

    #[test]
    fn corrections_do_not_chain() {
        // A corrected unit is never itself a key of a later correction.
        for script in Script::ALL {
            let table = target_exceptions(script);
            for e in table {
                assert!(find(table, e.to).is_none(), "{script}: {}", e.from);
                assert_eq!(fold_shared(e.to), e.to, "{script}: {}", e.from);
            }
        }
    }

    #[test]
    fn source_keys_sit_in_source_block() {
        for script in Script::ALL {
            for e in source_exceptions(script) {
                assert!(script.block().contains(e.from), "{script}: {}", e.from);
            }
        }
    }

    #[test]
    fn shared_folds() {
        assert_eq!(fold_shared(3300), 124);
        assert_eq!(fold_shared(3295), 3247);
        assert_eq!(fold_shared(2473), 2472);
        assert_eq!(fold_shared(2325), 2325);
    }

    #[test]
    fn danda_slot_per_target() {
        let danda = 2404;
        for script in Script::ALL {
            if script == Script::PIVOT {
                continue;
            }
            assert!(DANDA_SLOTS.contains(&(danda + script.offset())), "{script}");
        }
    }

    #[test]
    fn gurmukhi_literal_mapping_is_pinned() {
        let e = find(target_exceptions(Script::Gurmukhi), 2612).unwrap();
        assert_eq!(e.to, 1610);
    }
}
