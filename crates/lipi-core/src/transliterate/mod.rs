//! Single-fragment transliteration: detect the source, shift through the
//! pivot, project into the target.
//!
//! The public entry points never fail. Unknown codes, non-Indic text and
//! any fault inside a fragment all return the input unchanged.

pub mod batch;


use std::panic::{self, AssertUnwindSafe};

use tracing::{debug, debug_span, warn};

use crate::detect::{detect, detect_utf16, Detection};
use crate::error::TranslitError;
use crate::pivot::{from_pivot, from_pivot_utf16, to_pivot, to_pivot_utf16};
use crate::script::Script;
use crate::unicode::{is_blank, is_blank_utf16};

/// Text the host uses to check that the engine is alive.
pub const SELF_TEST_INPUT: &str = "ಕನ್ನಡ";

/// Convert `text` from `source` to `target`, surfacing conversion errors.
pub fn try_transliterate(
    text: &str,
    source: Detection,
    target: Script,
) -> Result<String, TranslitError> {
    let Detection::Script(source) = source else {
        return Ok(text.to_string());
    };
    if source == target {
        return Ok(text.to_string());
    }
    let pivot = to_pivot(text, source)?;
    from_pivot(&pivot, target)
}

/// Transliterate `text` into the script named by `target_code`.
pub fn transliterate(text: &str, target_code: &str) -> String {
    match Script::from_code(target_code) {
        Ok(target) => transliterate_to(text, target),
        Err(e) => {
            debug!(error = %e, "unknown target, text left unchanged");
            text.to_string()
        }
    }
}

pub fn transliterate_to(text: &str, target: Script) -> String {
    if is_blank(text) {
        return text.to_string();
    }
    let source = detect(text);
    convert_fragment(text, source, target)
}

/// Transliterate with a known source script, skipping detection.
pub fn transliterate_from(text: &str, source_code: &str, target_code: &str) -> String {
    if is_blank(text) {
        return text.to_string();
    }
    let (source, target) = match (Script::from_code(source_code), Script::from_code(target_code)) {
        (Ok(source), Ok(target)) => (source, target),
        (Err(e), _) | (_, Err(e)) => {
            debug!(error = %e, "unknown script, text left unchanged");
            return text.to_string();
        }
    };
    convert_fragment(text, Detection::Script(source), target)
}

/// UTF-16 variant of [`transliterate`] for hosts that hold text as code units.
pub fn transliterate_utf16(units: &[u16], target_code: &str) -> Vec<u16> {
    let Ok(target) = Script::from_code(target_code) else {
        return units.to_vec();
    };
    if is_blank_utf16(units) {
        return units.to_vec();
    }
    let Detection::Script(source) = detect_utf16(units) else {
        return units.to_vec();
    };
    if source == target {
        return units.to_vec();
    }
    fail_soft(
        || units.to_vec(),
        || Ok(from_pivot_utf16(&to_pivot_utf16(units, source), target)),
    )
}

/// Kannada sample converted to Devanagari.
pub fn self_test() -> String {
    transliterate_from(SELF_TEST_INPUT, "kan", "hin")
}

/// Convert one fragment, substituting the original text on any failure.
pub(crate) fn convert_fragment(text: &str, source: Detection, target: Script) -> String {
    let _span = debug_span!(
        "convert_fragment",
        source = source.code(),
        target = target.code(),
        len = text.len()
    )
    .entered();
    fail_soft(
        || text.to_string(),
        || try_transliterate(text, source, target),
    )
}

fn fail_soft<T, F>(original: impl FnOnce() -> T, convert: F) -> T
where
    F: FnOnce() -> Result<T, TranslitError>,
{
    match panic::catch_unwind(AssertUnwindSafe(convert)) {
        Ok(Ok(out)) => out,
        Ok(Err(e)) => {
            warn!(error = %e, "conversion failed, fragment left unchanged");
            original()
        }
        Err(_) => {
            warn!("conversion panicked, fragment left unchanged");
            original()
        }
    }
}
