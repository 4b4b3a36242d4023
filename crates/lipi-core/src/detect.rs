//! Source-script detection.
//!
//! A fragment is classified by the first unit that falls inside any known
//! block. There is no majority vote: mixed-script text converts as a whole
//! under the script of its first recognizable character.

use std::fmt;

use crate::script::Script;
use crate::unicode::script_of_unit;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Detection {
    Script(Script),
    /// No unit of the fragment belongs to a supported block.
    NonIndic,
}

impl Detection {
    /// Language code reported for text that is left unchanged.
    pub const NON_INDIC_CODE: &'static str = "eng";

    pub fn code(self) -> &'static str {
        match self {
            Detection::Script(script) => script.code(),
            Detection::NonIndic => Self::NON_INDIC_CODE,
        }
    }

    pub fn script(self) -> Option<Script> {
        match self {
            Detection::Script(script) => Some(script),
            Detection::NonIndic => None,
        }
    }
}

impl fmt::Display for Detection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

pub fn detect(text: &str) -> Detection {
    detect_units(text.encode_utf16())
}

pub fn detect_utf16(units: &[u16]) -> Detection {
    detect_units(units.iter().copied())
}

fn detect_units(units: impl IntoIterator<Item = u16>) -> Detection {
    units
        .into_iter()
        .find_map(script_of_unit)
        .map_or(Detection::NonIndic, Detection::Script)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_each_script() {
        let samples = [
            ("हिन्दी", Script::Devanagari),
            ("বাংলা", Script::Bengali),
            ("ਪੰਜਾਬੀ", Script::Gurmukhi),
            ("ગુજરાતી", Script::Gujarati),
            ("ଓଡ଼ିଆ", Script::Oriya),
            ("தமிழ்", Script::Tamil),
            ("తెలుగు", Script::Telugu),
            ("ಕನ್ನಡ", Script::Kannada),
            ("മലയാളം", Script::Malayalam),
        ];
        for (text, script) in samples {
            assert_eq!(detect(text), Detection::Script(script), "{text}");
        }
    }

    #[test]
    fn non_indic_text() {
        assert_eq!(detect(""), Detection::NonIndic);
        assert_eq!(detect("   "), Detection::NonIndic);
        assert_eq!(detect("123"), Detection::NonIndic);
        assert_eq!(detect("Hello, world!"), Detection::NonIndic);
        assert_eq!(detect("日本語"), Detection::NonIndic);
        assert_eq!(detect("123").code(), "eng");
    }

    #[test]
    fn first_match_wins() {
        assert_eq!(detect("abc ಕನ್ನಡ বাংলা"), Detection::Script(Script::Kannada));
        assert_eq!(detect("বাংলা ಕನ್ನಡ"), Detection::Script(Script::Bengali));
    }

    #[test]
    fn shared_boundary_unit_reads_as_tamil() {
        assert_eq!(detect_utf16(&[2944]), Detection::Script(Script::Tamil));
    }

    #[test]
    fn detection_codes() {
        assert_eq!(detect("বাংলা").code(), "ben");
        assert_eq!(detect("বাংলা").to_string(), "ben");
        assert_eq!(detect("বাংলা").script(), Some(Script::Bengali));
        assert_eq!(detect("x").script(), None);
    }
}
