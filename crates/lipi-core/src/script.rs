//! Registry of the supported scripts and their Unicode block layout.

use std::fmt;
use std::str::FromStr;

use crate::error::TranslitError;

/// Inclusive range of UTF-16 code units owned by a script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block {
    pub lower: u16,
    pub upper: u16,
}

impl Block {
    pub const fn contains(self, unit: u16) -> bool {
        self.lower <= unit && unit <= self.upper
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Script {
    Devanagari,
    Bengali,
    Gurmukhi,
    Gujarati,
    Oriya,
    Tamil,
    Telugu,
    Kannada,
    Malayalam,
}

impl Script {
    /// All scripts in Unicode block order.
    pub const ALL: [Script; 9] = [
        Script::Devanagari,
        Script::Bengali,
        Script::Gurmukhi,
        Script::Gujarati,
        Script::Oriya,
        Script::Tamil,
        Script::Telugu,
        Script::Kannada,
        Script::Malayalam,
    ];

    /// Order in which blocks are tested during detection.
    ///
    /// Tamil is tested before Oriya, so the shared unit 2944 reads as Tamil.
    pub(crate) const DETECTION_ORDER: [Script; 9] = [
        Script::Bengali,
        Script::Kannada,
        Script::Telugu,
        Script::Tamil,
        Script::Malayalam,
        Script::Gujarati,
        Script::Oriya,
        Script::Gurmukhi,
        Script::Devanagari,
    ];

    /// The script every conversion passes through.
    pub const PIVOT: Script = Script::Devanagari;

    pub fn from_code(code: &str) -> Result<Script, TranslitError> {
        match code {
            "hin" => Ok(Script::Devanagari),
            "ben" => Ok(Script::Bengali),
            "pan" => Ok(Script::Gurmukhi),
            "guj" => Ok(Script::Gujarati),
            "ori" => Ok(Script::Oriya),
            "tam" => Ok(Script::Tamil),
            "tel" => Ok(Script::Telugu),
            "kan" => Ok(Script::Kannada),
            "mal" => Ok(Script::Malayalam),
            _ => Err(TranslitError::UnknownScript(code.to_string())),
        }
    }

    pub const fn code(self) -> &'static str {
        match self {
            Script::Devanagari => "hin",
            Script::Bengali => "ben",
            Script::Gurmukhi => "pan",
            Script::Gujarati => "guj",
            Script::Oriya => "ori",
            Script::Tamil => "tam",
            Script::Telugu => "tel",
            Script::Kannada => "kan",
            Script::Malayalam => "mal",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Script::Devanagari => "Devanagari",
            Script::Bengali => "Bengali",
            Script::Gurmukhi => "Gurmukhi",
            Script::Gujarati => "Gujarati",
            Script::Oriya => "Oriya",
            Script::Tamil => "Tamil",
            Script::Telugu => "Telugu",
            Script::Kannada => "Kannada",
            Script::Malayalam => "Malayalam",
        }
    }

    /// Language name as the host shows it in its menus.
    pub const fn language(self) -> &'static str {
        match self {
            Script::Devanagari => "Hindi",
            Script::Gurmukhi => "Gurmukhi",
            other => other.name(),
        }
    }

    /// Language name written in the script itself.
    pub const fn native_name(self) -> &'static str {
        match self {
            Script::Devanagari => "हिंदी",
            Script::Bengali => "বাংলা",
            Script::Gurmukhi => "ਗੁਰਮੁਖੀ",
            Script::Gujarati => "ગુજરાતી",
            Script::Oriya => "ଓଡ଼ିଆ",
            Script::Tamil => "தமிழ்",
            Script::Telugu => "తెలుగు",
            Script::Kannada => "ಕನ್ನಡ",
            Script::Malayalam => "മലയാളം",
        }
    }

    /// Menu label, e.g. `"ಕನ್ನಡ (Kannada)"`.
    pub fn menu_title(self) -> String {
        format!("{} ({})", self.native_name(), self.language())
    }

    pub const fn block(self) -> Block {
        let (lower, upper) = match self {
            Script::Devanagari => (2304, 2428),
            Script::Bengali => (2433, 2553),
            Script::Gurmukhi => (2560, 2687),
            Script::Gujarati => (2688, 2815),
            Script::Oriya => (2816, 2944),
            Script::Tamil => (2944, 3070),
            Script::Telugu => (3072, 3199),
            Script::Kannada => (3200, 3327),
            Script::Malayalam => (3328, 3455),
        };
        Block { lower, upper }
    }

    /// Distance from the Devanagari block start to this script's block start.
    pub const fn offset(self) -> u16 {
        match self {
            Script::Devanagari => 0,
            Script::Bengali => 128,
            Script::Gurmukhi => 256,
            Script::Gujarati => 384,
            Script::Oriya => 512,
            Script::Tamil => 640,
            Script::Telugu => 768,
            Script::Kannada => 896,
            Script::Malayalam => 1024,
        }
    }
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Script {
    type Err = TranslitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Script::from_code(s)
    }
}

/// Block bounds for a script code.
pub fn block_of(code: &str) -> Result<Block, TranslitError> {
    Script::from_code(code).map(Script::block)
}
