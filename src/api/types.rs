use lipi_core::Script;

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum LipiError {
    #[error("IO error: {msg}")]
    Io { msg: String },
    #[error("invalid data: {msg}")]
    InvalidData { msg: String },
}

// ---------------------------------------------------------------------------
// Records (value types, copied across FFI boundary)
// ---------------------------------------------------------------------------

#[derive(Clone, Debug, PartialEq, uniffi::Record)]
pub struct LipiScript {
    pub code: String,
    pub name: String,
    /// Label for the host's language menu, e.g. "ಕನ್ನಡ (Kannada)".
    pub menu_title: String,
    pub block_lower: u16,
    pub block_upper: u16,
}

impl From<Script> for LipiScript {
    fn from(script: Script) -> Self {
        let block = script.block();
        Self {
            code: script.code().to_string(),
            name: script.name().to_string(),
            menu_title: script.menu_title(),
            block_lower: block.lower,
            block_upper: block.upper,
        }
    }
}

#[derive(Clone, Debug, uniffi::Record)]
pub struct LipiBatchResult {
    pub job_id: u64,
    pub results: Vec<String>,
}
