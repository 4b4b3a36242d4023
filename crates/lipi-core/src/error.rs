#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TranslitError {
    #[error("unknown script code: {0}")]
    UnknownScript(String),
    #[error("conversion failed at unit {index}: {reason}")]
    ConversionFailure { index: usize, reason: String },
}
