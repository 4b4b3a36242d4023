//! Structural transliteration between the nine Brahmic scripts that share the
//! Devanagari block layout.
//!
//! Text is shifted into Devanagari (the pivot) and projected from there into
//! the requested script, with per-script point exceptions where the Unicode
//! blocks diverge.

pub mod detect;
mod error;
pub mod pivot;
pub mod script;
pub mod settings;
pub mod transliterate;
pub mod unicode;

pub use detect::{detect, detect_utf16, Detection};
pub use error::TranslitError;
pub use script::{block_of, Block, Script};
pub use transliterate::batch::{
    transliterate_batch, transliterate_batch_with, BatchJob, ChunkOutput,
};
pub use transliterate::{
    self_test, transliterate, transliterate_from, transliterate_to, transliterate_utf16,
    try_transliterate,
};
