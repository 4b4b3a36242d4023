//! Host-facing layer of the Lipi transliteration engine.
//!
//! Re-exports the core conversion API and exposes it through UniFFI, along
//! with a background batch worker and optional trace logging.

uniffi::setup_scaffolding!();

pub mod api;
mod batch_worker;
pub mod trace_init;

pub use lipi_core::{
    detect, self_test, transliterate, transliterate_batch, transliterate_from, Detection, Script,
    TranslitError,
};
