//! UniFFI export layer: type-safe bindings for the extension host.
//!
//! Each public type here maps to a generated class, struct, or enum.

mod types;
mod worker;

pub use types::{LipiBatchResult, LipiError, LipiScript};
pub use worker::LipiBatchWorker;

use std::path::Path;

use lipi_core::Script;

// ---------------------------------------------------------------------------
// Top-level functions
// ---------------------------------------------------------------------------

#[uniffi::export]
fn engine_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Transliterate one fragment, detecting its source script.
#[uniffi::export]
fn transliterate(text: String, target_lang: String) -> String {
    lipi_core::transliterate(&text, &target_lang)
}

#[uniffi::export]
fn transliterate_from(text: String, source_lang: String, target_lang: String) -> String {
    lipi_core::transliterate_from(&text, &source_lang, &target_lang)
}

/// One result per fragment, in input order.
#[uniffi::export]
fn transliterate_batch(texts: Vec<String>, target_lang: String) -> Vec<String> {
    lipi_core::transliterate_batch(&texts, &target_lang)
}

/// Language code of the first recognizable script, or "eng".
#[uniffi::export]
fn detect_source_language(text: String) -> String {
    lipi_core::detect(&text).code().to_string()
}

#[uniffi::export]
fn supported_scripts() -> Vec<LipiScript> {
    Script::ALL.into_iter().map(LipiScript::from).collect()
}

#[uniffi::export]
fn default_target_lang() -> String {
    lipi_core::settings::settings()
        .default_target()
        .code()
        .to_string()
}

#[uniffi::export]
fn self_test() -> String {
    lipi_core::self_test()
}

#[uniffi::export]
fn settings_load_config(path: String) -> Result<(), LipiError> {
    let content = std::fs::read_to_string(&path).map_err(|e| LipiError::Io {
        msg: format!("{path}: {e}"),
    })?;
    lipi_core::settings::init_custom(content)
        .map_err(|e| LipiError::InvalidData { msg: e.to_string() })?;
    Ok(())
}

#[uniffi::export]
fn settings_default_config() -> String {
    lipi_core::settings::default_toml().to_string()
}

#[uniffi::export]
fn trace_init(log_dir: String) {
    crate::trace_init::init_tracing(Path::new(&log_dir));
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_transliterate_exports() {
        assert_eq!(transliterate("ಕನ್ನಡ".into(), "hin".into()), "कन्नड");
        assert_eq!(
            transliterate_from("ಕನ್ನಡ".into(), "kan".into(), "hin".into()),
            "कन्नड"
        );
        assert_eq!(transliterate("ಕನ್ನಡ".into(), "xx".into()), "ಕನ್ನಡ");
        assert_eq!(self_test(), "कन्नड");
    }

    #[test]
    fn test_batch_export_keeps_cardinality() {
        let texts = vec!["".to_string(), "ಕ".to_string(), "abc".to_string()];
        let out = transliterate_batch(texts, "hin".into());
        assert_eq!(out, vec!["", "क", "abc"]);
    }

    #[test]
    fn test_detect_source_language() {
        assert_eq!(detect_source_language("বাংলা".into()), "ben");
        assert_eq!(detect_source_language("123".into()), "eng");
    }

    #[test]
    fn test_supported_scripts() {
        let scripts = supported_scripts();
        assert_eq!(scripts.len(), 9);
        let kannada = scripts.iter().find(|s| s.code == "kan").unwrap();
        assert_eq!(kannada.menu_title, "ಕನ್ನಡ (Kannada)");
        assert_eq!((kannada.block_lower, kannada.block_upper), (3200, 3327));
    }

    #[test]
    fn test_default_config_round_trips() {
        let toml = settings_default_config();
        assert!(lipi_core::settings::parse_settings_toml(&toml).is_ok());
        assert_eq!(default_target_lang(), "hin");
    }

    #[test]
    fn test_settings_load_errors() {
        let err = settings_load_config("/nonexistent/lipi.toml".into()).unwrap_err();
        assert!(matches!(err, LipiError::Io { .. }));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[batch]\nchunk_size = 0\n\n[transliterate]\ndefault_target = \"hin\"")
            .unwrap();
        let path = file.path().to_string_lossy().into_owned();
        let err = settings_load_config(path).unwrap_err();
        assert!(matches!(err, LipiError::InvalidData { .. }));
        assert!(err.to_string().contains("batch.chunk_size"));
    }

    #[test]
    fn test_settings_load_after_use_is_rejected() {
        assert_eq!(default_target_lang(), "hin");
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "[batch]\nchunk_size = 7\n\n[transliterate]\ndefault_target = \"kan\"\n"
        )
        .unwrap();
        let path = file.path().to_string_lossy().into_owned();
        let err = settings_load_config(path).unwrap_err();
        assert!(matches!(err, LipiError::InvalidData { .. }));
        assert!(err.to_string().contains("already initialized"));
        assert_eq!(default_target_lang(), "hin");
    }
}
