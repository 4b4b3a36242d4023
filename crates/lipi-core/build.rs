const SETTINGS_PATH: &str = "src/default_settings.toml";

const KNOWN_TARGETS: [&str; 9] = [
    "hin", "ben", "pan", "guj", "ori", "tam", "tel", "kan", "mal",
];

fn main() {
    println!("cargo:rerun-if-changed={SETTINGS_PATH}");
    if let Err(msg) = check_settings(include_str!("src/default_settings.toml")) {
        panic!("{SETTINGS_PATH}: {msg}");
    }
}

/// Mirrors the runtime checks in `settings::parse_settings_toml`, so a bad
/// default fails the build instead of the first `settings()` call.
fn check_settings(content: &str) -> Result<(), String> {
    let value: toml::Value = content.parse().map_err(|e| format!("invalid TOML: {e}"))?;

    let chunk_size = value
        .get("batch")
        .and_then(|b| b.get("chunk_size"))
        .and_then(toml::Value::as_integer)
        .ok_or("missing integer batch.chunk_size")?;
    if chunk_size <= 0 {
        return Err(format!("batch.chunk_size must be positive, got {chunk_size}"));
    }

    let target = value
        .get("transliterate")
        .and_then(|t| t.get("default_target"))
        .and_then(toml::Value::as_str)
        .ok_or("missing string transliterate.default_target")?;
    if !KNOWN_TARGETS.contains(&target) {
        return Err(format!("unknown transliterate.default_target {target:?}"));
    }
    Ok(())
}
