use std::fs;
use std::process;

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

pub fn settings_export() {
    print!("{}", lipi_core::settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(
        lipi_core::settings::parse_settings_toml(&content),
        "Error: {}"
    );
    println!(
        "OK: batch.chunk_size={}, batch.yield_between_chunks={}, transliterate.default_target={}",
        s.batch.chunk_size,
        s.batch.yield_between_chunks,
        s.default_target()
    );
}
