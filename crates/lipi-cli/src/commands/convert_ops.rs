use std::fs;
use std::io::{self, BufRead, BufWriter, Write};
use std::process;

use serde::Serialize;
use unicode_width::UnicodeWidthStr;

use lipi_core::{detect, transliterate, transliterate_from, BatchJob, Script};

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

/// One line of `batch` output.
#[derive(Debug, Serialize)]
pub struct BatchEntry {
    pub index: usize,
    pub detected: &'static str,
    pub source: String,
    pub result: String,
}

fn convert_line(text: &str, from: Option<&str>, target: &str) -> String {
    match from {
        Some(source) => transliterate_from(text, source, target),
        None => transliterate(text, target),
    }
}

fn check_code(code: &str) {
    die!(Script::from_code(code), "Error: {}");
}

pub fn convert_cmd(target: &str, from: Option<&str>, text: Option<&str>) {
    check_code(target);
    if let Some(source) = from {
        check_code(source);
    }

    if let Some(text) = text {
        println!("{}", convert_line(text, from, target));
        return;
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for line in stdin.lock().lines() {
        let line = die!(line, "Error reading stdin: {}");
        die!(
            writeln!(out, "{}", convert_line(&line, from, target)),
            "Error writing output: {}"
        );
    }
    die!(out.flush(), "Error writing output: {}");
}

pub fn detect_cmd(text: &str) {
    let detection = detect(text);
    match detection.script() {
        Some(script) => println!("{} ({})", script.code(), script.name()),
        None => println!("{} (non-Indic)", detection.code()),
    }
}

/// Convert `lines` chunk by chunk, reporting progress through `on_chunk`.
pub fn batch_entries<F>(
    lines: &[String],
    target: &str,
    chunk_size: usize,
    mut on_chunk: F,
) -> Vec<BatchEntry>
where
    F: FnMut(usize, usize),
{
    let mut entries = Vec::with_capacity(lines.len());
    for chunk in BatchJob::new(lines, target).with_chunk_size(chunk_size) {
        on_chunk(chunk.index + 1, chunk.total_chunks);
        for (offset, result) in chunk.results.into_iter().enumerate() {
            let index = chunk.start + offset;
            let source = lines[index].clone();
            entries.push(BatchEntry {
                index,
                detected: detect(&source).code(),
                source,
                result,
            });
        }
    }
    entries
}

pub fn batch_cmd(input_file: &str, output_file: &str, target: &str, chunk_size: Option<usize>) {
    check_code(target);
    let content = die!(fs::read_to_string(input_file), "Error reading {input_file}: {}");
    let lines: Vec<String> = content.lines().map(str::to_string).collect();
    let chunk_size = chunk_size.unwrap_or(lipi_core::settings::settings().batch.chunk_size);

    let entries = batch_entries(&lines, target, chunk_size, |done, total| {
        eprint!("\rchunk {done}/{total}");
    });
    eprintln!();

    let file = die!(fs::File::create(output_file), "Error creating {output_file}: {}");
    let mut out = BufWriter::new(file);
    let mut changed = 0;
    for entry in &entries {
        if entry.result != entry.source {
            changed += 1;
        }
        let json = die!(serde_json::to_string(entry), "Error serializing entry: {}");
        die!(writeln!(out, "{json}"), "Error writing {output_file}: {}");
    }
    die!(out.flush(), "Error writing {output_file}: {}");
    eprintln!("{} lines, {} changed -> {}", entries.len(), changed, output_file);
}

/// Pad `s` with spaces to `width` terminal columns.
fn pad(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    format!("{s}{}", " ".repeat(width.saturating_sub(w)))
}

pub fn scripts_table() -> Vec<String> {
    let titles: Vec<String> = Script::ALL.iter().map(|s| s.menu_title()).collect();
    let title_width = titles
        .iter()
        .map(|t| UnicodeWidthStr::width(t.as_str()))
        .max()
        .unwrap_or(0);

    Script::ALL
        .iter()
        .zip(&titles)
        .map(|(script, title)| {
            let block = script.block();
            format!(
                "{}  {}  {:>4}..{:<4}  +{:<4}  {}",
                script.code(),
                pad(title, title_width),
                block.lower,
                block.upper,
                script.offset(),
                script.name()
            )
        })
        .collect()
}

pub fn scripts_cmd() {
    for row in scripts_table() {
        println!("{row}");
    }
}

pub fn self_test_cmd() {
    let result = lipi_core::self_test();
    let expected = "कन्नड";
    println!("{} -> {}", lipi_core::transliterate::SELF_TEST_INPUT, result);
    if result != expected {
        eprintln!("FAIL: expected {expected}");
        process::exit(1);
    }
    println!("OK");
}
