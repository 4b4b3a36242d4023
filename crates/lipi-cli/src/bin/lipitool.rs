use clap::{Parser, Subcommand};

use lipi_cli::commands::{config_ops, convert_ops};

#[derive(Parser)]
#[command(name = "lipitool", about = "Lipi transliteration tool")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Transliterate text (or stdin, line by line) into a target script
    Convert {
        /// Target language code (hin, ben, pan, guj, ori, tam, tel, kan, mal)
        target: String,
        /// Text to convert; reads stdin when omitted
        text: Option<String>,
        /// Source language code; detected from the text when omitted
        #[arg(long)]
        from: Option<String>,
    },
    /// Show the script detected for a text
    Detect {
        /// Text to classify
        text: String,
    },
    /// Transliterate a file line by line and write JSONL results
    Batch {
        /// Input file (one fragment per line)
        input_file: String,
        /// Output JSONL file
        output_file: String,
        /// Target language code
        #[arg(short, long)]
        target: String,
        /// Fragments per chunk (default: settings batch.chunk_size)
        #[arg(long)]
        chunk_size: Option<usize>,
    },
    /// List supported scripts with their Unicode blocks
    Scripts,
    /// Run the built-in Kannada -> Hindi check
    SelfTest,
    /// Print the default settings TOML
    SettingsExport,
    /// Validate a settings TOML file
    SettingsValidate {
        /// Settings file
        file: String,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Convert { target, text, from } => {
            convert_ops::convert_cmd(&target, from.as_deref(), text.as_deref())
        }
        Command::Detect { text } => convert_ops::detect_cmd(&text),
        Command::Batch {
            input_file,
            output_file,
            target,
            chunk_size,
        } => convert_ops::batch_cmd(&input_file, &output_file, &target, chunk_size),
        Command::Scripts => convert_ops::scripts_cmd(),
        Command::SelfTest => convert_ops::self_test_cmd(),
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
    }
}
