//! The `redline` binary.
//!
//! - `redline extract` prints the tracked changes of one document
//! - `redline batch` builds per-publication datasets over a corpus

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use redline::{extract_tracked_changes, ChangeRecord, ExtractOptions, WordJoiner};
use redline_dataset::{
    format_summary, run_batch, write_records, DatasetConfig, ExportFormat, DEFAULT_CONFIG_FILE,
};
use tracing::debug;

#[derive(Parser, Debug)]
#[command(name = "redline")]
#[command(about = "Extract labeled corrections from tracked-change documents")]
#[command(version)]
struct Cli {
    /// Verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the tracked changes of one document
    Extract {
        /// Document to read
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Words of context on each side of a change
        #[arg(long, value_name = "N")]
        window: Option<usize>,

        /// How context words are joined
        #[arg(long, value_name = "JOINER")]
        joiner: Option<WordJoiner>,

        #[arg(long, value_enum, default_value_t = RecordFormat::Pretty)]
        format: RecordFormat,
    },

    /// Build datasets for every publication folder of a corpus
    Batch {
        /// TOML configuration file [default: redline.toml, if present]
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Corpus directory, overriding the configuration
        #[arg(long, value_name = "DIR")]
        input: Option<PathBuf>,

        /// Dataset directory, overriding the configuration
        #[arg(long, value_name = "DIR")]
        output: Option<PathBuf>,

        /// Documents to process before stopping (0 for no limit)
        #[arg(long, value_name = "N")]
        max_files: Option<usize>,

        #[arg(long, value_name = "FORMAT")]
        format: Option<ExportFormat>,
    },
}

/// Output format of `extract`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum RecordFormat {
    /// Human-readable listing
    Pretty,
    Json,
    #[value(name = "jsonl")]
    JsonLines,
    Ron,
}

impl RecordFormat {
    fn export_format(self) -> Option<ExportFormat> {
        match self {
            RecordFormat::Pretty => None,
            RecordFormat::Json => Some(ExportFormat::Json),
            RecordFormat::JsonLines => Some(ExportFormat::JsonLines),
            RecordFormat::Ron => Some(ExportFormat::Ron),
        }
    }
}

fn setup_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn print_records(records: &[ChangeRecord], format: RecordFormat) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match format.export_format() {
        Some(export) => write_records(records, out, export),
        None => {
            for (i, record) in records.iter().enumerate() {
                if i > 0 {
                    writeln!(out)?;
                }
                writeln!(out, "{}", record.display())?;
            }
            out.flush()
        }
    }
}

fn run(command: Command) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Command::Extract {
            file,
            window,
            joiner,
            format,
        } => {
            let mut options = ExtractOptions::default();
            if let Some(window) = window {
                options = options.with_window(window);
            }
            if let Some(joiner) = joiner {
                options = options.with_joiner(joiner);
            }

            let records = extract_tracked_changes(&file, &options)
                .map_err(|e| format!("{}: {}", file.display(), e))?;
            debug!(records = records.len(), "extracted");
            print_records(&records, format)?;
        }
        Command::Batch {
            config,
            input,
            output,
            max_files,
            format,
        } => {
            let mut config = match config {
                Some(path) => DatasetConfig::open(&path)?,
                None => DatasetConfig::load(Path::new(DEFAULT_CONFIG_FILE))?,
            };
            if let Some(input) = input {
                config.input_dir = input;
            }
            if let Some(output) = output {
                config.output_dir = output;
            }
            if let Some(max_files) = max_files {
                config.max_files = max_files;
            }
            if let Some(format) = format {
                config.format = format;
            }

            let report = run_batch(&config)?;
            print!("{}", format_summary(&report));
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_tracing(cli.verbose);

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
