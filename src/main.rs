//! CLI entry point for clangview.
//!
//! Parses C/C++ files (or every entry of a compilation database) through
//! libclang and prints the extracted AST as a tree, JSON or JSON Lines.

use anyhow::Context;
use clangview::io::{AstStream, ExitCode, OutputError, OutputFormat, open_output, render_tree};
use clangview::source::{CompilationDatabase, Source, TranslationUnit};
use clangview::{CompilationDatabaseError, ParsingError, Settings};
use clap::{
    Parser, Subcommand,
    builder::styling::{AnsiColor, Effects, Styles},
};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

fn clap_cargo_style() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .usage(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Green.on_default())
}

/// Inspect C/C++ syntax trees through libclang
#[derive(Parser)]
#[command(
    name = "clangview",
    version,
    about = "Render the libclang AST of C and C++ sources",
    styles = clap_cargo_style()
)]
struct Cli {
    /// Path to custom settings.toml file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log at debug level regardless of settings
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
enum Commands {
    /// Parse a single file and print its AST
    Parse {
        /// Source or header file to parse
        file: PathBuf,

        /// Output format (overrides config)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Deepest AST level to print (overrides config)
        #[arg(short = 'd', long)]
        max_depth: Option<usize>,

        /// Write output to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Silence libclang diagnostics
        #[arg(long)]
        no_diagnostics: bool,

        /// Compiler arguments passed to libclang
        #[arg(last = true)]
        args: Vec<String>,
    },

    /// Parse every entry of a compile_commands.json file
    Db {
        /// Path to compile_commands.json
        database: PathBuf,

        /// Output format (overrides config)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Deepest AST level to print (overrides config)
        #[arg(short = 'd', long)]
        max_depth: Option<usize>,
    },

    /// Set up .clangview directory with default configuration
    Init {
        /// Force overwrite existing configuration
        #[arg(short, long)]
        force: bool,
    },

    /// Display active settings
    Config,
}

fn init_logging(settings: &Settings, verbose: bool) {
    let level = if verbose || settings.debug {
        tracing::Level::DEBUG
    } else {
        settings.log_level.parse().unwrap_or(tracing::Level::WARN)
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn load_settings(config: Option<&Path>) -> anyhow::Result<Settings> {
    match config {
        Some(path) => Settings::load_from(path)
            .with_context(|| format!("Configuration error loading from {}", path.display())),
        None => Ok(Settings::load().unwrap_or_else(|e| {
            eprintln!("Configuration error: {e}");
            Settings::default()
        })),
    }
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();

    let settings = match load_settings(cli.config.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("{e:#}");
            return ExitCode::ConfigError.into();
        }
    };
    init_logging(&settings, cli.verbose);

    match run(cli.command, settings) {
        Ok(code) => {
            if !code.is_success() {
                debug!("Exiting with {}", code.description());
            }
            code.into()
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            exit_code_for(&e).into()
        }
    }
}

/// Pick the most specific exit code for an error bubbled up to main
fn exit_code_for(error: &anyhow::Error) -> ExitCode {
    if let Some(e) = error.downcast_ref::<ParsingError>() {
        ExitCode::from_parsing_error(e)
    } else if let Some(e) = error.downcast_ref::<CompilationDatabaseError>() {
        ExitCode::from_database_error(e)
    } else if let Some(e) = error.downcast_ref::<OutputError>() {
        e.exit_code()
    } else {
        ExitCode::GeneralError
    }
}

fn run(command: Commands, mut settings: Settings) -> anyhow::Result<ExitCode> {
    match command {
        Commands::Init { force } => match Settings::init_config_file(force) {
            Ok(path) => {
                println!("Created configuration file at: {}", path.display());
                println!("Edit this file to customize your settings.");
                Ok(ExitCode::Success)
            }
            Err(e) => {
                eprintln!("Error: {e}");
                Ok(ExitCode::ConfigError)
            }
        },

        Commands::Config => {
            if let Err(warning) = Settings::check_init() {
                eprintln!("Warning: {warning}");
                eprintln!("Showing default configuration.");
            }
            println!("{}", toml::to_string_pretty(&settings)?);
            Ok(ExitCode::Success)
        }

        Commands::Parse {
            file,
            format,
            max_depth,
            output,
            no_diagnostics,
            args,
        } => {
            if !file.exists() {
                eprintln!("File not found: {}", file.display());
                return Ok(ExitCode::NotFound);
            }
            if no_diagnostics {
                settings.parsing.diagnostics = false;
            }
            let args = if args.is_empty() {
                settings.parsing.default_args.clone()
            } else {
                args
            };
            let format = format.unwrap_or(settings.output.format);
            let max_depth = max_depth.or(settings.output.max_depth);
            debug!("Parsing {} with args {args:?}", file.display());

            let source = Source::from_file(
                file.display().to_string(),
                settings.parsing.pch_mode(),
                settings.parsing.diagnostics_mode(),
                args,
                settings.parsing.tu_options(),
            )?;
            let (units, mut errors) = source.partition();
            if let Some(error) = errors.pop() {
                return Err(error.into());
            }

            let mut writer = open_output(output.as_deref())?;
            write_units(writer.as_mut(), &units, format, max_depth)?;
            log_diagnostics(&units);
            Ok(ExitCode::Success)
        }

        Commands::Db {
            database,
            format,
            max_depth,
        } => {
            let db = CompilationDatabase::from_file(&database)?;
            let format = format.unwrap_or(settings.output.format);
            let max_depth = max_depth.or(settings.output.max_depth);

            let source = Source::from_compilation_database(
                settings.parsing.pch_mode(),
                settings.parsing.diagnostics_mode(),
                db,
                settings.parsing.tu_options(),
            )?;
            let (units, errors) = source.partition();

            let mut writer = open_output(None)?;
            write_units(writer.as_mut(), &units, format, max_depth)?;
            log_diagnostics(&units);

            for error in &errors {
                warn!("{error}");
                for suggestion in error.recovery_suggestions() {
                    eprintln!("  Suggestion: {suggestion}");
                }
            }
            eprintln!(
                "Parsed {} translation unit(s), {} failed",
                units.len(),
                errors.len()
            );

            if errors.is_empty() {
                Ok(ExitCode::Success)
            } else {
                Ok(ExitCode::ParseError)
            }
        }
    }
}

fn write_units(
    writer: &mut dyn Write,
    units: &[TranslationUnit],
    format: OutputFormat,
    max_depth: Option<usize>,
) -> Result<(), OutputError> {
    let write_err = |e| OutputError::OutputWriteError { source: e };
    match format {
        OutputFormat::Tree => {
            for unit in units {
                writeln!(writer, "{}", unit.file_name()).map_err(write_err)?;
                write!(writer, "{}", render_tree(unit.ast(), max_depth)).map_err(write_err)?;
            }
        }
        OutputFormat::Json => {
            for unit in units {
                let json = serde_json::to_string_pretty(unit)?;
                writeln!(writer, "{json}").map_err(write_err)?;
            }
        }
        OutputFormat::Jsonl => {
            let mut stream = AstStream::new(&mut *writer);
            for unit in units {
                stream.write_entry(unit.ast(), max_depth)?;
            }
        }
    }
    writer.flush().map_err(write_err)
}

fn log_diagnostics(units: &[TranslationUnit]) {
    for unit in units {
        for diagnostic in unit.diagnostics() {
            debug!("{diagnostic}");
        }
        if unit.has_errors() {
            warn!("{} parsed with errors", unit.file_name());
        }
    }
}
