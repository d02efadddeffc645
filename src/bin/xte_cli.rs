//! CLI tool for xte - loads a rule CSV, applies edits, and writes it back
//!
//! Usage:
//!   xte_cli <rule.csv>                          # Print section summary
//!   xte_cli <rule.csv> --json                   # Print the table as JSON
//!   xte_cli <rule.csv> --edit 0,1,1=foo -o out.csv

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::Parser;
use xte::color::section_color;
use xte::editor::Session;
use xte::types::Address;
use xte::{EditorConfig, XteError};

#[derive(Parser, Debug)]
#[command(name = "xte_cli", version, about = "Inspect and edit rule CSV documents")]
struct CliArgs {
    /// Rule document to load
    #[arg(value_name = "RULE")]
    input: PathBuf,

    /// JSON editor configuration (section prefixes, palette, ...)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Edit to apply, as `section,row,cell=value` (repeatable)
    #[arg(short, long = "edit", value_name = "ADDR=VALUE")]
    edits: Vec<String>,

    /// Write the resulting document here
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Print the table as JSON instead of a summary
    #[arg(long)]
    json: bool,
}

/// Errors surfaced by the CLI, with the path that caused them.
#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("{path}: {source}")]
    File { path: String, source: XteError },

    #[error("bad --edit {0:?}: expected section,row,cell=value")]
    EditSyntax(String),

    #[error(transparent)]
    Editor(#[from] XteError),
}

fn parse_edit(arg: &str) -> Result<(Address, String), CliError> {
    let (addr, value) = arg
        .split_once('=')
        .ok_or_else(|| CliError::EditSyntax(arg.to_string()))?;
    let address = addr
        .parse::<Address>()
        .map_err(|_| CliError::EditSyntax(arg.to_string()))?;
    Ok((address, value.to_string()))
}

fn read_file(path: &Path) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|e| CliError::File {
        path: path.display().to_string(),
        source: e.into(),
    })
}

fn print_summary(session: &Session, out: &mut impl Write) -> Result<(), CliError> {
    let table = session.table();
    let titles = session.section_titles()?;
    for (idx, (section, title)) in table.sections().iter().zip(titles).enumerate() {
        let color = section_color(&session.config().palette, idx).unwrap_or("-");
        writeln!(out, "[{idx}] {title} ({color}, {} rows)", section.rows().len())
            .map_err(XteError::from)?;
        for row in section.rows() {
            writeln!(out, "    {}", row.join(" | ")).map_err(XteError::from)?;
        }
    }
    Ok(())
}

fn run(args: &CliArgs) -> Result<(), CliError> {
    let config = match &args.config {
        Some(path) => EditorConfig::from_json(&read_file(path)?).map_err(|e| CliError::File {
            path: path.display().to_string(),
            source: e,
        })?,
        None => EditorConfig::default(),
    };

    let text = read_file(&args.input)?;
    let mut session = Session::new(config);
    session.load(&text).map_err(|e| CliError::File {
        path: args.input.display().to_string(),
        source: e,
    })?;

    for arg in &args.edits {
        let (address, value) = parse_edit(arg)?;
        session.click(address)?;
        if session.selection().selected != Some(address) {
            return Err(XteError::AddressOutOfRange { address }.into());
        }
        session.submit(&value)?;
        log::info!("{}", session.cell_message());
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if args.json {
        serde_json::to_writer_pretty(&mut out, session.table()).map_err(XteError::from)?;
        writeln!(out).map_err(XteError::from)?;
    } else {
        print_summary(&session, &mut out)?;
    }

    if let Some(path) = &args.output {
        let saved = session.save().unwrap_or_default();
        fs::write(path, saved).map_err(|e| CliError::File {
            path: path.display().to_string(),
            source: e.into(),
        })?;
        eprintln!("Written: {}", path.display());
    }

    Ok(())
}

fn main() -> std::process::ExitCode {
    env_logger::init();
    let args = CliArgs::parse();

    match run(&args) {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::ExitCode::FAILURE
        }
    }
}
