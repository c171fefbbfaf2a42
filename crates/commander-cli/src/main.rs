use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use commander_core::{
    DecodeReport, Diagnostics, MismatchPolicy, PacketOutcome, PacketType, Setpoint,
};
use glob::glob;
use log::LevelFilter;
use serde::Serialize;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

const MAX_LISTED_MATCHES: usize = 3;

#[derive(Parser, Debug)]
#[command(name = "commander")]
#[command(version)]
#[command(
    about = "Decoder for generic commander setpoint packets.",
    long_about = None,
    after_help = "Examples:\n  commander decode \"01 0000803f 00000040 00004040 0000003f\"\n  commander replay packets.hex -o report.json\n  commander replay packets.hex --stdout --strict"
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Decode a single hex-encoded packet and print the setpoint as JSON.
    Decode {
        /// Packet bytes as hex (type tag first), e.g. "00" or "0x0300..."
        packet: String,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },
    /// Replay a hex packet log and generate a versioned JSON decode report.
    #[command(alias = "play")]
    #[command(
        after_help = "Examples:\n  commander replay packets.hex -o report.json\n  commander play packets.hex --stdout --pretty"
    )]
    Replay {
        /// Path to a hex packet log (one packet per line)
        input: PathBuf,

        /// Output report path (JSON)
        #[arg(short = 'o', long, required_unless_present = "stdout")]
        report: Option<PathBuf>,

        /// Write JSON report to stdout
        #[arg(long, conflicts_with = "report")]
        stdout: bool,

        /// Pretty-print JSON output
        #[arg(long, conflicts_with = "compact")]
        pretty: bool,

        /// Compact JSON output (default)
        #[arg(long)]
        compact: bool,

        /// Suppress non-error output
        #[arg(long)]
        quiet: bool,

        /// Abort on the first packet whose payload length does not match its type
        #[arg(long)]
        strict: bool,

        /// List rejected packets after the replay
        #[arg(long)]
        list_rejected: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Decode { packet, pretty } => cmd_decode(&packet, pretty),
        Commands::Replay {
            input,
            report,
            stdout,
            pretty,
            compact,
            quiet,
            strict,
            list_rejected,
        } => cmd_replay(
            input,
            report,
            stdout,
            pretty,
            compact,
            quiet,
            strict,
            list_rejected,
        ),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err.message);
            if let Some(hint) = err.hint {
                eprintln!("hint: {}", hint);
            }
            ExitCode::from(2)
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    // A logger may already be installed when embedded; keep going without ours.
    TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )
    .ok();
}

#[derive(Debug)]
struct CliError {
    message: String,
    hint: Option<String>,
}

impl CliError {
    fn new(message: impl Into<String>, hint: Option<String>) -> Self {
        Self {
            message: message.into(),
            hint,
        }
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        CliError::new(format!("{:#}", err), None)
    }
}

#[derive(Debug, Serialize)]
struct DecodeOutput {
    tag: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    packet_type: Option<PacketType>,
    setpoint: Setpoint,
    diagnostics: Diagnostics,
}

fn cmd_decode(packet: &str, pretty: bool) -> Result<(), CliError> {
    let bytes = commander_core::parse_hex_packet(packet).map_err(|err| {
        CliError::new(
            format!("invalid packet '{}': {}", packet.trim(), err),
            Some("pass the packet as hex bytes, type tag first (e.g. \"00\")".to_string()),
        )
    })?;

    let mut diagnostics = Diagnostics::default();
    let setpoint = commander_core::decode_setpoint(&bytes, &mut diagnostics).map_err(|err| {
        CliError::new(
            err.to_string(),
            Some("check the payload length for the packet type".to_string()),
        )
    })?;

    let tag = bytes[0];
    let output = DecodeOutput {
        tag,
        packet_type: PacketType::from_tag(tag),
        setpoint,
        diagnostics,
    };
    let json = if pretty {
        serde_json::to_string_pretty(&output)
    } else {
        serde_json::to_string(&output)
    }
    .context("JSON serialization failed")?;
    println!("{}", json);
    Ok(())
}

fn cmd_replay(
    input: PathBuf,
    report: Option<PathBuf>,
    stdout: bool,
    pretty: bool,
    compact: bool,
    quiet: bool,
    strict: bool,
    list_rejected: bool,
) -> Result<(), CliError> {
    let log_path = resolve_input_path(&input)?;
    check_log_file(&log_path)?;

    let report = match (stdout, report) {
        (true, _) => None,
        (false, Some(path)) => Some(path),
        (false, None) => {
            return Err(CliError::new(
                "no report destination given",
                Some("pass -o/--report <FILE> or --stdout".to_string()),
            ));
        }
    };
    if let Some(report_path) = report.as_deref() {
        ensure_report_is_not_log(report_path, &log_path)?;
    }

    let policy = if strict {
        MismatchPolicy::Abort
    } else {
        MismatchPolicy::Neutral
    };
    let rep = commander_core::replay_packet_file(&log_path, policy).map_err(|err| {
        let hint = strict.then(|| "drop --strict to replace bad packets with a stop".to_string());
        CliError::new(format!("packet replay failed: {}", err), hint)
    })?;
    let json = report_json(&rep, pretty, compact)?;

    match report {
        None => print!("{}", json),
        Some(ref path) => write_report(path, &json)?,
    }
    if list_rejected && !quiet {
        print_rejected(&rep);
    }
    if let (Some(path), false) = (report, quiet) {
        eprintln!("OK: report written -> {}", path.display());
    }
    Ok(())
}

/// Refuse to overwrite the packet log with its own report.
fn ensure_report_is_not_log(report: &Path, log: &Path) -> Result<(), CliError> {
    let log_abs = fs::canonicalize(log)
        .with_context(|| format!("Failed to resolve input path: {}", log.display()))?;
    let Some(file_name) = report.file_name() else {
        return Err(CliError::new(
            format!("report path has no file name: {}", report.display()),
            Some("pass a file path such as report.json".to_string()),
        ));
    };
    let report_dir = match report.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    // A directory that does not exist yet cannot hold the log.
    let Ok(report_dir) = fs::canonicalize(report_dir) else {
        return Ok(());
    };

    if report_dir.join(file_name) == log_abs {
        return Err(CliError::new(
            format!("report would overwrite the packet log: {}", report.display()),
            Some("choose a different output path".to_string()),
        ));
    }
    Ok(())
}

fn write_report(path: &Path, json: &str) -> Result<(), CliError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory: {}", parent.display()))?;
    }
    fs::write(path, json)
        .with_context(|| format!("Failed to write report: {}", path.display()))?;
    Ok(())
}

fn report_json(rep: &DecodeReport, pretty: bool, compact: bool) -> Result<String, CliError> {
    if pretty && compact {
        return Err(CliError::new(
            "--pretty and --compact are mutually exclusive",
            Some("choose one output format".to_string()),
        ));
    }
    let json = if pretty {
        serde_json::to_string_pretty(rep)
    } else {
        serde_json::to_string(rep)
    }
    .context("JSON serialization failed")?;
    Ok(json)
}

fn print_rejected(rep: &DecodeReport) {
    eprintln!("Rejected packets: {}", rep.summary.rejected);
    for record in rep
        .packets
        .iter()
        .filter(|record| record.outcome == PacketOutcome::Rejected)
    {
        eprintln!(
            "  line {}: {}",
            record.line,
            record.error.as_deref().unwrap_or("decode error")
        );
    }
}

fn log_file_hint() -> Option<String> {
    Some("pass a hex packet log, one packet per line".to_string())
}

fn check_log_file(path: &Path) -> Result<(), CliError> {
    if !path.exists() {
        return Err(CliError::new(
            format!("packet log not found: {}", path.display()),
            log_file_hint(),
        ));
    }
    if !path.is_file() {
        return Err(CliError::new(
            format!("packet log is not a regular file: {}", path.display()),
            log_file_hint(),
        ));
    }
    Ok(())
}

/// Expand a wildcard argument to the single packet log it must name.
fn resolve_input_path(input: &Path) -> Result<PathBuf, CliError> {
    let pattern = input.to_string_lossy();
    if !pattern.contains(['*', '?', '[']) {
        return Ok(input.to_path_buf());
    }

    let bad_pattern = |detail: String| {
        CliError::new(
            format!("invalid input pattern '{}'", pattern),
            Some(format!("pattern error: {}", detail)),
        )
    };
    let mut logs = Vec::new();
    for entry in glob(&pattern).map_err(|err| bad_pattern(err.msg.to_string()))? {
        let path = entry.map_err(|err| bad_pattern(err.to_string()))?;
        if path.is_file() {
            logs.push(path);
        }
    }

    match logs.len() {
        0 => Err(CliError::new(
            format!("no packet log matches '{}'", pattern),
            Some("check the path or quote the pattern".to_string()),
        )),
        1 => Ok(logs.remove(0)),
        count => {
            let shown = logs
                .iter()
                .take(MAX_LISTED_MATCHES)
                .map(|p| p.display().to_string())
                .collect::<Vec<_>>()
                .join(", ");
            let more = if count > MAX_LISTED_MATCHES { ", ..." } else { "" };
            Err(CliError::new(
                format!(
                    "multiple files match pattern '{}' ({} matches): {}{}",
                    pattern, count, shown, more
                ),
                Some("replay one packet log at a time".to_string()),
            ))
        }
    }
}
