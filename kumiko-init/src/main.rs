mod document;
mod lint;
mod terminal;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use argh::FromArgs;
use kumiko_config::Config;
use tracing_subscriber::EnvFilter;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Kumiko-init - build and install the kumiko configuration
#[derive(FromArgs)]
struct Cli {
    #[argh(subcommand)]
    command: Option<SubCommand>,
}

#[derive(FromArgs)]
#[argh(subcommand)]
enum SubCommand {
    Export(ExportCmd),
    Install(InstallCmd),
    Check(CheckCmd),
    Bindings(BindingsCmd),
    Version(VersionCmd),
}

/// Print the configuration document as JSON
#[derive(FromArgs)]
#[argh(subcommand, name = "export")]
struct ExportCmd {
    /// emit compact JSON instead of pretty-printed
    #[argh(switch)]
    compact: bool,
}

/// Write the configuration document to disk
#[derive(FromArgs)]
#[argh(subcommand, name = "install")]
struct InstallCmd {
    /// destination file (defaults to the user config directory)
    #[argh(option)]
    path: Option<String>,
}

/// Check the document for problems
#[derive(FromArgs)]
#[argh(subcommand, name = "check")]
struct CheckCmd {}

/// List every key binding with its action
#[derive(FromArgs)]
#[argh(subcommand, name = "bindings")]
struct BindingsCmd {}

/// Show version information
#[derive(FromArgs)]
#[argh(subcommand, name = "version")]
struct VersionCmd {}

fn main() -> Result<()> {
    let cli: Cli = argh::from_env();

    match cli.command {
        None => {
            // No subcommand - show help (simulate --help)
            let args: Vec<&str> = vec!["kumiko-init", "--help"];
            match Cli::from_args(&args[..1], &args[1..]) {
                Ok(_) => {}
                Err(e) => {
                    println!("{}", e.output);
                }
            }
            Ok(())
        }
        Some(SubCommand::Export(cmd)) => run_export(cmd),
        Some(SubCommand::Install(cmd)) => {
            tracing_subscriber::fmt()
                .with_env_filter(EnvFilter::from_default_env())
                .init();

            run_install(cmd)
        }
        Some(SubCommand::Check(_)) => run_check(),
        Some(SubCommand::Bindings(_)) => run_bindings(),
        Some(SubCommand::Version(_)) => {
            println!("kumiko-init {}", VERSION);
            Ok(())
        }
    }
}

fn run_export(cmd: ExportCmd) -> Result<()> {
    let config = document::build();
    let json = if cmd.compact {
        serde_json::to_string(&config)?
    } else {
        serde_json::to_string_pretty(&config)?
    };
    println!("{}", json);
    Ok(())
}

fn run_install(cmd: InstallCmd) -> Result<()> {
    let path = match cmd.path {
        Some(path) => PathBuf::from(path),
        None => default_config_path()?,
    };
    write_document(&document::build(), &path)?;
    println!("installed {}", path.display());
    Ok(())
}

fn run_check() -> Result<()> {
    let config = document::build();
    let report = lint::check(&config);

    match &report.terminal {
        Some(terminal) => println!("detected terminal: {}", terminal),
        None => println!("no terminal emulator found in PATH"),
    }
    for finding in &report.findings {
        println!("warning: {}", finding);
    }
    if report.is_clean() {
        println!("configuration OK ({} bindings)", config.keys.len());
    } else {
        println!("{} warnings", report.findings.len());
    }
    Ok(())
}

fn run_bindings() -> Result<()> {
    let config = document::build();
    for binding in &config.keys {
        println!("{} -> {}", binding.chord(), binding.action);
    }
    Ok(())
}

fn default_config_path() -> Result<PathBuf> {
    let dir = dirs::config_dir().context("could not determine the user config directory")?;
    Ok(dir.join("kumiko").join("config.json"))
}

fn write_document(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).with_context(|| format!("creating {}", parent.display()))?;
    }
    let json = serde_json::to_string_pretty(config)?;
    fs::write(path, json + "\n").with_context(|| format!("writing {}", path.display()))?;
    tracing::info!("Wrote configuration to {}", path.display());
    Ok(())
}
