//! Walk nested JSON objects read from files or fetched over HTTP.
//!
//! `get` and `fetch` print the value found at the end of the key path as
//! pretty JSON. A missing key exits with [`exit_codes::MISSING_KEY`].

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use nested_utils::config::{DEFAULT_CONFIG_PATH, UtilsConfig, load_config, write_config};
use nested_utils::exit_codes;
use nested_utils::fetch::{UreqTransport, get_json};
use nested_utils::logging;
use nested_utils::nested::{KeyError, access_nested_map};
use serde_json::Value;
use tracing::{debug, info};

#[derive(Parser)]
#[command(
    name = "nested-utils",
    version,
    about = "Walk nested JSON objects from files or URLs"
)]
struct Cli {
    /// Path to the TOML config file.
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write a default config file if missing.
    Init {
        /// Overwrite an existing config file.
        #[arg(short, long)]
        force: bool,
    },
    /// Read a JSON file and print the value at the key path.
    Get {
        file: PathBuf,
        /// Keys to descend through, outermost first.
        keys: Vec<String>,
    },
    /// GET a URL, parse the body as JSON and print the value at the key path.
    Fetch {
        url: String,
        /// Keys to descend through, outermost first.
        keys: Vec<String>,
    },
}

fn main() {
    let code = match run() {
        Ok(()) => exit_codes::OK,
        Err(err) => {
            eprintln!("{:#}", err);
            exit_code_for(&err)
        }
    };
    std::process::exit(code);
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Init { force } => {
            logging::init(&UtilsConfig::default().log_filter);
            cmd_init(&cli.config, force)
        }
        Command::Get { file, keys } => {
            setup(&cli.config)?;
            cmd_get(&file, &keys)
        }
        Command::Fetch { url, keys } => {
            let cfg = setup(&cli.config)?;
            cmd_fetch(&cfg, &url, &keys)
        }
    }
}

/// Load config and install the tracing subscriber it describes.
fn setup(config_path: &Path) -> Result<UtilsConfig> {
    let cfg = load_config(config_path).context("load config")?;
    logging::init(&cfg.log_filter);
    debug!(config = %config_path.display(), "config loaded");
    Ok(cfg)
}

fn cmd_init(path: &Path, force: bool) -> Result<()> {
    if !force && path.exists() {
        info!(path = %path.display(), "config exists, leaving untouched");
        return Ok(());
    }
    write_config(path, &UtilsConfig::default())
        .with_context(|| format!("write {}", path.display()))
}

fn cmd_get(file: &Path, keys: &[String]) -> Result<()> {
    let raw = fs::read_to_string(file).with_context(|| format!("read {}", file.display()))?;
    let document: Value =
        serde_json::from_str(&raw).with_context(|| format!("parse {}", file.display()))?;
    print_at_path(&document, keys)
}

fn cmd_fetch(cfg: &UtilsConfig, url: &str, keys: &[String]) -> Result<()> {
    let transport = UreqTransport::new(cfg);
    let document = get_json(&transport, url)?;
    print_at_path(&document, keys)
}

fn print_at_path(document: &Value, keys: &[String]) -> Result<()> {
    let found =
        access_nested_map(document, keys).with_context(|| format!("access {}", keys.join(".")))?;
    println!(
        "{}",
        serde_json::to_string_pretty(found).context("serialize json")?
    );
    Ok(())
}

/// Map an error chain to a stable exit code.
fn exit_code_for(err: &anyhow::Error) -> i32 {
    if err.chain().any(|cause| cause.is::<KeyError>()) {
        exit_codes::MISSING_KEY
    } else {
        exit_codes::INVALID
    }
}
