//! Vitrine - view-state controller for single-page portfolio sites

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use vitrine::Config;
use vitrine::replay::{self, Script};

/// Drive the portfolio view-state store from the command line
#[derive(Parser)]
#[command(name = "vitrine")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Site configuration file (defaults to $VITRINE_CONFIG, then built-in data)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a script of events/intents, printing one snapshot per intent
    Replay {
        /// Path to the JSON script
        script: PathBuf,
    },
    /// Print the effective site configuration
    Config,
    /// Print the portfolio items visible under a category
    Visible {
        /// Category id (`all` for no filter)
        #[arg(long, default_value = "all")]
        category: String,
    },
}

fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();
    let config_path = vitrine::paths::config_path(cli.config);
    let config = Config::load(config_path.as_deref())?;

    match cli.command {
        Commands::Replay { script } => cmd_replay(&config, &script),
        Commands::Config => {
            println!("{}", serde_json::to_string_pretty(&config)?);
            Ok(())
        }
        Commands::Visible { category } => cmd_visible(&config, &category),
    }
}

fn init_logging() {
    // Set DEBUG=0-3 to control verbosity (0=off, 1=warn, 2=info, 3=debug)
    let debug_level = std::env::var("DEBUG")
        .ok()
        .and_then(|v| v.parse::<u8>().ok())
        .unwrap_or(0);

    if debug_level == 0 {
        return;
    }

    let level = match debug_level {
        1 => tracing::Level::WARN,
        2 => tracing::Level::INFO,
        _ => tracing::Level::DEBUG,
    };

    let log_path = vitrine::paths::log_path();
    let directory = log_path
        .parent()
        .map_or_else(std::env::temp_dir, std::path::Path::to_path_buf);
    let file_appender = tracing_appender::rolling::never(directory, "vitrine.log");
    tracing_subscriber::fmt()
        .with_writer(file_appender)
        .with_max_level(level)
        .with_ansi(false)
        .init();
}

fn cmd_replay(config: &Config, script_path: &std::path::Path) -> Result<()> {
    let site = config.build().context("Invalid site configuration")?;
    let script = Script::load_from(script_path)?;

    let mut store = site.store();
    let mut translator = site.translator();
    let transcript = replay::run(&script, &mut store, &mut translator);

    for entry in &transcript.entries {
        println!("{}", serde_json::to_string(entry)?);
    }

    let visible: Vec<u32> = store
        .visible_items(&site.items)
        .iter()
        .map(|item| item.id.0)
        .collect();
    println!(
        "{}",
        serde_json::json!({
            "visible_items": visible,
            "notifications": transcript.notifications,
            "scrolled_to": store.viewport().scrolled_to(),
        })
    );

    let rejected = transcript.rejected().count();
    if rejected > 0 {
        eprintln!("{rejected} intent(s) rejected");
    }
    Ok(())
}

fn cmd_visible(config: &Config, category: &str) -> Result<()> {
    let site = config.build().context("Invalid site configuration")?;
    let mut store = site.store();
    store.filter_set(category)?;

    for item in store.visible_items(&site.items) {
        println!("{}\t{}\t{}", item.id, item.category_id, item.title);
    }
    Ok(())
}
