//! Binary entrypoint for the Squirrel Haven CLI.
//!
//! Commands:
//! - `play` - start an interactive session with your squirrel
//! - `init` - write a starter `config.toml` and the text document
//! - `info [section]` - print a community page (rules, roles, events, ...)
//!
//! See the library crate docs for module-level details: `squirrelhaven::`.
use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use log::{info, warn};
use std::path::Path;

use squirrelhaven::community::{
    format_footer, format_invite, format_overview, format_section, Section,
};
use squirrelhaven::config::Config;
use squirrelhaven::haven::HavenServer;
use squirrelhaven::text::{TextCatalog, BUILTIN_TEXT};

#[derive(Parser)]
#[command(name = "squirrelhaven")]
#[command(about = "A cozy squirrel community in your terminal")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path (can be used before or after subcommand)
    #[arg(short, long, default_value = "config.toml", global = true)]
    config: String,

    /// Verbose logging (-v, -vv for more; may appear before or after subcommand)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive session
    Play,
    /// Write a default configuration and text document
    Init {
        /// Overwrite existing files
        #[arg(short, long)]
        force: bool,
    },
    /// Print a community info page and exit
    Info {
        /// rules, roles, events, highlights, faq, features or invite
        section: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Init { force } => {
            init_logging(&None, cli.verbose);
            info!("Initializing new Squirrel Haven configuration");
            run_init(&cli.config, force).await?;
        }
        Commands::Play => {
            let config = load_config(&cli.config).await?;
            init_logging(&Some(config.clone()), cli.verbose);
            info!("Starting Squirrel Haven v{}", env!("CARGO_PKG_VERSION"));
            let texts = load_texts(&config).await;
            let mut server = HavenServer::new(config, texts);
            server.run().await?;
        }
        Commands::Info { section } => {
            let config = load_config(&cli.config).await?;
            init_logging(&Some(config.clone()), cli.verbose);
            let texts = load_texts(&config).await;
            match section.as_deref() {
                None => {
                    print!("{}", format_overview(&config.haven, &texts));
                    print!("{}", format_footer(&config.haven, &texts));
                }
                Some(s) if s.eq_ignore_ascii_case("invite") || s.eq_ignore_ascii_case("join") => {
                    print!("{}", format_invite(&config.haven, &texts))
                }
                Some(s) => {
                    let section: Section = s.parse().map_err(|e: String| anyhow!(e))?;
                    print!("{}", format_section(section));
                }
            }
        }
    }

    Ok(())
}

/// Missing config file means defaults; a present but broken one is an error.
async fn load_config(path: &str) -> Result<Config> {
    if Path::new(path).exists() {
        Config::load(path).await
    } else {
        Ok(Config::default())
    }
}

async fn load_texts(config: &Config) -> TextCatalog {
    if Path::new(&config.text.path).exists() {
        TextCatalog::load(&config.text.path).await
    } else {
        info!(
            "Text document {} not found, using the bundled copy",
            config.text.path
        );
        TextCatalog::builtin()
    }
}

async fn run_init(config_path: &str, force: bool) -> Result<()> {
    if Path::new(config_path).exists() && !force {
        warn!("{} already exists; use --force to overwrite", config_path);
    } else {
        Config::create_default(config_path).await?;
        println!("Created {}", config_path);
    }

    let config = Config::default();
    let text_path = Path::new(&config.text.path);
    if text_path.exists() && !force {
        warn!("{} already exists; leaving it alone", text_path.display());
        return Ok(());
    }
    if let Some(parent) = text_path.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| anyhow!("Failed to create {}: {}", parent.display(), e))?;
        }
    }
    tokio::fs::write(text_path, BUILTIN_TEXT)
        .await
        .map_err(|e| anyhow!("Failed to write {}: {}", text_path.display(), e))?;
    println!("Created {}", text_path.display());
    println!("Run `squirrelhaven play` to meet your squirrel.");
    Ok(())
}

fn init_logging(config: &Option<Config>, verbosity: u8) {
    use std::io::Write;
    let mut builder = env_logger::Builder::new();
    // CLI verbosity overrides the configured level
    let configured = config
        .as_ref()
        .and_then(|c| c.logging.level.parse::<log::LevelFilter>().ok())
        .unwrap_or(log::LevelFilter::Info);
    let level = match verbosity {
        0 => configured,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    builder.filter_level(level);

    let log_file = config.as_ref().and_then(|c| c.logging.file.clone());
    let opened = log_file.as_ref().and_then(|file| {
        std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(file)
            .ok()
    });

    match opened {
        Some(f) => {
            let mutex = std::sync::Arc::new(std::sync::Mutex::new(f));
            // The session owns stdout, so with a log file the console only gets
            // a copy when the user asked for verbose output on a terminal.
            let echo = verbosity > 0 && atty::is(atty::Stream::Stderr);
            builder.format(move |fmt, record| {
                let ts = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
                let line = format!("{} [{}] {}", ts, record.level(), record.args());
                if let Ok(mut guard) = mutex.lock() {
                    let _ = writeln!(guard, "{}", line);
                }
                if echo {
                    writeln!(fmt, "{}", line)
                } else {
                    Ok(())
                }
            });
        }
        None => {
            if let Some(file) = &log_file {
                eprintln!("Could not open log file {}; logging to stderr", file);
            }
            builder.format(|fmt, record| {
                writeln!(
                    fmt,
                    "{} [{}] {}",
                    chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ"),
                    record.level(),
                    record.args()
                )
            });
        }
    }
    let _ = builder.try_init();
}
