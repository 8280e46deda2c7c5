//! komi - comic catalog CLI
//!
//! Drives the search overlay, reader bookkeeping and recommendations
//! against a catalog exported as JSON.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use komi_core::catalog::{ComicOrder, MemoryCatalog};
use komi_core::recommend::Tab;
use komi_core::storage::RedbStorage;
use komi_core::types::AppConfig;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

mod commands;

#[derive(Parser)]
#[command(name = "komi", version, about = "Search and read a comic catalog")]
struct Cli {
    /// Catalog export with `comics` and `chapters` arrays.
    #[arg(long, env = "KOMI_CATALOG")]
    catalog: PathBuf,

    /// Directory holding local storage and the default config file.
    #[arg(long, env = "KOMI_DATA_DIR", default_value = ".komi")]
    data_dir: PathBuf,

    /// Config file; defaults to `config.toml` in the data directory.
    #[arg(long, env = "KOMI_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Fuzzy-search the catalog the way the search overlay does.
    Search {
        query: String,
        /// Press the down arrow this many times before confirming.
        #[arg(long, default_value_t = 0)]
        down: usize,
        /// Press Enter on the selection (or show all results).
        #[arg(long)]
        confirm: bool,
    },
    /// Recent searches.
    History {
        #[command(subcommand)]
        action: Option<HistoryAction>,
    },
    /// Open a chapter: prints its neighbors and updates reading progress.
    Read { comic: String, chapter: String },
    /// Show the continue-reading pointer.
    LastRead,
    /// Personalized recommendations.
    Recommend {
        #[arg(long, value_enum, default_value_t = TabArg::ForYou)]
        tab: TabArg,
    },
    /// Page through the catalog.
    Browse {
        /// Zero-based page index.
        #[arg(long, default_value_t = 0)]
        page: usize,
        #[arg(long, default_value_t = 20)]
        per_page: usize,
        #[arg(long, value_enum, default_value_t = OrderArg::Latest)]
        order: OrderArg,
    },
}

#[derive(Subcommand, Clone)]
enum HistoryAction {
    List,
    Remove { term: String },
    Clear,
}

#[derive(ValueEnum, Clone, Copy)]
enum TabArg {
    #[value(name = "foryou")]
    ForYou,
    Trending,
    Completed,
    HiddenGems,
}

impl From<TabArg> for Tab {
    fn from(tab: TabArg) -> Self {
        match tab {
            TabArg::ForYou => Tab::ForYou,
            TabArg::Trending => Tab::Trending,
            TabArg::Completed => Tab::Completed,
            TabArg::HiddenGems => Tab::HiddenGems,
        }
    }
}

#[derive(ValueEnum, Clone, Copy)]
enum OrderArg {
    Latest,
    Views,
    Title,
}

impl From<OrderArg> for ComicOrder {
    fn from(order: OrderArg) -> Self {
        match order {
            OrderArg::Latest => ComicOrder::Latest,
            OrderArg::Views => ComicOrder::Views,
            OrderArg::Title => ComicOrder::Title,
        }
    }
}

/// Everything a command needs, built once at startup.
pub(crate) struct AppContext {
    pub config: AppConfig,
    pub catalog: MemoryCatalog,
    pub storage: RedbStorage,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let ctx = build_context(&cli)?;

    match cli.command {
        Command::Search {
            query,
            down,
            confirm,
        } => commands::search(&ctx, &query, down, confirm),
        Command::History { action } => match action.unwrap_or(HistoryAction::List) {
            HistoryAction::List => commands::history_list(&ctx),
            HistoryAction::Remove { term } => commands::history_remove(&ctx, &term),
            HistoryAction::Clear => commands::history_clear(&ctx),
        },
        Command::Read { comic, chapter } => commands::read(&ctx, &comic, &chapter),
        Command::LastRead => commands::last_read(&ctx),
        Command::Recommend { tab } => commands::recommend(&ctx, tab.into()),
        Command::Browse {
            page,
            per_page,
            order,
        } => commands::browse(&ctx, page, per_page, order.into()),
    }
}

fn build_context(cli: &Cli) -> anyhow::Result<AppContext> {
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| AppConfig::path(&cli.data_dir));
    let config = AppConfig::load(&config_path)
        .with_context(|| format!("failed to read config {}", config_path.display()))?;

    let problems = config.validate();
    for problem in &problems {
        tracing::warn!(%problem, "invalid config value, using default");
    }
    let config = if problems.is_empty() {
        config
    } else {
        config.with_defaults_for_invalid()
    };

    let catalog = MemoryCatalog::from_json_file(&cli.catalog)
        .with_context(|| format!("failed to load catalog {}", cli.catalog.display()))?;
    let storage = RedbStorage::open(&cli.data_dir)
        .with_context(|| format!("failed to open storage in {}", cli.data_dir.display()))?;

    Ok(AppContext {
        config,
        catalog,
        storage,
    })
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}
