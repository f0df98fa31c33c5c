//! tabviews - Entry Point

use clap::{Parser, Subcommand};
use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};
use tabviews::config::{self, ResolvedConfig};
use tabviews::layout::load_layout;
use tabviews::model::{AppError, DocumentId, Existing, Hints, Placement, Strategy};
use tabviews::state::ViewManager;
use tracing::info;

/// tabviews - resolve which editor view shows a document
#[derive(Parser, Debug)]
#[command(name = "tabviews")]
#[command(version)]
#[command(about = "Resolve editor views for documents across a tabbed workspace")]
pub struct Args {
    /// Path to configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve the view for a document in a workspace layout
    Resolve {
        /// Workspace layout file
        #[arg(long)]
        layout: PathBuf,

        /// Document to resolve
        #[arg(value_parser = parse_document)]
        document: DocumentId,

        /// Existence requirement
        #[arg(long, value_parser = parse_existing)]
        existing: Option<Existing>,

        /// Selection strategy; repeat to give fallbacks in order
        #[arg(long = "strategy", value_parser = parse_strategy)]
        strategies: Vec<Strategy>,

        /// Create a view when none qualifies, even if the config says not to
        #[arg(long, conflicts_with = "no_create")]
        create: bool,

        /// Never create a view
        #[arg(long)]
        no_create: bool,

        /// Where a created view goes
        #[arg(long, value_parser = parse_placement)]
        placement: Option<Placement>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the tab bar for a workspace layout
    Tabs {
        /// Workspace layout file
        #[arg(long)]
        layout: PathBuf,

        /// Tab bar width in columns
        #[arg(long)]
        width: Option<u16>,
    },
}

fn parse_document(raw: &str) -> Result<DocumentId, String> {
    DocumentId::new(raw).map_err(|e| e.to_string())
}

fn parse_existing(raw: &str) -> Result<Existing, String> {
    Existing::parse(raw).ok_or_else(|| format!("expected always, never or current_tab, got '{}'", raw))
}

fn parse_strategy(raw: &str) -> Result<Strategy, String> {
    Strategy::parse(raw).ok_or_else(|| {
        let names: Vec<&str> = Strategy::ALL.iter().map(|s| s.as_str()).collect();
        format!("expected one of {}, got '{}'", names.join(", "), raw)
    })
}

/// Creation override from `--create` / `--no-create`; `None` keeps the config.
fn create_override(create: bool, no_create: bool) -> Option<bool> {
    match (create, no_create) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

fn parse_placement(raw: &str) -> Result<Placement, String> {
    Placement::parse(raw).ok_or_else(|| format!("expected new_tab or current_tab, got '{}'", raw))
}

/// Outcome of a `resolve` command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct Resolution {
    document: String,
    view: Option<u64>,
    tab: Option<usize>,
    created: bool,
    hints: Hints,
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.view, self.tab) {
            (Some(view), Some(tab)) => {
                write!(f, "view {} tab {} document {}", view, tab, self.document)?;
                if self.created {
                    write!(f, " created")?;
                }
                Ok(())
            }
            _ => write!(f, "no view"),
        }
    }
}

fn resolve_config(args: &Args) -> Result<ResolvedConfig, AppError> {
    // Defaults → Config File → Env Vars → CLI Args
    let config_file = config::load_config_with_precedence(args.config.clone())?;
    let merged = config::merge_config(config_file);
    let with_env = config::apply_env_overrides(merged);

    let resolved = match &args.command {
        Command::Resolve {
            existing,
            strategies,
            create,
            no_create,
            placement,
            ..
        } => config::apply_cli_overrides(
            with_env,
            *existing,
            strategies.clone(),
            create_override(*create, *no_create),
            *placement,
        ),
        Command::Tabs { width, .. } => {
            let mut config = with_env;
            if let Some(width) = width {
                config.tab_bar_width = *width;
            }
            config
        }
    };
    Ok(resolved)
}

fn resolve(
    layout: &Path,
    document: &DocumentId,
    hints: &Hints,
) -> Result<Resolution, AppError> {
    let mut manager = ViewManager::headless();
    load_layout(layout)?.apply(&mut manager)?;

    let existing: Vec<_> = manager.editors_for(document).iter().map(|v| v.id).collect();
    let view = manager.editor_for(document, hints);
    let tab = view
        .and_then(|id| manager.tabs().tab_of(id))
        .and_then(|tab| manager.tabs().position_of(tab));

    Ok(Resolution {
        document: document.to_string(),
        view: view.map(|id| id.get()),
        tab,
        created: view.is_some_and(|id| !existing.contains(&id)),
        hints: hints.clone(),
    })
}

fn run(args: Args) -> Result<(), AppError> {
    let config = resolve_config(&args)?;

    tabviews::logging::init(&config.log_file_path)?;
    info!(config = ?config, "Configuration loaded and resolved");

    match &args.command {
        Command::Resolve {
            layout,
            document,
            json,
            ..
        } => {
            let resolution = resolve(layout, document, &config.default_hints)?;
            if *json {
                println!("{}", serde_json::to_string_pretty(&resolution)?);
            } else {
                println!("{}", resolution);
            }
        }
        Command::Tabs { layout, .. } => {
            let mut manager = ViewManager::headless();
            load_layout(layout)?.apply(&mut manager)?;
            for row in tabviews::view::render_tab_bar(&manager, config.tab_bar_width) {
                println!("{}", row);
            }
        }
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    run(Args::parse())?;
    Ok(())
}
