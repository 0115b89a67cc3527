//! Terminal front end for the comment moderation board.

mod config;
mod render;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use comment_board::{Action, BoardTargets, CommentBoard, ListTarget};
use comments_client::{CommentId, CommentsClient};
use console::{style, Term};
use dialoguer::{theme::ColorfulTheme, Select};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::render::{print_action_error, print_board, print_error};

type Board = CommentBoard<CommentsClient, ListTarget>;

#[derive(Parser)]
#[command(name = "moderate")]
#[command(about = "List, approve and delete comments")]
struct Cli {
    /// Base URL of the comments API (overrides COMMENTS_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print pending and approved comments
    List,

    /// Approve a comment, then print the reloaded board
    Approve { id: String },

    /// Delete a comment, then print the reloaded board
    Delete { id: String },

    /// Pick actions from a menu until exit (default)
    Interactive,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let mut config = Config::from_env().context("Failed to load configuration")?;
    if let Some(api_url) = cli.api_url {
        config.api_url = api_url;
    }
    let mut client = CommentsClient::new(config.api_url.clone());
    if let Some(timeout) = config.timeout {
        client = client.with_timeout(timeout);
    }
    tracing::debug!(api_url = client.base_url(), "Configuration loaded");

    let board = CommentBoard::init(
        client,
        BoardTargets {
            pending: ListTarget::new(),
            approved: ListTarget::new(),
        },
    )
    .with_labels(config.labels.clone());

    match cli.command.unwrap_or(Commands::Interactive) {
        Commands::List => {
            board.load().await.context("Failed to load comments")?;
        }
        // Errors name whether the server change itself failed or only the
        // reload after it.
        Commands::Approve { id } => {
            board.on_approve_requested(&parse_id(&id)).await?;
        }
        Commands::Delete { id } => {
            board.on_delete_requested(&parse_id(&id)).await?;
        }
        Commands::Interactive => return run_interactive(&board).await,
    }

    print_board(&board.snapshot());
    Ok(())
}

/// Numeric ids go over the wire as numbers, anything else as text.
fn parse_id(raw: &str) -> CommentId {
    raw.parse::<CommentId>().unwrap_or_else(|never| match never {})
}

enum MenuChoice {
    Act(Action),
    Reload,
    Exit,
}

async fn run_interactive(board: &Board) -> Result<()> {
    let term = Term::stdout();
    let theme = ColorfulTheme::default();

    if let Err(err) = board.load().await {
        print_error("Failed to load comments", &err);
    }

    loop {
        let view = board.snapshot();
        print_board(&view);
        println!();

        let mut choices = Vec::new();
        let mut items = Vec::new();
        for node in view.pending.iter().chain(view.approved.iter()) {
            for action in &node.actions {
                items.push(format!("{} {}", action.label, node.label));
                choices.push(MenuChoice::Act(action.clone()));
            }
        }
        items.push("Reload".to_string());
        choices.push(MenuChoice::Reload);
        items.push("Exit".to_string());
        choices.push(MenuChoice::Exit);

        let selection = Select::with_theme(&theme)
            .with_prompt("What would you like to do?")
            .items(&items)
            .default(0)
            .interact_on(&term)?;

        // The previous render stays on screen after a failure.
        match &choices[selection] {
            MenuChoice::Act(action) => {
                if let Err(err) = board.dispatch(action).await {
                    print_action_error(&err);
                }
            }
            MenuChoice::Reload => {
                if let Err(err) = board.load().await {
                    print_error("Failed to reload comments", &err);
                }
            }
            MenuChoice::Exit => {
                println!("{}", style("Bye").blue());
                return Ok(());
            }
        }
    }
}
