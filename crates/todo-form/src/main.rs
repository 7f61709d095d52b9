/*
[INPUT]:  CLI arguments, optional YAML configuration file, stored access token
[OUTPUT]: Add-task front-end (one-shot, interactive prompts or TUI)
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags, startup flow, or logging setup
*/

mod cli;
mod tui;

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use todo_form::context::resolve_token;
use todo_form::{AppConfig, ConsoleNotifier, FormContext, NoticeLog};

use crate::cli::add::AddRequest;
use crate::cli::token::TokenAction;

#[derive(Parser, Debug)]
#[command(name = "todo-form", version, about = "Add tasks to a remote task API")]
struct Cli {
    #[arg(long = "config", value_name = "PATH", global = true)]
    config_path: Option<PathBuf>,
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info", global = true)]
    log_level: String,
    /// Overrides api.base_url from the config file
    #[arg(long = "base-url", value_name = "URL", global = true)]
    base_url: Option<String>,
    /// Use this token instead of the stored one
    #[arg(long = "token", value_name = "TOKEN", global = true, env = "TODO_FORM_TOKEN")]
    token: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Submit one task from flags
    Add {
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: String,
        /// Local time in the display zone (YYYY-MM-DDTHH:MM) or RFC 3339
        #[arg(long)]
        deadline: String,
        /// Validate and print the payload without sending it
        #[arg(long = "dry-run")]
        dry_run: bool,
    },
    /// Fill the form through prompts
    Interactive,
    /// Full-screen form
    Tui,
    /// Manage the stored access token
    Token {
        #[command(subcommand)]
        action: TokenCommand,
    },
}

#[derive(Subcommand, Debug)]
enum TokenCommand {
    /// Store a token
    Set { token: String },
    /// Show the stored token, masked
    Show,
    /// Remove the stored token
    Clear,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();

    // Logs must not draw over the TUI, so they go to a file in that mode.
    let _log_guard = match args.command {
        Command::Tui => Some(init_file_tracing(&args.log_level)?),
        _ => {
            init_tracing(&args.log_level)?;
            None
        }
    };

    let mut config = AppConfig::load(args.config_path.as_deref()).context("load config")?;
    if let Some(base_url) = args.base_url {
        config.api.base_url = base_url;
        config.validate().context("validate config")?;
    }
    info!(base_url = %config.api.base_url, "configuration loaded");

    match args.command {
        Command::Token { action } => {
            let action = match action {
                TokenCommand::Set { token } => TokenAction::Set(token),
                TokenCommand::Show => TokenAction::Show,
                TokenCommand::Clear => TokenAction::Clear,
            };
            cli::token::run_token(&config, action).await
        }
        Command::Add {
            title,
            description,
            deadline,
            dry_run,
        } => {
            let token = resolve_token(&config, args.token).await?;
            let ctx = FormContext::new(&config, token, ConsoleNotifier)?;
            cli::add::run_add(
                &ctx,
                AddRequest {
                    title,
                    description,
                    deadline,
                    dry_run,
                },
            )
            .await
        }
        Command::Interactive => {
            let token = resolve_token(&config, args.token).await?;
            let ctx = FormContext::new(&config, token, ConsoleNotifier)?;
            cli::interactive::run_interactive(&ctx).await
        }
        Command::Tui => {
            let token = resolve_token(&config, args.token).await?;
            let notices = NoticeLog::new();
            let ctx = FormContext::new(&config, token, notices.clone())?;
            tui::run_tui(&ctx, notices).await
        }
    }
}

fn init_tracing(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}

fn init_file_tracing(log_level: &str) -> Result<WorkerGuard> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    let log_dir = dirs::data_dir()
        .map(|dir| dir.join("todo-form").join("logs"))
        .unwrap_or_else(std::env::temp_dir);
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("create log directory {}", log_dir.display()))?;

    let appender = tracing_appender::rolling::never(&log_dir, "todo-form.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(writer)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(guard)
}
