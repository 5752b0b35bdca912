//! CLI argument parsing and subcommand dispatch.

use crate::{
    config::{BASE_URL_ENV, resolve_base_url},
    prefs::CliPrefs,
    repl::{AdvisorRepl, ChatRepl},
};
use anyhow::Result;
use clap::{Parser, Subcommand};
use client::{ClientConfig, NovaClient};
use tracing_subscriber::{EnvFilter, fmt};

pub mod config;
pub mod send;
pub mod session;
pub mod toolkit;

/// Nova assistant and career advisor.
#[derive(Parser, Debug)]
#[command(name = "nova", version, about = "Nova assistant and career advisor")]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,

    /// Backend base URL.
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Verbosity level (use -v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Chat with the Nova assistant.
    Chat,
    /// Open the career dashboard.
    Advisor,
    /// Send a one-shot message to the assistant.
    Send(send::Send),
    /// Score a resume against a job description.
    Match(toolkit::Match),
    /// Ask a question about a resume.
    Qa(toolkit::Qa),
    /// Inspect advisor sessions.
    Session {
        /// Session subcommand.
        #[command(subcommand)]
        action: SessionCommand,
    },
    /// Manage CLI configuration.
    Config {
        /// Config subcommand.
        #[command(subcommand)]
        action: ConfigCommand,
    },
}

/// Session subcommands.
#[derive(Subcommand, Debug)]
pub enum SessionCommand {
    /// Show session metadata.
    Info {
        /// Session id.
        id: String,
    },
    /// Print the session's conversation.
    History {
        /// Session id.
        id: String,
    },
    /// Delete the session on the backend.
    Delete {
        /// Session id.
        id: String,
    },
}

/// Config management subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Set a configuration value.
    Set {
        /// Configuration key.
        key: String,
        /// Configuration value.
        value: String,
    },
}

impl Cli {
    /// Initialize the tracing subscriber on stderr. `RUST_LOG` wins over `-v`.
    pub fn init_tracing(&self) {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            let directive = match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            };
            EnvFilter::new(directive)
        });

        fmt()
            .without_time()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }

    /// Run the selected command.
    pub async fn run(self) -> Result<()> {
        if let Command::Config { action } = &self.command {
            return config::run(action);
        }

        let prefs = CliPrefs::load()?;
        let env = std::env::var(BASE_URL_ENV).ok();
        let base_url = resolve_base_url(self.base_url.as_deref(), env.as_deref(), &prefs);
        tracing::debug!("using backend {base_url}");
        let transport = NovaClient::new(ClientConfig { base_url }).transport()?;

        match self.command {
            Command::Chat => {
                ChatRepl::new(transport, prefs.keep_history())?
                    .run()
                    .await
            }
            Command::Advisor => {
                AdvisorRepl::new(transport, prefs.keep_history())?
                    .run()
                    .await
            }
            Command::Send(cmd) => cmd.run(&transport).await,
            Command::Match(cmd) => cmd.run(transport).await,
            Command::Qa(cmd) => cmd.run(transport).await,
            Command::Session { action } => action.run(&transport).await,
            Command::Config { .. } => Ok(()),
        }
    }
}
