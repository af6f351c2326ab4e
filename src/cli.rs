//! Command-line interface and the interactive session loop

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::time::{Duration, Instant};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info, warn};
use crate::{
    config::Config,
    notification::{EmailJsClient, EmailTransport},
    session::Session,
    types::NotifyState,
    utils,
};

#[derive(Parser, Debug)]
#[command(name = "blendable")]
#[command(version, about = "Yield Optimizer for Blend Protocol")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the pool catalog
    Pools,

    /// Compare a pool against the best available yield
    Check {
        /// Pool id (defaults to the first pool)
        #[arg(short, long)]
        pool: Option<String>,
    },

    /// Compare and email the result
    Notify {
        /// Recipient address
        #[arg(short, long)]
        email: String,

        /// Pool id (defaults to the first pool)
        #[arg(short, long)]
        pool: Option<String>,
    },

    /// Line-driven session: list, select, check, email, notify
    Interactive,
}

/// One line of input in an interactive session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    List,
    Select(String),
    Check,
    Email(String),
    Notify,
    Status,
    Help,
    Quit,
    Unknown(String),
}

impl SessionCommand {
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        let command = match verb.to_ascii_lowercase().as_str() {
            "list" | "ls" => SessionCommand::List,
            "select" | "use" if !rest.is_empty() => SessionCommand::Select(rest.to_string()),
            "check" => SessionCommand::Check,
            "email" => SessionCommand::Email(rest.to_string()),
            "notify" => SessionCommand::Notify,
            "status" => SessionCommand::Status,
            "help" | "?" => SessionCommand::Help,
            "quit" | "exit" | "q" => SessionCommand::Quit,
            _ => SessionCommand::Unknown(line.to_string()),
        };
        Some(command)
    }
}

pub const SESSION_HELP: &str =
    "commands: list | select <id> | check | email <address> | notify | status | help | quit";

pub async fn run(cli: Cli, config: &Config) -> Result<()> {
    let confirmation_delay = Duration::from_secs(config.confirmation_display_secs);
    let mut session = Session::new(confirmation_delay);
    session.load()?;

    match cli.command {
        Commands::Pools => {
            utils::print_pool_list(session.pools(), session.selected_pool());
        }
        Commands::Check { pool } => {
            select_if_given(&mut session, pool)?;
            check(&mut session);
        }
        Commands::Notify { email, pool } => {
            select_if_given(&mut session, pool)?;
            check(&mut session);
            let transport = EmailJsClient::from_config(config)?;
            notify_once(&mut session, &transport, &email).await?;
            utils::print_session_status(&session, Instant::now());
        }
        Commands::Interactive => {
            let transport = EmailJsClient::from_config(config)?;
            run_interactive(&mut session, &transport).await?;
        }
    }

    Ok(())
}

fn select_if_given(session: &mut Session, pool: Option<String>) -> Result<()> {
    if let Some(id) = pool {
        session.select_pool(&id)?;
    }
    Ok(())
}

/// Sends the current comparison to `email`; a skipped send is an error here.
pub async fn notify_once<T: EmailTransport>(
    session: &mut Session,
    transport: &T,
    email: &str,
) -> Result<()> {
    session.set_email(email);
    match session.send_notification(transport).await {
        NotifyState::Sent => Ok(()),
        NotifyState::Error => {
            let message = session.error().unwrap_or_default().to_string();
            Err(anyhow::anyhow!(message))
        }
        NotifyState::Idle | NotifyState::Sending => {
            warn!("No notification sent to {:?}", email);
            Err(anyhow::anyhow!("Nothing to send: an email address and a comparison are required"))
        }
    }
}

fn check(session: &mut Session) {
    match session.check_for_better_yields() {
        Some(result) => utils::print_comparison(result),
        None => warn!("No pool selected"),
    }
}

pub async fn run_interactive<T: EmailTransport>(session: &mut Session, transport: &T) -> Result<()> {
    utils::print_pool_list(session.pools(), session.selected_pool());
    info!("{}", SESSION_HELP);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        session.clear_expired_confirmation(Instant::now());
        let Some(command) = SessionCommand::parse(&line) else {
            continue;
        };
        if !apply_command(session, transport, command).await {
            break;
        }
    }

    Ok(())
}

/// Applies one command; returns false when the session should end.
pub async fn apply_command<T: EmailTransport>(
    session: &mut Session,
    transport: &T,
    command: SessionCommand,
) -> bool {
    match command {
        SessionCommand::List => utils::print_pool_list(session.pools(), session.selected_pool()),
        SessionCommand::Select(id) => match session.select_pool(&id) {
            Ok(()) => utils::print_session_status(session, Instant::now()),
            Err(e) => error!("{}", e),
        },
        SessionCommand::Check => {
            if session.can_check() {
                check(session);
            }
        }
        SessionCommand::Email(address) => session.set_email(&address),
        SessionCommand::Notify => {
            if session.comparison_result().is_none() {
                warn!("Run `check` before asking for a notification");
            } else if session.can_notify() {
                session.send_notification(transport).await;
                utils::print_session_status(session, Instant::now());
            } else {
                warn!("Enter an email first: email <address>");
            }
        }
        SessionCommand::Status => utils::print_session_status(session, Instant::now()),
        SessionCommand::Help => info!("{}", SESSION_HELP),
        SessionCommand::Quit => return false,
        SessionCommand::Unknown(line) => warn!("Unknown command: {} ({})", line, SESSION_HELP),
    }
    true
}
