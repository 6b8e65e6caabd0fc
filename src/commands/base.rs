/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use super::*;
use crate::config::*;
use crate::input::*;
use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{Shell, generate};
use connector::RequestConfig;
use connector::error::ConnectorError;
use connector::gate::Route;
use connector::http::HttpApi;
use connector::session::{self, SessionStore};
use std::io;

#[derive(Parser, Debug)]
#[command(name = "Agency", display_name = "Agency", bin_name = "agency", author = "Wavelens", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    cmd: Option<MainCommands>,
    #[arg(long, value_enum)]
    generate_completions: Option<Shell>,
}

#[derive(Subcommand, Debug)]
enum MainCommands {
    Config {
        key: String,
        value: Option<String>,
    },
    Status,
    Login {
        #[arg(short, long)]
        email: Option<String>,
    },
    Logout,
    Dashboard,
    Employee {
        #[command(subcommand)]
        cmd: employee::Commands,
    },
    Client {
        #[command(subcommand)]
        cmd: client::Commands,
    },
    Project {
        #[command(subcommand)]
        cmd: project::Commands,
    },
    Evaluation {
        #[command(subcommand)]
        cmd: evaluation::Commands,
    },
    Review {
        #[command(subcommand)]
        cmd: review::Commands,
    },
    Profile {
        #[command(subcommand)]
        cmd: profile::Commands,
    },
}

pub async fn run_cli() -> Result<()> {
    let cli = Cli::parse();

    if let Some(shell) = cli.generate_completions {
        let mut app = Cli::command();
        let bin_name = app.get_name().to_string();
        generate(shell, &mut app, bin_name, &mut io::stdout());
        return Ok(());
    }

    let Some(cmd) = cli.cmd else {
        Cli::command().print_help()?;
        return Ok(());
    };

    match cmd {
        MainCommands::Config { key, value } => set_get_value(&ConfigFile::open()?, &key, value),
        MainCommands::Status => status(),
        MainCommands::Login { email } => login(email).await,
        MainCommands::Logout => {
            session::logout(&ConfigFile::open()?)?;
            println!("Logged out.");
            Ok(())
        }
        MainCommands::Dashboard => dashboard::handle().await,
        MainCommands::Employee { cmd } => employee::handle(cmd).await,
        MainCommands::Client { cmd } => client::handle(cmd).await,
        MainCommands::Project { cmd } => project::handle(cmd).await,
        MainCommands::Evaluation { cmd } => evaluation::handle(cmd).await,
        MainCommands::Review { cmd } => review::handle(cmd).await,
        MainCommands::Profile { cmd } => profile::handle(cmd).await,
    }
}

fn status() -> Result<()> {
    let file = ConfigFile::open()?;
    let stored = file.load()?;

    match file.get(ConfigKey::Server)? {
        Some(server) => println!("Server: {}", server),
        None => println!("Server: [unset]"),
    }

    match stored.session() {
        Some(session) => {
            println!("Logged in as {}.", session.role);
            println!("Home: {}", Route::dashboard(session.role));
        }
        None if stored.token().is_some() => {
            println!("Logged in with an unrecognized role. Run `agency login` again.")
        }
        None => println!("Not logged in. Use `agency login` to log in."),
    }

    Ok(())
}

async fn login(email: Option<String>) -> Result<()> {
    let file = ConfigFile::open()?;

    let server_url = match file.get(ConfigKey::Server)? {
        Some(server_url) => server_url,
        None => {
            let server_url = ask_for_input("Server URL")?;
            file.set(ConfigKey::Server, Some(server_url.clone()))?;
            server_url
        }
    };

    let email = match email {
        Some(email) => email,
        None => ask_for_input("Email")?,
    };
    let password = ask_for_password()?;

    let api = HttpApi::new(RequestConfig {
        server_url,
        token: None,
    });
    let session = session::login(&api, &file, &email, &password).await?;

    println!("Logged in as {}.", session.role);
    println!("Home: {}. Run `agency dashboard` to open it.", Route::dashboard(session.role));
    Ok(())
}

/// The single place errors reach the user. An expired session is cleared
/// here so the next command asks for a login.
pub fn report(err: &anyhow::Error) {
    match err.downcast_ref::<ConnectorError>() {
        Some(ConnectorError::SessionExpired) => {
            let cleared = ConfigFile::open().and_then(|file| Ok(file.clear()?));

            if let Err(e) = cleared {
                tracing::warn!("could not clear stored session: {:#}", e);
            }

            eprintln!("{}", ConnectorError::SessionExpired);
        }
        Some(ConnectorError::NoResponse(cause)) => {
            tracing::debug!("transport failure: {}", cause);
            eprintln!("{}", err);
        }
        Some(other) => eprintln!("{}", other.user_message()),
        None => eprintln!("{:#}", err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parses_list_flags() {
        let cli = Cli::try_parse_from([
            "agency", "project", "list", "--status", "OnProgress", "--search", "web", "--sort",
            "deadline-asc",
        ])
        .unwrap();

        assert!(matches!(cli.cmd, Some(MainCommands::Project { .. })));
        assert!(Cli::try_parse_from(["agency", "employee", "list", "--sort", "sideways"]).is_err());
    }
}
