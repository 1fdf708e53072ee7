//! Maps validated CLI arguments to the action to run.

use crate::cli::actions::{Action, create_user, login};
use crate::cli::commands::{self, api};
use anyhow::{Context, Result, anyhow};
use clap::ArgMatches;
use secrecy::SecretString;

fn sub_matches<'a>(matches: &'a ArgMatches, name: &str) -> Result<&'a ArgMatches> {
    matches
        .subcommand_matches(name)
        .context("arguments not found")
}

/// # Errors
/// Returns an error if required arguments are missing or invalid.
pub fn handler(matches: &ArgMatches) -> Result<Action> {
    match matches.subcommand_name() {
        Some(commands::login::NAME) => {
            let m = sub_matches(matches, commands::login::NAME)?;
            let string_arg = |name: &str| m.get_one::<String>(name).cloned().unwrap_or_default();

            Ok(Action::Login(login::Args {
                client: api::Options::parse(m)?,
                email: string_arg(commands::login::ARG_EMAIL),
                password: SecretString::from(string_arg(commands::login::ARG_PASSWORD)),
            }))
        }

        Some(commands::create_user::NAME) => {
            let m = sub_matches(matches, commands::create_user::NAME)?;
            let required = |name: &str| {
                m.get_one::<String>(name)
                    .cloned()
                    .with_context(|| format!("missing required argument: --{name}"))
            };

            Ok(Action::CreateUser(create_user::Args {
                email: required(commands::create_user::ARG_EMAIL)?,
                first_name: required(commands::create_user::ARG_FIRST_NAME)?,
                last_name: required(commands::create_user::ARG_LAST_NAME)?,
                password_hash: SecretString::from(required(
                    commands::create_user::ARG_PASSWORD_HASH,
                )?),
            }))
        }

        Some(other) => Err(anyhow!("unknown command: {other}")),
        None => Err(anyhow!("no command given")),
    }
}
