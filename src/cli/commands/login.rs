use crate::cli::commands::api;
use clap::{Arg, Command};

pub const NAME: &str = "login";
pub const ARG_EMAIL: &str = "email";
pub const ARG_PASSWORD: &str = "password";

#[must_use]
pub fn command() -> Command {
    let command = Command::new(NAME)
        .about("Sign in against the account API and print the session")
        .arg(
            Arg::new(ARG_EMAIL)
                .short('e')
                .long(ARG_EMAIL)
                .help("Account email")
                .env("USERHUB_EMAIL"),
        )
        .arg(
            Arg::new(ARG_PASSWORD)
                .short('p')
                .long(ARG_PASSWORD)
                .help("Account password")
                .env("USERHUB_PASSWORD")
                .hide_env_values(true),
        );

    api::with_args(command)
}
