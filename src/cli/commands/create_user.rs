use clap::{Arg, Command};

pub const NAME: &str = "create-user";
pub const ARG_EMAIL: &str = "email";
pub const ARG_FIRST_NAME: &str = "first-name";
pub const ARG_LAST_NAME: &str = "last-name";
pub const ARG_PASSWORD_HASH: &str = "password-hash";

#[must_use]
pub fn command() -> Command {
    Command::new(NAME)
        .about("Create a user entity and print it as JSON")
        .arg(
            Arg::new(ARG_EMAIL)
                .long(ARG_EMAIL)
                .help("User email")
                .required(true),
        )
        .arg(
            Arg::new(ARG_FIRST_NAME)
                .long(ARG_FIRST_NAME)
                .help("First name")
                .required(true),
        )
        .arg(
            Arg::new(ARG_LAST_NAME)
                .long(ARG_LAST_NAME)
                .help("Last name")
                .required(true),
        )
        .arg(
            Arg::new(ARG_PASSWORD_HASH)
                .long(ARG_PASSWORD_HASH)
                .help("Password hash, stored as given")
                .env("USERHUB_PASSWORD_HASH")
                .hide_env_values(true)
                .required(true),
        )
}
