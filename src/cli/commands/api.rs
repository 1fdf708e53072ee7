use crate::auth::ClientConfig;
use anyhow::{Context, Result};
use clap::{Arg, ArgMatches, Command};
use std::time::Duration;
use url::Url;

pub const ARG_API_URL: &str = "api-url";
pub const ARG_TIMEOUT: &str = "timeout";

#[must_use]
pub fn with_args(command: Command) -> Command {
    command
        .arg(
            Arg::new(ARG_API_URL)
                .long(ARG_API_URL)
                .help("Account API base URL, example: https://api.tld:5001")
                .env("USERHUB_API_URL")
                .required(true),
        )
        .arg(
            Arg::new(ARG_TIMEOUT)
                .long(ARG_TIMEOUT)
                .help("Request timeout in seconds")
                .default_value("10")
                .env("USERHUB_TIMEOUT")
                .value_parser(clap::value_parser!(u64).range(1..)),
        )
}

pub struct Options;

impl Options {
    /// # Errors
    /// Returns an error if the API URL is missing or invalid.
    pub fn parse(matches: &ArgMatches) -> Result<ClientConfig> {
        let url = matches
            .get_one::<String>(ARG_API_URL)
            .context("missing required argument: --api-url")?;
        let url = Url::parse(url).context("invalid USERHUB_API_URL")?;

        let timeout = matches.get_one::<u64>(ARG_TIMEOUT).copied().unwrap_or(10);

        Ok(ClientConfig::new(url).with_timeout(Duration::from_secs(timeout)))
    }
}
