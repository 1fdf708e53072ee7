pub mod api;
pub mod create_user;
pub mod logging;
pub mod login;

use clap::{
    ColorChoice, Command,
    builder::styling::{AnsiColor, Effects, Styles},
};

#[must_use]
pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    let long_version: &'static str = Box::leak(
        format!("{} - {}", env!("CARGO_PKG_VERSION"), crate::GIT_COMMIT_HASH).into_boxed_str(),
    );

    let command = Command::new("userhub")
        .about("User management sign-in client")
        .version(env!("CARGO_PKG_VERSION"))
        .long_version(long_version)
        .color(ColorChoice::Auto)
        .styles(styles)
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(login::command())
        .subcommand(create_user::command());

    logging::with_args(command)
}

#[cfg(test)]
mod tests {
    use super::*;

    const LOGIN_ENV: [(&str, Option<&str>); 5] = [
        ("USERHUB_API_URL", None),
        ("USERHUB_EMAIL", None),
        ("USERHUB_PASSWORD", None),
        ("USERHUB_TIMEOUT", None),
        ("USERHUB_LOG_LEVEL", None),
    ];

    #[test]
    fn test_new() {
        let command = new();

        assert_eq!(command.get_name(), "userhub");
        assert_eq!(
            command.get_about().map(ToString::to_string),
            Some("User management sign-in client".to_string())
        );
        assert_eq!(
            command.get_version().map(ToString::to_string),
            Some(env!("CARGO_PKG_VERSION").to_string())
        );
    }

    #[test]
    fn test_login_args() {
        temp_env::with_vars(LOGIN_ENV, || {
            let matches = new().get_matches_from(vec![
                "userhub",
                "login",
                "--api-url",
                "https://api.tld:5001",
                "--email",
                "user@example.com",
                "--password",
                "longenough1",
            ]);

            let (name, sub) = matches.subcommand().unwrap_or(("", &matches));
            assert_eq!(name, login::NAME);
            assert_eq!(
                sub.get_one::<String>(api::ARG_API_URL).cloned(),
                Some("https://api.tld:5001".to_string())
            );
            assert_eq!(
                sub.get_one::<String>(login::ARG_EMAIL).cloned(),
                Some("user@example.com".to_string())
            );
            assert_eq!(sub.get_one::<u64>(api::ARG_TIMEOUT).copied(), Some(10));
        });
    }

    #[test]
    fn test_login_env() {
        temp_env::with_vars(
            [
                ("USERHUB_API_URL", Some("http://localhost:5000")),
                ("USERHUB_EMAIL", Some("user@example.com")),
                ("USERHUB_PASSWORD", Some("longenough1")),
                ("USERHUB_TIMEOUT", Some("3")),
                ("USERHUB_LOG_LEVEL", Some("debug")),
            ],
            || {
                let matches = new().get_matches_from(vec!["userhub", "login"]);
                assert_eq!(
                    matches.get_one::<u8>(logging::ARG_VERBOSITY).copied(),
                    Some(3)
                );

                let sub = matches.subcommand_matches(login::NAME);
                assert!(sub.is_some());
                if let Some(sub) = sub {
                    assert_eq!(
                        sub.get_one::<String>(login::ARG_PASSWORD).cloned(),
                        Some("longenough1".to_string())
                    );
                    assert_eq!(sub.get_one::<u64>(api::ARG_TIMEOUT).copied(), Some(3));
                }
            },
        );
    }

    #[test]
    fn test_login_requires_api_url() {
        temp_env::with_vars(LOGIN_ENV, || {
            let result = new().try_get_matches_from(vec!["userhub", "login"]);
            assert!(result.is_err());
        });
    }

    #[test]
    fn test_login_rejects_zero_timeout() {
        temp_env::with_vars(LOGIN_ENV, || {
            let result = new().try_get_matches_from(vec![
                "userhub",
                "login",
                "--api-url",
                "http://localhost:5000",
                "--timeout",
                "0",
            ]);
            assert!(result.is_err());
        });
    }

    #[test]
    fn test_verbosity_flags() {
        for count in 0..5_u8 {
            temp_env::with_vars([("USERHUB_LOG_LEVEL", None::<&str>)], || {
                let mut args = vec![
                    "userhub".to_string(),
                    "create-user".to_string(),
                    "--email".to_string(),
                    "ada@example.com".to_string(),
                    "--first-name".to_string(),
                    "Ada".to_string(),
                    "--last-name".to_string(),
                    "Lovelace".to_string(),
                    "--password-hash".to_string(),
                    "hash".to_string(),
                ];

                if count > 0 {
                    args.insert(1, format!("-{}", "v".repeat(usize::from(count))));
                }

                let matches = new().get_matches_from(args);
                assert_eq!(
                    matches.get_one::<u8>(logging::ARG_VERBOSITY).copied(),
                    Some(count)
                );
            });
        }
    }

    #[test]
    fn test_subcommand_required() {
        let result = new().try_get_matches_from(vec!["userhub"]);
        assert!(result.is_err());
    }
}
