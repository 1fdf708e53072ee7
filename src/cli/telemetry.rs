use anyhow::Result;
use tracing::Level;
use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt};

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over `level`. Logs go to stderr so stdout only
/// carries command output.
///
/// # Errors
/// Returns an error if a global subscriber is already installed.
pub fn init(level: Level, json: bool) -> Result<()> {
    let env_filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    let fmt_layer = fmt::layer()
        .with_file(true)
        .with_line_number(true)
        .with_thread_ids(true)
        .with_target(false)
        .with_writer(std::io::stderr);

    let registry = Registry::default().with(env_filter);

    if json {
        tracing::subscriber::set_global_default(registry.with(fmt_layer.json()))?;
    } else {
        tracing::subscriber::set_global_default(registry.with(fmt_layer))?;
    }

    Ok(())
}
