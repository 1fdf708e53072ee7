use std::io::{self, Write};
use std::sync::Mutex;
use tracing::warn;

/// Surfaces user-visible errors.
pub trait Notifier {
    fn show_error(&self, message: &str);
}

/// Writes every error to the log at `WARN`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn show_error(&self, message: &str) {
        warn!(message, "Authentication error");
    }
}

/// Prints each error as one line, regardless of log verbosity.
#[derive(Debug)]
pub struct ConsoleNotifier<W = io::Stderr> {
    out: Mutex<W>,
}

impl ConsoleNotifier {
    #[must_use]
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl<W: Write> ConsoleNotifier<W> {
    #[must_use]
    pub const fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    /// Returns the writer, or `None` if a writer panicked while holding it.
    pub fn into_inner(self) -> Option<W> {
        self.out.into_inner().ok()
    }
}

impl<W: Write> Notifier for ConsoleNotifier<W> {
    fn show_error(&self, message: &str) {
        let Ok(mut out) = self.out.lock() else {
            return;
        };

        if let Err(e) = writeln!(out, "error: {message}").and_then(|()| out.flush()) {
            warn!("failed to print error: {}", e);
        }
    }
}

impl<N: Notifier + ?Sized> Notifier for &N {
    fn show_error(&self, message: &str) {
        (**self).show_error(message);
    }
}
