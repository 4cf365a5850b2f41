//! Live notifier writing alerts to standard error.

use log::warn;

use crate::ports::notifier::Notifier;

/// Prints alerts to stderr.
pub struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn alert(&self, message: &str) {
        warn!("alert: {message}");
        eprintln!("{message}");
    }
}
