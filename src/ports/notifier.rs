//! Notifier port for user-facing alerts.

/// Shows blocking messages to the user.
///
/// Failures of user actions are reported here at the point of call rather
/// than propagated.
pub trait Notifier: Send + Sync {
    /// Reports `message` to the user.
    fn alert(&self, message: &str);
}
