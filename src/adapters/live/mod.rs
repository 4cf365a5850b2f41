//! Live adapters for real external interactions.

pub mod campus;
pub mod notifier;

pub use campus::LiveCampusService;
pub use notifier::StderrNotifier;
