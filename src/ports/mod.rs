//! Port traits defining external boundaries.
//!
//! Each trait represents a boundary between the route drawing core and
//! something outside it (the campus service, the user). Implementations
//! live in `src/adapters/`.

pub mod campus;
pub mod notifier;

pub use campus::{CampusFuture, CampusService};
pub use notifier::Notifier;
