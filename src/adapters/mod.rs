//! Port implementations.
//!
//! - `live`: real HTTP and terminal adapters.
//! - `recording`: wraps a live adapter and writes every call to a cassette.
//! - `replaying`: answers calls from a recorded cassette.

pub mod live;
pub mod recording;
pub mod replaying;
