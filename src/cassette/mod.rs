//! Cassettes: recorded campus service conversations.
//!
//! A cassette captures every call made through the `CampusService` port
//! so that a session can be replayed later without a running server.

pub mod format;
pub mod recorder;
pub mod replayer;
