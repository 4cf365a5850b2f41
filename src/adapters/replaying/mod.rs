//! Replaying adapters that serve recorded interactions.
//!
//! A cassette that cannot answer a call (nothing left to serve, a request
//! that differs from the recorded one, a malformed output) fails that call
//! with [`NetworkError::Replay`] instead of inventing an answer.

pub mod campus;

use std::sync::Mutex;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::cassette::replayer::CassetteReplayer;
use crate::error::NetworkError;

pub use campus::ReplayingCampusService;

/// Take the recorded output of the next `port`/`method` call made with `input`.
pub(crate) fn next_output(
    replayer: &Mutex<CassetteReplayer>,
    port: &str,
    method: &str,
    input: &Value,
) -> Result<Value, NetworkError> {
    let mut guard = match replayer.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    };
    let interaction =
        guard.next_interaction(port, method).map_err(|e| NetworkError::Replay(e.to_string()))?;
    if interaction.input != *input {
        return Err(NetworkError::Replay(format!(
            "{port}::{method} was recorded for {} but requested with {input}",
            interaction.input
        )));
    }
    Ok(interaction.output)
}

/// Decode an output stored with the Ok/Err JSON convention.
///
/// Mirror of `recording::record_result`.
pub(crate) fn replay_result<T>(output: Value) -> Result<T, NetworkError>
where
    T: DeserializeOwned,
{
    let malformed = |what: &str, e: serde_json::Error| {
        NetworkError::Replay(format!("recorded {what} value does not decode: {e}"))
    };
    match output {
        Value::Object(mut map) => {
            if let Some(ok) = map.remove("Ok") {
                serde_json::from_value(ok).map_err(|e| malformed("Ok", e))
            } else if let Some(err) = map.remove("Err") {
                Err(serde_json::from_value(err).map_err(|e| malformed("Err", e))?)
            } else {
                Err(NetworkError::Replay(format!(
                    "recorded result has neither Ok nor Err: {}",
                    Value::Object(map)
                )))
            }
        }
        other => Err(NetworkError::Replay(format!("recorded result is not an object: {other}"))),
    }
}
