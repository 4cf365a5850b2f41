//! Recording adapters that capture interactions to cassettes.

pub mod campus;

use std::sync::{Arc, Mutex};

use serde::Serialize;

use crate::cassette::recorder::CassetteRecorder;

pub use campus::RecordingCampusService;

/// Record a `Result<T, E>` interaction using the Ok/Err JSON convention.
///
/// Mirror of `replaying::replay_result`:
/// - `Ok(v)` is stored as `{"Ok": v}`
/// - `Err(e)` is stored as `{"Err": e}`
pub(crate) fn record_result<T, E, I>(
    recorder: &Arc<Mutex<CassetteRecorder>>,
    port: &str,
    method: &str,
    input: &I,
    result: &Result<T, E>,
) where
    T: Serialize,
    E: Serialize,
    I: Serialize,
{
    let input_json = serde_json::to_value(input).expect("failed to serialize recording input");
    let output_json = match result {
        Ok(v) => serde_json::json!({
            "Ok": serde_json::to_value(v).expect("failed to serialize Ok value")
        }),
        Err(e) => serde_json::json!({
            "Err": serde_json::to_value(e).expect("failed to serialize Err value")
        }),
    };

    let mut guard = match recorder.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    };
    guard.record(port, method, input_json, output_json);
}
