use serde_json::Value;
use tracing::{debug, trace};

use crate::average::Average;
use crate::number::classify;
use crate::options::NumericPolicy;

/// Mean of the entries of `values` that read as real numbers.
///
/// Numeric text counts; nulls, booleans and anything unparseable are skipped.
/// Returns None if `values` is not an array or nothing in it is usable.
pub fn average_valid_measurements(values: &Value) -> Option<f64> {
    average_valid_measurements_with(values, &NumericPolicy::lenient())
}

pub fn average_valid_measurements_with(values: &Value, policy: &NumericPolicy) -> Option<f64> {
    let values = match values.as_array() {
        Some(xs) => xs,
        None => {
            debug!("measurements are not a sequence");
            return None;
        }
    };

    let avg: Average = values
        .iter()
        .enumerate()
        .filter_map(|(i, v)| match classify(v, policy) {
            Ok(x) => Some(x),
            Err(e) => {
                debug!(index = i, "skip measurement: {}", e);
                None
            }
        })
        .collect();

    trace!(count = avg.count(), "measurements averaged");
    avg.mean()
}
