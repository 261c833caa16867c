use serde_json::Value;
use tracing::{debug, trace};

use crate::average::Average;
use crate::number::classify;
use crate::options::NumericPolicy;

const CANCELLED: &str = "cancelled";

/// Mean `amount` over orders that are not cancelled.
///
/// Orders without a numeric amount are left out of both the sum and the count.
/// Returns None if `orders` is not an array or no order contributes.
pub fn calculate_average_order_value(orders: &Value) -> Option<f64> {
    calculate_average_order_value_with(orders, &NumericPolicy::strict())
}

pub fn calculate_average_order_value_with(orders: &Value, policy: &NumericPolicy) -> Option<f64> {
    let orders = match orders.as_array() {
        Some(xs) => xs,
        None => {
            debug!("orders are not a sequence");
            return None;
        }
    };

    let avg: Average = orders
        .iter()
        .enumerate()
        .filter_map(|(i, order)| {
            let order = match order.as_object() {
                Some(o) => o,
                None => {
                    debug!(index = i, "skip order: not a mapping");
                    return None;
                }
            };
            if order.get("status").and_then(Value::as_str) == Some(CANCELLED) {
                return None;
            }
            let amount = match order.get("amount") {
                Some(amount) => amount,
                None => {
                    debug!(index = i, "skip order: no amount");
                    return None;
                }
            };
            match classify(amount, policy) {
                Ok(x) => Some(x),
                Err(e) => {
                    debug!(index = i, "skip order: {}", e);
                    None
                }
            }
        })
        .collect();

    trace!(count = avg.count(), "orders averaged");
    avg.mean()
}
