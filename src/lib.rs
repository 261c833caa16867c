//! Small aggregations over loosely-typed JSON collections.
//!
//! Every entry point is total: invalid elements are skipped, and a collection
//! that yields nothing usable gives back a sentinel (`None` or `0`).

pub mod average;
pub mod email;
pub mod error;
pub mod measurement;
pub mod number;
pub mod options;
pub mod order;

pub use average::Average;
pub use email::{count_valid_emails, is_valid_email};
pub use error::{Error, Result};
pub use measurement::{average_valid_measurements, average_valid_measurements_with};
pub use options::NumericPolicy;
pub use order::{calculate_average_order_value, calculate_average_order_value_with};
