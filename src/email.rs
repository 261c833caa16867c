use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use tracing::{debug, trace};

use crate::number::trim_space;

pub static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9_.+-]+@[a-zA-Z0-9-]+\.[a-zA-Z0-9.-]+$").expect("Invalid email pattern")
});

/// Whitespace around the address is ignored, including `\x1c`..=`\x1f`.
pub fn is_valid_email(s: &str) -> bool {
    EMAIL_PATTERN.is_match(trim_space(s))
}

/// Number of strings in `emails` that look like an email address.
/// Anything but an array counts as zero.
pub fn count_valid_emails(emails: &Value) -> usize {
    let emails = match emails.as_array() {
        Some(xs) => xs,
        None => {
            debug!("emails are not a sequence");
            return 0;
        }
    };

    let count = emails
        .iter()
        .enumerate()
        .filter(|(i, v)| match v.as_str() {
            Some(s) => is_valid_email(s),
            None => {
                debug!(index = i, "skip email: not text");
                false
            }
        })
        .count();

    trace!(count, "emails counted");
    count
}
