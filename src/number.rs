use serde_json::Value;

use crate::error::{Error, Result};
use crate::options::NumericPolicy;

/// Strip surrounding whitespace, counting the separator controls
/// `\x1c`..=`\x1f` as whitespace too.
pub fn trim_space(s: &str) -> &str {
    s.trim_matches(|c: char| c.is_whitespace() || ('\x1c'..='\x1f').contains(&c))
}

/// Parse text as a real number.
///
/// Surrounding whitespace is ignored (see [`trim_space`]), and `_` is
/// accepted as a digit separator when it sits between two ASCII digits
/// (`"1_000"`). `inf`, `infinity` and `nan` are accepted in any case.
/// Only ASCII digits are recognised; `"٣"` is not a number.
pub fn parse_number(s: &str) -> Result<f64> {
    let trimmed = trim_space(s);
    let digits = if trimmed.contains('_') {
        strip_separators(trimmed).ok_or_else(|| Error::NotANumber(s.to_string()))?
    } else {
        trimmed.to_string()
    };
    if let Ok(num) = digits.parse::<f64>() {
        Ok(num)
    } else {
        Err(Error::NotANumber(s.to_string()))
    }
}

fn strip_separators(s: &str) -> Option<String> {
    let bytes = s.as_bytes();
    for (i, &c) in bytes.iter().enumerate() {
        if c == b'_' {
            let before = i > 0 && bytes[i - 1].is_ascii_digit();
            let after = bytes.get(i + 1).map_or(false, |b| b.is_ascii_digit());
            if !(before && after) {
                return None;
            }
        }
    }
    Some(s.replace('_', ""))
}

/// Interpret one element as a real number under `policy`.
pub fn classify(value: &Value, policy: &NumericPolicy) -> Result<f64> {
    use Value::*;
    match value {
        Number(n) => n
            .as_f64()
            .ok_or_else(|| Error::NotANumber(n.to_string())),
        String(s) if policy.text => parse_number(s),
        String(s) => Err(Error::Text(s.clone())),
        Bool(b) if policy.booleans => Ok(if *b { 1.0 } else { 0.0 }),
        Bool(_) => Err(Error::Boolean),
        Null => Err(Error::Absent),
        Array(_) => Err(Error::NotScalar("array")),
        Object(_) => Err(Error::NotScalar("object")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn number_parse() {
        assert_eq!(parse_number("1").unwrap(), 1.0);
        assert_eq!(parse_number(" -2.5 ").unwrap(), -2.5);
        assert_eq!(parse_number("1e3").unwrap(), 1000.0);
        assert_eq!(parse_number(".5").unwrap(), 0.5);
        assert_eq!(parse_number("1_000").unwrap(), 1000.0);
        assert_eq!(parse_number("-Infinity").unwrap(), f64::NEG_INFINITY);
        assert!(parse_number("nan").unwrap().is_nan());
    }

    #[test]
    fn number_parse_separator_controls() {
        assert_eq!(parse_number("\u{1f}7\u{1c}").unwrap(), 7.0);
        assert_eq!(parse_number("\t\u{1d}8\n\u{1e}").unwrap(), 8.0);
        assert_eq!(trim_space("\u{1f} a@b.com\u{1c}"), "a@b.com");
    }

    #[test]
    fn number_parse_rejects() {
        for s in ["", "  ", "\u{1f}", "abc", "1.2.3", "_1", "1_", "1__0", "1,5", "0x10", "٣"] {
            assert!(
                matches!(parse_number(s), Err(Error::NotANumber(_))),
                "{:?}",
                s
            );
        }
    }

    #[test]
    fn classify_lenient() {
        let policy = NumericPolicy::lenient();
        assert_eq!(classify(&json!(3), &policy).unwrap(), 3.0);
        assert_eq!(classify(&json!(2.5), &policy).unwrap(), 2.5);
        assert_eq!(classify(&json!("4"), &policy).unwrap(), 4.0);
        assert!(matches!(classify(&json!(true), &policy), Err(Error::Boolean)));
        assert!(matches!(classify(&json!(null), &policy), Err(Error::Absent)));
        assert!(matches!(
            classify(&json!(null), &NumericPolicy::strict()),
            Err(Error::Absent)
        ));
        assert!(matches!(
            classify(&json!([1]), &policy),
            Err(Error::NotScalar("array"))
        ));
        assert!(matches!(
            classify(&json!({"a": 1}), &policy),
            Err(Error::NotScalar("object"))
        ));
    }

    #[test]
    fn classify_strict() {
        let policy = NumericPolicy::strict();
        assert_eq!(classify(&json!(-7), &policy).unwrap(), -7.0);
        assert!(matches!(classify(&json!("4"), &policy), Err(Error::Text(_))));
        assert!(matches!(classify(&json!(false), &policy), Err(Error::Boolean)));
    }

    #[test]
    fn classify_booleans() {
        let policy = NumericPolicy {
            text: false,
            booleans: true,
        };
        assert_eq!(classify(&json!(true), &policy).unwrap(), 1.0);
        assert_eq!(classify(&json!(false), &policy).unwrap(), 0.0);
    }
}
