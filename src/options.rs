use serde::Deserialize;

use crate::error::Result;

/// Which scalar kinds count as real numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NumericPolicy {
    /// Numeric text such as `"1.5"` or `" 2e3 "`
    pub text: bool,
    /// `true` as 1 and `false` as 0
    pub booleans: bool,
}

impl Default for NumericPolicy {
    fn default() -> Self {
        Self::lenient()
    }
}

impl NumericPolicy {
    /// Numbers and numeric text; booleans rejected.
    pub fn lenient() -> Self {
        NumericPolicy {
            text: true,
            booleans: false,
        }
    }

    /// Numbers only.
    pub fn strict() -> Self {
        NumericPolicy {
            text: false,
            booleans: false,
        }
    }

    pub fn from_json(doc: &str) -> Result<Self> {
        Ok(serde_json::from_str(doc)?)
    }
}
