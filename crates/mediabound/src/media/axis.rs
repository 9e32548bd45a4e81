//! Measurement axis for media ranges.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The viewport dimension a media range is measured on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    #[default]
    Width,
    Height,
}

impl Axis {
    /// The CSS feature suffix, `width` or `height`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Axis::Width => "width",
            Axis::Height => "height",
        }
    }
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Axis {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "width" => Ok(Axis::Width),
            "height" => Ok(Axis::Height),
            other => Err(format!(
                "unknown axis '{}', expected 'width' or 'height'",
                other
            )),
        }
    }
}
