//! Breakpoint references: what callers hand to the resolver.

use std::convert::Infallible;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A reference to a breakpoint threshold.
///
/// Conversions exist from integers, strings and `Option`s, so call sites can
/// pass `768`, `"m"` or `None::<&str>` wherever an
/// `impl Into<BreakpointReference>` is accepted.
///
/// # Example
///
/// ```rust
/// use mediabound::BreakpointReference;
///
/// assert_eq!(BreakpointReference::from(10), BreakpointReference::Numeric(10));
/// assert_eq!(BreakpointReference::from("m"), BreakpointReference::Named("m".into()));
/// assert_eq!(BreakpointReference::from(None::<&str>), BreakpointReference::Unbounded);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BreakpointReference {
    /// A pixel value used verbatim.
    Numeric(i64),
    /// The name of a table entry.
    Named(String),
    /// No bound on this side.
    #[default]
    Unbounded,
}

impl BreakpointReference {
    pub fn is_unbounded(&self) -> bool {
        matches!(self, BreakpointReference::Unbounded)
    }
}

impl std::fmt::Display for BreakpointReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BreakpointReference::Numeric(px) => write!(f, "{}", px),
            BreakpointReference::Named(name) => write!(f, "{}", name),
            BreakpointReference::Unbounded => write!(f, "none"),
        }
    }
}

/// Parses command-line style input.
///
/// An optionally signed integer is numeric; an empty string, `none` or `-`
/// is unbounded; anything else is a name.
impl FromStr for BreakpointReference {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() || trimmed == "none" || trimmed == "-" {
            return Ok(BreakpointReference::Unbounded);
        }
        Ok(match trimmed.parse::<i64>() {
            Ok(px) => BreakpointReference::Numeric(px),
            Err(_) => BreakpointReference::Named(trimmed.to_string()),
        })
    }
}

impl From<i64> for BreakpointReference {
    fn from(px: i64) -> Self {
        BreakpointReference::Numeric(px)
    }
}

impl From<i32> for BreakpointReference {
    fn from(px: i32) -> Self {
        BreakpointReference::Numeric(px.into())
    }
}

impl From<u32> for BreakpointReference {
    fn from(px: u32) -> Self {
        BreakpointReference::Numeric(px.into())
    }
}

impl From<&str> for BreakpointReference {
    fn from(name: &str) -> Self {
        BreakpointReference::Named(name.to_string())
    }
}

impl From<String> for BreakpointReference {
    fn from(name: String) -> Self {
        BreakpointReference::Named(name)
    }
}

impl From<&BreakpointReference> for BreakpointReference {
    fn from(reference: &BreakpointReference) -> Self {
        reference.clone()
    }
}

impl<T: Into<BreakpointReference>> From<Option<T>> for BreakpointReference {
    fn from(value: Option<T>) -> Self {
        value.map_or(BreakpointReference::Unbounded, Into::into)
    }
}
