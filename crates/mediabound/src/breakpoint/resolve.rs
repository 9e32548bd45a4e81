//! Breakpoint reference resolution.

use super::error::BreakpointError;
use super::reference::BreakpointReference;
use super::table::BreakpointTable;
use super::value::BreakpointValue;

/// Sentinel returned by [`resolve_sentinel`] for an unbounded reference.
pub const UNBOUNDED: i64 = -1;

/// Resolves a breakpoint reference to a pixel value.
///
/// - Numeric references are returned unchanged, negative values included.
/// - Named references are looked up in `table`. The name must exist and
///   its entry must hold a pixel value.
/// - Unbounded references resolve to `None`.
///
/// Table values are not resolved further: a lookup is one step.
///
/// # Errors
///
/// - [`BreakpointError::UnknownBreakpointKey`] if the name is not in `table`
/// - [`BreakpointError::InvalidBreakpointValue`] if its entry is malformed
///
/// # Example
///
/// ```rust
/// use mediabound::{resolve, BreakpointError, DEFAULT_BREAKPOINTS};
///
/// assert_eq!(resolve(10, &DEFAULT_BREAKPOINTS), Ok(Some(10)));
/// assert_eq!(resolve("m", &DEFAULT_BREAKPOINTS), Ok(Some(768)));
/// assert_eq!(resolve(None::<&str>, &DEFAULT_BREAKPOINTS), Ok(None));
/// assert!(matches!(
///     resolve("bogus", &DEFAULT_BREAKPOINTS),
///     Err(BreakpointError::UnknownBreakpointKey { .. })
/// ));
/// ```
pub fn resolve<R: Into<BreakpointReference>>(
    reference: R,
    table: &BreakpointTable,
) -> Result<Option<i64>, BreakpointError> {
    let resolved = match reference.into() {
        BreakpointReference::Numeric(px) => Some(px),
        BreakpointReference::Named(key) => match table.get(&key) {
            None => return Err(BreakpointError::UnknownBreakpointKey { key }),
            Some(malformed @ BreakpointValue::Malformed(_)) => {
                return Err(BreakpointError::InvalidBreakpointValue {
                    key,
                    value: malformed.to_string(),
                })
            }
            Some(BreakpointValue::Pixels(px)) => Some(*px),
        },
        BreakpointReference::Unbounded => None,
    };
    tracing::trace!(?resolved, "resolved breakpoint reference");
    Ok(resolved)
}

/// Resolves like [`resolve`], encoding "unbounded" as [`UNBOUNDED`] (`-1`).
///
/// A numeric `-1` and an unbounded reference are indistinguishable in the
/// result; prefer [`resolve`] unless a caller needs the integer encoding.
pub fn resolve_sentinel<R: Into<BreakpointReference>>(
    reference: R,
    table: &BreakpointTable,
) -> Result<i64, BreakpointError> {
    resolve(reference, table).map(|px| px.unwrap_or(UNBOUNDED))
}
