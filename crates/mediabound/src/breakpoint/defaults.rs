//! The standard breakpoint table.

use once_cell::sync::Lazy;

use super::table::BreakpointTable;

/// The standard fourteen-step breakpoint table, from `xxxs` (0px) to
/// `xxxxxxl` (1700px).
///
/// Nothing in the resolver falls back to this table implicitly; pass it (or
/// a clone) where a table is expected.
///
/// # Example
///
/// ```rust
/// use mediabound::{resolve, DEFAULT_BREAKPOINTS};
///
/// assert_eq!(resolve("m", &DEFAULT_BREAKPOINTS).unwrap(), Some(768));
/// ```
pub static DEFAULT_BREAKPOINTS: Lazy<BreakpointTable> = Lazy::new(|| {
    BreakpointTable::new()
        .add("xxxs", 0u32)
        .add("xxs", 200u32)
        .add("xs", 320u32)
        .add("s", 400u32)
        .add("sl", 500u32)
        .add("m", 768u32)
        .add("ml", 992u32)
        .add("l", 1100u32)
        .add("xl", 1200u32)
        .add("xxl", 1300u32)
        .add("xxxl", 1400u32)
        .add("xxxxl", 1500u32)
        .add("xxxxxl", 1600u32)
        .add("xxxxxxl", 1700u32)
});

/// Returns an owned copy of [`DEFAULT_BREAKPOINTS`].
pub fn default_breakpoints() -> BreakpointTable {
    DEFAULT_BREAKPOINTS.clone()
}
