//! Breakpoint tables and reference resolution.
//!
//! This module provides the core breakpoint primitives:
//!
//! - [`BreakpointTable`]: A registry of named pixel thresholds
//! - [`BreakpointValue`]: A table entry, either a pixel count or a malformed raw value
//! - [`BreakpointReference`]: A numeric, named, or unbounded reference to resolve
//! - [`resolve`]: Turns a reference into an optional pixel value
//! - [`BreakpointError`]: Errors from resolution and table validation
//!
//! Resolution is a single lookup: table values never point at other keys.

mod defaults;
mod error;
mod reference;
mod resolve;
mod table;
mod value;

pub use defaults::{default_breakpoints, DEFAULT_BREAKPOINTS};
pub use error::BreakpointError;
pub use reference::BreakpointReference;
pub use resolve::{resolve, resolve_sentinel, UNBOUNDED};
pub use table::BreakpointTable;
pub use value::BreakpointValue;
