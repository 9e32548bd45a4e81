//! # Mediabound - Named Breakpoints for Media Queries
//!
//! `mediabound` resolves breakpoint references against a named table and
//! builds `@media` blocks from min/max pairs.
//!
//! ## Core Concepts
//!
//! - [`BreakpointTable`]: Named pixel thresholds, e.g. `m = 768`
//! - [`BreakpointReference`]: A pixel value, a table name, or no bound
//! - [`resolve`]: One-step lookup from reference to optional pixel value
//! - [`MediaQuery`]: Resolves min/max pairs into a [`MediaRange`] and renders it
//! - [`MediaRenderer`]: MiniJinja-backed block renderer
//!
//! ## Quick Start
//!
//! ```rust
//! use mediabound::{resolve, MediaQuery, DEFAULT_BREAKPOINTS};
//!
//! assert_eq!(resolve("m", &DEFAULT_BREAKPOINTS).unwrap(), Some(768));
//!
//! let mq = MediaQuery::default();
//! let css = mq.wrap("m", None::<&str>, "position: absolute;").unwrap();
//! assert_eq!(
//!     css,
//!     "@media only screen and (min-width: 768px) {\n  position: absolute;\n}\n"
//! );
//! ```
//!
//! ## Bounds
//!
//! The lower bound is inclusive. The upper bound is exclusive: `max = "l"`
//! (1100px) becomes `max-width: 1099px`, so `("m", "l")` and `("l", None)`
//! never both match. Zero is a real bound; an unbounded reference or a
//! negative pixel value leaves that side open.
//!
//! ## Configuration
//!
//! ```rust
//! use mediabound::{Axis, MediaConfig, MediaQuery};
//!
//! let config = MediaConfig::from_yaml("bp: { tablet: 700 }\ntype: height").unwrap();
//! let range = MediaQuery::new(config).range("tablet", None::<&str>).unwrap();
//! assert_eq!(range.axis, Axis::Height);
//! assert_eq!(range.min, Some(700));
//! ```

pub mod breakpoint;
pub mod media;
pub mod render;

pub use breakpoint::{
    default_breakpoints, resolve, resolve_sentinel, BreakpointError, BreakpointReference,
    BreakpointTable, BreakpointValue, DEFAULT_BREAKPOINTS, UNBOUNDED,
};
pub use media::{Axis, ConfigError, MediaConfig, MediaError, MediaQuery, MediaRange};
pub use render::{MediaRenderer, DEFAULT_BLOCK_TEMPLATE};
