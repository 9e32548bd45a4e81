//! Media ranges: turning a min/max breakpoint pair into a conditional block.
//!
//! - [`Axis`]: Which viewport dimension a range measures
//! - [`MediaRange`]: Resolved lower bound and exclusive upper bound
//! - [`MediaConfig`]: Breakpoint table plus axis, loadable from YAML or JSON
//! - [`MediaQuery`]: Resolves pairs against a config and renders blocks
//!
//! The range is plain data; text output is the job of
//! [`MediaRenderer`](crate::render::MediaRenderer).

mod axis;
mod config;
mod error;
mod query;
mod range;

pub use axis::Axis;
pub use config::{ConfigError, MediaConfig};
pub use error::MediaError;
pub use query::MediaQuery;
pub use range::MediaRange;
