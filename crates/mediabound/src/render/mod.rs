//! Text rendering for media ranges.
//!
//! [`MediaRenderer`] turns a [`MediaRange`](crate::MediaRange) and a block
//! of declarations into an `@media` block through a MiniJinja template.

mod renderer;

pub use renderer::{MediaRenderer, DEFAULT_BLOCK_TEMPLATE};
