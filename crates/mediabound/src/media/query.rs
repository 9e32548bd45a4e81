//! Range assembly from min/max breakpoint references.

use super::config::MediaConfig;
use super::error::MediaError;
use super::range::MediaRange;
use crate::breakpoint::{resolve, BreakpointError, BreakpointReference};
use crate::render::MediaRenderer;

/// Resolves min/max breakpoint pairs against a configuration.
///
/// # Example
///
/// ```rust
/// use mediabound::MediaQuery;
///
/// let mq = MediaQuery::default();
///
/// let css = mq.wrap("m", "l", "display: none;").unwrap();
/// assert!(css.starts_with(
///     "@media only screen and (min-width: 768px) and (max-width: 1099px) {"
/// ));
///
/// // No bounds at all produces no block.
/// assert_eq!(mq.wrap(None::<&str>, None::<&str>, "display: none;").unwrap(), "");
/// ```
#[derive(Debug)]
pub struct MediaQuery {
    config: MediaConfig,
    renderer: MediaRenderer,
}

impl MediaQuery {
    /// Creates a query with the default block template.
    pub fn new(config: MediaConfig) -> Self {
        Self::with_renderer(config, MediaRenderer::new())
    }

    /// Creates a query that renders through `renderer`.
    pub fn with_renderer(config: MediaConfig, renderer: MediaRenderer) -> Self {
        Self { config, renderer }
    }

    pub fn config(&self) -> &MediaConfig {
        &self.config
    }

    /// Resolves both references and builds the range.
    ///
    /// Fails on the first reference that does not resolve; `min` is
    /// resolved before `max`.
    pub fn range<L, U>(&self, min: L, max: U) -> Result<MediaRange, BreakpointError>
    where
        L: Into<BreakpointReference>,
        U: Into<BreakpointReference>,
    {
        let min_px = resolve(min, &self.config.bp)?;
        let max_px = resolve(max, &self.config.bp)?;
        let range = MediaRange::between(min_px, max_px, self.config.axis);
        tracing::debug!(?range, "assembled media range");
        Ok(range)
    }

    /// Builds the range and wraps `content` in its conditional block.
    ///
    /// An unbounded range yields an empty string.
    pub fn wrap<L, U>(&self, min: L, max: U, content: &str) -> Result<String, MediaError>
    where
        L: Into<BreakpointReference>,
        U: Into<BreakpointReference>,
    {
        let range = self.range(min, max)?;
        Ok(self.renderer.render(&range, content)?)
    }
}

impl Default for MediaQuery {
    fn default() -> Self {
        Self::new(MediaConfig::default())
    }
}
