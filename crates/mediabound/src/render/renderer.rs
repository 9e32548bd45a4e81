//! Template-backed media block renderer.

use minijinja::{Environment, Error};
use serde::Serialize;

use crate::media::{Axis, MediaRange};

/// The built-in block template.
///
/// Produces:
///
/// ```text
/// @media only screen and (min-width: 768px) {
///   <content, indented two spaces>
/// }
/// ```
pub const DEFAULT_BLOCK_TEMPLATE: &str =
    "@media {{ condition }} {\n{{ body }}\n}\n";

const BLOCK_TEMPLATE_NAME: &str = "media_block";

/// Values available to block templates.
#[derive(Serialize)]
struct BlockContext<'a> {
    axis: Axis,
    min: Option<i64>,
    max: Option<i64>,
    condition: String,
    content: &'a str,
    body: String,
}

/// Renders media ranges through a compiled block template.
///
/// Templates see `axis`, `min`, `max` (the exclusive ceiling), `condition`
/// (the full media condition), `content` as given and `body` (content
/// indented two spaces). Unbounded ranges render as an empty string without
/// invoking the template.
///
/// # Example
///
/// ```rust
/// use mediabound::{Axis, MediaRange, MediaRenderer};
///
/// let renderer = MediaRenderer::with_template(
///     "@media {{ condition }} { {{ content }} }",
/// ).unwrap();
///
/// let range = MediaRange::between(Some(400), None, Axis::Width);
/// let css = renderer.render(&range, "color: red;").unwrap();
/// assert_eq!(css, "@media only screen and (min-width: 400px) { color: red; }");
/// ```
#[derive(Debug)]
pub struct MediaRenderer {
    env: Environment<'static>,
}

impl MediaRenderer {
    /// Creates a renderer using [`DEFAULT_BLOCK_TEMPLATE`].
    ///
    /// The built-in template is loaded on first render.
    pub fn new() -> Self {
        let mut env = base_environment();
        env.set_loader(|name| {
            Ok((name == BLOCK_TEMPLATE_NAME).then(|| DEFAULT_BLOCK_TEMPLATE.to_string()))
        });
        Self { env }
    }

    /// Creates a renderer with a custom block template.
    ///
    /// # Errors
    ///
    /// Returns an error if the template has invalid syntax.
    pub fn with_template(source: &str) -> Result<Self, Error> {
        let mut env = base_environment();
        env.add_template_owned(BLOCK_TEMPLATE_NAME, source.to_string())?;
        Ok(Self { env })
    }

    /// Renders `content` inside the conditional block for `range`.
    ///
    /// # Errors
    ///
    /// Returns an error if template evaluation fails, for example when a
    /// custom template calls an unknown filter.
    pub fn render(&self, range: &MediaRange, content: &str) -> Result<String, Error> {
        let Some(condition) = range.condition() else {
            return Ok(String::new());
        };

        let ctx = BlockContext {
            axis: range.axis,
            min: range.min,
            max: range.max,
            condition,
            content,
            body: indent(content, "  "),
        };
        self.env.get_template(BLOCK_TEMPLATE_NAME)?.render(ctx)
    }
}

impl Default for MediaRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn base_environment() -> Environment<'static> {
    let mut env = Environment::new();
    env.set_keep_trailing_newline(true);
    env
}

/// Indents every non-blank line of `text`.
fn indent(text: &str, prefix: &str) -> String {
    text.trim_end_matches('\n')
        .lines()
        .map(|line| {
            if line.trim().is_empty() {
                String::new()
            } else {
                format!("{}{}", prefix, line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
