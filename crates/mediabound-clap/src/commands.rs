//! Command implementations. Each returns the text to print.

use anyhow::{Context, Result};
use console::style;
use mediabound::{resolve, BreakpointReference, MediaConfig, MediaQuery};

use crate::cli::{Cli, Command};

pub fn run(cli: &Cli) -> Result<String> {
    let config = load_config(cli)?;
    match &cli.command {
        Command::Resolve { reference } => resolve_command(&config, reference),
        Command::Query {
            min,
            max,
            content,
            condition,
        } => query_command(config, min.clone(), max.clone(), content, *condition),
        Command::List => Ok(list_command(&config)),
    }
}

fn load_config(cli: &Cli) -> Result<MediaConfig> {
    let config = match &cli.config {
        Some(path) => MediaConfig::from_path(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => {
            tracing::debug!("no config file given, using the standard breakpoints");
            MediaConfig::default()
        }
    };
    Ok(match cli.axis {
        Some(axis) => config.with_axis(axis),
        None => config,
    })
}

fn resolve_command(config: &MediaConfig, reference: &BreakpointReference) -> Result<String> {
    let resolved = resolve(reference, &config.bp)
        .with_context(|| format!("cannot resolve '{}'", reference))?;
    Ok(match resolved {
        Some(px) => format!("{}\n", px),
        None => "unbounded\n".to_string(),
    })
}

fn query_command(
    config: MediaConfig,
    min: Option<BreakpointReference>,
    max: Option<BreakpointReference>,
    content: &str,
    condition_only: bool,
) -> Result<String> {
    let mq = MediaQuery::new(config);
    if condition_only {
        let range = mq.range(min, max)?;
        return Ok(range
            .condition()
            .map(|condition| format!("{}\n", condition))
            .unwrap_or_default());
    }
    Ok(mq.wrap(min, max, content)?)
}

fn list_command(config: &MediaConfig) -> String {
    let mut out = String::new();
    let ordered = config.bp.by_pixels();
    let width = config
        .bp
        .iter()
        .map(|(name, _)| name.len())
        .max()
        .unwrap_or(0);

    for (name, px) in ordered {
        out.push_str(&format!(
            "{}  {}px\n",
            style(format!("{:<width$}", name, width = width)).cyan(),
            px
        ));
    }
    for (name, value) in config.bp.malformed() {
        out.push_str(&format!(
            "{}  {} {}\n",
            style(format!("{:<width$}", name, width = width)).red(),
            value,
            style("(not a pixel value)").dim()
        ));
    }
    out
}
