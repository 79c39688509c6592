//! Build command implementation

use super::output;
use crate::{BuilderConfig, QueryBuilder, document};
use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

/// Configuration for build command
pub struct BuildConfig {
    /// Query document, `-` for stdin
    pub file: PathBuf,
    /// Builder configuration file (JSON)
    pub builder_config: Option<PathBuf>,
    pub pretty: bool,
    pub verbose: bool,
    pub output_file: Option<PathBuf>,
}

/// Build a query document and print the serialized term
pub fn build(config: BuildConfig) -> Result<()> {
    let builder = QueryBuilder::with_config(load_builder_config(config.builder_config.as_ref())?);

    let text = if config.file.as_os_str() == "-" {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read query document from stdin")?;
        text
    } else {
        fs::read_to_string(&config.file)
            .with_context(|| format!("Failed to read query document: {}", config.file.display()))?
    };

    let term = document::parse(&builder, &text)?;
    if config.verbose {
        eprintln!("{} node(s), category {}", term.size(), term.category());
    }

    let content = if config.pretty {
        serde_json::to_string_pretty(&term)
    } else {
        serde_json::to_string(&term)
    }
    .context("Failed to serialize term")?;

    output::write_output(&content, config.output_file.as_deref())
}

fn load_builder_config(path: Option<&PathBuf>) -> Result<BuilderConfig> {
    let Some(path) = path else {
        return Ok(BuilderConfig::default());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read builder config: {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse builder config: {}", path.display()))
}
