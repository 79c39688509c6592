//! Ops command implementation

use super::output;
use anyhow::Result;
use colored::Colorize;
use reql_builder::{Form, aliases, operation_names, resolve};
use std::path::Path;

/// List operations with their arity and aliases
pub fn list(filter: Option<&str>, output_file: Option<&Path>) -> Result<()> {
    let mut lines = Vec::new();
    for name in operation_names() {
        if filter.is_some_and(|f| !name.contains(f)) {
            continue;
        }
        let spec = resolve(name)?;
        let mut alternates: Vec<_> = aliases()
            .filter(|(_, canonical)| *canonical == name)
            .map(|(alias, _)| alias)
            .collect();
        alternates.sort_unstable();

        let mut line = format!("{} {:<12}", format!("{:<20}", name).bold(), spec.arity.to_string());
        match spec.form {
            Form::Call(op) if op.is_comparison() => line.push_str(" chained"),
            Form::Call(op) if op.is_implicit() => line.push_str(" row"),
            _ => {}
        }
        if !alternates.is_empty() {
            line.push_str(&format!("  ({})", alternates.join(", ").dimmed()));
        }
        lines.push(line);
    }
    output::write_output(&lines.join("\n"), output_file)
}
