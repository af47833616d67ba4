//! Command handlers for the `mroc` CLI.
//!
//! Handlers take the hierarchy source and output writers instead of touching
//! the process directly, and return whether the command succeeded. Shared
//! option parsing and hierarchy loading live here.

mod check;
mod explain;
mod linearize;

pub use check::check_command;
pub use explain::explain_command;
pub use linearize::linearize_command;

use std::io::Write;

use mro_diagnostic::emitter::ColorMode;
use mro_diagnostic::render::{linearize_error, node_name};
use mro_diagnostic::Diagnostic;
use mro_ir::TypeNode;
use mro_linearize::{LinearizeConfig, LinearizeError};
use mro_resolve::Policy;

use crate::{Hierarchy, Reporter};

/// Format for results and diagnostics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "text" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

/// Flags shared by `linearize` and `check`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CommandOptions {
    pub policy: Policy,
    pub format: OutputFormat,
    pub color: ColorMode,
    pub max_depth: usize,
}

impl Default for CommandOptions {
    fn default() -> Self {
        CommandOptions {
            policy: Policy::default(),
            format: OutputFormat::default(),
            color: ColorMode::default(),
            max_depth: LinearizeConfig::DEFAULT_MAX_DEPTH,
        }
    }
}

impl CommandOptions {
    pub fn linearize_config(&self) -> LinearizeConfig {
        LinearizeConfig::default().with_max_depth(self.max_depth)
    }
}

/// Split `args` into options and positional arguments.
///
/// Flags may appear anywhere. Unknown flags and bad values are errors.
pub fn parse_options(args: &[String]) -> Result<(CommandOptions, Vec<String>), String> {
    let mut options = CommandOptions::default();
    let mut positional = Vec::new();

    for arg in args {
        if let Some(name) = arg.strip_prefix("--policy=") {
            options.policy = Policy::from_name(name).ok_or_else(|| {
                format!(
                    "unknown policy '{name}', options: superclass-first, interfaces-first, interfaces-only"
                )
            })?;
        } else if let Some(name) = arg.strip_prefix("--format=") {
            options.format = OutputFormat::from_name(name)
                .ok_or_else(|| format!("unknown format '{name}', options: text, json"))?;
        } else if let Some(name) = arg.strip_prefix("--color=") {
            options.color = ColorMode::from_name(name)
                .ok_or_else(|| format!("unknown color mode '{name}', options: auto, always, never"))?;
        } else if let Some(depth) = arg.strip_prefix("--max-depth=") {
            options.max_depth = match depth.parse::<usize>() {
                Ok(depth) if depth > 0 => depth,
                _ => return Err(format!("invalid depth '{depth}', expected a positive integer")),
            };
        } else if arg.starts_with('-') {
            return Err(format!("unknown option '{arg}'"));
        } else {
            positional.push(arg.clone());
        }
    }

    Ok((options, positional))
}

/// Read a file, exiting with a message if it cannot be read.
pub fn read_file(path: &str) -> String {
    match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            let msg = match e.kind() {
                std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
                std::io::ErrorKind::PermissionDenied => {
                    format!("permission denied reading '{path}'")
                }
                std::io::ErrorKind::InvalidData => {
                    format!("'{path}' contains invalid UTF-8 data")
                }
                _ => format!("error reading '{path}': {e}"),
            };
            eprintln!("{msg}");
            std::process::exit(1);
        }
    }
}

/// Whether stderr is a terminal, for [`ColorMode::Auto`].
fn stderr_is_tty() -> bool {
    std::io::IsTerminal::is_terminal(&std::io::stderr())
}

/// Parse the hierarchy, reporting errors and warnings.
fn load_hierarchy<W: Write>(source: &str, reporter: &mut Reporter<W>) -> Option<Hierarchy> {
    match Hierarchy::parse(source) {
        Ok(hierarchy) => {
            for warning in hierarchy.warnings() {
                reporter.report(&warning.to_diagnostic());
            }
            Some(hierarchy)
        }
        Err(errors) => {
            for error in &errors {
                reporter.report(&error.to_diagnostic());
            }
            None
        }
    }
}

/// Render a linearization failure and point at the declarations involved.
fn failure_diagnostic(hierarchy: &Hierarchy, requested: TypeNode, error: &LinearizeError) -> Diagnostic {
    let registry = hierarchy.registry();
    let mut diag = linearize_error(requested, error, registry);

    let culprit = match error {
        LinearizeError::Inconsistent(failure) => failure.node(),
        LinearizeError::DepthExceeded { node, .. } => *node,
    };
    let line_of = |node: TypeNode| node.as_class().and_then(|id| hierarchy.line_of(id));

    if let Some(line) = line_of(culprit) {
        diag = diag.with_label(line, format!("`{}` declared here", node_name(culprit, registry)));
    }
    if requested != culprit {
        if let Some(line) = line_of(requested) {
            diag = diag.with_secondary_label(
                line,
                format!("`{}` requested here", node_name(requested, registry)),
            );
        }
    }
    diag
}
