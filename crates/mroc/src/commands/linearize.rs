//! The `linearize` command: print the linearization of each requested type.

use std::io::Write;

use mro_diagnostic::render::node_name;
use mro_ir::TypeNode;
use mro_linearize::{Linearization, Linearizer};
use mro_resolve::Resolver;

use super::{failure_diagnostic, load_hierarchy, stderr_is_tty, CommandOptions, OutputFormat};
use crate::{parse_type_expr, Reporter};

/// Linearize every type in `exprs` against the hierarchy in `source`.
///
/// Results go to `out`, diagnostics to `err`. Every type is attempted even
/// after a failure. Returns `false` if anything failed.
#[tracing::instrument(level = "debug", skip_all, fields(path = %path, types = exprs.len()))]
pub fn linearize_command<O: Write, E: Write>(
    path: &str,
    source: &str,
    exprs: &[String],
    options: &CommandOptions,
    out: &mut O,
    err: E,
) -> bool {
    let mut reporter = Reporter::new(err, options.format, options.color, stderr_is_tty(), path);
    let Some(hierarchy) = load_hierarchy(source, &mut reporter) else {
        reporter.finish();
        return false;
    };

    let registry = hierarchy.registry();
    let resolver = Resolver::new(registry, options.policy);
    let mut linearizer = Linearizer::new(&resolver).with_config(options.linearize_config());

    let mut results: Vec<(String, Linearization)> = Vec::with_capacity(exprs.len());
    for expr in exprs {
        let node = match parse_type_expr(expr, registry) {
            Ok(node) => node,
            Err(error) => {
                reporter.report(&error.to_diagnostic());
                continue;
            }
        };
        match linearizer.linearize(node) {
            Ok(linearization) => results.push((node_name(node, registry), linearization)),
            Err(error) => reporter.report(&failure_diagnostic(&hierarchy, node, &error)),
        }
    }

    let names = |lin: &Linearization| -> Vec<String> {
        lin.iter().map(|&n: &TypeNode| node_name(n, registry)).collect()
    };
    match options.format {
        OutputFormat::Text => {
            for (name, lin) in &results {
                let _ = writeln!(out, "{name}: {}", names(lin).join(", "));
            }
        }
        OutputFormat::Json => {
            let _ = writeln!(out, "[");
            for (i, (name, lin)) in results.iter().enumerate() {
                let order: Vec<String> = names(lin).iter().map(|n| format!("\"{n}\"")).collect();
                let comma = if i + 1 < results.len() { "," } else { "" };
                let _ = writeln!(
                    out,
                    "  {{\"type\": \"{name}\", \"linearization\": [{}]}}{comma}",
                    order.join(", ")
                );
            }
            let _ = writeln!(out, "]");
        }
    }
    let _ = out.flush();

    let ok = !reporter.has_errors();
    reporter.finish();
    ok
}
