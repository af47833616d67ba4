//! The `check` command: linearize every declared type and report failures.

use std::io::Write;

use mro_ir::TypeNode;
use mro_linearize::{CacheConfig, LinearizationCache, LinearizeError};
use mro_resolve::Resolver;
use rayon::prelude::*;

use super::{failure_diagnostic, load_hierarchy, stderr_is_tty, CommandOptions};
use crate::Reporter;

/// Check that every type declared in `source` linearizes.
///
/// Types are linearized in parallel through one shared cache. A type that
/// fails only because an ancestor is inconsistent is counted but not
/// reported again; the ancestor's own diagnostic covers it. Returns `false`
/// if anything failed.
#[tracing::instrument(level = "debug", skip_all, fields(path = %path, policy = %options.policy))]
pub fn check_command<O: Write, E: Write>(
    path: &str,
    source: &str,
    options: &CommandOptions,
    out: &mut O,
    err: E,
) -> bool {
    let mut reporter = Reporter::new(err, options.format, options.color, stderr_is_tty(), path);
    let Some(hierarchy) = load_hierarchy(source, &mut reporter) else {
        reporter.finish();
        return false;
    };

    let resolver = Resolver::new(hierarchy.registry(), options.policy);
    let cache = LinearizationCache::with_config(
        CacheConfig::default().with_linearize(options.linearize_config()),
    );

    let results: Vec<_> = hierarchy
        .declared()
        .par_iter()
        .map(|&id| {
            let node = TypeNode::Class(id);
            (node, cache.get_or_compute(&resolver, node))
        })
        .collect();

    let total = results.len();
    let mut failed = 0usize;
    for (node, result) in &results {
        let Err(error) = result else { continue };
        failed += 1;
        let inherited = matches!(
            error,
            LinearizeError::Inconsistent(failure) if failure.node() != *node
        );
        if !inherited {
            reporter.report(&failure_diagnostic(&hierarchy, *node, error));
        }
    }
    tracing::debug!(total, failed, stats = ?cache.stats(), "check finished");

    let ok = !reporter.has_errors();
    if ok {
        let _ = writeln!(out, "OK: {path} ({total} types linearized)");
    } else {
        let _ = writeln!(out, "{path}: {failed} of {total} types failed to linearize");
    }
    let _ = out.flush();
    reporter.finish();
    ok
}
