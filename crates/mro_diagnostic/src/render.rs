//! Linearization errors as diagnostics.
//!
//! Errors from `mro_linearize` hold bare [`TypeNode`]s. Rendering resolves
//! them to names through the caller's [`TypeUniverse`] so the message reads
//! in the user's vocabulary.

use std::fmt::Write;

use mro_ir::{NodeDisplay, TypeNode, TypeUniverse};
use mro_linearize::{LinearizationFailure, LinearizeError};

use crate::{Diagnostic, ErrorCode};

/// Longest chain shown in full; longer chains are elided in the middle.
const MAX_CHAIN_SHOWN: usize = 8;

/// Render one node by name.
pub fn node_name<U: TypeUniverse + ?Sized>(node: TypeNode, universe: &U) -> String {
    NodeDisplay::new(node, universe).to_string()
}

/// Render a sequence as a comma-separated list, each name in backticks.
pub fn node_list<U: TypeUniverse + ?Sized>(nodes: &[TypeNode], universe: &U) -> String {
    let mut out = String::new();
    for (i, &node) in nodes.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        let _ = write!(out, "`{}`", NodeDisplay::new(node, universe));
    }
    out
}

/// Build the diagnostic for a failed request to linearize `requested`.
pub fn linearize_error<U: TypeUniverse + ?Sized>(
    requested: TypeNode,
    error: &LinearizeError,
    universe: &U,
) -> Diagnostic {
    match error {
        LinearizeError::Inconsistent(failure) => inconsistent(requested, failure, universe),
        LinearizeError::DepthExceeded {
            root,
            node,
            limit,
            chain,
        } => too_deep(*root, *node, *limit, chain, universe),
    }
}

fn inconsistent<U: TypeUniverse + ?Sized>(
    requested: TypeNode,
    failure: &LinearizationFailure,
    universe: &U,
) -> Diagnostic {
    let failed = node_name(failure.node(), universe);
    let mut diag = Diagnostic::error(ErrorCode::E0001).with_message(format!(
        "inconsistent precedence while linearizing `{failed}`"
    ));

    if failure.node() != requested {
        diag = diag.with_note(format!(
            "`{failed}` is an ancestor of `{}`",
            node_name(requested, universe)
        ));
    }

    diag = diag.with_note(format!(
        "order so far: [{}]",
        node_list(failure.partial(), universe)
    ));

    let inputs = failure.remaining();
    let Some((declared, parent_inputs)) = inputs.split_last() else {
        return diag;
    };
    for (&parent, input) in failure.parents().iter().zip(parent_inputs) {
        if !input.is_empty() {
            diag = diag.with_note(format!(
                "still to place from `{}`: [{}]",
                node_name(parent, universe),
                node_list(input, universe)
            ));
        }
    }
    if !declared.is_empty() {
        diag = diag.with_note(format!(
            "still to place from the declared parents: [{}]",
            node_list(declared, universe)
        ));
    }

    let conflicting = failure.conflicting();
    if conflicting.len() > 1 {
        diag = diag.with_note(format!(
            "no order satisfies every declaration among {}",
            node_list(&conflicting, universe)
        ));
    }

    diag.with_suggestion(format!(
        "reorder the direct parents of `{failed}` to agree with its ancestors, or drop a redundant parent"
    ))
}

fn too_deep<U: TypeUniverse + ?Sized>(
    root: TypeNode,
    node: TypeNode,
    limit: usize,
    chain: &[TypeNode],
    universe: &U,
) -> Diagnostic {
    let root_name = node_name(root, universe);
    let node_name_str = node_name(node, universe);

    let shown = if chain.len() <= MAX_CHAIN_SHOWN {
        node_list(chain, universe)
    } else {
        let half = MAX_CHAIN_SHOWN / 2;
        format!(
            "{}, ..., {}",
            node_list(&chain[..half], universe),
            node_list(&chain[chain.len() - half..], universe)
        )
    };

    Diagnostic::error(ErrorCode::E0002)
        .with_message(format!(
            "ancestor chain of `{root_name}` exceeds {limit} levels"
        ))
        .with_note(format!("reached `{node_name_str}` through [{shown}]"))
        .with_suggestion(format!(
            "check the parents of `{node_name_str}` for a cycle, or raise the depth limit"
        ))
}
