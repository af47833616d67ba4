//! The C3 merge loop.
//!
//! Inputs are the linearizations of the node's direct parents followed by the
//! direct-parent list itself. Each input is a borrowed slice with a cursor;
//! "removing the head" is advancing the cursor, so nothing is copied until the
//! result (or failure record) is built.
//!
//! # Candidate selection
//!
//! A candidate must be the head of some input and appear in no input's tail.
//! Among valid candidates the first found wins, searching placed nodes
//! newest first and, for each, its direct parents in declared order. This
//! order fixes which of several valid C3 orders is produced and must not
//! change.
//!
//! # Tail test
//!
//! `tail_counts[n]` is the number of inputs holding `n` strictly after their
//! cursor. It starts as the count over positions `1..` and is decremented
//! whenever a cursor advance makes `n` a head, so "in no tail" is one map
//! lookup.

use mro_ir::TypeNode;
use mro_resolve::Parents;
use rustc_hash::FxHashMap;
use smallvec::{smallvec, SmallVec};

use crate::{LinearizationFailure, Linearization};

/// Merge `node` over its parents' linearizations.
///
/// `parent_lins[i]` must be the linearization of `direct_parents[i]`.
/// `parents_of` supplies direct parents of each node placed after `node`.
pub(crate) fn merge<F>(
    node: TypeNode,
    direct_parents: &[TypeNode],
    parent_lins: &[Linearization],
    mut parents_of: F,
) -> Result<Linearization, LinearizationFailure>
where
    F: FnMut(TypeNode) -> Parents,
{
    debug_assert_eq!(direct_parents.len(), parent_lins.len());

    let mut inputs: SmallVec<[&[TypeNode]; 8]> =
        parent_lins.iter().map(Linearization::as_slice).collect();
    inputs.push(direct_parents);
    let mut cursors: SmallVec<[usize; 8]> = smallvec![0; inputs.len()];

    let mut tail_counts: FxHashMap<TypeNode, u32> = FxHashMap::default();
    let mut total = 0;
    for input in &inputs {
        total += input.len();
        for &n in input.iter().skip(1) {
            *tail_counts.entry(n).or_default() += 1;
        }
    }

    let mut result = Vec::with_capacity(1 + total / 2);
    result.push(node);
    let mut placed_parents: Vec<Parents> = Vec::with_capacity(result.capacity());
    placed_parents.push(direct_parents.iter().copied().collect());

    while !exhausted(&inputs, &cursors) {
        let Some(candidate) = find_candidate(&inputs, &cursors, &tail_counts, &placed_parents)
        else {
            let remaining = inputs
                .iter()
                .zip(&cursors)
                .map(|(input, &cursor)| input[cursor..].to_vec())
                .collect();
            let failure =
                LinearizationFailure::new(node, direct_parents.to_vec(), result, remaining);
            tracing::debug!(?failure, "merge failed");
            return Err(failure);
        };
        tracing::trace!(?candidate, "placed");

        for (input, cursor) in inputs.iter().zip(cursors.iter_mut()) {
            if input.get(*cursor) == Some(&candidate) {
                *cursor += 1;
                if let Some(new_head) = input.get(*cursor) {
                    if let Some(count) = tail_counts.get_mut(new_head) {
                        *count -= 1;
                    }
                }
            }
        }

        result.push(candidate);
        placed_parents.push(parents_of(candidate));
    }

    Ok(Linearization::from_vec(result))
}

fn exhausted(inputs: &[&[TypeNode]], cursors: &[usize]) -> bool {
    inputs
        .iter()
        .zip(cursors)
        .all(|(input, &cursor)| cursor >= input.len())
}

fn is_head(inputs: &[&[TypeNode]], cursors: &[usize], node: TypeNode) -> bool {
    inputs
        .iter()
        .zip(cursors)
        .any(|(input, &cursor)| input.get(cursor) == Some(&node))
}

fn find_candidate(
    inputs: &[&[TypeNode]],
    cursors: &[usize],
    tail_counts: &FxHashMap<TypeNode, u32>,
    placed_parents: &[Parents],
) -> Option<TypeNode> {
    placed_parents.iter().rev().find_map(|parents| {
        parents.iter().copied().find(|&p| {
            tail_counts.get(&p).copied().unwrap_or(0) == 0 && is_head(inputs, cursors, p)
        })
    })
}
