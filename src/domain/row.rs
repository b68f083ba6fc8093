//! Single-row evolution.
//!
//! Each output cell is the rule's lookup of its three neighbors in the
//! previous row, XORed with the matching cell from two rows back. The XOR
//! makes the automaton reversible: knowing two consecutive rows and the
//! rule recovers the row before them.

use super::{BoundaryPolicy, Rule};
use rayon::prelude::*;

#[inline]
fn evolve_cell(
    prev: &[bool],
    flip_source: Option<&[bool]>,
    rule: &Rule,
    policy: BoundaryPolicy,
    x: usize,
) -> bool {
    let (left, center, right) = policy.neighbors(prev, x);
    let base = rule.output(Rule::neighbor_code(left, center, right));
    let flip = flip_source.is_some_and(|row| row[x]);
    base ^ flip
}

/// Compute one output row from the previous row.
///
/// `flip_source` is the row two steps back: the grid row at `i - 2` for
/// rows with index ≥ 2, the caller-supplied prior state (if any) for the
/// first computed row. `None` means every flip bit is false.
pub fn compute_row(
    prev: &[bool],
    flip_source: Option<&[bool]>,
    rule: &Rule,
    policy: BoundaryPolicy,
) -> Vec<bool> {
    (0..prev.len())
        .map(|x| evolve_cell(prev, flip_source, rule, policy, x))
        .collect()
}

/// Parallel variant of [`compute_row`] using rayon.
/// Columns are independent, so the output is bit-identical to the serial
/// version. Worthwhile for wide rows only.
pub fn compute_row_parallel(
    prev: &[bool],
    flip_source: Option<&[bool]>,
    rule: &Rule,
    policy: BoundaryPolicy,
) -> Vec<bool> {
    (0..prev.len())
        .into_par_iter()
        .map(|x| evolve_cell(prev, flip_source, rule, policy, x))
        .collect()
}

/// Reconstruct the row two steps back from two consecutive rows.
///
/// Inverts [`compute_row`]: since `current = base(prev) ^ two_back`,
/// recomputing the base bits from `prev` gives `two_back = current ^ base`.
pub fn recover_prior_row(
    prev: &[bool],
    current: &[bool],
    rule: &Rule,
    policy: BoundaryPolicy,
) -> Vec<bool> {
    debug_assert_eq!(prev.len(), current.len());
    (0..prev.len())
        .map(|x| {
            let (left, center, right) = policy.neighbors(prev, x);
            current[x] ^ rule.output(Rule::neighbor_code(left, center, right))
        })
        .collect()
}
