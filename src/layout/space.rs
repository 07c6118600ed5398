//! Space allocation arithmetic.
//!
//! Two free functions carry all of the box-packing division work:
//! [`solve_space_alloc`] splits a total extent into equal per-item slots plus
//! a gap list, and [`distribute`] splits leftover space among expanding
//! children. Both keep every cell accounted for: remainders are handed out
//! one unit at a time to the lowest indices so that the pieces always sum
//! back to the input total.

use thiserror::Error;

// ---------------------------------------------------------------------------
// DistributeError
// ---------------------------------------------------------------------------

/// Failure to satisfy the minimum sizes of non-expanding children.
///
/// Returned by [`distribute`] when no child can absorb the shortfall. The
/// caller is expected to log it and fall back to unclamped sizes; layout
/// overflow is visual, never fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DistributeError {
    #[error("cannot satisfy non-expanding minimums: need {needed} cells, have {available}")]
    Insufficient { needed: i32, available: i32 },
}

// ---------------------------------------------------------------------------
// solve_space_alloc
// ---------------------------------------------------------------------------

/// Split `total` cells across `count` items separated by `spacing`.
///
/// Returns the per-item slot size (`increment`) and a gap list of length
/// `count - 1`, where `gaps[idx]` is the whole space after item `idx`. Each
/// gap starts at `spacing`; the division remainder is distributed one cell at
/// a time into the earliest gaps. Whenever
/// `total >= spacing * (count - 1) >= 0` the parts conserve space exactly:
///
/// ```text
/// increment * count + sum(gaps) == total
/// ```
///
/// `count <= 0` yields `(0, vec![])`; a negative `total` is treated as 0.
pub fn solve_space_alloc(count: i32, total: i32, spacing: i32) -> (i32, Vec<i32>) {
    if count <= 0 {
        return (0, Vec::new());
    }
    let total = total.max(0);
    let num_gaps = count - 1;
    let spaced = total - spacing * num_gaps;
    let increment = (spaced.div_euclid(count)).max(0);
    let mut remainder = (total - spacing * num_gaps - increment * count).max(0);

    let mut gaps = Vec::with_capacity(num_gaps as usize);
    for _ in 0..num_gaps {
        if remainder > 0 {
            gaps.push(spacing + 1);
            remainder -= 1;
        } else {
            gaps.push(spacing);
        }
    }
    (increment, gaps)
}

// ---------------------------------------------------------------------------
// distribute
// ---------------------------------------------------------------------------

/// Split `total` leftover cells among `num_expanding` children.
///
/// `extra` is the space already claimed by non-expanding children beyond
/// their fair (homogeneous) share; expanding children divide what remains,
/// `total - extra`, equally, with the division remainder granted to the
/// lowest indices first. The gap list is pure inter-item spacing; in the
/// dynamic layout path leftover space goes to expanding children, not gaps.
///
/// Errors when there are no expanding children to absorb a shortfall
/// (`num_expanding == 0`, `extra > 0`, `total < extra`). When expanding
/// children exist but `total < extra`, every share is 0 and the deficit
/// becomes visual overflow instead.
pub fn distribute(
    total: i32,
    extra: i32,
    num_expanding: i32,
    num_children: i32,
    spacing: i32,
) -> Result<(Vec<i32>, Vec<i32>), DistributeError> {
    if num_expanding <= 0 && extra > 0 && total < extra {
        return Err(DistributeError::Insufficient { needed: extra, available: total });
    }

    let num_gaps = (num_children - 1).max(0);
    let gaps = vec![spacing; num_gaps as usize];

    if num_expanding <= 0 {
        return Ok((Vec::new(), gaps));
    }

    let available = total - extra;
    let mut dist = vec![0; num_expanding as usize];
    if available > 0 {
        let share = available / num_expanding;
        let remainder = available % num_expanding;
        for (idx, slot) in dist.iter_mut().enumerate() {
            *slot = share + if (idx as i32) < remainder { 1 } else { 0 };
        }
    }
    Ok((dist, gaps))
}

// ===========================================================================
// Tests
// ===========================================================================
