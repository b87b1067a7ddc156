use std::cmp::Ordering;
use std::collections::VecDeque;

use cfc_core::{CfcError, ErrorInfo};

/// Selects the left rotation turning `sequence` into Eastman's canonical
/// comma-free representative.
///
/// The sequence is one full period of a cyclic word; its length must be
/// odd. Boundary points partition three concatenated copies of the input
/// into subwords, and each phase scans the live points cyclically,
/// grouping them into maximal basins where the subword comparator keeps
/// descending. An odd basin retains its midpoint, an even basin retains
/// nothing, so the live count stays odd and shrinks until a single point
/// remains; its position is the requested shift, always below the period.
///
/// Fails with `Config` on an even (or zero) length before anything runs,
/// and with `Cyclic` when a phase finds no comparator descent at all,
/// which happens exactly when the input is periodic. `Cyclic` is fatal
/// for the invocation: there is no shift to fall back on.
pub fn shift(sequence: &[u32]) -> Result<usize, CfcError> {
    let n = sequence.len();
    if n % 2 == 0 {
        let info = ErrorInfo::new("even-length", "sequence length must be odd")
            .with_context("length", n.to_string());
        return Err(CfcError::Config(info));
    }
    if n == 1 {
        return Ok(0);
    }

    // Three copies let any subword of length up to n be read without
    // wrapping indices.
    let mut xs = Vec::with_capacity(n * 3);
    for _ in 0..3 {
        xs.extend_from_slice(sequence);
    }

    let mut bounds: Vec<usize> = (0..n * 3).collect();
    let mut live = n;

    while live > 1 {
        // No descent anywhere means all adjacent subwords compare equal:
        // the input is periodic.
        let mut i = 1;
        while i <= live && !descends(&xs, &bounds, i) {
            i += 1;
        }
        if i > live {
            let info = ErrorInfo::new("cyclic-sequence", "sequence equals one of its rotations")
                .with_context("length", n.to_string());
            return Err(CfcError::Cyclic(info));
        }

        // Step over the tail of a basin that began behind position 1.
        while descends(&xs, &bounds, i + 1) {
            i += 1;
        }

        let mut retained: VecDeque<usize> = VecDeque::new();
        while i <= live {
            // climb the ascent run
            let mut q = i + 1;
            while !descends(&xs, &bounds, q + 1) {
                q += 1;
            }
            // walk the descent run down to the next basin
            let mut j = q + 1;
            while descends(&xs, &bounds, j + 1) {
                j += 1;
            }

            if (j - i) % 2 == 1 {
                // odd basin: keep the comparator-consistent midpoint
                let keep = if (q - i) % 2 == 1 { q + 1 } else { q };
                if keep >= live {
                    // wrapped past the period, so cyclically this point
                    // precedes everything retained so far
                    retained.push_front(bounds[keep - live]);
                } else {
                    retained.push_back(bounds[keep]);
                }
            }

            i = j;
        }

        live = retained.len();
        let mut next: Vec<usize> = retained.into_iter().collect();
        // re-triple the survivors for the next phase
        let mut k = live;
        while next[k - live] < 2 * n {
            next.push(next[k - live] + n);
            k += 1;
        }
        bounds = next;
    }

    Ok(bounds[0])
}

/// True when the subword ending at boundary `i` beats the one starting
/// there.
fn descends(xs: &[u32], bounds: &[usize], i: usize) -> bool {
    let left = &xs[bounds[i - 1]..bounds[i]];
    let right = &xs[bounds[i]..bounds[i + 1]];
    subword_cmp(left, right) == Ordering::Greater
}

/// The one comparator every phase shares: a longer subword wins, equal
/// lengths are ordered by content.
fn subword_cmp(left: &[u32], right: &[u32]) -> Ordering {
    left.len().cmp(&right.len()).then_with(|| left.cmp(right))
}
