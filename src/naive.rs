//! Exhaustive search over every order of fusions around the ring.
//!
//! Factorial in the number of slimes; only for cross-checking the DP and for
//! tiny inputs.

use {crate::errors::*, error_chain::bail};

pub const MAX_N: usize = 9;

#[derive(Clone, Copy, Debug)]
struct Group {
    start: usize,
    len: usize,
}

pub fn best_experience(ring: &[i64]) -> Result<i64> {
    let n = ring.len();
    if n > MAX_N {
        bail!(ErrorKind::TooLargeForNaive(n, MAX_N));
    }

    let groups = (0..n).map(|start| Group { start, len: 1 }).collect();
    recurse(ring, groups)
}

fn recurse(ring: &[i64], groups: Vec<Group>) -> Result<i64> {
    let n = ring.len();
    let g = groups.len();

    if g <= 1 {
        return Ok(0);
    }

    let mut best = 0;

    // fuse each group with its clockwise neighbour
    for left_ix in 0..g {
        let right_ix = (left_ix + 1) % g;
        let (left, right) = (groups[left_ix], groups[right_ix]);
        let after = (right.start + right.len) % n;

        let fusion = ring[left.start]
            .checked_mul(ring[right.start])
            .and_then(|p| p.checked_mul(ring[after]))
            .ok_or_else(|| {
                ErrorKind::Overflow(left.start + 1, (right.start + right.len - 1) % n + 1)
            })?;

        let mut next = groups.clone();
        next[left_ix].len += right.len;
        next.remove(right_ix);

        let total = recurse(ring, next)?
            .checked_add(fusion)
            .ok_or_else(|| ErrorKind::Overflow(1, n))?;
        best = best.max(total);
    }

    Ok(best)
}

#[test]
fn test_known_answers() {
    assert_eq!(best_experience(&[5]).unwrap(), 0);
    assert_eq!(best_experience(&[3, 2]).unwrap(), 18);
    assert_eq!(best_experience(&[1, 1, 1]).unwrap(), 2);
    // fuse 3 into 1, then the pair into 2: 3 * 1 * 2 + 3 * 2 * 3
    assert_eq!(best_experience(&[1, 2, 3]).unwrap(), 24);
}

#[test]
fn test_refuses_large_rings() {
    let err = best_experience(&[1; MAX_N + 1]).unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::TooLargeForNaive(10, MAX_N)));
}
