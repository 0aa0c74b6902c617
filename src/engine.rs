//! Interval DP over the doubled ring.
//!
//! `table[[start, end]]` holds the most experience obtainable by fusing the
//! slimes `start..=end` of the doubled sequence into one. Fusing `start..=k`
//! with `k + 1..=end` yields `v[start] * v[k + 1] * v[end + 1]`, where
//! `v[2n]` is the zero sentinel of [`Doubled`].

use {
    crate::{doubling::Doubled, errors::*},
    ndarray::Array2,
    rayon::prelude::*,
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Strategy {
    #[default]
    Sequential,
    /// Spread the starts of each length pass over the current rayon pool.
    Parallel,
}

/// Completed DP table, indexed `[[start, end]]` with 0-based bounds.
///
/// Only intervals up to `n` slimes long are filled; longer ones stay `0`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Table {
    n: usize,
    dp: Array2<i64>,
}

impl Table {
    pub fn n(&self) -> usize {
        self.n
    }

    /// Experience for `start..=end`, or `None` outside the filled region.
    pub fn get(&self, start: usize, end: usize) -> Option<i64> {
        if start <= end && end - start < self.n {
            self.dp.get([start, end]).copied()
        } else {
            None
        }
    }
}

crate::wrapper_for!(Table, dp, Array2<i64>);

pub fn fill(doubled: &Doubled, strategy: Strategy) -> Result<Table> {
    fill_with(doubled, strategy, |_| {})
}

/// Like [`fill`], calling `on_pass(len)` after every completed length pass.
pub fn fill_with(
    doubled: &Doubled,
    strategy: Strategy,
    mut on_pass: impl FnMut(usize),
) -> Result<Table> {
    let n = doubled.n();
    let m = doubled.len();

    let mut dp = Array2::zeros((m, m));

    for len in 2..=n {
        let starts = 0..m - len + 1;
        let best = |start: usize| best_split(&dp, doubled, start, start + len - 1);

        // every cell of this pass reads only shorter intervals
        let pass: Vec<i64> = match strategy {
            Strategy::Sequential => starts.map(best).collect::<Result<_>>()?,
            Strategy::Parallel => starts.into_par_iter().map(best).collect::<Result<_>>()?,
        };

        for (start, experience) in pass.into_iter().enumerate() {
            dp[[start, start + len - 1]] = experience;
        }

        on_pass(len);
    }

    log::debug!("filled {m}x{m} table for n = {n}");

    Ok(Table { n, dp })
}

fn best_split(dp: &Array2<i64>, v: &Doubled, start: usize, end: usize) -> Result<i64> {
    let overflow = || Error::from(ErrorKind::Overflow(start + 1, end + 1));

    let outer = v[start].checked_mul(v[end + 1]).ok_or_else(overflow)?;

    (start..end).try_fold(0, |best: i64, k| {
        let total = outer
            .checked_mul(v[k + 1])
            .and_then(|fusion| fusion.checked_add(dp[[start, k]]))
            .and_then(|total| total.checked_add(dp[[k + 1, end]]))
            .ok_or_else(overflow)?;
        Ok(best.max(total))
    })
}

#[cfg(test)]
fn table_for(ring: &[i64]) -> Table {
    fill(&Doubled::new(ring).unwrap(), Strategy::Sequential).unwrap()
}

#[test]
fn test_single_slime_intervals_are_free() {
    let table = table_for(&[5, 2, 8, 1]);
    for i in 0..8 {
        assert_eq!(table.get(i, i), Some(0));
    }
}

#[test]
fn test_pair() {
    // [3, 2, 3, 2, 0]
    let table = table_for(&[3, 2]);
    assert_eq!(table.get(0, 1), Some(3 * 2 * 3));
    assert_eq!(table.get(1, 2), Some(2 * 3 * 2));
    // reads the sentinel
    assert_eq!(table.get(2, 3), Some(0));
    assert_eq!(table.get(0, 2), None);
}

#[test]
fn test_triple_by_hand() {
    // [1, 2, 3, 1, 2, 3, 0]
    let table = table_for(&[1, 2, 3]);
    // [0, 1]: 1 * 2 * 3, [1, 2]: 2 * 3 * 1
    assert_eq!(table.get(0, 1), Some(6));
    assert_eq!(table.get(1, 2), Some(6));
    // [0, 2] split at 0: 0 + 6 + 1 * 2 * 1 = 8, split at 1: 6 + 0 + 1 * 3 * 1 = 9
    assert_eq!(table.get(0, 2), Some(9));
}

#[test]
fn test_overflow_is_reported() {
    let big = i64::MAX / 2;
    let err = fill(&Doubled::new(&[big, big]).unwrap(), Strategy::Sequential).unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::Overflow(1, 2)));
}

#[test]
fn test_idempotent() {
    let doubled = Doubled::new(&[7, 1, 4, 4, 9, 2]).unwrap();
    let first = fill(&doubled, Strategy::Sequential).unwrap();
    let second = fill(&doubled, Strategy::Sequential).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_parallel_matches_sequential() {
    use rand::Rng;

    let mut rng = rand::thread_rng();

    for _ in 0..20 {
        let n = rng.gen_range(1..=24);
        let ring: Vec<i64> = (0..n).map(|_| rng.gen_range(1..=100)).collect();
        let doubled = Doubled::new(&ring).unwrap();

        let sequential = fill(&doubled, Strategy::Sequential).unwrap();
        let parallel = fill(&doubled, Strategy::Parallel).unwrap();

        assert_eq!(sequential, parallel);
    }
}

#[test]
fn test_reports_every_pass() {
    let mut passes = Vec::new();
    fill_with(&Doubled::new(&[1, 1, 1, 1]).unwrap(), Strategy::Sequential, |len| {
        passes.push(len)
    })
    .unwrap();
    assert_eq!(passes, [2, 3, 4]);
}
