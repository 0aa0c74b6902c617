use crate::engine::Table;

/// Best way to fuse the whole ring.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Best {
    /// 1-based slime the winning rotation starts from. Ties go to the lowest.
    pub offset: usize,
    pub experience: i64,
}

pub fn best_rotation(table: &Table) -> Best {
    let n = table.n();

    (0..n)
        .map(|i| Best {
            offset: i + 1,
            experience: table[[i, i + n - 1]],
        })
        .reduce(|best, next| {
            if next.experience > best.experience {
                next
            } else {
                best
            }
        })
        .unwrap_or(Best {
            offset: 1,
            experience: 0,
        })
}

#[cfg(test)]
fn best_for(ring: &[i64]) -> Best {
    use crate::{doubling::Doubled, engine};

    let table = engine::fill(&Doubled::new(ring).unwrap(), engine::Strategy::Sequential).unwrap();
    best_rotation(&table)
}

#[test]
fn test_single_slime() {
    assert_eq!(
        best_for(&[42]),
        Best {
            offset: 1,
            experience: 0
        }
    );
}

#[test]
fn test_pair_prefers_larger_outside() {
    assert_eq!(best_for(&[3, 2]).experience, 18);
    assert_eq!(
        best_for(&[2, 3]),
        Best {
            offset: 2,
            experience: 18
        }
    );
}

#[test]
fn test_equal_rotations_pick_first() {
    assert_eq!(
        best_for(&[1, 1, 1]),
        Best {
            offset: 1,
            experience: 2
        }
    );
}
