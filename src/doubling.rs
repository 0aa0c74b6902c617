use ndarray::{s, Array1, ArrayView1};

/// The ring of slime sizes laid out twice in a row, followed by a zero.
///
/// Every rotation of the ring is the window `i..i + n` for some `i < n`.
/// The trailing zero is the boundary value read past the last slot, so
/// `self[2 * n]` is always addressable and always `0`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Doubled {
    n: usize,
    values: Array1<i64>,
}

impl Doubled {
    /// Returns `None` for an empty ring.
    pub fn new(ring: &[i64]) -> Option<Self> {
        if ring.is_empty() {
            return None;
        }

        let values = ring
            .iter()
            .chain(ring)
            .copied()
            .chain(std::iter::once(0))
            .collect();

        Some(Self {
            n: ring.len(),
            values,
        })
    }

    /// Number of slimes in the ring.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Length of the doubled sequence, `2 * n`, not counting the sentinel.
    pub fn len(&self) -> usize {
        2 * self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    pub fn view(&self) -> ArrayView1<i64> {
        self.values.slice(s![..self.len()])
    }
}

impl std::ops::Index<usize> for Doubled {
    type Output = i64;

    fn index(&self, ix: usize) -> &i64 {
        &self.values[ix]
    }
}

#[test]
fn test_halves_match() {
    let ring = [4, 1, 7, 3, 3];
    let doubled = Doubled::new(&ring).unwrap();

    assert_eq!(doubled.n(), 5);
    assert_eq!(doubled.len(), 10);
    for i in 0..doubled.n() {
        assert_eq!(doubled[i], doubled[i + doubled.n()]);
        assert_eq!(doubled[i], ring[i]);
    }
    assert_eq!(doubled[doubled.len()], 0);
    assert_eq!(doubled.view().to_vec(), [4, 1, 7, 3, 3, 4, 1, 7, 3, 3]);
}

#[test]
fn test_empty_ring() {
    assert_eq!(Doubled::new(&[]), None);
}

#[test]
fn test_single_slime() {
    let doubled = Doubled::new(&[9]).unwrap();
    assert_eq!(doubled.view().to_vec(), [9, 9]);
    assert_eq!(doubled[2], 0);
}
