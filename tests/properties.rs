use {
    rand::Rng,
    slime_fusion::{engine::Strategy, input, naive, solve},
};

fn answer(ring: &[i64]) -> i64 {
    solve(ring, Strategy::Sequential)
        .unwrap()
        .expect("ring is non-empty")
        .experience
}

fn random_ring(rng: &mut rand::rngs::ThreadRng, max_n: usize, max_size: i64) -> Vec<i64> {
    let n = rng.gen_range(1..=max_n);
    (0..n).map(|_| rng.gen_range(1..=max_size)).collect()
}

#[test]
fn test_small_n() {
    assert_eq!(solve(&[], Strategy::Sequential).unwrap(), None);
    assert_eq!(answer(&[1]), 0);
    assert_eq!(answer(&[1000]), 0);
    assert_eq!(answer(&[3, 2]), 3 * 2 * 3);
    assert_eq!(answer(&[5, 5]), 125);
    assert_eq!(answer(&[1, 1, 1]), 2);
    assert_eq!(answer(&[1, 2, 3]), 24);
}

#[test]
fn test_matches_exhaustive_search() {
    let mut rng = rand::thread_rng();

    for _ in 0..300 {
        let ring = random_ring(&mut rng, 6, 20);
        assert_eq!(
            answer(&ring),
            naive::best_experience(&ring).unwrap(),
            "ring: {ring:?}"
        );
    }
}

#[test]
fn test_rotation_invariant() {
    let mut rng = rand::thread_rng();

    for _ in 0..50 {
        let ring = random_ring(&mut rng, 16, 1000);
        let expected = answer(&ring);

        for shift in 1..ring.len() {
            let mut rotated = ring.clone();
            rotated.rotate_left(shift);
            assert_eq!(answer(&rotated), expected, "ring: {ring:?}, shift: {shift}");
        }
    }
}

#[test]
fn test_scaling_is_cubic() {
    let mut rng = rand::thread_rng();

    for _ in 0..50 {
        let ring = random_ring(&mut rng, 12, 50);
        let c = rng.gen_range(1..=10);
        let scaled: Vec<i64> = ring.iter().map(|v| v * c).collect();

        assert_eq!(answer(&scaled), answer(&ring) * c * c * c, "ring: {ring:?}, c: {c}");
    }
}

#[test]
fn test_parallel_answer() {
    let mut rng = rand::thread_rng();

    for _ in 0..20 {
        let ring = random_ring(&mut rng, 40, 1000);
        assert_eq!(
            solve(&ring, Strategy::Parallel).unwrap(),
            solve(&ring, Strategy::Sequential).unwrap()
        );
    }
}

#[test]
fn test_from_text() {
    let ring = input::parse("4\n2 3 5 10\n").unwrap().unwrap();
    assert_eq!(answer(&ring), naive::best_experience(&ring).unwrap());

    assert_eq!(input::parse("").unwrap(), None);
}
