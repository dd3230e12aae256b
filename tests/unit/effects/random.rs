use super::*;

#[test]
fn seeded_random_is_reproducible_and_in_range() {
    let mut a = SeededRandom::new(42);
    let mut b = SeededRandom::new(42);
    for _ in 0..1000 {
        let x = a.next_unit();
        assert_eq!(x, b.next_unit());
        assert!((0.0..1.0).contains(&x));
    }
}

#[test]
fn float_sequence_cycles_and_counts() {
    let mut s = FloatSequence::new(vec![0.25, 0.75]);
    assert_eq!(s.next_unit(), 0.25);
    assert_eq!(s.next_unit(), 0.75);
    assert_eq!(s.next_unit(), 0.25);
    assert_eq!(s.draws(), 3);

    let mut clamped = FloatSequence::new(vec![1.0, -3.0]);
    assert!(clamped.next_unit() < 1.0);
    assert_eq!(clamped.next_unit(), 0.0);
}

#[test]
fn next_index_stays_in_bounds() {
    let mut s = FloatSequence::new(vec![0.0, 0.5, 0.999]);
    assert_eq!(s.next_index(6), 0);
    assert_eq!(s.next_index(6), 3);
    assert_eq!(s.next_index(6), 5);
}
