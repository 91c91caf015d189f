//! Integration tests for traversal ordering

use hetu_geometry::sequence::{EVEN_SEQUENCE, ODD_SEQUENCE, is_descending};
use hetu_geometry::{
    DiagramError, GroupedPoint, HeTuPoint, generate_hetu_catalog, sort_by_group_sequence,
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use test_case::test_case;

fn ids(points: &[HeTuPoint], order: &[usize]) -> Vec<String> {
    order.iter().map(|&i| points[i].id().to_string()).collect()
}

#[test_case(&ODD_SEQUENCE; "odd traversal")]
#[test_case(&EVEN_SEQUENCE; "even traversal")]
fn test_group_direction(sequence: &[u8]) {
    let catalog = generate_hetu_catalog();
    let points = catalog.points();
    let order = sort_by_group_sequence(points, sequence).unwrap();
    assert_eq!(order.len(), 20);

    for pair in order.windows(2) {
        let (a, b) = (&points[pair[0]], &points[pair[1]]);
        if a.value != b.value {
            continue;
        }
        if is_descending(a.value) {
            assert!(a.id > b.id, "{} should follow {}", b.id, a.id);
        } else {
            assert!(a.id < b.id, "{} should follow {}", b.id, a.id);
        }
    }
}

#[test]
fn test_groups_follow_sequence() {
    let catalog = generate_hetu_catalog();
    let order = sort_by_group_sequence(catalog.points(), &ODD_SEQUENCE).unwrap();
    let mut seen: Vec<u8> = order.iter().map(|&i| catalog.points()[i].value).collect();
    seen.dedup();
    assert_eq!(seen, ODD_SEQUENCE.to_vec());
}

#[test]
fn test_sequence_errors() {
    let catalog = generate_hetu_catalog();
    assert_eq!(
        sort_by_group_sequence(catalog.points(), &[1, 3, 1]),
        Err(DiagramError::DuplicateSequenceGroup(1))
    );
    assert_eq!(
        sort_by_group_sequence(catalog.points(), &[1, 11]),
        Err(DiagramError::UnknownGroup(11))
    );
}

proptest! {
    #[test]
    fn prop_sort_is_idempotent(
        shuffled in Just(generate_hetu_catalog().points().to_vec()).prop_shuffle()
    ) {
        let first = sort_by_group_sequence(&shuffled, &ODD_SEQUENCE).unwrap();
        let sorted: Vec<HeTuPoint> = first.iter().map(|&i| shuffled[i].clone()).collect();
        let second = sort_by_group_sequence(&sorted, &ODD_SEQUENCE).unwrap();
        prop_assert_eq!(second, (0..sorted.len()).collect::<Vec<_>>());
    }

    #[test]
    fn prop_sort_ignores_input_order(
        shuffled in Just(generate_hetu_catalog().points().to_vec()).prop_shuffle()
    ) {
        let catalog = generate_hetu_catalog();
        let canonical = sort_by_group_sequence(catalog.points(), &EVEN_SEQUENCE).unwrap();
        let order = sort_by_group_sequence(&shuffled, &EVEN_SEQUENCE).unwrap();
        prop_assert_eq!(ids(&shuffled, &order), ids(catalog.points(), &canonical));
    }
}
