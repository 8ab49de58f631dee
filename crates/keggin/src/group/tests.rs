use super::*;
use crate::keggin::{keggin_generators, Keggin, KEGGIN_GROUP_ORDER};
use proptest::prelude::*;

fn keggin() -> Keggin {
    Keggin::new().expect("keggin group")
}

#[test]
fn keggin_generators_close_to_24_rotations() {
    let k = keggin();
    assert_eq!(k.group.order(), KEGGIN_GROUP_ORDER);
    assert_eq!(k.group.degree(), 12);
    assert!(k.group.identity().is_identity());
}

#[test]
fn group_is_closed_and_has_inverses() {
    let k = keggin();
    assert!(k.group.is_closed());
    for g in k.group.iter() {
        assert!(k.group.contains(&g.inverse()), "missing inverse of {g}");
    }
}

#[test]
fn element_orders_match_cube_rotations() {
    // 1 identity, 9 of order 2 (3 face half-turns + 6 edge half-turns),
    // 8 of order 3, 6 of order 4.
    let k = keggin();
    let mut counts = [0usize; 5];
    for g in k.group.iter() {
        counts[g.order()] += 1;
    }
    assert_eq!(counts, [0, 1, 9, 8, 6]);
}

#[test]
fn all_vertices_form_one_orbit() {
    let k = keggin();
    let orbits = k.group.vertex_orbits();
    assert_eq!(orbits.len(), 1);
    assert_eq!(orbits[0], VertexSet::full(12));
}

#[test]
fn build_rejects_wrong_expected_order() {
    let k = keggin();
    let gens = keggin_generators(&k.table).unwrap();
    assert_eq!(
        RotationGroup::build(&gens, 48).unwrap_err(),
        GroupError::UnexpectedOrder {
            expected: 48,
            found: 24
        }
    );
    // A single quarter turn generates only the cyclic group of order 4.
    assert_eq!(
        RotationGroup::build(&gens[..1], KEGGIN_GROUP_ORDER).unwrap_err(),
        GroupError::UnexpectedOrder {
            expected: 24,
            found: 4
        }
    );
}

#[test]
fn generate_rejects_empty_and_mismatched_generators() {
    assert_eq!(
        RotationGroup::generate(&[]).unwrap_err(),
        GroupError::NoGenerators
    );
    let gens = [Permutation::identity(3), Permutation::identity(4)];
    assert_eq!(
        RotationGroup::generate(&gens).unwrap_err(),
        GroupError::SizeMismatch {
            expected: 3,
            found: 4
        }
    );
}

#[test]
fn generate_rejects_degree_beyond_subset_capacity() {
    let cycle: Vec<usize> = (1..20).chain([0]).collect();
    let g = Permutation::from_map(cycle).unwrap();
    assert_eq!(
        RotationGroup::generate(&[g]).unwrap_err(),
        GroupError::TooManyPoints {
            degree: 20,
            max: VertexSet::CAPACITY
        }
    );
    let fits = Permutation::from_map((1..16).chain([0]).collect()).unwrap();
    let c16 = RotationGroup::generate(&[fits]).unwrap();
    assert_eq!(c16.order(), 16);
    assert_eq!(c16.vertex_orbits().len(), 1);
}

#[test]
fn generate_symmetric_group_from_transposition_and_cycle() {
    let t = Permutation::from_map(vec![1, 0, 2, 3]).unwrap();
    let c = Permutation::from_map(vec![1, 2, 3, 0]).unwrap();
    let s4 = RotationGroup::generate(&[t, c]).unwrap();
    assert_eq!(s4.order(), 24);
    assert!(s4.is_closed());
}

#[test]
fn orbit_of_set_is_sorted_and_deduplicated() {
    let k = keggin();
    let everything = VertexSet::full(12);
    assert_eq!(k.group.orbit_of_set(everything), vec![everything]);
    let pair: VertexSet = [VertexId(0), VertexId(11)].into_iter().collect();
    let orbit = k.group.orbit_of_set(pair);
    assert!(orbit.windows(2).all(|w| w[0] < w[1]));
    assert!(orbit.contains(&pair));
}

proptest! {
    #[test]
    fn products_of_elements_stay_in_group(i in 0usize..24, j in 0usize..24) {
        let k = keggin();
        let g = &k.group.elements()[i];
        let h = &k.group.elements()[j];
        prop_assert!(k.group.contains(&g.compose(h)));
        prop_assert!(k.group.index_of(&h.compose(g)).is_some());
    }
}
