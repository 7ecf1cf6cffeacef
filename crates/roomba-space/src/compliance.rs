//! Space trait compliance test helpers.
//!
//! These functions verify that a Space implementation satisfies the
//! invariants the pathfinder relies on.

use crate::space::Space;
use indexmap::IndexSet;

/// Assert that `distance(a, a) == 0` for all cells.
pub fn assert_distance_reflexive(space: &dyn Space) {
    for coord in space.canonical_ordering() {
        let d = space.distance(coord, coord);
        assert_eq!(d, 0, "distance({coord}, {coord}) = {d}, expected 0");
    }
}

/// Assert that `distance(a, b) == distance(b, a)` and the triangle
/// inequality hold for all cell pairs and triples.
pub fn assert_distance_metric(space: &dyn Space) {
    let cells = space.canonical_ordering();
    for a in &cells {
        for b in &cells {
            let dab = space.distance(*a, *b);
            assert_eq!(dab, space.distance(*b, *a), "asymmetric distance {a} {b}");
            for c in &cells {
                let dac = space.distance(*a, *c);
                let dbc = space.distance(*b, *c);
                assert!(
                    dac <= dab + dbc,
                    "triangle inequality violated: d({a},{c})={dac} > {dab} + {dbc}"
                );
            }
        }
    }
}

/// Assert that `b in neighbours(a)` implies `a in neighbours(b)`.
pub fn assert_neighbours_symmetric(space: &dyn Space) {
    for coord in space.canonical_ordering() {
        for nb in space.neighbours(coord) {
            assert!(
                space.neighbours(nb).contains(&coord),
                "neighbour symmetry violated: {nb} in N({coord}) but {coord} not in N({nb})"
            );
        }
    }
}

/// Assert that `canonical_ordering` returns exactly `cell_count` unique
/// coords whose ranks match their positions.
pub fn assert_canonical_ordering_complete(space: &dyn Space) {
    let ordering = space.canonical_ordering();
    assert_eq!(ordering.len(), space.cell_count());
    let unique: IndexSet<_> = ordering.iter().collect();
    assert_eq!(unique.len(), space.cell_count(), "canonical_ordering has duplicates");
    for (i, coord) in ordering.iter().enumerate() {
        assert_eq!(space.canonical_rank(*coord), Some(i));
        assert!(space.contains(*coord));
    }
}

/// Run all compliance checks on a space.
pub fn run_full_compliance(space: &dyn Space) {
    assert_distance_reflexive(space);
    assert_distance_metric(space);
    assert_neighbours_symmetric(space);
    assert_canonical_ordering_complete(space);
}
