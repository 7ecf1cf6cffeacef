//! Breadth-first search for the nearest cell matching a predicate.

use crate::astar::find_path;
use roomba_core::Coord;
use roomba_space::Space;
use std::collections::VecDeque;

/// Path to the nearest reachable cell satisfying `predicate`.
///
/// Cells are expanded breadth-first from `start` in the space's neighbour
/// order, never entering blocked cells. The first dequeued cell for which
/// `predicate` holds becomes the goal, and the returned path is
/// [`find_path`] from `start` to it. Returns an empty path when no cell
/// matches, or when `start` itself matches.
pub fn nearest_matching<S, B, P>(space: &S, start: Coord, is_blocked: B, predicate: P) -> Vec<Coord>
where
    S: Space + ?Sized,
    B: Fn(Coord) -> bool,
    P: Fn(Coord) -> bool,
{
    let Some(start_rank) = space.canonical_rank(start) else {
        return Vec::new();
    };
    let mut seen = vec![false; space.cell_count()];
    let mut queue = VecDeque::new();
    seen[start_rank] = true;
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        if predicate(current) && !is_blocked(current) {
            return find_path(space, start, current, &is_blocked);
        }
        for next in space.neighbours(current) {
            let Some(rank) = space.canonical_rank(next) else {
                continue;
            };
            if !seen[rank] && !is_blocked(next) {
                seen[rank] = true;
                queue.push_back(next);
            }
        }
    }
    Vec::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use roomba_core::EntityKind;
    use roomba_test_utils::open_grid;

    #[test]
    fn finds_closest_match() {
        let g = open_grid(10, 10);
        let targets = [Coord::new(9, 9), Coord::new(2, 0)];
        let path = nearest_matching(g.space(), Coord::new(0, 0), |_| false, |c| {
            targets.contains(&c)
        });
        assert_eq!(path.last(), Some(&Coord::new(2, 0)));
        assert_eq!(path.len(), 2);
    }

    #[test]
    fn no_match_gives_empty_path() {
        let g = open_grid(5, 5);
        assert!(nearest_matching(g.space(), Coord::new(0, 0), |_| false, |_| false).is_empty());
    }

    #[test]
    fn start_matching_gives_empty_path() {
        let g = open_grid(5, 5);
        assert!(nearest_matching(g.space(), Coord::new(2, 2), |_| false, |_| true).is_empty());
    }

    #[test]
    fn does_not_cross_obstacles() {
        let mut g = open_grid(7, 3);
        for y in 0..3 {
            g.place(EntityKind::Obstacle, Coord::new(3, y)).unwrap();
        }
        let path = nearest_matching(
            g.space(),
            Coord::new(0, 1),
            |c| g.has_obstacle(c),
            |c| c.x > 3,
        );
        assert!(path.is_empty());
    }

    #[test]
    fn skips_nearer_unreachable_match() {
        let mut g = open_grid(9, 9);
        // Wall off (1,1) entirely.
        for c in g.neighbours(Coord::new(1, 1)) {
            g.place(EntityKind::Obstacle, c).unwrap();
        }
        let targets = [Coord::new(1, 1), Coord::new(8, 8)];
        let path = nearest_matching(
            g.space(),
            Coord::new(4, 4),
            |c| g.has_obstacle(c),
            |c| targets.contains(&c),
        );
        assert_eq!(path.last(), Some(&Coord::new(8, 8)));
    }
}
