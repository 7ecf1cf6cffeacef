//! A* search over an 8-connected lattice.

use indexmap::IndexMap;
use roomba_core::Coord;
use roomba_space::Space;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Find a shortest path from `start` to `goal`.
///
/// Every move costs 1. The heuristic is the Manhattan distance to `goal`,
/// which overestimates diagonal moves, so the result is not always optimal
/// under Moore movement. Equal-`f` entries pop in insertion order.
///
/// The returned path excludes `start` and ends at `goal`. It is empty when
/// `start == goal` or when `goal` cannot be reached. Blocked cells are
/// never entered; `start` itself is never tested.
pub fn find_path<S, F>(space: &S, start: Coord, goal: Coord, is_blocked: F) -> Vec<Coord>
where
    S: Space + ?Sized,
    F: Fn(Coord) -> bool,
{
    if start == goal || !space.contains(goal) || is_blocked(goal) {
        return Vec::new();
    }

    let mut open = BinaryHeap::new();
    let mut cost: IndexMap<Coord, u32> = IndexMap::new();
    let mut parent: IndexMap<Coord, Coord> = IndexMap::new();
    let mut closed = vec![false; space.cell_count()];
    let mut seq: u64 = 0;

    cost.insert(start, 0);
    open.push(Reverse((0u32, seq, start)));

    while let Some(Reverse((_, _, current))) = open.pop() {
        let Some(rank) = space.canonical_rank(current) else {
            continue;
        };
        if closed[rank] {
            continue;
        }
        closed[rank] = true;
        if current == goal {
            break;
        }

        let g = cost.get(&current).copied().unwrap_or(u32::MAX);
        for next in space.neighbours(current) {
            if is_blocked(next) {
                continue;
            }
            let tentative = g.saturating_add(1);
            if tentative < cost.get(&next).copied().unwrap_or(u32::MAX) {
                cost.insert(next, tentative);
                parent.insert(next, current);
                seq += 1;
                let f = tentative.saturating_add(next.manhattan(goal));
                open.push(Reverse((f, seq, next)));
            }
        }
    }

    reconstruct(&parent, start, goal)
}

fn reconstruct(parent: &IndexMap<Coord, Coord>, start: Coord, goal: Coord) -> Vec<Coord> {
    if !parent.contains_key(&goal) {
        return Vec::new();
    }
    let mut path = vec![goal];
    let mut current = goal;
    while let Some(&prev) = parent.get(&current) {
        if prev == start {
            path.reverse();
            return path;
        }
        path.push(prev);
        current = prev;
    }
    // Parent chain did not lead back to start.
    Vec::new()
}
