//! Multi-agent coordination: station occupancy, discovery and peers.
//!
//! Occupancy is never stored. A station cell is occupied iff some *other*
//! active roomba stands on it in the [`Recharging`](RoombaState::Recharging)
//! state, and every query recomputes that from the grid and the peers.

use crate::roomba::Roomba;
use crate::roster::Peers;
use crate::state::RoombaState;
use roomba_core::{AgentId, Coord};
use roomba_space::{Grid, Space};

/// Whether another active roomba is recharging on `cell`.
pub fn station_occupied(grid: &Grid, peers: &Peers<'_>, cell: Coord) -> bool {
    grid.roombas_at(cell)
        .filter_map(|id| peers.get(id))
        .any(|r| r.is_active() && r.state() == RoombaState::Recharging)
}

/// First neighbouring cell holding a station, in neighbour order.
pub fn station_in_neighbourhood(grid: &Grid, around: Coord) -> Option<Coord> {
    grid.neighbours(around)
        .into_iter()
        .find(|c| grid.has_station(*c))
}

/// Record every station among `cells`. Returns how many were new.
pub fn discover_stations(roomba: &mut Roomba, grid: &Grid, cells: &[Coord]) -> usize {
    cells
        .iter()
        .filter(|c| grid.has_station(**c))
        .filter(|c| roomba.remember_station(**c))
        .count()
}

/// First active peer standing in the Moore neighbourhood of `around`.
///
/// Neighbours are scanned in neighbour order and occupants in placement
/// order, so the choice is deterministic.
pub fn find_peer(grid: &Grid, peers: &Peers<'_>, around: Coord) -> Option<AgentId> {
    grid.neighbours(around).into_iter().find_map(|c| {
        grid.roombas_at(c)
            .find(|id| peers.get(*id).is_some_and(Roomba::is_active))
    })
}

/// The nearest of `stations` by the space's own distance (Chebyshev on a
/// Moore lattice).
///
/// Ties go to the earliest candidate. Returns `None` for an empty input.
pub fn nearest_station<S, I>(space: &S, from: Coord, stations: I) -> Option<(Coord, u32)>
where
    S: Space + ?Sized,
    I: IntoIterator<Item = Coord>,
{
    let mut best: Option<(Coord, u32)> = None;
    for s in stations {
        let d = space.distance(from, s);
        match best {
            Some((_, bd)) if d >= bd => {}
            _ => best = Some((s, d)),
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::AgentParams;
    use crate::roster::Roster;
    use roomba_core::EntityKind;
    use roomba_test_utils::open_grid;

    fn setup(positions: &[Coord]) -> (Grid, Roster) {
        let p = AgentParams::multi();
        let mut grid = open_grid(6, 6);
        let mut roster = Roster::new();
        for &c in positions {
            let id = roster.next_id();
            let e = grid.place(EntityKind::Roomba(id), c).unwrap();
            roster.push(Roomba::new(id, e, c, &p));
        }
        (grid, roster)
    }

    #[test]
    fn occupied_only_when_peer_recharging() {
        let s = Coord::new(2, 2);
        let (mut grid, mut roster) = setup(&[Coord::new(1, 1), s]);
        grid.place(EntityKind::Station, s).unwrap();
        {
            let (_, peers) = roster.split_for(AgentId(0)).unwrap();
            assert!(!station_occupied(&grid, &peers, s));
        }
        roster.get_mut(AgentId(1)).unwrap().state = RoombaState::Recharging;
        let (_, peers) = roster.split_for(AgentId(0)).unwrap();
        assert!(station_occupied(&grid, &peers, s));
    }

    #[test]
    fn own_recharging_does_not_occupy() {
        let s = Coord::new(2, 2);
        let (mut grid, mut roster) = setup(&[s]);
        grid.place(EntityKind::Station, s).unwrap();
        roster.get_mut(AgentId(0)).unwrap().state = RoombaState::Recharging;
        let (_, peers) = roster.split_for(AgentId(0)).unwrap();
        assert!(!station_occupied(&grid, &peers, s));
    }

    #[test]
    fn inactive_peer_does_not_occupy() {
        let s = Coord::new(2, 2);
        let (mut grid, mut roster) = setup(&[Coord::new(1, 1), s]);
        grid.place(EntityKind::Station, s).unwrap();
        let other = roster.get_mut(AgentId(1)).unwrap();
        other.state = RoombaState::Recharging;
        other.active = false;
        let (_, peers) = roster.split_for(AgentId(0)).unwrap();
        assert!(!station_occupied(&grid, &peers, s));
    }

    #[test]
    fn finds_adjacent_peer_only() {
        let (grid, mut roster) = setup(&[Coord::new(1, 1), Coord::new(2, 2), Coord::new(5, 5)]);
        let (_, peers) = roster.split_for(AgentId(0)).unwrap();
        assert_eq!(find_peer(&grid, &peers, Coord::new(1, 1)), Some(AgentId(1)));
        let (_, peers) = roster.split_for(AgentId(2)).unwrap();
        assert_eq!(find_peer(&grid, &peers, Coord::new(5, 5)), None);
    }

    #[test]
    fn discovery_counts_new_stations() {
        let (mut grid, mut roster) = setup(&[Coord::new(1, 1)]);
        grid.place(EntityKind::Station, Coord::new(2, 1)).unwrap();
        let cells = grid.neighbours(Coord::new(1, 1));
        let me = roster.get_mut(AgentId(0)).unwrap();
        assert_eq!(discover_stations(me, &grid, &cells), 1);
        assert_eq!(discover_stations(me, &grid, &cells), 0);
        assert_eq!(
            station_in_neighbourhood(&grid, Coord::new(1, 1)),
            Some(Coord::new(2, 1))
        );
    }

    #[test]
    fn nearest_station_prefers_first_on_tie() {
        let grid = open_grid(6, 6);
        let space = grid.space();
        let from = Coord::new(0, 0);
        let got = nearest_station(space, from, [Coord::new(3, 0), Coord::new(0, 3), Coord::new(1, 1)]);
        assert_eq!(got, Some((Coord::new(1, 1), 1)));
        let tie = nearest_station(space, from, [Coord::new(2, 0), Coord::new(0, 2)]);
        assert_eq!(tie, Some((Coord::new(2, 0), 2)));
        assert_eq!(nearest_station(space, from, []), None);
        let diagonal = nearest_station(space, from, [Coord::new(4, 4), Coord::new(0, 5)]);
        assert_eq!(diagonal, Some((Coord::new(4, 4), 4)));
    }
}
