//! State hashing for determinism checks.
//!
//! FNV-1a over every agent and every live entity, in a fixed order. Two
//! simulations with equal hashes are, for all practical purposes, in the
//! same state. Not cryptographically secure.

use roomba_agent::Roster;
use roomba_core::{Coord, EntityKind};
use roomba_space::Grid;

/// FNV-1a offset basis for 64-bit.
const FNV_OFFSET: u64 = 0xcbf29ce484222325;
/// FNV-1a prime for 64-bit.
const FNV_PRIME: u64 = 0x00000100000001B3;

#[inline]
fn fnv1a_bytes(mut hash: u64, bytes: &[u8]) -> u64 {
    for &b in bytes {
        hash = (hash ^ b as u64).wrapping_mul(FNV_PRIME);
    }
    hash
}

#[inline]
fn fnv1a_u32(hash: u64, v: u32) -> u64 {
    fnv1a_bytes(hash, &v.to_le_bytes())
}

#[inline]
fn fnv1a_u64(hash: u64, v: u64) -> u64 {
    fnv1a_bytes(hash, &v.to_le_bytes())
}

#[inline]
fn fnv1a_coord(hash: u64, c: Coord) -> u64 {
    fnv1a_u32(fnv1a_u32(hash, c.x as u32), c.y as u32)
}

fn kind_tag(kind: EntityKind) -> u32 {
    match kind {
        EntityKind::Roomba(_) => 0,
        EntityKind::Trash => 1,
        EntityKind::Station => 2,
        EntityKind::Obstacle => 3,
    }
}

/// Hash the tick counter, every agent and every live entity.
pub fn state_hash(tick: u64, grid: &Grid, roster: &Roster) -> u64 {
    let mut hash = fnv1a_u64(FNV_OFFSET, tick);

    for r in roster.iter() {
        hash = fnv1a_u32(hash, r.id().0);
        hash = fnv1a_coord(hash, r.coord());
        hash = fnv1a_u32(hash, r.battery());
        hash = fnv1a_bytes(hash, &[r.state().tag(), r.is_active() as u8]);
        hash = fnv1a_u64(hash, r.steps());
        hash = fnv1a_u64(hash, r.cleaned());
        hash = fnv1a_u64(hash, r.recharges());
        hash = fnv1a_u64(hash, r.visited().len() as u64);
    }

    for (id, e) in grid.entities() {
        hash = fnv1a_u32(hash, id.0);
        hash = fnv1a_u32(hash, kind_tag(e.kind));
        hash = fnv1a_coord(hash, e.coord);
    }
    fnv1a_u64(hash, grid.explored_count() as u64)
}
