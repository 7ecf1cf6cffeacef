//! Occupancy index: coordinate → occupants, with stable entity handles.
//!
//! [`Grid`] is an arena of entities indexed by coordinate. Each placed
//! entity gets an [`EntityId`] that stays valid until the entity is
//! removed; slots are never recycled, so a stale handle can be detected
//! instead of silently aliasing a newer entity.
//!
//! Ground markers are not stored as entities. The grid keeps one
//! `explored` flag per cell instead.

use crate::error::SpaceError;
use crate::grid2d;
use crate::space::Space;
use crate::square8::Square8;
use rand::Rng;
use roomba_core::{AgentId, Coord, EntityId, EntityKind};
use smallvec::SmallVec;

/// A placed entity: what it is and where it stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Entity {
    /// Entity kind.
    pub kind: EntityKind,
    /// Current cell.
    pub coord: Coord,
}

/// The authoritative occupancy map of the simulation.
#[derive(Debug, Clone)]
pub struct Grid {
    space: Square8,
    entities: Vec<Option<Entity>>,
    cells: Vec<SmallVec<[EntityId; 4]>>,
    explored: Vec<bool>,
    explored_count: usize,
}

impl Grid {
    /// Create an empty grid over `space`.
    pub fn new(space: Square8) -> Self {
        let n = space.cell_count();
        Self {
            space,
            entities: Vec::new(),
            cells: vec![SmallVec::new(); n],
            explored: vec![false; n],
            explored_count: 0,
        }
    }

    /// The underlying topology.
    pub fn space(&self) -> &Square8 {
        &self.space
    }

    fn rank(&self, coord: Coord) -> Result<usize, SpaceError> {
        grid2d::check_2d_bounds(coord, self.space.width(), self.space.height())
    }

    // ── Mutation ────────────────────────────────────────────────

    /// Place a new entity at `coord` and return its handle.
    pub fn place(&mut self, kind: EntityKind, coord: Coord) -> Result<EntityId, SpaceError> {
        let rank = self.rank(coord)?;
        let id = EntityId(self.entities.len() as u32);
        self.entities.push(Some(Entity { kind, coord }));
        self.cells[rank].push(id);
        Ok(id)
    }

    /// Remove an entity permanently and return what it was.
    pub fn remove_entity(&mut self, id: EntityId) -> Result<Entity, SpaceError> {
        let entity = self
            .entities
            .get_mut(id.index())
            .and_then(Option::take)
            .ok_or(SpaceError::UnknownEntity { id })?;
        let rank = self.rank(entity.coord)?;
        self.cells[rank].retain(|e| *e != id);
        Ok(entity)
    }

    /// Relocate an entity to `to`.
    pub fn move_entity(&mut self, id: EntityId, to: Coord) -> Result<(), SpaceError> {
        let to_rank = self.rank(to)?;
        let from = self.entity(id).ok_or(SpaceError::UnknownEntity { id })?.coord;
        let from_rank = self.rank(from)?;
        self.cells[from_rank].retain(|e| *e != id);
        self.cells[to_rank].push(id);
        if let Some(Some(entity)) = self.entities.get_mut(id.index()) {
            entity.coord = to;
        }
        Ok(())
    }

    /// Set the explored flag of a cell. Returns `true` the first time.
    pub fn mark_explored(&mut self, coord: Coord) -> bool {
        match self.space.canonical_rank(coord) {
            Some(rank) if !self.explored[rank] => {
                self.explored[rank] = true;
                self.explored_count += 1;
                true
            }
            _ => false,
        }
    }

    // ── Queries ─────────────────────────────────────────────────

    /// Look up a live entity.
    pub fn entity(&self, id: EntityId) -> Option<&Entity> {
        self.entities.get(id.index()).and_then(Option::as_ref)
    }

    /// All live entities in handle order.
    pub fn entities(&self) -> impl Iterator<Item = (EntityId, &Entity)> + '_ {
        self.entities
            .iter()
            .enumerate()
            .filter_map(|(i, e)| e.as_ref().map(|e| (EntityId(i as u32), e)))
    }

    /// Occupants of a cell in placement order. Empty when out of bounds.
    pub fn occupants_at(&self, coord: Coord) -> impl Iterator<Item = (EntityId, EntityKind)> + '_ {
        let slot = self
            .space
            .canonical_rank(coord)
            .map(|rank| self.cells[rank].as_slice())
            .unwrap_or(&[]);
        slot.iter().filter_map(move |id| self.entity(*id).map(|e| (*id, e.kind)))
    }

    /// In-bounds Moore neighbours of a cell.
    pub fn neighbours(&self, coord: Coord) -> SmallVec<[Coord; 8]> {
        self.space.neighbours(coord)
    }

    /// Whether the cell holds an obstacle. Out-of-bounds cells count as blocked.
    pub fn has_obstacle(&self, coord: Coord) -> bool {
        !self.space.contains(coord) || self.occupants_at(coord).any(|(_, k)| k.is_blocking())
    }

    /// Handle of the trash lying on a cell, if any.
    pub fn trash_at(&self, coord: Coord) -> Option<EntityId> {
        self.occupants_at(coord)
            .find(|(_, k)| *k == EntityKind::Trash)
            .map(|(id, _)| id)
    }

    /// Whether a charging station occupies the cell.
    pub fn has_station(&self, coord: Coord) -> bool {
        self.occupants_at(coord).any(|(_, k)| k == EntityKind::Station)
    }

    /// Roombas standing on a cell.
    pub fn roombas_at(&self, coord: Coord) -> impl Iterator<Item = AgentId> + '_ {
        self.occupants_at(coord).filter_map(|(_, k)| k.agent())
    }

    /// Whether the cell has no occupants at all.
    pub fn is_empty_cell(&self, coord: Coord) -> bool {
        self.occupants_at(coord).next().is_none()
    }

    /// Cells with no occupants, in canonical order.
    pub fn empty_cells(&self) -> Vec<Coord> {
        self.space
            .canonical_ordering()
            .into_iter()
            .zip(&self.cells)
            .filter(|(_, slot)| slot.is_empty())
            .map(|(c, _)| c)
            .collect()
    }

    /// Sample `k` distinct empty cells uniformly at random.
    pub fn sample_random_empty<R: Rng + ?Sized>(
        &self,
        k: usize,
        rng: &mut R,
    ) -> Result<Vec<Coord>, SpaceError> {
        let empties = self.empty_cells();
        if k > empties.len() {
            return Err(SpaceError::NotEnoughEmptyCells {
                requested: k,
                available: empties.len(),
            });
        }
        Ok(rand::seq::index::sample(rng, empties.len(), k)
            .into_iter()
            .map(|i| empties[i])
            .collect())
    }

    /// Number of live entities of the given kind.
    pub fn count(&self, kind: EntityKind) -> usize {
        self.entities().filter(|(_, e)| e.kind == kind).count()
    }

    /// Number of trash entities still on the map.
    pub fn trash_count(&self) -> usize {
        self.count(EntityKind::Trash)
    }

    /// Whether a cell has been explored by any roomba.
    pub fn is_explored(&self, coord: Coord) -> bool {
        self.space
            .canonical_rank(coord)
            .is_some_and(|rank| self.explored[rank])
    }

    /// Number of explored cells. Never decreases.
    pub fn explored_count(&self) -> usize {
        self.explored_count
    }
}
