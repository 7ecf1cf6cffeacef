//! Random world population.
//!
//! Order matters for reproducibility: walls, then one roomba plus its
//! station per start cell, then obstacles, then trash. Each random batch
//! draws distinct cells from whatever is empty at that moment.

use crate::config::{ConfigError, SimConfig};
use rand::Rng;
use roomba_agent::{AgentParams, Roomba, Roster, Variant};
use roomba_core::{AgentId, Coord, EntityKind};
use roomba_space::{Grid, Space, Square8};

/// Build the grid and roster described by a validated config.
pub(crate) fn populate<R: Rng + ?Sized>(
    config: &SimConfig,
    rng: &mut R,
) -> Result<(Grid, Roster), ConfigError> {
    let space = Square8::new(config.width, config.height)?;
    let mut grid = Grid::new(space);

    if config.walled {
        place_walls(&mut grid)?;
    }

    let starts = match config.variant {
        Variant::Single => {
            let start = config.single_start();
            if !grid.is_empty_cell(start) {
                return Err(ConfigError::StartOccupied { start });
            }
            vec![start]
        }
        Variant::Multi => grid.sample_random_empty(config.agent_count as usize, rng)?,
    };

    let mut roster = Roster::new();
    for start in starts {
        grid.place(EntityKind::Station, start)?;
        spawn(&mut grid, &mut roster, start, &config.params)?;
    }

    place_random(&mut grid, EntityKind::Obstacle, config.obstacle_count(), rng)?;
    place_random(&mut grid, EntityKind::Trash, config.trash_count(), rng)?;
    Ok((grid, roster))
}

/// Fill the outer ring with obstacles.
pub(crate) fn place_walls(grid: &mut Grid) -> Result<(), ConfigError> {
    let border: Vec<Coord> = grid
        .space()
        .canonical_ordering()
        .into_iter()
        .filter(|c| grid.space().is_border(*c))
        .collect();
    for c in border {
        grid.place(EntityKind::Obstacle, c)?;
    }
    Ok(())
}

/// Put a new roomba on `start`, knowing a station there if one exists.
pub(crate) fn spawn(
    grid: &mut Grid,
    roster: &mut Roster,
    start: Coord,
    params: &AgentParams,
) -> Result<AgentId, ConfigError> {
    let id = roster.next_id();
    let entity = grid.place(EntityKind::Roomba(id), start)?;
    let mut roomba = Roomba::new(id, entity, start, params);
    if grid.has_station(start) {
        roomba.remember_station(start);
    }
    grid.mark_explored(start);
    roster.push(roomba);
    Ok(id)
}

fn place_random<R: Rng + ?Sized>(
    grid: &mut Grid,
    kind: EntityKind,
    count: usize,
    rng: &mut R,
) -> Result<(), ConfigError> {
    for c in grid.sample_random_empty(count, rng)? {
        grid.place(kind, c)?;
    }
    Ok(())
}
