//! Simulation configuration, validation, and error types.
//!
//! [`SimConfig`] describes a randomly populated world.
//! [`validate()`](SimConfig::validate) rejects every structurally
//! impossible request up front; anything that depends on the random draw
//! (running out of empty cells) is reported by the constructor instead.

use std::error::Error;
use std::fmt;

use roomba_agent::{AgentParams, Variant};
use roomba_core::Coord;
use roomba_space::SpaceError;

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected while building a [`Simulation`](crate::Simulation).
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Width or height is zero.
    InvalidDimensions {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
    },
    /// A walled grid needs at least one inner cell.
    GridTooSmall {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
    },
    /// A density rate is NaN, infinite, or outside `[0, 1]`.
    InvalidRate {
        /// Which rate.
        name: &'static str,
        /// The invalid value.
        value: f64,
    },
    /// `agent_count` is zero.
    NoAgents,
    /// The variant cannot host this many agents.
    TooManyAgents {
        /// Configured variant.
        variant: Variant,
        /// Requested agent count.
        requested: u32,
    },
    /// Population asked for more cells than were empty.
    NotEnoughEmptyCells {
        /// Cells requested.
        requested: usize,
        /// Cells available at that stage.
        available: usize,
    },
    /// A fixed start cell lies outside the grid.
    StartOutOfBounds {
        /// The offending cell.
        start: Coord,
    },
    /// A fixed start cell is already taken by a wall or another entity.
    StartOccupied {
        /// The offending cell.
        start: Coord,
    },
    /// Any other space construction or placement failure.
    Space(SpaceError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { width, height } => {
                write!(f, "grid dimensions must be positive, got {width}x{height}")
            }
            Self::GridTooSmall { width, height } => {
                write!(f, "walled grid {width}x{height} has no inner cells")
            }
            Self::InvalidRate { name, value } => {
                write!(f, "{name} must be finite and within [0, 1], got {value}")
            }
            Self::NoAgents => write!(f, "agent_count must be at least 1"),
            Self::TooManyAgents { variant, requested } => {
                write!(f, "{variant} variant cannot host {requested} agents")
            }
            Self::NotEnoughEmptyCells {
                requested,
                available,
            } => write!(
                f,
                "requested {requested} empty cells but only {available} are available"
            ),
            Self::StartOutOfBounds { start } => write!(f, "start {start} is outside the grid"),
            Self::StartOccupied { start } => write!(f, "start {start} is not an empty cell"),
            Self::Space(e) => write!(f, "space: {e}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Space(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SpaceError> for ConfigError {
    fn from(e: SpaceError) -> Self {
        match e {
            SpaceError::NotEnoughEmptyCells {
                requested,
                available,
            } => Self::NotEnoughEmptyCells {
                requested,
                available,
            },
            other => Self::Space(other),
        }
    }
}

// ── SimConfig ──────────────────────────────────────────────────────

/// Parameters of a randomly populated simulation.
#[derive(Clone, Debug, PartialEq)]
pub struct SimConfig {
    /// Grid width in cells.
    pub width: u32,
    /// Grid height in cells.
    pub height: u32,
    /// Fraction of inner cells turned into obstacles.
    pub obstacle_rate: f64,
    /// Fraction of inner cells seeded with trash.
    pub trash_rate: f64,
    /// Number of roombas.
    pub agent_count: u32,
    /// RNG seed. Same seed, same run.
    pub seed: u64,
    /// Tick budget. The run stops once this many ticks have elapsed.
    pub max_ticks: u64,
    /// Controller rule set.
    pub variant: Variant,
    /// Surround the grid with obstacles.
    pub walled: bool,
    /// Fixed start for the single-agent variant. Default `(1, 1)`.
    pub start: Option<Coord>,
    /// Agent tunables.
    pub params: AgentParams,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self::single_agent()
    }
}

impl SimConfig {
    /// One roomba on an 8x8 walled grid.
    pub fn single_agent() -> Self {
        Self {
            width: 8,
            height: 8,
            obstacle_rate: 0.1,
            trash_rate: 0.2,
            agent_count: 1,
            seed: 42,
            max_ticks: 1000,
            variant: Variant::Single,
            walled: true,
            start: None,
            params: AgentParams::single(),
        }
    }

    /// `agent_count` roombas sharing discovered stations.
    pub fn multi_agent(agent_count: u32) -> Self {
        Self {
            agent_count,
            variant: Variant::Multi,
            params: AgentParams::multi(),
            ..Self::single_agent()
        }
    }

    /// Cells that density rates apply to.
    pub fn inner_cells(&self) -> usize {
        let (w, h) = (self.width as usize, self.height as usize);
        if self.walled {
            w.saturating_sub(2) * h.saturating_sub(2)
        } else {
            w * h
        }
    }

    /// Number of obstacles population will place.
    pub fn obstacle_count(&self) -> usize {
        (self.obstacle_rate * self.inner_cells() as f64).floor() as usize
    }

    /// Number of trash entities population will place.
    pub fn trash_count(&self) -> usize {
        (self.trash_rate * self.inner_cells() as f64).floor() as usize
    }

    /// Start cell of the single agent.
    pub fn single_start(&self) -> Coord {
        self.start.unwrap_or(Coord::new(1, 1))
    }

    /// Check structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if self.walled && (self.width < 3 || self.height < 3) {
            return Err(ConfigError::GridTooSmall {
                width: self.width,
                height: self.height,
            });
        }
        for (name, value) in [
            ("obstacle_rate", self.obstacle_rate),
            ("trash_rate", self.trash_rate),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::InvalidRate { name, value });
            }
        }
        if self.agent_count == 0 {
            return Err(ConfigError::NoAgents);
        }
        if self.variant == Variant::Single && self.agent_count > 1 {
            return Err(ConfigError::TooManyAgents {
                variant: self.variant,
                requested: self.agent_count,
            });
        }
        if self.variant == Variant::Single {
            let start = self.single_start();
            let in_bounds = start.x >= 0
                && start.y >= 0
                && (start.x as i64) < self.width as i64
                && (start.y as i64) < self.height as i64;
            if !in_bounds {
                return Err(ConfigError::StartOutOfBounds { start });
            }
            let on_wall = start.x == 0
                || start.y == 0
                || start.x as i64 == self.width as i64 - 1
                || start.y as i64 == self.height as i64 - 1;
            if self.walled && on_wall {
                return Err(ConfigError::StartOccupied { start });
            }
        }
        let needed = self.agent_count as usize + self.obstacle_count() + self.trash_count();
        if needed > self.inner_cells() {
            return Err(ConfigError::NotEnoughEmptyCells {
                requested: needed,
                available: self.inner_cells(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        assert_eq!(SimConfig::default().validate(), Ok(()));
        assert_eq!(SimConfig::multi_agent(4).validate(), Ok(()));
    }

    #[test]
    fn counts_use_inner_cells() {
        let c = SimConfig::single_agent();
        assert_eq!(c.inner_cells(), 36);
        assert_eq!(c.obstacle_count(), 3);
        assert_eq!(c.trash_count(), 7);
        let open = SimConfig {
            walled: false,
            ..c
        };
        assert_eq!(open.inner_cells(), 64);
    }

    #[test]
    fn rejects_zero_dimensions() {
        let c = SimConfig {
            width: 0,
            ..SimConfig::default()
        };
        assert!(matches!(c.validate(), Err(ConfigError::InvalidDimensions { .. })));
    }

    #[test]
    fn rejects_tiny_walled_grid() {
        let c = SimConfig {
            width: 2,
            ..SimConfig::default()
        };
        assert!(matches!(c.validate(), Err(ConfigError::GridTooSmall { .. })));
    }

    #[test]
    fn rejects_bad_rates() {
        for bad in [f64::NAN, -0.1, 1.5, f64::INFINITY] {
            let c = SimConfig {
                trash_rate: bad,
                ..SimConfig::default()
            };
            assert!(matches!(
                c.validate(),
                Err(ConfigError::InvalidRate { name: "trash_rate", .. })
            ));
        }
    }

    #[test]
    fn rejects_agent_counts() {
        let none = SimConfig {
            agent_count: 0,
            ..SimConfig::default()
        };
        assert_eq!(none.validate(), Err(ConfigError::NoAgents));
        let many = SimConfig {
            agent_count: 2,
            ..SimConfig::default()
        };
        assert!(matches!(many.validate(), Err(ConfigError::TooManyAgents { .. })));
    }

    #[test]
    fn rejects_bad_start() {
        let outside = SimConfig {
            start: Some(Coord::new(8, 1)),
            ..SimConfig::default()
        };
        assert!(matches!(
            outside.validate(),
            Err(ConfigError::StartOutOfBounds { .. })
        ));
        let wall = SimConfig {
            start: Some(Coord::new(0, 3)),
            ..SimConfig::default()
        };
        assert!(matches!(wall.validate(), Err(ConfigError::StartOccupied { .. })));
    }

    #[test]
    fn rejects_overfull_grid() {
        let c = SimConfig {
            obstacle_rate: 0.6,
            trash_rate: 0.6,
            ..SimConfig::default()
        };
        assert!(matches!(
            c.validate(),
            Err(ConfigError::NotEnoughEmptyCells { .. })
        ));
    }

    #[test]
    fn space_errors_convert() {
        let e: ConfigError = SpaceError::NotEnoughEmptyCells {
            requested: 3,
            available: 1,
        }
        .into();
        assert_eq!(
            e,
            ConfigError::NotEnoughEmptyCells {
                requested: 3,
                available: 1
            }
        );
        let e: ConfigError = SpaceError::EmptySpace.into();
        assert!(e.source().is_some());
    }
}
