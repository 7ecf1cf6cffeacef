//! Agent tunables and simulation variants.

use std::fmt;

/// Safety margin added to the station distance by the single-agent variant.
pub const SAFETY_MARGIN_SINGLE: u32 = 10;

/// Safety margin added to the station distance by the multi-agent variant.
pub const SAFETY_MARGIN_MULTI: u32 = 20;

/// Which rule set the controllers follow.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Variant {
    /// One roomba with one fixed station. No waiting, no peers.
    #[default]
    Single,
    /// Several roombas sharing discovered stations.
    Multi,
}

impl Variant {
    /// Whether the coordination protocol is active.
    pub fn is_multi(self) -> bool {
        matches!(self, Self::Multi)
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single => f.write_str("single"),
            Self::Multi => f.write_str("multi"),
        }
    }
}

/// Battery and protocol constants shared by every agent of a simulation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AgentParams {
    /// Controller rule set.
    pub variant: Variant,
    /// Full charge. Battery never exceeds this.
    pub max_battery: u32,
    /// Extra charge kept in reserve on top of the station distance.
    pub safety_margin: u32,
    /// Charge gained per recharging tick.
    pub recharge_rate: u32,
    /// Ticks before a roomba may exchange knowledge again.
    pub exchange_cooldown: u32,
    /// Charge spent per ordinary tick.
    pub drain_per_tick: u32,
}

impl AgentParams {
    /// Parameters of the single-agent variant.
    pub fn single() -> Self {
        Self {
            variant: Variant::Single,
            max_battery: 100,
            safety_margin: SAFETY_MARGIN_SINGLE,
            recharge_rate: 5,
            exchange_cooldown: 10,
            drain_per_tick: 1,
        }
    }

    /// Parameters of the multi-agent variant.
    pub fn multi() -> Self {
        Self {
            variant: Variant::Multi,
            safety_margin: SAFETY_MARGIN_MULTI,
            ..Self::single()
        }
    }

    /// Default parameters for `variant`.
    pub fn for_variant(variant: Variant) -> Self {
        match variant {
            Variant::Single => Self::single(),
            Variant::Multi => Self::multi(),
        }
    }
}

impl Default for AgentParams {
    fn default() -> Self {
        Self::single()
    }
}
