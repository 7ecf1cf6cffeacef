//! Benchmark profiles for the roomba simulation.
//!
//! - [`reference_profile`]: 32x32 walled grid, 8 agents
//! - [`stress_profile`]: 128x128 walled grid, 32 agents

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use roomba_engine::SimConfig;

/// 32x32 walled grid with 8 agents, 10% obstacles and 20% trash.
pub fn reference_profile(seed: u64) -> SimConfig {
    SimConfig {
        width: 32,
        height: 32,
        obstacle_rate: 0.1,
        trash_rate: 0.2,
        seed,
        max_ticks: 5_000,
        ..SimConfig::multi_agent(8)
    }
}

/// 128x128 walled grid with 32 agents. Same densities as
/// [`reference_profile`] at 16x the cell count.
pub fn stress_profile(seed: u64) -> SimConfig {
    SimConfig {
        width: 128,
        height: 128,
        agent_count: 32,
        max_ticks: 20_000,
        ..reference_profile(seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roomba_agent::Variant;

    #[test]
    fn profiles_validate() {
        assert_eq!(reference_profile(1).validate(), Ok(()));
        assert_eq!(stress_profile(1).validate(), Ok(()));
        assert_eq!(stress_profile(1).variant, Variant::Multi);
    }
}
