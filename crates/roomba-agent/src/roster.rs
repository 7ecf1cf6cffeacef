//! Agent storage with split-borrow access.
//!
//! During a tick one agent is mutated while it reads every other agent.
//! [`Roster::split_for`] hands out the active agent mutably and the rest
//! as a read-only [`Peers`] view.

use crate::roomba::Roomba;
use roomba_core::AgentId;

/// Every roomba of a simulation, indexed by [`AgentId`].
#[derive(Clone, Debug, Default)]
pub struct Roster {
    agents: Vec<Roomba>,
}

impl Roster {
    /// Empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Id the next pushed agent will receive.
    pub fn next_id(&self) -> AgentId {
        AgentId(self.agents.len() as u32)
    }

    /// Append an agent. Its id must equal [`next_id`](Self::next_id).
    pub fn push(&mut self, roomba: Roomba) {
        debug_assert_eq!(roomba.id(), self.next_id());
        self.agents.push(roomba);
    }

    /// Number of agents, including deactivated ones.
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    /// Whether the roster is empty.
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    /// Look up an agent.
    pub fn get(&self, id: AgentId) -> Option<&Roomba> {
        self.agents.get(id.index())
    }

    /// Look up an agent mutably.
    pub fn get_mut(&mut self, id: AgentId) -> Option<&mut Roomba> {
        self.agents.get_mut(id.index())
    }

    /// All agents in id order.
    pub fn iter(&self) -> impl Iterator<Item = &Roomba> + '_ {
        self.agents.iter()
    }

    /// Ids of agents that are still active, in id order.
    pub fn active_ids(&self) -> Vec<AgentId> {
        self.agents
            .iter()
            .filter(|r| r.is_active())
            .map(Roomba::id)
            .collect()
    }

    /// Borrow one agent mutably and all others immutably.
    pub fn split_for(&mut self, id: AgentId) -> Option<(&mut Roomba, Peers<'_>)> {
        let index = id.index();
        if index >= self.agents.len() {
            return None;
        }
        let (before, rest) = self.agents.split_at_mut(index);
        let (me, after) = rest.split_first_mut()?;
        Some((
            me,
            Peers {
                before,
                after,
                split: index,
            },
        ))
    }
}

/// Read-only view of every agent except the one currently stepping.
#[derive(Clone, Copy, Debug)]
pub struct Peers<'a> {
    before: &'a [Roomba],
    after: &'a [Roomba],
    split: usize,
}

impl<'a> Peers<'a> {
    /// A view with no peers at all.
    pub fn none() -> Self {
        Self {
            before: &[],
            after: &[],
            split: 0,
        }
    }

    /// Look up a peer. Returns `None` for the stepping agent itself.
    pub fn get(&self, id: AgentId) -> Option<&'a Roomba> {
        let index = id.index();
        if index < self.split {
            self.before.get(index)
        } else if index > self.split {
            self.after.get(index - self.split - 1)
        } else {
            None
        }
    }

    /// All peers in id order.
    pub fn iter(&self) -> impl Iterator<Item = &'a Roomba> + 'a {
        self.before.iter().chain(self.after.iter())
    }
}
