use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::player::{Player, PlayerId, TacticalAssignment};
use crate::error::{Result, SimError};

/// Team-level tactical settings plus the per-player line-up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "TacticsRecord")]
pub struct TeamTactics {
    pressure: f32,
    long_balls: f32,
    assignments: HashMap<PlayerId, TacticalAssignment>,
}

#[derive(Debug, Clone, Deserialize)]
struct TacticsRecord {
    pressure: f32,
    long_balls: f32,
    #[serde(default)]
    assignments: HashMap<PlayerId, TacticalAssignment>,
}

impl TryFrom<TacticsRecord> for TeamTactics {
    type Error = SimError;

    fn try_from(record: TacticsRecord) -> Result<Self> {
        let mut tactics = Self::new(record.pressure, record.long_balls)?;
        tactics.assignments = record.assignments;
        Ok(tactics)
    }
}

fn check_unit(parameter: &'static str, value: f32) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(SimError::InvalidTactic { parameter, value })
    }
}

impl TeamTactics {
    pub fn new(pressure: f32, long_balls: f32) -> Result<Self> {
        check_unit("pressure", pressure)?;
        check_unit("long_balls", long_balls)?;
        Ok(Self { pressure, long_balls, assignments: HashMap::new() })
    }

    /// Neutral tactics: medium pressure, mixed passing.
    pub fn balanced() -> Self {
        Self { pressure: 0.5, long_balls: 0.5, assignments: HashMap::new() }
    }

    pub fn pressure(&self) -> f32 {
        self.pressure
    }

    pub fn long_balls(&self) -> f32 {
        self.long_balls
    }

    pub fn assign(&mut self, player: PlayerId, assignment: TacticalAssignment) {
        self.assignments.insert(player, assignment);
    }

    pub fn unassign(&mut self, player: PlayerId) -> Option<TacticalAssignment> {
        self.assignments.remove(&player)
    }

    pub fn assignment(&self, player: PlayerId) -> Option<&TacticalAssignment> {
        self.assignments.get(&player)
    }

    pub fn assigned_count(&self) -> usize {
        self.assignments.len()
    }
}

impl Default for TeamTactics {
    fn default() -> Self {
        Self::balanced()
    }
}

/// A roster together with its tactics. The engine only reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub name: String,
    pub players: Vec<Player>,
    #[serde(default)]
    pub tactics: TeamTactics,
}

impl Team {
    pub fn new(name: impl Into<String>, tactics: TeamTactics) -> Self {
        Self { name: name.into(), players: Vec::new(), tactics }
    }

    /// Add a player and line them up at `assignment`.
    pub fn with_player(mut self, player: Player, assignment: TacticalAssignment) -> Self {
        self.tactics.assign(player.id, assignment);
        self.players.push(player);
        self
    }

    /// Add a player to the roster without a tactical assignment (a reserve).
    pub fn with_reserve(mut self, player: Player) -> Self {
        self.players.push(player);
        self
    }

    /// Players that have a tactical assignment, in roster order.
    pub fn fielded(&self) -> impl Iterator<Item = (&Player, &TacticalAssignment)> + '_ {
        self.players
            .iter()
            .filter_map(|p| self.tactics.assignment(p.id).map(|a| (p, a)))
    }
}
