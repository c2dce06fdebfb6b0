//! Final score of a simulated match.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Home,
    Away,
}

impl Side {
    pub fn opponent(self) -> Self {
        match self {
            Side::Home => Side::Away,
            Side::Away => Side::Home,
        }
    }
}

/// Goals and shootout penalties for both sides.
///
/// Penalties are zero unless the match was level after regulation (and extra
/// time, if played) and the rules called for a shootout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MatchResult {
    pub home_goals: u32,
    pub away_goals: u32,
    #[serde(default)]
    pub home_penalties: u32,
    #[serde(default)]
    pub away_penalties: u32,
    pub played: bool,
}

impl MatchResult {
    /// Placeholder for a fixture that has not been played yet.
    pub fn unplayed() -> Self {
        Self::default()
    }

    pub fn new(home_goals: u32, away_goals: u32) -> Self {
        Self { home_goals, away_goals, home_penalties: 0, away_penalties: 0, played: true }
    }

    pub fn with_penalties(
        home_goals: u32,
        away_goals: u32,
        home_penalties: u32,
        away_penalties: u32,
    ) -> Self {
        Self { home_goals, away_goals, home_penalties, away_penalties, played: true }
    }

    pub fn home_won(&self) -> bool {
        self.winner() == Some(Side::Home)
    }

    pub fn away_won(&self) -> bool {
        self.winner() == Some(Side::Away)
    }

    /// Goals decide first; penalties only break a level scoreline.
    pub fn winner(&self) -> Option<Side> {
        if !self.played {
            return None;
        }
        let (home, away) = if self.home_goals != self.away_goals {
            (self.home_goals, self.away_goals)
        } else {
            (self.home_penalties, self.away_penalties)
        };
        match home.cmp(&away) {
            std::cmp::Ordering::Greater => Some(Side::Home),
            std::cmp::Ordering::Less => Some(Side::Away),
            std::cmp::Ordering::Equal => None,
        }
    }

    pub fn is_draw(&self) -> bool {
        self.played && self.winner().is_none()
    }

    pub fn went_to_penalties(&self) -> bool {
        self.home_penalties > 0 || self.away_penalties > 0
    }

    pub fn goals(&self, side: Side) -> u32 {
        match side {
            Side::Home => self.home_goals,
            Side::Away => self.away_goals,
        }
    }

    pub fn total_goals(&self) -> u32 {
        self.home_goals + self.away_goals
    }

    /// Home goals minus away goals.
    pub fn goal_difference(&self) -> i32 {
        self.home_goals as i32 - self.away_goals as i32
    }
}
