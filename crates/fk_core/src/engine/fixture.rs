use rand::Rng;
use serde::{Deserialize, Serialize};

use super::outcome::MatchSimulator;
use crate::models::{MatchResult, MatchRules, Side, Team};

/// A scheduled match: two teams, the rules it is played under and, once
/// played, its result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fixture {
    pub home: Team,
    pub away: Team,
    #[serde(default)]
    pub rules: MatchRules,
    #[serde(default)]
    result: MatchResult,
}

impl Fixture {
    pub fn new(home: Team, away: Team, rules: MatchRules) -> Self {
        Self { home, away, rules, result: MatchResult::unplayed() }
    }

    pub fn team(&self, side: Side) -> &Team {
        match side {
            Side::Home => &self.home,
            Side::Away => &self.away,
        }
    }

    pub fn rules(&self) -> &MatchRules {
        &self.rules
    }

    pub fn result(&self) -> &MatchResult {
        &self.result
    }

    /// Record a result produced elsewhere, e.g. by a live match viewer.
    pub fn set_result(&mut self, result: MatchResult) {
        self.result = result;
    }

    pub fn is_played(&self) -> bool {
        self.result.played
    }

    /// Simulate without touching the stored result.
    pub fn play<R: Rng + ?Sized>(&self, simulator: &MatchSimulator, rng: &mut R) -> MatchResult {
        simulator.simulate(&self.home, &self.away, &self.rules, rng)
    }

    /// Simulate and store the result.
    pub fn play_and_record<R: Rng + ?Sized>(
        &mut self,
        simulator: &MatchSimulator,
        rng: &mut R,
    ) -> MatchResult {
        let result = self.play(simulator, rng);
        self.result = result;
        result
    }
}
