//! Batch runner for balancing goals per match.
//!
//! Runs many seeded matches of one fixture in parallel and summarizes the
//! scorelines. Each match gets its own ChaCha stream derived from the base
//! seed and the match index, so results do not depend on thread scheduling.

use std::collections::BTreeMap;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use serde::Serialize;

use crate::engine::{Fixture, MatchSimulator, SimulationConfig};
use crate::models::MatchResult;

/// Aggregate scoreline statistics.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct GoalStats {
    pub matches: u32,
    pub mean_home_goals: f64,
    pub mean_away_goals: f64,
    pub mean_total_goals: f64,
    pub home_win_rate: f64,
    pub draw_rate: f64,
    pub away_win_rate: f64,
    pub shootout_rate: f64,
    /// Home goals minus away goals → number of matches.
    pub goal_difference: BTreeMap<i32, u32>,
}

impl GoalStats {
    pub fn from_results(results: &[MatchResult]) -> Self {
        if results.is_empty() {
            return Self::default();
        }

        let n = results.len() as f64;
        let rate = |pred: fn(&MatchResult) -> bool| {
            results.iter().filter(|r| pred(r)).count() as f64 / n
        };

        let mut goal_difference = BTreeMap::new();
        for r in results {
            *goal_difference.entry(r.goal_difference()).or_insert(0) += 1;
        }

        Self {
            matches: results.len() as u32,
            mean_home_goals: results.iter().map(|r| r.home_goals as f64).sum::<f64>() / n,
            mean_away_goals: results.iter().map(|r| r.away_goals as f64).sum::<f64>() / n,
            mean_total_goals: results.iter().map(|r| r.total_goals() as f64).sum::<f64>() / n,
            home_win_rate: rate(MatchResult::home_won),
            draw_rate: rate(MatchResult::is_draw),
            away_win_rate: rate(MatchResult::away_won),
            shootout_rate: rate(MatchResult::went_to_penalties),
            goal_difference,
        }
    }

    /// Mean of home minus away goals.
    pub fn mean_goal_difference(&self) -> f64 {
        self.mean_home_goals - self.mean_away_goals
    }
}

pub struct BatchRunner {
    simulator: MatchSimulator,
    base_seed: u64,
}

impl BatchRunner {
    pub fn new(config: SimulationConfig, base_seed: u64) -> Self {
        Self { simulator: MatchSimulator::new(config), base_seed }
    }

    /// Independent generator for the `index`-th match.
    pub fn match_rng(&self, index: u64) -> ChaCha8Rng {
        let mut rng = ChaCha8Rng::seed_from_u64(self.base_seed);
        rng.set_stream(index);
        rng
    }

    /// Results in match-index order.
    pub fn run(&self, fixture: &Fixture, matches: u32) -> Vec<MatchResult> {
        log::info!(
            "simulating {} x {} vs {} (seed {})",
            matches,
            fixture.home.name,
            fixture.away.name,
            self.base_seed
        );
        (0..matches)
            .into_par_iter()
            .map(|i| {
                let mut rng = self.match_rng(u64::from(i));
                fixture.play(&self.simulator, &mut rng)
            })
            .collect()
    }

    pub fn stats(&self, fixture: &Fixture, matches: u32) -> GoalStats {
        GoalStats::from_results(&self.run(fixture, matches))
    }
}
