//! Full match orchestration.
//!
//! Regulation → (level → extra time) → (still level → penalties) → final.
//! Each step is gated only by the score and the two rule flags.

use rand::Rng;

use super::config::SimulationConfig;
use super::exchange::{simulate_exchange, Score, TryDistribution};
use super::strength::TeamStrengthProfile;
use crate::models::{MatchResult, MatchRules, Team};

/// Quick-match simulator: turns two teams into a final score.
#[derive(Debug, Clone, Default)]
pub struct MatchSimulator {
    config: SimulationConfig,
}

impl MatchSimulator {
    pub fn new(config: SimulationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Simulate `home` against `away`. Randomness comes only from `rng`.
    pub fn simulate<R: Rng + ?Sized>(
        &self,
        home: &Team,
        away: &Team,
        rules: &MatchRules,
        rng: &mut R,
    ) -> MatchResult {
        let home_profile = TeamStrengthProfile::build(home, &self.config, rng);
        let away_profile = TeamStrengthProfile::build(away, &self.config, rng);
        log::debug!("{} vs {}", home.name, away.name);
        self.simulate_profiles(&home_profile, &away_profile, rules, rng)
    }

    /// Simulate between already built profiles.
    pub fn simulate_profiles<R: Rng + ?Sized>(
        &self,
        home: &TeamStrengthProfile,
        away: &TeamStrengthProfile,
        rules: &MatchRules,
        rng: &mut R,
    ) -> MatchResult {
        let tries = TryDistribution::between(home, away);
        let mut score = Score::default();

        for _ in 0..self.config.regulation_exchanges {
            simulate_exchange(home, away, &tries, &mut score, rng);
        }

        if score.is_level() && rules.extra_time_on_tie {
            log::debug!("level at {}-{}, extra time", score.home, score.away);
            for _ in 0..self.config.extra_time_exchanges {
                simulate_exchange(home, away, &tries, &mut score, rng);
            }
        }

        if score.is_level() && rules.penalties_on_tie {
            let (home_penalties, away_penalties) = self.shootout(rng);
            log::debug!(
                "level at {}-{}, penalties {}-{}",
                score.home,
                score.away,
                home_penalties,
                away_penalties
            );
            return MatchResult::with_penalties(
                score.home,
                score.away,
                home_penalties,
                away_penalties,
            );
        }

        MatchResult::new(score.home, score.away)
    }

    /// Always decisive: a level draw hands one side an extra penalty on a
    /// coin flip.
    fn shootout<R: Rng + ?Sized>(&self, rng: &mut R) -> (u32, u32) {
        let base = self.config.penalty_base;
        let spread = self.config.penalty_spread;
        let mut home = base.saturating_add(rng.gen_range(0..=spread));
        let mut away = base.saturating_add(rng.gen_range(0..=spread));
        if home == away {
            if rng.gen_bool(0.5) {
                home = home.saturating_add(1);
            } else {
                away = away.saturating_add(1);
            }
        }
        (home, away)
    }
}

/// Simulate with the default configuration.
pub fn simulate_match<R: Rng + ?Sized>(
    home: &Team,
    away: &Team,
    rules: &MatchRules,
    rng: &mut R,
) -> MatchResult {
    MatchSimulator::default().simulate(home, away, rules, rng)
}
