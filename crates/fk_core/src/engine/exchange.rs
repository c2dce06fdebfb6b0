//! One attacking exchange between two team profiles.
//!
//! An exchange picks a zone, contests possession there and lets the holder
//! try to score against the opponent's defense. Zones are named from the
//! home side's perspective; the away side always plays in the mirrored zone.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::sampler::pick_weighted;
use super::strength::TeamStrengthProfile;
use super::zone::Zone;
use crate::models::Side;

/// Running score during a simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Score {
    pub home: u32,
    pub away: u32,
}

impl Score {
    pub fn is_level(&self) -> bool {
        self.home == self.away
    }

    fn credit(&mut self, side: Side) {
        match side {
            Side::Home => self.home += 1,
            Side::Away => self.away += 1,
        }
    }
}

/// Normalized likelihood of each zone (home perspective) starting an
/// exchange. Computed once per match.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TryDistribution([f32; 3]);

impl TryDistribution {
    /// Home's left flank faces away's right, so those try weights pool.
    /// All-zero try weights give an all-zero distribution.
    pub fn between(home: &TeamStrengthProfile, away: &TeamStrengthProfile) -> Self {
        let pooled = Zone::ALL.map(|zone| home.try_weight(zone) + away.try_weight(zone.mirrored()));
        let total: f32 = pooled.iter().sum();
        if total > 0.0 {
            Self(pooled.map(|w| w / total))
        } else {
            Self([0.0; 3])
        }
    }

    pub fn weights(&self) -> &[f32; 3] {
        &self.0
    }

    pub fn probability(&self, zone: Zone) -> f32 {
        self.0[zone.index()]
    }
}

/// Play one exchange, crediting a goal to `score` if the attack succeeds.
pub fn simulate_exchange<R: Rng + ?Sized>(
    home: &TeamStrengthProfile,
    away: &TeamStrengthProfile,
    tries: &TryDistribution,
    score: &mut Score,
    rng: &mut R,
) {
    let zone = Zone::from_index(pick_weighted(tries.weights(), rng));
    let home_zone = home.zone(zone);
    let away_zone = away.zone(zone.mirrored());

    let long_balls = ((home.long_balls() + away.long_balls()) / 2.0).clamp(0.0, 1.0);
    let holder = contest_possession(home_zone.acquire, away_zone.acquire, long_balls, rng);

    let (attack, defense) = match holder {
        Side::Home => (home_zone.utilize, away_zone.defense),
        Side::Away => (away_zone.utilize, home_zone.defense),
    };

    if attempt_on_goal(attack, defense, rng) {
        score.credit(holder);
        log::debug!("{:?} {:?} scores {}-{}", zone, holder, score.home, score.away);
    } else {
        log::trace!("{:?} {:?} blocked", zone, holder);
    }
}

/// Decide who holds the ball in a zone.
///
/// A side with zero acquire strength never wins the ball from a side that
/// has some. Otherwise the home possession share is pulled toward 50% in
/// proportion to the combined long-ball tendency: direct play bypasses
/// midfield dominance.
pub(crate) fn contest_possession<R: Rng + ?Sized>(
    home_acquire: f32,
    away_acquire: f32,
    long_balls: f32,
    rng: &mut R,
) -> Side {
    if home_acquire > 0.0 && away_acquire <= 0.0 {
        return Side::Home;
    }
    if away_acquire > 0.0 && home_acquire <= 0.0 {
        return Side::Away;
    }

    let total = home_acquire + away_acquire;
    let holding = if total > 0.0 {
        let share = home_acquire / total;
        let shift = (share - 0.5) * long_balls;
        [share - shift, (1.0 - share) + shift]
    } else {
        [0.0, 0.0]
    };

    match pick_weighted(&holding, rng) {
        0 => Side::Home,
        _ => Side::Away,
    }
}

/// True when the attack beats the defense.
pub(crate) fn attempt_on_goal<R: Rng + ?Sized>(attack: f32, defense: f32, rng: &mut R) -> bool {
    pick_weighted(&[attack, defense], rng) == 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn test_rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(2024)
    }

    fn home_share(home: f32, away: f32, long_balls: f32, draws: u32) -> f64 {
        let mut rng = test_rng();
        let wins = (0..draws)
            .filter(|_| contest_possession(home, away, long_balls, &mut rng) == Side::Home)
            .count();
        wins as f64 / draws as f64
    }

    #[test]
    fn uncontested_possession_is_deterministic() {
        let mut rng = test_rng();
        for _ in 0..200 {
            assert_eq!(contest_possession(0.4, 0.0, 1.0, &mut rng), Side::Home);
            assert_eq!(contest_possession(0.0, 0.4, 0.0, &mut rng), Side::Away);
        }
    }

    #[test]
    fn empty_zone_falls_back_to_away() {
        let mut rng = test_rng();
        for _ in 0..50 {
            assert_eq!(contest_possession(0.0, 0.0, 0.5, &mut rng), Side::Away);
        }
    }

    #[test]
    fn possession_share_without_long_balls() {
        let share = home_share(3.0, 1.0, 0.0, 20_000);
        assert!((share - 0.75).abs() < 0.02, "home share {share}");
    }

    #[test]
    fn full_long_balls_neutralize_possession() {
        let share = home_share(3.0, 1.0, 1.0, 20_000);
        assert!((share - 0.5).abs() < 0.02, "home share {share}");
    }

    #[test]
    fn partial_long_balls_pull_toward_even() {
        // share 0.75, shift 0.25 * 0.5
        let share = home_share(3.0, 1.0, 0.5, 20_000);
        assert!((share - 0.625).abs() < 0.02, "home share {share}");
    }

    #[test]
    fn zero_attack_never_scores() {
        let mut rng = test_rng();
        for _ in 0..1000 {
            assert!(!attempt_on_goal(0.0, 0.7, &mut rng));
            assert!(!attempt_on_goal(0.0, 0.0, &mut rng));
        }
    }

    #[test]
    fn zero_defense_always_concedes() {
        let mut rng = test_rng();
        for _ in 0..1000 {
            assert!(attempt_on_goal(0.1, 0.0, &mut rng));
        }
    }

    fn left_winger_profile() -> TeamStrengthProfile {
        use crate::engine::strength::TacticalDrift;
        use crate::models::{Player, PlayerSkills, Position, TacticalAssignment, Team, TeamTactics};

        let team = Team::new("Wingers", TeamTactics::balanced()).with_player(
            Player::new(7, "Winger", PlayerSkills::uniform(0.8).unwrap()),
            TacticalAssignment::new(Position::Midfielder, -1.0).unwrap(),
        );
        let drift = TacticalDrift { pressure: 0.5, long_balls: 0.5, wings: 0.5 };
        TeamStrengthProfile::from_drift(&team, drift, 4.0)
    }

    #[test]
    fn try_distribution_pools_mirrored_flanks() {
        let profile = left_winger_profile();
        let tries = TryDistribution::between(&profile, &profile);
        // home's left pools with away's right (empty), away's left lands on home's right
        assert!((tries.probability(Zone::Left) - 0.5).abs() < 1e-6);
        assert_eq!(tries.probability(Zone::Center), 0.0);
        assert!((tries.probability(Zone::Right) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn empty_profiles_give_zero_distribution() {
        let empty = TeamStrengthProfile::from_drift(
            &crate::models::Team::new("Empty", Default::default()),
            crate::engine::strength::TacticalDrift { pressure: 0.5, long_balls: 0.5, wings: 0.5 },
            4.0,
        );
        let tries = TryDistribution::between(&empty, &empty);
        assert_eq!(tries.weights(), &[0.0; 3]);
        // sampler fallback picks the last zone
        let mut rng = test_rng();
        assert_eq!(Zone::from_index(pick_weighted(tries.weights(), &mut rng)), Zone::Right);
    }

    #[test]
    fn score_credit() {
        let mut score = Score::default();
        assert!(score.is_level());
        score.credit(Side::Away);
        assert_eq!(score, Score { home: 0, away: 1 });
        assert!(!score.is_level());
    }
}
