//! Team strength profile: a roster reduced to per-zone scalars.
//!
//! Each of the three lateral zones carries three strengths:
//! - `defense`: stopping attempts on goal
//! - `acquire`: winning and keeping the ball
//! - `utilize`: turning possession into a goal
//!
//! Before a match the team's pressure and long-ball settings drift randomly,
//! and a `wings` factor decides how much play goes down the flanks. The
//! profile is built once per team per match and never changes afterwards.

use rand::Rng;
use serde::Serialize;

use super::config::SimulationConfig;
use super::zone::Zone;
use crate::models::{PlayerSkills, Position, TacticalAssignment, Team, TeamTactics};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct ZoneStrength {
    pub defense: f32,
    pub acquire: f32,
    pub utilize: f32,
}

impl ZoneStrength {
    fn add_scaled(&mut self, other: &ZoneStrength, factor: f32) {
        self.defense += other.defense * factor;
        self.acquire += other.acquire * factor;
        self.utilize += other.utilize * factor;
    }
}

/// Match-day tactical parameters after random drift.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TacticalDrift {
    pub pressure: f32,
    pub long_balls: f32,
    pub wings: f32,
}

impl TacticalDrift {
    /// Draw order is pressure, long balls, wings.
    pub fn draw<R: Rng + ?Sized>(tactics: &TeamTactics, variance: f32, rng: &mut R) -> Self {
        let pressure = tactics.pressure() * 0.5 + 0.25 + noise(variance, rng);
        let long_balls = tactics.long_balls() * 0.5 + 0.25 + noise(variance, rng);
        let wings = 0.5 + noise(variance, rng);

        Self {
            pressure: pressure.clamp(0.0, 1.0),
            long_balls: long_balls.clamp(0.0, 1.0),
            wings: wings.clamp(0.25, 0.75),
        }
    }

    /// Drift with zero noise.
    pub fn settled(tactics: &TeamTactics) -> Self {
        Self {
            pressure: tactics.pressure() * 0.5 + 0.25,
            long_balls: tactics.long_balls() * 0.5 + 0.25,
            wings: 0.5,
        }
    }
}

fn noise<R: Rng + ?Sized>(variance: f32, rng: &mut R) -> f32 {
    rng.gen_range(-1.0f32..1.0) * variance
}

/// Raw contribution of one outfield player before pressure and zoning.
fn outfield_contribution(position: Position, skills: &PlayerSkills) -> ZoneStrength {
    let general = skills.general();
    match position {
        Position::Defender => ZoneStrength {
            defense: skills.tackling() * general,
            acquire: 0.5 * skills.passing() * general,
            utilize: 0.0,
        },
        Position::Midfielder => ZoneStrength {
            defense: 0.25 * skills.tackling() * general,
            acquire: skills.passing() * general,
            utilize: 0.25 * skills.shot_power() * general,
        },
        Position::Forward => ZoneStrength {
            defense: 0.0,
            acquire: 0.5 * skills.passing() * general,
            utilize: skills.shot_power() * general,
        },
        Position::Goalkeeper => ZoneStrength::default(),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamStrengthProfile {
    zones: [ZoneStrength; 3],
    tries: [f32; 3],
    long_balls: f32,
}

impl TeamStrengthProfile {
    /// Draw the team's tactical drift from `rng` and build its profile.
    pub fn build<R: Rng + ?Sized>(team: &Team, config: &SimulationConfig, rng: &mut R) -> Self {
        let drift = TacticalDrift::draw(&team.tactics, config.tactic_variance, rng);
        Self::from_drift(team, drift, config.utilize_multiplier)
    }

    /// Build with an already drawn drift. Pure.
    pub fn from_drift(team: &Team, drift: TacticalDrift, utilize_multiplier: f32) -> Self {
        let mut zones = [ZoneStrength::default(); 3];

        for (player, assignment) in team.fielded() {
            let skills = &player.skills;
            if !assignment.position().is_outfield() {
                for zone in zones.iter_mut() {
                    zone.defense += skills.goalkeeping();
                }
                continue;
            }

            let mut contribution = outfield_contribution(assignment.position(), skills);
            contribution.acquire *= drift.pressure;
            contribution.utilize *= (1.0 - drift.pressure) * utilize_multiplier;

            distribute(&mut zones, &contribution, assignment);

            log::trace!(
                "player {:>3} {:<20} def {:.3} get {:.3} use {:.3} width {:+.2}",
                player.id,
                player.name,
                contribution.defense,
                contribution.acquire,
                contribution.utilize,
                assignment.width()
            );
        }

        let tries = [
            zones[Zone::Left.index()].acquire * 0.5 * drift.wings,
            zones[Zone::Center.index()].acquire * (1.0 - drift.wings),
            zones[Zone::Right.index()].acquire * 0.5 * drift.wings,
        ];

        log::debug!(
            "{}: pressure {:.2} long balls {:.2} wings {:.2} tries {:?}",
            team.name,
            drift.pressure,
            drift.long_balls,
            drift.wings,
            tries
        );

        Self { zones, tries, long_balls: drift.long_balls }
    }

    pub fn zone(&self, zone: Zone) -> &ZoneStrength {
        &self.zones[zone.index()]
    }

    /// Relative likelihood that play starts in `zone`.
    pub fn try_weight(&self, zone: Zone) -> f32 {
        self.tries[zone.index()]
    }

    /// Match-day long-ball tendency, in [0, 1].
    pub fn long_balls(&self) -> f32 {
        self.long_balls
    }

    pub fn total_utilize(&self) -> f32 {
        self.zones.iter().map(|z| z.utilize).sum()
    }
}

/// Split a contribution between the center and the player's flank.
fn distribute(zones: &mut [ZoneStrength; 3], contribution: &ZoneStrength, at: &TacticalAssignment) {
    let centered = (1.0 - at.width().abs()).clamp(0.0, 1.0);
    zones[Zone::Center.index()].add_scaled(contribution, centered);
    zones[Zone::flank_of(at.width()).index()].add_scaled(contribution, 1.0 - centered);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Player, PlayerSkills, TeamTactics};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    const EPS: f32 = 1e-5;

    fn skills(passing: f32, shot_power: f32, tackling: f32, goalkeeping: f32) -> PlayerSkills {
        // ball control and run speed equal to passing keeps `general == passing`
        PlayerSkills::new(passing, passing, passing, shot_power, tackling, goalkeeping).unwrap()
    }

    fn flat_drift() -> TacticalDrift {
        TacticalDrift { pressure: 0.5, long_balls: 0.5, wings: 0.5 }
    }

    fn one_player(position: Position, width: f32, skills: PlayerSkills) -> Team {
        Team::new("Solo", TeamTactics::balanced()).with_player(
            Player::new(1, "Solo", skills),
            TacticalAssignment::new(position, width).unwrap(),
        )
    }

    #[test]
    fn goalkeeper_defends_every_zone() {
        let team = one_player(Position::Goalkeeper, 0.9, skills(0.5, 0.5, 0.5, 0.8));
        let profile = TeamStrengthProfile::from_drift(&team, flat_drift(), 4.0);
        for zone in Zone::ALL {
            assert!((profile.zone(zone).defense - 0.8).abs() < EPS);
            assert_eq!(profile.zone(zone).acquire, 0.0);
            assert_eq!(profile.zone(zone).utilize, 0.0);
        }
    }

    #[test]
    fn central_defender_contribution() {
        let team = one_player(Position::Defender, 0.0, skills(0.6, 0.9, 0.5, 0.0));
        let profile = TeamStrengthProfile::from_drift(&team, flat_drift(), 4.0);
        let center = profile.zone(Zone::Center);
        // general = 0.6
        assert!((center.defense - 0.5 * 0.6).abs() < EPS);
        assert!((center.acquire - 0.5 * 0.6 * 0.6 * 0.5).abs() < EPS);
        assert_eq!(center.utilize, 0.0);
        assert_eq!(*profile.zone(Zone::Left), ZoneStrength::default());
    }

    #[test]
    fn forward_utilize_uses_pressure_and_multiplier() {
        let team = one_player(Position::Forward, 0.0, skills(0.5, 0.8, 0.0, 0.0));
        let drift = TacticalDrift { pressure: 0.25, ..flat_drift() };
        let profile = TeamStrengthProfile::from_drift(&team, drift, 4.0);
        let center = profile.zone(Zone::Center);
        assert!((center.utilize - 0.8 * 0.5 * 0.75 * 4.0).abs() < EPS);
        assert!((center.acquire - 0.5 * 0.5 * 0.5 * 0.25).abs() < EPS);
        assert_eq!(center.defense, 0.0);
    }

    #[test]
    fn midfielder_splits_between_center_and_flank() {
        let team = one_player(Position::Midfielder, -0.75, skills(1.0, 1.0, 1.0, 0.0));
        let profile = TeamStrengthProfile::from_drift(&team, flat_drift(), 4.0);
        let left = profile.zone(Zone::Left);
        let center = profile.zone(Zone::Center);
        // defense 0.25, acquire 1.0 * 0.5, utilize 0.25 * 0.5 * 4
        assert!((center.defense - 0.25 * 0.25).abs() < EPS);
        assert!((left.defense - 0.25 * 0.75).abs() < EPS);
        assert!((left.acquire - 0.5 * 0.75).abs() < EPS);
        assert!((left.utilize - 0.5 * 0.75).abs() < EPS);
        assert_eq!(*profile.zone(Zone::Right), ZoneStrength::default());
    }

    #[test]
    fn touchline_player_leaves_center_empty() {
        let team = one_player(Position::Forward, 1.0, skills(0.5, 0.5, 0.0, 0.0));
        let profile = TeamStrengthProfile::from_drift(&team, flat_drift(), 4.0);
        assert_eq!(*profile.zone(Zone::Center), ZoneStrength::default());
        assert!(profile.zone(Zone::Right).utilize > 0.0);
    }

    #[test]
    fn unassigned_players_contribute_nothing() {
        let team = Team::new("Reserves", TeamTactics::balanced())
            .with_reserve(Player::new(1, "Bench", skills(1.0, 1.0, 1.0, 1.0)));
        let profile = TeamStrengthProfile::from_drift(&team, flat_drift(), 4.0);
        for zone in Zone::ALL {
            assert_eq!(*profile.zone(zone), ZoneStrength::default());
            assert_eq!(profile.try_weight(zone), 0.0);
        }
    }

    #[test]
    fn try_weights_follow_wings() {
        let team = Team::new("Wide", TeamTactics::balanced())
            .with_player(
                Player::new(1, "L", skills(1.0, 0.0, 0.0, 0.0)),
                TacticalAssignment::new(Position::Midfielder, -1.0).unwrap(),
            )
            .with_player(
                Player::new(2, "C", skills(1.0, 0.0, 0.0, 0.0)),
                TacticalAssignment::central(Position::Midfielder),
            );
        let drift = TacticalDrift { wings: 0.75, ..flat_drift() };
        let profile = TeamStrengthProfile::from_drift(&team, drift, 4.0);
        let left_get = profile.zone(Zone::Left).acquire;
        let center_get = profile.zone(Zone::Center).acquire;
        assert!((profile.try_weight(Zone::Left) - left_get * 0.5 * 0.75).abs() < EPS);
        assert!((profile.try_weight(Zone::Center) - center_get * 0.25).abs() < EPS);
        assert_eq!(profile.try_weight(Zone::Right), 0.0);
    }

    #[test]
    fn zero_variance_drift_is_settled() {
        let tactics = TeamTactics::new(0.8, 0.2).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let drift = TacticalDrift::draw(&tactics, 0.0, &mut rng);
        assert_eq!(drift, TacticalDrift::settled(&tactics));
        assert!((drift.pressure - 0.65).abs() < EPS);
        assert!((drift.long_balls - 0.35).abs() < EPS);
    }

    #[test]
    fn drift_stays_clamped() {
        let tactics = TeamTactics::new(1.0, 0.0).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        for _ in 0..500 {
            let drift = TacticalDrift::draw(&tactics, 5.0, &mut rng);
            assert!((0.0..=1.0).contains(&drift.pressure));
            assert!((0.0..=1.0).contains(&drift.long_balls));
            assert!((0.25..=0.75).contains(&drift.wings));
        }
    }

    #[test]
    fn long_balls_carried_onto_profile() {
        let team = one_player(Position::Forward, 0.0, skills(0.5, 0.5, 0.0, 0.0));
        let drift = TacticalDrift { long_balls: 0.9, ..flat_drift() };
        let profile = TeamStrengthProfile::from_drift(&team, drift, 4.0);
        assert!((profile.long_balls() - 0.9).abs() < EPS);
    }
}
