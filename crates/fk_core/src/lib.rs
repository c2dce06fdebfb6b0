//! # fk_core - Quick-Match Outcome Simulation Engine
//!
//! Turns two rosters into a final score without a real-time simulation.
//!
//! ## Features
//! - Deterministic: the caller supplies the random generator, same seed =
//!   same result
//! - Zone model: three lateral zones, each with defense / acquire / utilize
//!   strength derived from player skills and tactics
//! - Tie-breaks: optional extra time and an always-decisive penalty shootout
//! - JSON API and a parallel batch runner for balancing
//!
//! ## Example
//! ```rust
//! use fk_core::{simulate_match, MatchRules, Player, PlayerSkills, Position,
//!               TacticalAssignment, Team, TeamTactics};
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let skills = PlayerSkills::uniform(0.7).unwrap();
//! let team = |name: &str| {
//!     Team::new(name, TeamTactics::balanced())
//!         .with_player(Player::new(1, "Keeper", skills),
//!                      TacticalAssignment::central(Position::Goalkeeper))
//!         .with_player(Player::new(2, "Striker", skills),
//!                      TacticalAssignment::central(Position::Forward))
//! };
//!
//! let mut rng = ChaCha8Rng::seed_from_u64(42);
//! let result = simulate_match(&team("Home"), &team("Away"), &MatchRules::knockout(), &mut rng);
//! assert!(result.played);
//! assert!(result.home_won() != result.away_won());
//! ```

pub mod api;
pub mod calibration;
pub mod engine;
pub mod error;
pub mod models;

pub use api::{simulate_match_json, MatchRequest, MatchResponse};
pub use calibration::{BatchRunner, GoalStats};
pub use engine::{
    simulate_match, Fixture, MatchSimulator, SimulationConfig, TeamStrengthProfile, Zone,
};
pub use error::{Result, SimError};
pub use models::{
    MatchResult, MatchRules, Player, PlayerId, PlayerSkills, Position, Side, TacticalAssignment,
    Team, TeamTactics,
};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
