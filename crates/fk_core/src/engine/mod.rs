//! Quick-match engine.
//!
//! Data flows strictly upward:
//!
//! ```text
//! Team ──► TeamStrengthProfile ──► simulate_exchange (× N) ──► MatchResult
//!              (strength.rs)           (exchange.rs)           (outcome.rs)
//!                     weighted draws via sampler::pick_weighted
//! ```
//!
//! Every entry point takes the random source as `&mut R where R: Rng`, so a
//! seeded generator reproduces a match draw for draw.

pub mod config;
pub mod exchange;
pub mod fixture;
pub mod outcome;
pub mod sampler;
pub mod strength;
pub mod zone;


pub use config::SimulationConfig;
pub use exchange::{simulate_exchange, Score, TryDistribution};
pub use fixture::Fixture;
pub use outcome::{simulate_match, MatchSimulator};
pub use sampler::pick_weighted;
pub use strength::{TacticalDrift, TeamStrengthProfile, ZoneStrength};
pub use zone::Zone;
