//! JSON API for quick-match simulation
//!
//! Takes a serialized match request, simulates it with a seeded generator
//! and returns the serialized response. Skill, width and tactic ranges are
//! checked while the request is parsed.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::engine::{Fixture, MatchSimulator, SimulationConfig};
use crate::error::{Result, SimError};
use crate::models::{MatchResult, MatchRules, Side, Team};

/// Schema version accepted by [`simulate_match_json`].
pub const SCHEMA_VERSION: u8 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchRequest {
    pub schema_version: u8,
    pub seed: u64,
    pub home_team: Team,
    pub away_team: Team,
    #[serde(default)]
    pub rules: MatchRules,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<SimulationConfig>,
}

impl MatchRequest {
    pub fn new(seed: u64, home_team: Team, away_team: Team, rules: MatchRules) -> Self {
        Self { schema_version: SCHEMA_VERSION, seed, home_team, away_team, rules, config: None }
    }

    /// Parse and check schema version and config.
    pub fn from_json(request_json: &str) -> Result<Self> {
        let request: MatchRequest = serde_json::from_str(request_json)?;
        if request.schema_version != SCHEMA_VERSION {
            warn!(version = request.schema_version, "rejecting match request");
            return Err(SimError::UnsupportedSchema(request.schema_version));
        }
        if let Some(config) = &request.config {
            config.validate()?;
        }
        Ok(request)
    }

    pub fn simulation_config(&self) -> SimulationConfig {
        self.config.clone().unwrap_or_default()
    }

    pub fn into_fixture(self) -> Fixture {
        Fixture::new(self.home_team, self.away_team, self.rules)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResponse {
    pub schema_version: u8,
    pub seed: u64,
    pub home_team: String,
    pub away_team: String,
    pub result: MatchResult,
    pub winner: Option<Side>,
}

/// Simulate a parsed request.
pub fn simulate_request(request: MatchRequest) -> MatchResponse {
    let seed = request.seed;
    let simulator = MatchSimulator::new(request.simulation_config());
    let fixture = request.into_fixture();

    debug!(
        seed,
        home = %fixture.home.name,
        away = %fixture.away.name,
        home_players = fixture.home.players.len(),
        away_players = fixture.away.players.len(),
        "simulating match"
    );

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let result = fixture.play(&simulator, &mut rng);

    info!(
        seed,
        home_goals = result.home_goals,
        away_goals = result.away_goals,
        home_penalties = result.home_penalties,
        away_penalties = result.away_penalties,
        "match simulated"
    );

    MatchResponse {
        schema_version: SCHEMA_VERSION,
        seed,
        home_team: fixture.home.name,
        away_team: fixture.away.name,
        winner: result.winner(),
        result,
    }
}

/// Simulate a match from a JSON request string.
pub fn simulate_match_json(request_json: &str) -> Result<String> {
    let request = MatchRequest::from_json(request_json)?;
    let response = simulate_request(request);
    Ok(serde_json::to_string(&response)?)
}
