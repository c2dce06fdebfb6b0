pub mod match_result;
pub mod player;
pub mod rules;
pub mod team;

pub use match_result::{MatchResult, Side};
pub use player::{Player, PlayerId, PlayerSkills, Position, TacticalAssignment};
pub use rules::MatchRules;
pub use team::{Team, TeamTactics};
