use serde::{Deserialize, Serialize};

/// Tie-break devices applied when a match is level after regulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MatchRules {
    #[serde(default)]
    pub extra_time_on_tie: bool,
    #[serde(default)]
    pub penalties_on_tie: bool,
}

impl MatchRules {
    pub fn new(extra_time_on_tie: bool, penalties_on_tie: bool) -> Self {
        Self { extra_time_on_tie, penalties_on_tie }
    }

    /// League rules: a draw stands.
    pub fn league() -> Self {
        Self::default()
    }

    /// Cup rules: extra time, then penalties.
    pub fn knockout() -> Self {
        Self::new(true, true)
    }
}
