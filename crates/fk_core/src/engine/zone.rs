use serde::{Deserialize, Serialize};

/// Lateral band of the pitch, seen from the team's own attacking direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Zone {
    Left,
    Center,
    Right,
}

/// Facing teams see each other's flanks swapped: my left is your right.
const MIRROR: [Zone; 3] = [Zone::Right, Zone::Center, Zone::Left];

impl Zone {
    /// Sampling order used by try distributions.
    pub const ALL: [Zone; 3] = [Zone::Left, Zone::Center, Zone::Right];

    pub fn index(self) -> usize {
        match self {
            Zone::Left => 0,
            Zone::Center => 1,
            Zone::Right => 2,
        }
    }

    /// Out-of-range indices map to `Right`, matching the sampler's
    /// last-index fallback.
    pub fn from_index(index: usize) -> Self {
        Self::ALL.get(index).copied().unwrap_or(Zone::Right)
    }

    /// The zone the opposing team occupies in the same stretch of pitch.
    pub fn mirrored(self) -> Self {
        MIRROR[self.index()]
    }

    /// Zone for a lateral position in [-1, 1]; only the sign matters.
    pub fn flank_of(width: f32) -> Self {
        if width < 0.0 {
            Zone::Left
        } else {
            Zone::Right
        }
    }
}
