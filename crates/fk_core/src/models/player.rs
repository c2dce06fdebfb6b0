//! Player inputs: skills and tactical assignment.
//!
//! Every value in this module is validated when it is constructed, including
//! when it is deserialized, so the engine can treat rosters as well-formed.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::{Result, SimError};

pub type PlayerId = u32;

/// Normalized (0.0-1.0) player ratings used by the quick-match engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SkillsRecord")]
pub struct PlayerSkills {
    passing: f32,
    ball_control: f32,
    run_speed: f32,
    shot_power: f32,
    tackling: f32,
    goalkeeping: f32,
}

#[derive(Debug, Clone, Copy, Deserialize, Validate)]
struct SkillsRecord {
    #[validate(range(min = 0.0, max = 1.0))]
    passing: f32,
    #[validate(range(min = 0.0, max = 1.0))]
    ball_control: f32,
    #[validate(range(min = 0.0, max = 1.0))]
    run_speed: f32,
    #[validate(range(min = 0.0, max = 1.0))]
    shot_power: f32,
    #[validate(range(min = 0.0, max = 1.0))]
    tackling: f32,
    #[validate(range(min = 0.0, max = 1.0))]
    goalkeeping: f32,
}

impl SkillsRecord {
    fn named(&self) -> [(&'static str, f32); 6] {
        [
            ("passing", self.passing),
            ("ball_control", self.ball_control),
            ("run_speed", self.run_speed),
            ("shot_power", self.shot_power),
            ("tackling", self.tackling),
            ("goalkeeping", self.goalkeeping),
        ]
    }
}

impl TryFrom<SkillsRecord> for PlayerSkills {
    type Error = SimError;

    fn try_from(record: SkillsRecord) -> Result<Self> {
        // range() lets NaN through
        if let Some((attribute, value)) = record.named().into_iter().find(|(_, v)| !v.is_finite())
        {
            return Err(SimError::InvalidSkill { attribute, value });
        }
        record.validate()?;

        Ok(Self {
            passing: record.passing,
            ball_control: record.ball_control,
            run_speed: record.run_speed,
            shot_power: record.shot_power,
            tackling: record.tackling,
            goalkeeping: record.goalkeeping,
        })
    }
}

impl PlayerSkills {
    pub fn new(
        passing: f32,
        ball_control: f32,
        run_speed: f32,
        shot_power: f32,
        tackling: f32,
        goalkeeping: f32,
    ) -> Result<Self> {
        Self::try_from(SkillsRecord {
            passing,
            ball_control,
            run_speed,
            shot_power,
            tackling,
            goalkeeping,
        })
    }

    /// Every rating set to the same value.
    pub fn uniform(value: f32) -> Result<Self> {
        Self::new(value, value, value, value, value, value)
    }

    pub fn passing(&self) -> f32 {
        self.passing
    }

    pub fn ball_control(&self) -> f32 {
        self.ball_control
    }

    pub fn run_speed(&self) -> f32 {
        self.run_speed
    }

    pub fn shot_power(&self) -> f32 {
        self.shot_power
    }

    pub fn tackling(&self) -> f32 {
        self.tackling
    }

    pub fn goalkeeping(&self) -> f32 {
        self.goalkeeping
    }

    /// Mean of passing, ball control and run speed. Scales every outfield
    /// contribution.
    pub fn general(&self) -> f32 {
        (self.passing + self.ball_control + self.run_speed) / 3.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    #[serde(alias = "GK")]
    Goalkeeper,
    #[serde(alias = "DF")]
    Defender,
    #[serde(alias = "MF")]
    Midfielder,
    #[serde(alias = "FW")]
    Forward,
}

impl Position {
    pub fn is_outfield(&self) -> bool {
        !matches!(self, Position::Goalkeeper)
    }
}

/// Where a player lines up: role plus lateral position.
///
/// `width` runs from -1.0 (left touchline) through 0.0 (center) to 1.0
/// (right touchline).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "AssignmentRecord")]
pub struct TacticalAssignment {
    position: Position,
    width: f32,
}

#[derive(Debug, Clone, Copy, Deserialize)]
struct AssignmentRecord {
    position: Position,
    #[serde(default)]
    width: f32,
}

impl TryFrom<AssignmentRecord> for TacticalAssignment {
    type Error = SimError;

    fn try_from(record: AssignmentRecord) -> Result<Self> {
        Self::new(record.position, record.width)
    }
}

impl TacticalAssignment {
    pub fn new(position: Position, width: f32) -> Result<Self> {
        if !(-1.0..=1.0).contains(&width) {
            return Err(SimError::InvalidWidth(width));
        }
        Ok(Self { position, width })
    }

    pub fn central(position: Position) -> Self {
        Self { position, width: 0.0 }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn width(&self) -> f32 {
        self.width
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    #[serde(default)]
    pub name: String,
    pub skills: PlayerSkills,
}

impl Player {
    pub fn new(id: PlayerId, name: impl Into<String>, skills: PlayerSkills) -> Self {
        Self { id, name: name.into(), skills }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skills_accept_bounds() {
        assert!(PlayerSkills::new(0.0, 1.0, 0.5, 0.25, 0.75, 1.0).is_ok());
    }

    #[test]
    fn skills_reject_out_of_range() {
        let err = PlayerSkills::new(1.2, 0.5, 0.5, 0.5, 0.5, 0.5).unwrap_err();
        assert!(matches!(err, SimError::Validation(_)));

        let err = PlayerSkills::new(0.5, 0.5, 0.5, -0.1, 0.5, 0.5).unwrap_err();
        assert!(err.is_input_error());
    }

    #[test]
    fn skills_reject_nan() {
        let err = PlayerSkills::new(0.5, f32::NAN, 0.5, 0.5, 0.5, 0.5).unwrap_err();
        match err {
            SimError::InvalidSkill { attribute, .. } => assert_eq!(attribute, "ball_control"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn general_skill_averages_three_ratings() {
        let skills = PlayerSkills::new(0.9, 0.6, 0.3, 0.0, 0.0, 0.0).unwrap();
        assert!((skills.general() - 0.6).abs() < 1e-6);
    }

    #[test]
    fn deserialize_validates_skills() {
        let ok = r#"{"passing":0.5,"ball_control":0.5,"run_speed":0.5,
                     "shot_power":0.5,"tackling":0.5,"goalkeeping":0.5}"#;
        assert!(serde_json::from_str::<PlayerSkills>(ok).is_ok());

        let bad = r#"{"passing":5.0,"ball_control":0.5,"run_speed":0.5,
                      "shot_power":0.5,"tackling":0.5,"goalkeeping":0.5}"#;
        assert!(serde_json::from_str::<PlayerSkills>(bad).is_err());
    }

    #[test]
    fn assignment_width_bounds() {
        assert!(TacticalAssignment::new(Position::Forward, -1.0).is_ok());
        assert!(TacticalAssignment::new(Position::Forward, 1.0).is_ok());
        assert!(matches!(
            TacticalAssignment::new(Position::Forward, 1.5),
            Err(SimError::InvalidWidth(_))
        ));
        assert!(TacticalAssignment::new(Position::Forward, f32::NAN).is_err());
    }

    #[test]
    fn assignment_deserializes_short_codes() {
        let a: TacticalAssignment =
            serde_json::from_str(r#"{"position":"GK"}"#).unwrap();
        assert_eq!(a.position(), Position::Goalkeeper);
        assert_eq!(a.width(), 0.0);

        assert!(serde_json::from_str::<TacticalAssignment>(r#"{"position":"FW","width":-2.0}"#)
            .is_err());
    }

    #[test]
    fn only_keepers_are_not_outfield() {
        assert!(!Position::Goalkeeper.is_outfield());
        assert!(Position::Defender.is_outfield());
        assert!(Position::Midfielder.is_outfield());
        assert!(Position::Forward.is_outfield());
    }
}
