use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("Invalid skill {attribute}: {value}. Must be a finite value between 0.0 and 1.0")]
    InvalidSkill { attribute: &'static str, value: f32 },

    #[error("Invalid width position: {0}. Must be between -1.0 and 1.0")]
    InvalidWidth(f32),

    #[error("Invalid tactic {parameter}: {value}. Must be between 0.0 and 1.0")]
    InvalidTactic { parameter: &'static str, value: f32 },

    #[error("Invalid simulation config: {0}")]
    InvalidConfig(String),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Unsupported schema version: {0}")]
    UnsupportedSchema(u8),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl SimError {
    /// True for errors caused by the caller's roster or tactics data, as
    /// opposed to config files or transport.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            SimError::InvalidSkill { .. }
                | SimError::InvalidWidth(_)
                | SimError::InvalidTactic { .. }
                | SimError::Validation(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, SimError>;
