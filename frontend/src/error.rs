use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum HeroError {
    #[error("timeline step {index} has invalid {field}: {value}")]
    InvalidStep {
        index: usize,
        field: &'static str,
        value: f64,
    },

    #[error("browser global `{0}` is not available")]
    MissingGlobal(&'static str),

    #[error("failed to register `{event}` listener: {reason}")]
    Listener { event: &'static str, reason: String },

    #[error("invalid hero config: {0}")]
    Config(String),
}

impl From<serde_json::Error> for HeroError {
    fn from(err: serde_json::Error) -> Self {
        HeroError::Config(err.to_string())
    }
}
