use thiserror::Error;

use crate::wizard::Step;

#[derive(Error, Debug)]
pub enum GuideError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML serialization error: {0}")]
    YamlSerialization(#[from] serde_yaml_ng::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Answers incomplete: {0} is not answered")]
    IncompleteAnswers(Step),

    #[error("Pole count {0} is outside the supported range 2-12")]
    InvalidPoleCount(u8),

    #[error("Unknown locale: {0}")]
    UnknownLocale(String),

    #[error("Route error: {0}")]
    Route(String),

    #[error("Connector {0} not found")]
    NotFound(i64),

    #[error("Generic error: {0}")]
    Generic(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, GuideError>;
