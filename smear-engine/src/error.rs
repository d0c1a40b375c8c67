// error.rs - Library error type

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SmearError {
    #[error("unknown density '{0}' (expected light, medium, full, ultra or max)")]
    UnknownDensity(String),

    #[error("no clinical preset named '{0}'")]
    UnknownPreset(String),

    #[error("unknown white cell lineage '{0}'")]
    UnknownLineage(String),

    #[error("unknown morphology '{0}'")]
    UnknownMorphology(String),

    #[error("no status for '{0}'")]
    UnknownMetric(String),

    #[error("device signal unavailable: {0}")]
    Probe(&'static str),

    #[error("could not schedule animation frame: {0}")]
    Schedule(String),
}

pub type Result<T> = std::result::Result<T, SmearError>;
