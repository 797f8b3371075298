use thiserror::Error;

/// Errors raised while reading page configuration.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum FolioError {
    #[error("unknown section `{0}`")]
    UnknownSection(String),
    #[error("invalid skill width `{value}`: {reason}")]
    InvalidSkillWidth { value: String, reason: &'static str },
    #[error("invalid config: {0}")]
    InvalidConfig(&'static str),
}
