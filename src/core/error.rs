use thiserror::Error;

#[derive(Error, Debug)]
pub enum WearoutError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Unknown reliability profile: {0}")]
    UnknownProfile(String),

    #[error("Profile parse error: {0}")]
    ProfileParse(#[from] toml::de::Error),

    #[error("Ledger error: {0}")]
    Ledger(#[from] crate::economy::ledger::LedgerError),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, WearoutError>;
