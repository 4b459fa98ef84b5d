use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Attribute '{key}' not found")]
    NotFound { key: String },

    #[error("Try to set locked attribute '{key}'")]
    Locked { key: String },

    #[error("Try to set the attribute '{key}' with ambiguous keys ('{attempted}', '{existing}')")]
    Ambiguous {
        key: String,
        existing: String,
        attempted: String,
    },

    #[error("Config error: {0}")]
    Config(#[from] confique::Error),
}

impl Error {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }

    pub fn is_locked(&self) -> bool {
        matches!(self, Error::Locked { .. })
    }

    pub fn is_ambiguous(&self) -> bool {
        matches!(self, Error::Ambiguous { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;
