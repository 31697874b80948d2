use thiserror::Error;

pub type RecoveryResult<T> = std::result::Result<T, RecoveryError>;

#[derive(Debug, Error)]
pub enum RecoveryError {
    #[error("expected 12 words, got {0}")]
    WordCount(usize),

    #[error("word #{position} \"{word}\" is not in the BIP39 wordlist")]
    UnknownWord { position: usize, word: String },

    #[error("no recovery phrase provided")]
    EmptyInput,

    #[error("error reading input: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}
