use nexus_types::Tier;
use thiserror::Error;

/// Failure while issuing a key.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    #[error("Unknown tier: {0}")]
    UnknownTier(String),
}

impl EncodeError {
    pub fn code(&self) -> &'static str {
        match self {
            EncodeError::UnknownTier(_) => "UNKNOWN_TIER",
        }
    }
}

/// First failing gate of the decode pipeline.
///
/// Display strings are the short messages surfaced in validation reports.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Unknown key format")]
    UnknownKeyFormat,

    #[error("Invalid key structure")]
    InvalidKeyStructure { segments: usize },

    #[error("Invalid checksum")]
    InvalidChecksum { expected: String, found: String },

    #[error("Tier identifier mismatch")]
    TierIdentifierMismatch { expected: Tier, found: Option<char> },
}

impl ValidationError {
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::UnknownKeyFormat => "UNKNOWN_KEY_FORMAT",
            ValidationError::InvalidKeyStructure { .. } => "INVALID_KEY_STRUCTURE",
            ValidationError::InvalidChecksum { .. } => "INVALID_CHECKSUM",
            ValidationError::TierIdentifierMismatch { .. } => "TIER_IDENTIFIER_MISMATCH",
        }
    }
}
