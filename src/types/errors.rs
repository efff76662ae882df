use std::fmt;

// === ObfuscationError ===

/// Errors related to the vault obfuscation codec.
#[derive(Debug)]
pub enum ObfuscationError {
    /// The key source is unusable (for example, an empty account id).
    InvalidKey(String),
    /// The input contains a code point the byte-wise codec cannot map.
    UnsupportedCharacter(char),
    /// The stored blob is not valid base64.
    DecodeError(String),
}

impl fmt::Display for ObfuscationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ObfuscationError::InvalidKey(msg) => write!(f, "Invalid obfuscation key: {}", msg),
            ObfuscationError::UnsupportedCharacter(c) => {
                write!(f, "Unsupported character: {:?} (U+{:04X})", c, *c as u32)
            }
            ObfuscationError::DecodeError(msg) => write!(f, "Blob decode error: {}", msg),
        }
    }
}

impl std::error::Error for ObfuscationError {}

// === PhraseSourceError ===

/// Errors related to passphrase source providers.
#[derive(Debug)]
pub enum PhraseSourceError {
    /// A network error occurred while contacting the phrase backend.
    NetworkError(String),
    /// The phrase backend returned a response the adapter cannot use.
    MalformedResponse(String),
    /// The source was constructed over an empty word list.
    EmptyWordlist,
}

impl fmt::Display for PhraseSourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhraseSourceError::NetworkError(msg) => {
                write!(f, "Phrase source network error: {}", msg)
            }
            PhraseSourceError::MalformedResponse(msg) => {
                write!(f, "Malformed phrase response: {}", msg)
            }
            PhraseSourceError::EmptyWordlist => write!(f, "Word list is empty"),
        }
    }
}

impl std::error::Error for PhraseSourceError {}

// === PassphraseError ===

/// Errors related to passphrase acceptance.
#[derive(Debug)]
pub enum PassphraseError {
    /// The phrase source failed; source failures are not retried.
    SourceError(String),
    /// Every drawn candidate was denylisted.
    AttemptsExhausted(u32),
    /// The requested word count is outside the supported range.
    InvalidWordCount(u32),
}

impl fmt::Display for PassphraseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PassphraseError::SourceError(msg) => write!(f, "Phrase source error: {}", msg),
            PassphraseError::AttemptsExhausted(attempts) => {
                write!(f, "No acceptable passphrase after {} attempts", attempts)
            }
            PassphraseError::InvalidWordCount(count) => {
                write!(f, "Invalid word count: {}", count)
            }
        }
    }
}

impl std::error::Error for PassphraseError {}

// === VaultError ===

/// Errors related to vault storage operations.
#[derive(Debug)]
pub enum VaultError {
    /// A required field was empty or missing.
    MissingField(&'static str),
    /// Database operation failed.
    DatabaseError(String),
    /// Obfuscating or revealing a secret failed.
    ObfuscationError(String),
    /// Vault entry with the given ID was not found for this account.
    NotFound(String),
}

impl fmt::Display for VaultError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VaultError::MissingField(field) => write!(f, "Missing required field: {}", field),
            VaultError::DatabaseError(msg) => write!(f, "Vault database error: {}", msg),
            VaultError::ObfuscationError(msg) => {
                write!(f, "Vault obfuscation error: {}", msg)
            }
            VaultError::NotFound(id) => write!(f, "Vault entry not found: {}", id),
        }
    }
}

impl std::error::Error for VaultError {}

// === PreferencesError ===

/// Errors related to generator preference persistence.
#[derive(Debug)]
pub enum PreferencesError {
    /// An I/O error occurred while reading or writing preferences.
    IoError(String),
    /// Failed to serialize or deserialize preferences.
    SerializationError(String),
}

impl fmt::Display for PreferencesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PreferencesError::IoError(msg) => write!(f, "Preferences I/O error: {}", msg),
            PreferencesError::SerializationError(msg) => {
                write!(f, "Preferences serialization error: {}", msg)
            }
        }
    }
}

impl std::error::Error for PreferencesError {}
