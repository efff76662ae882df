//! Passphrase Acceptor for Keyhaven.
//!
//! Screens candidate phrases from a [`PhraseSource`] against the denylist,
//! redrawing rejected candidates up to a fixed cap. Each acceptance run
//! carries a token so callers can discard results from superseded runs.

use crate::services::denylist::Denylist;
use crate::services::phrase_source::PhraseSource;
use crate::types::credential::Credential;
use crate::types::errors::PassphraseError;

/// Maximum candidates drawn per acceptance run.
pub const MAX_ATTEMPTS: u32 = 10;

/// Supported word-count range for a phrase request.
pub const MIN_WORDS: u32 = 1;
pub const MAX_WORDS: u32 = 10;

/// Word count used when the caller has no stored preference.
pub const DEFAULT_WORDS: u32 = 3;

/// Identifies one acceptance run. A newer run supersedes every older one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken(u64);

/// A passphrase that cleared the denylist, with its run token and the number
/// of candidates drawn to get it.
#[derive(Debug, Clone)]
pub struct AcceptedPassphrase {
    pub phrase: Credential,
    pub token: RequestToken,
    pub attempts: u32,
}

/// Trait defining passphrase acceptance.
pub trait PassphraseAcceptorTrait {
    fn accept_passphrase(&mut self, num_words: u32)
        -> Result<AcceptedPassphrase, PassphraseError>;
    fn is_current(&self, token: RequestToken) -> bool;
}

/// Acceptance loop over a phrase source and a denylist.
pub struct PassphraseAcceptor<S: PhraseSource> {
    source: S,
    denylist: Denylist,
    generation: u64,
}

impl<S: PhraseSource> PassphraseAcceptor<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            denylist: Denylist::default(),
            generation: 0,
        }
    }

    /// Acceptor with a caller-supplied denylist.
    pub fn with_denylist(source: S, denylist: Denylist) -> Self {
        Self {
            source,
            denylist,
            generation: 0,
        }
    }
}

impl<S: PhraseSource> PassphraseAcceptorTrait for PassphraseAcceptor<S> {
    /// Draws candidates until one clears the denylist.
    ///
    /// Starting a run supersedes every earlier token. A denylisted candidate
    /// is redrawn, up to [`MAX_ATTEMPTS`] in total; a source failure
    /// propagates immediately without another draw.
    fn accept_passphrase(
        &mut self,
        num_words: u32,
    ) -> Result<AcceptedPassphrase, PassphraseError> {
        if !(MIN_WORDS..=MAX_WORDS).contains(&num_words) {
            return Err(PassphraseError::InvalidWordCount(num_words));
        }

        self.generation += 1;
        let token = RequestToken(self.generation);

        for attempt in 1..=MAX_ATTEMPTS {
            let candidate = self
                .source
                .generate_phrase(num_words)
                .map_err(|e| PassphraseError::SourceError(e.to_string()))?;

            if !self.denylist.is_blocked(&candidate) {
                return Ok(AcceptedPassphrase {
                    phrase: Credential::new(candidate),
                    token,
                    attempts: attempt,
                });
            }
        }

        Err(PassphraseError::AttemptsExhausted(MAX_ATTEMPTS))
    }

    /// True while `token` belongs to the most recent run. Callers holding a
    /// result from a superseded run should discard it.
    fn is_current(&self, token: RequestToken) -> bool {
        token == RequestToken(self.generation)
    }
}
