//! App Core for Keyhaven.
//!
//! Central struct holding the database handle and all services.

use std::sync::Arc;

use crate::database::connection::Database;
use crate::services::generator::CredentialGenerator;
use crate::services::passphrase::PassphraseAcceptor;
use crate::services::phrase_source::WordlistPhraseSource;
use crate::services::preferences::PreferencesStore;
use crate::services::vault::VaultStore;

/// Central application struct holding all services.
///
/// The default passphrase acceptor runs over the bundled word list; callers
/// needing the hosted backend construct a `PassphraseAcceptor` over a
/// `RemotePhraseSource` themselves.
pub struct App {
    pub db: Arc<Database>,
    pub generator: CredentialGenerator,
    pub acceptor: PassphraseAcceptor<WordlistPhraseSource>,
    pub vault: VaultStore,
    pub preferences: PreferencesStore,
}

impl App {
    /// Creates a new App, opening the database and initializing all services.
    pub fn new(db_path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let db = Arc::new(Database::open(db_path)?);

        let generator = CredentialGenerator::new();
        let acceptor = PassphraseAcceptor::new(WordlistPhraseSource::bundled());
        let vault = VaultStore::new(db.clone());

        let mut preferences = PreferencesStore::new(None);
        {
            use crate::services::preferences::PreferencesStoreTrait;
            let _ = preferences.load();
        }

        Ok(Self {
            db,
            generator,
            acceptor,
            vault,
            preferences,
        })
    }
}
