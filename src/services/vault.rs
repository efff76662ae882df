//! Vault store for Keyhaven.
//!
//! Persists a user's saved credential entries in SQLite. Secrets are
//! obfuscated with the owning account's derived key before they reach the
//! database and only turned back into plaintext on an explicit reveal.

use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use rusqlite::params;
use uuid::Uuid;

use crate::database::connection::Database;
use crate::services::obfuscation::{self, ObfuscationKey};
use crate::types::credential::VaultEntry;
use crate::types::errors::VaultError;

/// Trait defining vault storage operations.
pub trait VaultStoreTrait {
    fn save_entry(
        &mut self,
        account_id: &str,
        display_name: &str,
        username: Option<&str>,
        secret: &str,
    ) -> Result<String, VaultError>;
    fn list_entries(&self, account_id: &str) -> Result<Vec<VaultEntry>, VaultError>;
    fn search_entries(&self, account_id: &str, query: &str) -> Result<Vec<VaultEntry>, VaultError>;
    fn delete_entry(&mut self, account_id: &str, id: &str) -> Result<(), VaultError>;
    fn reveal_secret(&self, entry: &VaultEntry) -> Result<String, VaultError>;
}

/// Vault store backed by SQLite.
pub struct VaultStore {
    db: Arc<Database>,
}

impl VaultStore {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn now_ts() -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs() as i64
    }

    fn row_to_entry(row: &rusqlite::Row<'_>) -> Result<VaultEntry, rusqlite::Error> {
        Ok(VaultEntry {
            id: row.get(0)?,
            account_id: row.get(1)?,
            display_name: row.get(2)?,
            username: row.get(3)?,
            obfuscated_secret: row.get(4)?,
            created_at: row.get(5)?,
            updated_at: row.get(6)?,
        })
    }
}

impl VaultStoreTrait for VaultStore {
    /// Obfuscates and inserts a new entry, returning its generated id.
    ///
    /// Entries are never updated in place; replacing a credential is a
    /// delete followed by a fresh save.
    fn save_entry(
        &mut self,
        account_id: &str,
        display_name: &str,
        username: Option<&str>,
        secret: &str,
    ) -> Result<String, VaultError> {
        if account_id.is_empty() {
            return Err(VaultError::MissingField("account_id"));
        }
        if display_name.trim().is_empty() {
            return Err(VaultError::MissingField("display_name"));
        }
        if secret.is_empty() {
            return Err(VaultError::MissingField("secret"));
        }

        let key = ObfuscationKey::derive(account_id)
            .map_err(|e| VaultError::ObfuscationError(e.to_string()))?;
        let blob = obfuscation::obfuscate(secret, &key)
            .map_err(|e| VaultError::ObfuscationError(e.to_string()))?;

        let id = Uuid::new_v4().to_string();
        let now = Self::now_ts();

        self.db
            .connection()
            .execute(
                "INSERT INTO vault_entries (id, account_id, display_name, username, obfuscated_secret, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                params![id, account_id, display_name, username, blob, now, now],
            )
            .map_err(|e| VaultError::DatabaseError(e.to_string()))?;

        Ok(id)
    }

    /// Lists an account's entries, newest first. Secrets stay obfuscated.
    fn list_entries(&self, account_id: &str) -> Result<Vec<VaultEntry>, VaultError> {
        let conn = self.db.connection();
        let mut stmt = conn
            .prepare(
                "SELECT id, account_id, display_name, username, obfuscated_secret, created_at, updated_at FROM vault_entries WHERE account_id = ?1 ORDER BY updated_at DESC, rowid DESC",
            )
            .map_err(|e| VaultError::DatabaseError(e.to_string()))?;

        let entries = stmt
            .query_map(params![account_id], |row| Self::row_to_entry(row))
            .map_err(|e| VaultError::DatabaseError(e.to_string()))?;

        let mut result = Vec::new();
        for entry in entries {
            result.push(entry.map_err(|e| VaultError::DatabaseError(e.to_string()))?);
        }
        Ok(result)
    }

    /// Case-insensitive substring filter over display names.
    fn search_entries(&self, account_id: &str, query: &str) -> Result<Vec<VaultEntry>, VaultError> {
        let needle = query.to_lowercase();
        let entries = self.list_entries(account_id)?;
        Ok(entries
            .into_iter()
            .filter(|entry| entry.display_name.to_lowercase().contains(&needle))
            .collect())
    }

    /// Deletes one of the account's entries. Deleting an id that does not
    /// exist for this account fails with `NotFound`.
    fn delete_entry(&mut self, account_id: &str, id: &str) -> Result<(), VaultError> {
        let changed = self
            .db
            .connection()
            .execute(
                "DELETE FROM vault_entries WHERE id = ?1 AND account_id = ?2",
                params![id, account_id],
            )
            .map_err(|e| VaultError::DatabaseError(e.to_string()))?;

        if changed == 0 {
            return Err(VaultError::NotFound(id.to_string()));
        }
        Ok(())
    }

    /// Deobfuscates an entry's secret using the key derived from its own
    /// account id.
    fn reveal_secret(&self, entry: &VaultEntry) -> Result<String, VaultError> {
        let key = ObfuscationKey::derive(&entry.account_id)
            .map_err(|e| VaultError::ObfuscationError(e.to_string()))?;
        obfuscation::deobfuscate(&entry.obfuscated_secret, &key)
            .map_err(|e| VaultError::ObfuscationError(e.to_string()))
    }
}
