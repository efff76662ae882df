//! Unit tests for the Vault Store.
//!
//! Tests save/list/search/delete/reveal, required-field validation, account
//! isolation, and that stored blobs never hold plaintext.

use std::sync::Arc;

use keyhaven::database::Database;
use keyhaven::services::vault::{VaultStore, VaultStoreTrait};
use keyhaven::types::errors::VaultError;

fn setup() -> VaultStore {
    let db = Arc::new(Database::open_in_memory().unwrap());
    VaultStore::new(db)
}

// ─── Save ───

#[test]
fn test_save_returns_generated_id() {
    let mut vault = setup();
    let id = vault
        .save_entry("acct-1", "GitHub", Some("octocat"), "s3cret!Pass")
        .unwrap();
    assert!(!id.is_empty());
}

#[test]
fn test_save_requires_account_id() {
    let mut vault = setup();
    let result = vault.save_entry("", "GitHub", None, "secret");
    assert!(matches!(result, Err(VaultError::MissingField("account_id"))));
}

#[test]
fn test_save_requires_display_name() {
    let mut vault = setup();
    let result = vault.save_entry("acct-1", "   ", None, "secret");
    assert!(matches!(
        result,
        Err(VaultError::MissingField("display_name"))
    ));
}

#[test]
fn test_save_requires_secret() {
    let mut vault = setup();
    let result = vault.save_entry("acct-1", "GitHub", None, "");
    assert!(matches!(result, Err(VaultError::MissingField("secret"))));
}

#[test]
fn test_save_without_username() {
    let mut vault = setup();
    vault.save_entry("acct-1", "Wifi", None, "hunter2").unwrap();

    let entries = vault.list_entries("acct-1").unwrap();
    assert_eq!(entries.len(), 1);
    assert!(entries[0].username.is_none());
}

#[test]
fn test_save_rejects_wide_secret() {
    let mut vault = setup();
    let result = vault.save_entry("acct-1", "GitHub", None, "пароль");
    assert!(matches!(result, Err(VaultError::ObfuscationError(_))));
}

// ─── List ───

#[test]
fn test_list_returns_saved_entries() {
    let mut vault = setup();
    vault.save_entry("acct-1", "GitHub", Some("octocat"), "p1").unwrap();
    vault.save_entry("acct-1", "Mail", None, "p2").unwrap();

    let entries = vault.list_entries("acct-1").unwrap();
    assert_eq!(entries.len(), 2);
}

#[test]
fn test_list_is_newest_first() {
    let mut vault = setup();
    vault.save_entry("acct-1", "First", None, "p1").unwrap();
    vault.save_entry("acct-1", "Second", None, "p2").unwrap();

    let entries = vault.list_entries("acct-1").unwrap();
    assert_eq!(entries[0].display_name, "Second");
    assert_eq!(entries[1].display_name, "First");
}

#[test]
fn test_list_empty_for_unknown_account() {
    let vault = setup();
    assert!(vault.list_entries("nobody").unwrap().is_empty());
}

#[test]
fn test_list_keeps_secrets_obfuscated() {
    let mut vault = setup();
    vault
        .save_entry("acct-1", "GitHub", None, "s3cret!Pass")
        .unwrap();

    let entries = vault.list_entries("acct-1").unwrap();
    assert_ne!(entries[0].obfuscated_secret, "s3cret!Pass");
}

#[test]
fn test_accounts_are_isolated() {
    let mut vault = setup();
    vault.save_entry("alice", "GitHub", None, "p1").unwrap();
    vault.save_entry("alice", "Mail", None, "p2").unwrap();
    vault.save_entry("bob", "GitHub", None, "p3").unwrap();

    assert_eq!(vault.list_entries("alice").unwrap().len(), 2);
    assert_eq!(vault.list_entries("bob").unwrap().len(), 1);
}

// ─── Search ───

#[test]
fn test_search_matches_substring_case_insensitive() {
    let mut vault = setup();
    vault.save_entry("acct-1", "GitHub", None, "p1").unwrap();
    vault.save_entry("acct-1", "Mail Server", None, "p2").unwrap();

    let hits = vault.search_entries("acct-1", "git").unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].display_name, "GitHub");

    let hits = vault.search_entries("acct-1", "SERVER").unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].display_name, "Mail Server");
}

#[test]
fn test_search_no_match_returns_empty() {
    let mut vault = setup();
    vault.save_entry("acct-1", "GitHub", None, "p1").unwrap();
    assert!(vault.search_entries("acct-1", "bank").unwrap().is_empty());
}

#[test]
fn test_search_empty_query_returns_everything() {
    let mut vault = setup();
    vault.save_entry("acct-1", "GitHub", None, "p1").unwrap();
    vault.save_entry("acct-1", "Mail", None, "p2").unwrap();
    assert_eq!(vault.search_entries("acct-1", "").unwrap().len(), 2);
}

#[test]
fn test_search_respects_account_isolation() {
    let mut vault = setup();
    vault.save_entry("alice", "GitHub", None, "p1").unwrap();
    vault.save_entry("bob", "GitHub", None, "p2").unwrap();

    let hits = vault.search_entries("alice", "github").unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].account_id, "alice");
}

// ─── Delete ───

#[test]
fn test_delete_removes_entry() {
    let mut vault = setup();
    let id = vault.save_entry("acct-1", "GitHub", None, "p1").unwrap();
    assert_eq!(vault.list_entries("acct-1").unwrap().len(), 1);

    vault.delete_entry("acct-1", &id).unwrap();
    assert!(vault.list_entries("acct-1").unwrap().is_empty());
}

#[test]
fn test_delete_unknown_id_fails() {
    let mut vault = setup();
    let result = vault.delete_entry("acct-1", "no-such-id");
    assert!(matches!(result, Err(VaultError::NotFound(_))));
}

#[test]
fn test_delete_cannot_cross_accounts() {
    let mut vault = setup();
    let id = vault.save_entry("alice", "GitHub", None, "p1").unwrap();

    let result = vault.delete_entry("bob", &id);
    assert!(matches!(result, Err(VaultError::NotFound(_))));
    assert_eq!(vault.list_entries("alice").unwrap().len(), 1);
}

// ─── Reveal ───

#[test]
fn test_reveal_returns_original_secret() {
    let mut vault = setup();
    vault
        .save_entry("acct-1", "GitHub", Some("octocat"), "s3cret!Pass")
        .unwrap();

    let entries = vault.list_entries("acct-1").unwrap();
    assert_eq!(vault.reveal_secret(&entries[0]).unwrap(), "s3cret!Pass");
}

#[test]
fn test_reveal_works_per_entry_account() {
    let mut vault = setup();
    vault.save_entry("alice", "GitHub", None, "alice-pass").unwrap();
    vault.save_entry("bob", "GitHub", None, "bob-pass").unwrap();

    let alice_entry = &vault.list_entries("alice").unwrap()[0];
    let bob_entry = &vault.list_entries("bob").unwrap()[0];

    assert_eq!(vault.reveal_secret(alice_entry).unwrap(), "alice-pass");
    assert_eq!(vault.reveal_secret(bob_entry).unwrap(), "bob-pass");
}

#[test]
fn test_reveal_fails_on_corrupted_blob() {
    let mut vault = setup();
    vault.save_entry("acct-1", "GitHub", None, "p1").unwrap();

    let mut entry = vault.list_entries("acct-1").unwrap().remove(0);
    entry.obfuscated_secret = "@@not-base64@@".to_string();

    let result = vault.reveal_secret(&entry);
    assert!(matches!(result, Err(VaultError::ObfuscationError(_))));
}

// ─── Storage shape ───

#[test]
fn test_database_never_stores_plaintext() {
    let db = Arc::new(Database::open_in_memory().unwrap());
    let mut vault = VaultStore::new(Arc::clone(&db));
    vault
        .save_entry("acct-1", "GitHub", None, "s3cret!Pass")
        .unwrap();

    let stored: String = db
        .connection()
        .query_row(
            "SELECT obfuscated_secret FROM vault_entries LIMIT 1",
            [],
            |row| row.get(0),
        )
        .unwrap();

    assert_ne!(stored, "s3cret!Pass");
    assert!(!stored.contains("s3cret"));
}

#[test]
fn test_saved_entry_carries_timestamps() {
    let mut vault = setup();
    vault.save_entry("acct-1", "GitHub", None, "p1").unwrap();

    let entries = vault.list_entries("acct-1").unwrap();
    assert!(entries[0].created_at > 0);
    assert_eq!(entries[0].created_at, entries[0].updated_at);
}
