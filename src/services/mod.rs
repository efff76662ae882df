// Keyhaven services
// Services provide core functionality: generation, entropy scoring,
// passphrase acceptance, obfuscation, vault storage, and preferences.

pub mod denylist;
pub mod entropy;
pub mod generator;
pub mod obfuscation;
pub mod passphrase;
pub mod phrase_source;
pub mod preferences;
pub mod vault;
