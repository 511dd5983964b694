//! Data directory layout for ShopLinker.
//!
//! Resolves where the config, the shop file, and the local player identity
//! live on disk.

use std::path::{Path, PathBuf};

use anyhow::Context;
use shoplinker_types::shop::OwnerId;

/// File holding the identity used when no `--as` flag or env var is given.
pub const IDENTITY_FILE: &str = "identity";

/// Resolve the data directory from environment or platform defaults.
///
/// Priority:
/// 1. `SHOPLINKER_DATA_DIR` environment variable
/// 2. `~/.shoplinker`
/// 3. `./.shoplinker`
pub fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("SHOPLINKER_DATA_DIR") {
        return PathBuf::from(dir);
    }

    if let Some(home) = dirs::home_dir() {
        return home.join(".shoplinker");
    }

    PathBuf::from(".shoplinker")
}

/// Read the local identity from `{data_dir}/identity`, creating a fresh one
/// on first use.
///
/// An unreadable or unparsable identity file is an error rather than being
/// silently replaced: replacing it would orphan every shop it owns.
pub fn load_or_create_identity(data_dir: &Path) -> anyhow::Result<OwnerId> {
    let path = data_dir.join(IDENTITY_FILE);

    match std::fs::read_to_string(&path) {
        Ok(content) => content
            .parse::<OwnerId>()
            .with_context(|| format!("invalid identity in {}", path.display())),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            let id = OwnerId::new();
            std::fs::create_dir_all(data_dir)
                .with_context(|| format!("failed to create {}", data_dir.display()))?;
            std::fs::write(&path, format!("{id}\n"))
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!("Created local identity {id} in {}", path.display());
            Ok(id)
        }
        Err(err) => {
            Err(err).with_context(|| format!("failed to read {}", path.display()))
        }
    }
}
