//! `config.toml` loading.
//!
//! The config is optional. Any problem with it leaves the host running on
//! [`ShopLinkerConfig::default()`] rather than refusing to start.

use std::path::{Path, PathBuf};

use shoplinker_types::config::ShopLinkerConfig;

pub const CONFIG_FILE: &str = "config.toml";

/// Read `{data_dir}/config.toml`.
///
/// An absent file is the normal case and is silent. A file that cannot be
/// read or does not match [`ShopLinkerConfig`] is reported and ignored
/// wholesale; no field is taken from a half-valid file.
pub fn load_config(data_dir: &Path) -> ShopLinkerConfig {
    let path = data_dir.join(CONFIG_FILE);

    let parsed = std::fs::read_to_string(&path)
        .map_err(|err| err.to_string())
        .and_then(|text| toml::from_str::<ShopLinkerConfig>(&text).map_err(|err| err.to_string()));

    match parsed {
        Ok(config) => {
            tracing::debug!(path = %path.display(), admins = config.admins.len(), "config loaded");
            config
        }
        Err(_) if !path.exists() => {
            tracing::debug!(path = %path.display(), "no config file, built-in settings apply");
            ShopLinkerConfig::default()
        }
        Err(reason) => {
            tracing::warn!(path = %path.display(), %reason, "ignoring config file");
            ShopLinkerConfig::default()
        }
    }
}

/// Resolve the shop file path: absolute `shops_file` values are used as-is,
/// relative ones are joined onto the data directory.
pub fn resolve_shops_path(data_dir: &Path, config: &ShopLinkerConfig) -> PathBuf {
    let configured = Path::new(&config.shops_file);
    if configured.is_absolute() {
        configured.to_path_buf()
    } else {
        data_dir.join(configured)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shoplinker_types::shop::OwnerId;
    use tempfile::TempDir;

    #[test]
    fn load_config_missing_file_returns_default() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(tmp.path());
        assert_eq!(config, ShopLinkerConfig::default());
    }

    #[test]
    fn load_config_valid_toml_returns_parsed() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(
            tmp.path().join(CONFIG_FILE),
            r#"
shops_file = "survival/shops.json"
admins = ["0f8fad5b-d9cb-469f-a165-70867728950e"]
"#,
        )
        .unwrap();

        let config = load_config(tmp.path());
        assert_eq!(config.shops_file, "survival/shops.json");
        let admin: OwnerId = "0f8fad5b-d9cb-469f-a165-70867728950e".parse().unwrap();
        assert!(config.is_admin(&admin));
    }

    #[test]
    fn load_config_invalid_toml_returns_default() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join(CONFIG_FILE), "this is not { valid toml !!!").unwrap();

        let config = load_config(tmp.path());
        assert_eq!(config, ShopLinkerConfig::default());
    }

    #[test]
    fn load_config_bad_admin_id_returns_default() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join(CONFIG_FILE), r#"admins = ["steve"]"#).unwrap();

        let config = load_config(tmp.path());
        assert!(config.admins.is_empty());
    }

    #[test]
    fn resolve_shops_path_relative_and_absolute() {
        let data_dir = PathBuf::from("/srv/minecraft/.shoplinker");
        let config = ShopLinkerConfig::default();
        assert_eq!(
            resolve_shops_path(&data_dir, &config),
            PathBuf::from("/srv/minecraft/.shoplinker/shoplinker_shops.json")
        );

        let tmp = TempDir::new().unwrap();
        let absolute = tmp.path().join("elsewhere.json");
        let config = ShopLinkerConfig {
            shops_file: absolute.to_string_lossy().into_owned(),
            ..Default::default()
        };
        assert_eq!(resolve_shops_path(&data_dir, &config), absolute);
    }
}
