use std::path::{Path, PathBuf};

use anyhow::Context;
use toml::{map::Map, Value};

pub const CONFIG_ENV: &str = "BLOG_CONFIG";
pub const DEFAULT_CONFIG_NAME: &str = "Config.toml";

/// Root of the cargo workspace this crate was built in.
pub fn workspace_dir() -> PathBuf {
    // libs/util -> libs -> workspace root
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .ancestors()
        .nth(2)
        .unwrap_or(manifest_dir)
        .to_path_buf()
}

/// `$BLOG_CONFIG` when set, `Config.toml` in the workspace otherwise.
pub fn config_path() -> PathBuf {
    match std::env::var_os(CONFIG_ENV) {
        Some(path) => PathBuf::from(path),
        None => workspace_dir().join(DEFAULT_CONFIG_NAME),
    }
}

pub fn load_config(path: &Path) -> anyhow::Result<Map<String, Value>> {
    let config = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    parse_config(&config)
        .with_context(|| format!("failed to parse {}", path.display()))
}

pub fn parse_config(text: &str) -> anyhow::Result<Map<String, Value>> {
    let config = toml::from_str::<Map<String, Value>>(text)?;

    Ok(config)
}

#[cfg(test)]
mod test {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_workspace_dir_holds_manifest() {
        // Act
        let dir = workspace_dir();

        // Assert
        assert!(dir.join("Cargo.toml").exists());
        assert!(dir.join("libs").is_dir());
    }

    #[test]
    fn test_load_config() {
        // Arrange
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[server]\nport = 9000").unwrap();

        // Act
        let config = load_config(file.path()).unwrap();

        // Assert
        assert_eq!(config["server"]["port"].as_integer(), Some(9000));
    }

    #[test]
    fn test_load_config_missing_file() {
        // Act
        let result = load_config(Path::new("/nonexistent/Config.toml"));

        // Assert
        let message = format!("{:#}", result.unwrap_err());
        assert!(message.contains("failed to read"));
    }

    #[test]
    fn test_config_path_env_override() {
        // Arrange
        std::env::set_var(CONFIG_ENV, "/etc/blog/Config.prod.toml");

        // Act
        let overridden = config_path();
        std::env::remove_var(CONFIG_ENV);
        let fallback = config_path();

        // Assert
        assert_eq!(overridden, PathBuf::from("/etc/blog/Config.prod.toml"));
        assert_eq!(fallback, workspace_dir().join(DEFAULT_CONFIG_NAME));
    }

    #[test]
    fn test_parse_config_rejects_invalid_toml() {
        // Act
        let result = parse_config("[server\nport = ");

        // Assert
        assert!(result.is_err());
    }
}
