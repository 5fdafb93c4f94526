use anyhow::{Context, Result};
use drills_core::Config;
use std::{
    env,
    path::{Path, PathBuf},
};
use tracing::info;

/// Name of the file `init` writes
pub const DEFAULT_CONFIG_FILE: &str = ".drills.json";

pub fn init_command(cwd: Option<&Path>, force: bool) -> Result<()> {
    let config_path = write_default_config(cwd, force)?;
    match config_path {
        Some(path) => {
            println!("✅ Created settings: {}", path.display());
            println!("\n📌 Edit the 'guess' section to change the range, attempt limit or seed");
            println!("   Edit the 'atm' section to change the starting balance or currency");
        }
        None => println!("   Use --force to overwrite"),
    }
    Ok(())
}

/// Write the default settings into `cwd` (or the current directory).
///
/// Returns `None` when a settings file exists and `force` is not set.
pub fn write_default_config(cwd: Option<&Path>, force: bool) -> Result<Option<PathBuf>> {
    let project_root = match cwd {
        Some(cwd) => cwd.to_path_buf(),
        None => env::current_dir().context("Failed to get current directory")?,
    };

    let project_root = project_root
        .canonicalize()
        .with_context(|| format!("Failed to canonicalize {}", project_root.display()))?;

    let config_path = project_root.join(DEFAULT_CONFIG_FILE);
    if config_path.exists() && !force {
        println!("❌ Settings already exist at: {}", config_path.display());
        return Ok(None);
    }

    Config::default()
        .save_to_file(&config_path)
        .with_context(|| format!("Failed to write settings to {}", config_path.display()))?;
    info!("Wrote default settings to {}", config_path.display());

    Ok(Some(config_path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_writes_loadable_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_default_config(Some(temp_dir.path()), false)
            .unwrap()
            .unwrap();

        assert!(path.ends_with(DEFAULT_CONFIG_FILE));
        assert_eq!(Config::load_from_file(&path).unwrap(), Config::default());
    }

    #[test]
    fn test_refuses_to_overwrite_without_force() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(DEFAULT_CONFIG_FILE);
        std::fs::write(&path, r#"{ "guess": { "max": 5 } }"#).unwrap();

        assert!(write_default_config(Some(temp_dir.path()), false)
            .unwrap()
            .is_none());
        assert_eq!(Config::load_from_file(&path).unwrap().guess.max, 5);

        write_default_config(Some(temp_dir.path()), true).unwrap();
        assert_eq!(Config::load_from_file(&path).unwrap().guess.max, 100);
    }

    #[test]
    fn test_missing_directory_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("nowhere");
        assert!(write_default_config(Some(&missing), false).is_err());
    }
}
