//! `config` command: show the effective configuration

use std::path::Path;

use anyhow::Result;
use clap::Subcommand;
use colored::*;

use crate::config::{Config, config_path};

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Print the effective configuration as TOML
    Show,
    /// Print the configuration file location
    Path,
}

pub fn handle_config_command(command: ConfigCommands) -> Result<()> {
    print!("{}", render_config_command(command, &config_path())?);
    Ok(())
}

/// Output of a config command for the config file at `path`.
///
/// Only `show` reads the file, so `path` still works when the file does not parse.
fn render_config_command(command: ConfigCommands, path: &Path) -> Result<String> {
    match command {
        ConfigCommands::Show => {
            let config = Config::load_from(path)?;
            let origin = if path.exists() {
                path.display().to_string()
            } else {
                "defaults (no config file)".to_string()
            };
            Ok(format!("# {}\n{}", origin.dimmed(), config.to_toml_string()?))
        }
        ConfigCommands::Path => Ok(format!("{}\n", path.display())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_path_ignores_malformed_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "preview_rows = \"many\"").unwrap();

        let out = render_config_command(ConfigCommands::Path, &path).unwrap();
        assert_eq!(out, format!("{}\n", path.display()));
        assert!(render_config_command(ConfigCommands::Show, &path).is_err());
    }

    #[test]
    fn test_show_without_file_prints_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");

        let out = render_config_command(ConfigCommands::Show, &path).unwrap();
        assert!(out.contains("defaults (no config file)"));
        assert!(out.contains("preview_rows = 20"));
    }
}
