use std::path::PathBuf;

use color_eyre::eyre::{
    Context,
    Error,
    OptionExt,
};
use directories::ProjectDirs;
use serde::{
    Serialize,
    de::DeserializeOwned,
};

#[derive(Clone, Debug)]
pub struct AppFiles {
    config_dir: PathBuf,
}

impl AppFiles {
    pub fn new(config_dir: impl Into<PathBuf>) -> Self {
        Self {
            config_dir: config_dir.into(),
        }
    }

    /// Uses the platform's config directory and makes sure it exists.
    pub fn open() -> Result<Self, Error> {
        let project_dirs = ProjectDirs::from("", "", std::env!("CARGO_PKG_NAME"))
            .ok_or_eyre("Could not determine the home directory")?;

        let app_files = Self::new(project_dirs.config_local_dir());
        std::fs::create_dir_all(&app_files.config_dir).with_context(|| {
            format!(
                "Could not create config directory: {}",
                app_files.config_dir.display()
            )
        })?;

        Ok(app_files)
    }

    pub fn config_path(&self) -> PathBuf {
        self.config_dir.join("config.toml")
    }

    /// Read config file, or create one if it doesn't exist yet.
    pub fn read_config_or_create<T>(&self) -> Result<T, Error>
    where
        T: Serialize + DeserializeOwned + Default,
    {
        let path = self.config_path();

        let config = if !path.exists() {
            tracing::info!(path = %path.display(), "Creating config file");
            let config = T::default();
            let toml = toml::to_string_pretty(&config)?;
            std::fs::write(&path, &toml)
                .with_context(|| format!("Could not write config file: {}", path.display()))?;
            config
        }
        else {
            tracing::info!(path = %path.display(), "Reading config file");
            let toml = std::fs::read_to_string(&path)
                .with_context(|| format!("Could not read config file: {}", path.display()))?;

            toml::from_str(&toml)
                .with_context(|| format!("Invalid config file: {}", path.display()))?
        };

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::config::AppConfig;

    #[test]
    fn it_creates_missing_config() {
        let dir = tempfile::tempdir().unwrap();
        let app_files = AppFiles::new(dir.path());

        let config = app_files.read_config_or_create::<AppConfig>().unwrap();
        assert_eq!(config, AppConfig::default());
        assert!(app_files.config_path().exists());

        // second read parses the file just written
        let config = app_files.read_config_or_create::<AppConfig>().unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn it_reads_existing_config() {
        let dir = tempfile::tempdir().unwrap();
        let app_files = AppFiles::new(dir.path());
        std::fs::write(app_files.config_path(), "[diagram]\nextent = 200.0\n").unwrap();

        let config = app_files.read_config_or_create::<AppConfig>().unwrap();
        assert_eq!(config.diagram.extent, 200.0);
    }

    #[test]
    fn it_reports_invalid_config() {
        let dir = tempfile::tempdir().unwrap();
        let app_files = AppFiles::new(dir.path());
        std::fs::write(app_files.config_path(), "[diagram\n").unwrap();

        let error = app_files.read_config_or_create::<AppConfig>().unwrap_err();
        assert!(error.to_string().starts_with("Invalid config file"));
    }
}
