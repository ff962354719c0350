//! Client configuration.
//!
//! A single JSON file under the platform config directory holds the backend
//! base URL. Missing or unreadable settings fall back to the default so the
//! widget always starts.

use serde::{Deserialize, Serialize};

pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:5000";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppSettings {
    pub backend_url: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::path::PathBuf;

    use directories_next::ProjectDirs;
    use tokio::fs;

    use super::AppSettings;

    fn settings_path() -> PathBuf {
        let base = if let Some(dirs) = ProjectDirs::from("io", "termchat", "termchat") {
            dirs.config_dir().to_path_buf()
        } else {
            PathBuf::from(".")
        };
        base.join("settings.json")
    }

    impl AppSettings {
        pub async fn load() -> Self {
            Self::load_from(&settings_path()).await
        }

        pub async fn load_from(path: &std::path::Path) -> Self {
            match fs::read_to_string(path).await {
                Ok(data) => serde_json::from_str(&data).unwrap_or_default(),
                Err(_) => Self::default(),
            }
        }

        pub async fn save(&self) -> anyhow::Result<()> {
            self.save_to(&settings_path()).await
        }

        pub async fn save_to(&self, path: &std::path::Path) -> anyhow::Result<()> {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).await?;
            }
            let json = serde_json::to_string_pretty(self)?;
            fs::write(path, json).await?;
            Ok(())
        }
    }
}

#[cfg(target_arch = "wasm32")]
impl AppSettings {
    // No config file in the browser; the default points at the dev backend.
    pub async fn load() -> Self {
        Self::default()
    }

    pub async fn save(&self) -> anyhow::Result<()> {
        Ok(())
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_file_falls_back_to_default() {
        let dir = tempfile::tempdir().unwrap();
        let settings = AppSettings::load_from(&dir.path().join("settings.json")).await;
        assert_eq!(settings, AppSettings::default());
    }

    #[tokio::test]
    async fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");
        let settings = AppSettings {
            backend_url: "http://chat.example:8080".into(),
        };
        settings.save_to(&path).await.unwrap();
        assert_eq!(AppSettings::load_from(&path).await, settings);
    }

    #[tokio::test]
    async fn corrupt_file_falls_back_to_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        tokio::fs::write(&path, "not json").await.unwrap();
        assert_eq!(AppSettings::load_from(&path).await, AppSettings::default());
    }
}
