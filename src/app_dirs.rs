use directories::ProjectDirs;
use std::path::PathBuf;

const APP_NAME: &str = "speedkey";

/// Centralized application directory resolution
pub struct AppDirs;

impl AppDirs {
    pub fn config_path() -> PathBuf {
        ProjectDirs::from("", "", APP_NAME)
            .map(|pd| pd.config_dir().join("config.json"))
            .unwrap_or_else(|| PathBuf::from("speedkey_config.json"))
    }

    pub fn log_path() -> Option<PathBuf> {
        if let Ok(home) = std::env::var("HOME") {
            let state_dir = PathBuf::from(home)
                .join(".local")
                .join("state")
                .join(APP_NAME);
            Some(state_dir.join("speedkey.log"))
        } else {
            ProjectDirs::from("", "", APP_NAME)
                .map(|proj_dirs| proj_dirs.data_local_dir().join("speedkey.log"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_use_app_file_names() {
        assert_eq!(
            AppDirs::config_path().file_name().and_then(|n| n.to_str()),
            Some("config.json")
        );
        if let Some(log) = AppDirs::log_path() {
            assert!(log.ends_with("speedkey.log"));
        }
    }
}
