//! Application configuration persisted as JSON in the app directory.

use crate::backend::paths::get_app_dir;
use crate::backend::routing::RootBehavior;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    pub routing: RoutingConfig,
    pub window: WindowSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RoutingConfig {
    /// What the root path `/` does: render the intro landing page, or
    /// immediately send the user to the login page.
    pub root_page: RootPage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RootPage {
    #[default]
    Intro,
    Login,
}

impl RootPage {
    pub const fn behavior(self) -> RootBehavior {
        match self {
            Self::Intro => RootBehavior::Intro,
            Self::Login => RootBehavior::RedirectToLogin,
        }
    }
}

impl fmt::Display for RootPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Intro => write!(f, "intro"),
            Self::Login => write!(f, "login"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowSettings {
    pub width: u32,
    pub height: u32,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 832,
        }
    }
}

impl AppConfig {
    /// Gets the path to the config file.
    pub fn get_config_path() -> PathBuf {
        get_app_dir()
            .unwrap_or_else(|_| PathBuf::from("HRDesk"))
            .join("config.json")
    }

    /// Loads the config from disk, falling back to defaults when the file is
    /// missing or unreadable.
    pub fn load_or_default() -> Self {
        let config_path = Self::get_config_path();

        match std::fs::read_to_string(&config_path) {
            Ok(json) => serde_json::from_str(&json).unwrap_or_else(|e| {
                log::warn!("invalid config at {}: {e}", config_path.display());
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    /// Saves the config to disk.
    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::get_config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, json)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_root_page_is_intro() {
        let config = AppConfig::default();
        assert_eq!(config.routing.root_page, RootPage::Intro);
        assert_eq!(config.routing.root_page.behavior(), RootBehavior::Intro);
    }

    #[test]
    fn parses_login_root_variant() {
        let json = r#"{ "routing": { "root_page": "login" }, "window": { "width": 1024, "height": 768 } }"#;
        let config: AppConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.routing.root_page, RootPage::Login);
        assert_eq!(
            config.routing.root_page.behavior(),
            RootBehavior::RedirectToLogin
        );
        assert_eq!(config.window.width, 1024);
    }

    #[test]
    fn config_round_trips() {
        let config = AppConfig {
            routing: RoutingConfig {
                root_page: RootPage::Login,
            },
            window: WindowSettings::default(),
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: AppConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.routing.root_page, RootPage::Login);
    }
}
