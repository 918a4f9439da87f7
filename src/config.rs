use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::common::Sender;

pub const DEFAULT_CONFIG_PATH: &str = "config/chat.json";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub window_title: String,
    pub window_size: [f32; 2],
    /// Chiều cao tối đa của ô nhập trước khi chuyển sang cuộn
    pub composer_max_height: f32,
    pub local_user: LocalUser,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window_title: "ChatApp".to_string(),
            window_size: [1280.0, 800.0],
            composer_max_height: 120.0,
            local_user: LocalUser::default(),
        }
    }
}

/// Người dùng cục bộ (chủ sở hữu các tin nhắn `is_own`).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LocalUser {
    pub id: String,
    /// Name shown on messages ("You").
    pub name: String,
    pub avatar: Option<String>,
    /// Name shown in the sidebar profile footer.
    pub profile_name: String,
    pub initials: String,
}

impl Default for LocalUser {
    fn default() -> Self {
        Self {
            id: "current".to_string(),
            name: "You".to_string(),
            avatar: Some("/api/placeholder/32/32".to_string()),
            profile_name: "Your Name".to_string(),
            initials: "YU".to_string(),
        }
    }
}

impl LocalUser {
    pub fn sender(&self) -> Sender {
        Sender {
            id: self.id.clone(),
            name: self.name.clone(),
            avatar: self.avatar.clone(),
        }
    }
}

pub fn load_config(path: &str) -> AppConfig {
    let path = Path::new(path);
    match fs::read_to_string(path) {
        Ok(content) => match serde_json::from_str::<AppConfig>(&content) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("Failed to parse config file {}: {err}", path.display());
                AppConfig::default()
            }
        },
        Err(err) => {
            log::info!(
                "Config file {} not found ({err}); using defaults",
                path.display()
            );
            AppConfig::default()
        }
    }
}
