use serde::{Deserialize, Serialize};

use super::Theme;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileSettings {
    pub display_name: String,
    pub email: String,
}

impl Default for ProfileSettings {
    fn default() -> Self {
        Self {
            display_name: "Alex Chen".to_string(),
            email: "alex@example.com".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkspaceSettings {
    pub name: String,
}

impl Default for WorkspaceSettings {
    fn default() -> Self {
        Self {
            name: "Acme Inc".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PreferenceSettings {
    pub language: String,
    pub timezone: String,
    pub date_format: String,
    pub theme: Theme,
}

impl Default for PreferenceSettings {
    fn default() -> Self {
        Self {
            language: "English".to_string(),
            timezone: "Pacific Time (PT)".to_string(),
            date_format: "MM/DD/YYYY".to_string(),
            theme: Theme::Dark,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationSettings {
    pub email: bool,
    pub push: bool,
    pub weekly: bool,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            email: true,
            push: true,
            weekly: true,
        }
    }
}

/// The `appSettings` document. Missing sections load with their defaults.
/// Passwords typed on the security tab are never part of it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsData {
    pub profile: ProfileSettings,
    pub workspace: WorkspaceSettings,
    pub preferences: PreferenceSettings,
    pub notifications: NotificationSettings,
}
