//! Key-value backed user preferences: theme, hidden overview widgets and
//! the settings document.

mod settings;

use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

pub use settings::{
    NotificationSettings, PreferenceSettings, ProfileSettings, SettingsData, WorkspaceSettings,
};

pub const THEME_KEY: &str = "theme";
pub const HIDDEN_WIDGETS_KEY: &str = "hiddenWidgets";
pub const APP_SETTINGS_KEY: &str = "appSettings";

#[derive(Debug, Error)]
pub enum PrefsError {
    #[error("failed to read preferences file: {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write preferences file: {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("preferences file is not a JSON object of strings: {path}: {source}")]
    Corrupt {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode preference '{key}': {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// String key-value storage in the manner of browser local storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: String) -> Result<(), PrefsError>;
    fn remove(&mut self, key: &str) -> Result<(), PrefsError>;
}

#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), PrefsError> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), PrefsError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// A JSON object file of string values, rewritten on every change.
#[derive(Clone, Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Opens `path`, starting empty when the file does not exist yet.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, PrefsError> {
        let path = path.into();
        let entries = match std::fs::read_to_string(&path) {
            Ok(contents) if contents.trim().is_empty() => BTreeMap::new(),
            Ok(contents) => serde_json::from_str(&contents).map_err(|e| PrefsError::Corrupt {
                path: path.display().to_string(),
                source: e,
            })?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => {
                return Err(PrefsError::Read {
                    path: path.display().to_string(),
                    source: e,
                })
            }
        };
        debug!(path = %path.display(), keys = entries.len(), "opened preferences file");
        Ok(Self { path, entries })
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    fn flush(&self) -> Result<(), PrefsError> {
        let write_err = |e: std::io::Error| PrefsError::Write {
            path: self.path.display().to_string(),
            source: e,
        };
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(write_err)?;
        }
        let body = serde_json::to_vec_pretty(&self.entries).map_err(|e| PrefsError::Encode {
            key: "*".to_string(),
            source: e,
        })?;
        std::fs::write(&self.path, body).map_err(write_err)
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), PrefsError> {
        self.entries.insert(key.to_string(), value);
        self.flush()
    }

    fn remove(&mut self, key: &str) -> Result<(), PrefsError> {
        if self.entries.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }
}

/// The overview page's hideable widgets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Widget {
    #[serde(rename = "quickActions")]
    QuickActions,
    #[serde(rename = "kpis")]
    Kpis,
    #[serde(rename = "revenueChart")]
    RevenueChart,
    #[serde(rename = "trafficChart")]
    TrafficChart,
    #[serde(rename = "activity")]
    Activity,
    #[serde(rename = "products")]
    Products,
}

impl Widget {
    pub const ALL: [Widget; 6] = [
        Widget::QuickActions,
        Widget::Kpis,
        Widget::RevenueChart,
        Widget::TrafficChart,
        Widget::Activity,
        Widget::Products,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Self::QuickActions => "quickActions",
            Self::Kpis => "kpis",
            Self::RevenueChart => "revenueChart",
            Self::TrafficChart => "trafficChart",
            Self::Activity => "activity",
            Self::Products => "products",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::QuickActions => "Quick Actions",
            Self::Kpis => "Key Metrics",
            Self::RevenueChart => "Revenue Chart",
            Self::TrafficChart => "Traffic Sources",
            Self::Activity => "Recent Activity",
            Self::Products => "Top Products",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|w| w.id() == id)
    }
}

/// Typed access to the recognized preference keys. Unreadable stored values
/// fall back to defaults instead of failing.
pub struct Preferences<S> {
    store: S,
}

impl<S: KeyValueStore> Preferences<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn into_inner(self) -> S {
        self.store
    }

    pub fn theme(&self) -> Theme {
        self.store
            .get(THEME_KEY)
            .and_then(|v| Theme::parse(&v))
            .unwrap_or_default()
    }

    pub fn set_theme(&mut self, theme: Theme) -> Result<(), PrefsError> {
        self.store.set(THEME_KEY, theme.as_str().to_string())
    }

    /// Ids that are not known widgets are dropped.
    pub fn hidden_widgets(&self) -> BTreeSet<Widget> {
        let Some(raw) = self.store.get(HIDDEN_WIDGETS_KEY) else {
            return BTreeSet::new();
        };
        match serde_json::from_str::<Vec<String>>(&raw) {
            Ok(ids) => ids.iter().filter_map(|id| Widget::from_id(id)).collect(),
            Err(e) => {
                warn!(error = %e, "ignoring unreadable hidden widget list");
                BTreeSet::new()
            }
        }
    }

    pub fn is_hidden(&self, widget: Widget) -> bool {
        self.hidden_widgets().contains(&widget)
    }

    /// Flips a widget's visibility and returns whether it is now hidden.
    pub fn toggle_widget(&mut self, widget: Widget) -> Result<bool, PrefsError> {
        let mut hidden = self.hidden_widgets();
        let now_hidden = if hidden.remove(&widget) {
            false
        } else {
            hidden.insert(widget);
            true
        };
        self.save_hidden(&hidden)?;
        Ok(now_hidden)
    }

    pub fn show_all_widgets(&mut self) -> Result<(), PrefsError> {
        self.store.remove(HIDDEN_WIDGETS_KEY)
    }

    fn save_hidden(&mut self, hidden: &BTreeSet<Widget>) -> Result<(), PrefsError> {
        let ids: Vec<&str> = hidden.iter().map(|w| w.id()).collect();
        let raw = serde_json::to_string(&ids).map_err(|e| PrefsError::Encode {
            key: HIDDEN_WIDGETS_KEY.to_string(),
            source: e,
        })?;
        self.store.set(HIDDEN_WIDGETS_KEY, raw)
    }

    pub fn settings(&self) -> SettingsData {
        let Some(raw) = self.store.get(APP_SETTINGS_KEY) else {
            return SettingsData::default();
        };
        serde_json::from_str(&raw).unwrap_or_else(|e| {
            warn!(error = %e, "ignoring unreadable app settings");
            SettingsData::default()
        })
    }

    pub fn save_settings(&mut self, settings: &SettingsData) -> Result<(), PrefsError> {
        let raw = serde_json::to_string(settings).map_err(|e| PrefsError::Encode {
            key: APP_SETTINGS_KEY.to_string(),
            source: e,
        })?;
        self.store.set(APP_SETTINGS_KEY, raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_defaults_to_dark_and_ignores_garbage() {
        let mut store = MemoryStore::new();
        store.set(THEME_KEY, "sepia".to_string()).unwrap();
        let mut prefs = Preferences::new(store);
        assert_eq!(prefs.theme(), Theme::Dark);
        prefs.set_theme(Theme::Dark.toggled()).unwrap();
        assert_eq!(prefs.theme(), Theme::Light);
    }

    #[test]
    fn toggling_widgets_round_trips_through_store() {
        let mut prefs = Preferences::new(MemoryStore::new());
        assert!(prefs.toggle_widget(Widget::Kpis).unwrap());
        assert!(prefs.toggle_widget(Widget::Products).unwrap());
        assert!(prefs.is_hidden(Widget::Kpis));
        assert!(!prefs.toggle_widget(Widget::Kpis).unwrap());
        assert!(!prefs.is_hidden(Widget::Kpis));

        let store = prefs.into_inner();
        assert_eq!(store.get(HIDDEN_WIDGETS_KEY).as_deref(), Some(r#"["products"]"#));
    }

    #[test]
    fn unknown_widget_ids_are_dropped() {
        let mut store = MemoryStore::new();
        store
            .set(HIDDEN_WIDGETS_KEY, r#"["kpis","weather"]"#.to_string())
            .unwrap();
        let prefs = Preferences::new(store);
        assert_eq!(
            prefs.hidden_widgets().into_iter().collect::<Vec<_>>(),
            vec![Widget::Kpis]
        );
    }

    #[test]
    fn malformed_settings_fall_back_to_defaults() {
        let mut store = MemoryStore::new();
        store.set(APP_SETTINGS_KEY, "{not json".to_string()).unwrap();
        let prefs = Preferences::new(store);
        assert_eq!(prefs.settings(), SettingsData::default());
    }

    #[test]
    fn file_store_persists_between_opens() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("prefs.json");

        let mut prefs = Preferences::new(FileStore::open(&path).unwrap());
        prefs.set_theme(Theme::Light).unwrap();
        let mut settings = prefs.settings();
        settings.workspace.name = "Globex".to_string();
        prefs.save_settings(&settings).unwrap();

        let reopened = Preferences::new(FileStore::open(&path).unwrap());
        assert_eq!(reopened.theme(), Theme::Light);
        assert_eq!(reopened.settings().workspace.name, "Globex");
    }

    #[test]
    fn corrupt_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        std::fs::write(&path, "[1,2,3]").unwrap();
        assert!(matches!(
            FileStore::open(&path),
            Err(PrefsError::Corrupt { .. })
        ));
    }
}
