use std::env;
use std::path::PathBuf;

use serde::Deserialize;
use serde::Serialize;

#[derive(Debug, Default, Deserialize, Serialize, Clone)]
pub struct ConfigFile {
    pub data: Option<String>,
    pub kind: Option<String>,
    pub sample: Option<bool>,
    pub page_size: Option<usize>,
    pub sort: Option<String>,
    pub descending: Option<bool>,
    pub output: Option<String>,
    pub output_format: Option<String>,
    pub export: Option<String>,
    pub no_color: Option<bool>,
}

fn home_dir() -> Option<PathBuf> {
    env::var_os("HOME")
        .map(PathBuf::from)
        .or_else(|| env::var_os("USERPROFILE").map(PathBuf::from))
        .or_else(|| {
            let drive = env::var_os("HOMEDRIVE")?;
            let path = env::var_os("HOMEPATH")?;
            Some(PathBuf::from(drive).join(path))
        })
}

pub fn default_config_path() -> Option<PathBuf> {
    Some(home_dir()?.join(".dashview").join("config.yml"))
}

pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/").or_else(|| path.strip_prefix("~\\")) {
        if let Some(home) = home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}

pub fn expand_tilde_string(path: &str) -> String {
    expand_tilde(path).to_string_lossy().to_string()
}

pub fn load_config(path: &PathBuf, allow_missing: bool) -> Result<ConfigFile, String> {
    match std::fs::read_to_string(path) {
        Ok(contents) => serde_yaml::from_str::<ConfigFile>(&contents)
            .map_err(|e| format!("failed to parse config '{}': {e}", path.display())),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound && allow_missing => {
            Ok(ConfigFile::default())
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            Err(format!("config file not found '{}'", path.display()))
        }
        Err(e) => Err(format!("failed to read config '{}': {e}", path.display())),
    }
}

fn default_config_yaml() -> String {
    r#"# dashview config
#
# Location (default):
#   ~/.dashview/config.yml

# Input (choose one)
# data: ./data/users.json
sample: true
kind: users

# Paging
page_size: 4

# Sorting (optional)
# sort: createdAt
descending: false

# Output (optional)
# output: ./page.json
# output_format: text
# export: ./users.csv

# Output styling
no_color: false
"#
    .to_string()
}

pub fn ensure_default_config_file(path: &PathBuf) -> Result<(), String> {
    if path.exists() {
        return Ok(());
    }
    let parent = path
        .parent()
        .ok_or_else(|| format!("invalid config path '{}'", path.display()))?;
    std::fs::create_dir_all(parent).map_err(|e| {
        format!(
            "failed to create config directory '{}': {e}",
            parent.display()
        )
    })?;
    let contents = default_config_yaml();
    std::fs::write(path, contents)
        .map_err(|e| format!("failed to write config file '{}': {e}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_parses() {
        let cfg: ConfigFile = serde_yaml::from_str(&default_config_yaml()).unwrap();
        assert_eq!(cfg.kind.as_deref(), Some("users"));
        assert_eq!(cfg.page_size, Some(4));
        assert_eq!(cfg.sample, Some(true));
        assert!(cfg.data.is_none());
    }

    #[test]
    fn ensure_default_config_file_writes_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".dashview").join("config.yml");
        ensure_default_config_file(&path).unwrap();
        std::fs::write(&path, "kind: reports\n").unwrap();
        ensure_default_config_file(&path).unwrap();
        let cfg = load_config(&path, false).unwrap();
        assert_eq!(cfg.kind.as_deref(), Some("reports"));
    }

    #[test]
    fn missing_config_is_error_unless_allowed() {
        let path = PathBuf::from("/nonexistent/dashview/config.yml");
        assert!(load_config(&path, false).is_err());
        assert!(load_config(&path, true).unwrap().kind.is_none());
    }

    #[test]
    fn bad_yaml_names_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yml");
        std::fs::write(&path, "page_size: [oops\n").unwrap();
        let err = load_config(&path, false).unwrap_err();
        assert!(err.contains("failed to parse config"));
    }
}
