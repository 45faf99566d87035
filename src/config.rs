use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_RELATIVE_PATH: &str = ".config/sound-picker/config.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter {
    pub name: String,
    pub extensions: Vec<String>,
}

impl Filter {
    pub fn new(name: &str, extensions: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            extensions: extensions.iter().map(|ext| ext.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub title: String,
    pub sounds_dir: Option<PathBuf>,
    pub filters: Vec<Filter>,
}

impl Config {
    pub fn path() -> PathBuf {
        let mut path = dirs::home_dir().unwrap_or(PathBuf::from("."));
        path.push(CONFIG_RELATIVE_PATH);
        path
    }

    pub fn load() -> Self {
        Self::load_from(&Self::path())
    }

    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Self::default();
        }

        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) => {
                log::warn!("Failed to read config {}: {err}", path.display());
                return Self::default();
            }
        };

        match toml::from_str::<toml::Value>(&text) {
            Ok(value) => Self::from_toml(value),
            Err(err) => {
                log::warn!("Failed to parse config {}: {err}", path.display());
                Self::default()
            }
        }
    }

    fn from_toml(value: toml::Value) -> Self {
        let default = Config::default();

        let dialog = value.get("dialog").and_then(|d| d.as_table());

        fn get_str(table: Option<&toml::value::Table>, key: &str) -> Option<String> {
            table.and_then(|t| t.get(key)).and_then(|v| v.as_str()).map(str::to_string)
        }

        // An empty [filters] table is honoured and means "no filtering".
        let filters = value.get("filters")
            .and_then(|v| v.as_table())
            .map(|tbl| {
                tbl.iter()
                    .filter_map(|(name, exts)| {
                        let exts = exts.as_array()?;
                        let extensions = exts
                            .iter()
                            .filter_map(|e| e.as_str())
                            .map(|e| e.trim_start_matches('.').to_string())
                            .collect();
                        Some(Filter { name: name.clone(), extensions })
                    })
                    .collect()
            })
            .unwrap_or(default.filters);

        Config {
            title: get_str(dialog, "title").unwrap_or(default.title),
            sounds_dir: get_str(dialog, "sounds_dir")
                .filter(|dir| !dir.is_empty())
                .map(PathBuf::from),
            filters,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: "Select a sound".into(),
            sounds_dir: None,
            filters: vec![
                Filter::new("Sound Files", &["wav", "flac", "ogg", "mp3", "aiff"]),
                Filter::new("All Files", &["*"]),
            ],
        }
    }
}
