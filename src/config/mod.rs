use crate::core::classifier::DEFAULT_HOME_OFFICE_LABEL;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use crate::utils::Language;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// 1-based column positions of the export.
///
/// Defaults match the Interflex "Monatsjournal" layout:
/// B = date, E = kommt, G = geht, J = type, L = rule violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Columns {
    pub date: usize,
    pub start: usize,
    pub end: usize,
    pub kind: usize,
    pub violation: usize,
}

impl Default for Columns {
    fn default() -> Self {
        Self {
            date: 2,
            start: 5,
            end: 7,
            kind: 10,
            violation: 12,
        }
    }
}

impl Columns {
    fn validate(&self) -> AppResult<()> {
        let all = [
            ("date", self.date),
            ("start", self.start),
            ("end", self.end),
            ("kind", self.kind),
            ("violation", self.violation),
        ];
        for (name, pos) in all {
            if pos == 0 {
                return Err(AppError::Config(format!(
                    "column '{name}' must be a 1-based position"
                )));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub columns: Columns,
    #[serde(default = "default_home_office_label")]
    pub home_office_label: String,
    /// Sheet name or 0-based index; empty = first sheet.
    #[serde(default)]
    pub sheet: String,
    #[serde(default)]
    pub has_header: bool,
    #[serde(default = "default_csv_delimiter")]
    pub csv_delimiter: String,
    #[serde(default)]
    pub month_language: Language,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
}

fn default_home_office_label() -> String {
    DEFAULT_HOME_OFFICE_LABEL.to_string()
}
fn default_csv_delimiter() -> String {
    ";".to_string()
}
fn default_separator_char() -> String {
    "-".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            columns: Columns::default(),
            home_office_label: default_home_office_label(),
            sheet: String::new(),
            has_header: false,
            csv_delimiter: default_csv_delimiter(),
            month_language: Language::default(),
            separator_char: default_separator_char(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("rworkdays")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".rworkdays")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rworkdays.conf")
    }

    /// Load configuration from `path` (or the default file), or return
    /// defaults if it does not exist.
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        let path = path.map(Path::to_path_buf).unwrap_or_else(Self::config_file);

        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path)?;
        let cfg: Config = serde_yaml::from_str(&content)?;
        cfg.validate()?;
        debug!(path = %path.display(), "config loaded");
        Ok(cfg)
    }

    pub fn validate(&self) -> AppResult<()> {
        self.columns.validate()?;
        if self.home_office_label.trim().is_empty() {
            return Err(AppError::Config(
                "home_office_label must not be empty".to_string(),
            ));
        }
        self.delimiter()?;
        Ok(())
    }

    /// CSV delimiter as a single byte.
    pub fn delimiter(&self) -> AppResult<u8> {
        match self.csv_delimiter.as_bytes() {
            [b] => Ok(*b),
            _ => match self.csv_delimiter.as_str() {
                "\\t" | "tab" => Ok(b'\t'),
                other => Err(AppError::Config(format!(
                    "csv_delimiter must be a single ASCII character, got '{other}'"
                ))),
            },
        }
    }

    pub fn separator(&self) -> char {
        self.separator_char.chars().next().unwrap_or('-')
    }

    /// Write the default configuration to `path` (or the default file).
    /// An existing file is left untouched unless `force` is set.
    pub fn init_all(path: Option<&Path>, force: bool) -> AppResult<PathBuf> {
        let path = path.map(Path::to_path_buf).unwrap_or_else(Self::config_file);

        if path.exists() && !force {
            return Err(AppError::Config(format!(
                "configuration file already exists: {} (use --force to overwrite)",
                path.display()
            )));
        }

        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }

        let yaml = serde_yaml::to_string(&Config::default())?;
        fs::write(&path, yaml)?;
        success(format!("Config file: {}", path.display()));

        Ok(path)
    }
}
