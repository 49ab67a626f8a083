use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::error::SettingsError;

pub const SETTINGS_FILE: &str = "settings.conf";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormSettings {
    pub asset_pair: String,
    /// Current market price in øre.
    pub market_price_ore: i64,
    pub window_title: String,
}

impl Default for FormSettings {
    fn default() -> Self {
        Self {
            asset_pair: "BTC/NOK".to_string(),
            market_price_ore: 56_389_045,
            window_title: "Limit-ordre".to_string(),
        }
    }
}

/// The per-user config file; the only place settings are read from.
pub fn default_settings_path() -> Option<PathBuf> {
    ProjectDirs::from("no", "limitordre", "order_form")
        .map(|dirs| dirs.config_dir().join(SETTINGS_FILE))
}

impl FormSettings {
    /// Read settings from `path`. A missing file yields the defaults; the
    /// file is never written back.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let mut settings = Self::default();
        if !path.exists() {
            tracing::info!(path = %path.display(), "no settings file; using defaults");
            return Ok(settings);
        }

        let file = File::open(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        for (idx, line) in BufReader::new(file).lines().enumerate() {
            let line = line.map_err(|source| SettingsError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            if let Err(e) = settings.apply_line(idx + 1, &line) {
                tracing::warn!(path = %path.display(), "ignoring setting: {e}");
            }
        }

        tracing::info!(path = %path.display(), ?settings, "settings loaded");
        Ok(settings)
    }

    // key=value; blank lines and `#` comments are skipped, unknown keys ignored
    fn apply_line(&mut self, line_no: usize, line: &str) -> Result<(), SettingsError> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(());
        }
        let Some((k, v)) = line.split_once('=') else {
            return Ok(());
        };
        let k = k.trim();
        let v = v.trim();

        let invalid = || SettingsError::InvalidValue {
            line: line_no,
            key: k.to_string(),
            value: v.to_string(),
        };

        match k {
            "asset_pair" => {
                if v.is_empty() {
                    return Err(invalid());
                }
                self.asset_pair = v.to_string();
            }
            "market_price_ore" => {
                self.market_price_ore = v.parse::<i64>().map_err(|_| invalid())?;
            }
            "window_title" => {
                if v.is_empty() {
                    return Err(invalid());
                }
                self.window_title = v.to_string();
            }
            _ => {}
        }
        Ok(())
    }
}
