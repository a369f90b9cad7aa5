//! User settings.
//!
//! Settings come from an optional JSON file. When no path is given the file
//! is looked up following the XDG Base Directory specification:
//! `$XDG_CONFIG_HOME/homestead/config.json` or
//! `~/.config/homestead/config.json`. A missing default file simply means
//! default settings.
//!
//! ```json
//! { "lead_days": 7, "range_days": 7, "quantity": 1 }
//! ```

use std::path::{Path, PathBuf};

use jiff::{civil::Date, Span};
use serde::{Deserialize, Serialize};

use crate::{
    error::{PlannerError, Result, ResultExt},
    params::PlanBatch,
};

const CONFIG_FILE: &str = "config.json";

/// Defaults applied when a request leaves things out.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Days from today until the default range starts.
    pub lead_days: i64,
    /// Length of the default range in days.
    pub range_days: i64,
    /// Batch size when none is given.
    pub quantity: i64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            lead_days: 7,
            range_days: 7,
            quantity: 1,
        }
    }
}

impl Settings {
    /// Range used when neither a start nor an end date is supplied:
    /// `[today + lead_days, today + lead_days + range_days]`.
    pub fn default_range(&self, today: Date) -> Result<(Date, Date)> {
        let start = today.checked_add(Span::new().days(self.lead_days))?;
        let end = start.checked_add(Span::new().days(self.range_days))?;
        Ok((start, end))
    }

    /// Fill in the default range when a batch names neither date.
    ///
    /// A batch with only one date is left alone so that validation can
    /// reject it.
    pub fn apply_default_range(&self, mut params: PlanBatch, today: Date) -> Result<PlanBatch> {
        if params.start_date.is_none() && params.end_date.is_none() {
            let (start, end) = self.default_range(today)?;
            params.start_date = Some(start);
            params.end_date = Some(end);
        }
        Ok(params)
    }

    fn check(self) -> Result<Self> {
        if self.lead_days < 0 || self.range_days < 0 {
            return Err(PlannerError::Configuration {
                message: "lead_days and range_days must not be negative".to_string(),
            });
        }
        // Default ranges stay within ten years of today.
        if self.lead_days > 3_650 || self.range_days > 3_650 {
            return Err(PlannerError::Configuration {
                message: "lead_days and range_days must be at most 3650".to_string(),
            });
        }
        if self.quantity < 1 {
            return Err(PlannerError::Configuration {
                message: "quantity must be at least 1".to_string(),
            });
        }
        Ok(self)
    }
}

/// Builder for loading [`Settings`].
#[derive(Debug, Clone, Default)]
pub struct SettingsBuilder {
    config_path: Option<PathBuf>,
}

impl SettingsBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an explicit settings file. Unlike the XDG default, an explicit
    /// file must exist.
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.config_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Loads and checks the settings.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::FileSystem` if an explicit file cannot be read
    /// Returns `PlannerError::Configuration` if the file is malformed or holds
    /// out-of-range values
    pub fn build(self) -> Result<Settings> {
        let path = match self.config_path {
            Some(path) => path,
            None => match Self::default_config_path() {
                Some(path) => path,
                None => return Ok(Settings::default()),
            },
        };

        let contents = std::fs::read_to_string(&path).map_err(|e| PlannerError::FileSystem {
            path: path.clone(),
            source: e,
        })?;

        let settings: Settings = serde_json::from_str(&contents)
            .config_context(format!("Invalid settings file '{}'", path.display()))?;

        settings.check()
    }

    /// Returns the settings file from the XDG config directories, if one
    /// exists.
    fn default_config_path() -> Option<PathBuf> {
        xdg::BaseDirectories::with_prefix("homestead").find_config_file(CONFIG_FILE)
    }
}
