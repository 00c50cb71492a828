// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use crate::TransportError;
use anyhow::{Context, Result};
use chrono::Duration;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const SETTINGS_FILE: &str = "settings.json";
pub const BOOKINGS_FILE: &str = "bookings.json";

/// Tunables read from `settings.json`. Every field is optional on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Half-width of the window around a booked slot in which the same
    /// vehicle cannot be booked again.
    pub conflict_window_minutes: i64,
    /// How far ahead a booking may be made.
    pub max_advance_months: u32,
    pub tax_rate: f64,
    /// Overrides the default `bookings.json` location.
    pub store_path: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            conflict_window_minutes: 120,
            max_advance_months: 6,
            tax_rate: 0.18,
            store_path: None,
        }
    }
}

impl Settings {
    /// The conflict window as a duration. Negative or out-of-range minute
    /// counts are rejected rather than clamped.
    pub fn conflict_window(&self) -> Result<Duration, TransportError> {
        let minutes = self.conflict_window_minutes;
        if minutes < 0 {
            return Err(TransportError::InvalidSetting(
                "conflict_window_minutes",
                format!("{} is negative", minutes),
            ));
        }
        Duration::try_minutes(minutes).ok_or_else(|| {
            TransportError::InvalidSetting(
                "conflict_window_minutes",
                format!("{} is out of range", minutes),
            )
        })
    }

    pub fn default_path() -> PathBuf {
        crate::get_config_root().join(SETTINGS_FILE)
    }

    /// Loads settings from `path`, falling back to defaults when the file is missing.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("No settings file at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).context("Failed to read settings.json")?;
        let settings: Settings =
            serde_json::from_str(&content).context("Failed to parse settings.json")?;
        settings
            .conflict_window()
            .with_context(|| format!("Invalid settings in {:?}", path))?;
        log::debug!(
            "Loaded settings from {:?} (conflict window {} min)",
            path,
            settings.conflict_window_minutes
        );
        Ok(settings)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).context("Failed to create config directory")?;
            }
        }

        let content = serde_json::to_string_pretty(self).context("Failed to serialize settings")?;
        fs::write(path, content).context("Failed to write settings.json")
    }

    pub fn bookings_path(&self) -> PathBuf {
        self.store_path
            .clone()
            .unwrap_or_else(|| crate::get_config_root().join(BOOKINGS_FILE))
    }
}
