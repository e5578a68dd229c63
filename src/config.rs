//! App Configuration
//!
//! Static settings embedded at build time from `config/app.json`.

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const EMBEDDED_CONFIG: &str = include_str!("../config/app.json");

/// Upper bound for the screen fade, anything longer reads as lag
const MAX_TRANSITION_MS: u32 = 2_000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileField {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileConfig {
    /// Asset path of the profile picture
    pub image: String,
    pub image_alt: String,
    pub fields: Vec<ProfileField>,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        let field = |label: &str, value: &str| ProfileField {
            label: label.to_string(),
            value: value.to_string(),
        };
        Self {
            image: "public/profile.svg".to_string(),
            image_alt: "Foto Profil".to_string(),
            fields: vec![
                field("Nama", "ANGGUN WELDIANA PUTRI"),
                field("NIM", "2311523040"),
                field("TTL", "Koto Baru, 14 Agustus 2004"),
                field("Hobi", "Menggambar"),
                field("Peminatan", "Seni"),
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub drawer_title: String,
    /// Screen fade duration
    pub transition_ms: u32,
    /// `log` level filter name
    pub log_level: String,
    pub profile: ProfileConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            drawer_title: "Menu Aplikasi".to_string(),
            transition_ms: 300,
            log_level: "info".to_string(),
            profile: ProfileConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Embedded config, or defaults if it doesn't load
    pub fn load() -> Self {
        match Self::from_json(EMBEDDED_CONFIG) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("[CONFIG] {}, using defaults", e);
                Self::default()
            }
        }
    }

    pub fn log_level(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.transition_ms > MAX_TRANSITION_MS {
            return Err(ConfigError::Invalid(format!(
                "transition_ms {} exceeds {}",
                self.transition_ms, MAX_TRANSITION_MS
            )));
        }
        if let Some(field) = self.profile.fields.iter().find(|f| f.label.trim().is_empty()) {
            return Err(ConfigError::Invalid(format!(
                "profile field with value `{}` has no label",
                field.value
            )));
        }
        Ok(())
    }
}

/// Get the config from context
pub fn use_config() -> StoredValue<AppConfig> {
    expect_context::<StoredValue<AppConfig>>()
}
