// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! page preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! The configuration is organized into logical sections:
//! - `[general]` - Language
//! - `[hero]` - Hero carousel timing, swipe threshold and slide images
//! - `[testimonials]` - Testimonial carousel interval
//! - `[navigation]` - Sticky navigation threshold and mobile breakpoint
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `HERO_CAROUSEL_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use hero_carousel::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (config, warning) = config::load();
//! if let Some(key) = warning {
//!     eprintln!("falling back to defaults: {key}");
//! }
//!
//! let fade_ms = config.hero.fade_duration_ms.unwrap_or(config::DEFAULT_FADE_DURATION_MS);
//! println!("hero crossfade: {fade_ms} ms");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Hero carousel settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HeroConfig {
    /// Crossfade duration in milliseconds.
    #[serde(
        default = "default_fade_duration_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub fade_duration_ms: Option<u64>,

    /// Full slide cycle (fade included) in milliseconds.
    #[serde(
        default = "default_cycle_duration_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub cycle_duration_ms: Option<u64>,

    /// Delay before the slide heading and buttons appear.
    #[serde(
        default = "default_content_reveal_delay_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub content_reveal_delay_ms: Option<u64>,

    /// Minimum horizontal swipe travel.
    #[serde(
        default = "default_swipe_threshold",
        skip_serializing_if = "Option::is_none"
    )]
    pub swipe_threshold: Option<f32>,

    /// Slide background images, in display order.
    #[serde(default = "default_hero_images")]
    pub images: Vec<PathBuf>,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            fade_duration_ms: default_fade_duration_ms(),
            cycle_duration_ms: default_cycle_duration_ms(),
            content_reveal_delay_ms: default_content_reveal_delay_ms(),
            swipe_threshold: default_swipe_threshold(),
            images: default_hero_images(),
        }
    }
}

/// Testimonial carousel settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TestimonialConfig {
    /// Auto-advance interval in milliseconds.
    #[serde(
        default = "default_testimonial_interval_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub interval_ms: Option<u64>,
}

impl Default for TestimonialConfig {
    fn default() -> Self {
        Self {
            interval_ms: default_testimonial_interval_ms(),
        }
    }
}

/// Navigation bar settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NavigationConfig {
    /// Scroll offset past which the bar is pinned.
    #[serde(
        default = "default_sticky_threshold",
        skip_serializing_if = "Option::is_none"
    )]
    pub sticky_threshold: Option<f32>,

    /// Viewport width at or below which links close the mobile menu.
    #[serde(
        default = "default_mobile_breakpoint",
        skip_serializing_if = "Option::is_none"
    )]
    pub mobile_breakpoint: Option<f32>,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            sticky_threshold: default_sticky_threshold(),
            mobile_breakpoint: default_mobile_breakpoint(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Hero carousel settings.
    #[serde(default)]
    pub hero: HeroConfig,

    /// Testimonial carousel settings.
    #[serde(default)]
    pub testimonials: TestimonialConfig,

    /// Navigation bar settings.
    #[serde(default)]
    pub navigation: NavigationConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_fade_duration_ms() -> Option<u64> {
    Some(DEFAULT_FADE_DURATION_MS)
}

fn default_cycle_duration_ms() -> Option<u64> {
    Some(DEFAULT_CYCLE_DURATION_MS)
}

fn default_content_reveal_delay_ms() -> Option<u64> {
    Some(DEFAULT_CONTENT_REVEAL_DELAY_MS)
}

fn default_swipe_threshold() -> Option<f32> {
    Some(DEFAULT_SWIPE_THRESHOLD)
}

fn default_hero_images() -> Vec<PathBuf> {
    DEFAULT_HERO_IMAGES.iter().map(PathBuf::from).collect()
}

fn default_testimonial_interval_ms() -> Option<u64> {
    Some(DEFAULT_TESTIMONIAL_INTERVAL_MS)
}

fn default_sticky_threshold() -> Option<f32> {
    Some(DEFAULT_STICKY_THRESHOLD)
}

fn default_mobile_breakpoint() -> Option<f32> {
    Some(DEFAULT_MOBILE_BREAKPOINT)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message key explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    log::warn!("ignoring unreadable config {}: {err}", path.display());
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
            },
            hero: HeroConfig {
                fade_duration_ms: Some(1_000),
                cycle_duration_ms: Some(6_000),
                content_reveal_delay_ms: Some(150),
                swipe_threshold: Some(80.0),
                images: vec![PathBuf::from("a.png"), PathBuf::from("b.png")],
            },
            testimonials: TestimonialConfig {
                interval_ms: Some(7_000),
            },
            navigation: NavigationConfig {
                sticky_threshold: Some(120.0),
                mobile_breakpoint: Some(640.0),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        match load_from_path(&config_path) {
            Err(Error::Config(_)) => {}
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[hero]\nfade_duration_ms = 500\n").expect("write config");

        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded.hero.fade_duration_ms, Some(500));
        assert_eq!(loaded.hero.cycle_duration_ms, Some(DEFAULT_CYCLE_DURATION_MS));
        assert_eq!(loaded.hero.images.len(), DEFAULT_HERO_IMAGES.len());
        assert_eq!(loaded.testimonials, TestimonialConfig::default());
        assert_eq!(loaded.navigation, NavigationConfig::default());
    }

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert_eq!(config.general.language, None);
        assert_eq!(config.hero.fade_duration_ms, Some(800));
        assert_eq!(config.hero.cycle_duration_ms, Some(4_000));
        assert_eq!(config.hero.content_reveal_delay_ms, Some(100));
        assert_eq!(config.hero.swipe_threshold, Some(50.0));
        assert_eq!(config.testimonials.interval_ms, Some(5_000));
        assert_eq!(config.navigation.sticky_threshold, Some(100.0));
        assert_eq!(config.navigation.mobile_breakpoint, Some(767.0));
    }

    #[test]
    fn load_with_override_reports_warning_for_corrupt_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[hero\n").expect("write config");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
    }

    #[test]
    fn load_with_override_without_file_is_silent() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn load_with_override_reads_settings_file_in_dir() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();

        let config = Config {
            general: GeneralConfig {
                language: Some("de".to_string()),
            },
            ..Config::default()
        };

        save_to_path(&config, &base_dir.join(CONFIG_FILE)).expect("save config");
        let (loaded, warning) = load_with_override(Some(base_dir));

        assert!(warning.is_none());
        assert_eq!(loaded.general.language.as_deref(), Some("de"));
    }
}
