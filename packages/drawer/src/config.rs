//! # Drawer configuration: `drawer.toml`
//!
//! Tunables for layering, motion and viewport classification. Every section
//! and field has a default, so a missing or empty file is equivalent to
//! [`DrawerConfig::default`].
//!
//! ```toml
//! [layering]
//! base_z_index = 1000
//! step = 10
//!
//! [motion]
//! initial_scale = 0.95
//! initial_opacity = 0.0
//! stiffness = 300.0
//! damping = 25.0
//! mass = 1.0
//! notice_scale = 1.05
//! notice_duration_secs = 0.06
//!
//! [viewport]
//! mobile_max_width = 768
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DrawerConfig {
    #[serde(default)]
    pub layering: LayeringConfig,
    #[serde(default)]
    pub motion: MotionConfig,
    #[serde(default)]
    pub viewport: ViewportConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayeringConfig {
    /// z-index of the bottom-most drawer.
    pub base_z_index: u32,
    /// z-index gap between stacked dialogs.
    pub step: u32,
}

impl Default for LayeringConfig {
    fn default() -> Self {
        Self {
            base_z_index: 1000,
            step: 10,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    pub initial_scale: f32,
    pub initial_opacity: f32,
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
    pub notice_scale: f32,
    pub notice_duration_secs: f32,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            initial_scale: 0.95,
            initial_opacity: 0.0,
            stiffness: 300.0,
            damping: 25.0,
            mass: 1.0,
            notice_scale: 1.05,
            notice_duration_secs: 0.06,
        }
    }
}

impl MotionConfig {
    /// Replace NaN and infinite values with their defaults.
    pub fn sanitized(self) -> Self {
        let defaults = Self::default();
        let finite = |value: f32, fallback: f32| if value.is_finite() { value } else { fallback };
        Self {
            initial_scale: finite(self.initial_scale, defaults.initial_scale),
            initial_opacity: finite(self.initial_opacity, defaults.initial_opacity),
            stiffness: finite(self.stiffness, defaults.stiffness),
            damping: finite(self.damping, defaults.damping),
            mass: finite(self.mass, defaults.mass),
            notice_scale: finite(self.notice_scale, defaults.notice_scale),
            notice_duration_secs: finite(self.notice_duration_secs, defaults.notice_duration_secs),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportConfig {
    /// Viewports narrower than this (in CSS pixels) render drawers as sheets.
    pub mobile_max_width: u32,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            mobile_max_width: 768,
        }
    }
}

impl DrawerConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "drawer.toml"
    }

    /// Builder method to set the base z-index.
    pub fn with_base_z_index(mut self, z: u32) -> Self {
        self.layering.base_z_index = z;
        self
    }

    /// Builder method to set the mobile breakpoint.
    pub fn with_mobile_max_width(mut self, px: u32) -> Self {
        self.viewport.mobile_max_width = px;
        self
    }

    /// Parse from TOML string. Non-finite motion values fall back to defaults.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(s)?;
        config.motion = config.motion.sanitized();
        Ok(config)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Read and parse a config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_toml(&text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_is_default() {
        assert_eq!(DrawerConfig::from_toml("").unwrap(), DrawerConfig::default());
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let config = DrawerConfig::from_toml("[motion]\nnotice_scale = 1.1\n").unwrap();
        assert_eq!(config.motion.notice_scale, 1.1);
        assert_eq!(config.motion.notice_duration_secs, 0.06);
        assert_eq!(config.layering, LayeringConfig::default());
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = DrawerConfig::default()
            .with_base_z_index(50)
            .with_mobile_max_width(600);
        let text = config.to_toml().unwrap();
        assert_eq!(DrawerConfig::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[layering]\nbase_z_index = 2000").unwrap();
        let config = DrawerConfig::load(file.path()).unwrap();
        assert_eq!(config.layering.base_z_index, 2000);
        assert_eq!(config.layering.step, 10);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = DrawerConfig::load(dir.path().join(DrawerConfig::filename())).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_non_finite_motion_values_use_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[motion]\ndamping = nan\nnotice_duration_secs = inf\nstiffness = 200.0").unwrap();
        let config = DrawerConfig::load(file.path()).unwrap();
        let defaults = MotionConfig::default();
        assert_eq!(config.motion.damping, defaults.damping);
        assert_eq!(config.motion.notice_duration_secs, defaults.notice_duration_secs);
        assert_eq!(config.motion.stiffness, 200.0);
    }

    #[test]
    fn test_load_bad_toml_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[viewport]\nmobile_max_width = \"wide\"").unwrap();
        let err = DrawerConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
