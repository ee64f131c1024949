use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use serde_with::DeserializeFromStr;
use strum::{Display as StrumDisplay, EnumString};
use thiserror::Error;

use crate::dial::{
    DEFAULT_HANDLE_SIZE, DEFAULT_INNER_DIFF, DEFAULT_OUTER_OFFSET, DEFAULT_RANGE,
    DEFAULT_START_ANGLE, FULL_CIRCLE,
};

/// How the host container is turned relative to its natural frame. The
/// original widget queried the display for this; here the host passes it in
/// with every bounds change.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    DeserializeFromStr,
    EnumString,
    StrumDisplay,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Dial centered vertically, padding on top and bottom.
    #[default]
    #[strum(serialize = "Normal", serialize = "0")]
    Normal,
    /// Dial centered horizontally, padding on left and right.
    #[strum(serialize = "Rotated", serialize = "90", serialize = "270")]
    Rotated,
}

/// Dial parameters fixed at construction. Reconfiguration goes through
/// [`crate::Dial::set_config`] and lands on the next bounds recomputation.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct DialConfig {
    /// Angle the sweep starts from, degrees in [0, 360).
    pub start_angle: f64,
    /// Numeric span a full revolution maps to.
    pub range: f64,
    /// Width and height of the draggable handle.
    pub handle_size: f64,
    /// Gap between the container edge and the outer ring.
    pub outer_offset: f64,
    /// Gap between the outer ring and the inner circle.
    pub inner_diff: f64,
}

impl Default for DialConfig {
    fn default() -> Self {
        Self {
            start_angle: DEFAULT_START_ANGLE,
            range: DEFAULT_RANGE,
            handle_size: DEFAULT_HANDLE_SIZE,
            outer_offset: DEFAULT_OUTER_OFFSET,
            inner_diff: DEFAULT_INNER_DIFF,
        }
    }
}

impl DialConfig {
    /// Checks the parameter invariants the geometry relies on.
    ///
    /// The sweep normalization wraps at most twice, which is only correct
    /// while the start angle sits in [0, 360); out-of-window start angles
    /// are rejected here instead of being silently re-wrapped.
    pub fn validated(self) -> Result<Self, ConfigError> {
        if !self.start_angle.is_finite() || !(0.0..FULL_CIRCLE).contains(&self.start_angle) {
            return Err(ConfigError::StartAngleOutOfWindow(self.start_angle));
        }
        if !self.range.is_finite() || self.range <= 0.0 {
            return Err(ConfigError::InvalidRange(self.range));
        }
        let dimensions = [
            ("handle_size", self.handle_size),
            ("outer_offset", self.outer_offset),
            ("inner_diff", self.inner_diff),
        ];
        for (name, value) in dimensions {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidDimension { name, value });
            }
        }
        Ok(self)
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to determine config directory")]
    ConfigDirNotFound,
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("start angle {0} outside [0, 360)")]
    StartAngleOutOfWindow(f64),
    #[error("range {0} must be finite and positive")]
    InvalidRange(f64),
    #[error("{name} {value} must be finite and non-negative")]
    InvalidDimension { name: &'static str, value: f64 },
}

pub fn get_config_path() -> Result<std::path::PathBuf, ConfigError> {
    let proj_dirs =
        ProjectDirs::from("org", "ringdial", "ringdial").ok_or(ConfigError::ConfigDirNotFound)?;
    Ok(proj_dirs.config_dir().join("config.toml"))
}

pub fn load_config() -> Result<DialConfig, ConfigError> {
    let config_path = get_config_path()?;

    let s = config::Config::builder()
        .add_source(config::File::from(config_path).required(false))
        .add_source(config::Environment::with_prefix("RINGDIAL"))
        .build()?;

    s.try_deserialize::<DialConfig>()?.validated()
}

pub fn load_or_default() -> DialConfig {
    match load_config() {
        Ok(c) => c,
        Err(e) => {
            log::warn!("Falling back to default dial config: {}", e);
            DialConfig::default()
        }
    }
}

pub fn write_default_config() -> Result<std::path::PathBuf, ConfigError> {
    let path = get_config_path()?;
    if let Some(parent) = path.parent() {
        fs_err::create_dir_all(parent)?;
    }
    if !path.exists() {
        fs_err::write(&path, DEFAULT_CONFIG)?;
    }
    Ok(path)
}

const DEFAULT_CONFIG: &str = include_str!("default_config.toml");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orientation_deserialization() {
        let cases = vec![
            ("\"normal\"", Orientation::Normal),
            ("\"Normal\"", Orientation::Normal),
            ("\"NORMAL\"", Orientation::Normal),
            ("\"0\"", Orientation::Normal),
            ("\"rotated\"", Orientation::Rotated),
            ("\"90\"", Orientation::Rotated),
            ("\"270\"", Orientation::Rotated),
        ];

        for (json, expected) in cases {
            let deserialized: Orientation = serde_json::from_str(json).unwrap();
            assert_eq!(deserialized, expected);
        }
    }

    #[test]
    fn test_default_config_template_matches_defaults() {
        let parsed: DialConfig = config::Config::builder()
            .add_source(config::File::from_str(
                DEFAULT_CONFIG,
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(parsed, DialConfig::default());
    }

    #[test]
    fn test_validation_accepts_defaults() {
        assert!(DialConfig::default().validated().is_ok());
    }

    #[test]
    fn test_validation_rejects_out_of_window_start_angle() {
        for start_angle in [-90.0, 360.0, 450.0, f64::NAN] {
            let config = DialConfig {
                start_angle,
                ..Default::default()
            };
            assert!(matches!(
                config.validated(),
                Err(ConfigError::StartAngleOutOfWindow(_))
            ));
        }
    }

    #[test]
    fn test_config_error_wraps_io_errors() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = ConfigError::from(io);

        assert!(matches!(err, ConfigError::Io(_)));
        assert_eq!(err.to_string(), "denied");
    }

    #[test]
    fn test_validation_rejects_bad_range_and_dimensions() {
        let zero_range = DialConfig {
            range: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            zero_range.validated(),
            Err(ConfigError::InvalidRange(_))
        ));

        let negative_handle = DialConfig {
            handle_size: -1.0,
            ..Default::default()
        };
        assert!(matches!(
            negative_handle.validated(),
            Err(ConfigError::InvalidDimension {
                name: "handle_size",
                ..
            })
        ));
    }
}
