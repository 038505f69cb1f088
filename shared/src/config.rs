use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors for picker configuration values that cannot be laid out
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{field} must be a positive, finite number (got {value})")]
    InvalidDimension { field: &'static str, value: f32 },
}

/// Tunable sizes for the month range picker.
///
/// Every field has a default, so a config file only needs to list the values
/// it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerConfig {
    /// Viewports narrower than this are treated as narrow
    pub narrow_breakpoint: f32,
    /// Popover width on narrow viewports
    pub narrow_popover_width: f32,
    /// Popover width on wide viewports
    pub wide_popover_width: f32,
    /// Width of the quick-select pane on wide viewports
    pub wide_preset_pane_width: f32,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            narrow_breakpoint: 730.0,
            narrow_popover_width: 300.0,
            wide_popover_width: 500.0,
            wide_preset_pane_width: 140.0,
        }
    }
}

impl PickerConfig {
    /// Check that every dimension is usable for layout
    pub fn validate(&self) -> Result<(), ConfigError> {
        let dimensions = [
            ("narrow_breakpoint", self.narrow_breakpoint),
            ("narrow_popover_width", self.narrow_popover_width),
            ("wide_popover_width", self.wide_popover_width),
            ("wide_preset_pane_width", self.wide_preset_pane_width),
        ];

        for (field, value) in dimensions {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidDimension { field, value });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(PickerConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: PickerConfig = serde_json::from_str(r#"{"narrow_breakpoint": 600.0}"#).unwrap();
        assert_eq!(config.narrow_breakpoint, 600.0);
        assert_eq!(config.wide_popover_width, 500.0);
        assert_eq!(config.narrow_popover_width, 300.0);
    }

    #[test]
    fn test_rejects_non_positive_dimensions() {
        let config = PickerConfig {
            wide_popover_width: 0.0,
            ..PickerConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidDimension {
                field: "wide_popover_width",
                value: 0.0
            })
        );
    }

    #[test]
    fn test_rejects_non_finite_dimensions() {
        let config = PickerConfig {
            narrow_breakpoint: f32::NAN,
            ..PickerConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
