//! Cloud configuration
//!
//! Constructed explicitly by the host, or deserialized from a settings file.
//! `validate` runs before a config is ever applied to a cloud.

use serde::{Deserialize, Serialize};

use crate::error::{CloudError, Result};
use crate::renderer::Color;

/// Opacity floor used when none is configured (30 of 255)
pub const DEFAULT_MIN_OPACITY: f64 = 30.0 / 255.0;

/// Drop shadow drawn behind each label
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextShadow {
    pub blur_radius: f64,
    pub dx: f64,
    pub dy: f64,
    pub color: Color,
}

impl Default for TextShadow {
    fn default() -> Self {
        Self {
            blur_radius: 5.0,
            dx: 0.0,
            dy: 5.0,
            color: Color::White,
        }
    }
}

/// Text styling shared by every label
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextStyle {
    pub color: Color,
    pub shadow: Option<TextShadow>,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            color: Color::Black,
            shadow: None,
        }
    }
}

/// Geometry and styling of a word cloud
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CloudConfig {
    /// Sphere radius in surface units
    pub radius: f64,
    /// Text size of a label facing the viewer
    pub max_text_size: f64,
    /// Lower bound of the size/opacity factor, in (0, 1]
    pub min_factor: f64,
    /// Labels per latitude ring
    pub labels_per_ring: u32,
    /// Opacity never drops below this, whatever the factor
    pub min_opacity: f64,
    pub style: TextStyle,
}

impl Default for CloudConfig {
    fn default() -> Self {
        Self {
            radius: 200.0,
            max_text_size: 120.0,
            min_factor: 0.2,
            labels_per_ring: 7,
            min_opacity: DEFAULT_MIN_OPACITY,
            style: TextStyle::default(),
        }
    }
}

impl CloudConfig {
    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    pub fn with_max_text_size(mut self, size: f64) -> Self {
        self.max_text_size = size;
        self
    }

    pub fn with_min_factor(mut self, min_factor: f64) -> Self {
        self.min_factor = min_factor;
        self
    }

    pub fn with_labels_per_ring(mut self, count: u32) -> Self {
        self.labels_per_ring = count;
        self
    }

    pub fn with_min_opacity(mut self, opacity: f64) -> Self {
        self.min_opacity = opacity;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.style.color = color;
        self
    }

    pub fn with_shadow(mut self, shadow: TextShadow) -> Self {
        self.style.shadow = Some(shadow);
        self
    }

    /// Reject values that would divide by zero or produce a degenerate cloud
    pub fn validate(&self) -> Result<()> {
        if !(self.radius.is_finite() && self.radius > 0.0) {
            return Err(CloudError::InvalidRadius(self.radius));
        }
        if !(self.max_text_size.is_finite() && self.max_text_size > 0.0) {
            return Err(CloudError::InvalidTextSize(self.max_text_size));
        }
        if !(self.min_factor > 0.0 && self.min_factor <= 1.0) {
            return Err(CloudError::InvalidMinFactor(self.min_factor));
        }
        if self.labels_per_ring == 0 {
            return Err(CloudError::InvalidLabelsPerRing(self.labels_per_ring));
        }
        if !(0.0..=1.0).contains(&self.min_opacity) {
            return Err(CloudError::InvalidOpacity(self.min_opacity));
        }
        Ok(())
    }

    /// Side length the cloud wants when unconstrained
    pub fn preferred_extent(&self) -> f64 {
        2.0 * self.radius + self.max_text_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = CloudConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.labels_per_ring, 7);
        assert_eq!(config.preferred_extent(), 520.0);
    }

    #[test]
    fn test_zero_labels_per_ring_rejected() {
        let config = CloudConfig::default().with_labels_per_ring(0);
        assert_eq!(config.validate(), Err(CloudError::InvalidLabelsPerRing(0)));
    }

    #[test]
    fn test_min_factor_range() {
        for bad in [0.0, -0.1, 1.01, f64::NAN] {
            let result = CloudConfig::default().with_min_factor(bad).validate();
            assert!(matches!(result, Err(CloudError::InvalidMinFactor(_))), "{bad}");
        }
        assert!(CloudConfig::default().with_min_factor(1.0).validate().is_ok());
    }

    #[test]
    fn test_radius_and_text_size_must_be_positive() {
        assert!(matches!(
            CloudConfig::default().with_radius(0.0).validate(),
            Err(CloudError::InvalidRadius(_))
        ));
        assert!(matches!(
            CloudConfig::default().with_radius(f64::INFINITY).validate(),
            Err(CloudError::InvalidRadius(_))
        ));
        assert!(matches!(
            CloudConfig::default().with_max_text_size(-3.0).validate(),
            Err(CloudError::InvalidTextSize(_))
        ));
    }

    #[test]
    fn test_opacity_floor_range() {
        assert!(CloudConfig::default().with_min_opacity(0.0).validate().is_ok());
        assert!(matches!(
            CloudConfig::default().with_min_opacity(1.5).validate(),
            Err(CloudError::InvalidOpacity(_))
        ));
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: CloudConfig = toml::from_str(
            r##"
            radius = 80.0
            labels_per_ring = 5

            [style]
            color = "#336699"

            [style.shadow]
            blur_radius = 2.0
            dx = 1.0
            dy = 1.0
            color = "dark_grey"
            "##,
        )
        .unwrap();

        assert_eq!(config.radius, 80.0);
        assert_eq!(config.labels_per_ring, 5);
        assert_eq!(config.max_text_size, 120.0);
        assert_eq!(config.style.color, Color::Rgb(0x33, 0x66, 0x99));
        assert_eq!(config.style.shadow.unwrap().color, Color::DarkGrey);
    }

    #[test]
    fn test_bad_color_fails_deserialization() {
        let result: std::result::Result<CloudConfig, _> = toml::from_str(
            r#"
            [style]
            color = "not-a-color"
            "#,
        );
        assert!(result.is_err());
    }
}
