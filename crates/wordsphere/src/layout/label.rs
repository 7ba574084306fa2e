//! A text label placed on the sphere

use serde::Serialize;

use crate::spatial::{project, Point3D};

/// A word positioned on the sphere surface
///
/// Angles are stored normalized. `position` and `factor` are always the
/// projection of the stored angles, so a label is never observed half updated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Label {
    pub text: String,
    /// Polar angle in `[0, 180)` degrees
    pub latitude: f64,
    /// Azimuth in `[0, 360)` degrees
    pub longitude: f64,
    pub position: Point3D,
    /// Size/opacity multiplier in `[min_factor, 1.0]`
    pub factor: f64,
}

impl Label {
    /// Create a label at the given angles
    pub fn new(
        text: impl Into<String>,
        radius: f64,
        latitude: f64,
        longitude: f64,
        min_factor: f64,
    ) -> Self {
        let mut label = Self {
            text: text.into(),
            latitude: 0.0,
            longitude: 0.0,
            position: Point3D::ORIGIN,
            factor: min_factor,
        };
        label.place(radius, latitude, longitude, min_factor);
        label
    }

    /// Move the label to absolute angles and re-project it
    pub fn place(&mut self, radius: f64, latitude: f64, longitude: f64, min_factor: f64) {
        let projection = project(radius, latitude, longitude, min_factor);
        self.latitude = projection.latitude;
        self.longitude = projection.longitude;
        self.position = projection.position;
        self.factor = projection.factor;
    }

    /// Offset the label's angles and re-project it
    pub fn advance(&mut self, radius: f64, latitude_offset: f64, longitude_offset: f64, min_factor: f64) {
        self.place(
            radius,
            self.latitude + latitude_offset,
            self.longitude + longitude_offset,
            min_factor,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_normalizes_angles() {
        let label = Label::new("hi", 100.0, 200.0, 725.0, 0.2);
        assert_eq!(label.text, "hi");
        assert_eq!(label.latitude, 20.0);
        assert_eq!(label.longitude, 5.0);
        assert!((label.position.magnitude() - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_advance_wraps_longitude() {
        let mut label = Label::new("x", 100.0, 90.0, 359.5, 0.2);
        label.advance(100.0, 0.0, 1.0, 0.2);
        assert!((label.longitude - 0.5).abs() < 1e-9);
        assert_eq!(label.latitude, 90.0);
    }

    #[test]
    fn test_advance_folds_latitude_past_bottom_pole() {
        let mut label = Label::new("x", 100.0, 179.0, 0.0, 0.2);
        label.advance(100.0, 2.0, 0.0, 0.2);
        assert!((label.latitude - 1.0).abs() < 1e-9);
    }
}
