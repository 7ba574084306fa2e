//! Spherical coordinates to cartesian position and depth factor
//!
//! Angles are in degrees. Latitude is the polar angle measured from the top
//! pole (0° top, 180° bottom), longitude the azimuth around the polar axis.
//! The y axis is the polar axis; longitude 90° faces the viewer (z = -r) and
//! longitude 270° is the far side (z = +r).

use serde::Serialize;

use super::Point3D;

/// Latitudes are folded into `[0, 180)`
pub const LATITUDE_SPAN: f64 = 180.0;

/// Longitudes wrap into `[0, 360)`
pub const LONGITUDE_SPAN: f64 = 360.0;

/// Result of projecting a spherical coordinate
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Projection {
    /// Normalized latitude in degrees
    pub latitude: f64,
    /// Normalized longitude in degrees
    pub longitude: f64,
    /// Cartesian position on the sphere surface
    pub position: Point3D,
    /// Size/opacity multiplier in `[min_factor, 1.0]`
    pub factor: f64,
}

/// Wrap `value` into `[0, modulus)`.
///
/// `rem_euclid` may round up to `modulus` itself for tiny negative inputs,
/// which would break idempotence, so that case folds back to zero.
pub fn normalize_degrees(value: f64, modulus: f64) -> f64 {
    let wrapped = value.rem_euclid(modulus);
    if wrapped >= modulus {
        0.0
    } else {
        wrapped
    }
}

/// Piecewise-linear depth factor of a longitude, clamped below at `min_factor`.
///
/// Peaks at 1.0 for longitude 90° and falls to 0.0 at 270° before clamping.
/// Latitude plays no part: labels near the poles get the same factor as
/// equatorial labels at the same longitude.
pub fn depth_factor(longitude: f64, min_factor: f64) -> f64 {
    let lon = normalize_degrees(longitude, LONGITUDE_SPAN);
    // radians / π, kept in degrees so the peak lands on exactly 1.0
    let turns = lon / 180.0;

    let computed = if lon <= 90.0 {
        turns + 0.5
    } else if lon >= 270.0 {
        turns - 1.5
    } else {
        -turns + 1.5
    };

    computed.max(min_factor)
}

/// Project a spherical coordinate onto a sphere of the given radius
pub fn project(radius: f64, latitude: f64, longitude: f64, min_factor: f64) -> Projection {
    let latitude = normalize_degrees(latitude, LATITUDE_SPAN);
    let longitude = normalize_degrees(longitude, LONGITUDE_SPAN);

    let (sin_lat, cos_lat) = latitude.to_radians().sin_cos();
    let (sin_lon, cos_lon) = longitude.to_radians().sin_cos();

    let position = Point3D::new(
        radius * sin_lat * cos_lon,
        radius * cos_lat,
        -radius * sin_lat * sin_lon,
    );

    Projection {
        latitude,
        longitude,
        position,
        factor: depth_factor(longitude, min_factor),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_normalize_wraps_both_directions() {
        assert_eq!(normalize_degrees(370.0, 360.0), 10.0);
        assert_eq!(normalize_degrees(-90.0, 360.0), 270.0);
        assert_eq!(normalize_degrees(180.0, 180.0), 0.0);
        assert_eq!(normalize_degrees(-1e-20, 180.0), 0.0);
        assert!(normalize_degrees(-1e-20, 180.0) < 180.0);
    }

    #[test]
    fn test_projection_idempotent_under_renormalization() {
        let samples = [
            (-725.0, -1000.0),
            (0.0, 0.0),
            (45.0, 90.0),
            (179.5, 359.5),
            (181.0, 361.0),
            (540.25, 725.75),
        ];
        for (lat, lon) in samples {
            let direct = project(200.0, lat, lon, 0.2);
            let renormalized = project(200.0, lat % 180.0, lon % 360.0, 0.2);
            let twice = project(200.0, direct.latitude, direct.longitude, 0.2);
            assert_eq!(direct, twice, "lat={lat} lon={lon}");
            if lat >= 0.0 && lon >= 0.0 {
                assert_eq!(direct, renormalized, "lat={lat} lon={lon}");
            }
        }
    }

    #[test]
    fn test_points_stay_on_sphere() {
        let radius = 200.0;
        let mut lat = -30.0;
        while lat < 400.0 {
            let mut lon = -45.0;
            while lon < 800.0 {
                let p = project(radius, lat, lon, 0.2);
                let err = (p.position.magnitude_squared() - radius * radius).abs();
                assert!(err < 1e-6, "lat={lat} lon={lon} err={err}");
                lon += 13.0;
            }
            lat += 7.5;
        }
    }

    #[test]
    fn test_axes() {
        // Top pole sits on +y regardless of longitude
        let top = project(10.0, 0.0, 123.0, 0.2);
        assert!((top.position.y - 10.0).abs() < EPS);
        assert!(top.position.x.abs() < EPS);
        assert!(top.position.z.abs() < EPS);

        // Equator, longitude 0 is +x
        let east = project(10.0, 90.0, 0.0, 0.2);
        assert!((east.position.x - 10.0).abs() < EPS);

        // Equator, longitude 90 faces the viewer at -z
        let front = project(10.0, 90.0, 90.0, 0.2);
        assert!((front.position.z + 10.0).abs() < EPS);
        assert_eq!(front.factor, 1.0);
    }

    #[test]
    fn test_factor_peak_and_anchor_values() {
        assert_eq!(depth_factor(90.0, 0.0), 1.0);
        assert_eq!(depth_factor(0.0, 0.0), 0.5);
        assert_eq!(depth_factor(180.0, 0.0), 0.5);
        assert_eq!(depth_factor(270.0, 0.0), 0.0);
        assert!((depth_factor(359.999_999, 0.0) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_factor_continuous_at_breakpoints() {
        for edge in [90.0, 270.0, 360.0] {
            let below = depth_factor(edge - 1e-7, 0.0);
            let above = depth_factor(edge + 1e-7, 0.0);
            assert!((below - above).abs() < 1e-6, "jump at {edge}");
        }
    }

    #[test]
    fn test_factor_non_increasing_away_from_front() {
        // 90 -> 270 through the back
        let mut prev = depth_factor(90.0, 0.0);
        for step in 1..=180 {
            let f = depth_factor(90.0 + step as f64, 0.0);
            assert!(f <= prev + EPS);
            prev = f;
        }

        // 90 -> 0 == 360 -> 270 around the other side
        let mut prev = depth_factor(90.0, 0.0);
        for step in 1..=180 {
            let f = depth_factor(90.0 - step as f64, 0.0);
            assert!(f <= prev + EPS);
            prev = f;
        }
    }

    #[test]
    fn test_factor_clamped_to_min_factor() {
        let back = project(200.0, 90.0, 270.0, 0.2);
        assert_eq!(back.factor, 0.2);

        // The -x side sits halfway between front and back
        let side = project(200.0, 90.0, 180.0, 0.2);
        assert!((side.factor - 0.5).abs() < EPS);

        for lon in 0..360 {
            let f = depth_factor(lon as f64, 0.35);
            assert!((0.35..=1.0).contains(&f), "lon={lon} f={f}");
        }
    }

    #[test]
    fn test_factor_ignores_latitude() {
        let pole = project(200.0, 1.0, 45.0, 0.2);
        let equator = project(200.0, 90.0, 45.0, 0.2);
        assert_eq!(pole.factor, equator.factor);
    }
}
