//! Local planar projection of well surface locations
//!
//! Converts geographic (latitude/longitude) coordinates to a local
//! planar system in feet via the equirectangular approximation:
//!
//! ```text
//! x = (lon - origin.lon) · cos(origin.lat) · FEET_PER_DEGREE
//! y = (lat - origin.lat) · FEET_PER_DEGREE
//! ```
//!
//! Well spacing is evaluated over distances of a few miles, where the
//! curvature error of this approximation is negligible. It is NOT
//! valid across extents spanning many degrees of longitude — batches
//! are expected to cover a single state or play.

use crate::types::units::FEET_PER_DEGREE;
use crate::types::PlanarPoint;

/// Validate a pair of optional surface coordinates.
///
/// Returns `Some((lat, lon))` only when both are present, finite,
/// non-zero, and within geographic range (|lat| ≤ 90, |lon| ≤ 180).
/// A zero latitude or longitude is the null-island placeholder used
/// by upstream data vendors for "unknown", not a real well site.
#[must_use]
pub fn valid_surface_coordinates(
    latitude: Option<f64>,
    longitude: Option<f64>,
) -> Option<(f64, f64)> {
    let (lat, lon) = (latitude?, longitude?);
    if !lat.is_finite() || !lon.is_finite() {
        return None;
    }
    if lat == 0.0 || lon == 0.0 {
        return None;
    }
    if lat.abs() > 90.0 || lon.abs() > 180.0 {
        return None;
    }
    Some((lat, lon))
}

/// Centroid of a set of validated (lat, lon) pairs, used as the batch
/// origin when no reference point is configured. `None` for an empty
/// set.
///
/// Summation runs in sorted coordinate order so the origin — and with
/// it every projected point — is bit-identical for any permutation of
/// the input batch.
#[must_use]
pub fn centroid(coordinates: &[(f64, f64)]) -> Option<(f64, f64)> {
    if coordinates.is_empty() {
        return None;
    }
    let mut sorted = coordinates.to_vec();
    sorted.sort_by(|a, b| a.0.total_cmp(&b.0).then_with(|| a.1.total_cmp(&b.1)));

    let n = sorted.len() as f64;
    let (lat_sum, lon_sum) = sorted
        .iter()
        .fold((0.0, 0.0), |(la, lo), &(lat, lon)| (la + lat, lo + lon));
    Some((lat_sum / n, lon_sum / n))
}

/// Equirectangular projector about a fixed local origin.
///
/// The origin's cosine is computed once at construction; projection
/// itself is two multiplies per well.
#[derive(Debug, Clone, Copy)]
pub struct LocalProjector {
    origin_lat: f64,
    origin_lon: f64,
    cos_origin_lat: f64,
}

impl LocalProjector {
    /// Build a projector centered on `(origin_lat, origin_lon)` degrees.
    #[must_use]
    pub fn new(origin_lat: f64, origin_lon: f64) -> Self {
        Self {
            origin_lat,
            origin_lon,
            cos_origin_lat: origin_lat.to_radians().cos(),
        }
    }

    /// Project validated geographic coordinates to local planar feet.
    #[must_use]
    pub fn project(&self, latitude: f64, longitude: f64) -> PlanarPoint {
        PlanarPoint {
            x_ft: (longitude - self.origin_lon) * self.cos_origin_lat * FEET_PER_DEGREE,
            y_ft: (latitude - self.origin_lat) * FEET_PER_DEGREE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_same_point_projects_to_origin() {
        let projector = LocalProjector::new(40.0, -111.0);
        let p = projector.project(40.0, -111.0);
        assert_eq!(p.x_ft, 0.0);
        assert_eq!(p.y_ft, 0.0);
    }

    #[test]
    fn test_distance_known_coordinates() {
        // Salt Lake City to Provo: about 38.4 straight-line miles
        // (~202,800 ft great-circle). Equirectangular error over that
        // span is a small fraction of a percent.
        let projector = LocalProjector::new(40.5, -111.77);
        let slc = projector.project(40.7608, -111.8910);
        let provo = projector.project(40.2338, -111.6585);

        let expected = 202_800.0;
        let actual = slc.distance_ft(&provo);
        assert!(
            (actual - expected).abs() <= expected * 0.02,
            "SLC-Provo distance {actual} ft outside 2% of {expected} ft"
        );
    }

    #[test]
    fn test_one_degree_latitude_is_about_69_miles() {
        let projector = LocalProjector::new(40.0, -111.0);
        let p = projector.project(41.0, -111.0);
        assert_relative_eq!(p.y_ft, FEET_PER_DEGREE, max_relative = 1e-12);
        assert_eq!(p.x_ft, 0.0);
    }

    #[test]
    fn test_longitude_shrinks_with_latitude() {
        // One degree of longitude at 60°N spans half what it does at
        // the equator.
        let at_60 = LocalProjector::new(60.0, 0.0).project(60.0, 1.0);
        assert_relative_eq!(at_60.x_ft, FEET_PER_DEGREE * 0.5, max_relative = 1e-6);
    }

    #[test]
    fn test_invalid_latitude_rejected() {
        assert!(valid_surface_coordinates(Some(91.0), Some(-111.0)).is_none());
        assert!(valid_surface_coordinates(Some(-91.0), Some(-111.0)).is_none());
    }

    #[test]
    fn test_invalid_longitude_rejected() {
        assert!(valid_surface_coordinates(Some(40.0), Some(181.0)).is_none());
        assert!(valid_surface_coordinates(Some(40.0), Some(-181.0)).is_none());
    }

    #[test]
    fn test_nan_and_missing_rejected() {
        assert!(valid_surface_coordinates(Some(f64::NAN), Some(-111.0)).is_none());
        assert!(valid_surface_coordinates(Some(40.0), Some(f64::NAN)).is_none());
        assert!(valid_surface_coordinates(None, Some(-111.0)).is_none());
        assert!(valid_surface_coordinates(Some(40.0), None).is_none());
    }

    #[test]
    fn test_null_island_rejected() {
        assert!(valid_surface_coordinates(Some(0.0), Some(0.0)).is_none());
        assert!(valid_surface_coordinates(Some(0.0), Some(-111.0)).is_none());
        assert!(valid_surface_coordinates(Some(40.0), Some(0.0)).is_none());
    }

    #[test]
    fn test_valid_coordinates_pass_through() {
        assert_eq!(
            valid_surface_coordinates(Some(40.0), Some(-111.0)),
            Some((40.0, -111.0))
        );
    }

    #[test]
    fn test_centroid_of_pairs() {
        let coords = [(40.0, -111.0), (42.0, -113.0)];
        assert_eq!(centroid(&coords), Some((41.0, -112.0)));
        assert_eq!(centroid(&[]), None);
    }
}
