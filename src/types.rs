//! Shared data structures for the well spacing pipeline
//!
//! This module defines the types flowing through the spacing engine:
//! - Input: `WellRecord` (supplied by the ingestion collaborator)
//! - Internal: `WellLocation` with an optional projected `PlanarPoint`
//! - Output: `SpacedWell` (record + optional `NeighborMetrics`),
//!   `SpacingSummary` (batch-level statistics)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Unit Constants
// ============================================================================

/// Geodetic and unit-conversion constants shared across the engine
pub mod units {
    /// Feet in one statute mile
    pub const FEET_PER_MILE: f64 = 5_280.0;
    /// Mean Earth radius in meters (spherical model)
    pub const EARTH_RADIUS_M: f64 = 6_371_000.0;
    /// International feet per meter
    pub const FEET_PER_METER: f64 = 3.280_839_9;
    /// Feet subtended by one degree of arc on the mean sphere
    pub const FEET_PER_DEGREE: f64 =
        EARTH_RADIUS_M * std::f64::consts::PI / 180.0 * FEET_PER_METER;
}

// ============================================================================
// Input Contract
// ============================================================================

/// One well as delivered by the upstream ingestion step.
///
/// `api10` is the 10-character API well identifier and keys every join
/// in the pipeline; it must be unique within a batch. Surface
/// coordinates may be absent or garbage — the engine validates them
/// and excludes bad ones rather than rejecting the record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WellRecord {
    /// 10-character API well identifier (unique per batch)
    pub api10: String,
    /// Surface hole latitude in degrees, if reported
    pub surface_latitude: Option<f64>,
    /// Surface hole longitude in degrees, if reported
    pub surface_longitude: Option<f64>,
    /// Whether the wellbore is drilled horizontally
    pub is_horizontal: bool,
}

impl WellRecord {
    /// Convenience constructor for a well with known coordinates.
    pub fn new(
        api10: impl Into<String>,
        latitude: f64,
        longitude: f64,
        is_horizontal: bool,
    ) -> Self {
        Self {
            api10: api10.into(),
            surface_latitude: Some(latitude),
            surface_longitude: Some(longitude),
            is_horizontal,
        }
    }
}

// ============================================================================
// Internal Geometry
// ============================================================================

/// A projected surface location in local planar feet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlanarPoint {
    /// East offset from the batch origin (ft)
    pub x_ft: f64,
    /// North offset from the batch origin (ft)
    pub y_ft: f64,
}

impl PlanarPoint {
    /// Squared Euclidean distance to another point (ft²).
    ///
    /// Comparisons stay in squared feet; callers take the square root
    /// only when a distance leaves the engine as a metric value.
    #[must_use]
    pub fn distance_sq_ft(&self, other: &Self) -> f64 {
        let dx = self.x_ft - other.x_ft;
        let dy = self.y_ft - other.y_ft;
        dx * dx + dy * dy
    }

    /// Euclidean distance to another point (ft).
    #[must_use]
    pub fn distance_ft(&self, other: &Self) -> f64 {
        self.distance_sq_ft(other).sqrt()
    }
}

/// A validated well: the input record's identity and classification
/// plus its projected location, when one exists.
///
/// Immutable once constructed; `projected` is `None` for wells whose
/// coordinates failed validation (missing, zero, non-finite, or out of
/// range).
#[derive(Debug, Clone)]
pub struct WellLocation {
    pub api10: String,
    pub is_horizontal: bool,
    pub projected: Option<PlanarPoint>,
}

// ============================================================================
// Output Contract
// ============================================================================

/// Spacing metrics for one horizontal well with valid coordinates.
///
/// Missing is modeled with `Option`, never a numeric sentinel: a well
/// with no measurable neighbor has `None` for the distance metrics but
/// a genuine `0` count and `0.0` density.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NeighborMetrics {
    /// Distance to the nearest other horizontal well (ft);
    /// `None` when no other horizontal well exists
    pub distance_to_nearest_horizontal_ft: Option<f64>,
    /// Other horizontal wells within one mile
    pub horizontal_wells_within_1mi: u32,
    /// Mean distance to the up-to-3 nearest horizontal wells (ft);
    /// `None` when no other horizontal well exists
    pub avg_distance_to_3_nearest_ft: Option<f64>,
    /// Neighbors within the density radius divided by the search
    /// area, in wells per square mile
    pub well_density_score: f64,
}

/// One well in the engine's output: the unchanged input record plus
/// its spacing metrics.
///
/// `spacing` is `None` for non-horizontal wells and for wells whose
/// coordinates failed validation — the explicit missing marker the
/// persistence layer writes through as NULL columns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpacedWell {
    pub record: WellRecord,
    pub spacing: Option<NeighborMetrics>,
}

// ============================================================================
// Batch Summary
// ============================================================================

/// Batch-level statistics reported alongside the augmented wells.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpacingSummary {
    /// Wells in the input batch
    pub total_wells: usize,
    /// Wells classified as horizontal
    pub horizontal_wells: usize,
    /// Horizontal wells with valid coordinates (entered the index)
    pub indexed_wells: usize,
    /// Wells excluded for missing/invalid coordinates
    pub invalid_coordinate_wells: usize,
    /// Mean nearest-neighbor distance over wells where one exists (ft)
    pub avg_distance_to_nearest_ft: Option<f64>,
    /// Mean density score over wells with computed metrics
    pub avg_density_score: Option<f64>,
    /// When the batch was computed
    pub computed_at: DateTime<Utc>,
}

/// Full result of a spacing run: augmented wells plus the summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpacingOutput {
    pub wells: Vec<SpacedWell>,
    pub summary: SpacingSummary,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_same_point_is_zero() {
        let p = PlanarPoint { x_ft: 120.0, y_ft: -40.0 };
        assert_eq!(p.distance_ft(&p), 0.0);
    }

    #[test]
    fn test_distance_pythagorean_triple() {
        let a = PlanarPoint { x_ft: 0.0, y_ft: 0.0 };
        let b = PlanarPoint { x_ft: 3000.0, y_ft: 4000.0 };
        assert_eq!(a.distance_ft(&b), 5000.0);
        assert_eq!(b.distance_ft(&a), 5000.0);
    }

    #[test]
    fn test_feet_per_degree_magnitude() {
        // One degree of arc on the mean sphere is roughly 69 miles
        let miles = units::FEET_PER_DEGREE / units::FEET_PER_MILE;
        assert!(
            (68.0..70.0).contains(&miles),
            "expected ~69 mi/degree, got {miles}"
        );
    }
}
