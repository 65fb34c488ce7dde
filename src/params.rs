//! Spacing thresholds as per-deployment tunables
//!
//! The 1-mile count radius, 2-mile density radius, and k=3 averaging
//! window are fixed business parameters of the original feature set.
//! They are carried in a plain serde-deserializable struct so an
//! integrating pipeline can expose them in its own config file per
//! play/basin; the engine itself reads no files and keeps no global
//! state. `Default` reproduces the original values exactly.

use serde::{Deserialize, Serialize};

use crate::error::SpacingError;
use crate::types::units::FEET_PER_MILE;

/// Default radius for the neighbor count metric: one mile.
pub const DEFAULT_COUNT_RADIUS_FT: f64 = FEET_PER_MILE;

/// Default radius for the density metric: two miles.
pub const DEFAULT_DENSITY_RADIUS_FT: f64 = 2.0 * FEET_PER_MILE;

/// Default number of nearest neighbors in the average-distance metric.
pub const DEFAULT_AVG_NEIGHBOR_COUNT: usize = 3;

/// A fixed geographic reference point for the local projection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReferencePoint {
    pub latitude: f64,
    pub longitude: f64,
}

/// Tunable thresholds for one spacing run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpacingParams {
    /// Radius for the neighbor count metric (ft)
    pub count_radius_ft: f64,
    /// Radius for the density metric (ft)
    pub density_radius_ft: f64,
    /// Nearest neighbors averaged for the mean-distance metric
    pub avg_neighbor_count: usize,
    /// Projection origin; the batch centroid when `None`
    pub origin: Option<ReferencePoint>,
}

impl Default for SpacingParams {
    fn default() -> Self {
        Self {
            count_radius_ft: DEFAULT_COUNT_RADIUS_FT,
            density_radius_ft: DEFAULT_DENSITY_RADIUS_FT,
            avg_neighbor_count: DEFAULT_AVG_NEIGHBOR_COUNT,
            origin: None,
        }
    }
}

impl SpacingParams {
    /// Check the parameters for physically meaningless values.
    ///
    /// # Errors
    /// Returns [`SpacingError::InvalidParams`] naming the first
    /// offending field.
    pub fn validate(&self) -> Result<(), SpacingError> {
        if !self.count_radius_ft.is_finite() || self.count_radius_ft <= 0.0 {
            return Err(SpacingError::InvalidParams {
                reason: format!(
                    "count_radius_ft must be positive and finite, got {}",
                    self.count_radius_ft
                ),
            });
        }
        if !self.density_radius_ft.is_finite() || self.density_radius_ft <= 0.0 {
            return Err(SpacingError::InvalidParams {
                reason: format!(
                    "density_radius_ft must be positive and finite, got {}",
                    self.density_radius_ft
                ),
            });
        }
        if self.avg_neighbor_count == 0 {
            return Err(SpacingError::InvalidParams {
                reason: "avg_neighbor_count must be at least 1".to_string(),
            });
        }
        if let Some(origin) = self.origin {
            if !origin.latitude.is_finite()
                || !origin.longitude.is_finite()
                || origin.latitude.abs() > 90.0
                || origin.longitude.abs() > 180.0
            {
                return Err(SpacingError::InvalidParams {
                    reason: format!(
                        "origin ({}, {}) is not a valid geographic point",
                        origin.latitude, origin.longitude
                    ),
                });
            }
        }
        Ok(())
    }

    /// Area of the density search circle in square miles.
    #[must_use]
    pub fn density_area_sq_mi(&self) -> f64 {
        let radius_mi = self.density_radius_ft / FEET_PER_MILE;
        std::f64::consts::PI * radius_mi * radius_mi
    }
}
