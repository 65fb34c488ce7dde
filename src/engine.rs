//! Neighbor query engine: the spacing computation over one batch
//!
//! Pipeline (one pass, no stage re-entry):
//! 1. Reject the batch on duplicate API10s
//! 2. Validate coordinates, project about the batch origin
//! 3. Build the immutable grid index from horizontal wells
//! 4. Parallel map over horizontal wells: four metrics per well from
//!    index queries (the index is read-only, so this phase shares
//!    nothing mutable and needs no locks)
//! 5. Hash-join metrics back onto the full collection and summarize
//!
//! Each well's metrics depend only on the index, never on another
//! well's results, so evaluation order is irrelevant and the output
//! is identical for any input permutation.

use std::collections::HashMap;

use chrono::Utc;
use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::error::SpacingError;
use crate::index::{GridIndex, IndexedWell};
use crate::merge::join_metrics;
use crate::params::SpacingParams;
use crate::projection::{centroid, valid_surface_coordinates, LocalProjector};
use crate::types::{
    NeighborMetrics, PlanarPoint, SpacingOutput, SpacingSummary, WellLocation, WellRecord,
};

/// Compute spacing features for a batch with the default thresholds
/// (1-mile count radius, 2-mile density radius, k=3).
///
/// # Errors
/// [`SpacingError::DuplicateApi10`] when two wells share an
/// identifier; the batch is rejected whole.
pub fn compute_spacing_features(wells: Vec<WellRecord>) -> Result<SpacingOutput, SpacingError> {
    compute_spacing_features_with(wells, &SpacingParams::default())
}

/// Compute spacing features with caller-supplied thresholds.
///
/// # Errors
/// [`SpacingError::InvalidParams`] for malformed thresholds,
/// [`SpacingError::DuplicateApi10`] for a batch with repeated
/// identifiers.
pub fn compute_spacing_features_with(
    wells: Vec<WellRecord>,
    params: &SpacingParams,
) -> Result<SpacingOutput, SpacingError> {
    params.validate()?;
    reject_duplicate_api10s(&wells)?;

    let locations = project_batch(&wells, params);
    let invalid_coordinate_wells = locations.iter().filter(|l| l.projected.is_none()).count();
    let horizontal_wells = locations.iter().filter(|l| l.is_horizontal).count();

    let index = GridIndex::build(
        locations
            .iter()
            .filter(|l| l.is_horizontal)
            .filter_map(|l| {
                l.projected.map(|point| IndexedWell { api10: l.api10.clone(), point })
            })
            .collect(),
        params.count_radius_ft,
    );

    info!(
        total_wells = wells.len(),
        horizontal_wells,
        indexed_wells = index.len(),
        invalid_coordinate_wells,
        "computing well spacing features"
    );
    if index.is_empty() && !wells.is_empty() {
        warn!("no horizontal wells with valid coordinates; all spacing metrics will be missing");
    }

    // Pure parallel map: every query touches only the shared
    // immutable index.
    let metrics: HashMap<String, NeighborMetrics> = locations
        .par_iter()
        .filter(|l| l.is_horizontal)
        .filter_map(|l| {
            l.projected
                .map(|point| (l.api10.clone(), compute_well_metrics(&index, &point, &l.api10, params)))
        })
        .collect();

    let summary = summarize(&wells, &metrics, horizontal_wells, invalid_coordinate_wells, &index);
    let wells = join_metrics(wells, metrics);

    info!(
        wells_with_metrics = summary.indexed_wells,
        "well spacing features computed"
    );

    Ok(SpacingOutput { wells, summary })
}

/// The four spacing metrics for one horizontal well.
fn compute_well_metrics(
    index: &GridIndex,
    point: &PlanarPoint,
    api10: &str,
    params: &SpacingParams,
) -> NeighborMetrics {
    let nearest = index.nearest(point, params.avg_neighbor_count, api10);

    let distance_to_nearest_horizontal_ft = nearest.first().map(|n| n.distance_ft);
    let avg_distance_to_3_nearest_ft = if nearest.is_empty() {
        None
    } else {
        Some(nearest.iter().map(|n| n.distance_ft).sum::<f64>() / nearest.len() as f64)
    };

    let horizontal_wells_within_1mi =
        index.within_radius(point, params.count_radius_ft, api10).len() as u32;

    let density_neighbors = index.within_radius(point, params.density_radius_ft, api10).len();
    let well_density_score = density_neighbors as f64 / params.density_area_sq_mi();

    NeighborMetrics {
        distance_to_nearest_horizontal_ft,
        horizontal_wells_within_1mi,
        avg_distance_to_3_nearest_ft,
        well_density_score,
    }
}

/// Fail fast when any API10 appears more than once; every downstream
/// join keys on it.
fn reject_duplicate_api10s(wells: &[WellRecord]) -> Result<(), SpacingError> {
    let mut seen: HashMap<&str, usize> = HashMap::with_capacity(wells.len());
    for well in wells {
        *seen.entry(well.api10.as_str()).or_insert(0) += 1;
    }

    let mut duplicates: Vec<String> = seen
        .into_iter()
        .filter(|&(_, count)| count > 1)
        .map(|(api10, _)| api10.to_string())
        .collect();

    if duplicates.is_empty() {
        Ok(())
    } else {
        duplicates.sort_unstable();
        Err(SpacingError::DuplicateApi10 { duplicates })
    }
}

/// Validate and project every well about the batch origin.
fn project_batch(wells: &[WellRecord], params: &SpacingParams) -> Vec<WellLocation> {
    let valid: Vec<(usize, (f64, f64))> = wells
        .iter()
        .enumerate()
        .filter_map(|(i, w)| {
            valid_surface_coordinates(w.surface_latitude, w.surface_longitude)
                .map(|coords| (i, coords))
        })
        .collect();

    let origin = params
        .origin
        .map(|o| (o.latitude, o.longitude))
        .or_else(|| centroid(&valid.iter().map(|&(_, c)| c).collect::<Vec<_>>()));

    let projector = origin.map(|(lat, lon)| LocalProjector::new(lat, lon));

    let mut projected: Vec<Option<PlanarPoint>> = vec![None; wells.len()];
    if let Some(projector) = projector {
        for &(i, (lat, lon)) in &valid {
            projected[i] = Some(projector.project(lat, lon));
        }
    }

    wells
        .iter()
        .zip(projected)
        .map(|(w, point)| {
            if point.is_none() {
                debug!(api10 = %w.api10, "excluding well with invalid surface coordinates");
            }
            WellLocation {
                api10: w.api10.clone(),
                is_horizontal: w.is_horizontal,
                projected: point,
            }
        })
        .collect()
}

fn summarize(
    wells: &[WellRecord],
    metrics: &HashMap<String, NeighborMetrics>,
    horizontal_wells: usize,
    invalid_coordinate_wells: usize,
    index: &GridIndex,
) -> SpacingSummary {
    // Averages accumulate in API10 order so the summary is identical
    // for any permutation of the input batch.
    let mut keyed: Vec<(&str, &NeighborMetrics)> =
        metrics.iter().map(|(k, v)| (k.as_str(), v)).collect();
    keyed.sort_unstable_by_key(|&(k, _)| k);

    let nearest_distances: Vec<f64> = keyed
        .iter()
        .filter_map(|(_, m)| m.distance_to_nearest_horizontal_ft)
        .collect();
    let avg_distance_to_nearest_ft = if nearest_distances.is_empty() {
        None
    } else {
        Some(nearest_distances.iter().sum::<f64>() / nearest_distances.len() as f64)
    };

    let avg_density_score = if keyed.is_empty() {
        None
    } else {
        Some(keyed.iter().map(|(_, m)| m.well_density_score).sum::<f64>() / keyed.len() as f64)
    };

    SpacingSummary {
        total_wells: wells.len(),
        horizontal_wells,
        indexed_wells: index.len(),
        invalid_coordinate_wells,
        avg_distance_to_nearest_ft,
        avg_density_score,
        computed_at: Utc::now(),
    }
}
