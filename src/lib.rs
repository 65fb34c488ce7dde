//! Wellspace: spatial neighbor analysis for oil and gas wells
//!
//! Augments a batch of well records with four "well spacing" features
//! describing each horizontal well's relationship to its neighbors —
//! a key input to drilling economics:
//!
//! - Distance to the nearest other horizontal well (ft)
//! - Count of horizontal wells within one mile
//! - Mean distance to the three nearest horizontal wells (ft)
//! - Density score: wells per square mile within a two-mile radius
//!
//! ## Architecture
//!
//! - **Projection**: equirectangular lat/lon → local planar feet
//! - **Grid Index**: immutable uniform grid; nearest-k and radius
//!   queries with deterministic API10 tie-breaking
//! - **Query Engine**: parallel per-well metric assembly (rayon)
//! - **Merger**: hash join of metrics onto the full collection
//!
//! The crate is a pure, stateless batch library: no I/O, no config
//! files, no persistence. The surrounding ETL pipeline owns parsing,
//! storage, and logging setup; this crate only emits `tracing` events.
//!
//! ## Usage
//!
//! ```ignore
//! use wellspace::{compute_spacing_features, WellRecord};
//!
//! let wells: Vec<WellRecord> = ingest();
//! let output = compute_spacing_features(wells)?;
//! persist(output.wells);
//! tracing::info!(?output.summary, "spacing batch done");
//! ```

pub mod engine;
pub mod error;
pub mod index;
pub mod merge;
pub mod params;
pub mod projection;
pub mod types;

// Re-export the library surface
pub use engine::{compute_spacing_features, compute_spacing_features_with};
pub use error::SpacingError;
pub use params::{ReferencePoint, SpacingParams};
pub use types::{
    NeighborMetrics, PlanarPoint, SpacedWell, SpacingOutput, SpacingSummary, WellRecord,
};
