//! Feature merger: join computed metrics back onto the batch
//!
//! A keyed hash join, O(1) amortized per well, never a positional
//! alignment — the input may arrive in any order and the metrics map
//! only covers horizontal wells with valid coordinates.

use std::collections::HashMap;

use crate::types::{NeighborMetrics, SpacedWell, WellRecord};

/// Attach each well's metrics by API10 lookup, preserving input
/// order. Wells without an entry (vertical, or invalid coordinates)
/// get the explicit missing marker.
#[must_use]
pub fn join_metrics(
    wells: Vec<WellRecord>,
    mut metrics: HashMap<String, NeighborMetrics>,
) -> Vec<SpacedWell> {
    wells
        .into_iter()
        .map(|record| {
            let spacing = metrics.remove(record.api10.as_str());
            SpacedWell { record, spacing }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(count: u32) -> NeighborMetrics {
        NeighborMetrics {
            distance_to_nearest_horizontal_ft: Some(1_000.0),
            horizontal_wells_within_1mi: count,
            avg_distance_to_3_nearest_ft: Some(2_000.0),
            well_density_score: 0.5,
        }
    }

    #[test]
    fn test_join_preserves_input_order() {
        let wells = vec![
            WellRecord::new("4301300003", 40.2, -110.0, true),
            WellRecord::new("4301300001", 40.0, -110.0, false),
            WellRecord::new("4301300002", 40.1, -110.0, true),
        ];
        let mut map = HashMap::new();
        map.insert("4301300003".to_string(), metrics(3));
        map.insert("4301300002".to_string(), metrics(2));

        let joined = join_metrics(wells, map);
        assert_eq!(joined[0].record.api10, "4301300003");
        assert_eq!(joined[1].record.api10, "4301300001");
        assert_eq!(joined[2].record.api10, "4301300002");

        assert_eq!(joined[0].spacing.as_ref().map(|m| m.horizontal_wells_within_1mi), Some(3));
        assert!(joined[1].spacing.is_none());
        assert_eq!(joined[2].spacing.as_ref().map(|m| m.horizontal_wells_within_1mi), Some(2));
    }

    #[test]
    fn test_join_with_empty_metrics() {
        let wells = vec![WellRecord::new("4301300001", 40.0, -110.0, false)];
        let joined = join_metrics(wells, HashMap::new());
        assert_eq!(joined.len(), 1);
        assert!(joined[0].spacing.is_none());
    }
}
