use super::{RoutePairKey, ThresholdSummary};
use std::collections::HashSet;

/// the number of rides observed along one directed cell pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteVolume {
    pub key: RoutePairKey,
    pub ride_count: usize,
}

/// route volumes at a single grid resolution, busiest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteVolumes {
    resolution: u8,
    routes: Vec<RouteVolume>,
}

impl RouteVolumes {
    /// sorts the routes by descending ride count. the sort is stable, so
    /// routes with equal counts keep the order they were given in.
    pub fn new(resolution: u8, mut routes: Vec<RouteVolume>) -> RouteVolumes {
        routes.sort_by(|a, b| b.ride_count.cmp(&a.ride_count));
        RouteVolumes { resolution, routes }
    }

    pub fn resolution(&self) -> u8 {
        self.resolution
    }

    pub fn routes(&self) -> &[RouteVolume] {
        &self.routes
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn total_rides(&self) -> usize {
        self.routes.iter().map(|r| r.ride_count).sum()
    }

    pub fn busiest(&self) -> Option<&RouteVolume> {
        self.routes.first()
    }

    /// keeps only the routes with at least `min_rides` rides, reporting
    /// how many routes and rides were removed.
    pub fn filter_min_rides(self, min_rides: usize) -> (RouteVolumes, ThresholdSummary) {
        let routes_before = self.routes.len();
        let rides_before = self.total_rides();
        let routes = self
            .routes
            .into_iter()
            .filter(|r| r.ride_count >= min_rides)
            .collect::<Vec<_>>();
        let retained = RouteVolumes {
            resolution: self.resolution,
            routes,
        };
        let summary = ThresholdSummary {
            min_rides,
            routes_before,
            routes_retained: retained.len(),
            rides_removed: rides_before - retained.total_rides(),
        };
        (retained, summary)
    }

    /// the set of fully resolved route keys. keys with an unresolved endpoint
    /// are left out, so an unparseable preset can never match them.
    pub fn resolved_keys(&self) -> HashSet<RoutePairKey> {
        self.routes
            .iter()
            .map(|r| r.key)
            .filter(RoutePairKey::is_resolved)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::spatial::CellId;

    fn volume(p: u64, d: u64, ride_count: usize) -> RouteVolume {
        RouteVolume {
            key: RoutePairKey::new(CellId::Cell(p), CellId::Cell(d)),
            ride_count,
        }
    }

    #[test]
    fn test_sorted_descending_with_stable_ties() {
        let volumes = RouteVolumes::new(8, vec![volume(1, 2, 3), volume(3, 4, 7), volume(5, 6, 3)]);
        let counts = volumes.routes().iter().map(|r| r.ride_count).collect::<Vec<_>>();
        assert_eq!(counts, vec![7, 3, 3]);
        assert_eq!(volumes.routes()[1].key.pickup, CellId::Cell(1));
        assert_eq!(volumes.routes()[2].key.pickup, CellId::Cell(5));
    }

    #[test]
    fn test_filter_min_rides_is_monotonic() {
        let volumes = RouteVolumes::new(
            8,
            vec![volume(1, 2, 1), volume(2, 3, 4), volume(3, 4, 5), volume(4, 5, 9)],
        );
        let mut previous = usize::MAX;
        for min_rides in 0..12 {
            let (retained, summary) = volumes.clone().filter_min_rides(min_rides);
            assert!(retained.len() <= previous);
            assert_eq!(summary.routes_removed(), volumes.len() - retained.len());
            assert_eq!(
                summary.rides_removed + retained.total_rides(),
                volumes.total_rides()
            );
            previous = retained.len();
        }
    }

    #[test]
    fn test_resolved_keys_exclude_unresolved() {
        let unresolved = RouteVolume {
            key: RoutePairKey::new(CellId::Unresolved, CellId::Cell(2)),
            ride_count: 10,
        };
        let volumes = RouteVolumes::new(8, vec![unresolved, volume(1, 2, 5)]);
        let keys = volumes.resolved_keys();
        assert_eq!(keys.len(), 1);
        assert!(!keys.contains(&unresolved.key));
    }
}
