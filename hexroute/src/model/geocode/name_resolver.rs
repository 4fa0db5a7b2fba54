use super::{AddressCache, AddressEntry, CoordKey, NameSummary, ReverseGeocoder};
use crate::model::{spatial::LatLon, HexRouteError};
use indexmap::IndexMap;
use rayon::prelude::*;

/// the two centroids of a route. either may be missing when its cell was
/// never resolved upstream.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EndpointPair {
    pub pickup: Option<LatLon>,
    pub dropoff: Option<LatLon>,
}

/// place names for a route, `None` where no name could be found.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteNames {
    pub pickup: Option<String>,
    pub dropoff: Option<String>,
}

/// names route centroids using a reverse geocoder, memoizing every outcome
/// in an [`AddressCache`] owned by the caller.
///
/// a coordinate is looked up at most once per cache: successes and failures
/// alike are recorded, and failures are never retried.
pub struct NameResolver<'a> {
    geocoder: &'a dyn ReverseGeocoder,
    cache: &'a AddressCache,
    workers: usize,
    precision: u32,
}

impl<'a> NameResolver<'a> {
    pub fn new(
        geocoder: &'a dyn ReverseGeocoder,
        cache: &'a AddressCache,
        workers: usize,
        precision: u32,
    ) -> Self {
        Self {
            geocoder,
            cache,
            workers,
            precision,
        }
    }

    pub fn key(&self, coord: &LatLon) -> CoordKey {
        CoordKey::new(coord, self.precision)
    }

    /// looks up every distinct coordinate not already cached on a pool of
    /// `workers` threads, returning once all lookups have completed.
    ///
    /// the dispatch list is deduplicated by key up front so no two workers
    /// ever look up the same key. returns the number of lookups issued.
    pub fn populate<I>(&self, coords: I) -> Result<usize, HexRouteError>
    where
        I: IntoIterator<Item = LatLon>,
    {
        let mut pending: IndexMap<CoordKey, LatLon> = IndexMap::new();
        for coord in coords {
            let key = self.key(&coord);
            if !self.cache.contains(&key) {
                pending.entry(key).or_insert(coord);
            }
        }
        if pending.is_empty() {
            return Ok(0);
        }
        let pending = pending.into_iter().collect::<Vec<_>>();
        log::info!(
            "querying {} unique centroids with {} workers",
            pending.len(),
            self.workers
        );
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.workers.max(1))
            .build()
            .map_err(|e| HexRouteError::ThreadPoolError(e.to_string()))?;
        pool.install(|| {
            pending
                .par_iter()
                .for_each(|(key, coord)| self.fetch(*key, coord))
        });
        Ok(pending.len())
    }

    /// names both endpoints of every route. all distinct centroids are looked
    /// up first, then names are read back from the cache in a single pass so
    /// that rows sharing a coordinate receive the same outcome.
    pub fn resolve(
        &self,
        endpoints: &[EndpointPair],
    ) -> Result<(Vec<RouteNames>, NameSummary), HexRouteError> {
        let coords = endpoints
            .iter()
            .flat_map(|e| [e.pickup, e.dropoff])
            .flatten()
            .collect::<Vec<_>>();
        let lookups = self.populate(coords.iter().copied())?;

        let name_of = |coord: Option<LatLon>| coord.and_then(|c| self.cache.name(&self.key(&c)));
        let names = endpoints
            .iter()
            .map(|e| RouteNames {
                pickup: name_of(e.pickup),
                dropoff: name_of(e.dropoff),
            })
            .collect::<Vec<_>>();

        let unique = coords
            .iter()
            .map(|c| self.key(c))
            .collect::<std::collections::HashSet<_>>();
        let resolved_coordinates = unique
            .iter()
            .filter(|k| matches!(self.cache.get(k), Some(AddressEntry::Resolved(_))))
            .count();
        let summary = NameSummary {
            rows: endpoints.len(),
            unique_coordinates: unique.len(),
            lookups,
            resolved_coordinates,
            unresolvable_coordinates: unique.len() - resolved_coordinates,
            rows_missing_pickup_name: names.iter().filter(|n| n.pickup.is_none()).count(),
            rows_missing_dropoff_name: names.iter().filter(|n| n.dropoff.is_none()).count(),
        };
        Ok((names, summary))
    }

    fn fetch(&self, key: CoordKey, coord: &LatLon) {
        let entry = match self.geocoder.short_address(coord) {
            Ok(name) => {
                log::debug!("resolved {coord} to '{name}'");
                AddressEntry::Resolved(name)
            }
            Err(e) => {
                log::warn!("error fetching address for {coord}: {e}");
                AddressEntry::Unresolvable
            }
        };
        self.cache.insert(key, entry);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::geocode::GeocodeError;
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Mutex,
    };

    /// names coordinates after their rounded values, failing for some.
    struct FakeGeocoder {
        calls: AtomicUsize,
        requested: Mutex<Vec<LatLon>>,
        timeout_at: Option<LatLon>,
        blank_at: Option<LatLon>,
    }

    impl FakeGeocoder {
        fn new() -> Self {
            Self {
                calls: AtomicUsize::new(0),
                requested: Mutex::new(vec![]),
                timeout_at: None,
                blank_at: None,
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl ReverseGeocoder for FakeGeocoder {
        fn short_address(&self, coord: &LatLon) -> Result<String, GeocodeError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.requested.lock().expect("lock").push(*coord);
            if self.timeout_at == Some(*coord) {
                Err(GeocodeError::Timeout(String::from("operation timed out")))
            } else if self.blank_at == Some(*coord) {
                Err(GeocodeError::EmptyAddress)
            } else {
                Ok(format!("place {:.3},{:.3}", coord.lat, coord.lon))
            }
        }
    }

    const GULSHAN: LatLon = LatLon {
        lat: 23.7806,
        lon: 90.4070,
    };
    const MOTIJHEEL: LatLon = LatLon {
        lat: 23.7330,
        lon: 90.4172,
    };
    const UTTARA: LatLon = LatLon {
        lat: 23.8759,
        lon: 90.3795,
    };

    fn pair(p: LatLon, d: LatLon) -> EndpointPair {
        EndpointPair {
            pickup: Some(p),
            dropoff: Some(d),
        }
    }

    #[test]
    fn test_one_call_per_shared_coordinate() {
        let geocoder = FakeGeocoder::new();
        let cache = AddressCache::new();
        let resolver = NameResolver::new(&geocoder, &cache, 10, 6);
        // 100 rows share a pickup, with jitter below the cache precision
        let endpoints = (0..100)
            .map(|i| {
                let jitter = (i as f64) * 1e-9;
                pair(
                    LatLon::new(GULSHAN.lat + jitter, GULSHAN.lon - jitter),
                    MOTIJHEEL,
                )
            })
            .collect::<Vec<_>>();

        let (names, summary) = resolver.resolve(&endpoints).expect("resolve");
        assert_eq!(geocoder.calls(), 2);
        assert_eq!(summary.unique_coordinates, 2);
        assert_eq!(summary.lookups, 2);
        assert!(names
            .iter()
            .all(|n| n.pickup.as_deref() == Some("place 23.781,90.407")));

        // a second pass is served entirely from the cache
        let (_, again) = resolver.resolve(&endpoints).expect("resolve");
        assert_eq!(again.lookups, 0);
        assert_eq!(geocoder.calls(), 2);
    }

    #[test]
    fn test_timeout_leaves_only_that_name_empty() {
        let mut geocoder = FakeGeocoder::new();
        geocoder.timeout_at = Some(UTTARA);
        let cache = AddressCache::new();
        let resolver = NameResolver::new(&geocoder, &cache, 4, 6);
        let endpoints = vec![
            pair(GULSHAN, MOTIJHEEL),
            pair(UTTARA, GULSHAN),
            pair(MOTIJHEEL, UTTARA),
        ];

        let (names, summary) = resolver.resolve(&endpoints).expect("resolve");
        assert_eq!(names.len(), 3);
        assert!(names[0].pickup.is_some() && names[0].dropoff.is_some());
        assert_eq!(names[1].pickup, None);
        assert!(names[1].dropoff.is_some());
        assert!(names[2].pickup.is_some());
        assert_eq!(names[2].dropoff, None);
        assert_eq!(summary.unresolvable_coordinates, 1);
        assert_eq!(summary.rows_missing_pickup_name, 1);
        assert_eq!(summary.rows_missing_dropoff_name, 1);

        // negative entries are never retried
        let (again, retry) = resolver.resolve(&[pair(UTTARA, GULSHAN)]).expect("resolve");
        assert_eq!(again[0].pickup, None);
        assert_eq!(retry.lookups, 0);
        assert_eq!(geocoder.calls(), 3);
        assert_eq!(cache.get(&resolver.key(&UTTARA)), Some(AddressEntry::Unresolvable));
    }

    #[test]
    fn test_blank_name_is_unresolvable() {
        let mut geocoder = FakeGeocoder::new();
        geocoder.blank_at = Some(MOTIJHEEL);
        let cache = AddressCache::new();
        let resolver = NameResolver::new(&geocoder, &cache, 2, 6);
        let (names, _) = resolver
            .resolve(&[pair(GULSHAN, MOTIJHEEL)])
            .expect("resolve");
        assert!(names[0].pickup.is_some());
        assert_eq!(names[0].dropoff, None);
    }

    #[test]
    fn test_later_resolve_reuses_cached_names() {
        let geocoder = FakeGeocoder::new();
        let cache = AddressCache::new();
        let resolver = NameResolver::new(&geocoder, &cache, 1, 6);
        let (first, _) = resolver.resolve(&[pair(GULSHAN, MOTIJHEEL)]).expect("resolve");
        let nudged = LatLon::new(GULSHAN.lat + 1e-8, GULSHAN.lon);
        let (second, summary) = resolver.resolve(&[pair(nudged, MOTIJHEEL)]).expect("resolve");
        assert_eq!(first, second);
        assert_eq!(summary.lookups, 0);
        assert_eq!(geocoder.calls(), 2);
    }

    #[test]
    fn test_missing_centroids_are_not_looked_up() {
        let geocoder = FakeGeocoder::new();
        let cache = AddressCache::new();
        let resolver = NameResolver::new(&geocoder, &cache, 10, 6);
        let endpoints = vec![EndpointPair {
            pickup: None,
            dropoff: Some(GULSHAN),
        }];
        let (names, summary) = resolver.resolve(&endpoints).expect("resolve");
        assert_eq!(names[0].pickup, None);
        assert!(names[0].dropoff.is_some());
        assert_eq!(summary.unique_coordinates, 1);
        assert_eq!(geocoder.calls(), 1);
    }

    #[test]
    fn test_many_unique_coordinates_each_requested_once() {
        let geocoder = FakeGeocoder::new();
        let cache = AddressCache::new();
        let resolver = NameResolver::new(&geocoder, &cache, 4, 6);
        let coords = (0..50)
            .map(|i| LatLon::new(23.70 + (i as f64) * 0.001, 90.40))
            .collect::<Vec<_>>();
        let dispatched = resolver
            .populate(coords.iter().chain(coords.iter()).copied())
            .expect("populate");
        assert_eq!(dispatched, 50);
        assert_eq!(geocoder.calls(), 50);
        assert_eq!(cache.len(), 50);

        let mut requested = geocoder.requested.lock().expect("lock").clone();
        requested.sort_by(|a, b| a.lat.total_cmp(&b.lat));
        requested.dedup();
        assert_eq!(requested.len(), 50);
    }
}
