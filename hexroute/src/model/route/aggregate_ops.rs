use super::{AggregationSummary, RideRecord, RouteVolume, RouteVolumes};
use crate::model::{route::RoutePairKey, spatial::SpatialIndex};
use indexmap::IndexMap;

/// buckets rides into directed cell pairs at some resolution and counts them.
///
/// both endpoints are quantized independently. a ride with an endpoint that
/// fails to quantize is still counted, under a key holding
/// [`crate::model::spatial::CellId::Unresolved`], so the sum of all counts
/// always equals the number of rides. routes are returned busiest first,
/// with ties kept in the order their key was first encountered.
pub fn aggregate_routes<I>(
    rides: I,
    index: &dyn SpatialIndex,
    resolution: u8,
) -> (RouteVolumes, AggregationSummary)
where
    I: IntoIterator<Item = RideRecord>,
{
    let mut counts: IndexMap<RoutePairKey, usize> = IndexMap::new();
    let mut summary = AggregationSummary {
        resolution,
        ..Default::default()
    };
    for ride in rides {
        let key = RoutePairKey::new(
            index.to_cell_opt(ride.pickup, resolution),
            index.to_cell_opt(ride.dropoff, resolution),
        );
        summary.rows_read += 1;
        if key.is_resolved() {
            summary.rows_quantized += 1;
        } else {
            summary.rows_unresolved += 1;
        }
        *counts.entry(key).or_insert(0) += 1;
    }

    if summary.rows_unresolved > 0 {
        log::warn!(
            "{} of {} rides have an endpoint that could not be placed on the grid",
            summary.rows_unresolved,
            summary.rows_read
        );
    }

    let routes = counts
        .into_iter()
        .map(|(key, ride_count)| RouteVolume { key, ride_count })
        .collect::<Vec<_>>();
    let volumes = RouteVolumes::new(resolution, routes);
    summary.unique_routes = volumes.len();
    summary.busiest_route_rides = volumes.busiest().map(|r| r.ride_count).unwrap_or_default();
    (volumes, summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::spatial::{CellId, H3SpatialIndex, LatLon};

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

    fn rides(pairs: &[(LatLon, LatLon, usize)]) -> Vec<RideRecord> {
        pairs
            .iter()
            .flat_map(|(p, d, n)| std::iter::repeat(RideRecord::new(Some(*p), Some(*d))).take(*n))
            .collect()
    }

    #[test]
    fn test_counts_and_direction() {
        let index = H3SpatialIndex;
        let input = rides(&[
            (GULSHAN, MOTIJHEEL, 3),
            (MOTIJHEEL, GULSHAN, 1),
            (UTTARA, GULSHAN, 5),
        ]);
        let (volumes, summary) = aggregate_routes(input, &index, 8);
        assert_eq!(volumes.len(), 3);
        let counts = volumes.routes().iter().map(|r| r.ride_count).collect::<Vec<_>>();
        assert_eq!(counts, vec![5, 3, 1]);
        let forward = volumes.routes()[1].key;
        let reverse = volumes.routes()[2].key;
        assert_eq!(forward.pickup, reverse.dropoff);
        assert_ne!(forward, reverse);
        assert_eq!(summary.busiest_route_rides, 5);
        assert_eq!(summary.rows_quantized, 9);
    }

    #[test]
    fn test_unresolved_endpoints_are_counted_separately() {
        let index = H3SpatialIndex;
        let mut input = rides(&[(GULSHAN, MOTIJHEEL, 2)]);
        input.push(RideRecord::new(None, Some(MOTIJHEEL)));
        input.push(RideRecord::new(Some(LatLon::new(123.0, 90.0)), Some(MOTIJHEEL)));
        input.push(RideRecord::new(Some(GULSHAN), None));

        let (volumes, summary) = aggregate_routes(input.clone(), &index, 8);
        assert_eq!(volumes.total_rides(), input.len());
        assert_eq!(summary.rows_read, 5);
        assert_eq!(summary.rows_quantized, 2);
        assert_eq!(summary.rows_unresolved, 3);

        let unresolved_pickup = volumes
            .routes()
            .iter()
            .find(|r| r.key.pickup == CellId::Unresolved)
            .expect("unresolved pickup bucket");
        assert_eq!(unresolved_pickup.ride_count, 2);
        assert!(unresolved_pickup.key.dropoff.is_resolved());

        let resolved_total: usize = volumes
            .routes()
            .iter()
            .filter(|r| r.key.is_resolved())
            .map(|r| r.ride_count)
            .sum();
        assert_eq!(resolved_total, summary.rows_quantized);
    }

    #[test]
    fn test_ties_follow_first_encounter() {
        let index = H3SpatialIndex;
        let input = rides(&[
            (UTTARA, GULSHAN, 2),
            (GULSHAN, MOTIJHEEL, 2),
            (UTTARA, GULSHAN, 0),
        ]);
        let (volumes, _) = aggregate_routes(input, &index, 9);
        let first = volumes.routes()[0].key;
        assert_eq!(first.pickup, index.to_cell(UTTARA.lat, UTTARA.lon, 9));
    }

    #[test]
    fn test_empty_input() {
        let (volumes, summary) = aggregate_routes(vec![], &H3SpatialIndex, 8);
        assert!(volumes.is_empty());
        assert_eq!(summary.busiest_route_rides, 0);
    }
}
