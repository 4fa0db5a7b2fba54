use std::fmt::Display;

/// row-level accounting of one aggregation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AggregationSummary {
    pub resolution: u8,
    pub rows_read: usize,
    /// rows where both endpoints quantized to a real cell
    pub rows_quantized: usize,
    /// rows counted under a key with at least one unresolved endpoint
    pub rows_unresolved: usize,
    pub unique_routes: usize,
    pub busiest_route_rides: usize,
}

impl Display for AggregationSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Hex-{} Results:", self.resolution)?;
        writeln!(f, "- Rides processed: {}", self.rows_read)?;
        writeln!(f, "- Rides with both endpoints on the grid: {}", self.rows_quantized)?;
        writeln!(f, "- Rides with an unresolved endpoint: {}", self.rows_unresolved)?;
        writeln!(f, "- Unique hex-to-hex routes: {}", self.unique_routes)?;
        write!(f, "- Busiest route has {} rides", self.busiest_route_rides)
    }
}
