use std::fmt::Display;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NameSummary {
    pub rows: usize,
    pub unique_coordinates: usize,
    /// external lookups issued during this resolve call
    pub lookups: usize,
    pub resolved_coordinates: usize,
    pub unresolvable_coordinates: usize,
    pub rows_missing_pickup_name: usize,
    pub rows_missing_dropoff_name: usize,
}

impl Display for NameSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "--- Results ---")?;
        writeln!(f, "Total routes processed: {}", self.rows)?;
        writeln!(f, "Unique centroids: {}", self.unique_coordinates)?;
        writeln!(f, "Lookups issued: {}", self.lookups)?;
        writeln!(f, "Centroids named: {}", self.resolved_coordinates)?;
        writeln!(f, "Centroids without a name: {}", self.unresolvable_coordinates)?;
        writeln!(f, "Routes missing a pickup name: {}", self.rows_missing_pickup_name)?;
        write!(f, "Routes missing a dropoff name: {}", self.rows_missing_dropoff_name)
    }
}
