use std::fmt::Display;

/// what a minimum ride count removed from a set of route volumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThresholdSummary {
    pub min_rides: usize,
    pub routes_before: usize,
    pub routes_retained: usize,
    pub rides_removed: usize,
}

impl ThresholdSummary {
    pub fn routes_removed(&self) -> usize {
        self.routes_before - self.routes_retained
    }
}

impl Display for ThresholdSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "- Total unique routes found: {}", self.routes_before)?;
        writeln!(
            f,
            "- Routes remaining after filtering (>= {} rides): {}",
            self.min_rides, self.routes_retained
        )?;
        write!(
            f,
            "- Reduction: {} low-volume routes ({} rides) removed.",
            self.routes_removed(),
            self.rides_removed
        )
    }
}
