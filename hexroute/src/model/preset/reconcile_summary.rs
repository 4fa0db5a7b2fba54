use std::fmt::Display;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReconcileSummary {
    pub presets_read: usize,
    /// presets whose pickup or destination text could not be placed on the grid
    pub presets_unresolved: usize,
    /// presets removed because their route is not in the volume set, including unresolved ones
    pub removed_by_filter: usize,
    pub removed_by_dedup: usize,
    pub retained: usize,
}

impl ReconcileSummary {
    pub fn kept_after_filter(&self) -> usize {
        self.presets_read - self.removed_by_filter
    }
}

impl Display for ReconcileSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "--- Filtering Summary ---")?;
        writeln!(f, "Original Presets: {}", self.presets_read)?;
        writeln!(f, "Presets with unresolved coordinates: {}", self.presets_unresolved)?;
        writeln!(f, "Presets removed by hex filter: {}", self.removed_by_filter)?;
        writeln!(f, "Presets kept after hex filter: {}", self.kept_after_filter())?;
        writeln!(f, "Duplicates removed: {}", self.removed_by_dedup)?;
        write!(f, "Unique hex pairs kept: {}", self.retained)
    }
}
