use crate::model::spatial::CellId;
use std::fmt::Display;

/// a directed (pickup, dropoff) cell pair. `A -> B` and `B -> A` are distinct routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RoutePairKey {
    pub pickup: CellId,
    pub dropoff: CellId,
}

impl RoutePairKey {
    pub fn new(pickup: CellId, dropoff: CellId) -> Self {
        Self { pickup, dropoff }
    }

    /// true if both endpoints are real cells.
    pub fn is_resolved(&self) -> bool {
        self.pickup.is_resolved() && self.dropoff.is_resolved()
    }
}

impl Display for RoutePairKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let show = |c: &CellId| match c {
            CellId::Cell(_) => c.to_string(),
            CellId::Unresolved => String::from("unresolved"),
        };
        write!(f, "{} -> {}", show(&self.pickup), show(&self.dropoff))
    }
}
