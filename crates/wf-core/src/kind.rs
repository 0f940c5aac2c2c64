//! Location categories.
//!
//! Narration and rendering branch on the category a node belongs to, not on
//! its identifier: vertical-transit nodes (stairs, escalators, elevators)
//! are phrased "take the escalator up" instead of "go left", regardless of
//! what the coordinate delta alone would suggest.

/// The physical category of a venue node.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NodeKind {
    /// An ordinary location: platform, counter, exit, walkway junction.
    #[default]
    Plain,
    Escalator,
    Stairs,
    Elevator,
}

impl NodeKind {
    /// `true` for categories that move the rider between levels and take
    /// priority over the dominant-axis direction heuristic.
    #[inline]
    pub fn is_vertical_transit(self) -> bool {
        !matches!(self, NodeKind::Plain)
    }
}
