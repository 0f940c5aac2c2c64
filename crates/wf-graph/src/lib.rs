//! `wf-graph` — venue topology, activation filtering, and the sample venue.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                 |
//! |----------------|----------------------------------------------------------|
//! | [`venue`]      | `VenueGraph` (adjacency + R-tree), `VenueGraphBuilder`   |
//! | [`activation`] | `EnabledSet`, `WorkingSubgraph`                          |
//! | [`station`]    | `kalwa()` — the built-in Kalwa railway station venue     |
//! | [`error`]      | `GraphError`, `GraphResult<T>`                           |
//!
//! # Two graphs, one topology
//!
//! The [`VenueGraph`] is immutable reference configuration, built once at
//! startup.  Routing never reads it directly: queries go through a
//! [`WorkingSubgraph`] derived from the venue and the current
//! [`EnabledSet`].  Deriving (instead of filtering in place) means repeated
//! admin edits can never corrupt the reference topology — re-enabling a
//! node restores exactly the connectivity it had before.

pub mod activation;
pub mod error;
pub mod station;
pub mod venue;

#[cfg(test)]
mod tests;

pub use activation::{EnabledSet, WorkingSubgraph};
pub use error::{GraphError, GraphResult};
pub use venue::{VenueGraph, VenueGraphBuilder};
