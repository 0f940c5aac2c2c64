//! `wf-route` — routing trait and default Dijkstra implementation.
//!
//! # Pluggability
//!
//! The session calls routing via the [`Router`] trait, so applications can
//! swap in custom implementations (A*, precomputed all-pairs tables for a
//! venue this small) without touching the rest of the engine.  The default
//! [`DijkstraRouter`] is sufficient for venues of tens of nodes.
//!
//! # "No route" is not an error
//!
//! A query whose source or destination is disabled, unknown, or
//! disconnected returns [`Route::not_found`] — an empty node sequence.
//! Closures making a destination unreachable are an everyday operational
//! state for the kiosk, not a fault.

pub mod router;

#[cfg(test)]
mod tests;

pub use router::{DijkstraRouter, Route, Router};
