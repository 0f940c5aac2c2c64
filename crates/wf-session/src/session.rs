//! The `RouteSession` state machine.

use std::collections::HashMap;

use wf_core::{CanvasPoint, Language, NodeId};
use wf_graph::{station, EnabledSet, VenueGraph, WorkingSubgraph};
use wf_narrate::{narrate, Phrases};
use wf_route::{Route, Router};

use crate::{SessionError, SessionObserver, SessionResult};

/// One kiosk's interaction state: the venue, the current enabled set and
/// its derived working subgraph, the rider's source and destination, and
/// the cached route with its narration.
///
/// `RouteSession<R>` is generic over the routing engine.  Every state
/// transition that can change the route recomputes it in full against the
/// current working subgraph and reports the result through a
/// [`SessionObserver`]; nothing is patched incrementally, so the cached
/// route is always consistent with the enabled set that produced it.
///
/// Rider-facing transitions never fail: an unknown destination key or an
/// out-of-range tap degrades to an empty route and a localized phrase.
/// Only the admin boundary ([`apply_enabled_set`](Self::apply_enabled_set))
/// returns errors.
pub struct RouteSession<R: Router> {
    venue: VenueGraph,
    router: R,

    enabled: EnabledSet,
    working: WorkingSubgraph,

    source: NodeId,
    destination: Option<NodeId>,
    language: Language,

    route: Route,
    narration: Vec<String>,
}

impl<R: Router> RouteSession<R> {
    // ── Construction ──────────────────────────────────────────────────────

    /// A fresh session over `venue` with every node enabled.
    ///
    /// The source defaults to the venue's kiosk node, falling back to the
    /// first authored node for venues without one.  No destination is
    /// selected; the narration starts as the "select a destination" prompt.
    pub fn new(venue: VenueGraph, router: R) -> Self {
        let enabled = EnabledSet::all_enabled(&venue);
        let working = WorkingSubgraph::derive(&venue, &enabled);
        let source = default_source(&venue);

        let mut session = Self {
            venue,
            router,
            enabled,
            working,
            source,
            destination: None,
            language: Language::default(),
            route: Route::not_found(),
            narration: Vec::new(),
        };
        session.recompute();
        session
    }

    /// A fresh session with a restored enabled set (see
    /// [`persist::load`][crate::persist::load]).
    pub fn with_enabled_set(venue: VenueGraph, router: R, enabled: EnabledSet) -> Self {
        let mut session = Self::new(venue, router);
        session.working = WorkingSubgraph::derive(&session.venue, &enabled);
        session.enabled = enabled;
        session.recompute();
        session
    }

    // ── Rider transitions ─────────────────────────────────────────────────

    /// Select the destination by node key.
    ///
    /// Unknown keys clear the destination with a logged warning; the rider
    /// sees the "select a destination" prompt, never an error.
    pub fn set_destination<O: SessionObserver>(&mut self, key: &str, observer: &mut O) {
        self.destination = match self.venue.node_id(key) {
            Some(id) => Some(id),
            None => {
                log::warn!("destination key '{key}' names no venue node");
                None
            }
        };
        self.recompute();
        observer.on_route_changed(&self.route, &self.narration);
    }

    /// Select the destination by tapping the map.
    ///
    /// Resolves the nearest node within the tap threshold; a tap on empty
    /// canvas changes nothing and notifies nobody.
    pub fn select_at<O: SessionObserver>(&mut self, point: CanvasPoint, observer: &mut O) {
        match self.venue.nearest_node_within(point, station::TAP_THRESHOLD) {
            Some(id) => {
                self.destination = Some(id);
                self.recompute();
                observer.on_route_changed(&self.route, &self.narration);
            }
            None => {
                log::debug!("tap at ({}, {}) hit no node", point.x, point.y);
            }
        }
    }

    /// Move the rider's starting point.
    ///
    /// Unknown keys leave the route empty (with a warning) until a valid
    /// source is set again.
    pub fn set_source<O: SessionObserver>(&mut self, key: &str, observer: &mut O) {
        self.source = match self.venue.node_id(key) {
            Some(id) => id,
            None => {
                log::warn!("source key '{key}' names no venue node");
                NodeId::INVALID
            }
        };
        self.recompute();
        observer.on_route_changed(&self.route, &self.narration);
    }

    /// Switch the narration language.  The route is unchanged; the cached
    /// narration is re-rendered in the new language.
    pub fn set_language<O: SessionObserver>(&mut self, language: Language, observer: &mut O) {
        self.language = language;
        self.recompute();
        observer.on_route_changed(&self.route, &self.narration);
    }

    /// Return to the idle state: default source, no destination, no route.
    ///
    /// The enabled set and language survive a reset — closures are venue
    /// state, not rider state, and the language menu keeps its selection.
    pub fn reset<O: SessionObserver>(&mut self, observer: &mut O) {
        self.source = default_source(&self.venue);
        self.destination = None;
        self.recompute();
        observer.on_reset();
    }

    // ── Admin boundary ────────────────────────────────────────────────────

    /// Replace the enabled set wholesale from a `key -> enabled` map.
    ///
    /// Full-replacement semantics: keys absent from `map` are disabled.
    /// The payload is validated before anything changes — any unknown key
    /// rejects the whole map with [`SessionError::UnknownNode`] and the
    /// previous set stays in force.  On success the working subgraph is
    /// rederived and the route recomputed.
    pub fn apply_enabled_set<O: SessionObserver>(
        &mut self,
        map: &HashMap<String, bool>,
        observer: &mut O,
    ) -> SessionResult<()> {
        for key in map.keys() {
            if self.venue.node_id(key).is_none() {
                return Err(SessionError::UnknownNode(key.clone()));
            }
        }

        let next = EnabledSet::from_key_map(&self.venue, map);
        if next == self.enabled {
            return Ok(());
        }

        log::info!(
            "enabled set applied: {} of {} nodes enabled",
            next.enabled_count(),
            self.venue.node_count(),
        );
        self.working = WorkingSubgraph::derive(&self.venue, &next);
        self.enabled = next;
        self.recompute();
        observer.on_route_changed(&self.route, &self.narration);
        Ok(())
    }

    /// Toggle a single node, preserving the rest of the enabled set.
    pub fn set_node_enabled<O: SessionObserver>(
        &mut self,
        key: &str,
        enabled: bool,
        observer: &mut O,
    ) -> SessionResult<()> {
        let node = self
            .venue
            .node_id(key)
            .ok_or_else(|| SessionError::UnknownNode(key.to_owned()))?;
        self.enabled.set(node, enabled);
        self.working = WorkingSubgraph::derive(&self.venue, &self.enabled);
        self.recompute();
        observer.on_route_changed(&self.route, &self.narration);
        Ok(())
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn venue(&self) -> &VenueGraph {
        &self.venue
    }

    pub fn enabled(&self) -> &EnabledSet {
        &self.enabled
    }

    pub fn working(&self) -> &WorkingSubgraph {
        &self.working
    }

    pub fn source(&self) -> NodeId {
        self.source
    }

    pub fn destination(&self) -> Option<NodeId> {
        self.destination
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// The current route.  Empty when no destination is selected or the
    /// selected destination is unreachable.
    pub fn route(&self) -> &Route {
        &self.route
    }

    /// The current narration, one localized instruction per route leg.
    /// Never empty: idle and unreachable states narrate their own phrase.
    pub fn narration(&self) -> &[String] {
        &self.narration
    }

    /// The narration as one string, ready for speech synthesis.
    pub fn narration_text(&self) -> String {
        self.narration.join(" ")
    }

    // ── Internals ─────────────────────────────────────────────────────────

    /// Recompute the cached route and narration from current state.
    fn recompute(&mut self) {
        self.route = match self.destination {
            Some(dest) => self.router.route(&self.working, self.source, dest),
            None => Route::not_found(),
        };

        self.narration = match (self.destination, self.route.found()) {
            // A destination was selected but nothing connects to it.
            (Some(_), false) => {
                vec![Phrases::for_language(self.language).no_path.to_owned()]
            }
            // Idle, or a found route (narrate handles the trivial 1-node case).
            _ => narrate(&self.route.nodes, &self.venue, self.language),
        };
    }
}

/// The venue's kiosk node, or the first authored node for venues without
/// one, or `INVALID` for an empty venue.
fn default_source(venue: &VenueGraph) -> NodeId {
    venue
        .node_id(station::KIOSK)
        .or_else(|| venue.node_ids().next())
        .unwrap_or(NodeId::INVALID)
}
