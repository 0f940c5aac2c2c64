//! Enabled-node tracking and the derived working subgraph.
//!
//! Administrators close parts of the venue (escalator maintenance, a
//! flooded subway) by disabling nodes.  The path finder never sees the
//! venue graph itself — it queries a [`WorkingSubgraph`] derived from the
//! venue and the current [`EnabledSet`].  The derivation is a pure
//! function and is rerun wholesale on every enabled-set change; nothing is
//! patched in place, so a route computed against a stale view can never
//! linger.

use std::collections::HashMap;

use wf_core::NodeId;

use crate::VenueGraph;

// ── EnabledSet ────────────────────────────────────────────────────────────────

/// The administrator-controlled set of routable nodes.
///
/// Stored densely, indexed by `NodeId`.  The default state is "all nodes
/// enabled"; key-map conversions exist for the persistence record and the
/// admin boundary, both of which speak authored string keys.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnabledSet {
    flags: Vec<bool>,
}

impl EnabledSet {
    /// Every node in `venue` enabled — the startup default.
    pub fn all_enabled(venue: &VenueGraph) -> Self {
        Self {
            flags: vec![true; venue.node_count()],
        }
    }

    /// Build from a `key -> enabled` map.
    ///
    /// Keys absent from the map are **disabled** — absence is not "leave as
    /// default".  Keys that name no venue node are ignored with a logged
    /// warning (a persisted record may predate a topology change); the
    /// admin boundary rejects them outright before calling this.
    pub fn from_key_map(venue: &VenueGraph, map: &HashMap<String, bool>) -> Self {
        let mut flags = vec![false; venue.node_count()];
        for (key, &enabled) in map {
            match venue.node_id(key) {
                Some(id) => flags[id.index()] = enabled,
                None => log::warn!("enabled-set entry '{key}' names no venue node; ignoring"),
            }
        }
        Self { flags }
    }

    /// Export as a `key -> enabled` map for persistence.
    pub fn to_key_map(&self, venue: &VenueGraph) -> HashMap<String, bool> {
        venue
            .node_ids()
            .filter_map(|id| {
                venue
                    .key(id)
                    .map(|k| (k.to_owned(), self.is_enabled(id)))
            })
            .collect()
    }

    #[inline]
    pub fn is_enabled(&self, node: NodeId) -> bool {
        self.flags.get(node.index()).copied().unwrap_or(false)
    }

    pub fn set(&mut self, node: NodeId, enabled: bool) {
        if let Some(flag) = self.flags.get_mut(node.index()) {
            *flag = enabled;
        }
    }

    pub fn enable(&mut self, node: NodeId) {
        self.set(node, true);
    }

    pub fn disable(&mut self, node: NodeId) {
        self.set(node, false);
    }

    /// Number of currently enabled nodes.
    pub fn enabled_count(&self) -> usize {
        self.flags.iter().filter(|&&f| f).count()
    }
}

// ── WorkingSubgraph ───────────────────────────────────────────────────────────

/// The filtered topology routing actually runs on.
///
/// Contains only nodes whose enabled flag is true, and only links whose
/// both endpoints are enabled.  Disabled nodes are wholly absent —
/// [`contains`](Self::contains) is false and they have no adjacency entry
/// — so the path finder's "unknown node" handling doubles as "disabled
/// node" handling.
pub struct WorkingSubgraph {
    present: Vec<bool>,
    adjacency: Vec<Vec<(NodeId, u32)>>,
}

impl WorkingSubgraph {
    /// Derive the working view of `venue` under `enabled`.
    ///
    /// Pure: reads both inputs, mutates neither.  Called again from
    /// scratch whenever the enabled set changes.
    pub fn derive(venue: &VenueGraph, enabled: &EnabledSet) -> Self {
        let n = venue.node_count();
        let mut present = vec![false; n];
        let mut adjacency: Vec<Vec<(NodeId, u32)>> = vec![Vec::new(); n];

        for node in venue.node_ids() {
            if !enabled.is_enabled(node) {
                continue;
            }
            present[node.index()] = true;
            adjacency[node.index()] = venue
                .neighbors(node)
                .iter()
                .filter(|(m, _)| enabled.is_enabled(*m))
                .copied()
                .collect();
        }

        Self { present, adjacency }
    }

    /// `true` if `node` is enabled and part of this view.
    #[inline]
    pub fn contains(&self, node: NodeId) -> bool {
        self.present.get(node.index()).copied().unwrap_or(false)
    }

    /// `(neighbor, weight_milli)` pairs for `node`.  Empty for nodes that
    /// are disabled or unknown.
    #[inline]
    pub fn neighbors(&self, node: NodeId) -> &[(NodeId, u32)] {
        self.adjacency
            .get(node.index())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Size of the `NodeId` index space (the venue's node count), for
    /// sizing the path finder's per-node arrays.  Not the number of
    /// present nodes — see [`present_count`](Self::present_count).
    #[inline]
    pub fn node_capacity(&self) -> usize {
        self.present.len()
    }

    /// Number of nodes present in this view.
    pub fn present_count(&self) -> usize {
        self.present.iter().filter(|&&p| p).count()
    }
}
