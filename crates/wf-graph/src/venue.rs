//! Venue graph representation and builder.
//!
//! # Data layout
//!
//! Nodes are resolved from their authored string keys to dense [`NodeId`]s
//! at build time; all per-node data (labels, kinds, positions, adjacency)
//! lives in `Vec`s indexed by `NodeId`.  Adjacency is a per-node list of
//! `(neighbor, weight)` pairs in authoring order, which gives deterministic
//! iteration for reproducible routing.
//!
//! # Weights
//!
//! Traversal costs are authored as positive reals (the sample venue uses
//! values like `0.2` and `1.5`) but stored as `u32` milli-units so the
//! path finder can accumulate them exactly, with no float comparisons in
//! the frontier.
//!
//! # Spatial index
//!
//! An R-tree (via `rstar`) maps canvas positions to the nearest `NodeId`.
//! Used by the kiosk touchscreen to snap a tap on the schematic to a
//! destination node.

use rstar::{PointDistance, RTree, RTreeObject, AABB};
use rustc_hash::FxHashMap;

use wf_core::{CanvasPoint, Language, NodeId, NodeKind};

use crate::{GraphError, GraphResult};

/// Convert an authored real-valued weight to internal milli-units.
#[inline]
fn weight_milli(weight: f32) -> u32 {
    (weight * 1000.0).round() as u32
}

// ── R-tree node entry ─────────────────────────────────────────────────────────

/// Entry stored in the R-tree spatial index: a canvas point with the
/// associated `NodeId`.
#[derive(Clone)]
struct NodeEntry {
    point: [f32; 2], // [x, y] in canvas units
    id: NodeId,
}

impl RTreeObject for NodeEntry {
    type Envelope = AABB<[f32; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for NodeEntry {
    /// Squared Euclidean distance in canvas units.
    fn distance_2(&self, point: &[f32; 2]) -> f32 {
        let dx = self.point[0] - point[0];
        let dy = self.point[1] - point[1];
        dx * dx + dy * dy
    }
}

// ── Node labels ───────────────────────────────────────────────────────────────

/// Per-node display names.  English is always present; the other languages
/// fall back to English when no translation was authored (junction nodes,
/// for instance, only carry an English name).
#[derive(Clone, Debug)]
pub struct NodeLabels {
    pub name: String,
    pub hindi: Option<String>,
    pub marathi: Option<String>,
    pub gujarati: Option<String>,
}

impl NodeLabels {
    fn english(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hindi: None,
            marathi: None,
            gujarati: None,
        }
    }

    /// The display name in `lang`, falling back to English.
    pub fn get(&self, lang: Language) -> &str {
        let localized = match lang {
            Language::English => None,
            Language::Hindi => self.hindi.as_deref(),
            Language::Marathi => self.marathi.as_deref(),
            Language::Gujarati => self.gujarati.as_deref(),
        };
        localized.unwrap_or(&self.name)
    }
}

// ── VenueGraph ────────────────────────────────────────────────────────────────

/// The immutable reference topology of one venue.
///
/// Built once at startup via [`VenueGraphBuilder`]; never mutated at
/// runtime.  Closures and maintenance are expressed through
/// [`WorkingSubgraph`][crate::WorkingSubgraph], a derived view.
///
/// All lookups are total: unknown identifiers yield `None` or an empty
/// slice rather than panicking, so "unknown node" and "node with no
/// connections" stay distinguishable for the activation filter.
pub struct VenueGraph {
    keys: Vec<String>,
    labels: Vec<NodeLabels>,
    kinds: Vec<NodeKind>,
    positions: Vec<CanvasPoint>,
    /// Per-node `(neighbor, weight_milli)` pairs, authoring order.
    adjacency: Vec<Vec<(NodeId, u32)>>,
    /// Nodes offered as quick-search destinations (carry localized labels).
    destination: Vec<bool>,
    key_index: FxHashMap<String, NodeId>,
    spatial_idx: RTree<NodeEntry>,
}

impl VenueGraph {
    // ── Graph dimensions ──────────────────────────────────────────────────

    pub fn node_count(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    // ── Identifier resolution ─────────────────────────────────────────────

    /// Resolve an authored string key to its dense id.
    pub fn node_id(&self, key: &str) -> Option<NodeId> {
        self.key_index.get(key).copied()
    }

    /// The authored key of `node`, or `None` for an out-of-range id.
    pub fn key(&self, node: NodeId) -> Option<&str> {
        self.keys.get(node.index()).map(String::as_str)
    }

    #[inline]
    pub fn contains(&self, node: NodeId) -> bool {
        node.index() < self.keys.len()
    }

    /// Iterator over all node ids, in authoring order.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.keys.len() as u32).map(NodeId)
    }

    // ── Per-node data ─────────────────────────────────────────────────────

    /// `(neighbor, weight_milli)` pairs for `node`.  Empty for unknown ids.
    #[inline]
    pub fn neighbors(&self, node: NodeId) -> &[(NodeId, u32)] {
        self.adjacency
            .get(node.index())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn position(&self, node: NodeId) -> Option<CanvasPoint> {
        self.positions.get(node.index()).copied()
    }

    /// The node's category.  Unknown ids read as [`NodeKind::Plain`].
    pub fn kind(&self, node: NodeId) -> NodeKind {
        self.kinds.get(node.index()).copied().unwrap_or_default()
    }

    /// Display name in `lang` (English fallback).  Unknown ids yield `""`.
    pub fn label(&self, node: NodeId, lang: Language) -> &str {
        self.labels
            .get(node.index())
            .map(|l| l.get(lang))
            .unwrap_or("")
    }

    /// `true` if `node` is offered as a quick-search destination.
    pub fn is_destination(&self, node: NodeId) -> bool {
        self.destination.get(node.index()).copied().unwrap_or(false)
    }

    /// All quick-search destination nodes, in authoring order.
    pub fn destinations(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.node_ids().filter(|&n| self.is_destination(n))
    }

    // ── Spatial queries ───────────────────────────────────────────────────

    /// The node nearest to `point` on the canvas.
    ///
    /// Returns `None` only if the venue has no nodes.
    pub fn nearest_node(&self, point: CanvasPoint) -> Option<NodeId> {
        self.spatial_idx
            .nearest_neighbor(&[point.x, point.y])
            .map(|e| e.id)
    }

    /// Like [`nearest_node`](Self::nearest_node) but rejects matches
    /// farther than `max_dist` canvas units — the tap-to-select threshold.
    pub fn nearest_node_within(&self, point: CanvasPoint, max_dist: f32) -> Option<NodeId> {
        let node = self.nearest_node(point)?;
        let pos = self.position(node)?;
        (pos.distance(point) <= max_dist).then_some(node)
    }
}

// ── VenueGraphBuilder ─────────────────────────────────────────────────────────

/// Construct a [`VenueGraph`] incrementally, then call [`build`](Self::build).
///
/// Nodes and links may be added in any order; links reference nodes by
/// their string keys and are resolved during `build()`, which also
/// validates that every endpoint exists and every weight is positive.
///
/// Link weights are directional: the sample venue deliberately prices some
/// directions differently (an escalator is cheaper to ride down than the
/// return trip is to climb).  `build()` logs a warning for every
/// asymmetric or one-way pair so accidental asymmetries in authored data
/// are visible to operators without being rejected.
///
/// # Example
///
/// ```
/// use wf_core::{CanvasPoint, NodeKind};
/// use wf_graph::VenueGraphBuilder;
///
/// let mut b = VenueGraphBuilder::new();
/// b.add_node("a", "Platform A", NodeKind::Plain, CanvasPoint::new(0.0, 0.0));
/// b.add_node("b", "Platform B", NodeKind::Plain, CanvasPoint::new(10.0, 0.0));
/// b.link_both("a", "b", 1.5);
/// let venue = b.build().unwrap();
/// assert_eq!(venue.node_count(), 2);
/// ```
pub struct VenueGraphBuilder {
    nodes: Vec<RawNode>,
    links: Vec<RawLink>,
    key_index: FxHashMap<String, NodeId>,
}

struct RawNode {
    key: String,
    labels: NodeLabels,
    kind: NodeKind,
    pos: CanvasPoint,
    destination: bool,
}

struct RawLink {
    from: String,
    to: String,
    weight: f32,
}

impl VenueGraphBuilder {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            links: Vec::new(),
            key_index: FxHashMap::default(),
        }
    }

    /// Pre-allocate for the expected number of nodes and links.
    pub fn with_capacity(nodes: usize, links: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(nodes),
            links: Vec::with_capacity(links),
            key_index: FxHashMap::default(),
        }
    }

    /// Add a node and return its `NodeId` (sequential from 0).
    pub fn add_node(
        &mut self,
        key: impl Into<String>,
        name: impl Into<String>,
        kind: NodeKind,
        pos: CanvasPoint,
    ) -> NodeId {
        let key = key.into();
        let id = NodeId(self.nodes.len() as u32);
        self.key_index.insert(key.clone(), id);
        self.nodes.push(RawNode {
            key,
            labels: NodeLabels::english(name),
            kind,
            pos,
            destination: false,
        });
        id
    }

    /// Resolve a key added earlier (used by data tables that reference
    /// nodes by key rather than carrying `NodeId`s around).
    pub fn node_id(&self, key: &str) -> Option<NodeId> {
        self.key_index.get(key).copied()
    }

    /// Mark `node` as a quick-search destination and attach its localized
    /// labels.  English comes from `add_node`.
    pub fn mark_destination(
        &mut self,
        node: NodeId,
        hindi: impl Into<String>,
        marathi: impl Into<String>,
        gujarati: impl Into<String>,
    ) {
        let raw = &mut self.nodes[node.index()];
        raw.destination = true;
        raw.labels.hindi = Some(hindi.into());
        raw.labels.marathi = Some(marathi.into());
        raw.labels.gujarati = Some(gujarati.into());
    }

    /// Add a **directed** link from `from` to `to` with the authored
    /// real-valued weight.  Endpoints are resolved at `build()` time.
    pub fn link(&mut self, from: impl Into<String>, to: impl Into<String>, weight: f32) {
        self.links.push(RawLink {
            from: from.into(),
            to: to.into(),
            weight,
        });
    }

    /// Convenience: add links in **both directions** with the same weight.
    pub fn link_both(&mut self, a: impl Into<String> + Clone, b: impl Into<String> + Clone, weight: f32) {
        self.link(a.clone(), b.clone(), weight);
        self.link(b, a, weight);
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    /// Consume the builder and produce a [`VenueGraph`].
    ///
    /// Fails on links whose endpoints were never added, non-positive or
    /// non-finite weights, and duplicate definitions of the same directed
    /// link.  One-way and asymmetric pairs are accepted with a logged
    /// warning.
    pub fn build(self) -> GraphResult<VenueGraph> {
        let node_count = self.nodes.len();
        let mut adjacency: Vec<Vec<(NodeId, u32)>> = vec![Vec::new(); node_count];
        let mut defined: FxHashMap<(NodeId, NodeId), u32> = FxHashMap::default();

        for link in &self.links {
            let from = *self
                .key_index
                .get(&link.from)
                .ok_or_else(|| GraphError::UnknownEndpoint(link.from.clone()))?;
            let to = *self
                .key_index
                .get(&link.to)
                .ok_or_else(|| GraphError::UnknownEndpoint(link.to.clone()))?;

            if !link.weight.is_finite() || link.weight <= 0.0 {
                return Err(GraphError::NonPositiveWeight {
                    from: link.from.clone(),
                    to: link.to.clone(),
                    weight: link.weight,
                });
            }

            let cost = weight_milli(link.weight);
            if defined.insert((from, to), cost).is_some() {
                return Err(GraphError::DuplicateLink {
                    from: link.from.clone(),
                    to: link.to.clone(),
                });
            }
            adjacency[from.index()].push((to, cost));
        }

        // Surface authored asymmetries to operators.  Directed costs are a
        // supported feature, so these are warnings, not errors.
        for (&(from, to), &cost) in &defined {
            match defined.get(&(to, from)) {
                None => log::warn!(
                    "one-way link: {} -> {} has no return link",
                    self.nodes[from.index()].key,
                    self.nodes[to.index()].key,
                ),
                Some(&back) if back != cost && from < to => log::warn!(
                    "asymmetric weights: {} -> {} costs {cost}, return costs {back} (milli-units)",
                    self.nodes[from.index()].key,
                    self.nodes[to.index()].key,
                ),
                Some(_) => {}
            }
        }

        let entries: Vec<NodeEntry> = self
            .nodes
            .iter()
            .enumerate()
            .map(|(i, n)| NodeEntry {
                point: [n.pos.x, n.pos.y],
                id: NodeId(i as u32),
            })
            .collect();
        let spatial_idx = RTree::bulk_load(entries);

        let mut keys = Vec::with_capacity(node_count);
        let mut labels = Vec::with_capacity(node_count);
        let mut kinds = Vec::with_capacity(node_count);
        let mut positions = Vec::with_capacity(node_count);
        let mut destination = Vec::with_capacity(node_count);
        for n in self.nodes {
            keys.push(n.key);
            labels.push(n.labels);
            kinds.push(n.kind);
            positions.push(n.pos);
            destination.push(n.destination);
        }

        Ok(VenueGraph {
            keys,
            labels,
            kinds,
            positions,
            adjacency,
            destination,
            key_index: self.key_index,
            spatial_idx,
        })
    }
}

impl Default for VenueGraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}
