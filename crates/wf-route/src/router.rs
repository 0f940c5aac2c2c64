//! Routing trait and the binary-heap Dijkstra implementation.
//!
//! # Cost units
//!
//! All costs are in **milli-units** (u32) — the authored real-valued
//! weights times 1000, as stored by `wf-graph`.  Integer accumulation
//! keeps frontier comparisons exact and the result order-independent.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use wf_core::NodeId;
use wf_graph::WorkingSubgraph;

// ── Route ─────────────────────────────────────────────────────────────────────

/// The result of a routing query: an ordered node sequence and its total
/// cost.
///
/// The sequence runs from source to destination inclusive; consecutive
/// entries are connected in the queried subgraph.  An empty sequence means
/// "no route found".  `source == destination` yields the single-element
/// path `[source]` at zero cost.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Route {
    /// Nodes to visit in order, from source to destination.
    pub nodes: Vec<NodeId>,
    /// Total traversal cost in milli-units.
    pub cost_milli: u32,
}

impl Route {
    /// The "no route found" value.
    pub fn not_found() -> Self {
        Self::default()
    }

    /// `true` if a route was found (including the trivial one-node route).
    pub fn found(&self) -> bool {
        !self.nodes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterator over consecutive `(current, next)` pairs — the legs a
    /// narrator turns into instructions.
    pub fn legs(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.nodes.windows(2).map(|w| (w[0], w[1]))
    }

    /// `true` if `node` lies on this route.
    pub fn visits(&self, node: NodeId) -> bool {
        self.nodes.contains(&node)
    }
}

// ── Router trait ──────────────────────────────────────────────────────────────

/// Pluggable routing engine.
///
/// Implementations must be deterministic for a fixed subgraph and query:
/// the session re-runs queries on every state transition and observers
/// must see stable results.
pub trait Router {
    /// Compute the minimum-cost route from `from` to `to`.
    ///
    /// Returns [`Route::not_found`] when either endpoint is absent from
    /// `graph` or no connecting path exists.
    fn route(&self, graph: &WorkingSubgraph, from: NodeId, to: NodeId) -> Route;
}

// ── DijkstraRouter ────────────────────────────────────────────────────────────

/// Standard Dijkstra's algorithm over the working subgraph.
///
/// Uses a binary min-heap frontier with `(cost, NodeId)` entries; the
/// `NodeId` secondary key makes tie-breaking between equal-cost candidates
/// deterministic.  The venue is small enough that an O(V²) scan would also
/// do, but the heap costs nothing extra here.
pub struct DijkstraRouter;

impl Router for DijkstraRouter {
    fn route(&self, graph: &WorkingSubgraph, from: NodeId, to: NodeId) -> Route {
        dijkstra(graph, from, to)
    }
}

fn dijkstra(graph: &WorkingSubgraph, from: NodeId, to: NodeId) -> Route {
    // Disabled and unknown endpoints look identical here: not in the graph.
    if !graph.contains(from) || !graph.contains(to) {
        return Route::not_found();
    }
    if from == to {
        return Route {
            nodes: vec![from],
            cost_milli: 0,
        };
    }

    let n = graph.node_capacity();
    // dist[v] = best known cost (milli-units) to reach v.
    let mut dist = vec![u32::MAX; n];
    // prev[v] = predecessor on the best path; INVALID for unreached nodes.
    let mut prev = vec![NodeId::INVALID; n];

    dist[from.index()] = 0;

    // Min-heap: Reverse makes BinaryHeap (max) behave as min-heap.
    let mut heap: BinaryHeap<Reverse<(u32, NodeId)>> = BinaryHeap::new();
    heap.push(Reverse((0, from)));

    while let Some(Reverse((cost, node))) = heap.pop() {
        if node == to {
            return reconstruct(&prev, from, to, cost);
        }

        // Skip stale heap entries.
        if cost > dist[node.index()] {
            continue;
        }

        for &(neighbor, weight) in graph.neighbors(node) {
            let new_cost = cost.saturating_add(weight);
            if new_cost < dist[neighbor.index()] {
                dist[neighbor.index()] = new_cost;
                prev[neighbor.index()] = node;
                heap.push(Reverse((new_cost, neighbor)));
            }
        }
    }

    // Frontier exhausted without reaching `to`.
    Route::not_found()
}

fn reconstruct(prev: &[NodeId], from: NodeId, to: NodeId, total: u32) -> Route {
    let mut nodes = vec![to];
    let mut cur = to;
    while cur != from {
        cur = prev[cur.index()];
        nodes.push(cur);
    }
    nodes.reverse();
    Route {
        nodes,
        cost_milli: total,
    }
}
