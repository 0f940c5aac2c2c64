//! Coordinate export for rendering frontends.
//!
//! The engine draws nothing.  A frontend asks for markers in the
//! 900×400 reference frame and rescales them to its surface with
//! [`CanvasPoint::scaled_to`].

use wf_core::{CanvasPoint, NodeId, NodeKind};
use wf_route::Router;

use crate::RouteSession;

/// One node's drawable state.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeMarker {
    pub id: NodeId,
    pub key: String,
    pub pos: CanvasPoint,
    pub kind: NodeKind,
    /// Routable under the current enabled set.
    pub enabled: bool,
    /// Lies on the currently displayed route.
    pub on_route: bool,
}

/// Markers for every venue node, in authoring order.
pub fn map_markers<R: Router>(session: &RouteSession<R>) -> Vec<NodeMarker> {
    let venue = session.venue();
    venue
        .node_ids()
        .filter_map(|id| {
            let key = venue.key(id)?.to_owned();
            let pos = venue.position(id)?;
            Some(NodeMarker {
                id,
                key,
                pos,
                kind: venue.kind(id),
                enabled: session.enabled().is_enabled(id),
                on_route: session.route().visits(id),
            })
        })
        .collect()
}

/// The route as an ordered polyline of reference-frame points.  Empty when
/// no route is displayed.
pub fn route_polyline<R: Router>(session: &RouteSession<R>) -> Vec<CanvasPoint> {
    let venue = session.venue();
    session
        .route()
        .nodes
        .iter()
        .filter_map(|&id| venue.position(id))
        .collect()
}
