//! Unit tests for wf-graph.
//!
//! Structural tests use a hand-crafted fixture venue; the `station` module
//! checks the shipped Kalwa data directly.

#[cfg(test)]
mod helpers {
    use wf_core::{CanvasPoint, NodeId, NodeKind};

    use crate::{VenueGraph, VenueGraphBuilder};

    /// Build a small L-shaped venue for testing.
    ///
    /// Nodes (x, y):
    ///   a:(0,100)  b:(50,100)  c:(100,100)  esc:(100,60)  top:(100,20)
    ///
    /// Undirected links: a-b(1), b-c(1), c-esc(0.5), esc-top(0.5),
    /// plus a slow bypass a-top(5).
    pub fn l_venue() -> (VenueGraph, [NodeId; 5]) {
        let mut b = VenueGraphBuilder::new();
        let a = b.add_node("a", "Entrance", NodeKind::Plain, CanvasPoint::new(0.0, 100.0));
        let bb = b.add_node("b", "Concourse", NodeKind::Plain, CanvasPoint::new(50.0, 100.0));
        let c = b.add_node("c", "Foot of Stairs", NodeKind::Plain, CanvasPoint::new(100.0, 100.0));
        let esc = b.add_node("esc", "Escalator", NodeKind::Escalator, CanvasPoint::new(100.0, 60.0));
        let top = b.add_node("top", "Platform", NodeKind::Plain, CanvasPoint::new(100.0, 20.0));

        b.link_both("a", "b", 1.0);
        b.link_both("b", "c", 1.0);
        b.link_both("c", "esc", 0.5);
        b.link_both("esc", "top", 0.5);
        b.link_both("a", "top", 5.0);

        (b.build().unwrap(), [a, bb, c, esc, top])
    }
}

// ── Builder & venue structure ─────────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use wf_core::{CanvasPoint, Language, NodeId, NodeKind};

    use crate::{GraphError, VenueGraphBuilder};

    #[test]
    fn empty_build() {
        let venue = VenueGraphBuilder::new().build().unwrap();
        assert_eq!(venue.node_count(), 0);
        assert!(venue.is_empty());
        assert!(venue.node_id("anything").is_none());
    }

    #[test]
    fn keys_resolve_to_sequential_ids() {
        let (venue, [a, b, ..]) = super::helpers::l_venue();
        assert_eq!(venue.node_id("a"), Some(a));
        assert_eq!(venue.node_id("b"), Some(b));
        assert_eq!(venue.key(a), Some("a"));
        assert_eq!(a, NodeId(0));
    }

    #[test]
    fn weights_stored_in_milli_units() {
        let (venue, [_, _, c, esc, _]) = super::helpers::l_venue();
        let w = venue
            .neighbors(c)
            .iter()
            .find(|(m, _)| *m == esc)
            .map(|&(_, w)| w);
        assert_eq!(w, Some(500)); // 0.5 → 500
    }

    #[test]
    fn unknown_lookups_are_total() {
        let (venue, _) = super::helpers::l_venue();
        let bogus = NodeId(999);
        assert!(!venue.contains(bogus));
        assert!(venue.neighbors(bogus).is_empty());
        assert!(venue.position(bogus).is_none());
        assert_eq!(venue.kind(bogus), NodeKind::Plain);
        assert_eq!(venue.label(bogus, Language::English), "");
    }

    #[test]
    fn unknown_endpoint_rejected() {
        let mut b = VenueGraphBuilder::new();
        b.add_node("a", "A", NodeKind::Plain, CanvasPoint::new(0.0, 0.0));
        b.link("a", "ghost", 1.0);
        assert!(matches!(b.build(), Err(GraphError::UnknownEndpoint(k)) if k == "ghost"));
    }

    #[test]
    fn non_positive_weight_rejected() {
        let mut b = VenueGraphBuilder::new();
        b.add_node("a", "A", NodeKind::Plain, CanvasPoint::new(0.0, 0.0));
        b.add_node("b", "B", NodeKind::Plain, CanvasPoint::new(1.0, 0.0));
        b.link("a", "b", 0.0);
        assert!(matches!(b.build(), Err(GraphError::NonPositiveWeight { .. })));
    }

    #[test]
    fn duplicate_link_rejected() {
        let mut b = VenueGraphBuilder::new();
        b.add_node("a", "A", NodeKind::Plain, CanvasPoint::new(0.0, 0.0));
        b.add_node("b", "B", NodeKind::Plain, CanvasPoint::new(1.0, 0.0));
        b.link("a", "b", 1.0);
        b.link("a", "b", 2.0);
        assert!(matches!(b.build(), Err(GraphError::DuplicateLink { .. })));
    }

    #[test]
    fn one_way_link_accepted() {
        let mut b = VenueGraphBuilder::new();
        let a = b.add_node("a", "A", NodeKind::Plain, CanvasPoint::new(0.0, 0.0));
        let c = b.add_node("c", "C", NodeKind::Plain, CanvasPoint::new(1.0, 0.0));
        b.link("a", "c", 1.0); // no return link — warned, not rejected
        let venue = b.build().unwrap();
        assert_eq!(venue.neighbors(a).len(), 1);
        assert!(venue.neighbors(c).is_empty());
    }

    #[test]
    fn label_falls_back_to_english() {
        let mut b = VenueGraphBuilder::new();
        let p = b.add_node("p", "Platform 1", NodeKind::Plain, CanvasPoint::new(0.0, 0.0));
        let q = b.add_node("q", "Junction", NodeKind::Plain, CanvasPoint::new(1.0, 0.0));
        b.mark_destination(p, "प्लेटफ़ॉर्म 1", "प्लॅटफॉर्म 1", "પ્લેટફોર્મ 1");
        let venue = b.build().unwrap();

        assert_eq!(venue.label(p, Language::Hindi), "प्लेटफ़ॉर्म 1");
        assert_eq!(venue.label(p, Language::English), "Platform 1");
        // q has no translations: every language reads the English name.
        assert_eq!(venue.label(q, Language::Gujarati), "Junction");
        assert!(venue.is_destination(p));
        assert!(!venue.is_destination(q));
    }
}

// ── Spatial snap ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod snap {
    use wf_core::CanvasPoint;

    use crate::VenueGraphBuilder;

    #[test]
    fn snap_exact_position() {
        let (venue, [a, ..]) = super::helpers::l_venue();
        assert_eq!(venue.nearest_node(CanvasPoint::new(0.0, 100.0)), Some(a));
    }

    #[test]
    fn snap_nearest() {
        let (venue, [a, b, ..]) = super::helpers::l_venue();
        assert_eq!(venue.nearest_node(CanvasPoint::new(20.0, 100.0)), Some(a));
        assert_eq!(venue.nearest_node(CanvasPoint::new(30.0, 100.0)), Some(b));
    }

    #[test]
    fn snap_threshold() {
        let (venue, [a, ..]) = super::helpers::l_venue();
        let near = CanvasPoint::new(10.0, 100.0);
        let far = CanvasPoint::new(0.0, 300.0);
        assert_eq!(venue.nearest_node_within(near, 30.0), Some(a));
        assert_eq!(venue.nearest_node_within(far, 30.0), None);
    }

    #[test]
    fn empty_venue_returns_none() {
        let venue = VenueGraphBuilder::new().build().unwrap();
        assert!(venue.nearest_node(CanvasPoint::new(0.0, 0.0)).is_none());
    }
}

// ── Activation filter ─────────────────────────────────────────────────────────

#[cfg(test)]
mod activation {
    use std::collections::HashMap;

    use crate::{EnabledSet, WorkingSubgraph};

    #[test]
    fn all_enabled_default() {
        let (venue, nodes) = super::helpers::l_venue();
        let enabled = EnabledSet::all_enabled(&venue);
        assert_eq!(enabled.enabled_count(), venue.node_count());
        let working = WorkingSubgraph::derive(&venue, &enabled);
        for &n in &nodes {
            assert!(working.contains(n));
            assert_eq!(working.neighbors(n).len(), venue.neighbors(n).len());
        }
    }

    #[test]
    fn disabled_node_is_wholly_absent() {
        let (venue, [a, b, c, ..]) = super::helpers::l_venue();
        let mut enabled = EnabledSet::all_enabled(&venue);
        enabled.disable(b);
        let working = WorkingSubgraph::derive(&venue, &enabled);

        assert!(!working.contains(b));
        assert!(working.neighbors(b).is_empty());
        // Links touching b vanish from both sides.
        assert!(!working.neighbors(a).iter().any(|(m, _)| *m == b));
        assert!(!working.neighbors(c).iter().any(|(m, _)| *m == b));
    }

    #[test]
    fn derive_never_mutates_the_venue() {
        let (venue, [_, b, ..]) = super::helpers::l_venue();
        let before = venue.neighbors(b).len();

        let mut enabled = EnabledSet::all_enabled(&venue);
        enabled.disable(b);
        let _working = WorkingSubgraph::derive(&venue, &enabled);

        // The reference topology is untouched; re-enabling restores
        // connectivity by re-deriving, not by repairing.
        assert_eq!(venue.neighbors(b).len(), before);
        enabled.enable(b);
        let restored = WorkingSubgraph::derive(&venue, &enabled);
        assert_eq!(restored.neighbors(b).len(), before);
    }

    #[test]
    fn absent_map_entries_are_disabled() {
        // "absent" and "false" are easy to conflate — this pins the rule.
        let (venue, [a, b, ..]) = super::helpers::l_venue();
        let mut map = HashMap::new();
        map.insert("a".to_owned(), true);
        // b, c, esc, top not mentioned at all.
        let enabled = EnabledSet::from_key_map(&venue, &map);

        assert!(enabled.is_enabled(a));
        assert!(!enabled.is_enabled(b));
        assert_eq!(enabled.enabled_count(), 1);
    }

    #[test]
    fn stale_keys_ignored_on_load() {
        let (venue, [a, ..]) = super::helpers::l_venue();
        let mut map = HashMap::new();
        map.insert("a".to_owned(), true);
        map.insert("demolished_wing".to_owned(), true);
        let enabled = EnabledSet::from_key_map(&venue, &map);
        assert!(enabled.is_enabled(a));
        assert_eq!(enabled.enabled_count(), 1);
    }

    #[test]
    fn key_map_roundtrip() {
        let (venue, [_, b, ..]) = super::helpers::l_venue();
        let mut enabled = EnabledSet::all_enabled(&venue);
        enabled.disable(b);

        let map = enabled.to_key_map(&venue);
        assert_eq!(map.len(), venue.node_count());
        assert_eq!(map.get("b"), Some(&false));

        let reloaded = EnabledSet::from_key_map(&venue, &map);
        assert_eq!(reloaded, enabled);
    }
}

// ── Shipped station data ──────────────────────────────────────────────────────

#[cfg(test)]
mod station {
    use wf_core::{Language, NodeKind};

    use crate::station::{self, KIOSK};

    #[test]
    fn kalwa_builds() {
        let venue = station::kalwa().unwrap();
        assert_eq!(venue.node_count(), 48);
        assert!(venue.node_id(KIOSK).is_some());
    }

    #[test]
    fn kiosk_adjacency_matches_survey() {
        let venue = station::kalwa().unwrap();
        let kiosk = venue.node_id(KIOSK).unwrap();
        let tc1 = venue.node_id("tc1").unwrap();
        let esc3 = venue.node_id("esc3").unwrap();

        let neighbors = venue.neighbors(kiosk);
        assert_eq!(neighbors.len(), 2);
        assert!(neighbors.contains(&(tc1, 1000)));
        assert!(neighbors.contains(&(esc3, 1000)));
    }

    #[test]
    fn vertical_transit_kinds() {
        let venue = station::kalwa().unwrap();
        for key in ["esc1", "esc2", "esc3", "esc4", "esc5"] {
            let id = venue.node_id(key).unwrap();
            assert_eq!(venue.kind(id), NodeKind::Escalator, "{key}");
        }
        for key in ["e51", "e52"] {
            let id = venue.node_id(key).unwrap();
            assert_eq!(venue.kind(id), NodeKind::Stairs, "{key}");
        }
        for key in ["elv", "ep"] {
            let id = venue.node_id(key).unwrap();
            assert_eq!(venue.kind(id), NodeKind::Elevator, "{key}");
        }
    }

    #[test]
    fn destinations_carry_localized_labels() {
        let venue = station::kalwa().unwrap();
        assert_eq!(venue.destinations().count(), 19);

        let lp1 = venue.node_id("lp1").unwrap();
        assert!(venue.is_destination(lp1));
        assert_eq!(venue.label(lp1, Language::English), "Platform 1");
        assert_eq!(venue.label(lp1, Language::Hindi), "प्लेटफ़ॉर्म 1");

        // Junctions are not destinations and read English everywhere.
        let e11 = venue.node_id("e11").unwrap();
        assert!(!venue.is_destination(e11));
        assert_eq!(venue.label(e11, Language::Marathi), "Edge");
    }

    #[test]
    fn fractional_weights_survive_milli_conversion() {
        let venue = station::kalwa().unwrap();
        let mb4 = venue.node_id("mb4").unwrap();
        let e51 = venue.node_id("e51").unwrap();
        let w = venue
            .neighbors(mb4)
            .iter()
            .find(|(m, _)| *m == e51)
            .map(|&(_, w)| w);
        assert_eq!(w, Some(200)); // 0.2 → 200, exactly
    }

    #[test]
    fn coordinates_in_reference_frame() {
        let venue = station::kalwa().unwrap();
        for node in venue.node_ids() {
            let pos = venue.position(node).unwrap();
            assert!((0.0..=wf_core::FRAME_WIDTH).contains(&pos.x));
            assert!((0.0..=wf_core::FRAME_HEIGHT).contains(&pos.y));
        }
    }
}
