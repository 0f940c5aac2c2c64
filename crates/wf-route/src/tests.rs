//! Unit tests for wf-route.
//!
//! Property-style tests run on a small fixture; the concrete scenarios run
//! against the shipped Kalwa venue.

#[cfg(test)]
mod helpers {
    use wf_core::{CanvasPoint, NodeId, NodeKind};
    use wf_graph::{EnabledSet, VenueGraph, VenueGraphBuilder, WorkingSubgraph};

    /// Triangle venue: a-b(1), b-c(1), and a direct a-c(3).
    /// The two-leg path a→b→c (cost 2) beats the direct link.
    pub fn triangle() -> (VenueGraph, [NodeId; 3]) {
        let mut builder = VenueGraphBuilder::new();
        let a = builder.add_node("a", "A", NodeKind::Plain, CanvasPoint::new(0.0, 0.0));
        let b = builder.add_node("b", "B", NodeKind::Plain, CanvasPoint::new(10.0, 0.0));
        let c = builder.add_node("c", "C", NodeKind::Plain, CanvasPoint::new(20.0, 0.0));
        builder.link_both("a", "b", 1.0);
        builder.link_both("b", "c", 1.0);
        builder.link_both("a", "c", 3.0);
        (builder.build().unwrap(), [a, b, c])
    }

    pub fn working_all(venue: &VenueGraph) -> WorkingSubgraph {
        WorkingSubgraph::derive(venue, &EnabledSet::all_enabled(venue))
    }
}

// ── Core algorithm ────────────────────────────────────────────────────────────

#[cfg(test)]
mod dijkstra {
    use wf_core::NodeId;
    use wf_graph::{EnabledSet, WorkingSubgraph};

    use crate::{DijkstraRouter, Router};

    #[test]
    fn single_node_path() {
        let (venue, [a, ..]) = super::helpers::triangle();
        let working = super::helpers::working_all(&venue);
        let route = DijkstraRouter.route(&working, a, a);
        assert_eq!(route.nodes, vec![a]);
        assert_eq!(route.cost_milli, 0);
        assert!(route.found());
    }

    #[test]
    fn unknown_endpoint_is_no_route() {
        let (venue, [a, ..]) = super::helpers::triangle();
        let working = super::helpers::working_all(&venue);
        let bogus = NodeId(999);
        assert!(!DijkstraRouter.route(&working, a, bogus).found());
        assert!(!DijkstraRouter.route(&working, bogus, a).found());
    }

    #[test]
    fn disabled_endpoint_is_no_route() {
        let (venue, [a, _, c]) = super::helpers::triangle();
        let mut enabled = EnabledSet::all_enabled(&venue);
        enabled.disable(c);
        let working = WorkingSubgraph::derive(&venue, &enabled);
        assert!(!DijkstraRouter.route(&working, a, c).found());
    }

    #[test]
    fn two_legs_beat_direct_link() {
        let (venue, [a, b, c]) = super::helpers::triangle();
        let working = super::helpers::working_all(&venue);
        let route = DijkstraRouter.route(&working, a, c);
        assert_eq!(route.nodes, vec![a, b, c]);
        assert_eq!(route.cost_milli, 2000);
    }

    #[test]
    fn direct_link_when_midpoint_disabled() {
        let (venue, [a, b, c]) = super::helpers::triangle();
        let mut enabled = EnabledSet::all_enabled(&venue);
        enabled.disable(b);
        let working = WorkingSubgraph::derive(&venue, &enabled);
        let route = DijkstraRouter.route(&working, a, c);
        assert_eq!(route.nodes, vec![a, c]);
        assert_eq!(route.cost_milli, 3000);
    }

    #[test]
    fn deterministic_across_invocations() {
        let (venue, [a, _, c]) = super::helpers::triangle();
        let working = super::helpers::working_all(&venue);
        let first = DijkstraRouter.route(&working, a, c);
        for _ in 0..10 {
            assert_eq!(DijkstraRouter.route(&working, a, c), first);
        }
    }

    #[test]
    fn legs_pair_consecutive_nodes() {
        let (venue, [a, b, c]) = super::helpers::triangle();
        let working = super::helpers::working_all(&venue);
        let route = DijkstraRouter.route(&working, a, c);
        let legs: Vec<_> = route.legs().collect();
        assert_eq!(legs, vec![(a, b), (b, c)]);
    }
}

// ── Shipped venue scenarios ───────────────────────────────────────────────────

#[cfg(test)]
mod kalwa {
    use wf_graph::{station, EnabledSet, WorkingSubgraph};

    use crate::{DijkstraRouter, Router};

    #[test]
    fn kiosk_to_platform_1_takes_the_escalator() {
        let venue = station::kalwa().unwrap();
        let working = super::helpers::working_all(&venue);
        let kiosk = venue.node_id("kiosk").unwrap();
        let lp1 = venue.node_id("lp1").unwrap();

        let route = DijkstraRouter.route(&working, kiosk, lp1);
        let keys: Vec<_> = route
            .nodes
            .iter()
            .map(|&n| venue.key(n).unwrap())
            .collect();

        // The 2-cost hop through esc3, not the long eastern loop.
        assert_eq!(keys, vec!["kiosk", "esc3", "lp1"]);
        assert_eq!(route.cost_milli, 2000);
    }

    #[test]
    fn closing_the_escalator_reroutes() {
        let venue = station::kalwa().unwrap();
        let kiosk = venue.node_id("kiosk").unwrap();
        let lp1 = venue.node_id("lp1").unwrap();
        let esc3 = venue.node_id("esc3").unwrap();

        let mut enabled = EnabledSet::all_enabled(&venue);
        enabled.disable(esc3);
        let working = WorkingSubgraph::derive(&venue, &enabled);

        let route = DijkstraRouter.route(&working, kiosk, lp1);
        assert!(route.found(), "lp1 is still reachable the long way round");
        assert!(!route.visits(esc3));
        assert!(route.cost_milli > 2000);
    }

    #[test]
    fn cut_node_closure_severs_and_restores() {
        // Parking hangs off the venue through the parking elevator alone.
        let venue = station::kalwa().unwrap();
        let kiosk = venue.node_id("kiosk").unwrap();
        let pkng = venue.node_id("pkng").unwrap();
        let ep = venue.node_id("ep").unwrap();

        let mut enabled = EnabledSet::all_enabled(&venue);
        let baseline = DijkstraRouter.route(
            &WorkingSubgraph::derive(&venue, &enabled),
            kiosk,
            pkng,
        );
        assert!(baseline.found());

        enabled.disable(ep);
        let severed = DijkstraRouter.route(
            &WorkingSubgraph::derive(&venue, &enabled),
            kiosk,
            pkng,
        );
        assert!(severed.is_empty());

        enabled.enable(ep);
        let restored = DijkstraRouter.route(
            &WorkingSubgraph::derive(&venue, &enabled),
            kiosk,
            pkng,
        );
        assert_eq!(restored, baseline);
    }

    #[test]
    fn routes_are_connected_sequences() {
        // Every consecutive pair on a returned route is a subgraph link.
        let venue = station::kalwa().unwrap();
        let working = super::helpers::working_all(&venue);
        let kiosk = venue.node_id("kiosk").unwrap();

        for dest in venue.destinations() {
            let route = DijkstraRouter.route(&working, kiosk, dest);
            assert!(route.found(), "{} unreachable", venue.key(dest).unwrap());
            for (cur, next) in route.legs() {
                assert!(
                    working.neighbors(cur).iter().any(|(m, _)| *m == next),
                    "leg {cur} -> {next} is not a link",
                );
            }
        }
    }

    #[test]
    fn optimality_against_any_two_leg_detour() {
        // For every link pair a->b->c alongside a direct a->c, the routed
        // cost a->c never exceeds min(direct, via b).
        let venue = station::kalwa().unwrap();
        let working = super::helpers::working_all(&venue);

        for a in venue.node_ids() {
            for &(b, w1) in working.neighbors(a) {
                for &(c, w2) in working.neighbors(b) {
                    if c == a {
                        continue;
                    }
                    let routed = DijkstraRouter.route(&working, a, c);
                    assert!(routed.found());
                    assert!(
                        routed.cost_milli <= w1 + w2,
                        "route {a}->{c} costs {} but detour via {b} costs {}",
                        routed.cost_milli,
                        w1 + w2,
                    );
                }
            }
        }
    }
}
