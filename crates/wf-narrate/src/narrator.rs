//! Path-to-instruction translation.
//!
//! For each leg of a route the narrator compares the coordinate delta
//! between the two nodes: whichever axis dominates gives the direction
//! word (canvas y grows downward, so negative Δy is "up").  Legs that
//! end on a vertical-transit node ignore the dominant axis and phrase
//! the step as riding the feature up or down.

use wf_core::{CanvasPoint, Language, NodeId, NodeKind};
use wf_graph::VenueGraph;

use crate::Phrases;

// ── Direction ─────────────────────────────────────────────────────────────────

/// A relative direction on the schematic map.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// Direction of the dominant displacement axis from `from` to `to`.
    ///
    /// Horizontal wins only when strictly larger; a tie (including zero
    /// displacement) reads as vertical, which keeps straight-down
    /// corridors from flapping between phrasings.
    pub fn dominant(from: CanvasPoint, to: CanvasPoint) -> Direction {
        let dx = to.x - from.x;
        let dy = to.y - from.y;
        if dx.abs() > dy.abs() {
            if dx > 0.0 { Direction::Right } else { Direction::Left }
        } else {
            Self::vertical(from, to)
        }
    }

    /// The vertical component alone — what a rider does on an escalator.
    pub fn vertical(from: CanvasPoint, to: CanvasPoint) -> Direction {
        if to.y > from.y { Direction::Down } else { Direction::Up }
    }

    /// The localized direction word.
    pub fn word(self, phrases: &'static Phrases) -> &'static str {
        match self {
            Direction::Left => phrases.left,
            Direction::Right => phrases.right,
            Direction::Up => phrases.up,
            Direction::Down => phrases.down,
        }
    }
}

// ── Narration ─────────────────────────────────────────────────────────────────

/// Render `path` as one localized instruction per leg.
///
/// An empty or single-node path produces exactly one instruction — the
/// "no destination selected" phrase — so voice guidance never receives
/// silence for an unresolved query.
pub fn narrate(path: &[NodeId], venue: &VenueGraph, lang: Language) -> Vec<String> {
    let phrases = Phrases::for_language(lang);
    if path.len() < 2 {
        return vec![phrases.no_destination.to_owned()];
    }

    path.windows(2)
        .map(|leg| step_instruction(leg[0], leg[1], venue, lang, phrases))
        .collect()
}

/// The full narration as one string, ready for speech synthesis.
pub fn narration_text(path: &[NodeId], venue: &VenueGraph, lang: Language) -> String {
    narrate(path, venue, lang).join(" ")
}

fn step_instruction(
    current: NodeId,
    next: NodeId,
    venue: &VenueGraph,
    lang: Language,
    phrases: &'static Phrases,
) -> String {
    let from_name = venue.label(current, lang);
    let to_name = venue.label(next, lang);
    // Nodes on a computed route always have positions; fall back to the
    // origin rather than panicking if a caller hands us a foreign path.
    let from_pos = venue.position(current).unwrap_or(CanvasPoint::new(0.0, 0.0));
    let to_pos = venue.position(next).unwrap_or(from_pos);

    let feature = match venue.kind(next) {
        NodeKind::Escalator => Some(phrases.escalator),
        NodeKind::Stairs => Some(phrases.stairs),
        NodeKind::Elevator => Some(phrases.elevator),
        NodeKind::Plain => None,
    };

    match feature {
        // Vertical-transit semantics beat raw geometry.
        Some(feature) => phrases
            .vertical_step
            .replace("{from}", from_name)
            .replace("{feature}", feature)
            .replace("{dir}", Direction::vertical(from_pos, to_pos).word(phrases)),
        None => phrases
            .step
            .replace("{from}", from_name)
            .replace("{dir}", Direction::dominant(from_pos, to_pos).word(phrases))
            .replace("{to}", to_name),
    }
}
