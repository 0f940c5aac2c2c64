//! The built-in Kalwa railway station venue.
//!
//! One flat data table per concern — nodes, directed links, quick-search
//! destinations — fed through [`VenueGraphBuilder`].  Link weights are
//! authored traversal costs, not geometric distances: escalators and
//! stairs are priced below their drawn length to bias routing through
//! them, and a handful of pairs are deliberately asymmetric (riding an
//! escalator down is cheaper than walking back up).
//!
//! Coordinates are in the 900×400 reference frame; y grows downward.

use wf_core::{CanvasPoint, NodeKind};

use crate::{GraphResult, VenueGraph, VenueGraphBuilder};

/// Key of the fixed kiosk origin node.
pub const KIOSK: &str = "kiosk";

/// Tap-to-select snap threshold on the reference canvas, in canvas units.
pub const TAP_THRESHOLD: f32 = 30.0;

use NodeKind::{Elevator, Escalator, Plain, Stairs};

/// `(key, english name, kind, x, y)`
const NODES: &[(&str, &str, NodeKind, f32, f32)] = &[
    ("kiosk", "Kiosk", Plain, 198.0, 321.0),
    ("autost", "Auto Stand", Plain, 43.0, 186.5),
    ("enex_e1", "East Exit 1", Plain, 84.0, 186.5),
    ("wsrm", "Washroom", Plain, 137.0, 19.0),
    ("e11", "Edge", Plain, 137.0, 76.0),
    ("e12", "Edge", Plain, 137.0, 186.5),
    ("mdrm", "Medical Room", Plain, 137.0, 230.5),
    ("wtrm", "Waiting Room", Plain, 137.0, 271.0),
    ("tc1", "Ticket Counter 1", Plain, 137.0, 321.0),
    ("enex_e2", "East Exit 2", Plain, 204.0, 19.0),
    ("esc1", "Escalator 1", Escalator, 176.8, 76.0),
    ("ub0", "Upper Bridge 0", Plain, 204.0, 76.0),
    ("e2", "Middle Bridge", Plain, 204.0, 208.0),
    ("ub1", "Upper Bridge 1", Plain, 269.5, 76.0),
    ("esc2", "Escalator 2", Escalator, 269.5, 100.0),
    ("up1", "Upper Platform 1", Plain, 269.5, 133.8),
    ("e3", "Middle Bridge 1", Plain, 269.5, 208.0),
    ("lp1", "Platform 1", Plain, 269.5, 271.0),
    ("esc3", "Escalator 3", Escalator, 269.5, 321.0),
    ("lb1", "Lower Bridge 1", Plain, 269.0, 341.0),
    ("up2", "Upper Platform 2", Plain, 400.3, 133.8),
    ("lp2", "Platform 2", Plain, 400.3, 271.0),
    ("ub2", "Upper Bridge 2", Plain, 429.4, 76.0),
    ("e41", "Edge", Plain, 429.4, 133.8),
    ("elv", "Elevator", Elevator, 429.4, 186.5),
    ("mb2", "Middle Bridge 2", Plain, 429.4, 208.0),
    ("e42", "Edge", Plain, 429.4, 271.0),
    ("lb2", "Lower Bridge 2", Plain, 429.4, 341.0),
    ("up3", "Upper Platform 3", Plain, 459.0, 133.8),
    ("lp3", "Platform 3", Plain, 459.0, 271.0),
    ("ub4", "Upper Bridge 4", Plain, 585.0, 76.0),
    ("esc4", "Escalator 4", Escalator, 585.0, 100.0),
    ("up4", "Upper Platform 4", Plain, 585.0, 133.8),
    ("e51", "Stairs", Stairs, 585.0, 186.5),
    ("mb4", "Middle Bridge 4", Plain, 585.0, 208.0),
    ("e52", "Stairs", Stairs, 585.0, 230.5),
    ("lp4", "Platform 4", Plain, 585.0, 271.0),
    ("esc5", "Escalator 5", Escalator, 585.0, 321.0),
    ("lb4", "Lower Bridge 4", Plain, 585.0, 341.0),
    ("stm", "Station Mart", Plain, 680.3, 100.0),
    ("tc2", "Ticket Counter 2", Plain, 680.3, 230.5),
    ("pkng", "Parking", Plain, 704.5, 271.0),
    ("ep", "Parking Elevator", Elevator, 704.5, 341.0),
    ("enex_w", "West Exit", Plain, 729.0, 186.5),
    ("e61", "Edge", Plain, 820.0, 76.0),
    ("bus_st", "Bus Station", Plain, 820.0, 186.5),
    ("e62", "Edge", Plain, 820.0, 341.0),
    ("fd_ct", "Food Court", Plain, 729.0, 100.0),
];

/// `(from, to, weight)` — directed, exactly as surveyed.
const LINKS: &[(&str, &str, f32)] = &[
    ("kiosk", "tc1", 1.0),
    ("kiosk", "esc3", 1.0),
    ("autost", "enex_e1", 1.0),
    ("enex_e1", "e12", 1.0),
    ("enex_e1", "autost", 1.0),
    ("wsrm", "e11", 1.0),
    ("e11", "wsrm", 1.0),
    ("e11", "esc1", 1.0),
    ("e11", "e12", 3.0),
    ("e12", "e11", 3.0),
    ("e12", "mdrm", 1.0),
    ("e12", "enex_e1", 1.0),
    ("mdrm", "e12", 1.0),
    ("mdrm", "wtrm", 1.0),
    ("wtrm", "mdrm", 1.0),
    ("wtrm", "tc1", 1.0),
    ("tc1", "wtrm", 1.0),
    ("tc1", "kiosk", 1.0),
    ("enex_e2", "ub0", 1.0),
    ("esc1", "e11", 1.0),
    ("esc1", "ub0", 1.0),
    ("ub0", "esc1", 1.0),
    ("ub0", "e2", 2.0),
    ("ub0", "enex_e2", 1.0),
    ("ub0", "ub1", 1.0),
    ("e2", "e3", 1.0),
    ("e2", "ub0", 2.0),
    ("ub1", "esc2", 1.0),
    ("ub1", "ub0", 1.0),
    ("ub1", "ub2", 2.0),
    ("esc2", "ub1", 1.0),
    ("esc2", "up1", 1.0),
    ("up1", "esc2", 1.0),
    ("up1", "e3", 1.0),
    ("e3", "up1", 1.0),
    ("e3", "lp1", 1.0),
    ("e3", "e2", 1.0),
    ("e3", "mb2", 2.0),
    ("lp1", "e3", 1.0),
    ("lp1", "esc3", 1.0),
    ("esc3", "lp1", 1.0),
    ("esc3", "lb1", 1.0),
    ("lb1", "esc3", 1.0),
    ("lb1", "lb2", 2.0),
    ("ub2", "ub1", 2.0),
    ("ub2", "e41", 1.0),
    ("ub2", "ub4", 2.0),
    ("e41", "ub2", 1.0),
    ("e41", "up2", 1.0),
    ("e41", "up3", 1.0),
    ("e41", "elv", 1.0),
    ("up2", "e41", 1.0),
    ("up3", "e41", 1.0),
    ("elv", "e41", 1.0),
    ("elv", "mb2", 1.0),
    ("mb2", "elv", 1.0),
    ("mb2", "mb4", 2.0),
    ("mb2", "e3", 2.0),
    ("mb2", "e42", 1.5),
    ("e42", "mb2", 1.5),
    ("e42", "lp2", 1.0),
    ("e42", "lp3", 1.0),
    ("e42", "lb2", 1.5),
    ("lp2", "e42", 1.0),
    ("lp3", "e42", 1.0),
    ("lb2", "lb1", 2.0),
    ("lb2", "e42", 1.5),
    ("lb2", "lb4", 2.0),
    ("ub4", "ub2", 2.0),
    ("ub4", "esc4", 1.0),
    ("ub4", "e61", 2.0),
    ("esc4", "ub4", 1.0),
    ("esc4", "up4", 1.0),
    ("esc4", "stm", 1.0),
    ("up4", "esc4", 1.0),
    ("up4", "e51", 0.5),
    ("e51", "up4", 0.5),
    ("e51", "mb4", 1.0),
    ("e51", "enex_w", 1.0),
    ("mb4", "e51", 0.2),
    ("mb4", "e52", 1.0),
    ("mb4", "mb2", 2.0),
    ("e52", "mb4", 0.2),
    ("e52", "tc2", 1.0),
    ("e52", "lp4", 0.8),
    ("lp4", "e52", 0.8),
    ("lp4", "esc5", 1.0),
    ("esc5", "lp4", 0.5),
    ("esc5", "lb4", 1.0),
    ("lb4", "esc5", 0.5),
    ("lb4", "lb2", 2.0),
    ("lb4", "ep", 1.0),
    ("stm", "esc4", 1.0),
    ("stm", "tc2", 4.0),
    ("stm", "fd_ct", 1.0),
    ("enex_w", "e51", 1.0),
    ("tc2", "e52", 1.0),
    ("tc2", "stm", 4.0),
    ("ep", "lb4", 1.0),
    ("ep", "pkng", 1.0),
    ("ep", "e62", 1.0),
    ("e61", "ub4", 2.0),
    ("e61", "bus_st", 3.0),
    ("bus_st", "e61", 3.0),
    ("bus_st", "e62", 3.0),
    ("e62", "bus_st", 3.0),
    ("e62", "ep", 1.0),
    ("pkng", "ep", 1.0),
    ("fd_ct", "stm", 1.0),
];

/// Quick-search destinations: `(key, hindi, marathi, gujarati)`.
/// The English label is the node's name.
const DESTINATIONS: &[(&str, &str, &str, &str)] = &[
    ("lp1", "प्लेटफ़ॉर्म 1", "प्लॅटफॉर्म 1", "પ્લેટફોર્મ 1"),
    ("lp2", "प्लेटफ़ॉर्म 2", "प्लॅटफॉर्म 2", "પ્લેટફોર્મ 2"),
    ("lp3", "प्लेटफ़ॉर्म 3", "प्लॅटफॉर्म 3", "પ્લેટફોર્મ 3"),
    ("lp4", "प्लेटफ़ॉर्म 4", "प्लॅटफॉर्म 4", "પ્લેટફોર્મ 4"),
    ("tc1", "टिकट काउंटर 1", "तिकीट काउंटर 1", "ટિકિટ કાઉન્ટર 1"),
    ("tc2", "टिकट काउंटर 2", "तिकीट काउंटर 2", "ટિકિટ કાઉન્ટર 2"),
    ("wtrm", "प्रतीक्षालय", "प्रतीक्षा कक्ष", "પ્રતીક્ષા ખંડ"),
    ("mdrm", "चिकित्सा कक्ष", "वैद्यकीय कक्ष", "મેડિકલ રૂમ"),
    ("wsrm", "शौचालय", "स्वच्छतागृह", "શૌચાલય"),
    ("esc2", "एस्केलेटर", "एस्केलेटर", "એસ્કેલેટર"),
    ("elv", "लिफ्ट", "लिफ्ट", "લિફ્ટ"),
    ("ep", "पार्किंग लिफ्ट", "पार्किंग लिफ्ट", "પાર્કિંગ લિફ્ટ"),
    ("fd_ct", "फूड कोर्ट", "फूड कोर्ट", "ફૂડ કોર્ટ"),
    ("stm", "स्टेशन मास्टर", "स्टेशन मास्टर", "સ્ટેશન માસ્ટર"),
    ("bus_st", "बस स्टेशन", "बस स्थानक", "બસ સ્ટેશન"),
    ("pkng", "पार्किंग", "पार्किंग", "પાર્કિંગ"),
    ("enex_e1", "पूर्वी निकास 1", "पूर्व निर्गम 1", "પૂર્વ નિકાસ 1"),
    ("enex_e2", "पूर्वी निकास 2", "पूर्व निर्गम 2", "પૂર્વ નિકાસ 2"),
    ("enex_w", "पश्चिमी निकास", "पश्चिम निर्गम", "પશ્ચિમ નિકાસ"),
];

/// Build the Kalwa station venue graph.
pub fn kalwa() -> GraphResult<VenueGraph> {
    let mut b = VenueGraphBuilder::with_capacity(NODES.len(), LINKS.len());

    for &(key, name, kind, x, y) in NODES {
        b.add_node(key, name, kind, CanvasPoint::new(x, y));
    }
    for &(from, to, weight) in LINKS {
        b.link(from, to, weight);
    }

    for &(key, hindi, marathi, gujarati) in DESTINATIONS {
        match b.node_id(key) {
            Some(id) => b.mark_destination(id, hindi, marathi, gujarati),
            None => log::warn!("destination table entry '{key}' names no node; skipping"),
        }
    }

    b.build()
}
