//! kiosk — scripted end-to-end walkthrough of the wayfind engine.
//!
//! Boots a session over the built-in Kalwa station venue, restores the
//! enabled-set record from disk, guides a rider to Platform 1, then plays
//! station admin: closes Escalator 3, shows the rerouted guidance, and
//! persists the change.  Run twice to see the closure survive a restart.

use std::collections::HashMap;
use std::path::Path;

use anyhow::Result;

use wf_core::Language;
use wf_graph::station;
use wf_route::{DijkstraRouter, Route};
use wf_session::{persist, NarrationPlayer, NoopSynthesizer, RouteSession, SessionObserver};

const RECORD_PATH: &str = "output/kiosk/enabled.json";

// ── Observer ──────────────────────────────────────────────────────────────────

/// Prints each narration step and speaks it through the (silent) player.
struct KioskFrontend {
    player: NarrationPlayer<NoopSynthesizer>,
    language: Language,
}

impl SessionObserver for KioskFrontend {
    fn on_route_changed(&mut self, route: &Route, narration: &[String]) {
        if route.found() {
            println!(
                "  route: {} nodes, cost {:.1}",
                route.len(),
                route.cost_milli as f64 / 1000.0,
            );
        }
        for step in narration {
            println!("  > {step}");
        }
        self.player.speak(&narration.join(" "), self.language);
    }

    fn on_reset(&mut self) {
        self.player.stop();
        println!("  (session reset)");
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::init();

    println!("=== kiosk — wayfind engine walkthrough ===");
    println!();

    // 1. Build the venue and restore the enabled set.
    let venue = station::kalwa()?;
    println!(
        "Venue: {} nodes, {} quick-search destinations",
        venue.node_count(),
        venue.destinations().count(),
    );
    let enabled = persist::load(Path::new(RECORD_PATH), &venue);
    println!("Enabled at boot: {} nodes", enabled.enabled_count());
    println!();

    let mut session = RouteSession::with_enabled_set(venue, DijkstraRouter, enabled);
    let mut frontend = KioskFrontend {
        player: NarrationPlayer::new(NoopSynthesizer),
        language: Language::English,
    };

    // 2. Rider selects Platform 1.
    println!("Rider selects Platform 1:");
    session.set_destination("lp1", &mut frontend);
    println!();

    // 3. Same guidance in Hindi.
    println!("Rider switches to Hindi:");
    frontend.language = Language::Hindi;
    session.set_language(Language::Hindi, &mut frontend);
    frontend.language = Language::English;
    session.set_language(Language::English, &mut frontend);
    println!();

    // 4. Admin closes Escalator 3 — full-replacement payload, as the
    //    admin console would send it.
    println!("Admin closes Escalator 3:");
    let mut payload: HashMap<String, bool> = session.enabled().to_key_map(session.venue());
    payload.insert("esc3".into(), false);
    session.apply_enabled_set(&payload, &mut frontend)?;
    std::fs::create_dir_all("output/kiosk")?;
    persist::save(Path::new(RECORD_PATH), session.venue(), session.enabled())?;
    println!("  record saved to {RECORD_PATH}");
    println!();

    // 5. A payload naming a nonexistent node is rejected wholesale.
    println!("Admin sends a stale payload (has a removed node):");
    let mut stale = payload.clone();
    stale.insert("old-footbridge".into(), true);
    match session.apply_enabled_set(&stale, &mut frontend) {
        Ok(()) => println!("  unexpectedly accepted"),
        Err(err) => println!("  rejected: {err}"),
    }
    println!();

    // 6. Rider walks away; the kiosk returns to idle.
    println!("Rider leaves:");
    session.reset(&mut frontend);

    Ok(())
}
