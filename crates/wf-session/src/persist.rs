//! Enabled-set persistence.
//!
//! The record is a flat JSON `key -> enabled` map keyed by authored node
//! keys, so it survives `NodeId` renumbering across venue edits.  Loading
//! is infallible: a kiosk must boot even when its record is missing or
//! damaged, so both cases fall back to the all-enabled default with a
//! logged warning.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use wf_graph::{EnabledSet, VenueGraph};

use crate::SessionResult;

/// Restore the enabled set from `path`.
///
/// Missing file, unreadable file, and corrupt JSON all yield
/// [`EnabledSet::all_enabled`].  Record keys that no longer name a venue
/// node are ignored (see [`EnabledSet::from_key_map`]).
pub fn load(path: &Path, venue: &VenueGraph) -> EnabledSet {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) => {
            log::warn!(
                "no enabled-set record at {}: {err}; starting all-enabled",
                path.display(),
            );
            return EnabledSet::all_enabled(venue);
        }
    };

    match serde_json::from_str::<HashMap<String, bool>>(&raw) {
        Ok(map) => EnabledSet::from_key_map(venue, &map),
        Err(err) => {
            log::warn!(
                "corrupt enabled-set record at {}: {err}; starting all-enabled",
                path.display(),
            );
            EnabledSet::all_enabled(venue)
        }
    }
}

/// Write the enabled set to `path`, replacing any existing record.
///
/// Called synchronously after every successful admin apply.
pub fn save(path: &Path, venue: &VenueGraph, enabled: &EnabledSet) -> SessionResult<()> {
    let map = enabled.to_key_map(venue);
    let json = serde_json::to_string_pretty(&map).map_err(std::io::Error::from)?;
    fs::write(path, json)?;
    log::debug!("enabled-set record written to {}", path.display());
    Ok(())
}
