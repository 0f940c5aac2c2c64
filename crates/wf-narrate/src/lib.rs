//! `wf-narrate` — turning an ordered node path into spoken-ready guidance.
//!
//! # Crate layout
//!
//! | Module       | Contents                                               |
//! |--------------|--------------------------------------------------------|
//! | [`phrase`]   | `Phrases` — per-language fixed-phrase tables           |
//! | [`narrator`] | `Direction`, `narrate`, `narration_text`               |
//!
//! Narration is pure string assembly: coordinates in, localized
//! instructions out.  Speech synthesis lives behind the voice boundary in
//! `wf-session`; this crate never touches audio.

pub mod narrator;
pub mod phrase;


pub use narrator::{narrate, narration_text, Direction};
pub use phrase::Phrases;
