//! `wf-session` — orchestration of one kiosk's interaction state.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                |
//! |--------------|---------------------------------------------------------|
//! | [`session`]  | `RouteSession` — the transition state machine           |
//! | [`observer`] | `SessionObserver`, `NoopObserver`                       |
//! | [`persist`]  | enabled-set JSON record: `load`, `save`                 |
//! | [`voice`]    | speech traits, `NarrationPlayer`, `VoiceInput`          |
//! | [`render`]   | `NodeMarker`, `map_markers`, `route_polyline`           |
//! | [`error`]    | `SessionError`, `SessionResult<T>`                      |
//!
//! # Boundary rules
//!
//! Rider-facing transitions are infallible by contract: bad input degrades
//! to an empty route and a localized phrase.  Errors only cross the two
//! operator boundaries — the admin enabled-set apply and persistence I/O.

pub mod error;
pub mod observer;
pub mod persist;
pub mod render;
pub mod session;
pub mod voice;


pub use error::{SessionError, SessionResult};
pub use observer::{NoopObserver, SessionObserver};
pub use render::{map_markers, route_polyline, NodeMarker};
pub use session::RouteSession;
pub use voice::{
    match_destination, AudioClip, NarrationPlayer, NoopRecognizer, NoopSynthesizer,
    SpeechRecognizer, SpeechSynthesizer, VoiceError, VoiceInput, LISTEN_TIMEOUT,
};
