//! The voice boundary: speech synthesis and recognition traits, the
//! narration player, and voice destination matching.
//!
//! Actual audio I/O lives outside the engine.  The traits here define the
//! contract a platform integration implements; the engine only enforces
//! the resource rules — at most one clip playing, at most one listening
//! session, an 8-second listening window.

use std::time::{Duration, Instant};

use wf_core::{Language, NodeId};
use wf_graph::VenueGraph;

use thiserror::Error;

/// How long a listening session stays open before it is forced shut.
pub const LISTEN_TIMEOUT: Duration = Duration::from_secs(8);

/// Errors from the platform speech services.  Always non-fatal to the
/// session: synthesis failures degrade to silent guidance, recognition
/// failures to "not recognized".
#[derive(Debug, Error)]
pub enum VoiceError {
    #[error("speech synthesis failed: {0}")]
    Synthesis(String),

    #[error("speech recognition unavailable: {0}")]
    Recognition(String),
}

// ── Platform traits ───────────────────────────────────────────────────────────

/// A synthesized utterance, ready for the platform's audio output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioClip {
    pub text: String,
    pub language: Language,
}

/// Text-to-speech boundary.
pub trait SpeechSynthesizer {
    fn synthesize(&mut self, text: &str, language: Language) -> Result<AudioClip, VoiceError>;
}

/// Speech-to-text boundary.
///
/// `poll_final` is pull-based so the engine stays free of callbacks and
/// threads: the platform buffers a final transcript until the engine asks.
pub trait SpeechRecognizer {
    fn start(&mut self, language: Language) -> Result<(), VoiceError>;
    fn stop(&mut self);
    fn poll_final(&mut self) -> Option<String>;
}

/// A [`SpeechSynthesizer`] for tests and silent kiosks: accepts every
/// utterance, produces no audio.
pub struct NoopSynthesizer;

impl SpeechSynthesizer for NoopSynthesizer {
    fn synthesize(&mut self, text: &str, language: Language) -> Result<AudioClip, VoiceError> {
        Ok(AudioClip {
            text: text.to_owned(),
            language,
        })
    }
}

/// A [`SpeechRecognizer`] that never hears anything.
pub struct NoopRecognizer;

impl SpeechRecognizer for NoopRecognizer {
    fn start(&mut self, _language: Language) -> Result<(), VoiceError> {
        Ok(())
    }

    fn stop(&mut self) {}

    fn poll_final(&mut self) -> Option<String> {
        None
    }
}

// ── NarrationPlayer ───────────────────────────────────────────────────────────

/// Owns the at-most-one-active-clip rule for spoken guidance.
///
/// [`speak`](Self::speak) always stops the current clip before starting
/// the next, so narrations never overlap when the rider re-selects
/// mid-sentence.  Synthesis failure logs a warning and leaves the player
/// silent; the on-screen narration is unaffected.
pub struct NarrationPlayer<S: SpeechSynthesizer> {
    synth: S,
    current: Option<AudioClip>,
}

impl<S: SpeechSynthesizer> NarrationPlayer<S> {
    pub fn new(synth: S) -> Self {
        Self {
            synth,
            current: None,
        }
    }

    /// Speak `text`, replacing whatever is currently playing.
    pub fn speak(&mut self, text: &str, language: Language) {
        self.stop();
        match self.synth.synthesize(text, language) {
            Ok(clip) => self.current = Some(clip),
            Err(err) => log::warn!("narration muted: {err}"),
        }
    }

    /// Stop playback.  Called on session reset.
    pub fn stop(&mut self) {
        if self.current.take().is_some() {
            log::debug!("narration stopped");
        }
    }

    /// The clip currently playing, if any.
    pub fn current(&self) -> Option<&AudioClip> {
        self.current.as_ref()
    }
}

// ── VoiceInput ────────────────────────────────────────────────────────────────

/// An exclusive listening session with a hard timeout.
///
/// The caller drives time explicitly through `Instant` arguments, so the
/// timeout is testable without sleeping.
pub struct VoiceInput<R: SpeechRecognizer> {
    recognizer: R,
    deadline: Option<Instant>,
}

impl<R: SpeechRecognizer> VoiceInput<R> {
    pub fn new(recognizer: R) -> Self {
        Self {
            recognizer,
            deadline: None,
        }
    }

    /// Open a listening window closing [`LISTEN_TIMEOUT`] after `now`.
    ///
    /// If a window is already open it is stopped first, so a second tap on
    /// the microphone restarts listening rather than stacking sessions.
    pub fn start(&mut self, language: Language, now: Instant) -> Result<(), VoiceError> {
        if self.deadline.is_some() {
            self.recognizer.stop();
            self.deadline = None;
        }
        self.recognizer.start(language)?;
        self.deadline = Some(now + LISTEN_TIMEOUT);
        Ok(())
    }

    /// Close the listening window.
    pub fn stop(&mut self) {
        if self.deadline.take().is_some() {
            self.recognizer.stop();
        }
    }

    pub fn is_listening(&self) -> bool {
        self.deadline.is_some()
    }

    /// `true` once the window has outlived its timeout.
    pub fn expired(&self, now: Instant) -> bool {
        matches!(self.deadline, Some(deadline) if now >= deadline)
    }

    /// Fetch a final transcript, enforcing the timeout.
    ///
    /// Returns `None` while still listening without a result.  Both a
    /// delivered transcript and an expired window close the session.
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        self.deadline?;
        if self.expired(now) {
            log::debug!("listening window expired");
            self.stop();
            return None;
        }
        let transcript = self.recognizer.poll_final()?;
        self.stop();
        Some(transcript)
    }
}

// ── Destination matching ──────────────────────────────────────────────────────

/// Resolve a spoken transcript to a destination node.
///
/// Matching is case-insensitive on trimmed text and checks containment in
/// both directions, so "platform 1" matches the label "Platform 1" and so
/// does "take me to platform 1".  Destinations are scanned in authoring
/// order; the first hit wins.  Labels come from the active language, which
/// falls back to English for nodes without a translation.
pub fn match_destination(
    transcript: &str,
    venue: &VenueGraph,
    language: Language,
) -> Option<NodeId> {
    let needle = transcript.trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }

    venue.destinations().find(|&dest| {
        let label = venue.label(dest, language).to_lowercase();
        !label.is_empty() && (needle.contains(&label) || label.contains(&needle))
    })
}
