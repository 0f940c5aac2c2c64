//! Session observer trait for UI frontends and loggers.

use wf_route::Route;

/// Callbacks invoked by [`RouteSession`][crate::RouteSession] after each
/// state transition.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — narration printer
///
/// ```rust,ignore
/// struct NarrationPrinter;
///
/// impl SessionObserver for NarrationPrinter {
///     fn on_route_changed(&mut self, _route: &Route, narration: &[String]) {
///         for step in narration {
///             println!("{step}");
///         }
///     }
/// }
/// ```
pub trait SessionObserver {
    /// Called after any transition that recomputed the route.
    ///
    /// `route` may be empty (no destination, or destination unreachable);
    /// `narration` always holds at least one localized phrase.
    fn on_route_changed(&mut self, _route: &Route, _narration: &[String]) {}

    /// Called when the session returns to its idle state.
    fn on_reset(&mut self) {}
}

/// A [`SessionObserver`] that does nothing.  Use when driving a session
/// without a frontend attached.
pub struct NoopObserver;

impl SessionObserver for NoopObserver {}
