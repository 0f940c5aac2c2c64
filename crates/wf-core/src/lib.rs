//! `wf-core` — foundational types for the `wayfind` station navigation engine.
//!
//! This crate is a dependency of every other `wf-*` crate.  It intentionally
//! has no `wf-*` dependencies and no required external ones (only optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                              |
//! |-------------|-------------------------------------------------------|
//! | [`ids`]     | `NodeId`                                              |
//! | [`canvas`]  | `CanvasPoint`, the 900×400 reference frame            |
//! | [`lang`]    | `Language` enum and code parsing                      |
//! | [`kind`]    | `NodeKind` location-category enum                     |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod canvas;
pub mod ids;
pub mod kind;
pub mod lang;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use canvas::{CanvasPoint, FRAME_HEIGHT, FRAME_WIDTH};
pub use ids::NodeId;
pub use kind::NodeKind;
pub use lang::Language;
