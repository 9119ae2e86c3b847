//! Component trait system for the editor TUI
//!
//! Panels declare their own capabilities through traits instead of App
//! knowing how to render and scroll every one of them.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                         App                                 │
//! │     (orchestrator: owns the Editor, routes key events)      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!              ┌───────────────┼───────────────┐
//!              ▼               ▼               ▼
//!        ┌──────────┐   ┌──────────┐   ┌──────────┐
//!        │   Form   │   │ Preview  │   │   Logs   │
//!        │  Panel   │   │  Panel   │   │  Panel   │
//!        └──────────┘   └──────────┘   └──────────┘
//! ```
//!
//! - [`Component`] - render + identity
//! - [`Scrollable`] - components with scrollable content
//! - [`Interactive`] - components that handle keyboard input on their own
//!
//! The form panel is deliberately not [`Interactive`]: its keys mutate the
//! document, so App interprets them against the Editor it owns.

mod component;
mod interactive;
mod scrollable;

pub use component::{Component, ComponentId, RenderContext};
pub use interactive::{Handled, Interactive, ScrollableInteractive};
pub use scrollable::Scrollable;
