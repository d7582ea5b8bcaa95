//! # cardwheel
//!
//! Host-agnostic engine for an interactive, infinitely-wrapping card
//! carousel: an ordered collection of cards, one focal card, and a 3-slot
//! rendered view (previous/current/next) with scale and opacity
//! differentiation.
//!
//! The engine owns the position/visibility state machine and nothing else.
//! A host - a DOM shim, a GUI toolkit, or a test fake - forwards input events
//! (clicks, arrow keys, touch swipes, wheel gestures, resizes) and timer
//! callbacks into the [`Carousel`] handlers, and implements [`Host`] to
//! receive per-card [`CardPlan`]s, timeout requests and frame callbacks
//! back. All state lives in the `Carousel` value; there are no globals.
//!
//! ## Modules
//!
//! - [`types`] - Cards, roles, and the per-card render plan
//! - [`ring`] - Shortest signed circular distance between card indices
//! - [`geometry`] - Responsive breakpoint table for card width and gap
//! - `plan` - The 3-slot visibility planner
//! - `transition` - In-flight transition flag with dual-path clearing
//! - [`carousel`] - State, mounting, replanning, timer routing
//! - `navigation` - next/previous/jump ops (the only index writers)
//! - [`input`] - Per-gesture handlers with thresholds and debouncing
//! - [`host`] - The trait boundary toward the rendering environment

pub mod carousel;
pub mod constants;
pub mod error;
pub mod geometry;
pub mod host;
pub mod input;
mod navigation;
mod plan;
pub mod ring;
mod transition;
pub mod types;

pub use carousel::{Carousel, CarouselState};
pub use error::{CarouselError, CarouselResult};
pub use geometry::{Breakpoint, CardMetrics, GeometryConfig};
pub use host::{Host, TimerHandle, TimerKind};
pub use input::{Key, NavControl};
pub use ring::circular_offset;
pub use types::{Card, CardPlan, CardRole};
