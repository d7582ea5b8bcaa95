//! Responsive card geometry.
//!
//! Card width and inter-card gap depend on the viewport width through an
//! ordered breakpoint table. Resolution is a pure function over an injected
//! [`GeometryConfig`], so layout math is testable with literal widths and
//! hosts can ship their own tables (the config round-trips through serde).

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::constants::{
    MEDIUM_CARD_WIDTH, MEDIUM_GAP, MEDIUM_MAX_WIDTH, NARROW_CARD_WIDTH, NARROW_GAP,
    NARROW_MAX_WIDTH, WIDE_CARD_WIDTH, WIDE_GAP,
};

/// Card width and inter-card gap resolved for one viewport width.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CardMetrics {
    /// Width of every card, in pixels
    pub card_width: f32,
    /// Horizontal gap between adjacent slots, in pixels
    pub gap: f32,
}

impl CardMetrics {
    /// Center-to-center distance between adjacent slots
    #[inline]
    pub fn slot_stride(&self) -> f32 {
        self.card_width + self.gap
    }
}

/// One row of the breakpoint table: metrics that apply up to (and
/// including) `max_width`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Breakpoint {
    /// Widest viewport this row applies to
    pub max_width: f32,
    /// Metrics for viewports at or below `max_width`
    pub metrics: CardMetrics,
}

/// Ordered breakpoint table mapping viewport width to card metrics.
///
/// Static at runtime; the engine re-resolves it on every replan so a
/// resized viewport picks up the matching row.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeometryConfig {
    /// Rows checked narrowest-first
    breakpoints: Vec<Breakpoint>,
    /// Metrics for viewports wider than every row
    fallback: CardMetrics,
}

/// Breakpoint table used when the host supplies no custom geometry.
static DEFAULT_CONFIG: Lazy<GeometryConfig> = Lazy::new(|| {
    GeometryConfig::new(
        vec![
            Breakpoint {
                max_width: NARROW_MAX_WIDTH,
                metrics: CardMetrics {
                    card_width: NARROW_CARD_WIDTH,
                    gap: NARROW_GAP,
                },
            },
            Breakpoint {
                max_width: MEDIUM_MAX_WIDTH,
                metrics: CardMetrics {
                    card_width: MEDIUM_CARD_WIDTH,
                    gap: MEDIUM_GAP,
                },
            },
        ],
        CardMetrics {
            card_width: WIDE_CARD_WIDTH,
            gap: WIDE_GAP,
        },
    )
});

impl GeometryConfig {
    /// Create a config from breakpoint rows and a fallback.
    ///
    /// Rows are normalized to narrowest-first order so resolution can stop
    /// at the first match regardless of input order.
    pub fn new(mut breakpoints: Vec<Breakpoint>, fallback: CardMetrics) -> Self {
        breakpoints.sort_by(|a, b| a.max_width.total_cmp(&b.max_width));
        Self {
            breakpoints,
            fallback,
        }
    }

    /// The built-in table: ≤576 → (280, 16), ≤768 → (300, 32),
    /// wider → (400, 32).
    pub fn standard() -> &'static GeometryConfig {
        &DEFAULT_CONFIG
    }

    /// Resolve metrics for a viewport width: the narrowest row that still
    /// covers it, or the fallback. Total: every width maps to something.
    ///
    /// Picks by `max_width` rather than position, so a table that skipped
    /// [`GeometryConfig::new`] (serde) resolves correctly too.
    pub fn resolve(&self, viewport_width: f32) -> CardMetrics {
        self.breakpoints
            .iter()
            .filter(|breakpoint| viewport_width <= breakpoint.max_width)
            .min_by(|a, b| a.max_width.total_cmp(&b.max_width))
            .map(|breakpoint| breakpoint.metrics)
            .unwrap_or(self.fallback)
    }
}

impl Default for GeometryConfig {
    fn default() -> Self {
        DEFAULT_CONFIG.clone()
    }
}
