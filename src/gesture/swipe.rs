//! Swipe recognition over touch start / end / cancel events.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Minimum displacement along the dominant axis, in CSS pixels.
pub const DEFAULT_SWIPE_DISTANCE: f64 = 100.0;

/// Minimum average speed, in pixels per millisecond.
pub const DEFAULT_SWIPE_VELOCITY: f64 = 0.3;

/// Tunables for [`SwipeDetector`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeConfig {
    /// Displacement that must be exceeded on at least one axis.
    pub min_distance: f64,
    /// Velocity that must be reached.
    pub min_velocity: f64,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            min_distance: DEFAULT_SWIPE_DISTANCE,
            min_velocity: DEFAULT_SWIPE_VELOCITY,
        }
    }
}

/// Screen coordinates of a touch.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, ToSchema)]
pub struct TouchPoint {
    /// Horizontal client coordinate.
    pub x: f64,
    /// Vertical client coordinate (grows downwards).
    pub y: f64,
}

impl TouchPoint {
    /// Creates a point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Direction of a recognized swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SwipeDirection {
    /// Finger moved towards negative x.
    Left,
    /// Finger moved towards positive x.
    Right,
    /// Finger moved towards negative y.
    Up,
    /// Finger moved towards positive y.
    Down,
}

#[derive(Debug, Clone, Copy)]
struct TouchStart {
    point: TouchPoint,
    at_ms: u64,
}

/// Turns touch events into directional swipes.
#[derive(Debug, Clone, Default)]
pub struct SwipeDetector {
    config: SwipeConfig,
    start: Option<TouchStart>,
}

impl SwipeDetector {
    /// Creates a detector.
    #[must_use]
    pub const fn new(config: SwipeConfig) -> Self {
        Self {
            config,
            start: None,
        }
    }

    /// Records the start of a gesture, replacing any gesture in flight.
    pub fn on_touch_start(&mut self, point: TouchPoint, now_ms: u64) {
        self.start = Some(TouchStart {
            point,
            at_ms: now_ms,
        });
    }

    /// Completes the gesture in flight.
    ///
    /// Returns a direction only if both the distance and the velocity
    /// thresholds are met. The gesture is consumed either way.
    pub fn on_touch_end(&mut self, point: TouchPoint, now_ms: u64) -> Option<SwipeDirection> {
        let start = self.start.take()?;
        let dx = point.x - start.point.x;
        let dy = point.y - start.point.y;
        let elapsed_ms = now_ms.saturating_sub(start.at_ms).max(1);
        #[allow(clippy::cast_precision_loss)]
        let velocity = dx.hypot(dy) / elapsed_ms as f64;

        if velocity < self.config.min_velocity {
            return None;
        }

        let (abs_dx, abs_dy) = (dx.abs(), dy.abs());
        if abs_dx <= self.config.min_distance && abs_dy <= self.config.min_distance {
            return None;
        }

        let direction = if abs_dx > abs_dy {
            if dx > 0.0 {
                SwipeDirection::Right
            } else {
                SwipeDirection::Left
            }
        } else if dy > 0.0 {
            SwipeDirection::Down
        } else {
            SwipeDirection::Up
        };
        Some(direction)
    }

    /// Discards the gesture in flight without firing.
    pub fn on_touch_cancel(&mut self) {
        self.start = None;
    }

    /// Whether a gesture is in flight.
    #[must_use]
    pub const fn is_tracking(&self) -> bool {
        self.start.is_some()
    }
}
