//! Shake detection over 3-axis acceleration samples.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Acceleration magnitude (m/s², gravity included) above which a sample
/// counts as a shake.
pub const DEFAULT_SHAKE_THRESHOLD: f64 = 15.0;

/// Minimum interval between two fired shakes, in milliseconds.
pub const DEFAULT_SHAKE_COOLDOWN_MS: u64 = 1_000;

/// How long the "is shaking" flag stays raised after a shake.
pub const DEFAULT_SHAKE_ANIMATION_MS: u64 = 500;

/// Tunables for [`ShakeDetector`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShakeConfig {
    /// Magnitude that must be exceeded.
    pub threshold: f64,
    /// Cooldown between fires.
    pub cooldown_ms: u64,
    /// Duration of the transient shaking flag.
    pub animation_ms: u64,
}

impl Default for ShakeConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_SHAKE_THRESHOLD,
            cooldown_ms: DEFAULT_SHAKE_COOLDOWN_MS,
            animation_ms: DEFAULT_SHAKE_ANIMATION_MS,
        }
    }
}

/// Outcome of the platform's motion-sensor permission prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum MotionPermission {
    /// The platform delivers motion events without asking.
    #[default]
    NotRequired,
    /// The user granted access.
    Granted,
    /// The user refused access.
    Denied,
    /// The device has no motion API.
    Unavailable,
}

impl MotionPermission {
    /// Whether sensor events are delivered under this permission.
    #[must_use]
    pub const fn delivers_events(self) -> bool {
        matches!(self, Self::NotRequired | Self::Granted)
    }
}

/// One acceleration reading. Browsers may report `null` axes, so each
/// component is optional.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, ToSchema)]
pub struct MotionSample {
    /// X-axis acceleration.
    pub x: Option<f64>,
    /// Y-axis acceleration.
    pub y: Option<f64>,
    /// Z-axis acceleration.
    pub z: Option<f64>,
}

impl MotionSample {
    /// Creates a sample with all three axes present.
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            z: Some(z),
        }
    }

    /// Euclidean magnitude, or `None` if any axis is missing.
    #[must_use]
    pub fn magnitude(&self) -> Option<f64> {
        let (x, y, z) = (self.x?, self.y?, self.z?);
        Some((x * x + y * y + z * z).sqrt())
    }
}

/// A recognized shake.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, ToSchema)]
pub struct ShakeEvent {
    /// Timestamp of the sample that fired.
    pub at_ms: u64,
    /// Magnitude of that sample.
    pub magnitude: f64,
}

/// Turns a stream of motion samples into discrete shake events.
///
/// Fires when a sample's magnitude exceeds the threshold and more than the
/// cooldown has elapsed since the previous fire. A flood of strong samples
/// therefore yields at most one event per cooldown window.
#[derive(Debug, Clone)]
pub struct ShakeDetector {
    config: ShakeConfig,
    permission: MotionPermission,
    last_fire_ms: Option<u64>,
}

impl ShakeDetector {
    /// Creates a detector. Permission defaults to [`MotionPermission::NotRequired`].
    #[must_use]
    pub fn new(config: ShakeConfig) -> Self {
        Self {
            config,
            permission: MotionPermission::default(),
            last_fire_ms: None,
        }
    }

    /// Records the platform permission result.
    pub fn set_permission(&mut self, permission: MotionPermission) {
        if !permission.delivers_events() {
            tracing::debug!(?permission, "motion events disabled");
        }
        self.permission = permission;
    }

    /// Current permission.
    #[must_use]
    pub const fn permission(&self) -> MotionPermission {
        self.permission
    }

    /// Feeds one sample. Returns the event if this sample fires a shake.
    pub fn on_motion(&mut self, sample: MotionSample, now_ms: u64) -> Option<ShakeEvent> {
        if !self.permission.delivers_events() {
            return None;
        }
        let magnitude = sample.magnitude()?;
        if magnitude <= self.config.threshold {
            return None;
        }
        if let Some(last) = self.last_fire_ms
            && now_ms.saturating_sub(last) <= self.config.cooldown_ms
        {
            return None;
        }
        self.last_fire_ms = Some(now_ms);
        Some(ShakeEvent {
            at_ms: now_ms,
            magnitude,
        })
    }

    /// Whether the transient shaking flag is raised at `now_ms`.
    #[must_use]
    pub fn is_shaking(&self, now_ms: u64) -> bool {
        self.last_fire_ms
            .is_some_and(|last| now_ms >= last && now_ms - last < self.config.animation_ms)
    }
}

impl Default for ShakeDetector {
    fn default() -> Self {
        Self::new(ShakeConfig::default())
    }
}
