//! Gesture recognizers: device-motion shake and touch swipe.
//!
//! Both detectors are plain state machines. They never read a clock;
//! callers pass the millisecond timestamp of each event (the client's
//! event time), which keeps them deterministic and testable.

pub mod shake;
pub mod swipe;

pub use shake::{MotionPermission, MotionSample, ShakeConfig, ShakeDetector, ShakeEvent};
pub use swipe::{SwipeConfig, SwipeDetector, SwipeDirection, TouchPoint};
