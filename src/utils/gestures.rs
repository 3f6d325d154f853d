/// Swipes slower than this are treated as drags, not gestures.
pub const SWIPE_MAX_DURATION_MS: u64 = 300;
pub const DEFAULT_SWIPE_THRESHOLD: f64 = 50.0;
pub const DOUBLE_TAP_WINDOW_MS: u64 = 300;
pub const LONG_PRESS_DURATION_MS: u64 = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    Left,
    Right,
    Up,
    Down,
}

/// Classifies a touch movement as a swipe.
///
/// A swipe must finish within 300 ms and travel at least `threshold`
/// pixels on its dominant axis; ties go to the vertical axis. Anything
/// else returns `None`.
pub fn classify_swipe(
    delta_x: f64,
    delta_y: f64,
    elapsed_ms: u64,
    threshold: f64,
) -> Option<SwipeDirection> {
    if elapsed_ms > SWIPE_MAX_DURATION_MS {
        return None;
    }

    let abs_x = delta_x.abs();
    let abs_y = delta_y.abs();

    if abs_x.max(abs_y) < threshold {
        return None;
    }

    if abs_x > abs_y {
        if delta_x > 0.0 {
            Some(SwipeDirection::Right)
        } else {
            Some(SwipeDirection::Left)
        }
    } else if delta_y > 0.0 {
        Some(SwipeDirection::Down)
    } else {
        Some(SwipeDirection::Up)
    }
}

/// `classify_swipe` with the default 50 px threshold.
pub fn classify_swipe_default(
    delta_x: f64,
    delta_y: f64,
    elapsed_ms: u64,
) -> Option<SwipeDirection> {
    classify_swipe(delta_x, delta_y, elapsed_ms, DEFAULT_SWIPE_THRESHOLD)
}

/// A touch held at least this long without release counts as a long press.
pub fn is_long_press(held_ms: u64) -> bool {
    held_ms >= LONG_PRESS_DURATION_MS
}

/// Rolling double-tap state: feed it tap timestamps, it reports when two
/// land close enough together.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DoubleTapTracker {
    last_tap_ms: u64,
}

impl DoubleTapTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a tap at `at_ms` (any monotonic millisecond clock) and
    /// returns whether it completed a double tap. A completed double tap
    /// resets the tracker, so a third tap starts a fresh pair.
    pub fn register_tap(&mut self, at_ms: u64) -> bool {
        let gap = at_ms.saturating_sub(self.last_tap_ms);

        if self.last_tap_ms > 0 && gap > 0 && gap < DOUBLE_TAP_WINDOW_MS {
            self.last_tap_ms = 0;
            true
        } else {
            self.last_tap_ms = at_ms;
            false
        }
    }
}
