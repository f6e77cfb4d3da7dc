/// How an adapter should apply a [`ScrollRequest`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollBehavior {
    /// Animate towards the offset. The adapter owns the animation.
    Smooth,
    /// Jump to the offset in the same frame (drag tracking).
    Instant,
}

/// A scroll offset the adapter should apply to the real scroll container.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollRequest {
    pub offset: f64,
    pub behavior: ScrollBehavior,
}

impl ScrollRequest {
    pub fn smooth(offset: f64) -> Self {
        Self {
            offset,
            behavior: ScrollBehavior::Smooth,
        }
    }

    pub fn instant(offset: f64) -> Self {
        Self {
            offset,
            behavior: ScrollBehavior::Instant,
        }
    }
}

/// Measured geometry of the scroll strip, in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Viewport {
    /// Visible width of the strip (DOM `clientWidth`).
    pub container_width: f64,
    /// Full scrollable width of the strip (DOM `scrollWidth`).
    pub content_width: f64,
    /// Width of the window, compared against the breakpoints.
    pub window_width: f64,
}

impl Viewport {
    pub fn new(container_width: f64, content_width: f64, window_width: f64) -> Self {
        Self {
            container_width,
            content_width,
            window_width,
        }
    }

    /// Returns `true` once the container has a real, non-zero width.
    pub fn is_measured(&self) -> bool {
        self.container_width.is_finite() && self.container_width > 0.0
    }

    /// Largest reachable scroll offset (never negative).
    pub fn max_scroll(&self) -> f64 {
        let max = self.content_width - self.container_width;
        if max.is_finite() && max > 0.0 { max } else { 0.0 }
    }

    pub fn clamp_offset(&self, offset: f64) -> f64 {
        if !offset.is_finite() {
            return 0.0;
        }
        offset.clamp(0.0, self.max_scroll())
    }
}

/// Why the current index changed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum IndexChangeReason {
    /// Passive tracking of the scroll position.
    ScrollSettle,
    /// Snap after a drag session ended.
    DragRelease,
    /// Autoplay timer fired.
    Autoplay,
    /// An indicator dot was clicked.
    Indicator,
    /// The adapter called `scroll_to_index` directly.
    Programmatic,
}

/// A position indicator ("dot") for one item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Indicator {
    pub index: usize,
    pub active: bool,
}

/// Transient state held while a pointer press is active.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DragSession {
    /// Pointer x (relative to the strip) at press time.
    pub origin_x: f64,
    /// Scroll offset at press time.
    pub origin_offset: f64,
}

impl DragSession {
    /// Offset for a pointer at `x`, always relative to the press origin.
    pub fn offset_for(&self, x: f64, drag_speed: f64) -> f64 {
        let walk = (x - self.origin_x) * drag_speed;
        self.origin_offset - walk
    }
}
