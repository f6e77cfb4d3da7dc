//! Responsive item sizing and the offset ↔ index rules.
//!
//! Everything here is a pure function of the current [`Viewport`], so adapters can call these
//! helpers directly (e.g. to pre-compute a snap target) without touching a [`crate::Carousel`].

use crate::Viewport;

/// Window-width thresholds used to pick how many items share the strip.
///
/// Defaults follow the common `sm = 600` / `md = 900` design-system breakpoints.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Breakpoints {
    /// Below this window width, one item fills the strip.
    pub small: f64,
    /// At or above this window width, three items share the strip.
    pub medium: f64,
}

impl Breakpoints {
    pub const DEFAULT_SMALL: f64 = 600.0;
    pub const DEFAULT_MEDIUM: f64 = 900.0;

    pub fn new(small: f64, medium: f64) -> Self {
        Self { small, medium }
    }

    pub(crate) fn is_valid(&self) -> bool {
        self.small.is_finite()
            && self.medium.is_finite()
            && self.small > 0.0
            && self.small < self.medium
    }
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            small: Self::DEFAULT_SMALL,
            medium: Self::DEFAULT_MEDIUM,
        }
    }
}

/// How many items are visible side by side.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemsPerView {
    One,
    Two,
    Three,
}

impl ItemsPerView {
    pub fn for_window(window_width: f64, breakpoints: Breakpoints) -> Self {
        if window_width < breakpoints.small {
            Self::One
        } else if window_width >= breakpoints.medium {
            Self::Three
        } else {
            Self::Two
        }
    }

    pub fn get(self) -> u32 {
        match self {
            Self::One => 1,
            Self::Two => 2,
            Self::Three => 3,
        }
    }
}

/// Width of a single item for the given viewport.
///
/// Returns `None` while the container has not been measured (zero or non-finite width); index
/// math must be skipped until a real measurement exists.
pub fn item_width(viewport: &Viewport, breakpoints: Breakpoints) -> Option<f64> {
    if !viewport.is_measured() {
        return None;
    }
    let per_view = ItemsPerView::for_window(viewport.window_width, breakpoints);
    Some(viewport.container_width / f64::from(per_view.get()))
}

/// Scroll offset that brings `index` into place.
///
/// - the first item is left-aligned (offset 0)
/// - the last item is right-aligned (`content - container`)
/// - every other item is centred in the viewport
///
/// The result is clamped into the reachable range. Returns `None` for an out-of-range index.
pub fn offset_for_index(
    index: usize,
    count: usize,
    viewport: &Viewport,
    item_width: f64,
) -> Option<f64> {
    if index >= count {
        return None;
    }
    let offset = if index == 0 {
        0.0
    } else if index == count - 1 {
        viewport.content_width - viewport.container_width
    } else {
        let container = viewport.container_width;
        (index as f64 * item_width) - (container / 2.0) + (item_width / 2.0)
    };
    Some(viewport.clamp_offset(offset))
}

/// Index of the item closest to the viewport centre at `offset`.
///
/// Left edge maps to the first item, right edge to the last; in between, the item whose centre
/// is nearest the viewport centre wins. Returns `None` for an empty list or a non-positive
/// item width.
pub fn index_for_offset(
    offset: f64,
    count: usize,
    viewport: &Viewport,
    item_width: f64,
) -> Option<usize> {
    if count == 0 || !(item_width.is_finite() && item_width > 0.0) {
        return None;
    }
    let last = count - 1;
    if offset <= 0.0 {
        return Some(0);
    }
    if offset >= viewport.content_width - viewport.container_width {
        return Some(last);
    }

    let center = offset + viewport.container_width / 2.0;
    let slot = (center - item_width / 2.0) / item_width;
    Some(round_to_index(slot).min(last))
}

// `f64::round` needs `std`; slots are never negative past the left-edge check.
fn round_to_index(slot: f64) -> usize {
    if slot <= 0.0 {
        return 0;
    }
    (slot + 0.5) as usize
}
