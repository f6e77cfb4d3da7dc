use alloc::sync::Arc;

use crate::carousel::Carousel;
use crate::{Breakpoints, IndexChangeReason, OptionsError};

/// A callback fired after the current index changes.
///
/// The carousel passed in already reflects the new index.
pub type OnChangeCallback = Arc<dyn Fn(&Carousel, IndexChangeReason) + Send + Sync>;

pub const DEFAULT_INTERVAL_MS: u64 = 5000;
pub const DEFAULT_DRAG_SPEED: f64 = 2.0;
pub const DEFAULT_INACTIVE_OPACITY: f32 = 0.5;

/// The serializable part of [`CarouselOptions`].
///
/// With `feature = "serde"`, every field is optional when deserializing and falls back to its
/// default, so adapters can keep a partial config in JSON/TOML.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CarouselConfig {
    pub autoplay: bool,
    pub interval_ms: u64,
    pub show_indicators: bool,
    pub drag_speed: f64,
    pub breakpoints: Breakpoints,
    pub inactive_opacity: f32,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            autoplay: true,
            interval_ms: DEFAULT_INTERVAL_MS,
            show_indicators: true,
            drag_speed: DEFAULT_DRAG_SPEED,
            breakpoints: Breakpoints::default(),
            inactive_opacity: DEFAULT_INACTIVE_OPACITY,
        }
    }
}

/// Configuration for [`crate::Carousel`].
///
/// Cheap to clone: the callback lives in an `Arc`.
pub struct CarouselOptions {
    /// Number of items. The items themselves stay with the adapter.
    pub count: usize,
    pub autoplay: bool,
    pub interval_ms: u64,
    pub show_indicators: bool,
    /// Multiplier applied to pointer movement while dragging.
    pub drag_speed: f64,
    pub breakpoints: Breakpoints,
    /// Opacity projected for items other than the current one.
    pub inactive_opacity: f32,
    /// Starting index; clamped into range.
    pub initial_index: usize,
    pub on_change: Option<OnChangeCallback>,
}

impl Clone for CarouselOptions {
    fn clone(&self) -> Self {
        Self {
            count: self.count,
            autoplay: self.autoplay,
            interval_ms: self.interval_ms,
            show_indicators: self.show_indicators,
            drag_speed: self.drag_speed,
            breakpoints: self.breakpoints,
            inactive_opacity: self.inactive_opacity,
            initial_index: self.initial_index,
            on_change: self.on_change.clone(),
        }
    }
}

impl CarouselOptions {
    pub fn new(count: usize) -> Self {
        Self::from_config(count, CarouselConfig::default())
    }

    pub fn from_config(count: usize, config: CarouselConfig) -> Self {
        Self {
            count,
            autoplay: config.autoplay,
            interval_ms: config.interval_ms,
            show_indicators: config.show_indicators,
            drag_speed: config.drag_speed,
            breakpoints: config.breakpoints,
            inactive_opacity: config.inactive_opacity,
            initial_index: 0,
            on_change: None,
        }
    }

    pub fn config(&self) -> CarouselConfig {
        CarouselConfig {
            autoplay: self.autoplay,
            interval_ms: self.interval_ms,
            show_indicators: self.show_indicators,
            drag_speed: self.drag_speed,
            breakpoints: self.breakpoints,
            inactive_opacity: self.inactive_opacity,
        }
    }

    pub fn validate(&self) -> Result<(), OptionsError> {
        if self.interval_ms == 0 {
            return Err(OptionsError::ZeroInterval);
        }
        if !(self.drag_speed.is_finite() && self.drag_speed > 0.0) {
            return Err(OptionsError::InvalidDragSpeed(self.drag_speed));
        }
        if !self.breakpoints.is_valid() {
            return Err(OptionsError::InvalidBreakpoints {
                small: self.breakpoints.small,
                medium: self.breakpoints.medium,
            });
        }
        if !(0.0..=1.0).contains(&self.inactive_opacity) {
            return Err(OptionsError::InvalidOpacity(self.inactive_opacity));
        }
        Ok(())
    }

    /// Replaces invalid values with their defaults.
    pub(crate) fn normalized(mut self) -> Self {
        if self.interval_ms == 0 {
            cwarn!("interval_ms = 0, using default");
            self.interval_ms = DEFAULT_INTERVAL_MS;
        }
        if !(self.drag_speed.is_finite() && self.drag_speed > 0.0) {
            cwarn!(drag_speed = self.drag_speed, "invalid drag_speed, using default");
            self.drag_speed = DEFAULT_DRAG_SPEED;
        }
        if !self.breakpoints.is_valid() {
            cwarn!(
                small = self.breakpoints.small,
                medium = self.breakpoints.medium,
                "invalid breakpoints, using defaults"
            );
            self.breakpoints = Breakpoints::default();
        }
        if !(0.0..=1.0).contains(&self.inactive_opacity) {
            cwarn!(
                inactive_opacity = self.inactive_opacity,
                "invalid inactive_opacity, using default"
            );
            self.inactive_opacity = DEFAULT_INACTIVE_OPACITY;
        }
        self
    }

    pub fn with_autoplay(mut self, autoplay: bool) -> Self {
        self.autoplay = autoplay;
        self
    }

    pub fn with_interval_ms(mut self, interval_ms: u64) -> Self {
        self.interval_ms = interval_ms;
        self
    }

    pub fn with_show_indicators(mut self, show_indicators: bool) -> Self {
        self.show_indicators = show_indicators;
        self
    }

    pub fn with_drag_speed(mut self, drag_speed: f64) -> Self {
        self.drag_speed = drag_speed;
        self
    }

    pub fn with_breakpoints(mut self, breakpoints: Breakpoints) -> Self {
        self.breakpoints = breakpoints;
        self
    }

    pub fn with_inactive_opacity(mut self, inactive_opacity: f32) -> Self {
        self.inactive_opacity = inactive_opacity;
        self
    }

    pub fn with_initial_index(mut self, initial_index: usize) -> Self {
        self.initial_index = initial_index;
        self
    }

    pub fn with_on_change(
        mut self,
        on_change: Option<impl Fn(&Carousel, IndexChangeReason) + Send + Sync + 'static>,
    ) -> Self {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
        self
    }
}

impl Default for CarouselOptions {
    fn default() -> Self {
        Self::new(0)
    }
}

impl core::fmt::Debug for CarouselOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CarouselOptions")
            .field("count", &self.count)
            .field("autoplay", &self.autoplay)
            .field("interval_ms", &self.interval_ms)
            .field("show_indicators", &self.show_indicators)
            .field("drag_speed", &self.drag_speed)
            .field("breakpoints", &self.breakpoints)
            .field("inactive_opacity", &self.inactive_opacity)
            .field("initial_index", &self.initial_index)
            .finish_non_exhaustive()
    }
}
