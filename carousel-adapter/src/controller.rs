use carousel::{Carousel, CarouselOptions, ScrollBehavior, ScrollRequest, Viewport};

use crate::{Easing, Tween};

/// Default duration of a smooth scroll, in milliseconds.
pub const DEFAULT_SCROLL_DURATION_MS: u64 = 300;

/// A framework-neutral controller that wraps a [`carousel::Carousel`] and turns its smooth
/// scroll requests into tweens.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `on_viewport` / `on_scroll` when the strip is measured or scrolled by the user
/// - `pointer_*` for mouse/touch input on the strip
/// - `tick(now_ms)` each frame/timer tick (for tweens and autoplay)
///
/// The offsets returned from `tick()` and `pointer_move()` are meant to be written into the real
/// scroll container; the controller already fed them back into passive tracking.
#[derive(Clone, Debug)]
pub struct Controller {
    c: Carousel,
    tween: Option<Tween>,
    scroll_duration_ms: u64,
    easing: Easing,
}

impl Controller {
    pub fn new(options: CarouselOptions) -> Self {
        Self::from_carousel(Carousel::new(options))
    }

    pub fn from_carousel(c: Carousel) -> Self {
        Self {
            c,
            tween: None,
            scroll_duration_ms: DEFAULT_SCROLL_DURATION_MS,
            easing: Easing::default(),
        }
    }

    pub fn carousel(&self) -> &Carousel {
        &self.c
    }

    pub fn carousel_mut(&mut self) -> &mut Carousel {
        &mut self.c
    }

    pub fn into_carousel(self) -> Carousel {
        self.c
    }

    pub fn current_index(&self) -> usize {
        self.c.current_index()
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    /// Target offset of the running tween, if any.
    pub fn animation_target(&self) -> Option<f64> {
        self.tween.map(|t| t.to)
    }

    pub fn cancel_animation(&mut self) {
        self.tween = None;
    }

    pub fn scroll_duration_ms(&self) -> u64 {
        self.scroll_duration_ms
    }

    pub fn set_scroll_duration_ms(&mut self, duration_ms: u64) {
        self.scroll_duration_ms = duration_ms;
    }

    pub fn easing(&self) -> Easing {
        self.easing
    }

    pub fn set_easing(&mut self, easing: Easing) {
        self.easing = easing;
    }

    pub fn mount(&mut self, now_ms: u64) {
        self.c.mount(now_ms);
    }

    /// Stops any animation and tears the carousel down (cancelling autoplay).
    pub fn teardown(&mut self) {
        self.cancel_animation();
        self.c.teardown();
    }

    pub fn on_viewport(&mut self, viewport: Viewport) {
        self.c.set_viewport(viewport);
    }

    /// Call this when the UI reports a scroll offset change from the user (wheel/touch).
    ///
    /// This cancels any active tween.
    pub fn on_scroll(&mut self, offset: f64) -> bool {
        self.cancel_animation();
        self.c.on_scroll(offset)
    }

    pub fn pointer_down(&mut self, x: f64) {
        self.cancel_animation();
        self.c.pointer_down(x);
    }

    /// Returns the offset to apply immediately while dragging.
    pub fn pointer_move(&mut self, x: f64) -> Option<f64> {
        let request = self.c.pointer_move(x)?;
        self.cancel_animation();
        Some(request.offset)
    }

    /// Ends a drag and starts the snap animation. Returns the snap target.
    pub fn pointer_up(&mut self, now_ms: u64) -> Option<f64> {
        let request = self.c.pointer_up(now_ms)?;
        Some(self.apply(request, now_ms))
    }

    pub fn pointer_leave(&mut self, now_ms: u64) -> Option<f64> {
        let request = self.c.pointer_leave(now_ms)?;
        Some(self.apply(request, now_ms))
    }

    /// Starts a smooth scroll to `index`. Returns the target offset.
    pub fn scroll_to_index(&mut self, index: usize, now_ms: u64) -> Option<f64> {
        let request = self.c.scroll_to_index(index)?;
        Some(self.apply(request, now_ms))
    }

    /// Starts a smooth scroll to the indicator's item. Returns the target offset.
    pub fn click_indicator(&mut self, index: usize, now_ms: u64) -> Option<f64> {
        let request = self.c.click_indicator(index)?;
        Some(self.apply(request, now_ms))
    }

    /// Advances autoplay and any active tween.
    ///
    /// Returns the offset the UI should apply this frame, or `None` when nothing is animating.
    pub fn tick(&mut self, now_ms: u64) -> Option<f64> {
        if let Some(request) = self.c.tick(now_ms) {
            self.apply(request, now_ms);
        }

        let tween = self.tween?;
        let offset = tween.sample(now_ms);
        self.c.on_scroll(offset);

        if tween.is_done(now_ms) {
            atrace!(offset, index = self.c.current_index(), "tween finished");
            self.tween = None;
        }
        Some(offset)
    }

    fn apply(&mut self, request: ScrollRequest, now_ms: u64) -> f64 {
        match request.behavior {
            ScrollBehavior::Instant => {
                self.cancel_animation();
            }
            ScrollBehavior::Smooth => match self.tween.as_mut() {
                Some(tween) => {
                    tween.retarget(now_ms, request.offset, self.scroll_duration_ms);
                    tween.easing = self.easing;
                }
                None => {
                    let from = self.c.scroll_offset();
                    atrace!(from, to = request.offset, now_ms, "tween started");
                    self.tween = Some(Tween::new(
                        from,
                        request.offset,
                        now_ms,
                        self.scroll_duration_ms,
                        self.easing,
                    ));
                }
            },
        }
        request.offset
    }
}
