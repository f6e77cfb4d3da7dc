use alloc::vec::Vec;

use crate::layout;
use crate::{
    AutoplayTimer, CarouselOptions, CarouselState, DragSession, Indicator, IndexChangeReason,
    OptionsError, ScrollRequest, TimerId, Viewport,
};

/// A headless carousel engine.
///
/// This type is intentionally UI-agnostic:
/// - It does not hold the items or any UI objects; it only knows `count`.
/// - Your adapter feeds it viewport measurements, scroll offsets, pointer positions and a
///   millisecond clock.
/// - It answers with [`ScrollRequest`]s for the real scroll container and exposes the current
///   index, indicator row and item opacity as pure projections.
///
/// For tween-driven smooth scrolling and a frame-loop controller, see the `carousel-adapter`
/// crate.
#[derive(Clone, Debug)]
pub struct Carousel {
    options: CarouselOptions,
    viewport: Viewport,
    scroll_offset: f64,
    index: usize,
    drag: Option<DragSession>,
    // An offset arrived before the container was measured.
    tracking_pending: bool,
    timer: Option<AutoplayTimer>,
    next_timer_id: u64,
    mounted: bool,
    torn_down: bool,
}

impl Carousel {
    /// Creates a carousel from options.
    ///
    /// Invalid option values are replaced by their defaults; use [`Self::try_new`] to reject
    /// them instead. Autoplay does not start until [`Self::mount`].
    pub fn new(options: CarouselOptions) -> Self {
        let options = options.normalized();
        let index = clamp_index(options.initial_index, options.count);
        cdebug!(
            count = options.count,
            autoplay = options.autoplay,
            interval_ms = options.interval_ms,
            "Carousel::new"
        );
        Self {
            options,
            viewport: Viewport::default(),
            scroll_offset: 0.0,
            index,
            drag: None,
            tracking_pending: false,
            timer: None,
            next_timer_id: 0,
            mounted: false,
            torn_down: false,
        }
    }

    pub fn try_new(options: CarouselOptions) -> Result<Self, OptionsError> {
        options.validate()?;
        Ok(Self::new(options))
    }

    pub fn options(&self) -> &CarouselOptions {
        &self.options
    }

    pub fn count(&self) -> usize {
        self.options.count
    }

    pub fn current_index(&self) -> usize {
        self.index
    }

    pub fn scroll_offset(&self) -> f64 {
        self.scroll_offset
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn drag_session(&self) -> Option<DragSession> {
        self.drag
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn autoplay_timer(&self) -> Option<AutoplayTimer> {
        self.timer
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Width of one item for the current viewport, recomputed on every call.
    pub fn item_width(&self) -> Option<f64> {
        layout::item_width(&self.viewport, self.options.breakpoints)
    }

    /// Starts the autoplay clock. Call once when the strip is attached to the UI.
    pub fn mount(&mut self, now_ms: u64) {
        if self.torn_down || self.mounted {
            return;
        }
        self.mounted = true;
        self.reschedule(now_ms);
    }

    /// Cancels the autoplay timer and detaches the engine.
    ///
    /// After teardown every event method is a no-op; a timer can never fire again.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        cdebug!(timer = ?self.timer.map(|t| t.id), "Carousel::teardown");
        self.timer = None;
        self.drag = None;
        self.mounted = false;
        self.torn_down = true;
    }

    /// Records a new measurement.
    ///
    /// Re-tracks the index at the current offset when the strip was already measured (a resize
    /// can cross a breakpoint) or when an offset was reported before the first measurement. A
    /// first measurement with no reported offset keeps the initial index.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        if self.viewport == viewport {
            return;
        }
        ctrace!(
            container = viewport.container_width,
            content = viewport.content_width,
            window = viewport.window_width,
            "set_viewport"
        );
        let was_measured = self.viewport.is_measured();
        self.viewport = viewport;
        if self.torn_down {
            return;
        }
        if !viewport.is_measured() {
            self.tracking_pending |= was_measured;
            return;
        }
        if was_measured || self.tracking_pending {
            self.tracking_pending = false;
            self.track_index();
        }
    }

    /// Replaces the item count, clamping the index and restarting autoplay from `now_ms`.
    pub fn set_count(&mut self, count: usize, now_ms: u64) {
        if self.options.count == count {
            return;
        }
        self.options.count = count;
        let clamped = clamp_index(self.index, count);
        if clamped != self.index {
            self.set_index(clamped, IndexChangeReason::Programmatic);
        }
        self.reschedule(now_ms);
    }

    /// Enables or disables autoplay. Takes effect from `now_ms`, never retroactively.
    pub fn set_autoplay(&mut self, autoplay: bool, now_ms: u64) {
        if self.options.autoplay == autoplay {
            return;
        }
        self.options.autoplay = autoplay;
        self.reschedule(now_ms);
    }

    /// Changes the autoplay interval. A zero interval is ignored.
    pub fn set_interval_ms(&mut self, interval_ms: u64, now_ms: u64) {
        if interval_ms == 0 {
            cwarn!("set_interval_ms: zero interval ignored");
            return;
        }
        if self.options.interval_ms == interval_ms {
            return;
        }
        self.options.interval_ms = interval_ms;
        self.reschedule(now_ms);
    }

    pub fn set_show_indicators(&mut self, show_indicators: bool) {
        self.options.show_indicators = show_indicators;
    }

    pub fn set_on_change(
        &mut self,
        on_change: Option<impl Fn(&Carousel, IndexChangeReason) + Send + Sync + 'static>,
    ) {
        self.options.on_change = on_change.map(|f| alloc::sync::Arc::new(f) as _);
    }

    /// Computes the scroll offset for `index` without changing any state.
    pub fn offset_for_index(&self, index: usize) -> Option<f64> {
        let item_width = self.item_width()?;
        layout::offset_for_index(index, self.options.count, &self.viewport, item_width)
    }

    /// Computes the index closest to the viewport centre at `offset` without changing any state.
    pub fn index_for_offset(&self, offset: f64) -> Option<usize> {
        let item_width = self.item_width()?;
        layout::index_for_offset(offset, self.options.count, &self.viewport, item_width)
    }

    /// Scrolls to `index` and makes it current immediately.
    ///
    /// Returns a smooth [`ScrollRequest`] for the adapter to animate, or `None` when the index is
    /// out of range, the container is not measured yet, or the strip already rests on `index`.
    pub fn scroll_to_index(&mut self, index: usize) -> Option<ScrollRequest> {
        self.scroll_to_index_with(index, IndexChangeReason::Programmatic)
    }

    /// Same as [`Self::scroll_to_index`], reported as an indicator click.
    pub fn click_indicator(&mut self, index: usize) -> Option<ScrollRequest> {
        self.scroll_to_index_with(index, IndexChangeReason::Indicator)
    }

    fn scroll_to_index_with(
        &mut self,
        index: usize,
        reason: IndexChangeReason,
    ) -> Option<ScrollRequest> {
        if self.torn_down {
            return None;
        }
        if index >= self.options.count {
            cwarn!(
                index,
                count = self.options.count,
                "scroll_to_index: out-of-range index"
            );
            return None;
        }
        let Some(offset) = self.offset_for_index(index) else {
            cdebug!(index, "scroll_to_index: viewport not measured, skipped");
            return None;
        };
        if index == self.index && offset == self.scroll_offset {
            return None;
        }
        ctrace!(index, offset, ?reason, "scroll_to_index");
        self.set_index(index, reason);
        Some(ScrollRequest::smooth(offset))
    }

    /// Passive tracking: call whenever the strip reports a new scroll offset.
    ///
    /// Returns `true` if the current index changed.
    pub fn on_scroll(&mut self, offset: f64) -> bool {
        if self.torn_down || !offset.is_finite() {
            return false;
        }
        if offset == self.scroll_offset {
            return false;
        }
        self.scroll_offset = offset;
        if !self.viewport.is_measured() {
            self.tracking_pending = true;
            return false;
        }
        self.track_index()
    }

    fn track_index(&mut self) -> bool {
        let Some(index) = self.index_for_offset(self.scroll_offset) else {
            return false;
        };
        if index == self.index {
            return false;
        }
        self.set_index(index, IndexChangeReason::ScrollSettle);
        true
    }

    /// Opens a drag session at pointer `x` (relative to the strip) and suspends autoplay.
    pub fn pointer_down(&mut self, x: f64) {
        if self.torn_down || !x.is_finite() {
            return;
        }
        ctrace!(x, offset = self.scroll_offset, "pointer_down");
        self.drag = Some(DragSession {
            origin_x: x,
            origin_offset: self.scroll_offset,
        });
        self.cancel_timer();
    }

    /// Moves the strip with the pointer while a drag session is open.
    ///
    /// The offset is always derived from the session origin, so repeated or reordered move
    /// events cannot accumulate drift. Returns an instant [`ScrollRequest`] with the clamped
    /// offset, or `None` without an open session.
    pub fn pointer_move(&mut self, x: f64) -> Option<ScrollRequest> {
        let session = self.drag?;
        if !x.is_finite() {
            return None;
        }
        let offset = self
            .viewport
            .clamp_offset(session.offset_for(x, self.options.drag_speed));
        self.on_scroll(offset);
        Some(ScrollRequest::instant(offset))
    }

    /// Ends the drag session, snaps to the nearest item and resumes autoplay from `now_ms`.
    ///
    /// Returns the smooth snap request, if any movement is needed.
    pub fn pointer_up(&mut self, now_ms: u64) -> Option<ScrollRequest> {
        self.drag.take()?;
        let request = self
            .index_for_offset(self.scroll_offset)
            .and_then(|index| self.scroll_to_index_with(index, IndexChangeReason::DragRelease));
        ctrace!(index = self.index, ?request, "pointer_up");
        self.reschedule(now_ms);
        request
    }

    /// The pointer left the strip; behaves like [`Self::pointer_up`].
    pub fn pointer_leave(&mut self, now_ms: u64) -> Option<ScrollRequest> {
        self.pointer_up(now_ms)
    }

    /// Advances the autoplay clock.
    ///
    /// When the timer is due, moves to the next item (wrapping to the first) and returns the
    /// smooth scroll request.
    pub fn tick(&mut self, now_ms: u64) -> Option<ScrollRequest> {
        let timer = self.timer.as_mut()?;
        if !timer.is_due(now_ms) {
            return None;
        }
        timer.rearm(now_ms);
        let count = self.options.count;
        if count < 2 {
            return None;
        }
        let next = (self.index + 1) % count;
        ctrace!(from = self.index, to = next, "autoplay tick");
        self.scroll_to_index_with(next, IndexChangeReason::Autoplay)
    }

    /// Captures the current position.
    pub fn state(&self) -> CarouselState {
        CarouselState {
            index: self.index,
            scroll_offset: self.scroll_offset,
            viewport: self.viewport,
        }
    }

    /// Restores a previously captured position. The index is clamped into range.
    pub fn restore_state(&mut self, state: CarouselState) {
        if self.torn_down {
            return;
        }
        self.viewport = state.viewport;
        self.scroll_offset = if state.scroll_offset.is_finite() {
            state.scroll_offset
        } else {
            0.0
        };
        let index = clamp_index(state.index, self.options.count);
        if index != self.index {
            self.set_index(index, IndexChangeReason::Programmatic);
        }
    }

    pub fn is_active(&self, index: usize) -> bool {
        index < self.options.count && index == self.index
    }

    /// Opacity for the item at `index`: full for the current item, dimmed for the rest.
    pub fn item_opacity(&self, index: usize) -> f32 {
        if self.is_active(index) {
            1.0
        } else {
            self.options.inactive_opacity
        }
    }

    /// Emits one indicator per item, or nothing when indicators are hidden.
    pub fn for_each_indicator(&self, mut f: impl FnMut(Indicator)) {
        if !self.options.show_indicators {
            return;
        }
        for index in 0..self.options.count {
            f(Indicator {
                index,
                active: index == self.index,
            });
        }
    }

    /// Collects indicators into a fresh `Vec`. Prefer [`Self::for_each_indicator`] in hot paths.
    pub fn indicators(&self) -> Vec<Indicator> {
        let mut out = Vec::new();
        self.for_each_indicator(|it| out.push(it));
        out
    }

    fn set_index(&mut self, index: usize, reason: IndexChangeReason) {
        debug_assert!(
            index < self.options.count || (self.options.count == 0 && index == 0),
            "index out of bounds (index={index}, count={})",
            self.options.count
        );
        if self.index == index {
            return;
        }
        self.index = index;
        if let Some(cb) = &self.options.on_change {
            cb(self, reason);
        }
    }

    fn cancel_timer(&mut self) {
        if self.timer.take().is_some() {
            ctrace!("autoplay timer cancelled");
        }
    }

    /// Cancels the current timer, then starts a fresh one if autoplay is eligible.
    fn reschedule(&mut self, now_ms: u64) {
        self.cancel_timer();
        let eligible = self.mounted
            && !self.torn_down
            && self.options.autoplay
            && self.drag.is_none()
            && self.options.count >= 2;
        if !eligible {
            return;
        }
        let id = TimerId(self.next_timer_id);
        self.next_timer_id = self.next_timer_id.wrapping_add(1);
        let timer = AutoplayTimer::new(id, self.options.interval_ms, now_ms);
        ctrace!(id = id.0, due_ms = timer.due_ms, "autoplay timer scheduled");
        self.timer = Some(timer);
    }
}

fn clamp_index(index: usize, count: usize) -> usize {
    index.min(count.saturating_sub(1))
}
