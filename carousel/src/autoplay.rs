/// Identity of one scheduled autoplay timer.
///
/// Every (re)schedule allocates a fresh id, so adapters backed by real platform timers can tell a
/// stale callback from the live one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimerId(pub u64);

/// A periodic autoplay trigger, polled by [`crate::Carousel::tick`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AutoplayTimer {
    pub id: TimerId,
    pub interval_ms: u64,
    /// Clock time at which the next advance is due.
    pub due_ms: u64,
}

impl AutoplayTimer {
    pub fn new(id: TimerId, interval_ms: u64, now_ms: u64) -> Self {
        let interval_ms = interval_ms.max(1);
        Self {
            id,
            interval_ms,
            due_ms: now_ms.saturating_add(interval_ms),
        }
    }

    pub fn is_due(&self, now_ms: u64) -> bool {
        now_ms >= self.due_ms
    }

    /// Moves `due_ms` to the next period after a fire at `now_ms`.
    ///
    /// Keeps a fixed cadence while the host ticks on time; if the host fell a whole period or
    /// more behind, restarts from `now_ms` instead of firing a burst of catch-up advances.
    pub fn rearm(&mut self, now_ms: u64) {
        let next = self.due_ms.saturating_add(self.interval_ms);
        self.due_ms = if next > now_ms {
            next
        } else {
            now_ms.saturating_add(self.interval_ms)
        };
    }
}
