use std::time::{Duration, Instant};

use crate::RenderOptions;

/// An immutable snapshot of a progress bar
///
/// All transitions return a new state. The total and creation time are carried
/// over from the state a transition is called on, and the current step is always
/// kept within `0..=total`.
///
/// Marking a state as done does not move the current step to the total. A bar
/// can be done while displaying as incomplete (for example, when the work is
/// cancelled).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProgressState {
    progress: i64,
    total: i64,
    is_done: bool,
    created_at: Instant,
}

impl ProgressState {
    /// Create a bar that goes up to `total`, starting now
    ///
    /// A negative total is not rejected. The bar will stay at `0`
    /// and display as empty.
    #[inline(always)]
    pub fn new(total: i64) -> Self {
        Self::with_created_at(total, Instant::now())
    }

    /// Create a bar that goes up to `total`, with an explicit creation time.
    ///
    /// Elapsed and remaining time are measured from `created_at`. This is useful
    /// when resuming a task that started earlier.
    pub fn with_created_at(total: i64, created_at: Instant) -> Self {
        Self {
            progress: 0,
            total,
            is_done: false,
            created_at,
        }
    }

    /// The current step
    #[inline(always)]
    pub fn progress(&self) -> i64 {
        self.progress
    }

    /// The total steps
    #[inline(always)]
    pub fn total(&self) -> i64 {
        self.total
    }

    /// If the bar is marked as done
    #[inline(always)]
    pub fn is_done(&self) -> bool {
        self.is_done
    }

    /// When the bar was created
    #[inline(always)]
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    /// Return a new state incremented by 1
    #[inline(always)]
    #[must_use]
    pub fn tick(&self) -> Self {
        self.tick_by(1)
    }

    /// Return a new state incremented by `amount`.
    ///
    /// `amount` can be negative. The result is clamped to `0..=total`
    /// instead of failing.
    ///
    /// ```rust
    /// # use progrock::ProgressState;
    /// let bar = ProgressState::new(10);
    /// assert_eq!(bar.tick_by(4).tick_by(-1).progress(), 3);
    /// assert_eq!(bar.tick_by(100).progress(), 10);
    /// assert_eq!(bar.tick_by(-100).progress(), 0);
    /// ```
    #[must_use]
    pub fn tick_by(&self, amount: i64) -> Self {
        // not using clamp because total can be negative
        let progress = self.progress.saturating_add(amount).min(self.total).max(0);
        Self { progress, ..*self }
    }

    /// Return a new state marked as done. The current step is not changed
    #[must_use]
    pub fn mark_done(&self) -> Self {
        Self {
            is_done: true,
            ..*self
        }
    }

    /// Percentage done, truncated. `0` if the total is not positive
    pub fn percent(&self) -> i64 {
        if self.total > 0 {
            ((self.progress as f64 / self.total as f64) * 100.0) as i64
        } else {
            0
        }
    }

    /// Time elapsed since the bar was created
    #[inline(always)]
    pub fn elapsed(&self) -> Duration {
        self.elapsed_at(Instant::now())
    }

    /// Time elapsed between creation of the bar and `now`.
    /// Zero if `now` is before the creation time
    #[inline(always)]
    pub fn elapsed_at(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.created_at)
    }

    /// Estimated remaining time, extrapolated linearly from the rate so far.
    /// `None` if there is no progress yet or the total is not positive
    #[inline(always)]
    pub fn remaining(&self) -> Option<Duration> {
        self.remaining_at(Instant::now())
    }

    /// Estimated remaining time as of `now`, see [`remaining`](Self::remaining)
    pub fn remaining_at(&self, now: Instant) -> Option<Duration> {
        if self.progress <= 0 || self.total <= 0 {
            return None;
        }
        let elapsed = self.elapsed_at(now).as_millis() as f64;
        let ratio = self.progress as f64 / self.total as f64;
        let remaining = elapsed / ratio - elapsed;
        Some(Duration::from_millis(remaining.max(0.0) as u64))
    }

    /// Render the bar with [`RenderOptions::DEFAULT`]
    #[inline(always)]
    pub fn render(&self) -> String {
        self.render_with(&RenderOptions::DEFAULT)
    }

    /// Render the bar with the given options
    #[inline(always)]
    pub fn render_with(&self, options: &RenderOptions) -> String {
        self.render_at(options, Instant::now())
    }

    /// Render the bar with the given options, with time tokens measured at `now`
    pub fn render_at(&self, options: &RenderOptions, now: Instant) -> String {
        crate::render::render(self, options, now)
    }
}

impl std::fmt::Display for ProgressState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let bar = ProgressState::new(50);
        assert_eq!(bar.total(), 50);
        assert_eq!(bar.progress(), 0);
        assert!(!bar.is_done());
    }

    #[test]
    fn test_tick() {
        let bar = ProgressState::new(50);
        assert_eq!(bar.tick().progress(), 1);
        assert_eq!(bar.tick_by(16).progress(), 16);
        assert_eq!(bar.tick_by(5).tick().progress(), 6);
        // the original is not modified
        assert_eq!(bar.progress(), 0);
    }

    #[test]
    fn test_tick_clamps() {
        let bar = ProgressState::new(50);
        assert_eq!(bar.tick_by(51).progress(), 50);
        assert_eq!(bar.tick_by(-1).progress(), 0);
        assert_eq!(bar.tick_by(30).tick_by(-10).progress(), 20);
        assert_eq!(bar.tick_by(i64::MAX).tick_by(i64::MAX).progress(), 50);
        assert_eq!(bar.tick_by(i64::MIN).progress(), 0);
    }

    #[test]
    fn test_tick_keeps_other_fields() {
        let bar = ProgressState::new(50).mark_done();
        let ticked = bar.tick_by(3);
        assert_eq!(ticked.total(), 50);
        assert!(ticked.is_done());
        assert_eq!(ticked.created_at(), bar.created_at());
    }

    #[test]
    fn test_negative_total() {
        let bar = ProgressState::new(-5);
        assert_eq!(bar.tick_by(3).progress(), 0);
        assert_eq!(bar.percent(), 0);
        assert_eq!(bar.tick().remaining(), None);
    }

    #[test]
    fn test_mark_done() {
        let bar = ProgressState::new(50).tick_by(10);
        let done = bar.mark_done();
        assert!(done.is_done());
        assert_eq!(done.progress(), 10, "done should not fill the bar");
        assert_eq!(done.total(), bar.total());
        assert_eq!(done.created_at(), bar.created_at());
        assert_eq!(done.mark_done(), done);
    }

    #[test]
    fn test_percent() {
        let bar = ProgressState::new(3);
        assert_eq!(bar.percent(), 0);
        assert_eq!(bar.tick().percent(), 33);
        assert_eq!(bar.tick_by(2).percent(), 66, "percent is truncated");
        assert_eq!(bar.tick_by(3).percent(), 100);
        assert_eq!(ProgressState::new(0).percent(), 0);
    }

    #[test]
    fn test_percent_uses_float_ratio() {
        // 29 / 100 is slightly below 0.29 as f64
        assert_eq!(ProgressState::new(100).tick_by(29).percent(), 28);
        assert_eq!(ProgressState::new(100).tick_by(30).percent(), 30);
    }

    #[test]
    fn test_elapsed_at() {
        let start = Instant::now();
        let bar = ProgressState::with_created_at(10, start);
        assert_eq!(bar.elapsed_at(start), Duration::ZERO);
        assert_eq!(
            bar.elapsed_at(start + Duration::from_secs(3)),
            Duration::from_secs(3)
        );
    }

    #[test]
    fn test_elapsed_before_creation_is_zero() {
        let now = Instant::now();
        let bar = ProgressState::with_created_at(10, now + Duration::from_secs(5));
        assert_eq!(bar.elapsed_at(now), Duration::ZERO);
    }

    #[test]
    fn test_remaining_absent() {
        let start = Instant::now();
        let later = start + Duration::from_secs(10);
        assert_eq!(ProgressState::with_created_at(10, start).remaining_at(later), None);
        assert_eq!(ProgressState::with_created_at(0, start).tick().remaining_at(later), None);
    }

    #[test]
    fn test_remaining_linear() {
        let start = Instant::now();
        let bar = ProgressState::with_created_at(100, start).tick_by(25);
        // 25% in 10s, 30s to go
        assert_eq!(
            bar.remaining_at(start + Duration::from_secs(10)),
            Some(Duration::from_secs(30))
        );
        assert_eq!(bar.remaining_at(start), Some(Duration::ZERO));
        let full = bar.tick_by(75);
        assert_eq!(
            full.remaining_at(start + Duration::from_secs(10)),
            Some(Duration::ZERO)
        );
    }
}
