//! Staggered playback of one tween across sibling elements.
//!
//! A timeline is a single playhead over `duration + stagger * (n - 1)`
//! seconds. Child `i` samples the tween at
//! `(time - i * stagger) / duration`, so reversing the playhead unwinds
//! the cascade in the opposite order from wherever it currently is.

use crate::style::ElementStyle;
use crate::tween::Tween;

/// Playhead reached an end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimelineEvent {
    /// Forward playback reached the end.
    Completed,
    /// Backward playback reached the start.
    ReverseCompleted,
}

/// A staggered tween over `count` elements.
#[derive(Debug, Clone)]
pub struct Timeline {
    tween: Tween,
    stagger: f32,
    count: usize,
    /// Playhead in seconds, within `[0, total]`.
    time: f32,
    reversed: bool,
    paused: bool,
}

impl Timeline {
    /// Shortest playable tween; zero-length tweens complete on the next update.
    pub const MIN_DURATION: f32 = 1e-6;

    /// Creates a paused timeline at its start.
    #[must_use]
    pub fn new(mut tween: Tween, stagger: f32, count: usize) -> Self {
        tween.duration = tween.duration.max(Self::MIN_DURATION);
        Self {
            tween,
            stagger: stagger.max(0.0),
            count,
            time: 0.0,
            reversed: false,
            paused: true,
        }
    }

    /// Total length in seconds, stagger included.
    #[must_use]
    pub fn total_duration(&self) -> f32 {
        let tail = self.count.saturating_sub(1) as f32;
        self.tween.duration + self.stagger * tail
    }

    /// Playhead position.
    #[must_use]
    pub fn time(&self) -> f32 {
        self.time
    }

    /// Playhead as a fraction of the total.
    #[must_use]
    pub fn progress(&self) -> f32 {
        self.time / self.total_duration()
    }

    /// Is the playhead moving?
    #[must_use]
    pub fn is_moving(&self) -> bool {
        !self.paused && if self.reversed { self.time > 0.0 } else { !self.at_end() }
    }

    /// Is playback (or the last playback) backward?
    #[must_use]
    pub fn is_reversed(&self) -> bool {
        self.reversed
    }

    /// Is the playhead at the end?
    #[must_use]
    pub fn at_end(&self) -> bool {
        self.time >= self.total_duration()
    }

    /// Plays forward from the current position. Returns `true` if motion began.
    pub fn play(&mut self) -> bool {
        let was_moving_forward = self.is_moving() && !self.reversed;
        self.reversed = false;
        self.paused = false;
        !was_moving_forward && self.is_moving()
    }

    /// Plays backward from the current position. Returns `true` if motion began.
    pub fn reverse(&mut self) -> bool {
        let was_moving_backward = self.is_moving() && self.reversed;
        self.reversed = true;
        self.paused = false;
        !was_moving_backward && self.is_moving()
    }

    /// Freezes the playhead.
    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Continues in the last direction. Returns `true` if motion began.
    pub fn resume(&mut self) -> bool {
        let was_moving = self.is_moving();
        self.paused = false;
        !was_moving && self.is_moving()
    }

    /// Jumps to the start and plays forward.
    pub fn restart(&mut self) -> bool {
        self.time = 0.0;
        self.reversed = false;
        self.paused = false;
        self.is_moving()
    }

    /// Jumps to the start and pauses.
    pub fn reset(&mut self) {
        self.time = 0.0;
        self.reversed = false;
        self.paused = true;
    }

    /// Jumps to the end and pauses.
    pub fn complete(&mut self) {
        self.time = self.total_duration();
        self.reversed = false;
        self.paused = true;
    }

    /// Advances the playhead by `dt` seconds.
    ///
    /// Returns the end reached, if any. Pauses itself at either end.
    pub fn update(&mut self, dt: f32) -> Option<TimelineEvent> {
        if !self.is_moving() || dt < 0.0 {
            return None;
        }

        let total = self.total_duration();
        if self.reversed {
            self.time = (self.time - dt).max(0.0);
            if self.time <= 0.0 {
                self.paused = true;
                return Some(TimelineEvent::ReverseCompleted);
            }
        } else {
            self.time = (self.time + dt).min(total);
            if self.time >= total {
                self.paused = true;
                return Some(TimelineEvent::Completed);
            }
        }
        None
    }

    /// Style of child `index` at the current playhead.
    #[must_use]
    pub fn style_at(&self, index: usize) -> ElementStyle {
        // At the end every child is at rest, whatever the rounding says.
        if self.at_end() {
            return self.tween.sample(1.0);
        }
        let start = self.stagger * index as f32;
        let t = (self.time - start) / self.tween.duration;
        self.tween.sample(t.clamp(0.0, 1.0))
    }

    /// Styles for every child in order.
    pub fn styles(&self) -> impl Iterator<Item = ElementStyle> + '_ {
        (0..self.count).map(|i| self.style_at(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::easing::Easing;

    fn linear(count: usize, stagger: f32) -> Timeline {
        let tween = Tween::from_style(ElementStyle::offset_y(50.0))
            .with_duration(1.0)
            .with_easing(Easing::Linear);
        Timeline::new(tween, stagger, count)
    }

    #[test]
    fn test_total_includes_stagger() {
        assert!((linear(5, 0.1).total_duration() - 1.4).abs() < 1e-6);
        assert!((linear(1, 0.1).total_duration() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_play_to_completion() {
        let mut timeline = linear(1, 0.0);
        assert!(timeline.play());

        assert_eq!(timeline.update(0.5), None);
        assert_eq!(timeline.update(0.6), Some(TimelineEvent::Completed));
        assert_eq!(timeline.style_at(0), ElementStyle::REST);
        assert!(!timeline.is_moving());
    }

    #[test]
    fn test_stagger_cascades() {
        let mut timeline = linear(3, 0.2);
        timeline.play();
        timeline.update(0.3);

        let styles: Vec<_> = timeline.styles().collect();
        // Child 0 at 30%, child 1 at 10%, child 2 not started.
        assert!((styles[0].translate_y - 35.0).abs() < 1e-4);
        assert!((styles[1].translate_y - 45.0).abs() < 1e-4);
        assert_eq!(styles[2], ElementStyle::offset_y(50.0));
    }

    #[test]
    fn test_reverse_continues_from_current_progress() {
        let mut timeline = linear(1, 0.0);
        timeline.play();
        timeline.update(0.6);
        let before = timeline.style_at(0);

        assert!(timeline.reverse());
        timeline.update(0.1);
        let after = timeline.style_at(0);

        // Moved back a little, not snapped to either end.
        assert!(after.translate_y > before.translate_y);
        assert!((after.translate_y - 25.0).abs() < 1e-4);
        assert!((timeline.time() - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_reverse_to_start() {
        let mut timeline = linear(1, 0.0);
        timeline.play();
        timeline.update(0.3);
        timeline.reverse();
        assert_eq!(timeline.update(1.0), Some(TimelineEvent::ReverseCompleted));
        assert_eq!(timeline.style_at(0), ElementStyle::offset_y(50.0));
    }

    #[test]
    fn test_play_while_playing_is_not_a_new_start() {
        let mut timeline = linear(1, 0.0);
        assert!(timeline.play());
        assert!(!timeline.play());
    }

    #[test]
    fn test_play_at_end_does_nothing() {
        let mut timeline = linear(1, 0.0);
        timeline.complete();
        assert!(!timeline.play());
        assert_eq!(timeline.update(0.1), None);
    }

    #[test]
    fn test_zero_duration_snaps() {
        let tween = Tween::from_style(ElementStyle::collapsed()).with_duration(0.0);
        let mut timeline = Timeline::new(tween, 0.0, 1);
        assert_eq!(timeline.style_at(0), ElementStyle::collapsed());

        assert!(timeline.play());
        assert_eq!(timeline.update(0.016), Some(TimelineEvent::Completed));
        assert_eq!(timeline.style_at(0), ElementStyle::REST);
    }

    #[test]
    fn test_pause_freezes_and_resume_continues() {
        let mut timeline = linear(1, 0.0);
        timeline.play();
        timeline.update(0.3);

        timeline.pause();
        assert!(!timeline.is_moving());
        assert_eq!(timeline.update(0.3), None);
        assert!((timeline.time() - 0.3).abs() < 1e-6);

        assert!(timeline.resume());
        assert!(!timeline.resume());
        timeline.update(0.2);
        assert!((timeline.time() - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_resume_keeps_backward_direction() {
        let mut timeline = linear(1, 0.0);
        timeline.play();
        timeline.update(0.6);
        timeline.reverse();
        timeline.update(0.1);
        timeline.pause();

        assert!(timeline.resume());
        assert!(timeline.is_reversed());
        timeline.update(0.2);
        assert!((timeline.time() - 0.3).abs() < 1e-6);
    }

    #[test]
    fn test_restart_from_middle_and_end() {
        let mut timeline = linear(1, 0.0);
        timeline.play();
        timeline.update(0.7);
        assert!(timeline.restart());
        assert_eq!(timeline.time(), 0.0);
        assert_eq!(timeline.style_at(0), ElementStyle::offset_y(50.0));

        timeline.complete();
        assert!(timeline.at_end());
        assert!(timeline.restart());
        assert!(timeline.is_moving());
    }

    #[test]
    fn test_reset_rewinds_and_stops() {
        let mut timeline = linear(2, 0.1);
        timeline.play();
        timeline.update(0.4);

        timeline.reset();
        assert!(!timeline.is_moving());
        assert_eq!(timeline.time(), 0.0);
        assert!(timeline.styles().all(|s| s == ElementStyle::offset_y(50.0)));
        assert!(timeline.play());
    }
}
