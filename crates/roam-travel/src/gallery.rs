//! Image gallery rotation state.
//!
//! The carousel is a deadline-driven state machine: the host reads
//! `next_deadline()` after every call, schedules a single wake-up, and
//! feeds the clock back through `tick(now_ms)`. At most one deadline is
//! pending at a time; arming a new one replaces the old, so overlapping
//! callbacks cannot occur. The storefront page script mirrors the same
//! constants client-side.

use serde::{Deserialize, Serialize};

/// Interval between automatic slide advances.
pub const AUTOPLAY_INTERVAL_MS: i64 = 3_000;

/// Pause after a manual navigation before autoplay resumes.
pub const RESUME_DELAY_MS: i64 = 10_000;

/// Slide transition direction, for the transition animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SlideDirection {
    #[default]
    Forward,
    Backward,
}

/// Rotation state for one package's image gallery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Carousel {
    image_count: usize,
    index: usize,
    direction: SlideDirection,
    auto_playing: bool,
    /// The single pending deadline: either the next autoplay advance
    /// or the autoplay resume point after a manual navigation.
    deadline_ms: Option<i64>,
}

impl Carousel {
    /// Create a carousel over `image_count` images.
    ///
    /// Autoplay only ever starts with two or more images.
    pub fn new(image_count: usize, now_ms: i64) -> Self {
        let auto_playing = image_count > 1;
        Self {
            image_count,
            index: 0,
            direction: SlideDirection::Forward,
            auto_playing,
            deadline_ms: auto_playing.then(|| now_ms + AUTOPLAY_INTERVAL_MS),
        }
    }

    /// Current slide index.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Direction of the most recent transition.
    pub fn direction(&self) -> SlideDirection {
        self.direction
    }

    /// Whether autoplay is currently running.
    pub fn is_auto_playing(&self) -> bool {
        self.auto_playing
    }

    /// Whether prev/next controls should be rendered.
    pub fn shows_controls(&self) -> bool {
        self.image_count > 1
    }

    /// When the host should call `tick` next, if at all.
    pub fn next_deadline(&self) -> Option<i64> {
        self.deadline_ms
    }

    /// Advance the clock. Processes the pending deadline when due and
    /// arms the next one.
    pub fn tick(&mut self, now_ms: i64) {
        let Some(deadline) = self.deadline_ms else {
            return;
        };
        if now_ms < deadline {
            return;
        }
        if self.auto_playing {
            self.index = (self.index + 1) % self.image_count;
            self.direction = SlideDirection::Forward;
            self.deadline_ms = Some(now_ms + AUTOPLAY_INTERVAL_MS);
        } else {
            // Cooldown over: resume autoplay, next advance one interval out.
            self.auto_playing = true;
            self.deadline_ms = Some(now_ms + AUTOPLAY_INTERVAL_MS);
        }
    }

    /// Manually advance to the next slide.
    pub fn next(&mut self, now_ms: i64) {
        if self.image_count <= 1 {
            return;
        }
        self.index = (self.index + 1) % self.image_count;
        self.direction = SlideDirection::Forward;
        self.suspend(now_ms);
    }

    /// Manually go back to the previous slide.
    pub fn prev(&mut self, now_ms: i64) {
        if self.image_count <= 1 {
            return;
        }
        self.index = (self.index + self.image_count - 1) % self.image_count;
        self.direction = SlideDirection::Backward;
        self.suspend(now_ms);
    }

    /// Jump straight to a slide (dot navigation).
    pub fn jump(&mut self, index: usize, now_ms: i64) {
        if self.image_count <= 1 || index >= self.image_count || index == self.index {
            return;
        }
        self.direction = if index > self.index {
            SlideDirection::Forward
        } else {
            SlideDirection::Backward
        };
        self.index = index;
        self.suspend(now_ms);
    }

    /// Teardown: cancel any pending deadline so a disposed view is
    /// never acted on.
    pub fn stop(&mut self) {
        self.auto_playing = false;
        self.deadline_ms = None;
    }

    /// Suspend autoplay and schedule its resume, replacing whatever
    /// deadline was pending.
    fn suspend(&mut self, now_ms: i64) {
        self.auto_playing = false;
        self.deadline_ms = Some(now_ms + RESUME_DELAY_MS);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_image_never_rotates() {
        let mut carousel = Carousel::new(1, 0);
        assert!(!carousel.is_auto_playing());
        assert!(!carousel.shows_controls());
        assert_eq!(carousel.next_deadline(), None);

        carousel.tick(60_000);
        carousel.next(60_000);
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn test_autoplay_advances_on_interval() {
        let mut carousel = Carousel::new(3, 0);
        assert_eq!(carousel.next_deadline(), Some(AUTOPLAY_INTERVAL_MS));

        carousel.tick(AUTOPLAY_INTERVAL_MS);
        assert_eq!(carousel.index(), 1);
        carousel.tick(2 * AUTOPLAY_INTERVAL_MS);
        assert_eq!(carousel.index(), 2);
        carousel.tick(3 * AUTOPLAY_INTERVAL_MS);
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn test_early_tick_is_ignored() {
        let mut carousel = Carousel::new(3, 0);
        carousel.tick(AUTOPLAY_INTERVAL_MS - 1);
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn test_manual_nav_suspends_and_schedules_resume() {
        let mut carousel = Carousel::new(3, 0);
        carousel.next(1_000);
        assert_eq!(carousel.index(), 1);
        assert_eq!(carousel.direction(), SlideDirection::Forward);
        assert!(!carousel.is_auto_playing());
        assert_eq!(carousel.next_deadline(), Some(1_000 + RESUME_DELAY_MS));

        // During the cooldown nothing advances.
        carousel.tick(1_000 + RESUME_DELAY_MS - 1);
        assert_eq!(carousel.index(), 1);

        // Cooldown elapses: autoplay resumes, advance one interval later.
        carousel.tick(1_000 + RESUME_DELAY_MS);
        assert!(carousel.is_auto_playing());
        assert_eq!(carousel.index(), 1);
        carousel.tick(1_000 + RESUME_DELAY_MS + AUTOPLAY_INTERVAL_MS);
        assert_eq!(carousel.index(), 2);
    }

    #[test]
    fn test_rearm_replaces_pending_deadline() {
        let mut carousel = Carousel::new(4, 0);
        carousel.next(1_000);
        carousel.next(2_000);
        // Only the latest deadline is pending.
        assert_eq!(carousel.next_deadline(), Some(2_000 + RESUME_DELAY_MS));
    }

    #[test]
    fn test_prev_wraps_and_sets_direction() {
        let mut carousel = Carousel::new(3, 0);
        carousel.prev(100);
        assert_eq!(carousel.index(), 2);
        assert_eq!(carousel.direction(), SlideDirection::Backward);
    }

    #[test]
    fn test_jump_ignores_out_of_range() {
        let mut carousel = Carousel::new(3, 0);
        carousel.jump(7, 100);
        assert_eq!(carousel.index(), 0);
        carousel.jump(2, 100);
        assert_eq!(carousel.index(), 2);
    }

    #[test]
    fn test_stop_clears_deadline() {
        let mut carousel = Carousel::new(3, 0);
        carousel.stop();
        assert_eq!(carousel.next_deadline(), None);
        carousel.tick(1_000_000);
        assert_eq!(carousel.index(), 0);
    }
}
