// src/animation/reveal.rs
//
// Wall-clock reveal of the segment sequence, one segment per interval.
// This counter is the only state that persists across frames.

#[derive(Debug, Clone)]
pub struct RevealAnimation {
    visible: usize,
    total: usize,
    interval: f32,
    last_advance: f32,
}

impl RevealAnimation {
    pub fn new(total: usize, interval: f32) -> Self {
        Self {
            visible: 0,
            total,
            interval,
            last_advance: 0.0,
        }
    }

    /// How many segments of the sequence are currently visible.
    pub fn visible(&self) -> usize {
        self.visible
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// True once every segment is visible; the final frame holds from there.
    pub fn is_complete(&self) -> bool {
        self.visible == self.total
    }

    /// Advances the counter by one when `time` (seconds) is more than an
    /// interval past the last advance. No-op once complete. Returns whether
    /// the counter moved.
    pub fn tick(&mut self, time: f32) -> bool {
        if self.visible >= self.total {
            return false;
        }
        if time - self.last_advance > self.interval {
            self.visible += 1;
            self.last_advance = time;
            return true;
        }
        false
    }
}
