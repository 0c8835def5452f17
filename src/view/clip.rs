use super::engine::ClipPlayer;

/// Reference clip player with morph-target semantics: a clip is an inclusive
/// keyframe range played over a fixed duration; time wraps over the duration
/// and maps onto keyframes in declared order, from `start` toward `end`
/// whichever direction that is.
///
/// Useful for headless hosts and tests; a real renderer supplies its own
/// `ClipPlayer` over the engine's animation system.
#[derive(Debug, Clone)]
pub struct KeyframeClip {
    start: u32,
    end: u32,
    duration_ms: f32,
    time_ms: f32,
}

impl KeyframeClip {
    pub fn new() -> Self {
        Self {
            start: 0,
            end: 0,
            duration_ms: 0.0,
            time_ms: 0.0,
        }
    }

    pub fn time_ms(&self) -> f32 {
        self.time_ms
    }

    pub fn duration_ms(&self) -> f32 {
        self.duration_ms
    }

    fn frame_count(&self) -> u32 {
        self.start.abs_diff(self.end) + 1
    }
}

impl Default for KeyframeClip {
    fn default() -> Self {
        Self::new()
    }
}

impl ClipPlayer for KeyframeClip {
    fn set_range(&mut self, start: u32, end: u32) {
        self.start = start;
        self.end = end;
    }

    fn reset_time(&mut self) {
        self.time_ms = 0.0;
    }

    fn set_duration(&mut self, duration_ms: f32) {
        self.duration_ms = duration_ms;
    }

    fn advance(&mut self, elapsed_ms: f32) {
        self.time_ms += elapsed_ms;
    }

    fn current_keyframe(&self) -> u32 {
        // Degenerate ranges (a single frame, or bounds authored
        // end-before-start yielding a negative duration) hold the first
        // declared frame.
        if self.duration_ms <= 0.0 || self.frame_count() == 1 {
            return self.start;
        }

        let phase = (self.time_ms % self.duration_ms) / self.duration_ms;
        let step = ((phase * self.frame_count() as f32) as u32).min(self.frame_count() - 1);
        if self.end >= self.start {
            self.start + step
        } else {
            self.start - step
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clip(start: u32, end: u32, fps: f32) -> KeyframeClip {
        let mut c = KeyframeClip::new();
        c.set_range(start, end);
        c.set_duration(1000.0 * (end as f32 - start as f32) / fps);
        c.reset_time();
        c
    }

    #[test]
    fn test_keyframes_progress_in_declared_order() {
        // 40..=45 at 10 fps: 500 ms across 6 frames
        let mut c = clip(40, 45, 10.0);
        assert_eq!(c.current_keyframe(), 40);

        c.advance(250.0);
        assert_eq!(c.current_keyframe(), 43);

        c.advance(249.0);
        assert_eq!(c.current_keyframe(), 45, "final frame reached before wrap");
    }

    #[test]
    fn test_time_wraps_over_duration() {
        let mut c = clip(40, 45, 10.0);
        c.advance(500.0 + 10.0);
        assert_eq!(c.current_keyframe(), 40, "loop wraps to the first frame");
    }

    #[test]
    fn test_reset_rewinds_to_range_start() {
        let mut c = clip(0, 39, 9.0);
        c.advance(2000.0);
        assert_ne!(c.current_keyframe(), 0);
        c.reset_time();
        assert_eq!(c.current_keyframe(), 0);
    }

    #[test]
    fn test_reversed_bounds_hold_first_declared_frame() {
        // Authored end-before-start: duration is negative, never corrected.
        let mut c = KeyframeClip::new();
        c.set_range(196, 172);
        c.set_duration(1000.0 * (172.0 - 196.0) / 7.0);
        c.reset_time();

        assert_eq!(c.current_keyframe(), 196);
        c.advance(10_000.0);
        assert_eq!(c.current_keyframe(), 196);
    }

    #[test]
    fn test_single_frame_range() {
        let mut c = KeyframeClip::new();
        c.set_range(198, 198);
        c.set_duration(0.0);
        c.advance(1000.0);
        assert_eq!(c.current_keyframe(), 198);
    }
}
