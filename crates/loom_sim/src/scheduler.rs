//! Drop-frame throttle for the thread field.
//!
//! The host calls [`FrameScheduler::poll`] on every display callback with a
//! monotonic timestamp. A frame runs only once a full interval has passed
//! since the last one; late frames are never made up.

use bevy::prelude::Resource;
use std::time::Duration;

#[derive(Resource, Debug, Clone)]
pub struct FrameScheduler {
    interval: Duration,
    last_frame: Duration,
    frames_run: u64,
    frames_skipped: u64,
}

impl FrameScheduler {
    /// A zero rate is treated as one frame per second.
    pub fn new(target_fps: u32) -> Self {
        Self {
            interval: Duration::from_secs_f64(1.0 / target_fps.max(1) as f64),
            last_frame: Duration::ZERO,
            frames_run: 0,
            frames_skipped: 0,
        }
    }

    /// Minimum time between two executed frames
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Whether a frame is due at `now`. Records it as run when it is.
    pub fn poll(&mut self, now: Duration) -> bool {
        if now.saturating_sub(self.last_frame) >= self.interval {
            self.last_frame = now;
            self.frames_run += 1;
            true
        } else {
            self.frames_skipped += 1;
            false
        }
    }

    /// Run `frame` if one is due at `now`
    pub fn drive(&mut self, now: Duration, frame: impl FnOnce()) -> bool {
        let due = self.poll(now);
        if due {
            frame();
        }
        due
    }

    pub fn frames_run(&self) -> u64 {
        self.frames_run
    }

    pub fn frames_skipped(&self) -> u64 {
        self.frames_skipped
    }

    /// Timestamp of the last executed frame
    pub fn last_frame(&self) -> Duration {
        self.last_frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn callbacks(step_ms: u64, until_ms: u64) -> impl Iterator<Item = Duration> {
        (0..=until_ms / step_ms).map(move |i| Duration::from_millis(i * step_ms))
    }

    #[test]
    fn test_interval_from_rate() {
        assert_eq!(FrameScheduler::new(15).interval(), Duration::from_secs_f64(1.0 / 15.0));
        assert_eq!(FrameScheduler::new(0).interval(), Duration::from_secs(1));
    }

    #[test]
    fn test_fast_callbacks_are_throttled() {
        let mut scheduler = FrameScheduler::new(30);
        let mut frames = 0;
        for now in callbacks(5, 1000) {
            scheduler.drive(now, || frames += 1);
        }
        assert!(frames <= 31, "ran {frames} frames");
        assert!(frames >= 25, "ran {frames} frames");
        assert_eq!(scheduler.frames_run(), frames);
        assert_eq!(scheduler.frames_run() + scheduler.frames_skipped(), 201);
    }

    #[test]
    fn test_frames_are_spaced_by_interval() {
        let mut scheduler = FrameScheduler::new(30);
        let mut last: Option<Duration> = None;
        for now in callbacks(5, 2000) {
            if scheduler.poll(now) {
                if let Some(prev) = last {
                    assert!(now - prev >= scheduler.interval());
                }
                last = Some(now);
            }
        }
    }

    #[test]
    fn test_first_frame_waits_one_interval() {
        let mut scheduler = FrameScheduler::new(24);
        assert!(!scheduler.poll(Duration::ZERO));
        assert!(!scheduler.poll(Duration::from_millis(40)));
        assert!(scheduler.poll(Duration::from_millis(42)));
    }

    #[test]
    fn test_no_catch_up_after_stall() {
        let mut scheduler = FrameScheduler::new(30);
        assert!(scheduler.poll(Duration::from_millis(40)));
        // Host stalls for a full second: exactly one frame, no backlog
        assert!(scheduler.poll(Duration::from_millis(1040)));
        assert!(!scheduler.poll(Duration::from_millis(1045)));
        assert!(!scheduler.poll(Duration::from_millis(1050)));
        assert_eq!(scheduler.frames_run(), 2);
        assert_eq!(scheduler.last_frame(), Duration::from_millis(1040));
    }

    #[test]
    fn test_slow_host_bounds_rate() {
        // Host slower than the target: every callback runs
        let mut scheduler = FrameScheduler::new(30);
        let ran = callbacks(50, 1000).filter(|now| scheduler.poll(*now)).count();
        assert_eq!(ran, 20);
    }
}
