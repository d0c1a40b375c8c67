// monitor.rs - Frame rate sampling and level selection
//
// Fed one timestamp per display refresh. Detection waits for DETECT_SAMPLES
// valid frames counted since the monitor was created; the rolling window
// only bounds the fps average. After detection the level can only go down,
// one step at a time, with DEBOUNCE_MS between changes.

use std::collections::VecDeque;

use super::PerformanceLevel;

/// Frames averaged into the fps readout
pub const WINDOW: usize = 45;
/// Valid frames before the first level decision
pub const DETECT_SAMPLES: u32 = 30;
/// Minimum gap between two level changes
pub const DEBOUNCE_MS: f64 = 2000.0;
/// Frames slower than this are dropped (tab switch, debugger pause)
const MAX_DELTA_MS: f64 = 1000.0;
/// Below this after detection the level drops one step
const DOWNGRADE_FPS: u32 = 20;
const INITIAL_FPS: u32 = 60;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelChange {
    pub from: PerformanceLevel,
    pub to: PerformanceLevel,
    pub fps: u32,
    pub at_ms: f64,
}

#[derive(Debug, Clone)]
pub struct PerformanceMonitor {
    window: VecDeque<f64>,
    samples: u32,
    last_frame_ms: f64,
    last_change_ms: f64,
    fps: u32,
    level: PerformanceLevel,
}

impl PerformanceMonitor {
    /// `now_ms` is the clock reading the first delta is measured from
    pub fn new(now_ms: f64) -> Self {
        Self {
            window: VecDeque::with_capacity(WINDOW + 1),
            samples: 0,
            last_frame_ms: now_ms,
            last_change_ms: 0.0,
            fps: INITIAL_FPS,
            level: PerformanceLevel::Detecting,
        }
    }

    pub fn level(&self) -> PerformanceLevel {
        self.level
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }

    /// Valid frames seen so far, never reset by window eviction
    pub fn sample_count(&self) -> u32 {
        self.samples
    }

    pub fn average_frame_ms(&self) -> Option<f64> {
        if self.window.is_empty() {
            None
        } else {
            Some(self.window.iter().sum::<f64>() / self.window.len() as f64)
        }
    }

    /// Record one frame. Returns the level change it caused, if any.
    pub fn record_frame(&mut self, now_ms: f64) -> Option<LevelChange> {
        let delta = now_ms - self.last_frame_ms;
        self.last_frame_ms = now_ms;

        if !(delta > 0.0 && delta < MAX_DELTA_MS) {
            return None;
        }

        self.window.push_back(delta);
        if self.window.len() > WINDOW {
            self.window.pop_front();
        }
        self.samples = self.samples.saturating_add(1);

        if let Some(avg) = self.average_frame_ms() {
            self.fps = (1000.0 / avg).round() as u32;
        }

        if self.samples < DETECT_SAMPLES {
            return None;
        }

        let next = match self.level {
            PerformanceLevel::Detecting => PerformanceLevel::from_fps(self.fps),
            PerformanceLevel::Minimal => return None,
            current => {
                if now_ms - self.last_change_ms < DEBOUNCE_MS || self.fps >= DOWNGRADE_FPS {
                    return None;
                }
                current.downgraded()
            }
        };

        let change = LevelChange { from: self.level, to: next, fps: self.fps, at_ms: now_ms };
        self.level = next;
        self.last_change_ms = now_ms;
        log::info!("performance level {} -> {} at {} fps", change.from, change.to, change.fps);
        Some(change)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed(m: &mut PerformanceMonitor, t: &mut f64, delta: f64, frames: usize) -> Vec<LevelChange> {
        let mut changes = Vec::new();
        for _ in 0..frames {
            *t += delta;
            changes.extend(m.record_frame(*t));
        }
        changes
    }

    #[test]
    fn starts_detecting_at_sixty() {
        let m = PerformanceMonitor::new(0.0);
        assert_eq!(m.level(), PerformanceLevel::Detecting);
        assert_eq!(m.fps(), 60);
        assert_eq!(m.average_frame_ms(), None);
    }

    #[test]
    fn detection_waits_for_thirty_samples() {
        let mut m = PerformanceMonitor::new(0.0);
        let mut t = 0.0;
        assert!(feed(&mut m, &mut t, 8.0, 29).is_empty());
        assert_eq!(m.level(), PerformanceLevel::Detecting);
        let changes = feed(&mut m, &mut t, 8.0, 1);
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].from, PerformanceLevel::Detecting);
        assert_eq!(changes[0].to, PerformanceLevel::High);
        assert_eq!(m.fps(), 125);
    }

    #[test]
    fn invalid_deltas_are_not_samples() {
        let mut m = PerformanceMonitor::new(100.0);
        // same timestamp, then a long stall
        assert_eq!(m.record_frame(100.0), None);
        assert_eq!(m.record_frame(1500.0), None);
        assert_eq!(m.sample_count(), 0);
        m.record_frame(1516.0);
        assert_eq!(m.sample_count(), 1);
        assert_eq!(m.fps(), 63);
    }

    #[test]
    fn window_is_bounded_but_counter_is_not() {
        let mut m = PerformanceMonitor::new(0.0);
        let mut t = 0.0;
        feed(&mut m, &mut t, 16.0, 100);
        assert_eq!(m.sample_count(), 100);
        assert_eq!(m.window.len(), WINDOW);
    }

    #[test]
    fn debounce_holds_a_downgrade() {
        let mut m = PerformanceMonitor::new(0.0);
        let mut t = 0.0;
        // detect at t=600 (fps 50 -> high)
        feed(&mut m, &mut t, 20.0, 30);
        assert_eq!(m.level(), PerformanceLevel::High);
        // slow frames, but within 2000 ms of the change
        let changes = feed(&mut m, &mut t, 100.0, 19);
        assert!(changes.is_empty(), "changed inside debounce: {:?}", changes);
        // t = 2500 is 1900 ms after the change; the next frame is 2000 ms after
        let changes = feed(&mut m, &mut t, 100.0, 1);
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].to, PerformanceLevel::Medium);
    }

    #[test]
    fn slow_detection_goes_straight_to_minimal() {
        let mut m = PerformanceMonitor::new(0.0);
        let mut t = 0.0;
        let changes = feed(&mut m, &mut t, 100.0, 30);
        assert_eq!(changes.len(), 1);
        assert_eq!(m.level(), PerformanceLevel::Minimal);
        assert!(feed(&mut m, &mut t, 5.0, 200).is_empty());
        assert_eq!(m.level(), PerformanceLevel::Minimal);
    }
}
