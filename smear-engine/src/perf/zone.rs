// zone.rs - Slide zones
//
// The view position along the slide is quantized into three zones so the
// population is only rebuilt at zone boundaries. A zone change cross-fades
// the old population out unless the device is already struggling.

use super::PerformanceLevel;

/// Length of a zone cross-fade
pub const CROSSFADE_MS: f64 = 250.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideZone {
    Body,
    Monolayer,
    FeatheredEdge,
}

impl SlideZone {
    /// `y` runs from 0 (body) to 1 (feathered edge)
    pub fn at(y: f32) -> Self {
        if y < 0.6 {
            Self::Body
        } else if y < 0.85 {
            Self::Monolayer
        } else {
            Self::FeatheredEdge
        }
    }

    pub fn edge_proximity(self) -> f32 {
        match self {
            Self::Body => 0.3,
            Self::Monolayer => 0.7,
            Self::FeatheredEdge => 0.95,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Body => "Body",
            Self::Monolayer => "Monolayer",
            Self::FeatheredEdge => "Feathered Edge",
        }
    }
}

#[derive(Debug, Clone)]
pub struct ZoneTracker {
    zone: SlideZone,
    fading: Option<(SlideZone, f64)>,
}

impl ZoneTracker {
    pub fn new() -> Self {
        Self { zone: SlideZone::Body, fading: None }
    }

    pub fn zone(&self) -> SlideZone {
        self.zone
    }

    /// Zone still fading out, if a cross-fade is running
    pub fn previous(&self) -> Option<SlideZone> {
        self.fading.map(|(z, _)| z)
    }

    pub fn is_transitioning(&self) -> bool {
        self.fading.is_some()
    }

    /// Move the view. Returns true when the zone changed.
    pub fn move_to(&mut self, y: f32, level: PerformanceLevel, now_ms: f64) -> bool {
        let next = SlideZone::at(y);
        if next == self.zone {
            return false;
        }
        self.fading = if level.allows_transitions() {
            Some((self.zone, now_ms + CROSSFADE_MS))
        } else {
            None
        };
        self.zone = next;
        true
    }

    /// End a finished cross-fade
    pub fn tick(&mut self, now_ms: f64) {
        if let Some((_, ends)) = self.fading {
            if now_ms >= ends {
                self.fading = None;
            }
        }
    }
}

impl Default for ZoneTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantization() {
        assert_eq!(SlideZone::at(0.0), SlideZone::Body);
        assert_eq!(SlideZone::at(0.59), SlideZone::Body);
        assert_eq!(SlideZone::at(0.6), SlideZone::Monolayer);
        assert_eq!(SlideZone::at(0.85), SlideZone::FeatheredEdge);
        assert_eq!(SlideZone::at(1.0).edge_proximity(), 0.95);
    }

    #[test]
    fn crossfade_runs_then_ends() {
        let mut z = ZoneTracker::new();
        assert!(!z.move_to(0.3, PerformanceLevel::High, 0.0));
        assert!(z.move_to(0.7, PerformanceLevel::High, 100.0));
        assert_eq!(z.zone(), SlideZone::Monolayer);
        assert_eq!(z.previous(), Some(SlideZone::Body));
        z.tick(349.0);
        assert!(z.is_transitioning());
        z.tick(350.0);
        assert!(!z.is_transitioning());
    }

    #[test]
    fn slow_levels_swap_instantly() {
        for level in [PerformanceLevel::Low, PerformanceLevel::Minimal] {
            let mut z = ZoneTracker::new();
            assert!(z.move_to(0.9, level, 0.0));
            assert_eq!(z.zone(), SlideZone::FeatheredEdge);
            assert_eq!(z.previous(), None);
        }
    }
}
