// density.rs - Effective density and shadow policy
//
// A manual pick from the density menu wins outright. Otherwise the level
// chooses, capped at `light` on narrow screens. A raw scale override skips
// both the table and the cap.

use super::PerformanceLevel;
use crate::density::{Density, DensityPreset};

/// Widest viewport, in CSS pixels, treated as mobile
pub const MOBILE_MAX_WIDTH: u32 = 768;
const MOBILE_CAP: DensityPreset = DensityPreset::Light;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DensitySelector {
    manual: Option<DensityPreset>,
    scale_override: Option<f32>,
    shadows: Option<bool>,
    mobile: bool,
}

impl DensitySelector {
    pub fn new(mobile: bool) -> Self {
        Self { mobile, ..Self::default() }
    }

    pub fn for_viewport(width: u32) -> Self {
        Self::new(width <= MOBILE_MAX_WIDTH)
    }

    pub fn is_mobile(&self) -> bool {
        self.mobile
    }

    pub fn set_mobile(&mut self, mobile: bool) {
        self.mobile = mobile;
    }

    pub fn manual(&self) -> Option<DensityPreset> {
        self.manual
    }

    /// `None` returns control to the performance level
    pub fn set_manual(&mut self, preset: Option<DensityPreset>) {
        self.manual = preset;
    }

    pub fn scale_override(&self) -> Option<f32> {
        self.scale_override
    }

    pub fn set_scale_override(&mut self, scale: Option<f32>) {
        self.scale_override = scale.map(|s| s.max(0.0));
    }

    /// `None` returns shadows to automatic
    pub fn set_shadows(&mut self, enabled: Option<bool>) {
        self.shadows = enabled;
    }

    /// Preset shown in the status panel
    pub fn effective(&self, level: PerformanceLevel) -> DensityPreset {
        if let Some(p) = self.manual {
            return p;
        }
        let auto = level.density();
        if self.mobile && self.scale_override.is_none() {
            auto.capped_at(MOBILE_CAP)
        } else {
            auto
        }
    }

    /// Density handed to the generator
    pub fn resolve(&self, level: PerformanceLevel) -> Density {
        match (self.manual, self.scale_override) {
            (Some(p), _) => Density::Preset(p),
            (None, Some(s)) => Density::Scale(s),
            (None, None) => Density::Preset(self.effective(level)),
        }
    }

    /// A manual toggle wins; otherwise mobile shadows only at `high`,
    /// desktop at `high` or `medium`.
    pub fn shadows_enabled(&self, level: PerformanceLevel) -> bool {
        if let Some(on) = self.shadows {
            return on;
        }
        match level {
            PerformanceLevel::High => true,
            PerformanceLevel::Medium => !self.mobile,
            _ => false,
        }
    }
}
