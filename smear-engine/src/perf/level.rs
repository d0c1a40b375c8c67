// level.rs - Performance levels

use std::fmt;

use serde::Serialize;

use crate::density::DensityPreset;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PerformanceLevel {
    Detecting,
    High,
    Medium,
    Low,
    Minimal,
}

impl PerformanceLevel {
    /// Level for a measured frame rate once detection completes
    pub fn from_fps(fps: u32) -> Self {
        match fps {
            f if f >= 50 => Self::High,
            f if f >= 35 => Self::Medium,
            f if f >= 20 => Self::Low,
            _ => Self::Minimal,
        }
    }

    /// One step down; `Minimal` and `Detecting` stay put
    pub fn downgraded(self) -> Self {
        match self {
            Self::High => Self::Medium,
            Self::Medium => Self::Low,
            Self::Low => Self::Minimal,
            other => other,
        }
    }

    /// Density the controller asks for at this level
    pub fn density(self) -> DensityPreset {
        match self {
            Self::High => DensityPreset::Max,
            Self::Medium => DensityPreset::Full,
            Self::Low => DensityPreset::Medium,
            Self::Minimal => DensityPreset::Light,
            Self::Detecting => DensityPreset::Medium,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Detecting => "detecting",
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
            Self::Minimal => "minimal",
        }
    }

    /// Diagnostics panel label
    pub fn label(self) -> &'static str {
        match self {
            Self::Detecting => "Detecting...",
            Self::High => "High Performance",
            Self::Medium => "Medium Performance",
            Self::Low => "Low Performance",
            Self::Minimal => "Minimal Performance",
        }
    }

    /// Zone cross-fades are dropped on slow devices
    pub fn allows_transitions(self) -> bool {
        !matches!(self, Self::Low | Self::Minimal)
    }
}

impl fmt::Display for PerformanceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Color hint for an fps readout
pub fn fps_color(fps: u32) -> &'static str {
    match fps {
        f if f >= 55 => "#10b981",
        f if f >= 40 => "#f59e0b",
        f if f >= 25 => "#f97316",
        _ => "#ef4444",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detection_thresholds() {
        assert_eq!(PerformanceLevel::from_fps(125), PerformanceLevel::High);
        assert_eq!(PerformanceLevel::from_fps(50), PerformanceLevel::High);
        assert_eq!(PerformanceLevel::from_fps(49), PerformanceLevel::Medium);
        assert_eq!(PerformanceLevel::from_fps(35), PerformanceLevel::Medium);
        assert_eq!(PerformanceLevel::from_fps(34), PerformanceLevel::Low);
        assert_eq!(PerformanceLevel::from_fps(20), PerformanceLevel::Low);
        assert_eq!(PerformanceLevel::from_fps(19), PerformanceLevel::Minimal);
        assert_eq!(PerformanceLevel::from_fps(0), PerformanceLevel::Minimal);
    }

    #[test]
    fn downgrade_is_one_step() {
        use crate::perf::PerformanceLevel::*;
        assert_eq!(High.downgraded(), Medium);
        assert_eq!(Medium.downgraded(), Low);
        assert_eq!(Low.downgraded(), Minimal);
        assert_eq!(Minimal.downgraded(), Minimal);
        assert_eq!(Detecting.downgraded(), Detecting);
    }

    #[test]
    fn density_mapping() {
        use crate::perf::PerformanceLevel::*;
        assert_eq!(High.density(), DensityPreset::Max);
        assert_eq!(Medium.density(), DensityPreset::Full);
        assert_eq!(Low.density(), DensityPreset::Medium);
        assert_eq!(Minimal.density(), DensityPreset::Light);
        assert_eq!(Detecting.density(), DensityPreset::Medium);
    }

    #[test]
    fn fps_colors() {
        assert_eq!(fps_color(60), "#10b981");
        assert_eq!(fps_color(55), "#10b981");
        assert_eq!(fps_color(54), "#f59e0b");
        assert_eq!(fps_color(25), "#f97316");
        assert_eq!(fps_color(24), "#ef4444");
    }
}
