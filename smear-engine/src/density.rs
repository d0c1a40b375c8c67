// density.rs - Density presets
//
// A preset is a multiplier on the number of generated cells.
// `Medium` is sparser than `Light`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SmearError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DensityPreset {
    Light,
    Medium,
    Full,
    Ultra,
    Max,
}

impl DensityPreset {
    pub const ALL: [DensityPreset; 5] = [Self::Light, Self::Medium, Self::Full, Self::Ultra, Self::Max];

    pub fn scale(self) -> f32 {
        match self {
            Self::Light => 0.5,
            Self::Medium => 0.4,
            Self::Full => 1.0,
            Self::Ultra => 3.0,
            Self::Max => 5.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Medium => "medium",
            Self::Full => "full",
            Self::Ultra => "ultra",
            Self::Max => "max",
        }
    }

    /// Button label in the density picker
    pub fn label(self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Medium => "Medium",
            Self::Full => "Full",
            Self::Ultra => "Ultra (3x)",
            Self::Max => "Max (5x)",
        }
    }

    /// Rough population size at normal counts, for the status panel
    pub fn cell_count_estimate(self) -> &'static str {
        match self {
            Self::Max => "~3,000 total (~2,750 RBC, ~180 PLT, ~28 WBC)",
            Self::Ultra => "~1,800 total (~1,650 RBC, ~110 PLT, ~17 WBC)",
            Self::Full => "~600 total (~550 RBC, ~37 PLT, ~6 WBC)",
            Self::Medium => "~240 total (~220 RBC, ~15 PLT, ~2 WBC)",
            Self::Light => "~300 total (~275 RBC, ~18 PLT, ~3 WBC)",
        }
    }

    /// `cap` if this preset would generate more cells than it, else self
    pub fn capped_at(self, cap: DensityPreset) -> DensityPreset {
        if self.scale() > cap.scale() { cap } else { self }
    }
}

impl fmt::Display for DensityPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DensityPreset {
    type Err = SmearError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| SmearError::UnknownDensity(s.to_string()))
    }
}

/// Generator density: a preset, or a raw multiplier that bypasses the table
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Density {
    Preset(DensityPreset),
    Scale(f32),
}

impl Density {
    pub fn scale(self) -> f32 {
        match self {
            Self::Preset(p) => p.scale(),
            Self::Scale(s) => s.max(0.0),
        }
    }
}

impl Default for Density {
    fn default() -> Self {
        Self::Preset(DensityPreset::Medium)
    }
}

impl From<DensityPreset> for Density {
    fn from(p: DensityPreset) -> Self {
        Self::Preset(p)
    }
}
