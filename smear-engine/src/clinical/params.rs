// params.rs - Clinical inputs to the generator
//
// Field names follow the settings object the site passes in, so a
// parameter file or JS object deserializes directly.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{RbcMorphologies, WbcMorphologies};
use crate::density::Density;
use crate::error::SmearError;

// Reference values for a healthy adult
pub const NORMAL_RBC_PER_UL: f32 = 5_000_000.0;
pub const NORMAL_MCV: f32 = 90.0;
pub const NORMAL_RDW: f32 = 13.0;
pub const NORMAL_WBC_PER_UL: f32 = 7_500.0;
pub const NORMAL_PLT_PER_UL: f32 = 250_000.0;

// Slider domains
pub const RBC_RANGE: (f32, f32) = (2_000_000.0, 7_000_000.0);
pub const MCV_RANGE: (f32, f32) = (60.0, 130.0);
pub const RDW_RANGE: (f32, f32) = (10.0, 30.0);
pub const NRBC_RANGE: (f32, f32) = (0.0, 30.0);
pub const WBC_RANGE: (f32, f32) = (1_000.0, 500_000.0);
pub const PLT_RANGE: (f32, f32) = (10_000.0, 800_000.0);
/// Every morphology and differential share
pub const SHARE_RANGE: (f32, f32) = (0.0, 100.0);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lineage {
    Neutrophil,
    Lymphocyte,
    Monocyte,
    Eosinophil,
    Basophil,
}

impl Lineage {
    pub const ALL: [Lineage; 5] = [
        Self::Neutrophil,
        Self::Lymphocyte,
        Self::Monocyte,
        Self::Eosinophil,
        Self::Basophil,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Self::Neutrophil => "neutrophil",
            Self::Lymphocyte => "lymphocyte",
            Self::Monocyte => "monocyte",
            Self::Eosinophil => "eosinophil",
            Self::Basophil => "basophil",
        }
    }
}

impl FromStr for Lineage {
    type Err = SmearError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|l| l.key() == s)
            .ok_or_else(|| SmearError::UnknownLineage(s.to_string()))
    }
}

/// White cell differential in percent. Need not sum to 100.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WbcDifferential {
    pub neutrophil: f32,
    pub lymphocyte: f32,
    pub monocyte: f32,
    pub eosinophil: f32,
    pub basophil: f32,
}

impl WbcDifferential {
    pub const fn new(neutrophil: f32, lymphocyte: f32, monocyte: f32, eosinophil: f32, basophil: f32) -> Self {
        Self { neutrophil, lymphocyte, monocyte, eosinophil, basophil }
    }

    pub fn get(&self, l: Lineage) -> f32 {
        match l {
            Lineage::Neutrophil => self.neutrophil,
            Lineage::Lymphocyte => self.lymphocyte,
            Lineage::Monocyte => self.monocyte,
            Lineage::Eosinophil => self.eosinophil,
            Lineage::Basophil => self.basophil,
        }
    }

    pub fn set(&mut self, l: Lineage, percent: f32) {
        let slot = match l {
            Lineage::Neutrophil => &mut self.neutrophil,
            Lineage::Lymphocyte => &mut self.lymphocyte,
            Lineage::Monocyte => &mut self.monocyte,
            Lineage::Eosinophil => &mut self.eosinophil,
            Lineage::Basophil => &mut self.basophil,
        };
        *slot = percent;
    }

    pub fn total(&self) -> f32 {
        Lineage::ALL.iter().map(|&l| self.get(l)).sum()
    }

    /// Share of the total in [0, 1]; zero when every entry is zero
    pub fn share(&self, l: Lineage) -> f32 {
        let total = self.total();
        if total > 0.0 { self.get(l) / total } else { 0.0 }
    }

    /// Share rescaled to a whole percent for display
    pub fn normalized_percent(&self, l: Lineage) -> u32 {
        (self.share(l) * 100.0).round() as u32
    }

    /// Cells per microliter of this lineage
    pub fn absolute_count(&self, l: Lineage, wbc_per_ul: f32) -> u32 {
        (wbc_per_ul * self.share(l)).round() as u32
    }
}

impl Default for WbcDifferential {
    fn default() -> Self {
        Self::new(60.0, 30.0, 5.0, 3.0, 2.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClinicalParameters {
    #[serde(rename = "rbcPerUL")]
    pub rbc_per_ul: f32,
    pub mcv: f32,
    pub rdw: f32,
    #[serde(rename = "nrbcPer100RBC")]
    pub nrbc_per_100_rbc: f32,
    #[serde(rename = "wbcPerUL")]
    pub wbc_per_ul: f32,
    #[serde(rename = "wbcDifferential")]
    pub wbc_differential: WbcDifferential,
    #[serde(rename = "pltPerUL")]
    pub plt_per_ul: f32,
    #[serde(rename = "rbcMorphologies")]
    pub rbc_morphology: RbcMorphologies,
    #[serde(rename = "wbcMorphologies")]
    pub wbc_morphology: WbcMorphologies,
    pub density: Density,
}

impl Default for ClinicalParameters {
    fn default() -> Self {
        Self {
            rbc_per_ul: NORMAL_RBC_PER_UL,
            mcv: NORMAL_MCV,
            rdw: NORMAL_RDW,
            nrbc_per_100_rbc: 0.0,
            wbc_per_ul: NORMAL_WBC_PER_UL,
            wbc_differential: WbcDifferential::default(),
            plt_per_ul: NORMAL_PLT_PER_UL,
            rbc_morphology: RbcMorphologies::default(),
            wbc_morphology: WbcMorphologies::default(),
            density: Density::default(),
        }
    }
}

impl ClinicalParameters {
    /// Normal blood at the given density, as used for page backgrounds
    pub fn background(density: impl Into<Density>) -> Self {
        Self { density: density.into(), ..Self::default() }
    }

    /// Copy with every value clamped to its slider domain
    pub fn clamped(&self) -> Self {
        let mut p = self.clone();
        p.rbc_per_ul = clamp(p.rbc_per_ul, RBC_RANGE);
        p.mcv = clamp(p.mcv, MCV_RANGE);
        p.rdw = clamp(p.rdw, RDW_RANGE);
        p.nrbc_per_100_rbc = clamp(p.nrbc_per_100_rbc, NRBC_RANGE);
        p.wbc_per_ul = clamp(p.wbc_per_ul, WBC_RANGE);
        p.plt_per_ul = clamp(p.plt_per_ul, PLT_RANGE);
        for l in Lineage::ALL {
            p.wbc_differential.set(l, clamp(p.wbc_differential.get(l), SHARE_RANGE));
        }
        p.rbc_morphology.clamp_all();
        p.wbc_morphology.clamp_all();
        p
    }
}

#[inline]
pub(crate) fn clamp(v: f32, (lo, hi): (f32, f32)) -> f32 {
    // NaN from a bad slider read lands on the low end
    if v.is_nan() { lo } else { v.clamp(lo, hi) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clinical::{RbcMorphology, WbcMorphology};

    #[test]
    fn normalization_divides_by_sum() {
        let diff = WbcDifferential::new(40.0, 40.0, 40.0, 40.0, 40.0);
        for l in Lineage::ALL {
            assert!((diff.share(l) - 0.2).abs() < 1e-6);
            assert_eq!(diff.normalized_percent(l), 20);
        }
    }

    #[test]
    fn empty_differential_has_no_shares() {
        let diff = WbcDifferential::new(0.0, 0.0, 0.0, 0.0, 0.0);
        assert_eq!(diff.share(Lineage::Neutrophil), 0.0);
        assert_eq!(diff.absolute_count(Lineage::Neutrophil, 7_500.0), 0);
    }

    #[test]
    fn absolute_counts_follow_share() {
        let diff = WbcDifferential::default();
        assert_eq!(diff.absolute_count(Lineage::Neutrophil, 7_500.0), 4_500);
        assert_eq!(diff.absolute_count(Lineage::Basophil, 7_500.0), 150);
    }

    #[test]
    fn clamped_respects_domains() {
        let mut p = ClinicalParameters::default();
        p.rbc_per_ul = 9_000_000.0;
        p.mcv = 10.0;
        p.rdw = f32::NAN;
        p.wbc_differential.neutrophil = 250.0;
        p.rbc_morphology.set(RbcMorphology::Rouleaux, -5.0);
        let c = p.clamped();
        assert_eq!(c.rbc_per_ul, 7_000_000.0);
        assert_eq!(c.mcv, 60.0);
        assert_eq!(c.rdw, 10.0);
        assert_eq!(c.wbc_differential.neutrophil, 100.0);
        assert_eq!(c.rbc_morphology.rouleaux, 0.0);
    }

    #[test]
    fn nan_shares_clamp_to_zero() {
        let mut p = ClinicalParameters::default();
        p.rbc_morphology.set(RbcMorphology::Spherocyte, f32::NAN);
        p.wbc_morphology.set(WbcMorphology::Blast, f32::NAN);
        p.wbc_differential.neutrophil = f32::NAN;
        let c = p.clamped();
        assert_eq!(c.rbc_morphology.spherocyte, 0.0);
        assert_eq!(c.wbc_morphology.blast, 0.0);
        assert_eq!(c.wbc_differential.neutrophil, 0.0);
        assert_eq!(c, c.clamped());
    }

    #[test]
    fn lineage_keys_parse() {
        assert_eq!("monocyte".parse::<Lineage>(), Ok(Lineage::Monocyte));
        assert!("myelocyte".parse::<Lineage>().is_err());
    }
}
