// morphology.rs - Named morphology shares
//
// Each share is an independent percentage of cells showing that form.
// Shares are not a partition: generation walks them in declared order as
// cumulative thresholds, so the order of `ORDER` is significant.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::params::{SHARE_RANGE, clamp};
use crate::error::SmearError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RbcMorphology {
    Spherocyte,
    TargetCell,
    Schistocyte,
    SickleCell,
    Teardrop,
    Elliptocyte,
    BiteCell,
    BurrCell,
    Acanthocyte,
    Stomatocyte,
    Rouleaux,
    HowellJolly,
    BasophilicStippling,
    Pappenheimer,
    Polychromasia,
}

impl RbcMorphology {
    pub const ORDER: [RbcMorphology; 15] = [
        Self::Spherocyte,
        Self::TargetCell,
        Self::Schistocyte,
        Self::SickleCell,
        Self::Teardrop,
        Self::Elliptocyte,
        Self::BiteCell,
        Self::BurrCell,
        Self::Acanthocyte,
        Self::Stomatocyte,
        Self::Rouleaux,
        Self::HowellJolly,
        Self::BasophilicStippling,
        Self::Pappenheimer,
        Self::Polychromasia,
    ];

    /// Key used by the settings panel
    pub fn key(self) -> &'static str {
        match self {
            Self::Spherocyte => "spherocyte",
            Self::TargetCell => "targetCell",
            Self::Schistocyte => "schistocyte",
            Self::SickleCell => "sickleCell",
            Self::Teardrop => "teardrop",
            Self::Elliptocyte => "elliptocyte",
            Self::BiteCell => "biteCell",
            Self::BurrCell => "burrCell",
            Self::Acanthocyte => "acanthocyte",
            Self::Stomatocyte => "stomatocyte",
            Self::Rouleaux => "rouleaux",
            Self::HowellJolly => "howellJolly",
            Self::BasophilicStippling => "basophilicStippling",
            Self::Pappenheimer => "pappenheimer",
            Self::Polychromasia => "polychromasia",
        }
    }
}

impl FromStr for RbcMorphology {
    type Err = SmearError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ORDER
            .into_iter()
            .find(|m| m.key() == s)
            .ok_or_else(|| SmearError::UnknownMorphology(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WbcMorphology {
    BandNeutrophil,
    Hypersegmented,
    ToxicGranulation,
    DohleBodies,
    AtypicalLymph,
    Blast,
    SmudgeCell,
    AuerRod,
}

impl WbcMorphology {
    pub const ALL: [WbcMorphology; 8] = [
        Self::BandNeutrophil,
        Self::Hypersegmented,
        Self::ToxicGranulation,
        Self::DohleBodies,
        Self::AtypicalLymph,
        Self::Blast,
        Self::SmudgeCell,
        Self::AuerRod,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Self::BandNeutrophil => "bandNeutrophil",
            Self::Hypersegmented => "hypersegmented",
            Self::ToxicGranulation => "toxicGranulation",
            Self::DohleBodies => "dohleBodies",
            Self::AtypicalLymph => "atypicalLymph",
            Self::Blast => "blast",
            Self::SmudgeCell => "smudgeCell",
            Self::AuerRod => "auerRod",
        }
    }
}

impl FromStr for WbcMorphology {
    type Err = SmearError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.key() == s)
            .ok_or_else(|| SmearError::UnknownMorphology(s.to_string()))
    }
}

/// Percent of red cells showing each form
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RbcMorphologies {
    pub spherocyte: f32,
    pub target_cell: f32,
    pub schistocyte: f32,
    pub sickle_cell: f32,
    pub teardrop: f32,
    pub elliptocyte: f32,
    pub bite_cell: f32,
    pub burr_cell: f32,
    pub acanthocyte: f32,
    pub stomatocyte: f32,
    pub rouleaux: f32,
    pub howell_jolly: f32,
    pub basophilic_stippling: f32,
    pub pappenheimer: f32,
    pub polychromasia: f32,
}

impl RbcMorphologies {
    pub fn get(&self, m: RbcMorphology) -> f32 {
        *self.slot(m)
    }

    pub fn set(&mut self, m: RbcMorphology, percent: f32) {
        *self.slot_mut(m) = percent;
    }

    /// Shares in generation order
    pub fn ordered(&self) -> [(RbcMorphology, f32); 15] {
        RbcMorphology::ORDER.map(|m| (m, self.get(m)))
    }

    pub fn total(&self) -> f32 {
        RbcMorphology::ORDER.iter().map(|&m| self.get(m)).sum()
    }

    pub(crate) fn clamp_all(&mut self) {
        for m in RbcMorphology::ORDER {
            let v = self.slot_mut(m);
            *v = clamp(*v, SHARE_RANGE);
        }
    }

    fn slot(&self, m: RbcMorphology) -> &f32 {
        match m {
            RbcMorphology::Spherocyte => &self.spherocyte,
            RbcMorphology::TargetCell => &self.target_cell,
            RbcMorphology::Schistocyte => &self.schistocyte,
            RbcMorphology::SickleCell => &self.sickle_cell,
            RbcMorphology::Teardrop => &self.teardrop,
            RbcMorphology::Elliptocyte => &self.elliptocyte,
            RbcMorphology::BiteCell => &self.bite_cell,
            RbcMorphology::BurrCell => &self.burr_cell,
            RbcMorphology::Acanthocyte => &self.acanthocyte,
            RbcMorphology::Stomatocyte => &self.stomatocyte,
            RbcMorphology::Rouleaux => &self.rouleaux,
            RbcMorphology::HowellJolly => &self.howell_jolly,
            RbcMorphology::BasophilicStippling => &self.basophilic_stippling,
            RbcMorphology::Pappenheimer => &self.pappenheimer,
            RbcMorphology::Polychromasia => &self.polychromasia,
        }
    }

    fn slot_mut(&mut self, m: RbcMorphology) -> &mut f32 {
        match m {
            RbcMorphology::Spherocyte => &mut self.spherocyte,
            RbcMorphology::TargetCell => &mut self.target_cell,
            RbcMorphology::Schistocyte => &mut self.schistocyte,
            RbcMorphology::SickleCell => &mut self.sickle_cell,
            RbcMorphology::Teardrop => &mut self.teardrop,
            RbcMorphology::Elliptocyte => &mut self.elliptocyte,
            RbcMorphology::BiteCell => &mut self.bite_cell,
            RbcMorphology::BurrCell => &mut self.burr_cell,
            RbcMorphology::Acanthocyte => &mut self.acanthocyte,
            RbcMorphology::Stomatocyte => &mut self.stomatocyte,
            RbcMorphology::Rouleaux => &mut self.rouleaux,
            RbcMorphology::HowellJolly => &mut self.howell_jolly,
            RbcMorphology::BasophilicStippling => &mut self.basophilic_stippling,
            RbcMorphology::Pappenheimer => &mut self.pappenheimer,
            RbcMorphology::Polychromasia => &mut self.polychromasia,
        }
    }
}

/// Percent of white cells showing each form
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WbcMorphologies {
    pub band_neutrophil: f32,
    pub hypersegmented: f32,
    pub toxic_granulation: f32,
    pub dohle_bodies: f32,
    pub atypical_lymph: f32,
    pub blast: f32,
    pub smudge_cell: f32,
    pub auer_rod: f32,
}

impl WbcMorphologies {
    pub fn get(&self, m: WbcMorphology) -> f32 {
        match m {
            WbcMorphology::BandNeutrophil => self.band_neutrophil,
            WbcMorphology::Hypersegmented => self.hypersegmented,
            WbcMorphology::ToxicGranulation => self.toxic_granulation,
            WbcMorphology::DohleBodies => self.dohle_bodies,
            WbcMorphology::AtypicalLymph => self.atypical_lymph,
            WbcMorphology::Blast => self.blast,
            WbcMorphology::SmudgeCell => self.smudge_cell,
            WbcMorphology::AuerRod => self.auer_rod,
        }
    }

    pub fn set(&mut self, m: WbcMorphology, percent: f32) {
        let slot = match m {
            WbcMorphology::BandNeutrophil => &mut self.band_neutrophil,
            WbcMorphology::Hypersegmented => &mut self.hypersegmented,
            WbcMorphology::ToxicGranulation => &mut self.toxic_granulation,
            WbcMorphology::DohleBodies => &mut self.dohle_bodies,
            WbcMorphology::AtypicalLymph => &mut self.atypical_lymph,
            WbcMorphology::Blast => &mut self.blast,
            WbcMorphology::SmudgeCell => &mut self.smudge_cell,
            WbcMorphology::AuerRod => &mut self.auer_rod,
        };
        *slot = percent;
    }

    pub(crate) fn clamp_all(&mut self) {
        for m in WbcMorphology::ALL {
            self.set(m, clamp(self.get(m), SHARE_RANGE));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_round_trip_through_from_str() {
        for m in RbcMorphology::ORDER {
            assert_eq!(m.key().parse::<RbcMorphology>(), Ok(m));
        }
        for m in WbcMorphology::ALL {
            assert_eq!(m.key().parse::<WbcMorphology>(), Ok(m));
        }
        assert!("heinzBody".parse::<RbcMorphology>().is_err());
    }

    #[test]
    fn ordered_follows_declared_order() {
        let mut shares = RbcMorphologies::default();
        shares.set(RbcMorphology::Polychromasia, 7.0);
        shares.set(RbcMorphology::Spherocyte, 3.0);
        let ordered = shares.ordered();
        assert_eq!(ordered[0], (RbcMorphology::Spherocyte, 3.0));
        assert_eq!(ordered[14], (RbcMorphology::Polychromasia, 7.0));
        assert_eq!(shares.total(), 10.0);
    }
}
