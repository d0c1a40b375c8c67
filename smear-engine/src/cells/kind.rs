// kind.rs - Cell identity tags
//
// The tag names the render class the site styles each cell with.
// The numeric code is the enum discriminant and is what the encoder writes.

use serde::{Serialize, Serializer};

use crate::clinical::RbcMorphology;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum CellKind {
    // Red cells
    Rbc,
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

    // Nucleated red cells by maturity
    NrbcOrtho,
    NrbcPoly,
    NrbcBaso,

    Platelet,

    // White cells
    Neutrophil,
    Neutrophil3Lobe,
    BandNeutrophil,
    Hypersegmented,
    ToxicGranulation,
    DohleBodies,
    Lymphocyte,
    AtypicalLymph,
    SmudgeCell,
    Monocyte,
    Eosinophil,
    Eosinophil3Lobe,
    Basophil,
    Blast,
    BlastAuerRod,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellClass {
    Red,
    Nucleated,
    Platelet,
    White,
}

impl CellKind {
    pub const ALL: [CellKind; 35] = [
        Self::Rbc,
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
        Self::NrbcOrtho,
        Self::NrbcPoly,
        Self::NrbcBaso,
        Self::Platelet,
        Self::Neutrophil,
        Self::Neutrophil3Lobe,
        Self::BandNeutrophil,
        Self::Hypersegmented,
        Self::ToxicGranulation,
        Self::DohleBodies,
        Self::Lymphocyte,
        Self::AtypicalLymph,
        Self::SmudgeCell,
        Self::Monocyte,
        Self::Eosinophil,
        Self::Eosinophil3Lobe,
        Self::Basophil,
        Self::Blast,
        Self::BlastAuerRod,
    ];

    pub fn tag(self) -> &'static str {
        match self {
            Self::Rbc => "rbc",
            Self::Spherocyte => "spherocyte",
            Self::TargetCell => "target-cell",
            Self::Schistocyte => "schistocyte",
            Self::SickleCell => "sickle-cell",
            Self::Teardrop => "teardrop",
            Self::Elliptocyte => "elliptocyte",
            Self::BiteCell => "bite-cell",
            Self::BurrCell => "burr-cell",
            Self::Acanthocyte => "acanthocyte",
            Self::Stomatocyte => "stomatocyte",
            Self::Rouleaux => "rouleaux",
            Self::HowellJolly => "howell-jolly",
            Self::BasophilicStippling => "basophilic-stippling",
            Self::Pappenheimer => "pappenheimer",
            Self::Polychromasia => "polychromasia",
            Self::NrbcOrtho => "nrbc-ortho",
            Self::NrbcPoly => "nrbc-poly",
            Self::NrbcBaso => "nrbc-baso",
            Self::Platelet => "platelet",
            Self::Neutrophil => "neutrophil",
            Self::Neutrophil3Lobe => "neutrophil-3lobe",
            Self::BandNeutrophil => "band-neutrophil",
            Self::Hypersegmented => "hypersegmented",
            Self::ToxicGranulation => "toxic-granulation",
            Self::DohleBodies => "dohle-bodies",
            Self::Lymphocyte => "lymphocyte",
            Self::AtypicalLymph => "atypical-lymph",
            Self::SmudgeCell => "smudge-cell",
            Self::Monocyte => "monocyte",
            Self::Eosinophil => "eosinophil",
            Self::Eosinophil3Lobe => "eosinophil-3lobe",
            Self::Basophil => "basophil",
            Self::Blast => "blast",
            Self::BlastAuerRod => "blast-auer",
        }
    }

    #[inline]
    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn from_code(code: u8) -> Option<CellKind> {
        Self::ALL.get(code as usize).copied()
    }

    pub fn class(self) -> CellClass {
        match self {
            Self::NrbcOrtho | Self::NrbcPoly | Self::NrbcBaso => CellClass::Nucleated,
            Self::Platelet => CellClass::Platelet,
            k if k.code() < Self::NrbcOrtho.code() => CellClass::Red,
            _ => CellClass::White,
        }
    }
}

impl From<RbcMorphology> for CellKind {
    fn from(m: RbcMorphology) -> Self {
        match m {
            RbcMorphology::Spherocyte => Self::Spherocyte,
            RbcMorphology::TargetCell => Self::TargetCell,
            RbcMorphology::Schistocyte => Self::Schistocyte,
            RbcMorphology::SickleCell => Self::SickleCell,
            RbcMorphology::Teardrop => Self::Teardrop,
            RbcMorphology::Elliptocyte => Self::Elliptocyte,
            RbcMorphology::BiteCell => Self::BiteCell,
            RbcMorphology::BurrCell => Self::BurrCell,
            RbcMorphology::Acanthocyte => Self::Acanthocyte,
            RbcMorphology::Stomatocyte => Self::Stomatocyte,
            RbcMorphology::Rouleaux => Self::Rouleaux,
            RbcMorphology::HowellJolly => Self::HowellJolly,
            RbcMorphology::BasophilicStippling => Self::BasophilicStippling,
            RbcMorphology::Pappenheimer => Self::Pappenheimer,
            RbcMorphology::Polychromasia => Self::Polychromasia,
        }
    }
}

impl Serialize for CellKind {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(self.tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_index_all() {
        for (i, k) in CellKind::ALL.iter().enumerate() {
            assert_eq!(k.code() as usize, i, "{:?} out of place", k);
            assert_eq!(CellKind::from_code(k.code()), Some(*k));
        }
        assert_eq!(CellKind::from_code(CellKind::ALL.len() as u8), None);
    }

    #[test]
    fn classes() {
        assert_eq!(CellKind::Rbc.class(), CellClass::Red);
        assert_eq!(CellKind::Polychromasia.class(), CellClass::Red);
        assert_eq!(CellKind::NrbcPoly.class(), CellClass::Nucleated);
        assert_eq!(CellKind::Platelet.class(), CellClass::Platelet);
        assert_eq!(CellKind::Neutrophil.class(), CellClass::White);
        assert_eq!(CellKind::BlastAuerRod.class(), CellClass::White);
    }

    #[test]
    fn every_morphology_has_its_own_kind() {
        for m in RbcMorphology::ORDER {
            let k = CellKind::from(m);
            assert_eq!(k.class(), CellClass::Red);
            assert_ne!(k, CellKind::Rbc);
        }
    }
}
