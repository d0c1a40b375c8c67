// presets.rs - Clinical case presets
//
// One entry per teaching case. Morphology lists hold only the non-zero
// shares; everything not listed is 0%.

use super::{
    ClinicalParameters, RbcMorphologies, RbcMorphology as R, WbcDifferential, WbcMorphologies,
    WbcMorphology as W,
};
use crate::error::{Result, SmearError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresetCategory {
    Normal,
    RedCell,
    WhiteCell,
    Platelet,
    MultiLineage,
}

#[derive(Debug, Clone)]
pub struct ClinicalPreset {
    pub name: &'static str,
    pub description: &'static str,
    pub category: PresetCategory,
    pub rbc_per_ul: f32,
    pub mcv: f32,
    pub rdw: f32,
    pub nrbc_per_100_rbc: f32,
    pub plt_per_ul: f32,
    pub wbc_per_ul: f32,
    pub differential: WbcDifferential,
    pub rbc: &'static [(R, f32)],
    pub wbc: &'static [(W, f32)],
}

impl ClinicalPreset {
    /// Overwrite counts, indices and morphology; density is left as is.
    pub fn apply_to(&self, params: &mut ClinicalParameters) {
        params.rbc_per_ul = self.rbc_per_ul;
        params.mcv = self.mcv;
        params.rdw = self.rdw;
        params.nrbc_per_100_rbc = self.nrbc_per_100_rbc;
        params.plt_per_ul = self.plt_per_ul;
        params.wbc_per_ul = self.wbc_per_ul;
        params.wbc_differential = self.differential.clone();

        params.rbc_morphology = RbcMorphologies::default();
        for &(m, v) in self.rbc {
            params.rbc_morphology.set(m, v);
        }
        params.wbc_morphology = WbcMorphologies::default();
        for &(m, v) in self.wbc {
            params.wbc_morphology.set(m, v);
        }
    }

    pub fn to_parameters(&self) -> ClinicalParameters {
        let mut p = ClinicalParameters::default();
        self.apply_to(&mut p);
        p
    }
}

/// Look a preset up by its display name
pub fn find_preset(name: &str) -> Result<&'static ClinicalPreset> {
    PRESETS
        .iter()
        .find(|p| p.name == name)
        .ok_or_else(|| SmearError::UnknownPreset(name.to_string()))
}

pub fn presets() -> &'static [ClinicalPreset] {
    PRESETS
}

const fn diff(n: f32, l: f32, m: f32, e: f32, b: f32) -> WbcDifferential {
    WbcDifferential::new(n, l, m, e, b)
}

const NORMAL_DIFF: WbcDifferential = diff(60.0, 30.0, 5.0, 3.0, 2.0);

use PresetCategory::*;

static PRESETS: &[ClinicalPreset] = &[
    ClinicalPreset {
        name: "Normal",
        description: "Healthy blood - no abnormal morphology",
        category: Normal,
        rbc_per_ul: 5_000_000.0, mcv: 90.0, rdw: 13.0, nrbc_per_100_rbc: 0.0,
        plt_per_ul: 250_000.0, wbc_per_ul: 7_500.0,
        differential: NORMAL_DIFF,
        rbc: &[],
        wbc: &[],
    },
    // Red cell disorders
    ClinicalPreset {
        name: "IDA",
        description: "Iron deficiency anemia - microcytic, high RDW",
        category: RedCell,
        rbc_per_ul: 3_800_000.0, mcv: 70.0, rdw: 19.0, nrbc_per_100_rbc: 0.0,
        plt_per_ul: 420_000.0, wbc_per_ul: 7_000.0,
        differential: NORMAL_DIFF,
        rbc: &[(R::TargetCell, 10.0), (R::Elliptocyte, 20.0), (R::Polychromasia, 5.0)],
        wbc: &[],
    },
    ClinicalPreset {
        name: "Thal Minor",
        description: "Thalassemia minor - microcytic, normal RDW, high RBC",
        category: RedCell,
        rbc_per_ul: 5_800_000.0, mcv: 68.0, rdw: 14.0, nrbc_per_100_rbc: 1.0,
        plt_per_ul: 260_000.0, wbc_per_ul: 7_500.0,
        differential: NORMAL_DIFF,
        rbc: &[(R::TargetCell, 25.0), (R::Elliptocyte, 5.0), (R::BasophilicStippling, 5.0)],
        wbc: &[],
    },
    ClinicalPreset {
        name: "ACD",
        description: "Anemia of chronic disease - normocytic",
        category: RedCell,
        rbc_per_ul: 3_800_000.0, mcv: 85.0, rdw: 14.0, nrbc_per_100_rbc: 0.0,
        plt_per_ul: 320_000.0, wbc_per_ul: 8_000.0,
        differential: diff(60.0, 30.0, 6.0, 3.0, 1.0),
        rbc: &[],
        wbc: &[],
    },
    ClinicalPreset {
        name: "B12/Folate",
        description: "Megaloblastic anemia - macrocytic",
        category: RedCell,
        rbc_per_ul: 2_800_000.0, mcv: 115.0, rdw: 18.0, nrbc_per_100_rbc: 2.0,
        plt_per_ul: 100_000.0, wbc_per_ul: 3_500.0,
        differential: diff(55.0, 35.0, 6.0, 3.0, 1.0),
        rbc: &[
            (R::Teardrop, 5.0), (R::Elliptocyte, 25.0), (R::HowellJolly, 10.0),
            (R::BasophilicStippling, 5.0), (R::Polychromasia, 5.0),
        ],
        wbc: &[(W::Hypersegmented, 35.0)],
    },
    ClinicalPreset {
        name: "Sickle Cell",
        description: "Sickle cell disease - functional asplenia",
        category: RedCell,
        rbc_per_ul: 3_200_000.0, mcv: 95.0, rdw: 20.0, nrbc_per_100_rbc: 5.0,
        plt_per_ul: 350_000.0, wbc_per_ul: 12_000.0,
        differential: diff(65.0, 25.0, 7.0, 2.0, 1.0),
        rbc: &[
            (R::TargetCell, 15.0), (R::SickleCell, 25.0), (R::HowellJolly, 10.0),
            (R::Polychromasia, 20.0),
        ],
        wbc: &[(W::BandNeutrophil, 5.0)],
    },
    ClinicalPreset {
        name: "Spherocytosis",
        description: "Hereditary spherocytosis - chronic hemolysis",
        category: RedCell,
        rbc_per_ul: 3_500_000.0, mcv: 82.0, rdw: 17.0, nrbc_per_100_rbc: 0.0,
        plt_per_ul: 280_000.0, wbc_per_ul: 8_000.0,
        differential: NORMAL_DIFF,
        rbc: &[(R::Spherocyte, 35.0), (R::Polychromasia, 20.0)],
        wbc: &[],
    },
    ClinicalPreset {
        name: "G6PD Crisis",
        description: "Oxidative hemolysis - bite cells, Heinz bodies",
        category: RedCell,
        rbc_per_ul: 2_500_000.0, mcv: 100.0, rdw: 22.0, nrbc_per_100_rbc: 5.0,
        plt_per_ul: 280_000.0, wbc_per_ul: 12_000.0,
        differential: diff(70.0, 20.0, 7.0, 2.0, 1.0),
        rbc: &[
            (R::Spherocyte, 5.0), (R::Schistocyte, 5.0), (R::BiteCell, 30.0),
            (R::Polychromasia, 20.0),
        ],
        wbc: &[(W::BandNeutrophil, 5.0)],
    },
    ClinicalPreset {
        name: "MAHA/TTP",
        description: "Microangiopathic hemolytic anemia - schistocytes",
        category: RedCell,
        rbc_per_ul: 2_800_000.0, mcv: 95.0, rdw: 22.0, nrbc_per_100_rbc: 3.0,
        plt_per_ul: 25_000.0, wbc_per_ul: 9_000.0,
        differential: diff(70.0, 20.0, 7.0, 2.0, 1.0),
        rbc: &[(R::Spherocyte, 5.0), (R::Schistocyte, 30.0), (R::Polychromasia, 20.0)],
        wbc: &[(W::BandNeutrophil, 5.0)],
    },
    ClinicalPreset {
        name: "Lead Poisoning",
        description: "Basophilic stippling - impaired heme synthesis",
        category: RedCell,
        rbc_per_ul: 3_800_000.0, mcv: 78.0, rdw: 16.0, nrbc_per_100_rbc: 0.0,
        plt_per_ul: 250_000.0, wbc_per_ul: 7_000.0,
        differential: NORMAL_DIFF,
        rbc: &[(R::BasophilicStippling, 40.0), (R::Polychromasia, 10.0)],
        wbc: &[],
    },
    ClinicalPreset {
        name: "Polycythemia",
        description: "Elevated RBC count - erythrocytosis",
        category: RedCell,
        rbc_per_ul: 7_000_000.0, mcv: 88.0, rdw: 13.0, nrbc_per_100_rbc: 0.0,
        plt_per_ul: 280_000.0, wbc_per_ul: 9_000.0,
        differential: diff(62.0, 28.0, 6.0, 3.0, 1.0),
        rbc: &[],
        wbc: &[],
    },
    ClinicalPreset {
        name: "AIHA (Warm)",
        description: "Warm autoimmune hemolytic anemia - DAT positive",
        category: RedCell,
        rbc_per_ul: 3_000_000.0, mcv: 105.0, rdw: 20.0, nrbc_per_100_rbc: 3.0,
        plt_per_ul: 200_000.0, wbc_per_ul: 10_000.0,
        differential: diff(60.0, 30.0, 6.0, 3.0, 1.0),
        rbc: &[(R::Spherocyte, 25.0), (R::Polychromasia, 25.0)],
        wbc: &[],
    },
    ClinicalPreset {
        name: "Elliptocytosis",
        description: "Hereditary elliptocytosis - membrane defect",
        category: RedCell,
        rbc_per_ul: 4_200_000.0, mcv: 88.0, rdw: 15.0, nrbc_per_100_rbc: 0.0,
        plt_per_ul: 250_000.0, wbc_per_ul: 7_500.0,
        differential: NORMAL_DIFF,
        rbc: &[(R::Elliptocyte, 40.0), (R::Stomatocyte, 5.0), (R::Polychromasia, 5.0)],
        wbc: &[],
    },
    ClinicalPreset {
        name: "Uremia",
        description: "Renal failure - burr cells (echinocytes)",
        category: RedCell,
        rbc_per_ul: 3_200_000.0, mcv: 90.0, rdw: 15.0, nrbc_per_100_rbc: 0.0,
        plt_per_ul: 180_000.0, wbc_per_ul: 7_000.0,
        differential: diff(65.0, 25.0, 6.0, 3.0, 1.0),
        rbc: &[(R::BurrCell, 35.0), (R::Acanthocyte, 5.0)],
        wbc: &[],
    },
    ClinicalPreset {
        name: "Post-splenectomy",
        description: "Asplenia - Howell-Jolly bodies, targets",
        category: RedCell,
        rbc_per_ul: 5_200_000.0, mcv: 90.0, rdw: 14.0, nrbc_per_100_rbc: 0.0,
        plt_per_ul: 450_000.0, wbc_per_ul: 12_000.0,
        differential: diff(55.0, 35.0, 6.0, 3.0, 1.0),
        rbc: &[
            (R::TargetCell, 15.0), (R::Acanthocyte, 5.0), (R::HowellJolly, 20.0),
            (R::BasophilicStippling, 5.0), (R::Pappenheimer, 5.0),
        ],
        wbc: &[],
    },
    // White cell disorders
    ClinicalPreset {
        name: "Leukocytosis",
        description: "Elevated WBC - bacterial infection pattern",
        category: WhiteCell,
        rbc_per_ul: 4_800_000.0, mcv: 90.0, rdw: 13.0, nrbc_per_100_rbc: 0.0,
        plt_per_ul: 280_000.0, wbc_per_ul: 22_000.0,
        differential: diff(78.0, 15.0, 5.0, 1.0, 1.0),
        rbc: &[],
        wbc: &[(W::BandNeutrophil, 15.0), (W::ToxicGranulation, 10.0)],
    },
    ClinicalPreset {
        name: "Lymphocytosis",
        description: "Viral infection - lymphocyte predominant",
        category: WhiteCell,
        rbc_per_ul: 4_800_000.0, mcv: 90.0, rdw: 13.0, nrbc_per_100_rbc: 0.0,
        plt_per_ul: 200_000.0, wbc_per_ul: 15_000.0,
        differential: diff(25.0, 70.0, 3.0, 1.0, 1.0),
        rbc: &[],
        wbc: &[(W::AtypicalLymph, 15.0)],
    },
    ClinicalPreset {
        name: "Eosinophilia",
        description: "Allergic or parasitic - elevated eosinophils",
        category: WhiteCell,
        rbc_per_ul: 4_800_000.0, mcv: 90.0, rdw: 13.0, nrbc_per_100_rbc: 0.0,
        plt_per_ul: 250_000.0, wbc_per_ul: 12_000.0,
        differential: diff(45.0, 25.0, 3.0, 25.0, 2.0),
        rbc: &[],
        wbc: &[],
    },
    ClinicalPreset {
        name: "Sepsis",
        description: "Bacterial sepsis - toxic changes, left shift",
        category: WhiteCell,
        rbc_per_ul: 4_000_000.0, mcv: 88.0, rdw: 15.0, nrbc_per_100_rbc: 2.0,
        plt_per_ul: 90_000.0, wbc_per_ul: 28_000.0,
        differential: diff(85.0, 8.0, 5.0, 1.0, 1.0),
        rbc: &[(R::Schistocyte, 8.0), (R::BurrCell, 5.0)],
        wbc: &[
            (W::BandNeutrophil, 30.0), (W::ToxicGranulation, 45.0), (W::DohleBodies, 25.0),
        ],
    },
    ClinicalPreset {
        name: "Viral (Mono)",
        description: "Infectious mononucleosis - atypical lymphocytosis",
        category: WhiteCell,
        rbc_per_ul: 4_800_000.0, mcv: 90.0, rdw: 13.0, nrbc_per_100_rbc: 0.0,
        plt_per_ul: 150_000.0, wbc_per_ul: 15_000.0,
        differential: diff(25.0, 65.0, 8.0, 1.0, 1.0),
        rbc: &[],
        wbc: &[(W::AtypicalLymph, 45.0)],
    },
    ClinicalPreset {
        name: "CLL",
        description: "Chronic lymphocytic leukemia - smudge cells",
        category: WhiteCell,
        rbc_per_ul: 4_200_000.0, mcv: 92.0, rdw: 14.0, nrbc_per_100_rbc: 0.0,
        plt_per_ul: 120_000.0, wbc_per_ul: 85_000.0,
        differential: diff(15.0, 80.0, 3.0, 1.0, 1.0),
        rbc: &[],
        wbc: &[(W::AtypicalLymph, 10.0), (W::SmudgeCell, 40.0)],
    },
    ClinicalPreset {
        name: "AML",
        description: "Acute myeloid leukemia - blasts, Auer rods",
        category: WhiteCell,
        rbc_per_ul: 2_800_000.0, mcv: 95.0, rdw: 16.0, nrbc_per_100_rbc: 3.0,
        plt_per_ul: 35_000.0, wbc_per_ul: 45_000.0,
        differential: diff(20.0, 15.0, 5.0, 0.0, 0.0),
        rbc: &[(R::Polychromasia, 5.0)],
        wbc: &[(W::Blast, 55.0), (W::AuerRod, 20.0)],
    },
    ClinicalPreset {
        name: "APL",
        description: "Acute promyelocytic leukemia - t(15;17), DIC",
        category: WhiteCell,
        rbc_per_ul: 3_000_000.0, mcv: 92.0, rdw: 15.0, nrbc_per_100_rbc: 2.0,
        plt_per_ul: 20_000.0, wbc_per_ul: 12_000.0,
        differential: diff(15.0, 20.0, 5.0, 0.0, 0.0),
        rbc: &[(R::Schistocyte, 18.0), (R::BurrCell, 5.0), (R::Polychromasia, 12.0)],
        wbc: &[(W::Blast, 30.0), (W::AuerRod, 45.0)],
    },
    ClinicalPreset {
        name: "ALL",
        description: "Acute lymphoblastic leukemia - lymphoid blasts",
        category: WhiteCell,
        rbc_per_ul: 3_000_000.0, mcv: 92.0, rdw: 15.0, nrbc_per_100_rbc: 2.0,
        plt_per_ul: 30_000.0, wbc_per_ul: 35_000.0,
        differential: diff(15.0, 25.0, 3.0, 0.0, 0.0),
        rbc: &[(R::Polychromasia, 5.0)],
        wbc: &[(W::Blast, 55.0)],
    },
    ClinicalPreset {
        name: "CML",
        description: "Chronic myeloid leukemia - Ph+, full myeloid spectrum",
        category: WhiteCell,
        rbc_per_ul: 3_800_000.0, mcv: 90.0, rdw: 14.0, nrbc_per_100_rbc: 2.0,
        plt_per_ul: 450_000.0, wbc_per_ul: 150_000.0,
        differential: diff(55.0, 10.0, 5.0, 8.0, 12.0),
        rbc: &[(R::Teardrop, 5.0), (R::BasophilicStippling, 5.0), (R::Polychromasia, 5.0)],
        wbc: &[(W::BandNeutrophil, 20.0), (W::Blast, 5.0)],
    },
    ClinicalPreset {
        name: "Chemo Neutropenia",
        description: "Post-chemotherapy - severe neutropenia",
        category: WhiteCell,
        rbc_per_ul: 3_200_000.0, mcv: 98.0, rdw: 15.0, nrbc_per_100_rbc: 0.0,
        plt_per_ul: 65_000.0, wbc_per_ul: 1_800.0,
        differential: diff(25.0, 65.0, 8.0, 1.0, 1.0),
        rbc: &[(R::Polychromasia, 5.0)],
        wbc: &[(W::Hypersegmented, 5.0)],
    },
    // Platelet disorders
    ClinicalPreset {
        name: "Thrombocytosis",
        description: "Reactive thrombocytosis - post-surgery/inflammation",
        category: Platelet,
        rbc_per_ul: 4_800_000.0, mcv: 90.0, rdw: 13.0, nrbc_per_100_rbc: 0.0,
        plt_per_ul: 550_000.0, wbc_per_ul: 10_000.0,
        differential: diff(65.0, 25.0, 6.0, 3.0, 1.0),
        rbc: &[],
        wbc: &[(W::BandNeutrophil, 5.0)],
    },
    ClinicalPreset {
        name: "ITP",
        description: "Immune thrombocytopenia - large platelets",
        category: Platelet,
        rbc_per_ul: 4_800_000.0, mcv: 90.0, rdw: 13.0, nrbc_per_100_rbc: 0.0,
        plt_per_ul: 15_000.0, wbc_per_ul: 7_500.0,
        differential: NORMAL_DIFF,
        rbc: &[],
        wbc: &[],
    },
    // Multi-lineage disorders
    ClinicalPreset {
        name: "Myelofibrosis",
        description: "Primary myelofibrosis - leukoerythroblastic picture",
        category: MultiLineage,
        rbc_per_ul: 3_000_000.0, mcv: 95.0, rdw: 22.0, nrbc_per_100_rbc: 15.0,
        plt_per_ul: 450_000.0, wbc_per_ul: 25_000.0,
        differential: diff(70.0, 15.0, 8.0, 4.0, 3.0),
        rbc: &[
            (R::TargetCell, 5.0), (R::Schistocyte, 5.0), (R::Teardrop, 35.0),
            (R::Elliptocyte, 10.0), (R::BasophilicStippling, 5.0), (R::Polychromasia, 15.0),
        ],
        wbc: &[(W::BandNeutrophil, 15.0), (W::Blast, 8.0)],
    },
    ClinicalPreset {
        name: "ET/PV",
        description: "MPN - thrombocytosis/erythrocytosis",
        category: MultiLineage,
        rbc_per_ul: 6_500_000.0, mcv: 85.0, rdw: 14.0, nrbc_per_100_rbc: 0.0,
        plt_per_ul: 650_000.0, wbc_per_ul: 15_000.0,
        differential: diff(70.0, 20.0, 5.0, 3.0, 2.0),
        rbc: &[(R::Teardrop, 5.0), (R::BasophilicStippling, 5.0), (R::Polychromasia, 5.0)],
        wbc: &[(W::BandNeutrophil, 5.0)],
    },
    ClinicalPreset {
        name: "Liver Disease",
        description: "Cirrhosis - target cells, acanthocytes",
        category: MultiLineage,
        rbc_per_ul: 3_500_000.0, mcv: 100.0, rdw: 16.0, nrbc_per_100_rbc: 0.0,
        plt_per_ul: 80_000.0, wbc_per_ul: 4_500.0,
        differential: diff(55.0, 35.0, 6.0, 3.0, 1.0),
        rbc: &[(R::TargetCell, 25.0), (R::Acanthocyte, 15.0), (R::Stomatocyte, 10.0)],
        wbc: &[],
    },
    ClinicalPreset {
        name: "Multiple Myeloma",
        description: "Plasma cell neoplasm - rouleaux, anemia",
        category: MultiLineage,
        rbc_per_ul: 3_200_000.0, mcv: 95.0, rdw: 15.0, nrbc_per_100_rbc: 0.0,
        plt_per_ul: 180_000.0, wbc_per_ul: 5_500.0,
        differential: diff(50.0, 40.0, 6.0, 3.0, 1.0),
        rbc: &[(R::Rouleaux, 45.0)],
        wbc: &[],
    },
    ClinicalPreset {
        name: "DIC",
        description: "Disseminated intravascular coagulation",
        category: MultiLineage,
        rbc_per_ul: 3_500_000.0, mcv: 92.0, rdw: 18.0, nrbc_per_100_rbc: 3.0,
        plt_per_ul: 45_000.0, wbc_per_ul: 18_000.0,
        differential: diff(80.0, 12.0, 5.0, 2.0, 1.0),
        rbc: &[(R::Schistocyte, 25.0), (R::BurrCell, 8.0), (R::Polychromasia, 12.0)],
        wbc: &[
            (W::BandNeutrophil, 20.0), (W::ToxicGranulation, 25.0), (W::DohleBodies, 15.0),
        ],
    },
    ClinicalPreset {
        name: "Pancytopenia",
        description: "Bone marrow failure - all lines low",
        category: MultiLineage,
        rbc_per_ul: 2_800_000.0, mcv: 100.0, rdw: 16.0, nrbc_per_100_rbc: 0.0,
        plt_per_ul: 40_000.0, wbc_per_ul: 2_500.0,
        differential: diff(35.0, 55.0, 8.0, 1.0, 1.0),
        rbc: &[(R::Polychromasia, 5.0)],
        wbc: &[],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clinical::params::{MCV_RANGE, PLT_RANGE, RBC_RANGE, RDW_RANGE, WBC_RANGE};

    const NAMES: [&str; 34] = [
        "Normal", "IDA", "Thal Minor", "ACD", "B12/Folate", "Sickle Cell", "Spherocytosis",
        "G6PD Crisis", "MAHA/TTP", "Lead Poisoning", "Polycythemia", "AIHA (Warm)",
        "Elliptocytosis", "Uremia", "Post-splenectomy", "Leukocytosis", "Lymphocytosis",
        "Eosinophilia", "Sepsis", "Viral (Mono)", "CLL", "AML", "APL", "ALL", "CML",
        "Chemo Neutropenia", "Thrombocytosis", "ITP", "Myelofibrosis", "ET/PV", "Liver Disease",
        "Multiple Myeloma", "DIC", "Pancytopenia",
    ];

    #[test]
    fn catalogue_is_complete_and_unique() {
        let names: Vec<&str> = presets().iter().map(|p| p.name).collect();
        assert_eq!(names, NAMES);
        for name in NAMES {
            assert_eq!(find_preset(name).unwrap().name, name);
        }
    }

    #[test]
    fn presets_sit_inside_slider_domains() {
        for p in presets() {
            let params = p.to_parameters();
            assert_eq!(params, params.clamped(), "{} leaves a slider domain", p.name);
            assert!(RBC_RANGE.0 <= p.rbc_per_ul && p.rbc_per_ul <= RBC_RANGE.1);
            assert!(MCV_RANGE.0 <= p.mcv && p.mcv <= MCV_RANGE.1);
            assert!(RDW_RANGE.0 <= p.rdw && p.rdw <= RDW_RANGE.1);
            assert!(WBC_RANGE.0 <= p.wbc_per_ul && p.wbc_per_ul <= WBC_RANGE.1);
            assert!(PLT_RANGE.0 <= p.plt_per_ul && p.plt_per_ul <= PLT_RANGE.1);
        }
    }

    #[test]
    fn apply_resets_unlisted_morphology() {
        let mut params = find_preset("Sepsis").unwrap().to_parameters();
        assert_eq!(params.wbc_morphology.toxic_granulation, 45.0);
        find_preset("ALL").unwrap().apply_to(&mut params);
        assert_eq!(params.wbc_morphology.toxic_granulation, 0.0);
        assert_eq!(params.wbc_morphology.blast, 55.0);
        assert_eq!(params.rbc_morphology.schistocyte, 0.0);
    }

    #[test]
    fn apply_keeps_density() {
        use crate::density::{Density, DensityPreset};
        let mut params = ClinicalParameters::background(DensityPreset::Ultra);
        find_preset("IDA").unwrap().apply_to(&mut params);
        assert_eq!(params.density, Density::Preset(DensityPreset::Ultra));
        assert_eq!(params.mcv, 70.0);
    }

    #[test]
    fn unknown_name_is_an_error() {
        assert_eq!(
            find_preset("Scurvy").unwrap_err(),
            SmearError::UnknownPreset("Scurvy".into())
        );
    }
}
