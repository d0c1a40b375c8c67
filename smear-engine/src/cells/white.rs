// white.rs - White cells
//
// Lineage counts come from the normalized differential. Morphology variants
// are drawn per lineage with the same cumulative walk the red cells use.
// Blasts are extra pools on top of the lineage totals.

use super::{BASE_SIZE, Cell, CellKind, Look, Z_BASE, pick_cumulative, spawn};
use crate::clinical::{ClinicalParameters, Lineage, NORMAL_RBC_PER_UL, WbcMorphologies};
use crate::rng::{RandomSource, wide_jitter};

const DURATION: (f32, f32) = (25.0, 35.0);
const OPACITY_SPAN: f32 = 0.15;

/// Diameter as base × (factor + wide jitter × spread)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeRule {
    pub factor: f32,
    pub spread: f32,
}

impl SizeRule {
    const fn new(factor: f32, spread: f32) -> Self {
        Self { factor, spread }
    }

    pub fn sample<R: RandomSource + ?Sized>(self, rng: &mut R) -> f32 {
        BASE_SIZE * (self.factor + wide_jitter(rng) * self.spread)
    }
}

const HYPERSEGMENTED: SizeRule = SizeRule::new(1.8, 0.4);
const ATYPICAL_LYMPH: SizeRule = SizeRule::new(1.5, 0.5);
const SMUDGE_FACTOR: f32 = 1.3;
const BLAST: SizeRule = SizeRule::new(1.8, 0.4);

pub fn lineage_size(l: Lineage) -> SizeRule {
    match l {
        Lineage::Neutrophil => SizeRule::new(1.55, 0.5),
        Lineage::Lymphocyte => SizeRule::new(0.9, 0.7),
        Lineage::Monocyte => SizeRule::new(2.0, 0.6),
        Lineage::Eosinophil => SizeRule::new(1.6, 0.6),
        Lineage::Basophil => SizeRule::new(1.4, 0.5),
    }
}

fn lineage_opacity(l: Lineage) -> f32 {
    match l {
        Lineage::Neutrophil | Lineage::Monocyte => 0.27,
        Lineage::Lymphocyte => 0.30,
        Lineage::Eosinophil | Lineage::Basophil => 0.33,
    }
}

fn look(opacity: f32) -> Look {
    Look { opacity: (opacity, OPACITY_SPAN), duration: DURATION }
}

/// Total white cells before lineage rounding; at least one
pub fn white_cell_total(num_rbc: usize, wbc_per_ul: f32) -> usize {
    let ratio = wbc_per_ul / NORMAL_RBC_PER_UL;
    ((num_rbc as f32 * ratio).round() as usize).max(1)
}

/// Extra blast cells for a morphology share of the white cell total
pub fn blast_pool(total: usize, percent: f32) -> usize {
    (total as f32 * percent / 100.0).round().max(0.0) as usize
}

/// Pick a variant and size for one neutrophil
fn neutrophil<R: RandomSource + ?Sized>(m: &WbcMorphologies, rng: &mut R) -> (CellKind, f32) {
    let shares = [
        (CellKind::BandNeutrophil, m.band_neutrophil),
        (CellKind::Hypersegmented, m.hypersegmented),
        (CellKind::ToxicGranulation, m.toxic_granulation),
        (CellKind::DohleBodies, m.dohle_bodies),
    ];
    let draw = rng.next_f32() * 100.0;
    match pick_cumulative(draw, &shares) {
        Some(CellKind::Hypersegmented) => (CellKind::Hypersegmented, HYPERSEGMENTED.sample(rng)),
        Some(kind) => (kind, lineage_size(Lineage::Neutrophil).sample(rng)),
        None => {
            let size = lineage_size(Lineage::Neutrophil).sample(rng);
            let kind = if rng.chance(0.5) { CellKind::Neutrophil } else { CellKind::Neutrophil3Lobe };
            (kind, size)
        }
    }
}

fn lymphocyte<R: RandomSource + ?Sized>(m: &WbcMorphologies, rng: &mut R) -> (CellKind, f32) {
    let shares = [(CellKind::AtypicalLymph, m.atypical_lymph), (CellKind::SmudgeCell, m.smudge_cell)];
    let draw = rng.next_f32() * 100.0;
    match pick_cumulative(draw, &shares) {
        Some(CellKind::AtypicalLymph) => (CellKind::AtypicalLymph, ATYPICAL_LYMPH.sample(rng)),
        Some(kind) => (kind, BASE_SIZE * SMUDGE_FACTOR),
        None => (CellKind::Lymphocyte, lineage_size(Lineage::Lymphocyte).sample(rng)),
    }
}

fn variant<R: RandomSource + ?Sized>(l: Lineage, m: &WbcMorphologies, rng: &mut R) -> (CellKind, f32) {
    match l {
        Lineage::Neutrophil => neutrophil(m, rng),
        Lineage::Lymphocyte => lymphocyte(m, rng),
        Lineage::Monocyte => (CellKind::Monocyte, lineage_size(l).sample(rng)),
        Lineage::Eosinophil => {
            let size = lineage_size(l).sample(rng);
            let kind = if rng.chance(0.5) { CellKind::Eosinophil } else { CellKind::Eosinophil3Lobe };
            (kind, size)
        }
        Lineage::Basophil => (CellKind::Basophil, lineage_size(l).sample(rng)),
    }
}

/// Append white cells; returns the pre-rounding total
pub(super) fn spawn_white_cells<R: RandomSource + ?Sized>(
    cells: &mut Vec<Cell>,
    num_rbc: usize,
    params: &ClinicalParameters,
    rng: &mut R,
) -> usize {
    let total = white_cell_total(num_rbc, params.wbc_per_ul);
    let diff = &params.wbc_differential;
    let morph = &params.wbc_morphology;

    for lineage in Lineage::ALL {
        let count = (total as f32 * diff.share(lineage)).round() as usize;
        let look = look(lineage_opacity(lineage));
        for _ in 0..count {
            let (kind, size) = variant(lineage, morph, rng);
            spawn(cells, rng, kind, size, &look, Z_BASE);
        }
    }

    // Blasts are added on top; they never take from the lineages above
    let blast_look = look(lineage_opacity(Lineage::Lymphocyte));
    for (kind, percent) in [(CellKind::Blast, morph.blast), (CellKind::BlastAuerRod, morph.auer_rod)] {
        for _ in 0..blast_pool(total, percent) {
            let size = BLAST.sample(rng);
            spawn(cells, rng, kind, size, &blast_look, Z_BASE);
        }
    }

    total
}
