// red.rs - Red cells and nucleated red cells
//
// Size follows MCV; spread follows RDW. Above RDW 15 the spread switches
// from the tight jitter to a doubled wide jitter (anisocytosis).

use super::{BASE_SIZE, Cell, CellKind, Look, Z_BASE, Z_RAISED, pick_cumulative, spawn};
use crate::clinical::{ClinicalParameters, NORMAL_MCV, NORMAL_RDW, RbcMorphology};
use crate::rng::{RandomSource, tight_jitter, wide_jitter};

const RED_LOOK: Look = Look { opacity: (0.15, 0.10), duration: (35.0, 25.0) };
const NRBC_LOOK: Look = Look { opacity: (0.30, 0.15), duration: (35.0, 25.0) };

/// Size spread in pixels at normal RDW
const BASE_VARIANCE: f32 = 2.0;
/// RDW above this uses the wide jitter
const ANISOCYTOSIS_RDW: f32 = 15.0;
const WIDE_JITTER_GAIN: f32 = 2.0;

/// Chance a plain red cell is drawn over its neighbours
const RAISED_CHANCE: f32 = 0.15;

const ROULEAUX_STACK_MIN: u8 = 3;
const ROULEAUX_STACK_MAX: u8 = 8;

// nRBC maturity split: ortho 60%, poly 25%, baso 15%
const ORTHO_CUTOFF: f32 = 0.60;
const POLY_CUTOFF: f32 = 0.85;

/// Red cell diameter for this MCV
#[inline]
pub fn red_baseline(mcv: f32) -> f32 {
    BASE_SIZE * (mcv / NORMAL_MCV)
}

/// Size of a morphology variant relative to the baseline
pub fn morphology_scale(m: RbcMorphology) -> f32 {
    match m {
        RbcMorphology::Spherocyte => 0.8,
        RbcMorphology::TargetCell => 1.05,
        RbcMorphology::Schistocyte => 0.8,
        RbcMorphology::SickleCell => 1.0,
        RbcMorphology::Teardrop => 0.9,
        RbcMorphology::Elliptocyte => 1.1,
        RbcMorphology::BiteCell => 0.95,
        RbcMorphology::BurrCell => 1.0,
        RbcMorphology::Acanthocyte => 0.95,
        RbcMorphology::Stomatocyte => 0.95,
        RbcMorphology::Rouleaux => 0.9,
        RbcMorphology::HowellJolly => 1.0,
        RbcMorphology::BasophilicStippling => 1.0,
        RbcMorphology::Pappenheimer => 1.0,
        RbcMorphology::Polychromasia => 1.15,
    }
}

/// Diameter of a plain red cell
pub fn normal_red_size<R: RandomSource + ?Sized>(baseline: f32, rdw: f32, rng: &mut R) -> f32 {
    let variance = BASE_VARIANCE * (rdw / NORMAL_RDW);
    let jitter = if rdw <= ANISOCYTOSIS_RDW {
        tight_jitter(rng)
    } else {
        wide_jitter(rng) * WIDE_JITTER_GAIN
    };
    baseline + jitter * variance
}

pub(super) fn spawn_red_cells<R: RandomSource + ?Sized>(
    cells: &mut Vec<Cell>,
    count: usize,
    params: &ClinicalParameters,
    rng: &mut R,
) {
    let baseline = red_baseline(params.mcv);
    let shares = params.rbc_morphology.ordered();

    for _ in 0..count {
        let draw = rng.next_f32() * 100.0;
        let morph = pick_cumulative(draw, &shares);

        let (kind, size) = match morph {
            Some(m) => (CellKind::from(m), baseline * morphology_scale(m)),
            None => (CellKind::Rbc, normal_red_size(baseline, params.rdw, rng)),
        };
        let z = if rng.chance(RAISED_CHANCE) { Z_RAISED } else { Z_BASE };

        let cell = spawn(cells, rng, kind, size, &RED_LOOK, z);

        if kind == CellKind::Rouleaux {
            let span = (ROULEAUX_STACK_MAX - ROULEAUX_STACK_MIN + 1) as f32;
            let stack = ROULEAUX_STACK_MIN + (rng.next_f32() * span) as u8;
            cell.rotation = Some(rng.next_f32() * 360.0);
            cell.stack_size = Some(stack.min(ROULEAUX_STACK_MAX));
        }
    }
}

pub(super) fn spawn_nucleated<R: RandomSource + ?Sized>(
    cells: &mut Vec<Cell>,
    num_rbc: usize,
    params: &ClinicalParameters,
    rng: &mut R,
) {
    let count = (num_rbc as f32 * params.nrbc_per_100_rbc / 100.0).round() as usize;
    let baseline = red_baseline(params.mcv);

    for _ in 0..count {
        let size = baseline * (1.1 + wide_jitter(rng) * 0.2);
        let stage = rng.next_f32();
        let kind = if stage < ORTHO_CUTOFF {
            CellKind::NrbcOrtho
        } else if stage < POLY_CUTOFF {
            CellKind::NrbcPoly
        } else {
            CellKind::NrbcBaso
        };
        spawn(cells, rng, kind, size, &NRBC_LOOK, Z_RAISED);
    }
}
