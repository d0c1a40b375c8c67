// platelet.rs - Platelets
//
// Platelets are sized from the fixed base diameter, not the MCV baseline,
// and always sit on the bottom layer.

use super::{BASE_SIZE, Cell, CellKind, Look, Z_PLATELET, spawn};
use crate::clinical::NORMAL_RBC_PER_UL;
use crate::rng::{RandomSource, wide_jitter};

const PLATELET_LOOK: Look = Look { opacity: (0.25, 0.15), duration: (45.0, 30.0) };

const SIZE_FACTOR: f32 = 0.25;
const SIZE_SPREAD: f32 = 0.15;

/// At least one platelet is drawn however low the count
pub fn platelet_count(num_rbc: usize, plt_per_ul: f32) -> usize {
    let ratio = plt_per_ul / NORMAL_RBC_PER_UL;
    ((num_rbc as f32 * ratio).round() as usize).max(1)
}

pub(super) fn spawn_platelets<R: RandomSource + ?Sized>(
    cells: &mut Vec<Cell>,
    num_rbc: usize,
    plt_per_ul: f32,
    rng: &mut R,
) {
    for _ in 0..platelet_count(num_rbc, plt_per_ul) {
        let size = SIZE_FACTOR * BASE_SIZE + wide_jitter(rng) * SIZE_SPREAD * BASE_SIZE;
        spawn(cells, rng, CellKind::Platelet, size, &PLATELET_LOOK, Z_PLATELET);
    }
}
