// cells/ - Cell population generator
//
// Turns clinical parameters into a flat list of renderable cells.
// Pure apart from the random source: nothing is kept between calls and
// every call builds the whole population from scratch.
//
// Order of the output: red cells, nucleated red cells, platelets,
// white cells by lineage, then the blast pools.

mod encode;
mod kind;
mod platelet;
mod red;
mod white;

pub use encode::{Encoder, STRIDE, kind_tag};
pub use kind::{CellClass, CellKind};

use serde::Serialize;

use crate::clinical::ClinicalParameters;
use crate::clinical::NORMAL_RBC_PER_UL;
use crate::rng::RandomSource;

/// Base red cell diameter in pixels at MCV 90
pub const BASE_SIZE: f32 = 13.0;

/// Nothing is drawn smaller than this
pub const MIN_SIZE: f32 = 2.0;

// Red cell count before density scaling: BASE + [0, SPREAD)
const RBC_BASE_COUNT: f32 = 500.0;
const RBC_COUNT_SPREAD: f32 = 100.0;

// Animation delays are negative so cells start mid-drift
const DELAY_SPAN: f32 = 30.0;

/// One renderable cell
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Cell {
    pub id: u32,
    #[serde(rename = "type")]
    pub kind: CellKind,
    /// Position in percent of the view, [0, 100)
    pub x: f32,
    pub y: f32,
    /// Diameter in pixels
    pub size: f32,
    pub duration: f32,
    pub delay: f32,
    pub opacity: f32,
    pub z_index: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack_size: Option<u8>,
}

/// Opacity and drift timing ranges for a class of cell: base + [0, span)
#[derive(Debug, Clone, Copy)]
pub(crate) struct Look {
    pub opacity: (f32, f32),
    pub duration: (f32, f32),
}

// z layers
pub(crate) const Z_PLATELET: u8 = 0;
pub(crate) const Z_BASE: u8 = 1;
pub(crate) const Z_RAISED: u8 = 2;

/// Append a cell with random position and timing
pub(crate) fn spawn<'a, R: RandomSource + ?Sized>(
    cells: &'a mut Vec<Cell>,
    rng: &mut R,
    kind: CellKind,
    size: f32,
    look: &Look,
    z_index: u8,
) -> &'a mut Cell {
    let id = cells.len() as u32;
    let x = rng.next_f32() * 100.0;
    let y = rng.next_f32() * 100.0;
    let duration = rng.range(look.duration.0, look.duration.0 + look.duration.1);
    let delay = -rng.next_f32() * DELAY_SPAN;
    let opacity = rng.range(look.opacity.0, look.opacity.0 + look.opacity.1);

    cells.push(Cell {
        id,
        kind,
        x,
        y,
        size: size.max(MIN_SIZE),
        duration,
        delay,
        opacity,
        z_index,
        rotation: None,
        stack_size: None,
    });
    let last = cells.len() - 1;
    &mut cells[last]
}

/// Walk shares in order with one draw in [0, 100).
/// The first entry whose running total exceeds the draw wins; None if the
/// draw is past the sum. Shares are not renormalized.
pub fn pick_cumulative<T: Copy>(draw: f32, shares: &[(T, f32)]) -> Option<T> {
    let mut running = 0.0;
    for &(item, pct) in shares {
        running += pct;
        if running > draw {
            return Some(item);
        }
    }
    None
}

/// How many cells of each class a population holds
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Census {
    pub red: usize,
    pub nucleated: usize,
    pub platelets: usize,
    pub white: usize,
}

impl Census {
    pub fn of(cells: &[Cell]) -> Self {
        let mut c = Self::default();
        for cell in cells {
            match cell.kind.class() {
                CellClass::Red => c.red += 1,
                CellClass::Nucleated => c.nucleated += 1,
                CellClass::Platelet => c.platelets += 1,
                CellClass::White => c.white += 1,
            }
        }
        c
    }

    pub fn total(&self) -> usize {
        self.red + self.nucleated + self.platelets + self.white
    }
}

/// Output of one generation
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Population {
    /// Red cell count the other counts are derived from
    pub num_rbc: usize,
    /// White cell target before lineage rounding and blast pools
    pub total_wbc: usize,
    pub census: Census,
    pub cells: Vec<Cell>,
}

impl Population {
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn count(&self, kind: CellKind) -> usize {
        self.cells.iter().filter(|c| c.kind == kind).count()
    }
}

/// Red cell count for these parameters at the given density scale
pub fn red_cell_count<R: RandomSource + ?Sized>(scale: f32, rbc_per_ul: f32, rng: &mut R) -> usize {
    let base = RBC_BASE_COUNT + rng.next_f32() * RBC_COUNT_SPREAD;
    (base * scale * (rbc_per_ul / NORMAL_RBC_PER_UL)).floor() as usize
}

/// Build a population. `params.density` picks the cell count scale.
pub fn generate<R: RandomSource + ?Sized>(params: &ClinicalParameters, rng: &mut R) -> Population {
    let scale = params.density.scale();
    let num_rbc = red_cell_count(scale, params.rbc_per_ul, rng);

    let mut cells = Vec::with_capacity(estimate_capacity(num_rbc, params));

    red::spawn_red_cells(&mut cells, num_rbc, params, rng);
    red::spawn_nucleated(&mut cells, num_rbc, params, rng);
    platelet::spawn_platelets(&mut cells, num_rbc, params.plt_per_ul, rng);
    let total_wbc = white::spawn_white_cells(&mut cells, num_rbc, params, rng);

    let census = Census::of(&cells);
    log::debug!(
        "generated {} cells (rbc {}, nrbc {}, plt {}, wbc {}) at scale {}",
        cells.len(),
        census.red,
        census.nucleated,
        census.platelets,
        census.white,
        scale
    );

    Population { num_rbc, total_wbc, census, cells }
}

fn estimate_capacity(num_rbc: usize, params: &ClinicalParameters) -> usize {
    let rbc = num_rbc as f32;
    let extra = rbc * (params.nrbc_per_100_rbc / 100.0)
        + rbc * (params.plt_per_ul / NORMAL_RBC_PER_UL)
        + rbc * (params.wbc_per_ul / NORMAL_RBC_PER_UL) * 2.0;
    num_rbc + extra.max(0.0) as usize + 2
}
