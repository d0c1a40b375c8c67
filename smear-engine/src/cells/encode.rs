// encode.rs - Pack a population into a flat buffer for the page
//
// Output encoding, STRIDE floats per cell:
//   0 x         percent
//   1 y         percent
//   2 size      px
//   3 opacity
//   4 duration  s
//   5 delay     s, negative
//   6 z-index
//   7 kind      CellKind code, see `kind_tag`
//   8 rotation  degrees, 0 when absent
//   9 stack     rouleaux stack size, 0 when absent

use super::{Cell, CellKind, Population};

pub const STRIDE: usize = 10;

pub struct Encoder {
    out: Vec<f32>,
}

impl Encoder {
    pub fn new() -> Self {
        Self { out: Vec::new() }
    }

    pub fn clear(&mut self) {
        self.out.clear();
    }

    pub fn ptr(&self) -> *const f32 {
        self.out.as_ptr()
    }

    /// Length in floats
    pub fn len(&self) -> usize {
        self.out.len()
    }

    pub fn is_empty(&self) -> bool {
        self.out.is_empty()
    }

    pub fn cell_count(&self) -> usize {
        self.out.len() / STRIDE
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.out
    }

    /// Replace the buffer contents with this population
    pub fn encode(&mut self, pop: &Population) {
        self.out.clear();
        self.out.reserve(pop.cells.len() * STRIDE);
        for cell in &pop.cells {
            self.put(cell);
        }
    }

    #[inline]
    fn put(&mut self, c: &Cell) {
        self.out.extend_from_slice(&[
            c.x,
            c.y,
            c.size,
            c.opacity,
            c.duration,
            c.delay,
            c.z_index as f32,
            c.kind.code() as f32,
            c.rotation.unwrap_or(0.0),
            c.stack_size.map_or(0.0, f32::from),
        ]);
    }
}

impl Default for Encoder {
    fn default() -> Self {
        Self::new()
    }
}

/// Render tag for an encoded kind code; empty when out of range
pub fn kind_tag(code: u8) -> &'static str {
    CellKind::from_code(code).map_or("", CellKind::tag)
}
