// clinical/ - Clinical inputs
//
// Blood count parameters, morphology shares, teaching presets and the
// derived indices shown next to the sliders.

mod indices;
mod morphology;
mod params;
mod presets;

pub use indices::*;
pub use morphology::{RbcMorphologies, RbcMorphology, WbcMorphologies, WbcMorphology};
pub use params::*;
pub use presets::{ClinicalPreset, PresetCategory, find_preset, presets};
