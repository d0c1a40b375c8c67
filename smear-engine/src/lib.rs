use js_sys::Function;
use wasm_bindgen::prelude::*;

// ============================================================================
// SMEAR ENGINE - Procedural blood smear with adaptive density
// ============================================================================

pub mod cells;
pub mod clinical;
pub mod density;
pub mod device;
pub mod error;
pub mod perf;
pub mod rng;
pub mod session;

pub use cells::{Cell, CellKind, Population, generate};
pub use clinical::ClinicalParameters;
pub use density::{Density, DensityPreset};
pub use error::{Result, SmearError};
pub use perf::PerformanceLevel;
pub use rng::{RandomSource, Xorshift};
pub use session::SmearSession;

use clinical::{Lineage, RbcMorphology, Status, WbcMorphology};
use perf::AnimationFrames;

#[wasm_bindgen]
pub struct SmearViewer {
    session: SmearSession<AnimationFrames>,
}

#[wasm_bindgen]
impl SmearViewer {
    /// `on_frame` is handed to requestAnimationFrame; it should call
    /// `frame(now)` and re-read the output buffer when that returns true.
    #[wasm_bindgen(constructor)]
    pub fn new(on_frame: Function, now_ms: f64) -> Self {
        let device = device::probe();
        Self {
            session: SmearSession::new(AnimationFrames::new(on_frame), device, Xorshift::from_entropy(), now_ms),
        }
    }

    pub fn start(&mut self) -> std::result::Result<(), JsError> {
        Ok(self.session.start()?)
    }

    pub fn stop(&mut self) {
        self.session.stop();
    }

    pub fn frame(&mut self, now_ms: f64) -> std::result::Result<bool, JsError> {
        Ok(self.session.frame(now_ms)?)
    }

    pub fn regenerate(&mut self) {
        self.session.regenerate();
    }

    // -- clinical inputs, clamped to slider domains --

    pub fn set_rbc_per_ul(&mut self, v: f32) {
        self.session.update_params(|p| p.rbc_per_ul = v);
    }

    pub fn set_mcv(&mut self, v: f32) {
        self.session.update_params(|p| p.mcv = v);
    }

    pub fn set_rdw(&mut self, v: f32) {
        self.session.update_params(|p| p.rdw = v);
    }

    pub fn set_nrbc_per_100_rbc(&mut self, v: f32) {
        self.session.update_params(|p| p.nrbc_per_100_rbc = v);
    }

    pub fn set_wbc_per_ul(&mut self, v: f32) {
        self.session.update_params(|p| p.wbc_per_ul = v);
    }

    pub fn set_plt_per_ul(&mut self, v: f32) {
        self.session.update_params(|p| p.plt_per_ul = v);
    }

    pub fn set_differential(&mut self, lineage: &str, percent: f32) -> std::result::Result<(), JsError> {
        let l: Lineage = lineage.parse()?;
        self.session.update_params(|p| p.wbc_differential.set(l, percent));
        Ok(())
    }

    pub fn set_rbc_morphology(&mut self, key: &str, percent: f32) -> std::result::Result<(), JsError> {
        let m: RbcMorphology = key.parse()?;
        self.session.update_params(|p| p.rbc_morphology.set(m, percent));
        Ok(())
    }

    pub fn set_wbc_morphology(&mut self, key: &str, percent: f32) -> std::result::Result<(), JsError> {
        let m: WbcMorphology = key.parse()?;
        self.session.update_params(|p| p.wbc_morphology.set(m, percent));
        Ok(())
    }

    pub fn apply_preset(&mut self, name: &str) -> std::result::Result<(), JsError> {
        Ok(self.session.apply_preset(name)?)
    }

    pub fn preset_names() -> js_sys::Array {
        clinical::presets().iter().map(|p| JsValue::from_str(p.name)).collect()
    }

    pub fn preset_description(name: &str) -> std::result::Result<String, JsError> {
        Ok(clinical::find_preset(name)?.description.to_string())
    }

    // -- density and display --

    /// `None` or "auto" hands density back to the performance monitor
    pub fn set_density(&mut self, label: Option<String>) -> std::result::Result<(), JsError> {
        let preset = match label.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(s) if s.eq_ignore_ascii_case("auto") => None,
            Some(s) => Some(s.parse::<DensityPreset>()?),
        };
        self.session.set_manual_density(preset);
        Ok(())
    }

    pub fn set_scale_override(&mut self, scale: Option<f32>) {
        self.session.set_scale_override(scale);
    }

    pub fn set_shadows(&mut self, enabled: Option<bool>) {
        self.session.set_shadows(enabled);
    }

    pub fn shadows_enabled(&self) -> bool {
        self.session.shadows_enabled()
    }

    pub fn set_viewport_width(&mut self, width: u32) {
        self.session.set_viewport_width(width);
    }

    /// `y` from 0 (body) to 1 (feathered edge)
    pub fn move_slide(&mut self, y: f32, now_ms: f64) -> bool {
        self.session.move_slide(y, now_ms)
    }

    pub fn zone_label(&self) -> String {
        self.session.zone().label().to_string()
    }

    pub fn edge_proximity(&self) -> f32 {
        self.session.zone().edge_proximity()
    }

    pub fn previous_edge_proximity(&self) -> Option<f32> {
        self.session.previous_zone().map(|z| z.edge_proximity())
    }

    pub fn effective_density(&self) -> String {
        self.session.effective_density().as_str().to_string()
    }

    pub fn density_label(&self) -> String {
        self.session.effective_density().label().to_string()
    }

    pub fn cell_count_estimate(&self) -> String {
        self.session.effective_density().cell_count_estimate().to_string()
    }

    pub fn fps(&self) -> u32 {
        self.session.fps()
    }

    pub fn fps_color(&self) -> String {
        perf::fps_color(self.session.fps()).to_string()
    }

    pub fn level(&self) -> String {
        self.session.level().as_str().to_string()
    }

    pub fn level_label(&self) -> String {
        self.session.level().label().to_string()
    }

    // -- output buffer --

    pub fn output_ptr(&self) -> *const f32 { self.session.encoder().ptr() }
    pub fn output_len(&self) -> usize { self.session.encoder().len() }
    pub fn cell_count(&self) -> usize { self.session.encoder().cell_count() }
    pub fn stride() -> usize { cells::STRIDE }

    pub fn kind_tag(code: u8) -> String {
        cells::kind_tag(code).to_string()
    }

    // -- device --

    pub fn is_mobile(&self) -> bool {
        self.session.device().is_mobile()
    }

    pub fn cores(&self) -> Option<u32> {
        self.session.device().cores
    }

    pub fn memory_gb(&self) -> Option<f64> {
        self.session.device().memory_gb
    }

    pub fn gpu(&self) -> Option<String> {
        self.session.device().gpu.clone()
    }

    // -- derived indices --

    pub fn hemoglobin(&self) -> f32 {
        clinical::hemoglobin(self.session.params())
    }

    pub fn hematocrit(&self) -> f32 {
        clinical::hematocrit(self.session.params())
    }

    pub fn normalized_percent(&self, lineage: &str) -> std::result::Result<u32, JsError> {
        let l: Lineage = lineage.parse()?;
        Ok(self.session.params().wbc_differential.normalized_percent(l))
    }

    pub fn absolute_count(&self, lineage: &str) -> std::result::Result<u32, JsError> {
        let l: Lineage = lineage.parse()?;
        let p = self.session.params();
        Ok(p.wbc_differential.absolute_count(l, p.wbc_per_ul))
    }

    /// One of rbc, hgb, mcv, rdw, nrbc, wbc, plt
    pub fn status_label(&self, metric: &str) -> std::result::Result<String, JsError> {
        Ok(self.status(metric)?.label.to_string())
    }

    pub fn status_color(&self, metric: &str) -> std::result::Result<String, JsError> {
        Ok(self.status(metric)?.color.to_string())
    }
}

impl SmearViewer {
    fn status(&self, metric: &str) -> Result<Status> {
        let p = self.session.params();
        let s = match metric {
            "rbc" => clinical::rbc_status(p.rbc_per_ul),
            "hgb" => clinical::hemoglobin_status(clinical::hemoglobin(p)),
            "mcv" => clinical::mcv_status(p.mcv),
            "rdw" => clinical::rdw_status(p.rdw),
            "nrbc" => clinical::nrbc_status(p.nrbc_per_100_rbc),
            "wbc" => clinical::wbc_status(p.wbc_per_ul),
            "plt" => clinical::platelet_status(p.plt_per_ul),
            other => return Err(SmearError::UnknownMetric(other.to_string())),
        };
        Ok(s)
    }
}
