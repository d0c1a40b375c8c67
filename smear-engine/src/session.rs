// session.rs - One viewer's state
//
// Owns everything a mounted viewer needs: the frame loop, performance
// monitor, density selector, device profile, random source and the encoded
// population. Nothing here is global; two viewers never share state.
//
// Data flow per frame: monitor -> selector -> generator -> encoder. The
// population is rebuilt only when its inputs change.

use crate::cells::{self, Encoder, Population};
use crate::clinical::{ClinicalParameters, find_preset};
use crate::density::{Density, DensityPreset};
use crate::device::DeviceProfile;
use crate::error::Result;
use crate::perf::{
    DensitySelector, FrameLoop, FrameScheduler, LevelChange, PerformanceLevel, PerformanceMonitor,
    SlideZone, ZoneTracker,
};
use crate::rng::Xorshift;

pub struct SmearSession<S: FrameScheduler> {
    frames: FrameLoop<S>,
    monitor: PerformanceMonitor,
    selector: DensitySelector,
    zone: ZoneTracker,
    device: DeviceProfile,
    params: ClinicalParameters,
    rng: Xorshift,
    population: Population,
    encoder: Encoder,
    generated: Option<Density>,
    dirty: bool,
}

impl<S: FrameScheduler> SmearSession<S> {
    pub fn new(scheduler: S, device: DeviceProfile, rng: Xorshift, now_ms: f64) -> Self {
        let selector = DensitySelector::new(device.is_mobile());
        Self {
            frames: FrameLoop::new(scheduler),
            monitor: PerformanceMonitor::new(now_ms),
            selector,
            zone: ZoneTracker::new(),
            device,
            params: ClinicalParameters::default(),
            rng,
            population: Population::default(),
            encoder: Encoder::new(),
            generated: None,
            dirty: true,
        }
    }

    // -- frame loop --

    pub fn start(&mut self) -> Result<()> {
        self.frames.start()
    }

    pub fn stop(&mut self) {
        self.frames.stop();
    }

    pub fn is_running(&self) -> bool {
        self.frames.is_running()
    }

    /// One display refresh. Returns true when the population was rebuilt.
    pub fn frame(&mut self, now_ms: f64) -> Result<bool> {
        self.zone.tick(now_ms);
        if let Some(change) = self.monitor.record_frame(now_ms) {
            self.on_level_change(change);
        }
        let rebuilt = self.refresh();
        self.frames.rearm()?;
        Ok(rebuilt)
    }

    fn on_level_change(&mut self, change: LevelChange) {
        // A manual pick keeps its density; sampling carries on regardless
        if self.selector.manual().is_some() {
            return;
        }
        let next = self.selector.resolve(change.to);
        if self.generated != Some(next) {
            log::debug!("density {:?} -> {:?}", self.generated, next);
            self.dirty = true;
        }
    }

    // -- inputs --

    pub fn params(&self) -> &ClinicalParameters {
        &self.params
    }

    /// Values are clamped to their slider domains. `density` on the
    /// parameters is ignored; the selector decides it.
    pub fn update_params(&mut self, f: impl FnOnce(&mut ClinicalParameters)) {
        f(&mut self.params);
        self.params = self.params.clamped();
        self.dirty = true;
    }

    pub fn apply_preset(&mut self, name: &str) -> Result<()> {
        let preset = find_preset(name)?;
        preset.apply_to(&mut self.params);
        log::info!("preset {}", preset.name);
        self.dirty = true;
        Ok(())
    }

    pub fn set_manual_density(&mut self, preset: Option<DensityPreset>) {
        self.selector.set_manual(preset);
        self.mark_if_density_changed();
    }

    pub fn set_scale_override(&mut self, scale: Option<f32>) {
        self.selector.set_scale_override(scale);
        self.mark_if_density_changed();
    }

    pub fn set_shadows(&mut self, enabled: Option<bool>) {
        self.selector.set_shadows(enabled);
    }

    pub fn set_viewport_width(&mut self, width: u32) {
        self.device.viewport_width = Some(width);
        self.selector.set_mobile(self.device.is_mobile());
        self.mark_if_density_changed();
    }

    /// Move along the slide; a zone change rebuilds the population
    pub fn move_slide(&mut self, y: f32, now_ms: f64) -> bool {
        let changed = self.zone.move_to(y, self.monitor.level(), now_ms);
        if changed {
            self.dirty = true;
        }
        changed
    }

    fn mark_if_density_changed(&mut self) {
        if self.generated != Some(self.density()) {
            self.dirty = true;
        }
    }

    // -- generation --

    /// Rebuild if anything changed since the last build
    pub fn refresh(&mut self) -> bool {
        if !self.dirty {
            return false;
        }
        self.regenerate();
        true
    }

    pub fn regenerate(&mut self) {
        let density = self.density();
        let mut params = self.params.clone();
        params.density = density;
        self.population = cells::generate(&params, &mut self.rng);
        self.encoder.encode(&self.population);
        self.generated = Some(density);
        self.dirty = false;
        log::debug!("regenerated {} cells at {:?}", self.population.len(), density);
    }

    pub fn needs_refresh(&self) -> bool {
        self.dirty
    }

    // -- outputs --

    pub fn population(&self) -> &Population {
        &self.population
    }

    pub fn encoder(&self) -> &Encoder {
        &self.encoder
    }

    pub fn device(&self) -> &DeviceProfile {
        &self.device
    }

    pub fn level(&self) -> PerformanceLevel {
        self.monitor.level()
    }

    pub fn fps(&self) -> u32 {
        self.monitor.fps()
    }

    pub fn density(&self) -> Density {
        self.selector.resolve(self.monitor.level())
    }

    pub fn effective_density(&self) -> DensityPreset {
        self.selector.effective(self.monitor.level())
    }

    pub fn shadows_enabled(&self) -> bool {
        self.selector.shadows_enabled(self.monitor.level())
    }

    pub fn zone(&self) -> SlideZone {
        self.zone.zone()
    }

    pub fn previous_zone(&self) -> Option<SlideZone> {
        self.zone.previous()
    }
}
