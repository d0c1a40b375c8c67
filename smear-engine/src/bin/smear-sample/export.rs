// export.rs - JSON export of a generated population

use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use smear_engine::cells::Census;
use smear_engine::{Cell, ClinicalParameters, Density, Population};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PopulationExport<'a> {
    pub version: &'static str,
    pub preset: Option<&'a str>,
    pub seed: u32,
    pub density: Density,
    pub hemoglobin: f32,
    pub hematocrit: f32,
    pub num_rbc: usize,
    pub total_wbc: usize,
    pub census: Census,
    pub parameters: &'a ClinicalParameters,
    pub cells: &'a [Cell],
}

impl<'a> PopulationExport<'a> {
    pub fn new(preset: Option<&'a str>, seed: u32, params: &'a ClinicalParameters, pop: &'a Population) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION"),
            preset,
            seed,
            density: params.density,
            hemoglobin: smear_engine::clinical::hemoglobin(params),
            hematocrit: smear_engine::clinical::hematocrit(params),
            num_rbc: pop.num_rbc,
            total_wbc: pop.total_wbc,
            census: pop.census,
            parameters: params,
            cells: &pop.cells,
        }
    }
}

pub fn write_json(path: &Path, export: &PopulationExport<'_>) -> Result<()> {
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    serde_json::to_writer_pretty(file, export).context("writing population json")?;
    log::info!("population exported: {}", path.display());
    Ok(())
}
