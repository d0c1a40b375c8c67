// smear-sample - Generate one blood smear population natively
//
// Pipeline:
//   1. Load parameters (file, then preset on top)
//   2. Pick density (preset label or raw scale)
//   3. Generate with a seeded xorshift source
//   4. Print census and indices, optionally export JSON
//
// Usage: cargo run --bin smear-sample -- [--preset NAME] [--params FILE]
//        [--density LABEL] [--scale X] [--seed N] [--json OUT] [--list]

mod export;

use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

use smear_engine::clinical::{self, Lineage, presets};
use smear_engine::{CellKind, ClinicalParameters, Density, DensityPreset, Xorshift, generate};

struct Args {
    preset: Option<String>,
    params: Option<PathBuf>,
    density: Option<DensityPreset>,
    scale: Option<f32>,
    seed: Option<u32>,
    json: Option<PathBuf>,
    list: bool,
}

fn value(args: &[String], i: usize) -> Result<&str> {
    args.get(i + 1)
        .map(String::as_str)
        .with_context(|| format!("{} needs a value", args[i]))
}

fn parse_args() -> Result<Args> {
    let args: Vec<String> = env::args().collect();
    let mut out = Args { preset: None, params: None, density: None, scale: None, seed: None, json: None, list: false };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--preset" => { out.preset = Some(value(&args, i)?.to_string()); i += 2; }
            "--params" => { out.params = Some(PathBuf::from(value(&args, i)?)); i += 2; }
            "--density" => { out.density = Some(value(&args, i)?.parse()?); i += 2; }
            "--scale" => { out.scale = Some(value(&args, i)?.parse().context("--scale expects a number")?); i += 2; }
            "--seed" => { out.seed = Some(value(&args, i)?.parse().context("--seed expects an integer")?); i += 2; }
            "--json" => { out.json = Some(PathBuf::from(value(&args, i)?)); i += 2; }
            "--list" => { out.list = true; i += 1; }
            other => bail!("unknown argument {}", other),
        }
    }
    Ok(out)
}

/// Read a parameter file, falling back to normal blood
fn load_or_default(path: &Path) -> ClinicalParameters {
    match std::fs::read_to_string(path) {
        Ok(contents) => match serde_json::from_str(&contents) {
            Ok(params) => {
                log::info!("Loaded clinical parameters from {:?}", path);
                params
            }
            Err(e) => {
                log::warn!("Failed to parse clinical parameters: {}, using defaults", e);
                ClinicalParameters::default()
            }
        },
        Err(e) => {
            log::warn!("Could not read {:?} ({}), using defaults", path, e);
            ClinicalParameters::default()
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = parse_args()?;

    if args.list {
        for p in presets() {
            println!("{:<20} {:?}  {}", p.name, p.category, p.description);
        }
        return Ok(());
    }

    let mut params = match &args.params {
        Some(path) => load_or_default(path),
        None => ClinicalParameters::default(),
    };
    if let Some(name) = &args.preset {
        clinical::find_preset(name)?.apply_to(&mut params);
    }
    params = params.clamped();

    params.density = match (args.density, args.scale) {
        (Some(d), _) => Density::Preset(d),
        (None, Some(s)) => Density::Scale(s),
        (None, None) => params.density,
    };

    let seed = args.seed.unwrap_or_else(|| Xorshift::from_entropy().state());
    let mut rng = Xorshift::new(seed);

    println!(
        "Generating {} at density {:?} (seed {})...",
        args.preset.as_deref().unwrap_or("custom"),
        params.density,
        seed
    );
    let pop = generate(&params, &mut rng);

    let c = pop.census;
    println!("  cells      {}", pop.len());
    println!("  red        {} (of {} drawn)", c.red, pop.num_rbc);
    println!("  nucleated  {}", c.nucleated);
    println!("  platelets  {}", c.platelets);
    println!("  white      {} (target {})", c.white, pop.total_wbc);
    for l in Lineage::ALL {
        println!(
            "    {:<11} {:>3}%  {:>6}/uL",
            l.key(),
            params.wbc_differential.normalized_percent(l),
            params.wbc_differential.absolute_count(l, params.wbc_per_ul)
        );
    }
    for kind in [CellKind::Blast, CellKind::BlastAuerRod] {
        let n = pop.count(kind);
        if n > 0 {
            println!("    {:<11} {}", kind.tag(), n);
        }
    }

    let hgb = clinical::hemoglobin(&params);
    println!("  Hgb        {:.1} g/dL ({})", hgb, clinical::hemoglobin_status(hgb).label);
    println!("  Hct        {:.1} %", clinical::hematocrit(&params));
    println!("  MCV        {} fL ({})", params.mcv, clinical::mcv_status(params.mcv).label);
    println!("  RDW        {} % ({})", params.rdw, clinical::rdw_status(params.rdw).label);

    if let Some(path) = &args.json {
        let doc = export::PopulationExport::new(args.preset.as_deref(), seed, &params, &pop);
        export::write_json(path, &doc)?;
        println!("Wrote {}", path.display());
    }

    println!("Done!");
    Ok(())
}
