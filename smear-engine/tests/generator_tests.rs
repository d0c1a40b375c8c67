//! Statistical properties of the cell population generator.
//!
//! Every test runs over several seeds; tolerances are wide enough that a
//! correct generator passes for any seed in the list.

use smear_engine::cells::{CellClass, MIN_SIZE};
use smear_engine::clinical::{Lineage, RbcMorphology, WbcDifferential, find_preset, presets};
use smear_engine::{CellKind, ClinicalParameters, Density, DensityPreset, Xorshift, generate};

const SEEDS: [u32; 8] = [1, 2, 3, 5, 8, 13, 21, 34];

fn params_at(density: DensityPreset) -> ClinicalParameters {
    ClinicalParameters::background(density)
}

fn mean(xs: &[f32]) -> f32 {
    xs.iter().sum::<f32>() / xs.len() as f32
}

fn coefficient_of_variation(xs: &[f32]) -> f32 {
    let m = mean(xs);
    let var = xs.iter().map(|x| (x - m) * (x - m)).sum::<f32>() / xs.len() as f32;
    var.sqrt() / m
}

// ============================================================================
// Termination and bounds
// ============================================================================

#[test]
fn test_every_preset_generates_valid_cells() {
    for preset in presets() {
        for density in DensityPreset::ALL {
            let mut params = preset.to_parameters();
            params.density = Density::Preset(density);
            let pop = generate(&params, &mut Xorshift::new(7));

            assert_eq!(pop.census.total(), pop.len(), "{}: census mismatch", preset.name);
            for (i, c) in pop.cells.iter().enumerate() {
                assert_eq!(c.id as usize, i);
                assert!(c.size.is_finite() && c.size >= MIN_SIZE, "{}: size {}", preset.name, c.size);
                assert!((0.0..100.0).contains(&c.x) && (0.0..100.0).contains(&c.y));
                assert!(c.opacity > 0.0 && c.opacity <= 1.0);
                assert!(c.duration > 0.0 && c.delay <= 0.0);
                assert!(c.z_index <= 2);
            }
        }
    }
}

#[test]
fn test_zero_scale_still_draws_one_platelet_and_white_cell() {
    let mut params = ClinicalParameters::default();
    params.density = Density::Scale(0.0);
    let pop = generate(&params, &mut Xorshift::new(1));
    assert_eq!(pop.num_rbc, 0);
    assert_eq!(pop.census.platelets, 1);
    assert_eq!(pop.total_wbc, 1);
}

#[test]
fn test_platelets_and_white_cells_never_zero() {
    let mut params = params_at(DensityPreset::Medium);
    params.rbc_per_ul = 2_000_000.0;
    params.plt_per_ul = 10_000.0;
    params.wbc_per_ul = 1_000.0;
    for seed in SEEDS {
        let pop = generate(&params, &mut Xorshift::new(seed));
        assert!(pop.num_rbc > 0);
        assert!(pop.census.platelets >= 1, "seed {}: no platelets", seed);
        assert!(pop.total_wbc >= 1, "seed {}: no white cells", seed);
    }
}

// ============================================================================
// Red cells
// ============================================================================

#[test]
fn test_red_cell_count_scales_with_rbc_parameter() {
    let count = |rbc: f32| -> f32 {
        let mut params = params_at(DensityPreset::Full);
        params.rbc_per_ul = rbc;
        let n: Vec<f32> = SEEDS
            .iter()
            .map(|&s| generate(&params, &mut Xorshift::new(s)).num_rbc as f32)
            .collect();
        mean(&n)
    };
    let low = count(2_000_000.0);
    let high = count(6_000_000.0);
    let ratio = high / low;
    assert!((ratio - 3.0).abs() < 0.1, "expected ~3x red cells, got {:.3}x", ratio);
}

#[test]
fn test_normal_rdw_clusters_tighter_than_high_rdw() {
    let sizes = |rdw: f32| -> Vec<f32> {
        let mut params = params_at(DensityPreset::Max);
        params.rdw = rdw;
        SEEDS
            .iter()
            .flat_map(|&s| generate(&params, &mut Xorshift::new(s)).cells)
            .filter(|c| c.kind == CellKind::Rbc)
            .map(|c| c.size)
            .collect()
    };
    let normal = sizes(13.0);
    let wide = sizes(25.0);

    assert!((mean(&normal) - 13.0).abs() < 0.1, "mean size {}", mean(&normal));
    let cv_normal = coefficient_of_variation(&normal);
    let cv_wide = coefficient_of_variation(&wide);
    assert!(
        cv_normal * 2.0 < cv_wide,
        "cv at RDW 13 ({:.3}) should be well below cv at RDW 25 ({:.3})",
        cv_normal,
        cv_wide
    );
}

#[test]
fn test_morphology_shares_over_one_hundred_favour_early_keys() {
    let mut params = params_at(DensityPreset::Max);
    params.rbc_morphology.set(RbcMorphology::Spherocyte, 80.0);
    params.rbc_morphology.set(RbcMorphology::TargetCell, 80.0);
    let pop = generate(&params, &mut Xorshift::new(3));

    let red = pop.census.red as f32;
    let sphero = pop.count(CellKind::Spherocyte) as f32 / red;
    let target = pop.count(CellKind::TargetCell) as f32 / red;
    assert_eq!(pop.count(CellKind::Rbc), 0);
    assert!((sphero - 0.8).abs() < 0.04, "spherocyte share {}", sphero);
    assert!((target - 0.2).abs() < 0.04, "target share {}", target);
}

#[test]
fn test_nan_shares_are_clamped_before_generation() {
    let mut params = params_at(DensityPreset::Full);
    params.rbc_morphology.set(RbcMorphology::Spherocyte, f32::NAN);
    params.rbc_morphology.set(RbcMorphology::TargetCell, 100.0);
    params.wbc_differential.neutrophil = f32::NAN;
    let params = params.clamped();

    for seed in SEEDS {
        let pop = generate(&params, &mut Xorshift::new(seed));
        assert_eq!(pop.count(CellKind::TargetCell), pop.census.red, "seed {}", seed);
        assert_eq!(pop.count(CellKind::Spherocyte), 0);
        assert!(pop.census.white > 0, "seed {}: NaN differential dropped every white cell", seed);
        assert_eq!(lineage_count(&pop.cells, Lineage::Neutrophil), 0);
    }
}

#[test]
fn test_nucleated_red_cells_follow_per_hundred_rate() {
    let mut params = params_at(DensityPreset::Full);
    params.nrbc_per_100_rbc = 20.0;
    for seed in SEEDS {
        let pop = generate(&params, &mut Xorshift::new(seed));
        let expected = (pop.num_rbc as f32 * 0.2).round() as usize;
        assert_eq!(pop.census.nucleated, expected);
        assert!(
            pop.cells
                .iter()
                .filter(|c| c.kind.class() == CellClass::Nucleated)
                .all(|c| c.z_index == 2)
        );
    }
}

// ============================================================================
// White cells
// ============================================================================

fn lineage_count(cells: &[smear_engine::Cell], l: Lineage) -> usize {
    let kinds: &[CellKind] = match l {
        Lineage::Neutrophil => &[
            CellKind::Neutrophil,
            CellKind::Neutrophil3Lobe,
            CellKind::BandNeutrophil,
            CellKind::Hypersegmented,
            CellKind::ToxicGranulation,
            CellKind::DohleBodies,
        ],
        Lineage::Lymphocyte => &[CellKind::Lymphocyte, CellKind::AtypicalLymph, CellKind::SmudgeCell],
        Lineage::Monocyte => &[CellKind::Monocyte],
        Lineage::Eosinophil => &[CellKind::Eosinophil, CellKind::Eosinophil3Lobe],
        Lineage::Basophil => &[CellKind::Basophil],
    };
    cells.iter().filter(|c| kinds.contains(&c.kind)).count()
}

#[test]
fn test_differential_is_normalized_by_its_sum() {
    let mut params = params_at(DensityPreset::Max);
    params.wbc_per_ul = 200_000.0;
    params.wbc_differential = WbcDifferential::new(40.0, 40.0, 40.0, 40.0, 40.0);
    for seed in SEEDS {
        let pop = generate(&params, &mut Xorshift::new(seed));
        let expected = (pop.total_wbc as f32 * 0.2).round() as usize;
        assert!(expected > 0);
        for l in Lineage::ALL {
            assert_eq!(lineage_count(&pop.cells, l), expected, "seed {} {:?}", seed, l);
        }
        assert_eq!(pop.census.white, expected * 5);
    }
}

#[test]
fn test_blast_pools_add_to_lineage_totals() {
    let mut params = find_preset("AML").expect("AML preset").to_parameters();
    params.density = Density::Preset(DensityPreset::Max);
    let pop = generate(&params, &mut Xorshift::new(11));

    let total = pop.total_wbc as f32;
    let blasts = pop.count(CellKind::Blast);
    let auer = pop.count(CellKind::BlastAuerRod);
    assert_eq!(blasts, (total * params.wbc_morphology.blast / 100.0).round() as usize);
    assert_eq!(auer, (total * params.wbc_morphology.auer_rod / 100.0).round() as usize);

    let lineage_sum: usize = Lineage::ALL.iter().map(|&l| lineage_count(&pop.cells, l)).sum();
    assert_eq!(pop.census.white, lineage_sum + blasts + auer);
    let expected_neut = (total * params.wbc_differential.share(Lineage::Neutrophil)).round() as usize;
    assert_eq!(lineage_count(&pop.cells, Lineage::Neutrophil), expected_neut);
}

#[test]
fn test_same_seed_same_population() {
    let params = find_preset("Sickle Cell").expect("preset").to_parameters();
    let a = generate(&params, &mut Xorshift::new(99));
    let b = generate(&params, &mut Xorshift::new(99));
    assert_eq!(a.cells, b.cells);
}
