// indices.rs - Derived red cell indices and status labels
//
// Status thresholds are the usual adult reference ranges; colors are the
// display hints the settings panel uses next to each value.

use super::ClinicalParameters;

/// Typical mean corpuscular hemoglobin concentration, g/dL
pub const MCHC: f32 = 33.0;

const GREEN: &str = "#10b981";
const AMBER: &str = "#f59e0b";
const ORANGE: &str = "#f97316";
const RED: &str = "#ef4444";
const DEEP_RED: &str = "#dc2626";
const VIOLET: &str = "#8b5cf6";
const BLUE: &str = "#3b82f6";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Status {
    pub label: &'static str,
    pub color: &'static str,
}

const fn status(label: &'static str, color: &'static str) -> Status {
    Status { label, color }
}

/// Hemoglobin in g/dL, rounded to one decimal
pub fn hemoglobin(p: &ClinicalParameters) -> f32 {
    round1(MCHC * (p.rbc_per_ul / 1_000_000.0) * p.mcv / 1000.0)
}

/// Hematocrit in percent, rounded to one decimal
pub fn hematocrit(p: &ClinicalParameters) -> f32 {
    round1((p.rbc_per_ul / 1_000_000.0) * p.mcv / 10.0)
}

pub fn rbc_status(rbc_per_ul: f32) -> Status {
    let millions = rbc_per_ul / 1_000_000.0;
    if millions < 4.0 {
        status("Low (Anemia)", RED)
    } else if millions <= 5.5 {
        status("Normal", GREEN)
    } else {
        status("Elevated (Polycythemia)", AMBER)
    }
}

pub fn hemoglobin_status(hgb: f32) -> Status {
    match hgb {
        h if h < 7.0 => status("Severe Anemia", DEEP_RED),
        h if h < 10.0 => status("Moderate Anemia", RED),
        h if h < 12.0 => status("Mild Anemia", AMBER),
        h if h <= 17.0 => status("Normal", GREEN),
        _ => status("Elevated", VIOLET),
    }
}

pub fn mcv_status(mcv: f32) -> Status {
    if mcv < 80.0 {
        status("Microcytic", AMBER)
    } else if mcv <= 100.0 {
        status("Normocytic", GREEN)
    } else {
        status("Macrocytic", VIOLET)
    }
}

pub fn rdw_status(rdw: f32) -> Status {
    if rdw <= 14.5 {
        status("Normal", GREEN)
    } else if rdw <= 18.0 {
        status("Elevated", AMBER)
    } else {
        status("High (Anisocytosis)", RED)
    }
}

pub fn nrbc_status(per_100_rbc: f32) -> Status {
    match per_100_rbc {
        n if n <= 0.0 => status("None", GREEN),
        n if n <= 5.0 => status("Present", AMBER),
        n if n <= 15.0 => status("Elevated", ORANGE),
        _ => status("Markedly Elevated", RED),
    }
}

pub fn wbc_status(wbc_per_ul: f32) -> Status {
    match wbc_per_ul {
        w if w < 4_000.0 => status("Leukopenia", BLUE),
        w if w <= 11_000.0 => status("Normal", GREEN),
        w if w <= 20_000.0 => status("Mild Leukocytosis", AMBER),
        w if w <= 50_000.0 => status("Leukocytosis", ORANGE),
        w if w <= 100_000.0 => status("Marked Leukocytosis", RED),
        _ => status("Leukemia Range", DEEP_RED),
    }
}

pub fn platelet_status(plt_per_ul: f32) -> Status {
    let k = plt_per_ul / 1000.0;
    match k {
        k if k < 50.0 => status("Severe Thrombocytopenia", DEEP_RED),
        k if k < 100.0 => status("Moderate Thrombocytopenia", RED),
        k if k < 150.0 => status("Mild Thrombocytopenia", AMBER),
        k if k <= 400.0 => status("Normal", GREEN),
        k if k <= 600.0 => status("Thrombocytosis", AMBER),
        _ => status("Marked Thrombocytosis", RED),
    }
}

#[inline]
fn round1(v: f32) -> f32 {
    (v * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clinical::find_preset;

    #[test]
    fn normal_indices() {
        let p = ClinicalParameters::default();
        assert_eq!(hemoglobin(&p), 14.9);
        assert_eq!(hematocrit(&p), 45.0);
        assert_eq!(hemoglobin_status(hemoglobin(&p)).label, "Normal");
    }

    #[test]
    fn iron_deficiency_reads_as_anemic_and_microcytic() {
        let p = find_preset("IDA").unwrap().to_parameters();
        // 33 * 3.8 * 70 / 1000 = 8.778
        assert_eq!(hemoglobin(&p), 8.8);
        assert_eq!(hemoglobin_status(hemoglobin(&p)).label, "Moderate Anemia");
        assert_eq!(mcv_status(p.mcv).label, "Microcytic");
        assert_eq!(rdw_status(p.rdw).label, "High (Anisocytosis)");
        assert_eq!(rbc_status(p.rbc_per_ul).label, "Low (Anemia)");
    }

    #[test]
    fn threshold_edges() {
        assert_eq!(rdw_status(14.5).label, "Normal");
        assert_eq!(mcv_status(100.0).label, "Normocytic");
        assert_eq!(nrbc_status(0.0).label, "None");
        assert_eq!(nrbc_status(5.0).label, "Present");
        assert_eq!(wbc_status(11_000.0).label, "Normal");
        assert_eq!(wbc_status(150_000.0).label, "Leukemia Range");
        assert_eq!(platelet_status(150_000.0).label, "Normal");
        assert_eq!(platelet_status(149_000.0).label, "Mild Thrombocytopenia");
        assert_eq!(platelet_status(800_000.0).color, RED);
    }
}
