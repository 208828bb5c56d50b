// File: ./src/harmony.rs
//! Harmony classification and palette quality scoring.
//!
//! Both work on arbitrary colors, including ones this crate did not
//! synthesize. Malformed colors are read as black and still classified.

use crate::color_utils::{Hsl, hex_to_hsl};
use crate::model::{HarmonyQuality, HarmonyReport, Palette, QualityIssue, QualityReport};

/// Angular distance between two hues, in `[0, 180]`.
pub fn hue_distance(a: f64, b: f64) -> f64 {
    let d = (a - b).abs() % 360.0;
    if d > 180.0 { 360.0 - d } else { d }
}

fn pairwise_distances(colors: &[Hsl]) -> Vec<f64> {
    let mut out = Vec::with_capacity(3);
    for (i, a) in colors.iter().enumerate() {
        for b in &colors[i + 1..] {
            out.push(hue_distance(a.h, b.h));
        }
    }
    out
}

fn count_where(distances: &[f64], pred: impl Fn(f64) -> bool) -> usize {
    distances.iter().filter(|d| pred(**d)).count()
}

fn spread(values: impl Iterator<Item = f64> + Clone) -> f64 {
    let max = values.clone().fold(f64::MIN, f64::max);
    let min = values.fold(f64::MAX, f64::min);
    max - min
}

/// Classify the harmony of a palette. Rules are checked in priority order
/// and the first match wins; anything left over is "Personalizzato".
pub fn analyze_harmony(primary: &str, secondary: Option<&str>, accent: &str) -> HarmonyReport {
    let mut colors = vec![hex_to_hsl(primary)];
    if let Some(s) = secondary {
        colors.push(hex_to_hsl(s));
    }
    colors.push(hex_to_hsl(accent));

    let distances = pairwise_distances(&colors);

    if distances.iter().all(|d| *d < 30.0) {
        let sat_range = spread(colors.iter().map(|c| c.s));
        let light_range = spread(colors.iter().map(|c| c.l));
        if sat_range > 20.0 && light_range > 30.0 {
            return HarmonyReport::new(
                "Monocromatico Avanzato",
                HarmonyQuality::Excellent,
                "Schema monocromatico con ottimo bilanciamento di saturazione e luminosità",
            );
        }
        return HarmonyReport::new(
            "Monocromatico",
            HarmonyQuality::Good,
            "Palette basata su variazioni di un singolo colore",
        );
    }

    if count_where(&distances, |d| d < 60.0) >= 2 {
        return HarmonyReport::new(
            "Analogo",
            HarmonyQuality::Excellent,
            "Colori adiacenti sulla ruota cromatica - armonia naturale",
        );
    }

    if count_where(&distances, |d| (d - 180.0).abs() < 30.0) >= 1 {
        return HarmonyReport::new(
            "Complementare",
            HarmonyQuality::Excellent,
            "Colori opposti sulla ruota cromatica - contrasto dinamico",
        );
    }

    let is_split = distances.iter().enumerate().any(|(i, wide)| {
        *wide > 150.0
            && *wide < 210.0
            && distances
                .iter()
                .enumerate()
                .any(|(j, narrow)| i != j && *narrow > 30.0 && *narrow < 90.0)
    });
    if is_split {
        return HarmonyReport::new(
            "Split-Complementare",
            HarmonyQuality::Excellent,
            "Variazione sofisticata dello schema complementare",
        );
    }

    if count_where(&distances, |d| (d - 120.0).abs() < 30.0) >= 2 {
        return HarmonyReport::new(
            "Triadico",
            HarmonyQuality::Excellent,
            "Tre colori equidistanti sulla ruota - energia bilanciata",
        );
    }

    HarmonyReport::new(
        "Personalizzato",
        HarmonyQuality::Fair,
        "Schema di colori personalizzato",
    )
}

/// Score arbitrary colors. See [`score_palette`].
pub fn score_colors(primary: &str, secondary: Option<&str>, accent: &str) -> QualityReport {
    let primary = hex_to_hsl(primary);
    let secondary = secondary.map(hex_to_hsl);
    let accent = hex_to_hsl(accent);

    let mut findings = Vec::new();

    if primary.l > 40.0 && primary.l < 80.0 {
        findings.push(QualityIssue::MuddyPrimaryLightness);
    }
    if let Some(s) = secondary
        && s.l > 45.0
        && s.l < 75.0
    {
        findings.push(QualityIssue::WeakSecondaryLightness);
    }
    if accent.s < 40.0 {
        findings.push(QualityIssue::DullAccentSaturation);
    }
    if accent.l < 40.0 || accent.l > 70.0 {
        findings.push(QualityIssue::AccentLightnessOutOfRange);
    }

    let present: Vec<Hsl> = [Some(primary), secondary, Some(accent)]
        .into_iter()
        .flatten()
        .collect();
    let mean_saturation = present.iter().map(|c| c.s).sum::<f64>() / present.len() as f64;
    if mean_saturation < 20.0 {
        findings.push(QualityIssue::LowOverallSaturation);
    }
    if pairwise_distances(&present).iter().all(|d| *d < 15.0) {
        findings.push(QualityIssue::HuesTooSimilar);
    }

    QualityReport::from_findings(findings)
}

/// Score a palette from 0 to 100. Every triggered penalty adds one issue and
/// one recommendation; penalties accumulate.
pub fn score_palette(palette: &Palette) -> QualityReport {
    score_colors(
        palette.primary.as_str(),
        palette.secondary.as_ref().map(|s| s.as_str()),
        palette.accent.as_str(),
    )
}

const CATEGORY_SUGGESTIONS: &[(&str, &str)] = &[
    ("tech", "Consiglia: blu navy + grigio scuro + blu elettrico"),
    ("saas", "Consiglia: indigo + slate + viola"),
    ("beauty", "Consiglia: rosa profondo + viola scuro + fucsia"),
    ("fashion", "Consiglia: nero + burgundy + oro"),
    ("food", "Consiglia: rosso scuro + verde forest + arancione"),
    ("restaurant", "Consiglia: marrone + rosso vinaccia + ambra"),
    ("finance", "Consiglia: blu navy + verde scuro + oro scuro"),
    ("corporate", "Consiglia: grigio scuro + blu professionale + teal"),
    ("health", "Consiglia: verde smeraldo + teal + lime"),
    ("wellness", "Consiglia: verde salvia + blu oceano + menta"),
    ("creative", "Consiglia: viola + arancione + magenta"),
    ("agency", "Consiglia: nero + viola elettrico + rosa neon"),
    ("ecommerce", "Consiglia: grigio antracite + blu + arancione"),
];

/// Human color advice for a category.
pub fn suggestion_for_category(category: &str) -> &'static str {
    let lower = category.to_lowercase();
    CATEGORY_SUGGESTIONS
        .iter()
        .find(|(key, _)| lower.contains(key))
        .map(|(_, advice)| *advice)
        .unwrap_or("Usa schemi complementari o triadici per massimo impatto visivo")
}
