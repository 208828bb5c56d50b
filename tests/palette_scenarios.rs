// End-to-end palette behavior: synthesis, correction, analysis, scoring.
use huesmith::color_utils::{HexColor, contrast_ratio, hex_to_hsl};
use huesmith::contrast::{AA_NORMAL_TEXT, CorrectionOutcome, apply_aa_policy, ensure_aa_detailed};
use huesmith::harmony::{analyze_harmony, hue_distance, score_colors, score_palette};
use huesmith::model::{
    HarmonyQuality, HarmonyScheme, PaletteRequest, PaletteSize, QualityIssue, VisualStyle,
};
use huesmith::synth::{resolve_roles, synthesize};
use strum::IntoEnumIterator;

fn assert_close(actual: &HexColor, expected: &str) {
    let (ar, ag, ab) = actual.to_rgb();
    let (er, eg, eb) = HexColor::parse(expected).unwrap().to_rgb();
    assert!(
        ar.abs_diff(er) <= 1 && ag.abs_diff(eg) <= 1 && ab.abs_diff(eb) <= 1,
        "{} is not within one unit of {}",
        actual,
        expected
    );
}

#[test]
fn test_scenario_a_vibrant_complementary() {
    let request = PaletteRequest::new("tech")
        .with_base_hue(220.0)
        .with_style(VisualStyle::Vibrant)
        .with_scheme(HarmonyScheme::Complementary)
        .with_size(PaletteSize::Three);
    let palette = synthesize(&request);

    assert_close(&palette.primary, "#2662d9");
    assert_close(palette.secondary.as_ref().unwrap(), "#d18147");
    assert_close(&palette.accent, "#edbe5e");
}

#[test]
fn test_scenario_b_gray_palette_scores_low() {
    let report = score_colors("#888888", Some("#999999"), "#8a8a8a");
    assert!(report.score < 50, "score {}", report.score);
    assert!(report.has(QualityIssue::MuddyPrimaryLightness));
    assert!(report.has(QualityIssue::HuesTooSimilar));
    assert_eq!(report.issues.len(), report.recommendations.len());
}

#[test]
fn test_scenario_c_wide_hues() {
    let report = analyze_harmony("#1e40af", Some("#166534"), "#991b1b");
    // Hues 226, 143 and 0: every distance is above 60 and none is near 180,
    // but two of them sit within 30 degrees of 120.
    for name in ["Monocromatico", "Monocromatico Avanzato", "Analogo", "Complementare"] {
        assert_ne!(report.harmony_type, name);
    }
    assert_eq!(report.harmony_type, "Triadico");
    assert_eq!(report.quality, HarmonyQuality::Excellent);
}

#[test]
fn test_scenario_d_yellow_on_white() {
    assert!(contrast_ratio("#ffff00", "#ffffff") < 1.1);
    let fixed = ensure_aa_detailed("#ffff00", "#ffffff");
    assert!(contrast_ratio(fixed.color.as_str(), "#ffffff") >= AA_NORMAL_TEXT);
    assert!(matches!(fixed.outcome, CorrectionOutcome::Darkened { steps } if steps <= 20));
    // Still yellow-ish, just darker
    let hsl = hex_to_hsl(fixed.color.as_str());
    assert!((hsl.h - 60.0).abs() <= 1.0);
}

#[test]
fn test_size_invariant_across_requests() {
    for scheme in HarmonyScheme::iter() {
        for style in VisualStyle::iter() {
            for hue in [0.0, 95.0, 359.0] {
                let base = PaletteRequest::new("store")
                    .with_scheme(scheme)
                    .with_style(style)
                    .with_base_hue(hue);
                let two = synthesize(&base.clone().with_size(PaletteSize::Two));
                let three = synthesize(&base.with_size(PaletteSize::Three));

                let json = serde_json::to_value(&two).unwrap();
                assert!(json.get("secondary").is_none());
                assert!(three.secondary.is_some());
                // Dropping the secondary does not move the other roles
                assert_eq!(two.primary, three.primary);
                assert_eq!(two.accent, three.accent);
            }
        }
    }
}

#[test]
fn test_complementary_closure() {
    for h in (0..360).step_by(20) {
        let h = h as f64;
        let request = PaletteRequest::new("tech")
            .with_scheme(HarmonyScheme::Complementary)
            .with_base_hue(h);
        let roles = resolve_roles(&request);
        assert_eq!(roles.accent.h, (h + 180.0) % 360.0);

        // Accent of the accent lands back on the base hue
        let accent_hue = hex_to_hsl(synthesize(&request).accent.as_str()).h;
        let again = synthesize(&request.clone().with_base_hue(accent_hue));
        let back = hex_to_hsl(again.accent.as_str()).h;
        assert!(hue_distance(back, h) <= 2.0, "{h} came back as {back}");
    }
}

#[test]
fn test_determinism() {
    let request = PaletteRequest::new("Artisan Bakery")
        .with_style(VisualStyle::Pastel)
        .with_scheme(HarmonyScheme::Analogous);
    assert_eq!(synthesize(&request), synthesize(&request));
    let a = synthesize(&request);
    assert_eq!(score_palette(&a), score_palette(&a));
}

#[test]
fn test_policy_then_report_flow() {
    let request = PaletteRequest::new("fitness")
        .with_style(VisualStyle::Pastel)
        .with_scheme(HarmonyScheme::Triadic)
        .with_base_hue(150.0);
    let raw = synthesize(&request);
    let result = apply_aa_policy(&raw);

    let fixed = &result.palette;
    for color in [Some(&fixed.primary), fixed.secondary.as_ref()].into_iter().flatten() {
        assert!(contrast_ratio(color.as_str(), "#ffffff") >= AA_NORMAL_TEXT);
    }
    assert!(
        contrast_ratio(fixed.accent.as_str(), fixed.primary.as_str()) >= AA_NORMAL_TEXT
            || fixed.accent == "#1f2937"
    );
    // Pastel colors are too light for white backgrounds
    assert!(!result.adjustments.is_empty());

    let quality = score_palette(fixed);
    assert!(quality.score <= 100);
}
