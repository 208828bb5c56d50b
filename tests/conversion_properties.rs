// Properties of the color conversions and the AA correction loop.
use huesmith::color_utils::{HexColor, contrast_ratio, hex_to_hsl, hsl_to_hex};
use huesmith::contrast::{AA_NORMAL_TEXT, FALLBACK_COLOR, ensure_aa};

fn channel_diff(a: &HexColor, b: &HexColor) -> u8 {
    let (ar, ag, ab) = a.to_rgb();
    let (br, bg, bb) = b.to_rgb();
    [ar.abs_diff(br), ag.abs_diff(bg), ab.abs_diff(bb)]
        .into_iter()
        .max()
        .unwrap_or(0)
}

#[test]
fn test_round_trip_within_one_unit() {
    for r in (0..=255u8).step_by(3) {
        for g in (0..=255u8).step_by(3) {
            for b in (0..=255u8).step_by(3) {
                let original = HexColor::from_rgb(r, g, b);
                let hsl = hex_to_hsl(original.as_str());
                let back = hsl_to_hex(hsl.h, hsl.s, hsl.l);
                assert!(
                    channel_diff(&original, &back) <= 1,
                    "{} -> {:?} -> {}",
                    original,
                    hsl,
                    back
                );
            }
        }
    }
}

#[test]
fn test_hue_wrap_closure() {
    for h in (0..360).step_by(7) {
        let h = h as f64;
        for (s, l) in [(70.0, 50.0), (40.0, 85.0), (55.0, 30.0)] {
            let base = hsl_to_hex(h, s, l);
            assert_eq!(base, hsl_to_hex(h + 360.0, s, l), "h={h}");
            assert_eq!(base, hsl_to_hex(h - 360.0, s, l), "h={h}");
        }
    }
}

#[test]
fn test_contrast_guarantee() {
    let backgrounds = ["#ffffff", "#000000", "#1f2937", "#777777", "#ffff00", "#dbeafe"];
    let steps = [0u8, 51, 102, 153, 204, 255];
    for bg in backgrounds {
        for r in steps {
            for g in steps {
                for b in steps {
                    let color = HexColor::from_rgb(r, g, b);
                    let fixed = ensure_aa(color.as_str(), bg);
                    assert!(
                        contrast_ratio(fixed.as_str(), bg) >= AA_NORMAL_TEXT
                            || fixed == FALLBACK_COLOR,
                        "{} on {} gave {}",
                        color,
                        bg,
                        fixed
                    );
                }
            }
        }
    }
}

#[test]
fn test_everything_converges_on_white() {
    for hex in ["#ffff00", "#00ffff", "#f0f0f0", "#ffffff", "#7dd3fc"] {
        assert_ne!(ensure_aa(hex, "#ffffff"), FALLBACK_COLOR, "{hex}");
    }
}

#[test]
fn test_dark_colors_fall_back_on_black() {
    // Darkening can only lower contrast against black
    for hex in ["#333333", "#1e3a8a", "#404040"] {
        assert_eq!(ensure_aa(hex, "#000000"), FALLBACK_COLOR, "{hex}");
    }
}

#[test]
fn test_passing_colors_are_kept() {
    assert_eq!(ensure_aa("#FFFFFF", "#000000"), "#ffffff");
    assert_eq!(ensure_aa("#1f2937", "#ffffff"), "#1f2937");
}
