// File: ./src/synth.rs
//! Palette synthesis from a base hue, a visual style and a harmony scheme.
//!
//! Each role starts from the midpoint of its style profile. Explicit
//! lightness/saturation overrides only ever touch the primary: they mean
//! "the user picked this swatch", and the rest of the palette is still
//! derived around it.

use crate::color_utils::{Hsl, normalize_hue};
use crate::model::{ColorRole, HarmonyScheme, Palette, PaletteRequest, Tone, VisualStyle};

/// Offset of the complementary secondary from the complement itself.
const COMPLEMENTARY_SECONDARY_SHIFT: f64 = -15.0;
const ANALOGOUS_STEP: f64 = 30.0;
const TRIADIC_STEP: f64 = 120.0;
const SPLIT_SECONDARY_SHIFT: f64 = 150.0;
const SPLIT_ACCENT_SHIFT: f64 = 210.0;
const SPLIT_SECONDARY_SAT_FACTOR: f64 = 1.10;
const SPLIT_SECONDARY_LIGHTNESS_DROP: f64 = 5.0;
const SPLIT_ACCENT_SAT_FACTOR: f64 = 1.15;
const MONO_ACCENT_SAT_FACTOR: f64 = 1.2;
const MONO_DARK_ACCENT_LIFT: f64 = 15.0;

/// Resolved HSL value of every role, before hex conversion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoleColors {
    pub primary: Hsl,
    pub secondary: Option<Hsl>,
    pub accent: Hsl,
}

impl RoleColors {
    pub fn to_palette(self) -> Palette {
        Palette {
            primary: self.primary.to_hex(),
            secondary: self.secondary.map(Hsl::to_hex),
            accent: self.accent.to_hex(),
        }
    }
}

fn scale_saturation(saturation: f64, factor: f64) -> f64 {
    (saturation * factor).min(100.0)
}

fn hue(h: f64) -> f64 {
    normalize_hue(h)
}

/// Compute every role's HSL for a request. No WCAG correction is applied.
pub fn resolve_roles(request: &PaletteRequest) -> RoleColors {
    let base = hue(request.resolved_base_hue());
    let style = request.style;

    let mut primary = style.profile(ColorRole::Primary).nominal();
    if let Some(l) = request.override_lightness {
        primary.lightness = l;
    }
    if let Some(s) = request.override_saturation {
        primary.saturation = s;
    }
    let secondary = style.profile(ColorRole::Secondary).nominal();
    let accent = style.profile(ColorRole::Accent).nominal();

    let at = |h: f64, tone: Tone| Hsl::new(hue(h), tone.saturation, tone.lightness);

    let (secondary_hsl, accent_hsl) = match request.scheme {
        HarmonyScheme::Complementary => {
            let complement = base + 180.0;
            (
                at(complement + COMPLEMENTARY_SECONDARY_SHIFT, secondary),
                at(complement, accent),
            )
        }
        HarmonyScheme::Triadic => (
            at(base + TRIADIC_STEP, secondary),
            at(base + 2.0 * TRIADIC_STEP, accent),
        ),
        HarmonyScheme::Analogous => (
            at(base - ANALOGOUS_STEP, secondary),
            at(base + ANALOGOUS_STEP, accent),
        ),
        HarmonyScheme::SplitComplementary => (
            Hsl::new(
                hue(base + SPLIT_SECONDARY_SHIFT),
                scale_saturation(secondary.saturation, SPLIT_SECONDARY_SAT_FACTOR),
                secondary.lightness - SPLIT_SECONDARY_LIGHTNESS_DROP,
            ),
            Hsl::new(
                hue(base + SPLIT_ACCENT_SHIFT),
                scale_saturation(accent.saturation, SPLIT_ACCENT_SAT_FACTOR),
                accent.lightness,
            ),
        ),
        HarmonyScheme::Monochromatic => {
            let accent_l = if style == VisualStyle::Dark {
                accent.lightness + MONO_DARK_ACCENT_LIFT
            } else {
                accent.lightness
            };
            let accent_s = scale_saturation(accent.saturation, MONO_ACCENT_SAT_FACTOR);
            (
                Hsl::new(
                    base,
                    secondary.saturation,
                    (primary.lightness + accent_l) / 2.0,
                ),
                Hsl::new(base, accent_s, accent_l),
            )
        }
    };

    RoleColors {
        primary: at(base, primary),
        secondary: request.size.has_secondary().then_some(secondary_hsl),
        accent: accent_hsl,
    }
}

/// Synthesize a raw palette for `request`.
pub fn synthesize(request: &PaletteRequest) -> Palette {
    let roles = resolve_roles(request);
    let palette = roles.to_palette();
    log::debug!(
        "Synthesized {} {} palette for '{}' (base hue {:.1}): {:?}",
        request.style,
        request.scheme,
        request.category,
        roles.primary.h,
        palette
    );
    palette
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PaletteSize;
    use strum::IntoEnumIterator;

    fn request(scheme: HarmonyScheme, style: VisualStyle, hue: f64) -> PaletteRequest {
        PaletteRequest::new("test")
            .with_scheme(scheme)
            .with_style(style)
            .with_base_hue(hue)
    }

    #[test]
    fn test_complementary_vibrant() {
        let roles = resolve_roles(&request(
            HarmonyScheme::Complementary,
            VisualStyle::Vibrant,
            220.0,
        ));
        assert_eq!(roles.primary, Hsl::new(220.0, 70.0, 50.0));
        assert_eq!(roles.accent, Hsl::new(40.0, 80.0, 65.0));
        assert_eq!(roles.secondary, Some(Hsl::new(25.0, 60.0, 55.0)));
    }

    #[test]
    fn test_triadic_and_analogous_hues() {
        let tri = resolve_roles(&request(HarmonyScheme::Triadic, VisualStyle::Pastel, 300.0));
        assert_eq!(tri.secondary.unwrap().h, 60.0);
        assert_eq!(tri.accent.h, 180.0);

        let ana = resolve_roles(&request(HarmonyScheme::Analogous, VisualStyle::Dark, 10.0));
        assert_eq!(ana.secondary.unwrap().h, 340.0);
        assert_eq!(ana.accent.h, 40.0);
    }

    #[test]
    fn test_split_complementary_adjustments() {
        let roles = resolve_roles(&request(
            HarmonyScheme::SplitComplementary,
            VisualStyle::Vibrant,
            0.0,
        ));
        let secondary = roles.secondary.unwrap();
        assert_eq!(secondary.h, 150.0);
        assert!((secondary.s - 66.0).abs() < 1e-9);
        assert_eq!(secondary.l, 50.0);
        assert_eq!(roles.accent.h, 210.0);
        // 80 * 1.15 = 92
        assert!((roles.accent.s - 92.0).abs() < 1e-9);
        assert_eq!(roles.accent.l, 65.0);
    }

    #[test]
    fn test_monochromatic_dark_lifts_accent() {
        let roles = resolve_roles(&request(
            HarmonyScheme::Monochromatic,
            VisualStyle::Dark,
            200.0,
        ));
        assert_eq!(roles.accent.l, 70.0);
        // 70 * 1.2 = 84
        assert!((roles.accent.s - 84.0).abs() < 1e-9);
        let secondary = roles.secondary.unwrap();
        assert_eq!(secondary.l, 50.0); // (30 + 70) / 2
        assert_eq!(secondary.s, 45.0);
        assert!([roles.primary.h, secondary.h, roles.accent.h]
            .iter()
            .all(|h| *h == 200.0));
    }

    #[test]
    fn test_monochromatic_vibrant_accent_saturation_capped() {
        let roles = resolve_roles(&request(
            HarmonyScheme::Monochromatic,
            VisualStyle::Vibrant,
            90.0,
        ));
        // 80 * 1.2 = 96, still under the cap
        assert!((roles.accent.s - 96.0).abs() < 1e-9);
        assert_eq!(roles.accent.l, 65.0);
    }

    #[test]
    fn test_overrides_only_touch_primary() {
        let req = request(HarmonyScheme::Monochromatic, VisualStyle::Vibrant, 90.0)
            .with_lightness(20.0)
            .with_saturation(95.0);
        let roles = resolve_roles(&req);
        assert_eq!(roles.primary, Hsl::new(90.0, 95.0, 20.0));
        assert_eq!(roles.accent.l, 65.0);
        // Monochromatic secondary is centered on the overridden primary
        assert_eq!(roles.secondary.unwrap().l, (20.0 + 65.0) / 2.0);
        assert_eq!(roles.secondary.unwrap().s, 60.0);
    }

    #[test]
    fn test_negative_and_large_base_hues_wrap() {
        let a = synthesize(&request(HarmonyScheme::Analogous, VisualStyle::Vibrant, -40.0));
        let b = synthesize(&request(HarmonyScheme::Analogous, VisualStyle::Vibrant, 320.0));
        let c = synthesize(&request(HarmonyScheme::Analogous, VisualStyle::Vibrant, 680.0));
        assert_eq!(a, b);
        assert_eq!(b, c);
    }

    #[test]
    fn test_size_two_never_has_secondary() {
        for scheme in HarmonyScheme::iter() {
            for style in VisualStyle::iter() {
                let req = request(scheme, style, 123.0).with_size(PaletteSize::Two);
                assert!(synthesize(&req).secondary.is_none(), "{scheme}/{style}");
                let req = req.with_size(PaletteSize::Three);
                assert!(synthesize(&req).secondary.is_some(), "{scheme}/{style}");
            }
        }
    }

    #[test]
    fn test_missing_base_hue_uses_category() {
        let a = synthesize(&PaletteRequest::new("Bakery"));
        let b = synthesize(&PaletteRequest::new("bakery"));
        assert_eq!(a, b);
    }
}
