// File: ./src/contrast.rs
//! WCAG AA enforcement.
//!
//! `ensure_aa` only ever darkens: it lowers HSL lightness in fixed steps until
//! the contrast against the background reaches 4.5:1, and gives up with a
//! fixed dark gray after a bounded number of steps. Colors that are already
//! near-black cannot be fixed against a dark background and end up on the
//! fallback.

use crate::color_utils::{HexColor, Hsl, contrast_ratio, hex_to_hsl, hsl_to_hex, normalize_hue};
use crate::model::{ColorRole, Palette};
use serde::Serialize;
use strum::{AsRefStr, Display};

pub const AA_NORMAL_TEXT: f64 = 4.5;
pub const AA_LARGE_TEXT: f64 = 3.0;
pub const AAA_NORMAL_TEXT: f64 = 7.0;

pub const MAX_DARKEN_STEPS: u32 = 20;
pub const DARKEN_STEP: f64 = 5.0;

pub const FALLBACK_COLOR: &str = "#1f2937";
pub const WHITE: &str = "#ffffff";
pub const BLACK: &str = "#000000";

/// Gray 800: passes AA on white and light backgrounds.
pub const SAFE_TEXT_ON_LIGHT: &str = "#1f2937";
pub const SAFE_TEXT_ON_DARK: &str = "#ffffff";
/// Gray 600: body copy on light backgrounds (ratio above 7:1).
pub const SAFE_SECONDARY_TEXT_ON_LIGHT: &str = "#4b5563";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum CorrectionOutcome {
    /// Already passed; returned in canonical form.
    Unchanged,
    /// Passed after lowering lightness `steps` times.
    Darkened { steps: u32 },
    /// Never converged; the fallback color was returned.
    Fallback,
    /// Input was not a hex color and was read as black, which passed.
    Degraded,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AaCorrection {
    pub color: HexColor,
    pub outcome: CorrectionOutcome,
}

fn fallback() -> HexColor {
    HexColor::from_rgb(0x1f, 0x29, 0x37)
}

// Darkening works on whole-number HSL so the step count stays predictable.
fn whole_hsl(hex: &HexColor) -> Hsl {
    let hsl = hex_to_hsl(hex.as_str());
    Hsl::new(normalize_hue(hsl.h.round()), hsl.s.round(), hsl.l.round())
}

fn give_up(color: &str, background: &str) -> AaCorrection {
    log::warn!(
        "Failed to meet WCAG AA for {} on {}, using fallback {}",
        color,
        background,
        FALLBACK_COLOR
    );
    AaCorrection {
        color: fallback(),
        outcome: CorrectionOutcome::Fallback,
    }
}

/// Darken `color` until it reaches AA contrast against `background`,
/// reporting how the result was obtained.
pub fn ensure_aa_detailed(color: &str, background: &str) -> AaCorrection {
    let Some(mut current) = HexColor::parse(color) else {
        log::warn!("Invalid hex color '{}', reading it as black", color);
        let black = HexColor::from_rgb(0, 0, 0);
        if contrast_ratio(black.as_str(), background) >= AA_NORMAL_TEXT {
            return AaCorrection {
                color: black,
                outcome: CorrectionOutcome::Degraded,
            };
        }
        return give_up(color, background);
    };

    for step in 0..MAX_DARKEN_STEPS {
        if contrast_ratio(current.as_str(), background) >= AA_NORMAL_TEXT {
            let outcome = if step == 0 {
                CorrectionOutcome::Unchanged
            } else {
                CorrectionOutcome::Darkened { steps: step }
            };
            return AaCorrection {
                color: current,
                outcome,
            };
        }

        let mut hsl = whole_hsl(&current);
        hsl.l = (hsl.l - DARKEN_STEP).max(0.0);
        current = hsl_to_hex(hsl.h, hsl.s, hsl.l);
    }

    give_up(color, background)
}

/// Guarantee `contrast_ratio(result, background) >= 4.5`, or return the
/// fallback `#1f2937`.
pub fn ensure_aa(color: &str, background: &str) -> HexColor {
    ensure_aa_detailed(color, background).color
}

pub fn meets_wcag_aa(foreground: &str, background: &str, large_text: bool) -> bool {
    let required = if large_text {
        AA_LARGE_TEXT
    } else {
        AA_NORMAL_TEXT
    };
    contrast_ratio(foreground, background) >= required
}

/// Black or white text for a background, preferring white when it passes AA
/// and is at least as contrasted as black.
pub fn accessible_text_color(background: &str) -> HexColor {
    let with_white = contrast_ratio(background, WHITE);
    let with_black = contrast_ratio(background, BLACK);
    if with_white >= AA_NORMAL_TEXT && with_white >= with_black {
        HexColor::from_rgb(0xff, 0xff, 0xff)
    } else {
        HexColor::from_rgb(0, 0, 0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "UPPERCASE")]
pub enum WcagLevel {
    Aaa,
    Aa,
    Limited,
}

impl WcagLevel {
    pub fn for_ratio(ratio: f64) -> Self {
        if ratio >= AAA_NORMAL_TEXT {
            WcagLevel::Aaa
        } else if ratio >= AA_NORMAL_TEXT {
            WcagLevel::Aa
        } else {
            WcagLevel::Limited
        }
    }
}

pub fn wcag_level(color: &str, background: &str) -> WcagLevel {
    WcagLevel::for_ratio(contrast_ratio(color, background))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColorAdjustment {
    pub role: ColorRole,
    pub from: HexColor,
    pub to: HexColor,
    pub outcome: CorrectionOutcome,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PolicyResult {
    pub palette: Palette,
    pub adjustments: Vec<ColorAdjustment>,
}

/// Correct a palette for display: primary and secondary against white, the
/// accent against the corrected primary.
pub fn apply_aa_policy(palette: &Palette) -> PolicyResult {
    let mut adjustments = Vec::new();
    let mut correct = |role: ColorRole, color: &HexColor, background: &str| -> HexColor {
        let fixed = ensure_aa_detailed(color.as_str(), background);
        if fixed.color != *color {
            log::info!(
                "Adjusted {} for WCAG AA: {} -> {}",
                role,
                color,
                fixed.color
            );
            adjustments.push(ColorAdjustment {
                role,
                from: color.clone(),
                to: fixed.color.clone(),
                outcome: fixed.outcome,
            });
        }
        fixed.color
    };

    let primary = correct(ColorRole::Primary, &palette.primary, WHITE);
    let secondary = palette
        .secondary
        .as_ref()
        .map(|s| correct(ColorRole::Secondary, s, WHITE));
    let accent = correct(ColorRole::Accent, &palette.accent, primary.as_str());

    if adjustments.is_empty() {
        log::debug!("All colors already meet WCAG AA");
    }

    PolicyResult {
        palette: Palette {
            primary,
            secondary,
            accent,
        },
        adjustments,
    }
}
