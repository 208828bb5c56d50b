// File: ./src/color_utils.rs

// Color space conversions shared by every other module.
// HEX <-> HSL <-> RGB plus the WCAG 2.0 luminance and contrast formulas.
// Everything here is total: malformed input degrades, it never errors.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A color in HSL space. Hue in degrees, saturation and lightness in percent.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    pub fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    pub fn to_hex(self) -> HexColor {
        hsl_to_hex(self.h, self.s, self.l)
    }
}

/// A canonical `#rrggbb` color (lowercase, six digits).
///
/// The only ways to build one are parsing and formatting from RGB bytes,
/// so a `HexColor` value is always in canonical form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HexColor(String);

impl HexColor {
    /// Parse `#RRGGBB` or `RRGGBB` (any case, surrounding whitespace ignored).
    pub fn parse(input: &str) -> Option<Self> {
        parse_hex_to_u8(input).map(|(r, g, b)| Self::from_rgb(r, g, b))
    }

    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(format!("#{:02x}{:02x}{:02x}", r, g, b))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn to_rgb(&self) -> (u8, u8, u8) {
        // Canonical by construction, the parse cannot fail.
        parse_hex_to_u8(&self.0).unwrap_or((0, 0, 0))
    }

    pub fn to_hsl(&self) -> Hsl {
        hex_to_hsl(&self.0)
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for HexColor {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<&str> for HexColor {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl Serialize for HexColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for HexColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        HexColor::parse(&raw)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid hex color: {}", raw)))
    }
}

/// Reduce a hue into `[0, 360)`. Non-finite hues map to 0.
pub fn normalize_hue(h: f64) -> f64 {
    if !h.is_finite() {
        return 0.0;
    }
    let h = h.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if h >= 360.0 { 0.0 } else { h }
}

fn clamp_percent(v: f64) -> f64 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 100.0) }
}

/// HSL -> RGB bytes. Hue wraps, saturation and lightness are clamped to [0, 100].
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> (u8, u8, u8) {
    let h = normalize_hue(h);
    let s = clamp_percent(s) / 100.0;
    let l = clamp_percent(l) / 100.0;

    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let (r1, g1, b1) = if (0.0..60.0).contains(&h) {
        (c, x, 0.0)
    } else if (60.0..120.0).contains(&h) {
        (x, c, 0.0)
    } else if (120.0..180.0).contains(&h) {
        (0.0, c, x)
    } else if (180.0..240.0).contains(&h) {
        (0.0, x, c)
    } else if (240.0..300.0).contains(&h) {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    let channel = |v: f64| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
    (channel(r1), channel(g1), channel(b1))
}

/// HSL -> canonical hex. Never fails; out-of-range input is clamped.
pub fn hsl_to_hex(h: f64, s: f64, l: f64) -> HexColor {
    let (r, g, b) = hsl_to_rgb(h, s, l);
    HexColor::from_rgb(r, g, b)
}

/// RGB bytes -> unrounded HSL.
pub fn rgb_to_hsl(r: u8, g: u8, b: u8) -> Hsl {
    let r = r as f64 / 255.0;
    let g = g as f64 / 255.0;
    let b = b as f64 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;
    let l = (max + min) / 2.0;

    if delta == 0.0 {
        return Hsl::new(0.0, 0.0, l * 100.0);
    }

    let s = if l > 0.5 {
        delta / (2.0 - max - min)
    } else {
        delta / (max + min)
    };

    let h = if max == r {
        ((g - b) / delta + if g < b { 6.0 } else { 0.0 }) / 6.0
    } else if max == g {
        ((b - r) / delta + 2.0) / 6.0
    } else {
        ((r - g) / delta + 4.0) / 6.0
    };

    Hsl::new(h * 360.0, s * 100.0, l * 100.0)
}

/// Hex -> HSL, unrounded so that `hsl_to_hex(hex_to_hsl(x))` gives `x` back.
///
/// Malformed input (empty, wrong length, non-hex digits) degrades to
/// `{h: 0, s: 0, l: 0}`, i.e. black.
pub fn hex_to_hsl(hex: &str) -> Hsl {
    match parse_hex_to_u8(hex) {
        Some((r, g, b)) => {
            let hsl = rgb_to_hsl(r, g, b);
            Hsl::new(normalize_hue(hsl.h), hsl.s, hsl.l)
        }
        None => {
            log::warn!("Invalid hex color '{}', degrading to black", hex);
            Hsl::default()
        }
    }
}

/// Parse a hex color string like "#RRGGBB" or "RRGGBB" into a u8 tuple.
pub fn parse_hex_to_u8(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.trim();
    let hex = hex.strip_prefix('#').unwrap_or(hex);
    if hex.len() != 6 || !hex.bytes().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

/// WCAG 2.0 relative luminance of 8-bit sRGB channels.
pub fn relative_luminance(r: u8, g: u8, b: u8) -> f64 {
    fn expand(channel: u8) -> f64 {
        let c = channel as f64 / 255.0;
        if c <= 0.03928 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    }
    0.2126 * expand(r) + 0.7152 * expand(g) + 0.0722 * expand(b)
}

/// WCAG 2.0 contrast ratio in `[1, 21]`.
/// Returns 1 when either side does not parse as a hex color.
pub fn contrast_ratio(a: &str, b: &str) -> f64 {
    let (Some(rgb_a), Some(rgb_b)) = (parse_hex_to_u8(a), parse_hex_to_u8(b)) else {
        return 1.0;
    };
    let la = relative_luminance(rgb_a.0, rgb_a.1, rgb_a.2);
    let lb = relative_luminance(rgb_b.0, rgb_b.1, rgb_b.2);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// True when the color's relative luminance is above 0.5.
pub fn is_light_color(hex: &str) -> bool {
    match parse_hex_to_u8(hex) {
        Some((r, g, b)) => relative_luminance(r, g, b) > 0.5,
        None => false,
    }
}

/// Italian display name of the hue band a hue falls into.
pub fn hue_name(h: f64) -> &'static str {
    let h = normalize_hue(h);
    match h {
        h if h < 30.0 => "Rosso",
        h if h < 60.0 => "Arancione",
        h if h < 90.0 => "Giallo",
        h if h < 150.0 => "Verde",
        h if h < 210.0 => "Ciano",
        h if h < 270.0 => "Blu",
        h if h < 310.0 => "Viola",
        h if h < 340.0 => "Magenta",
        _ => "Rosa",
    }
}

/// 32-bit rolling string hash (`h * 31 + unit`) over UTF-16 code units.
/// Stable across platforms and toolchains; exported file names depend on it.
pub fn string_hash(text: &str) -> i32 {
    text.encode_utf16().fold(0i32, |hash, unit| {
        hash.wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(i32::from(unit))
    })
}

/// Deterministic base hue for a category, used when no explicit hue is given.
/// The text is trimmed and lowercased first so "Tech " and "tech" agree.
pub fn category_hue(category: &str) -> f64 {
    let hash = string_hash(&category.trim().to_lowercase());
    i64::from(hash).rem_euclid(360) as f64
}
