// File: ./src/model/palette.rs
use crate::color_utils::{HexColor, category_hue};
use crate::model::style::{ColorRole, HarmonyScheme, VisualStyle};
use anyhow::anyhow;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of colors in a palette. A two-color palette has no secondary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum PaletteSize {
    Two,
    #[default]
    Three,
}

impl PaletteSize {
    pub fn count(self) -> u8 {
        match self {
            PaletteSize::Two => 2,
            PaletteSize::Three => 3,
        }
    }

    pub fn has_secondary(self) -> bool {
        matches!(self, PaletteSize::Three)
    }
}

impl From<PaletteSize> for u8 {
    fn from(size: PaletteSize) -> u8 {
        size.count()
    }
}

impl TryFrom<u8> for PaletteSize {
    type Error = anyhow::Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            2 => Ok(PaletteSize::Two),
            3 => Ok(PaletteSize::Three),
            other => Err(anyhow!("Palette size must be 2 or 3, got {}", other)),
        }
    }
}

impl fmt::Display for PaletteSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.count())
    }
}

/// Parameters for palette synthesis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaletteRequest {
    pub category: String,
    #[serde(default)]
    pub style: VisualStyle,
    #[serde(default)]
    pub scheme: HarmonyScheme,
    #[serde(default)]
    pub size: PaletteSize,
    #[serde(default)]
    pub base_hue: Option<f64>,
    #[serde(default)]
    pub override_lightness: Option<f64>,
    #[serde(default)]
    pub override_saturation: Option<f64>,
}

impl PaletteRequest {
    /// A vibrant, complementary, three-color request for `category`.
    pub fn new(category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            style: VisualStyle::default(),
            scheme: HarmonyScheme::default(),
            size: PaletteSize::default(),
            base_hue: None,
            override_lightness: None,
            override_saturation: None,
        }
    }

    pub fn with_style(mut self, style: VisualStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_scheme(mut self, scheme: HarmonyScheme) -> Self {
        self.scheme = scheme;
        self
    }

    pub fn with_size(mut self, size: PaletteSize) -> Self {
        self.size = size;
        self
    }

    pub fn with_base_hue(mut self, hue: f64) -> Self {
        self.base_hue = Some(hue);
        self
    }

    pub fn with_lightness(mut self, lightness: f64) -> Self {
        self.override_lightness = Some(lightness);
        self
    }

    pub fn with_saturation(mut self, saturation: f64) -> Self {
        self.override_saturation = Some(saturation);
        self
    }

    /// The explicit base hue, or one derived from the category text.
    pub fn resolved_base_hue(&self) -> f64 {
        self.base_hue
            .unwrap_or_else(|| category_hue(&self.category))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub primary: HexColor,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary: Option<HexColor>,
    pub accent: HexColor,
}

impl Palette {
    /// Build a palette from arbitrary strings. Returns `None` if any present
    /// color fails to parse.
    pub fn parse(primary: &str, secondary: Option<&str>, accent: &str) -> Option<Self> {
        let secondary = match secondary {
            Some(s) => Some(HexColor::parse(s)?),
            None => None,
        };
        Some(Self {
            primary: HexColor::parse(primary)?,
            secondary,
            accent: HexColor::parse(accent)?,
        })
    }

    pub fn size(&self) -> PaletteSize {
        if self.secondary.is_some() {
            PaletteSize::Three
        } else {
            PaletteSize::Two
        }
    }

    pub fn get(&self, role: ColorRole) -> Option<&HexColor> {
        match role {
            ColorRole::Primary => Some(&self.primary),
            ColorRole::Secondary => self.secondary.as_ref(),
            ColorRole::Accent => Some(&self.accent),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_color_palette_omits_secondary_key() {
        let palette = Palette::parse("#2662d9", None, "#edbe5e").unwrap();
        let json = serde_json::to_value(&palette).unwrap();
        let obj = json.as_object().unwrap();
        assert!(!obj.contains_key("secondary"));
        assert_eq!(obj["primary"], "#2662d9");
        assert_eq!(palette.size(), PaletteSize::Two);
    }

    #[test]
    fn test_palette_parse_canonicalizes() {
        let palette = Palette::parse("2662D9", Some("#D18147"), "#EDBE5E").unwrap();
        assert_eq!(palette.secondary.unwrap(), "#d18147");
        assert!(Palette::parse("#2662d9", Some("nope"), "#edbe5e").is_none());
    }

    #[test]
    fn test_palette_size_serde() {
        assert_eq!(serde_json::to_string(&PaletteSize::Two).unwrap(), "2");
        let size: PaletteSize = serde_json::from_str("3").unwrap();
        assert_eq!(size, PaletteSize::Three);
        assert!(serde_json::from_str::<PaletteSize>("4").is_err());
        assert!(PaletteSize::try_from(1).is_err());
    }

    #[test]
    fn test_request_builder_defaults() {
        let req = PaletteRequest::new("saas")
            .with_style(VisualStyle::Dark)
            .with_base_hue(12.0);
        assert_eq!(req.scheme, HarmonyScheme::Complementary);
        assert_eq!(req.size, PaletteSize::Three);
        assert_eq!(req.resolved_base_hue(), 12.0);
        assert!(req.override_lightness.is_none());
    }
}
