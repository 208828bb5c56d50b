// File: ./src/export.rs
//! JSON export of a generated palette and its font pairing.
//!
//! File names are short and stable: a category slug, the style, and for
//! custom-hue palettes the scheme plus a hash of the options, so re-exporting
//! the same options overwrites the same file.

use crate::color_utils::string_hash;
use crate::context::AppContext;
use crate::fonts::FontPair;
use crate::model::{HarmonyScheme, Palette, PaletteRequest, PaletteSize, VisualStyle};
use crate::storage::FileStore;
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::{Path, PathBuf};

const SLUG_LEN: usize = 12;
const STYLE_LEN: usize = 3;
const SCHEME_LEN: usize = 4;
const HASH_LEN: usize = 6;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportMetadata {
    pub category: String,
    pub palette_size: PaletteSize,
    pub palette_style: VisualStyle,
    // The custom block is only present when the request pinned a base hue.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_hue: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_lightness: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_saturation: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_scheme: Option<HarmonyScheme>,
    pub generated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportFonts {
    pub headline: String,
    pub body: String,
}

impl From<&FontPair> for ExportFonts {
    fn from(pair: &FontPair) -> Self {
        Self {
            headline: pair.headline.to_string(),
            body: pair.body.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportBundle {
    pub metadata: ExportMetadata,
    pub palette: Palette,
    pub fonts: ExportFonts,
}

impl ExportBundle {
    pub fn from_request(request: &PaletteRequest, palette: Palette, fonts: &FontPair) -> Self {
        let custom = request.base_hue.is_some();
        let metadata = ExportMetadata {
            category: request.category.clone(),
            palette_size: palette.size(),
            palette_style: request.style,
            custom_hue: request.base_hue,
            custom_lightness: request.override_lightness.filter(|_| custom),
            custom_saturation: request.override_saturation.filter(|_| custom),
            color_scheme: custom.then_some(request.scheme),
            generated_at: Utc::now(),
        };
        Self {
            metadata,
            palette,
            fonts: fonts.into(),
        }
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn file_name(&self) -> String {
        let meta = &self.metadata;
        let slug = category_slug(&meta.category);
        let style: String = meta.palette_style.as_ref().chars().take(STYLE_LEN).collect();

        match (meta.custom_hue, meta.color_scheme) {
            (Some(_), Some(scheme)) => {
                let scheme: String = scheme.as_ref().chars().take(SCHEME_LEN).collect();
                format!(
                    "palette-{}-{}-{}-{}.json",
                    slug,
                    style,
                    scheme,
                    self.options_hash()
                )
            }
            _ => format!("palette-{}-{}.json", slug, style),
        }
    }

    // Field order, integral numbers without a fraction and omitted options
    // all feed the hash. Any change here renames every custom export.
    fn options_hash(&self) -> String {
        let meta = &self.metadata;
        let options = HashedOptions {
            palette_style: meta.palette_style,
            color_scheme: meta.color_scheme,
            custom_hue: meta.custom_hue.map(plain_number),
            custom_lightness: meta.custom_lightness.map(plain_number),
            custom_saturation: meta.custom_saturation.map(plain_number),
        };
        // A struct of plain values cannot fail to serialize.
        let text = serde_json::to_string(&options).unwrap_or_default();
        let hash = string_hash(&text);
        to_base36(i64::from(hash).unsigned_abs())
            .chars()
            .take(HASH_LEN)
            .collect()
    }

    /// Write the bundle into the context's export directory.
    pub fn save(&self, ctx: &dyn AppContext) -> Result<PathBuf> {
        self.save_to(&ctx.get_export_dir()?)
    }

    pub fn save_to(&self, dir: &Path) -> Result<PathBuf> {
        let path = dir.join(self.file_name());
        let json = self.to_json_pretty()?;
        FileStore::write_locked(&path, json)
            .with_context(|| format!("Failed to write export '{}'", path.display()))?;
        log::info!("Exported palette to {}", path.display());
        Ok(path)
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct HashedOptions {
    palette_style: VisualStyle,
    #[serde(skip_serializing_if = "Option::is_none")]
    color_scheme: Option<HarmonyScheme>,
    #[serde(skip_serializing_if = "Option::is_none")]
    custom_hue: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    custom_lightness: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    custom_saturation: Option<Value>,
}

fn plain_number(v: f64) -> Value {
    if v.is_finite() && v.fract() == 0.0 && v.abs() < 1e15 {
        Value::from(v as i64)
    } else {
        Value::from(v)
    }
}

/// Lowercase, whitespace runs collapsed to `-`, truncated.
pub fn category_slug(category: &str) -> String {
    let mut slug = String::with_capacity(category.len());
    let mut in_space = false;
    for c in category.to_lowercase().chars() {
        if c.is_whitespace() {
            if !in_space {
                slug.push('-');
            }
            in_space = true;
        } else {
            slug.push(c);
            in_space = false;
        }
    }
    slug.chars().take(SLUG_LEN).collect()
}

fn to_base36(mut n: u64) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if n == 0 {
        return "0".to_string();
    }
    let mut out = Vec::new();
    while n > 0 {
        out.push(DIGITS[(n % 36) as usize]);
        n /= 36;
    }
    out.iter().rev().map(|b| *b as char).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fonts::select_font_pair;

    fn bundle(request: &PaletteRequest) -> ExportBundle {
        let palette = Palette::parse("#2662d9", Some("#d18147"), "#edbe5e").unwrap();
        ExportBundle::from_request(request, palette, &select_font_pair(&request.category))
    }

    #[test]
    fn test_base36() {
        assert_eq!(to_base36(0), "0");
        assert_eq!(to_base36(97), "2p");
        assert_eq!(to_base36(3105), "2e9");
        assert_eq!(to_base36(i64::from(i32::MIN).unsigned_abs()), "zik0zk");
    }

    #[test]
    fn test_category_slug() {
        assert_eq!(category_slug("Artisan  Bakery"), "artisan-bake");
        assert_eq!(category_slug("SaaS"), "saas");
        assert_eq!(category_slug(" a\tb"), "-a-b");
    }

    #[test]
    fn test_plain_file_name() {
        let request = PaletteRequest::new("Coffee Shop").with_style(VisualStyle::Pastel);
        assert_eq!(bundle(&request).file_name(), "palette-coffee-shop-pas.json");
    }

    #[test]
    fn test_custom_hue_file_name() {
        let request = PaletteRequest::new("tech")
            .with_scheme(HarmonyScheme::Triadic)
            .with_base_hue(220.0)
            .with_lightness(45.0);
        let name = bundle(&request).file_name();
        assert!(name.starts_with("palette-tech-vib-tria-"), "{name}");
        assert!(name.ends_with(".json"));
        let hash = &name["palette-tech-vib-tria-".len()..name.len() - ".json".len()];
        assert!(!hash.is_empty() && hash.len() <= 6);

        // Same options, same name; different options, different hash
        assert_eq!(bundle(&request).file_name(), name);
        let other = request.clone().with_lightness(46.0);
        assert_ne!(bundle(&other).file_name(), name);
    }

    #[test]
    fn test_options_text_is_stable() {
        let request = PaletteRequest::new("tech").with_base_hue(220.0);
        let b = bundle(&request);
        let expected = r#"{"paletteStyle":"vibrant","colorScheme":"complementary","customHue":220}"#;
        let hash: String = to_base36(i64::from(string_hash(expected)).unsigned_abs())
            .chars()
            .take(6)
            .collect();
        assert_eq!(b.file_name(), format!("palette-tech-vib-comp-{hash}.json"));
    }

    #[test]
    fn test_metadata_shape() {
        let plain = bundle(&PaletteRequest::new("food").with_lightness(30.0));
        let json = serde_json::to_value(&plain).unwrap();
        let meta = json["metadata"].as_object().unwrap();
        assert_eq!(meta["category"], "food");
        assert_eq!(meta["paletteSize"], 3);
        assert_eq!(meta["paletteStyle"], "vibrant");
        assert!(meta.contains_key("generatedAt"));
        // Overrides without a custom hue are not exported
        assert!(!meta.contains_key("customLightness"));
        assert!(!meta.contains_key("colorScheme"));
        assert_eq!(json["fonts"]["headline"], "Satisfy");
        assert_eq!(json["palette"]["secondary"], "#d18147");

        let custom = bundle(
            &PaletteRequest::new("food")
                .with_scheme(HarmonyScheme::Monochromatic)
                .with_base_hue(15.0),
        );
        let json = serde_json::to_value(&custom).unwrap();
        assert_eq!(json["metadata"]["customHue"], 15.0);
        assert_eq!(json["metadata"]["colorScheme"], "monochromatic");
    }
}
