// File: ./src/model/style.rs
// Visual styles, palette roles, harmony schemes and the style profile table.
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
    Display,
    AsRefStr,
    IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum VisualStyle {
    #[default]
    Vibrant,
    Pastel,
    Dark,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, Display, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ColorRole {
    Primary,
    Secondary,
    Accent,
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
    Display,
    AsRefStr,
    IntoStaticStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum HarmonyScheme {
    #[default]
    Complementary,
    Triadic,
    Analogous,
    SplitComplementary,
    Monochromatic,
}

impl HarmonyScheme {
    /// Split-complementary is an engine capability but is not offered as a
    /// choice in the end-user flow.
    pub fn is_user_selectable(self) -> bool {
        !matches!(self, HarmonyScheme::SplitComplementary)
    }
}

/// An inclusive `[min, max]` percentage range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyleRange {
    pub min: f64,
    pub max: f64,
}

impl StyleRange {
    const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn midpoint(self) -> f64 {
        (self.min + self.max) / 2.0
    }
}

/// Lightness and saturation ranges of one role within one style.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoleProfile {
    pub lightness: StyleRange,
    pub saturation: StyleRange,
}

impl RoleProfile {
    const fn new(lightness: (f64, f64), saturation: (f64, f64)) -> Self {
        Self {
            lightness: StyleRange::new(lightness.0, lightness.1),
            saturation: StyleRange::new(saturation.0, saturation.1),
        }
    }

    /// The nominal tone of the role: midpoint of both ranges.
    pub fn nominal(self) -> Tone {
        Tone {
            saturation: self.saturation.midpoint(),
            lightness: self.lightness.midpoint(),
        }
    }
}

/// Saturation and lightness without a hue.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    pub saturation: f64,
    pub lightness: f64,
}

/// Profiles for (primary, secondary, accent), hand-tuned design constants.
const VIBRANT: [RoleProfile; 3] = [
    RoleProfile::new((45.0, 55.0), (60.0, 80.0)),
    RoleProfile::new((50.0, 60.0), (50.0, 70.0)),
    RoleProfile::new((60.0, 70.0), (70.0, 90.0)),
];

const PASTEL: [RoleProfile; 3] = [
    RoleProfile::new((80.0, 90.0), (25.0, 40.0)),
    RoleProfile::new((82.0, 92.0), (20.0, 35.0)),
    RoleProfile::new((75.0, 85.0), (35.0, 50.0)),
];

const DARK: [RoleProfile; 3] = [
    RoleProfile::new((25.0, 35.0), (40.0, 60.0)),
    RoleProfile::new((30.0, 40.0), (35.0, 55.0)),
    RoleProfile::new((50.0, 60.0), (60.0, 80.0)),
];

impl VisualStyle {
    pub fn profile(self, role: ColorRole) -> RoleProfile {
        let table = match self {
            VisualStyle::Vibrant => &VIBRANT,
            VisualStyle::Pastel => &PASTEL,
            VisualStyle::Dark => &DARK,
        };
        match role {
            ColorRole::Primary => table[0],
            ColorRole::Secondary => table[1],
            ColorRole::Accent => table[2],
        }
    }
}
