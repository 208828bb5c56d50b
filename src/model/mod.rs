// File: ./src/model/mod.rs
pub mod palette;
pub mod report;
pub mod style;

pub use palette::{Palette, PaletteRequest, PaletteSize};
pub use report::{HarmonyQuality, HarmonyReport, QualityIssue, QualityReport};
pub use style::{ColorRole, HarmonyScheme, RoleProfile, StyleRange, Tone, VisualStyle};
