// File: ./src/model/report.rs
// Value types produced by the harmony analyzer and the quality scorer.
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Display grade of a harmony classification. Consumers rely on exactly
/// these four lowercase values.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
    Display,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum HarmonyQuality {
    Excellent,
    Good,
    Fair,
    Poor,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HarmonyReport {
    #[serde(rename = "type")]
    pub harmony_type: String,
    pub quality: HarmonyQuality,
    pub description: String,
}

impl HarmonyReport {
    pub(crate) fn new(harmony_type: &str, quality: HarmonyQuality, description: &str) -> Self {
        Self {
            harmony_type: harmony_type.to_string(),
            quality,
            description: description.to_string(),
        }
    }
}

/// One design-quality violation found by the scorer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
#[serde(rename_all = "snake_case")]
pub enum QualityIssue {
    MuddyPrimaryLightness,
    WeakSecondaryLightness,
    DullAccentSaturation,
    AccentLightnessOutOfRange,
    LowOverallSaturation,
    HuesTooSimilar,
}

impl QualityIssue {
    pub fn penalty(self) -> u8 {
        match self {
            QualityIssue::MuddyPrimaryLightness => 20,
            QualityIssue::WeakSecondaryLightness => 15,
            QualityIssue::DullAccentSaturation => 15,
            QualityIssue::AccentLightnessOutOfRange => 10,
            QualityIssue::LowOverallSaturation => 10,
            QualityIssue::HuesTooSimilar => 15,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            QualityIssue::MuddyPrimaryLightness => {
                "Primary: lightness nella zona intermedia (non ottimale per contrasto)"
            }
            QualityIssue::WeakSecondaryLightness => {
                "Secondary: lightness insufficiente per buon contrasto"
            }
            QualityIssue::DullAccentSaturation => "Accent: saturazione troppo bassa (poco vivace)",
            QualityIssue::AccentLightnessOutOfRange => {
                "Accent: lightness fuori dal range ottimale (40-70%)"
            }
            QualityIssue::LowOverallSaturation => {
                "Palette troppo desaturata (saturazione troppo bassa)"
            }
            QualityIssue::HuesTooSimilar => "Colori troppo simili tra loro (hue troppo vicine)",
        }
    }

    pub fn recommendation(self) -> &'static str {
        match self {
            QualityIssue::MuddyPrimaryLightness => {
                "Usa un colore più scuro (L<40%) o molto chiaro (L>80%) per il primary"
            }
            QualityIssue::WeakSecondaryLightness => {
                "Il secondary dovrebbe essere scuro (L<45%) o molto chiaro (L>75%)"
            }
            QualityIssue::DullAccentSaturation => {
                "Aumenta la saturazione dell'accent a >50% per creare focus visivo"
            }
            QualityIssue::AccentLightnessOutOfRange => {
                "L'accent dovrebbe avere lightness media per massima visibilità"
            }
            QualityIssue::LowOverallSaturation => {
                "Aumenta la saturazione complessiva per più personalità"
            }
            QualityIssue::HuesTooSimilar => "Aumenta la differenza di tonalità tra i colori",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualityReport {
    pub score: u8,
    pub issues: Vec<String>,
    pub recommendations: Vec<String>,
    #[serde(skip)]
    pub findings: Vec<QualityIssue>,
}

impl QualityReport {
    /// Start at 100 and apply every finding's penalty, floored at 0.
    pub fn from_findings(findings: Vec<QualityIssue>) -> Self {
        let total: u32 = findings.iter().map(|f| f.penalty() as u32).sum();
        let score = 100u32.saturating_sub(total) as u8;
        Self {
            score,
            issues: findings.iter().map(|f| f.message().to_string()).collect(),
            recommendations: findings
                .iter()
                .map(|f| f.recommendation().to_string())
                .collect(),
            findings,
        }
    }

    pub fn has(&self, issue: QualityIssue) -> bool {
        self.findings.contains(&issue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_score_floors_at_zero() {
        let all: Vec<_> = QualityIssue::iter().collect();
        // 20 + 15 + 15 + 10 + 10 + 15 = 85, so add a few repeats to go past 100
        let mut findings = all.clone();
        findings.extend(all);
        let report = QualityReport::from_findings(findings);
        assert_eq!(report.score, 0);
        assert_eq!(report.issues.len(), report.recommendations.len());
    }

    #[test]
    fn test_quality_serializes_lowercase() {
        let report = HarmonyReport::new("Analogo", HarmonyQuality::Excellent, "x");
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["type"], "Analogo");
        assert_eq!(json["quality"], "excellent");
    }
}
