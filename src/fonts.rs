// File: ./src/fonts.rs
//! Google Font pairings per business category.
//!
//! A strong headline face paired with a readable body face. Selection is
//! deterministic: the category decides the list, a character sum of the raw
//! input decides the entry.

use serde::Serialize;
use std::str::FromStr;
use strum::{AsRefStr, Display, EnumIter, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FontPair {
    pub headline: &'static str,
    pub body: &'static str,
    pub description: &'static str,
    pub mood: &'static str,
}

const fn pair(
    headline: &'static str,
    body: &'static str,
    description: &'static str,
    mood: &'static str,
) -> FontPair {
    FontPair {
        headline,
        body,
        description,
        mood,
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, EnumIter, EnumString, Display, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Category {
    Tech,
    Beauty,
    Food,
    Finance,
    Health,
    Creative,
    Ecommerce,
    Education,
    Travel,
    RealEstate,
    Gaming,
    Default,
}

const TECH: &[FontPair] = &[
    pair("Space Grotesk", "Inter", "Moderno e tech-forward", "innovative"),
    pair("Poppins", "Roboto", "Geometrico e clean", "modern"),
    pair("Work Sans", "Source Sans Pro", "Professionale e versatile", "corporate"),
    pair("DM Sans", "IBM Plex Sans", "Tech minimale", "minimal"),
];

const BEAUTY: &[FontPair] = &[
    pair("Playfair Display", "Montserrat", "Elegante e sofisticato", "luxury"),
    pair("Cormorant Garamond", "Lato", "Premium e raffinato", "elegant"),
    pair("Bodoni Moda", "Raleway", "Fashion-forward", "chic"),
    pair("Cinzel", "Quicksand", "Classico moderno", "sophisticated"),
];

const FOOD: &[FontPair] = &[
    pair("Satisfy", "Nunito", "Friendly e appetitoso", "warm"),
    pair("Pacifico", "Open Sans", "Casual e invitante", "friendly"),
    pair("Lobster", "Lato", "Giocoso e delizioso", "playful"),
    pair("Righteous", "Karla", "Energetico e gustoso", "vibrant"),
];

const FINANCE: &[FontPair] = &[
    pair("Montserrat", "Open Sans", "Solido e affidabile", "trustworthy"),
    pair("Roboto Slab", "Roboto", "Professionale e stabile", "corporate"),
    pair("IBM Plex Serif", "IBM Plex Sans", "Serio e credibile", "authoritative"),
    pair("Merriweather", "Lato", "Tradizionale e sicuro", "established"),
];

const HEALTH: &[FontPair] = &[
    pair("Quicksand", "Open Sans", "Calmo e accessibile", "caring"),
    pair("Nunito", "Roboto", "Friendly e rassicurante", "approachable"),
    pair("Rubik", "Source Sans Pro", "Moderno e salutare", "fresh"),
    pair("Karla", "Inter", "Pulito e professionale", "clinical"),
];

const CREATIVE: &[FontPair] = &[
    pair("Bebas Neue", "Raleway", "Bold e distintivo", "impactful"),
    pair("Oswald", "Lato", "Forte e dinamico", "energetic"),
    pair("Anton", "Source Sans Pro", "Drammatico e artistico", "bold"),
    pair("Archivo Black", "Karla", "Impattante e creativo", "striking"),
];

const ECOMMERCE: &[FontPair] = &[
    pair("Inter", "Inter", "Versatile e neutro", "universal"),
    pair("Poppins", "Open Sans", "Moderno e friendly", "accessible"),
    pair("Outfit", "Nunito Sans", "Clean e contemporaneo", "modern"),
    pair("Urbanist", "Roboto", "Urbano e chic", "trendy"),
];

const EDUCATION: &[FontPair] = &[
    pair("Lexend", "Source Sans Pro", "Leggibile e chiaro", "educational"),
    pair("Manrope", "Inter", "Friendly e professionale", "academic"),
    pair("Public Sans", "Open Sans", "Accessibile e neutro", "inclusive"),
    pair("Red Hat Display", "Red Hat Text", "Moderno educativo", "contemporary"),
];

const TRAVEL: &[FontPair] = &[
    pair("Abril Fatface", "Lato", "Avventuroso e attraente", "adventurous"),
    pair("Righteous", "Raleway", "Energetico ed esplorativo", "exciting"),
    pair("Amatic SC", "Josefin Sans", "Casual e rilassato", "laid-back"),
    pair("Barlow Condensed", "Barlow", "Dinamico e moderno", "contemporary"),
];

const REAL_ESTATE: &[FontPair] = &[
    pair("Playfair Display", "Open Sans", "Elegante e premium", "upscale"),
    pair("Cinzel", "Raleway", "Lussuoso e solido", "luxury"),
    pair("EB Garamond", "Source Sans Pro", "Classico e affidabile", "established"),
    pair("Libre Baskerville", "Lato", "Tradizionale e sicuro", "trustworthy"),
];

const GAMING: &[FontPair] = &[
    pair("Russo One", "Exo 2", "Futuristico e energetico", "futuristic"),
    pair("Orbitron", "Rajdhani", "Sci-fi e tech", "cyberpunk"),
    pair("Teko", "Titillium Web", "Gaming moderno", "competitive"),
    pair("Press Start 2P", "Roboto", "Retro gaming", "nostalgic"),
];

const DEFAULT: &[FontPair] = &[
    pair("Inter", "Inter", "Versatile per ogni settore", "neutral"),
    pair("Poppins", "Open Sans", "Moderno e pulito", "clean"),
    pair("Montserrat", "Lato", "Bilanciato e professionale", "balanced"),
];

// Scanned in order; the first category with a matching keyword wins.
const CATEGORY_KEYWORDS: &[(Category, &[&str])] = &[
    (
        Category::Tech,
        &[
            "tech", "saas", "software", "app", "startup", "digital", "ai", "cloud", "platform",
            "api",
        ],
    ),
    (
        Category::Beauty,
        &[
            "beauty", "fashion", "cosmetic", "makeup", "jewelry", "style", "boutique", "salon",
            "spa",
        ],
    ),
    (
        Category::Food,
        &[
            "food",
            "restaurant",
            "cafe",
            "delivery",
            "kitchen",
            "recipe",
            "dining",
            "catering",
            "bakery",
        ],
    ),
    (
        Category::Finance,
        &[
            "finance",
            "bank",
            "investment",
            "insurance",
            "accounting",
            "crypto",
            "trading",
            "loan",
            "mortgage",
        ],
    ),
    (
        Category::Health,
        &[
            "health",
            "medical",
            "wellness",
            "fitness",
            "hospital",
            "clinic",
            "therapy",
            "yoga",
            "nutrition",
        ],
    ),
    (
        Category::Creative,
        &[
            "creative",
            "agency",
            "design",
            "art",
            "studio",
            "portfolio",
            "marketing",
            "advertising",
            "media",
        ],
    ),
    (
        Category::Ecommerce,
        &[
            "ecommerce",
            "shop",
            "store",
            "retail",
            "marketplace",
            "shopping",
            "cart",
            "product",
        ],
    ),
    (
        Category::Education,
        &[
            "education",
            "learning",
            "course",
            "school",
            "university",
            "training",
            "academy",
            "tutorial",
        ],
    ),
    (
        Category::Travel,
        &[
            "travel",
            "tourism",
            "hotel",
            "vacation",
            "flight",
            "booking",
            "adventure",
            "trip",
            "destination",
        ],
    ),
    (
        Category::RealEstate,
        &[
            "real estate",
            "property",
            "home",
            "apartment",
            "housing",
            "realty",
            "rental",
            "broker",
        ],
    ),
    (
        Category::Gaming,
        &[
            "gaming",
            "game",
            "esports",
            "entertainment",
            "streaming",
            "console",
            "arcade",
        ],
    ),
];

impl Category {
    pub fn font_pairs(self) -> &'static [FontPair] {
        match self {
            Category::Tech => TECH,
            Category::Beauty => BEAUTY,
            Category::Food => FOOD,
            Category::Finance => FINANCE,
            Category::Health => HEALTH,
            Category::Creative => CREATIVE,
            Category::Ecommerce => ECOMMERCE,
            Category::Education => EDUCATION,
            Category::Travel => TRAVEL,
            Category::RealEstate => REAL_ESTATE,
            Category::Gaming => GAMING,
            Category::Default => DEFAULT,
        }
    }
}

/// Resolve free text to a category: exact key first, then the keyword scan
/// (keyword inside the text or the text inside a keyword), then `Default`.
pub fn detect_category(text: &str) -> Category {
    let normalized = text.trim().to_lowercase();

    if let Ok(category) = Category::from_str(&normalized) {
        return category;
    }

    CATEGORY_KEYWORDS
        .iter()
        .find(|(_, keywords)| {
            keywords
                .iter()
                .any(|k| normalized.contains(k) || k.contains(normalized.as_str()))
        })
        .map(|(category, _)| *category)
        .unwrap_or(Category::Default)
}

// Sum of UTF-16 code units of the raw, un-normalized input.
fn char_code_sum(text: &str) -> u64 {
    text.encode_utf16().map(u64::from).sum()
}

/// Deterministic font pair for a category text.
///
/// The raw input is hashed, so "TECH" and "tech" share a category but may
/// land on different entries.
pub fn select_font_pair(text: &str) -> FontPair {
    let pairs = detect_category(text).font_pairs();
    let index = (char_code_sum(text) % pairs.len() as u64) as usize;
    pairs[index]
}

pub fn font_pairs_for_category(text: &str) -> &'static [FontPair] {
    detect_category(text).font_pairs()
}

/// A random pair from the category's list. Not used by the default flow.
pub fn random_font_pair(text: &str) -> FontPair {
    let pairs = font_pairs_for_category(text);
    pairs[fastrand::usize(..pairs.len())]
}
