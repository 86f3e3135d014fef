use crate::garment::{Category, Formality, Occasion};

pub const TABLES_VERSION: &str = "1.0";

pub const FORMALITY_LEVELS: [(Formality, u8); 5] = [
    (Formality::VeryCasual, 1),
    (Formality::Casual, 2),
    (Formality::SmartCasual, 3),
    (Formality::Business, 4),
    (Formality::Formal, 5),
];

pub const DEFAULT_FORMALITY: Formality = Formality::Casual;

pub const FORMALITY_ALIASES: &[(&str, Formality)] = &[
    ("athleisure", Formality::VeryCasual),
    ("smart", Formality::SmartCasual),
    ("business-casual", Formality::Business),
    ("semi-formal", Formality::Business),
    ("black-tie", Formality::Formal),
    ("evening", Formality::Formal),
];

/// Indexed by formality distance; anything further apart gets `FORMALITY_DISTANT`.
pub const FORMALITY_BY_DISTANCE: [f32; 3] = [0.95, 0.75, 0.50];
pub const FORMALITY_DISTANT: f32 = 0.20;

pub const COLOR_NEUTRAL: f32 = 0.85;
pub const COLOR_MONOCHROME: f32 = 0.80;
pub const COLOR_DEFAULT: f32 = 0.60;

pub const PATTERN_SOLID: f32 = 0.90;
pub const PATTERN_SAME: f32 = 0.40;
pub const PATTERN_COMPATIBLE: f32 = 0.80;
pub const PATTERN_CLASH: f32 = 0.30;

pub const STYLE_SAME: f32 = 0.90;
pub const STYLE_CLASH: f32 = 0.10;
pub const STYLE_DEFAULT: f32 = 0.60;

pub const CATEGORY_VALID: f32 = 0.90;
pub const CATEGORY_INVALID: f32 = 0.10;

pub const OCCASION_BOTH: f32 = 0.90;
pub const OCCASION_ONE: f32 = 0.60;
pub const OCCASION_NEITHER: f32 = 0.30;

pub const NEUTRAL_COLORS: &[&str] = &["black", "white"];

pub const SHADE_MODIFIERS: &[&str] = &[
    "dark", "light", "pale", "deep", "bright", "dusty", "soft", "muted", "pastel", "neon",
];

pub const HEX_COLOR_NAMES: &[(&str, &str)] = &[
    ("#000", "black"),
    ("#000000", "black"),
    ("#fff", "white"),
    ("#ffffff", "white"),
];

pub const PATTERN_ALIASES: &[(&str, &str)] = &[
    ("plain", "solid"),
    ("stripes", "striped"),
    ("stripe", "striped"),
    ("pinstripe", "striped"),
    ("polka-dots", "polka-dot"),
    ("dots", "polka-dot"),
    ("dotted", "polka-dot"),
    ("checkered", "plaid"),
    ("checked", "plaid"),
    ("tartan", "plaid"),
    ("animal-print", "animal"),
    ("leopard", "animal"),
    ("zebra", "animal"),
];

/// Symmetric.
pub const COMPATIBLE_PATTERNS: &[(&str, &str)] = &[("striped", "polka-dot")];

/// Symmetric.
pub const STYLE_CLASHES: &[(&str, &str)] = &[("business", "athletic")];

/// Symmetric.
pub const STRUCTURAL_PAIRS: &[(Category, Category)] = &[(Category::Top, Category::Bottom)];

pub const CATEGORY_ALIASES: &[(&str, Category)] = &[
    ("tops", Category::Top),
    ("shirt", Category::Top),
    ("bottoms", Category::Bottom),
    ("pants", Category::Bottom),
    ("dresses", Category::Dress),
    ("jacket", Category::Outerwear),
    ("coat", Category::Outerwear),
    ("shoe", Category::Shoes),
    ("footwear", Category::Shoes),
    ("accessories", Category::Accessory),
];

pub const CATEGORY_COMPLEMENTS: &[(Category, &[Category])] = &[
    (
        Category::Top,
        &[Category::Bottom, Category::Outerwear, Category::Shoes, Category::Accessory],
    ),
    (
        Category::Bottom,
        &[Category::Top, Category::Outerwear, Category::Shoes, Category::Accessory],
    ),
    (
        Category::Dress,
        &[Category::Outerwear, Category::Shoes, Category::Accessory],
    ),
    (
        Category::Outerwear,
        &[
            Category::Top,
            Category::Bottom,
            Category::Dress,
            Category::Shoes,
            Category::Accessory,
        ],
    ),
    (
        Category::Shoes,
        &[
            Category::Top,
            Category::Bottom,
            Category::Dress,
            Category::Outerwear,
            Category::Accessory,
        ],
    ),
    (
        Category::Accessory,
        &[
            Category::Top,
            Category::Bottom,
            Category::Dress,
            Category::Outerwear,
            Category::Shoes,
        ],
    ),
];

/// Fill order for outfit assembly. Outerwear is only filled on request.
pub const OUTFIT_SLOTS: [Category; 5] = [
    Category::Top,
    Category::Bottom,
    Category::Outerwear,
    Category::Shoes,
    Category::Accessory,
];

pub const SUBSUMED_SLOTS: &[(Category, &[Category])] =
    &[(Category::Dress, &[Category::Top, Category::Bottom])];

pub const OCCASION_FORMALITY: &[(Occasion, Formality)] = &[
    (Occasion::Casual, Formality::Casual),
    (Occasion::Weekend, Formality::Casual),
    (Occasion::SmartCasual, Formality::SmartCasual),
    (Occasion::Date, Formality::SmartCasual),
    (Occasion::Party, Formality::SmartCasual),
    (Occasion::BusinessCasual, Formality::Business),
    (Occasion::Work, Formality::Business),
    (Occasion::Formal, Formality::Formal),
];

pub fn symmetric_contains<T: PartialEq + ?Sized>(pairs: &[(&T, &T)], a: &T, b: &T) -> bool {
    pairs
        .iter()
        .any(|(x, y)| (*x == a && *y == b) || (*x == b && *y == a))
}

pub fn is_structural_pair(a: Category, b: Category) -> bool {
    STRUCTURAL_PAIRS
        .iter()
        .any(|&(x, y)| (x == a && y == b) || (x == b && y == a))
}

pub fn complements(category: Category) -> &'static [Category] {
    CATEGORY_COMPLEMENTS
        .iter()
        .find(|(c, _)| *c == category)
        .map(|(_, list)| *list)
        .unwrap_or(&[])
}

pub fn subsumed_by(category: Category) -> &'static [Category] {
    SUBSUMED_SLOTS
        .iter()
        .find(|(c, _)| *c == category)
        .map(|(_, list)| *list)
        .unwrap_or(&[])
}

pub fn is_neutral_color(color: &str) -> bool {
    NEUTRAL_COLORS.contains(&color)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formality_levels_are_ordered() {
        assert!(FORMALITY_LEVELS.windows(2).all(|w| w[0].1 < w[1].1));
        assert_eq!(FORMALITY_LEVELS.first().map(|l| l.1), Some(1));
        assert_eq!(FORMALITY_LEVELS.last().map(|l| l.1), Some(5));
    }

    #[test]
    fn test_formality_scores_never_increase() {
        assert!(FORMALITY_BY_DISTANCE.windows(2).all(|w| w[0] >= w[1]));
        assert!(FORMALITY_BY_DISTANCE.iter().all(|&s| s >= FORMALITY_DISTANT));
    }

    #[test]
    fn test_symmetric_lookup() {
        assert!(symmetric_contains(COMPATIBLE_PATTERNS, "polka-dot", "striped"));
        assert!(symmetric_contains(STYLE_CLASHES, "athletic", "business"));
        assert!(!symmetric_contains(STYLE_CLASHES, "athletic", "casual"));
    }

    #[test]
    fn test_complements_exclude_self() {
        for (category, list) in CATEGORY_COMPLEMENTS {
            assert!(!list.contains(category), "{category} complements itself");
        }
        assert!(!complements(Category::Dress).contains(&Category::Top));
    }

    #[test]
    fn test_every_occasion_has_target_formality() {
        use strum::IntoEnumIterator;
        for occasion in Occasion::iter() {
            assert!(OCCASION_FORMALITY.iter().any(|(o, _)| *o == occasion));
        }
    }
}
