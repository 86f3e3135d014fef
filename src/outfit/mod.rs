mod validate;

pub use validate::{validate_outfit, OutfitValidation};

use crate::garment::{Category, Garment, Occasion};
use crate::scoring::tables::{subsumed_by, OUTFIT_SLOTS};
use crate::scoring::{PairScore, PairScorer};
use crate::settings::settings;
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Clone, Copy, Default)]
pub struct AssemblyOptions {
    pub include_outerwear: bool,
    pub occasion: Option<Occasion>,
}

impl AssemblyOptions {
    fn slots(&self, anchor: Option<Category>) -> Vec<Category> {
        let subsumed = anchor.map(subsumed_by).unwrap_or(&[]);
        OUTFIT_SLOTS
            .into_iter()
            .filter(|slot| self.include_outerwear || *slot != Category::Outerwear)
            .filter(|slot| Some(*slot) != anchor && !subsumed.contains(slot))
            .collect()
    }
}

#[derive(Debug, Clone)]
pub struct OutfitPiece<'a> {
    pub garment: &'a Garment,
    pub score: PairScore,
}

#[derive(Debug, Clone)]
pub struct Outfit<'a> {
    pub anchor: &'a Garment,
    pub pieces: Vec<OutfitPiece<'a>>,
}

impl<'a> Outfit<'a> {
    /// Anchor first, then the pieces in slot order.
    pub fn items(&self) -> impl Iterator<Item = &'a Garment> + '_ {
        std::iter::once(self.anchor).chain(self.pieces.iter().map(|p| p.garment))
    }

    pub fn item_count(&self) -> usize {
        1 + self.pieces.len()
    }

    pub fn is_anchor_only(&self) -> bool {
        self.pieces.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.items().any(|g| g.id == id)
    }

    pub fn get(&self, category: Category) -> Option<&'a Garment> {
        self.items().find(|g| g.category == Some(category))
    }

    pub fn validate(&self) -> OutfitValidation {
        validate_outfit(self.items())
    }

    pub fn analysis(&self) -> Option<StylingAnalysis> {
        StylingAnalysis::from_scores(self.pieces.iter().map(|p| &p.score))
    }
}

/// Per-axis means over the anchor pairs of an outfit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StylingAnalysis {
    #[serde(rename = "formality_score")]
    pub formality: f32,
    #[serde(rename = "color_harmony_score")]
    pub color: f32,
    #[serde(rename = "style_coherence_score")]
    pub style: f32,
    #[serde(rename = "pattern_compatibility_score")]
    pub pattern: f32,
    #[serde(rename = "category_score")]
    pub category: f32,
    #[serde(rename = "occasion_fit_score", skip_serializing_if = "Option::is_none")]
    pub occasion: Option<f32>,
    #[serde(rename = "overall_score")]
    pub overall: f32,
}

impl StylingAnalysis {
    pub fn from_scores<'s>(scores: impl IntoIterator<Item = &'s PairScore>) -> Option<Self> {
        let scores: Vec<&PairScore> = scores.into_iter().collect();
        if scores.is_empty() {
            return None;
        }

        let mean = |f: fn(&PairScore) -> f32| -> f32 {
            scores.iter().map(|&s| f(s)).sum::<f32>() / scores.len() as f32
        };
        let occasion = scores
            .iter()
            .map(|s| s.occasion)
            .collect::<Option<Vec<f32>>>()
            .map(|fits| fits.iter().sum::<f32>() / fits.len() as f32);

        Some(Self {
            formality: mean(|s| s.formality),
            color: mean(|s| s.color),
            style: mean(|s| s.style),
            pattern: mean(|s| s.pattern),
            category: mean(|s| s.category),
            occasion,
            overall: mean(|s| s.overall),
        })
    }
}

pub fn assemble_outfit<'a>(anchor: &'a Garment, wardrobe: &'a [Garment]) -> Outfit<'a> {
    assemble_outfit_with(anchor, wardrobe, &AssemblyOptions::default())
}

/// Fills each open slot with the candidate scoring best against the anchor.
/// Candidates below the formality acceptance threshold are never chosen, so a
/// slot without an acceptable candidate stays empty.
pub fn assemble_outfit_with<'a>(
    anchor: &'a Garment,
    wardrobe: &'a [Garment],
    options: &AssemblyOptions,
) -> Outfit<'a> {
    let min_formality = settings().outfit.min_formality_score;
    let scorer = PairScorer::default().with_occasion(options.occasion);

    let uncategorised = wardrobe.iter().filter(|g| g.category.is_none()).count();
    if uncategorised > 0 {
        debug!(count = uncategorised, "skipping wardrobe items without a category");
    }

    let mut pieces = Vec::new();
    for slot in options.slots(anchor.category) {
        let mut best: Option<OutfitPiece<'a>> = None;

        for candidate in wardrobe
            .iter()
            .filter(|g| g.category == Some(slot) && g.id != anchor.id)
        {
            let score = scorer.evaluate(anchor, candidate);
            if !score.passes_formality(min_formality) {
                debug!(
                    anchor = %anchor.id,
                    candidate = %candidate.id,
                    formality = score.formality,
                    "candidate rejected on formality"
                );
                continue;
            }
            if best
                .as_ref()
                .map_or(true, |b| score.overall > b.score.overall)
            {
                best = Some(OutfitPiece {
                    garment: candidate,
                    score,
                });
            }
        }

        match best {
            Some(piece) => pieces.push(piece),
            None => debug!(anchor = %anchor.id, %slot, "no acceptable candidate for slot"),
        }
    }

    Outfit { anchor, pieces }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::garment::Formality;

    fn black_cocktail_dress() -> Garment {
        Garment::new("dress", Category::Dress, Formality::Formal)
            .with_name("Black Cocktail Dress")
            .with_color("black")
            .with_style("elegant")
    }

    fn evening_wardrobe() -> Vec<Garment> {
        vec![
            Garment::new("heels", Category::Shoes, Formality::Formal)
                .with_name("Black Heels")
                .with_color("black"),
            Garment::new("necklace", Category::Accessory, Formality::Formal)
                .with_name("Pearl Necklace"),
            Garment::new("sneakers", Category::Shoes, Formality::Casual)
                .with_name("Casual Sneakers"),
        ]
    }

    #[test]
    fn test_dress_outfit_picks_formal_shoes_and_necklace() {
        let dress = black_cocktail_dress();
        let wardrobe = evening_wardrobe();
        let outfit = assemble_outfit(&dress, &wardrobe);

        assert_eq!(outfit.get(Category::Shoes).map(|g| g.id.as_str()), Some("heels"));
        assert!(outfit.contains("necklace"));
        assert!(!outfit.contains("sneakers"));
        assert_eq!(outfit.item_count(), 3);
    }

    #[test]
    fn test_empty_wardrobe_yields_anchor_only() {
        let dress = black_cocktail_dress();
        let outfit = assemble_outfit(&dress, &[]);

        assert!(outfit.is_anchor_only());
        assert_eq!(outfit.items().count(), 1);
        assert!(outfit.analysis().is_none());
    }

    #[test]
    fn test_no_complementary_items_yields_anchor_only() {
        let dress = black_cocktail_dress();
        let wardrobe = vec![
            Garment::new("tee", Category::Top, Formality::Formal),
            Garment::new("other-dress", Category::Dress, Formality::Formal),
        ];
        assert!(assemble_outfit(&dress, &wardrobe).is_anchor_only());
    }

    #[test]
    fn test_slot_left_empty_when_formality_too_far() {
        let tee = Garment::new("tee", Category::Top, Formality::VeryCasual);
        let wardrobe = vec![
            Garment::new("tux-pants", Category::Bottom, Formality::Formal),
            Garment::new("oxfords", Category::Shoes, Formality::Business),
        ];
        let outfit = assemble_outfit(&tee, &wardrobe);
        assert!(outfit.is_anchor_only());
    }

    #[test]
    fn test_top_anchor_fills_bottom_shoes_accessory() {
        let tee = Garment::new("tee", Category::Top, Formality::Casual).with_color("blue");
        let wardrobe = vec![
            Garment::new("other-tee", Category::Top, Formality::Casual),
            Garment::new("jeans", Category::Bottom, Formality::Casual).with_color("blue"),
            Garment::new("chinos", Category::Bottom, Formality::SmartCasual),
            Garment::new("sneakers", Category::Shoes, Formality::Casual),
            Garment::new("cap", Category::Accessory, Formality::VeryCasual),
            Garment::new("sundress", Category::Dress, Formality::Casual),
            Garment::new("parka", Category::Outerwear, Formality::Casual),
        ];
        let outfit = assemble_outfit(&tee, &wardrobe);

        let ids: Vec<&str> = outfit.items().map(|g| g.id.as_str()).collect();
        assert_eq!(ids, vec!["tee", "jeans", "sneakers", "cap"]);
    }

    #[test]
    fn test_outerwear_slot_on_request() {
        let tee = Garment::new("tee", Category::Top, Formality::Casual);
        let wardrobe = vec![Garment::new("parka", Category::Outerwear, Formality::Casual)];

        assert!(assemble_outfit(&tee, &wardrobe).is_anchor_only());

        let options = AssemblyOptions {
            include_outerwear: true,
            occasion: None,
        };
        let layered = assemble_outfit_with(&tee, &wardrobe, &options);
        assert!(layered.contains("parka"));
    }

    #[test]
    fn test_ties_keep_wardrobe_order() {
        let tee = Garment::new("tee", Category::Top, Formality::Casual);
        let wardrobe = vec![
            Garment::new("first", Category::Shoes, Formality::Casual),
            Garment::new("second", Category::Shoes, Formality::Casual),
        ];
        let outfit = assemble_outfit(&tee, &wardrobe);
        assert_eq!(outfit.get(Category::Shoes).map(|g| g.id.as_str()), Some("first"));
    }

    #[test]
    fn test_uncategorised_items_skipped() {
        let tee = Garment::new("tee", Category::Top, Formality::Casual);
        let wardrobe = vec![
            Garment::new("broken", Category::Bottom, Formality::Casual).without_category(),
            Garment::new("jeans", Category::Bottom, Formality::Casual),
        ];
        let outfit = assemble_outfit(&tee, &wardrobe);
        assert!(!outfit.contains("broken"));
        assert!(outfit.contains("jeans"));
    }

    #[test]
    fn test_uncategorised_anchor_fills_every_slot() {
        let anchor = Garment::new("mystery", Category::Top, Formality::Casual).without_category();
        let wardrobe = vec![
            Garment::new("tee", Category::Top, Formality::Casual),
            Garment::new("jeans", Category::Bottom, Formality::Casual),
        ];
        assert_eq!(assemble_outfit(&anchor, &wardrobe).item_count(), 3);
    }

    #[test]
    fn test_analysis_means_anchor_pairs() {
        let dress = black_cocktail_dress();
        let wardrobe = evening_wardrobe();
        let options = AssemblyOptions {
            include_outerwear: false,
            occasion: Some(Occasion::Formal),
        };
        let outfit = assemble_outfit_with(&dress, &wardrobe, &options);
        let analysis = outfit.analysis().unwrap();

        assert!((analysis.formality - 0.95).abs() < 1e-6);
        assert_eq!(analysis.occasion, Some(0.90));
        assert!(analysis.overall > 0.0 && analysis.overall <= 1.0);
    }
}
