mod pair;
mod ranking;
pub mod tables;

pub use pair::{
    category_score, color_score, formality_score, occasion_score, pattern_score, score_pair,
    style_score, weighted_mean, PairScore, PairScorer, RecommendationLevel,
};
pub use ranking::find_best_pairings;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::garment::{Category, Formality, Garment};
    use strum::IntoEnumIterator;

    fn blue_tshirt() -> Garment {
        Garment::new("blue-tshirt", Category::Top, Formality::Casual)
            .with_name("Blue Casual T-Shirt")
            .with_color("blue")
            .with_pattern("solid")
            .with_style("casual")
    }

    fn dark_blue_jeans() -> Garment {
        Garment::new("jeans", Category::Bottom, Formality::Casual)
            .with_name("Dark Blue Jeans")
            .with_color("blue")
            .with_pattern("solid")
            .with_style("casual")
    }

    fn black_formal_trousers() -> Garment {
        Garment::new("trousers", Category::Bottom, Formality::Formal)
            .with_name("Black Formal Trousers")
            .with_color("black")
            .with_style("business")
    }

    #[test]
    fn test_formality_monotonic_in_distance() {
        let anchor = Garment::new("a", Category::Top, Formality::VeryCasual);
        let scores: Vec<f32> = Formality::iter()
            .map(|f| formality_score(&anchor, &Garment::new("b", Category::Bottom, f)))
            .collect();
        assert!(scores.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn test_neutral_dominance() {
        let colors = ["black", "white", "blue", "red", "#4169e1", "beige"];
        for neutral in ["black", "white"] {
            let n = Garment::new("n", Category::Top, Formality::Casual).with_color(neutral);
            for color in colors {
                let c = Garment::new("c", Category::Bottom, Formality::Casual).with_color(color);
                assert!(color_score(&n, &c) >= 0.85, "{neutral} + {color}");
                assert!(color_score(&c, &n) >= 0.85, "{color} + {neutral}");
            }
        }
    }

    #[test]
    fn test_category_validity_gate() {
        let t = blue_tshirt();
        assert_eq!(category_score(&t, &dark_blue_jeans()), 0.90);
        assert_eq!(category_score(&t, &t), 0.10);
    }

    #[test]
    fn test_style_clash_symmetry() {
        let business = Garment::new("b", Category::Top, Formality::Business).with_style("business");
        let athletic = Garment::new("a", Category::Bottom, Formality::Casual).with_style("athletic");
        assert_eq!(style_score(&business, &athletic), 0.10);
        assert_eq!(style_score(&athletic, &business), 0.10);
    }

    #[test]
    fn test_score_deterministic_and_symmetric() {
        let a = blue_tshirt().with_pattern("striped");
        let b = black_formal_trousers().with_pattern("polka-dot");

        let first = score_pair(&a, &b);
        let second = score_pair(&a, &b);
        assert_eq!(first.overall.to_bits(), second.overall.to_bits());
        assert_eq!(first, second);

        let reversed = score_pair(&b, &a);
        assert_eq!(first.formality, reversed.formality);
        assert_eq!(first.color, reversed.color);
        assert_eq!(first.pattern, reversed.pattern);
        assert_eq!(first.style, reversed.style);
        assert_eq!(first.category, reversed.category);
        assert_eq!(first.overall, reversed.overall);
    }

    #[test]
    fn test_tshirt_and_jeans_score_high() {
        let score = score_pair(&blue_tshirt(), &dark_blue_jeans());
        assert!(score.overall >= 0.65, "got {}", score.overall);
    }

    #[test]
    fn test_tshirt_and_formal_trousers_score_low() {
        let jeans = score_pair(&blue_tshirt(), &dark_blue_jeans());
        let trousers = score_pair(&blue_tshirt(), &black_formal_trousers());
        assert!(trousers.overall <= 0.55, "got {}", trousers.overall);
        assert!(trousers.overall < jeans.overall);
    }

    #[test]
    fn test_all_scores_in_unit_range() {
        let items = [blue_tshirt(), dark_blue_jeans(), black_formal_trousers()];
        for a in &items {
            for b in &items {
                let s = score_pair(a, b);
                for v in [s.formality, s.color, s.pattern, s.style, s.category, s.overall] {
                    assert!((0.0..=1.0).contains(&v));
                }
            }
        }
    }
}
