use super::pair::{PairScore, PairScorer};
use super::tables::complements;
use crate::garment::Garment;

/// Ranks `wardrobe` items that can be worn with `target`, best first. Items of a
/// non-complementary category, without a category, or sharing the target's id are skipped.
pub fn find_best_pairings(
    scorer: &PairScorer,
    target: &Garment,
    wardrobe: &[Garment],
    max_results: usize,
) -> Vec<PairScore> {
    let Some(target_category) = target.category else {
        return Vec::new();
    };
    let compatible = complements(target_category);

    let mut results: Vec<PairScore> = wardrobe
        .iter()
        .filter(|item| item.id != target.id)
        .filter(|item| item.category.is_some_and(|c| compatible.contains(&c)))
        .map(|item| scorer.evaluate(target, item))
        .collect();

    results.sort_by(|a, b| b.overall.total_cmp(&a.overall));
    results.truncate(max_results);
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::garment::{Category, Formality};

    fn wardrobe() -> Vec<Garment> {
        vec![
            Garment::new("chinos", Category::Bottom, Formality::SmartCasual),
            Garment::new("jeans", Category::Bottom, Formality::Casual).with_color("blue"),
            Garment::new("other-tee", Category::Top, Formality::Casual),
            Garment::new("trousers", Category::Bottom, Formality::Formal),
            Garment::new("sneakers", Category::Shoes, Formality::Casual),
            Garment::new("mystery", Category::Bottom, Formality::Casual).without_category(),
        ]
    }

    #[test]
    fn test_pairings_ranked_and_filtered() {
        let tee = Garment::new("tee", Category::Top, Formality::Casual).with_color("blue");
        let results = find_best_pairings(&PairScorer::default(), &tee, &wardrobe(), 10);

        let ids: Vec<&str> = results.iter().map(|r| r.second.as_str()).collect();
        assert_eq!(ids[0], "jeans");
        assert!(!ids.contains(&"other-tee"));
        assert!(!ids.contains(&"mystery"));
        assert!(ids.contains(&"sneakers"));
        assert!(results.windows(2).all(|w| w[0].overall >= w[1].overall));
    }

    #[test]
    fn test_pairings_truncated() {
        let tee = Garment::new("tee", Category::Top, Formality::Casual);
        let results = find_best_pairings(&PairScorer::default(), &tee, &wardrobe(), 2);
        assert_eq!(results.len(), 2);
    }

    #[test]
    fn test_pairings_skip_self() {
        let items = wardrobe();
        let jeans = &items[1];
        let results = find_best_pairings(&PairScorer::default(), jeans, &items, 10);
        assert!(results.iter().all(|r| r.second != "jeans"));
    }

    #[test]
    fn test_uncategorised_target_has_no_pairings() {
        let target = Garment::new("x", Category::Top, Formality::Casual).without_category();
        assert!(find_best_pairings(&PairScorer::default(), &target, &wardrobe(), 10).is_empty());
    }
}
