use crate::garment::Garment;
use crate::scoring::PairScorer;
use crate::settings::settings;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutfitValidation {
    pub is_valid: bool,
    pub issues: Vec<String>,
    pub score: f32,
}

/// Scores every unordered pair of `items`. An outfit is valid when the mean
/// score clears the configured bar and no single pair falls below the issue threshold.
pub fn validate_outfit<'a>(items: impl IntoIterator<Item = &'a Garment>) -> OutfitValidation {
    let items: Vec<&Garment> = items.into_iter().collect();
    if items.len() < 2 {
        return OutfitValidation {
            is_valid: false,
            issues: vec!["Outfit must contain at least 2 items".to_string()],
            score: 0.0,
        };
    }

    let s = settings();
    let scorer = PairScorer::default();
    let mut issues = Vec::new();
    let mut total = 0.0;
    let mut pairs = 0usize;

    for (i, a) in items.iter().enumerate() {
        for b in &items[i + 1..] {
            let score = scorer.evaluate(a, b);
            total += score.overall;
            pairs += 1;

            if score.overall < s.outfit.pair_issue_below {
                issues.push(format!(
                    "{} and {} may not work well together",
                    a.display_name(),
                    b.display_name()
                ));
            }
        }
    }

    let score = total / pairs as f32;
    OutfitValidation {
        is_valid: score >= s.outfit.valid_mean_score && issues.is_empty(),
        issues,
        score,
    }
}
