use super::tables::{
    is_neutral_color, is_structural_pair, symmetric_contains, CATEGORY_INVALID, CATEGORY_VALID,
    COLOR_DEFAULT, COLOR_MONOCHROME, COLOR_NEUTRAL, COMPATIBLE_PATTERNS, FORMALITY_BY_DISTANCE,
    FORMALITY_DISTANT, OCCASION_BOTH, OCCASION_NEITHER, OCCASION_ONE, PATTERN_CLASH,
    PATTERN_COMPATIBLE, PATTERN_SAME, PATTERN_SOLID, STYLE_CLASH, STYLE_CLASHES, STYLE_DEFAULT,
    STYLE_SAME,
};
use crate::garment::{Garment, Occasion, Pattern};
use crate::settings::{settings, ScoringWeights};
use serde::Serialize;
use strum::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum RecommendationLevel {
    Excellent,
    Good,
    Fair,
    Avoid,
}

impl RecommendationLevel {
    pub fn from_score(score: f32) -> Self {
        let levels = &settings().scoring.levels;
        if score >= levels.excellent {
            RecommendationLevel::Excellent
        } else if score >= levels.good {
            RecommendationLevel::Good
        } else if score >= levels.fair {
            RecommendationLevel::Fair
        } else {
            RecommendationLevel::Avoid
        }
    }
}

pub fn formality_score(a: &Garment, b: &Garment) -> f32 {
    let distance = a.formality.distance(b.formality) as usize;
    FORMALITY_BY_DISTANCE
        .get(distance)
        .copied()
        .unwrap_or(FORMALITY_DISTANT)
}

/// Black or white on either side wins over every other color rule.
pub fn color_score(a: &Garment, b: &Garment) -> f32 {
    match (a.color.as_deref(), b.color.as_deref()) {
        (Some(ca), Some(cb)) => {
            if is_neutral_color(ca) || is_neutral_color(cb) {
                COLOR_NEUTRAL
            } else if ca == cb {
                COLOR_MONOCHROME
            } else {
                COLOR_DEFAULT
            }
        }
        (Some(c), None) | (None, Some(c)) if is_neutral_color(c) => COLOR_NEUTRAL,
        _ => COLOR_DEFAULT,
    }
}

pub fn pattern_score(a: &Garment, b: &Garment) -> f32 {
    match (&a.pattern, &b.pattern) {
        (Pattern::Solid, _) | (_, Pattern::Solid) => PATTERN_SOLID,
        (pa, pb) if pa == pb => PATTERN_SAME,
        (pa, pb) if symmetric_contains(COMPATIBLE_PATTERNS, pa.name(), pb.name()) => {
            PATTERN_COMPATIBLE
        }
        _ => PATTERN_CLASH,
    }
}

pub fn style_score(a: &Garment, b: &Garment) -> f32 {
    match (a.style.as_deref(), b.style.as_deref()) {
        (Some(sa), Some(sb)) if sa == sb => STYLE_SAME,
        (Some(sa), Some(sb)) if symmetric_contains(STYLE_CLASHES, sa, sb) => STYLE_CLASH,
        _ => STYLE_DEFAULT,
    }
}

/// Symmetric. A pair with a missing category is treated as a valid pairing.
pub fn category_score(a: &Garment, b: &Garment) -> f32 {
    match (a.category, b.category) {
        (Some(ca), Some(cb)) if !is_structural_pair(ca, cb) => CATEGORY_INVALID,
        _ => CATEGORY_VALID,
    }
}

pub fn occasion_score(a: &Garment, b: &Garment, occasion: Occasion) -> f32 {
    match (a.suits(occasion), b.suits(occasion)) {
        (true, true) => OCCASION_BOTH,
        (true, false) | (false, true) => OCCASION_ONE,
        (false, false) => OCCASION_NEITHER,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PairScore {
    pub first: String,
    pub second: String,
    pub formality: f32,
    pub color: f32,
    pub pattern: f32,
    pub style: f32,
    pub category: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub occasion: Option<f32>,
    pub overall: f32,
    pub level: RecommendationLevel,
    pub tips: Vec<String>,
}

impl PairScore {
    pub fn passes_formality(&self, min: f32) -> bool {
        self.formality >= min
    }
}

#[derive(Debug, Clone)]
pub struct PairScorer {
    weights: ScoringWeights,
    occasion: Option<Occasion>,
}

impl Default for PairScorer {
    fn default() -> Self {
        Self::new(settings().scoring.weights.clone())
    }
}

impl PairScorer {
    pub fn new(weights: ScoringWeights) -> Self {
        Self {
            weights,
            occasion: None,
        }
    }

    pub fn with_occasion(mut self, occasion: Option<Occasion>) -> Self {
        self.occasion = occasion;
        self
    }

    pub fn occasion(&self) -> Option<Occasion> {
        self.occasion
    }

    pub fn evaluate(&self, a: &Garment, b: &Garment) -> PairScore {
        let formality = formality_score(a, b);
        let color = color_score(a, b);
        let pattern = pattern_score(a, b);
        let style = style_score(a, b);
        let category = category_score(a, b);
        let occasion = self.occasion.map(|o| occasion_score(a, b, o));

        let w = &self.weights;
        let mut parts = vec![
            (formality, w.formality),
            (color, w.color),
            (style, w.style),
            (category, w.category),
            (pattern, w.pattern),
        ];
        // only counts when an occasion was requested
        if let Some(fit) = occasion {
            parts.push((fit, w.occasion));
        }
        let overall = weighted_mean(&parts).clamp(0.0, 1.0);

        let mut score = PairScore {
            first: a.id.clone(),
            second: b.id.clone(),
            formality,
            color,
            pattern,
            style,
            category,
            occasion,
            overall,
            level: RecommendationLevel::from_score(overall),
            tips: Vec::new(),
        };
        score.tips = styling_tips(a, b, &score);
        score
    }
}

/// Mean of `(value, weight)` pairs over the weight actually applied, so
/// configured weights need not sum to one. Zero total weight yields zero.
pub fn weighted_mean(parts: &[(f32, f32)]) -> f32 {
    let total: f32 = parts.iter().map(|(_, weight)| weight).sum();
    if total <= 0.0 {
        return 0.0;
    }
    parts.iter().map(|(value, weight)| value * weight).sum::<f32>() / total
}

pub fn score_pair(a: &Garment, b: &Garment) -> PairScore {
    PairScorer::default().evaluate(a, b)
}

fn styling_tips(a: &Garment, b: &Garment, score: &PairScore) -> Vec<String> {
    let mut tips = Vec::new();

    if score.formality <= FORMALITY_DISTANT {
        tips.push(format!(
            "{} and {} sit far apart in formality - dress one of them up or down",
            a.formality, b.formality
        ));
    }

    if let (Some(ca), Some(cb)) = (a.color.as_deref(), b.color.as_deref()) {
        if score.color >= COLOR_NEUTRAL {
            tips.push(format!("Great color harmony between {ca} and {cb}"));
        } else if score.color <= COLOR_DEFAULT {
            tips.push("Consider adding a neutral accessory to bridge the color gap".to_string());
        }
    }

    if score.pattern <= PATTERN_SAME {
        tips.push("Mix patterns carefully - try adding a solid piece to balance".to_string());
    }

    if score.style >= STYLE_SAME {
        tips.push("Perfect style match - this creates a cohesive look".to_string());
    } else if score.style <= STYLE_CLASH {
        if let (Some(sa), Some(sb)) = (a.style.as_deref(), b.style.as_deref()) {
            tips.push(format!("{sa} and {sb} styles clash - keep them in separate outfits"));
        }
    }

    tips
}
