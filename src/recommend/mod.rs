mod advice;
mod palette;
mod request;

pub use advice::{primary_palette, recommended_colors, styling_tips};
pub use palette::{color_tier, skin_tone_score, Palette, Swatch};
pub use request::{RecommendationQuery, RecommendationRequest, RequestError, SkinTone, Weather};

use crate::garment::{Category, Garment};
use crate::outfit::{assemble_outfit_with, AssemblyOptions, Outfit, StylingAnalysis};
use crate::scoring::tables::TABLES_VERSION;
use crate::scoring::{weighted_mean, RecommendationLevel};
use crate::settings::settings;
use chrono::Utc;
use serde::Serialize;
use std::collections::{BTreeSet, HashSet};
use tracing::{debug, info};

pub const API_VERSION: &str = "v1";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendedItem {
    pub item_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub category: Option<Category>,
    pub primary_color: Option<String>,
    pub style: Option<String>,
}

impl From<&Garment> for RecommendedItem {
    fn from(garment: &Garment) -> Self {
        Self {
            item_id: garment.id.clone(),
            name: garment.name.clone(),
            category: garment.category,
            primary_color: garment.color.clone(),
            style: garment.style.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorCoordination {
    pub primary_palette: Vec<String>,
    pub skin_tone_score: f32,
    pub styling_advice: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub outfit_id: String,
    pub rank: usize,
    pub confidence_score: f32,
    pub recommendation_level: RecommendationLevel,
    pub items: Vec<RecommendedItem>,
    pub styling_analysis: StylingAnalysis,
    pub styling_tips: Vec<String>,
    pub color_coordination: ColorCoordination,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserAnalysis {
    pub skin_tone: SkinTone,
    pub wardrobe_size: usize,
    pub recommended_colors: Vec<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Metadata {
    pub generated_at: String,
    pub api_version: &'static str,
    pub algorithm_version: &'static str,
    pub outfits_considered: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationResponse {
    pub recommendations: Vec<Recommendation>,
    pub request_context: RecommendationRequest,
    pub user_analysis: UserAnalysis,
    pub metadata: Metadata,
}

fn round2(value: f32) -> f32 {
    (value * 100.0).round() / 100.0
}

/// The requested item, else every top and dress, else every categorised garment.
fn select_anchors<'a>(
    wardrobe: &'a [Garment],
    item_id: Option<&str>,
) -> Result<Vec<&'a Garment>, RequestError> {
    if let Some(id) = item_id {
        return wardrobe
            .iter()
            .find(|g| g.id == id)
            .map(|g| vec![g])
            .ok_or_else(|| RequestError::UnknownItem(id.to_string()));
    }

    let primary: Vec<&Garment> = wardrobe
        .iter()
        .filter(|g| matches!(g.category, Some(Category::Top | Category::Dress)))
        .collect();
    if !primary.is_empty() {
        return Ok(primary);
    }

    Ok(wardrobe.iter().filter(|g| g.category.is_some()).collect())
}

/// Mean overall score blended with the skin-tone fit and, when one was
/// scored, the mean occasion fit.
fn confidence(analysis: &StylingAnalysis, skin_tone_fit: f32) -> f32 {
    let recommend = &settings().recommend;
    let overall_weight = 1.0 - recommend.occasion_blend - recommend.skin_tone_blend;

    let mut parts = vec![
        (analysis.overall, overall_weight),
        (skin_tone_fit, recommend.skin_tone_blend),
    ];
    if let Some(fit) = analysis.occasion {
        parts.push((fit, recommend.occasion_blend));
    }
    weighted_mean(&parts).clamp(0.0, 1.0)
}

struct Candidate<'a> {
    outfit: Outfit<'a>,
    analysis: StylingAnalysis,
    skin_tone_fit: f32,
    confidence: f32,
}

pub fn recommend(
    wardrobe: &[Garment],
    request: &RecommendationRequest,
) -> Result<RecommendationResponse, RequestError> {
    request.validate()?;
    if wardrobe.is_empty() {
        return Err(RequestError::EmptyWardrobe);
    }

    let anchors = select_anchors(wardrobe, request.item_id.as_deref())?;
    let options = AssemblyOptions {
        include_outerwear: request.weather.needs_layers(),
        occasion: Some(request.occasion),
    };

    let mut seen: HashSet<BTreeSet<&str>> = HashSet::new();
    let mut candidates: Vec<Candidate> = Vec::new();

    for &anchor in &anchors {
        let outfit = assemble_outfit_with(anchor, wardrobe, &options);
        let Some(analysis) = outfit.analysis() else {
            debug!(anchor = %anchor.id, "no pieces could be paired with anchor");
            continue;
        };

        let key: BTreeSet<&str> = outfit.items().map(|g| g.id.as_str()).collect();
        if !seen.insert(key) {
            debug!(anchor = %anchor.id, "duplicate outfit dropped");
            continue;
        }

        let skin_tone_fit = skin_tone_score(outfit.items(), request.skin_tone);
        candidates.push(Candidate {
            confidence: confidence(&analysis, skin_tone_fit),
            outfit,
            analysis,
            skin_tone_fit,
        });
    }

    let considered = candidates.len();
    candidates.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));
    candidates.truncate(request.max_recommendations as usize);

    let recommendations: Vec<Recommendation> = candidates
        .into_iter()
        .enumerate()
        .map(|(i, c)| {
            let rank = i + 1;
            Recommendation {
                outfit_id: format!("outfit_{rank}"),
                rank,
                confidence_score: round2(c.confidence),
                recommendation_level: RecommendationLevel::from_score(c.confidence),
                items: c.outfit.items().map(RecommendedItem::from).collect(),
                styling_analysis: c.analysis,
                styling_tips: styling_tips(c.outfit.items(), request.occasion, request.weather),
                color_coordination: ColorCoordination {
                    primary_palette: primary_palette(c.outfit.items()),
                    skin_tone_score: round2(c.skin_tone_fit),
                    styling_advice: request.skin_tone.color_advice(),
                },
            }
        })
        .collect();

    info!(
        anchors = anchors.len(),
        considered,
        returned = recommendations.len(),
        occasion = %request.occasion,
        weather = %request.weather,
        skin_tone = %request.skin_tone,
        "outfit recommendations ready"
    );

    Ok(RecommendationResponse {
        recommendations,
        request_context: request.clone(),
        user_analysis: UserAnalysis {
            skin_tone: request.skin_tone,
            wardrobe_size: wardrobe.len(),
            recommended_colors: recommended_colors(request.skin_tone),
        },
        metadata: Metadata {
            generated_at: Utc::now().to_rfc3339(),
            api_version: API_VERSION,
            algorithm_version: TABLES_VERSION,
            outfits_considered: considered,
        },
    })
}
