use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::sync::OnceLock;
use tracing::warn;

static SETTINGS: OnceLock<Settings> = OnceLock::new();

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub scoring: Scoring,
    pub outfit: Outfit,
    pub recommend: Recommend,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scoring {
    pub weights: ScoringWeights,
    pub levels: LevelThresholds,
}

/// Weights of the overall pair score. Pattern and occasion default to zero,
/// so they are reported alongside the overall score but not summed into it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub formality: f32,
    pub color: f32,
    pub style: f32,
    pub category: f32,
    pub pattern: f32,
    pub occasion: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelThresholds {
    pub excellent: f32,
    pub good: f32,
    pub fair: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Outfit {
    pub min_formality_score: f32,
    pub pair_issue_below: f32,
    pub valid_mean_score: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommend {
    pub default_max: u32,
    pub max_limit: u32,
    pub max_tips: usize,
    pub occasion_blend: f32,
    pub skin_tone_blend: f32,
    pub recommended_colors: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            scoring: Scoring {
                weights: ScoringWeights {
                    formality: 0.40,
                    color: 0.25,
                    style: 0.20,
                    category: 0.15,
                    pattern: 0.0,
                    occasion: 0.0,
                },
                levels: LevelThresholds {
                    excellent: 0.80,
                    good: 0.65,
                    fair: 0.40,
                },
            },
            outfit: Outfit {
                min_formality_score: 0.50,
                pair_issue_below: 0.40,
                valid_mean_score: 0.50,
            },
            recommend: Recommend {
                default_max: 5,
                max_limit: 10,
                max_tips: 3,
                occasion_blend: 0.20,
                skin_tone_blend: 0.15,
                recommended_colors: 5,
            },
        }
    }
}

impl Settings {
    pub fn load() -> &'static Settings {
        SETTINGS.get_or_init(Self::load_from_files)
    }

    fn load_from_files() -> Settings {
        let default_path = Path::new("settings.default.ron");
        let override_path = Path::new("settings.ron");

        let mut settings = read_settings(default_path).unwrap_or_default();

        if let Some(overrides) = read_settings(override_path) {
            settings = overrides;
        }

        settings
    }
}

fn read_settings(path: &Path) -> Option<Settings> {
    if !path.exists() {
        return None;
    }

    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "failed to read settings");
            return None;
        }
    };

    match ron::from_str::<Settings>(&content) {
        Ok(settings) => Some(settings),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "ignoring malformed settings");
            None
        }
    }
}

pub fn settings() -> &'static Settings {
    Settings::load()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights_sum_to_one() {
        let w = Settings::default().scoring.weights;
        let total = w.formality + w.color + w.style + w.category + w.pattern + w.occasion;
        assert!((total - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_settings_ron_roundtrip_keeps_limits() {
        let text = ron::to_string(&Settings::default()).unwrap();
        let parsed: Settings = ron::from_str(&text).unwrap();
        assert_eq!(parsed.recommend.max_limit, 10);
        assert_eq!(parsed.recommend.default_max, 5);
    }

    #[test]
    fn test_confidence_blends_leave_room_for_overall() {
        let r = Settings::default().recommend;
        assert!(r.occasion_blend + r.skin_tone_blend < 1.0);
    }

    #[test]
    fn test_shipped_defaults_parse() {
        let shipped: Settings = ron::from_str(include_str!("../settings.default.ron")).unwrap();
        let defaults = Settings::default();
        assert_eq!(shipped.scoring.weights.formality, defaults.scoring.weights.formality);
        assert_eq!(shipped.outfit.min_formality_score, defaults.outfit.min_formality_score);
        assert_eq!(shipped.recommend.max_tips, defaults.recommend.max_tips);
        assert_eq!(shipped.recommend.skin_tone_blend, defaults.recommend.skin_tone_blend);
    }
}
