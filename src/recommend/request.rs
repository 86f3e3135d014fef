use crate::garment::{normalize_tag, Occasion};
use crate::settings::settings;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};
use thiserror::Error;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, EnumIter, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Weather {
    Hot,
    Warm,
    #[default]
    Mild,
    Cool,
    Cold,
    Rainy,
    Sunny,
}

impl Weather {
    pub fn needs_layers(self) -> bool {
        matches!(self, Weather::Cool | Weather::Cold | Weather::Rainy)
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, EnumIter, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum SkinTone {
    Cool,
    Warm,
    #[default]
    Neutral,
}

fn one_of<T: IntoEnumIterator + fmt::Display>() -> String {
    T::iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RequestError {
    #[error("Invalid occasion. Must be one of: {}", one_of::<Occasion>())]
    InvalidOccasion(String),

    #[error("Invalid weather. Must be one of: {}", one_of::<Weather>())]
    InvalidWeather(String),

    #[error("Invalid skin_tone. Must be one of: {}", one_of::<SkinTone>())]
    InvalidSkinTone(String),

    #[error("max_recommendations must be between 1 and {max}")]
    MaxRecommendationsOutOfRange { value: i64, max: u32 },

    #[error("No wardrobe items found for user")]
    EmptyWardrobe,

    #[error("Wardrobe item not found: {0}")]
    UnknownItem(String),
}

/// Raw query parameters as received by the API layer.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RecommendationQuery {
    pub occasion: Option<String>,
    pub weather: Option<String>,
    pub skin_tone: Option<String>,
    pub max_recommendations: Option<i64>,
    pub item_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationRequest {
    pub occasion: Occasion,
    pub weather: Weather,
    pub skin_tone: SkinTone,
    pub max_recommendations: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_id: Option<String>,
}

impl Default for RecommendationRequest {
    fn default() -> Self {
        Self {
            occasion: Occasion::default(),
            weather: Weather::default(),
            skin_tone: SkinTone::default(),
            max_recommendations: settings().recommend.default_max,
            item_id: None,
        }
    }
}

impl RecommendationRequest {
    pub fn validate(&self) -> Result<(), RequestError> {
        check_max(self.max_recommendations as i64).map(|_| ())
    }
}

fn check_max(value: i64) -> Result<u32, RequestError> {
    let max = settings().recommend.max_limit;
    if (1..=max as i64).contains(&value) {
        Ok(value as u32)
    } else {
        Err(RequestError::MaxRecommendationsOutOfRange { value, max })
    }
}

fn parse_enum<T: FromStr>(raw: &str) -> Option<T> {
    let tag = normalize_tag(raw)?.replace('-', "_");
    T::from_str(&tag).ok()
}

impl RecommendationQuery {
    pub fn parse(&self) -> Result<RecommendationRequest, RequestError> {
        let defaults = RecommendationRequest::default();

        let occasion = match self.occasion.as_deref() {
            Some(raw) => {
                Occasion::parse(raw).ok_or_else(|| RequestError::InvalidOccasion(raw.to_string()))?
            }
            None => defaults.occasion,
        };

        let weather = match self.weather.as_deref() {
            Some(raw) => {
                parse_enum(raw).ok_or_else(|| RequestError::InvalidWeather(raw.to_string()))?
            }
            None => defaults.weather,
        };

        let skin_tone = match self.skin_tone.as_deref() {
            Some(raw) => {
                parse_enum(raw).ok_or_else(|| RequestError::InvalidSkinTone(raw.to_string()))?
            }
            None => defaults.skin_tone,
        };

        let max_recommendations = match self.max_recommendations {
            Some(value) => check_max(value)?,
            None => defaults.max_recommendations,
        };

        Ok(RecommendationRequest {
            occasion,
            weather,
            skin_tone,
            max_recommendations,
            item_id: self.item_id.clone().filter(|id| !id.is_empty()),
        })
    }
}
