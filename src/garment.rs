use crate::scoring::tables::{
    CATEGORY_ALIASES, DEFAULT_FORMALITY, FORMALITY_ALIASES, FORMALITY_LEVELS, HEX_COLOR_NAMES,
    OCCASION_FORMALITY, PATTERN_ALIASES, SHADE_MODIFIERS,
};
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeSet;
use std::str::FromStr;
use std::sync::LazyLock;
use strum::{Display, EnumIter, EnumString};

static WORD_SPLIT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^a-z0-9]+").unwrap());
static HEX_COLOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#(?:[0-9a-f]{3}|[0-9a-f]{6})$").unwrap());

/// Lowercases and joins the alphanumeric words of `raw` with `-`.
pub fn normalize_tag(raw: &str) -> Option<String> {
    let lower = raw.to_lowercase();
    let tag = WORD_SPLIT
        .split(&lower)
        .filter(|w| !w.is_empty())
        .collect::<Vec<_>>()
        .join("-");
    (!tag.is_empty()).then_some(tag)
}

pub fn normalize_color(raw: &str) -> Option<String> {
    let lower = raw.trim().to_lowercase();
    if HEX_COLOR.is_match(&lower) {
        let named = HEX_COLOR_NAMES
            .iter()
            .find(|(hex, _)| *hex == lower)
            .map(|(_, name)| name.to_string());
        return Some(named.unwrap_or(lower));
    }

    let color = WORD_SPLIT
        .split(&lower)
        .filter(|w| !w.is_empty() && !SHADE_MODIFIERS.contains(w))
        .collect::<Vec<_>>()
        .join(" ");
    (!color.is_empty()).then_some(color)
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    EnumString,
    EnumIter,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Top,
    Bottom,
    Dress,
    Outerwear,
    Shoes,
    Accessory,
}

impl Category {
    pub fn parse(raw: &str) -> Option<Self> {
        let tag = normalize_tag(raw)?;
        Self::from_str(&tag).ok().or_else(|| {
            CATEGORY_ALIASES
                .iter()
                .find(|(alias, _)| *alias == tag)
                .map(|(_, category)| *category)
        })
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Default,
    Display,
    EnumString,
    EnumIter,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum Formality {
    VeryCasual,
    #[default]
    Casual,
    SmartCasual,
    Business,
    Formal,
}

impl Formality {
    pub fn level(self) -> u8 {
        FORMALITY_LEVELS
            .iter()
            .find(|(f, _)| *f == self)
            .map(|(_, level)| *level)
            .unwrap_or(2)
    }

    /// Levels outside 1..=5 clamp to the nearest end; the wardrobe store uses 6 for black-tie.
    pub fn from_level(level: i64) -> Self {
        let (min, max) = (FORMALITY_LEVELS[0].1, FORMALITY_LEVELS[4].1);
        let clamped = level.clamp(min as i64, max as i64) as u8;
        FORMALITY_LEVELS
            .iter()
            .find(|(_, l)| *l == clamped)
            .map(|(f, _)| *f)
            .unwrap_or(DEFAULT_FORMALITY)
    }

    pub fn parse(raw: &str) -> Self {
        if let Ok(level) = raw.trim().parse::<i64>() {
            return Self::from_level(level);
        }

        let Some(tag) = normalize_tag(raw) else {
            return DEFAULT_FORMALITY;
        };

        Self::from_str(&tag)
            .ok()
            .or_else(|| {
                FORMALITY_ALIASES
                    .iter()
                    .find(|(alias, _)| *alias == tag)
                    .map(|(_, f)| *f)
            })
            .unwrap_or(DEFAULT_FORMALITY)
    }

    pub fn distance(self, other: Formality) -> u8 {
        self.level().abs_diff(other.level())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum Pattern {
    #[default]
    Solid,
    Striped,
    PolkaDot,
    Floral,
    Geometric,
    Plaid,
    Animal,
    Abstract,
    #[strum(default)]
    Other(String),
}

impl Pattern {
    pub fn parse(raw: &str) -> Self {
        let Some(tag) = normalize_tag(raw) else {
            return Pattern::Solid;
        };
        let canonical = PATTERN_ALIASES
            .iter()
            .find(|(alias, _)| *alias == tag)
            .map(|(_, name)| name.to_string())
            .unwrap_or(tag);
        Self::from_str(&canonical).unwrap_or(Pattern::Other(canonical))
    }

    pub fn name(&self) -> &str {
        match self {
            Pattern::Solid => "solid",
            Pattern::Striped => "striped",
            Pattern::PolkaDot => "polka-dot",
            Pattern::Floral => "floral",
            Pattern::Geometric => "geometric",
            Pattern::Plaid => "plaid",
            Pattern::Animal => "animal",
            Pattern::Abstract => "abstract",
            Pattern::Other(name) => name,
        }
    }

    pub fn is_solid(&self) -> bool {
        matches!(self, Pattern::Solid)
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Default,
    Display,
    EnumString,
    EnumIter,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Occasion {
    #[default]
    Casual,
    Formal,
    BusinessCasual,
    SmartCasual,
    Work,
    Date,
    Party,
    Weekend,
}

impl Occasion {
    pub fn parse(raw: &str) -> Option<Self> {
        let tag = normalize_tag(raw)?.replace('-', "_");
        Self::from_str(&tag).ok()
    }

    pub fn target_formality(self) -> Formality {
        OCCASION_FORMALITY
            .iter()
            .find(|(o, _)| *o == self)
            .map(|(_, f)| *f)
            .unwrap_or(DEFAULT_FORMALITY)
    }
}

/// A wardrobe item after boundary normalization. Scoring only ever sees this shape.
#[derive(Debug, Clone, PartialEq)]
pub struct Garment {
    pub id: String,
    pub name: Option<String>,
    pub category: Option<Category>,
    pub formality: Formality,
    pub color: Option<String>,
    pub pattern: Pattern,
    pub style: Option<String>,
    pub occasions: BTreeSet<Occasion>,
}

impl Garment {
    pub fn new(id: impl Into<String>, category: Category, formality: Formality) -> Self {
        Self {
            id: id.into(),
            name: None,
            category: Some(category),
            formality,
            color: None,
            pattern: Pattern::Solid,
            style: None,
            occasions: BTreeSet::new(),
        }
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn with_color(mut self, color: &str) -> Self {
        self.color = normalize_color(color);
        self
    }

    pub fn with_pattern(mut self, pattern: &str) -> Self {
        self.pattern = Pattern::parse(pattern);
        self
    }

    pub fn with_style(mut self, style: &str) -> Self {
        self.style = normalize_tag(style);
        self
    }

    pub fn with_occasion(mut self, occasion: Occasion) -> Self {
        self.occasions.insert(occasion);
        self
    }

    pub fn without_category(mut self) -> Self {
        self.category = None;
        self
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }

    pub fn suits(&self, occasion: Occasion) -> bool {
        self.occasions.contains(&occasion) || self.formality == occasion.target_formality()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FormalityValue {
    Level(i64),
    Fractional(f64),
    Name(String),
}

impl FormalityValue {
    pub fn formality(&self) -> Formality {
        match self {
            FormalityValue::Level(level) => Formality::from_level(*level),
            FormalityValue::Fractional(level) => Formality::from_level(level.round() as i64),
            FormalityValue::Name(name) => Formality::parse(name),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum IdValue {
    Text(String),
    Number(i64),
}

fn string_or_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match IdValue::deserialize(deserializer)? {
        IdValue::Text(id) => id,
        IdValue::Number(id) => id.to_string(),
    })
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TagList {
    One(String),
    Many(Vec<Option<String>>),
}

/// `null`, a single string, or a list with `null` holes.
fn tag_list<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    Ok(match Option::<TagList>::deserialize(deserializer)? {
        None => Vec::new(),
        Some(TagList::One(tag)) => vec![tag],
        Some(TagList::Many(tags)) => tags.into_iter().flatten().collect(),
    })
}

/// Garment as supplied by the wardrobe store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GarmentRecord {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default, alias = "primary_color", alias = "color")]
    pub primary_color: Option<String>,
    #[serde(default)]
    pub pattern: Option<String>,
    #[serde(default)]
    pub formality: Option<FormalityValue>,
    #[serde(default)]
    pub style: Option<String>,
    #[serde(default, alias = "occasion", deserialize_with = "tag_list")]
    pub occasions: Vec<String>,
}

impl From<GarmentRecord> for Garment {
    fn from(record: GarmentRecord) -> Self {
        let formality = record
            .formality
            .as_ref()
            .map_or(DEFAULT_FORMALITY, FormalityValue::formality);

        Self {
            id: record.id,
            name: record.name.filter(|n| !n.trim().is_empty()),
            category: record.category.as_deref().and_then(Category::parse),
            formality,
            color: record.primary_color.as_deref().and_then(normalize_color),
            pattern: record
                .pattern
                .as_deref()
                .map(Pattern::parse)
                .unwrap_or_default(),
            style: record.style.as_deref().and_then(normalize_tag),
            occasions: record
                .occasions
                .iter()
                .filter_map(|o| Occasion::parse(o))
                .collect(),
        }
    }
}
