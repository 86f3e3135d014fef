use crate::garment::{Garment, GarmentRecord};
use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::warn;

#[derive(Deserialize)]
#[serde(untagged)]
enum WardrobeFile {
    Items(Vec<Value>),
    Wrapped {
        #[serde(alias = "wardrobe")]
        items: Vec<Value>,
    },
}

#[derive(Debug, Clone, Default)]
pub struct Wardrobe {
    pub garments: Vec<Garment>,
    /// Records that could not be read as a garment.
    pub skipped: usize,
}

impl Wardrobe {
    pub fn uncategorised(&self) -> usize {
        self.garments.iter().filter(|g| g.category.is_none()).count()
    }
}

/// Accepts either a bare array of garments or an object with an `items` array.
/// A malformed record is skipped and logged; only a malformed file is an error.
pub fn parse_wardrobe(json: &str) -> Result<Wardrobe> {
    let file: WardrobeFile = serde_json::from_str(json).context("invalid wardrobe JSON")?;
    let (WardrobeFile::Items(items) | WardrobeFile::Wrapped { items }) = file;

    let mut wardrobe = Wardrobe::default();
    for (index, item) in items.into_iter().enumerate() {
        let id = item.get("id").map(Value::to_string);
        match serde_json::from_value::<GarmentRecord>(item) {
            Ok(record) => wardrobe.garments.push(Garment::from(record)),
            Err(e) => {
                warn!(index, id = id.as_deref().unwrap_or("?"), error = %e, "skipping wardrobe record");
                wardrobe.skipped += 1;
            }
        }
    }

    if wardrobe.skipped > 0 {
        warn!(
            skipped = wardrobe.skipped,
            kept = wardrobe.garments.len(),
            "wardrobe loaded with unreadable records"
        );
    }
    Ok(wardrobe)
}

pub fn load_wardrobe(path: impl AsRef<Path>) -> Result<Wardrobe> {
    let path = path.as_ref();
    let json = fs::read_to_string(path)
        .with_context(|| format!("failed to read wardrobe file {}", path.display()))?;
    parse_wardrobe(&json).with_context(|| format!("failed to parse {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::garment::{Category, Formality};

    #[test]
    fn test_parse_bare_array() {
        let json = r##"[
            {"id": "1", "category": "top", "primaryColor": "Navy", "formality": "casual"},
            {"id": "2", "category": "shoes", "primary_color": "#000000", "formality": 5}
        ]"##;
        let wardrobe = parse_wardrobe(json).unwrap();

        assert_eq!(wardrobe.garments.len(), 2);
        assert_eq!(wardrobe.skipped, 0);
        assert_eq!(wardrobe.garments[0].category, Some(Category::Top));
        assert_eq!(wardrobe.garments[1].color.as_deref(), Some("black"));
        assert_eq!(wardrobe.garments[1].formality, Formality::Formal);
    }

    #[test]
    fn test_parse_wrapped_items() {
        let json = r#"{"items": [{"id": "a"}, {"id": "b", "category": "dress"}]}"#;
        let wardrobe = parse_wardrobe(json).unwrap();
        assert_eq!(wardrobe.garments.len(), 2);
        assert_eq!(wardrobe.garments[1].category, Some(Category::Dress));
        assert_eq!(wardrobe.uncategorised(), 1);
    }

    #[test]
    fn test_bad_record_skipped_not_fatal() {
        let json = r#"[
            {"id": "ok", "category": "top", "formality": 2},
            {"id": "fractional", "category": "bottom", "formality": 3.0, "occasions": null},
            {"id": "broken", "category": ["top"]},
            {"category": "shoes"},
            "not a garment"
        ]"#;
        let wardrobe = parse_wardrobe(json).unwrap();

        let ids: Vec<&str> = wardrobe.garments.iter().map(|g| g.id.as_str()).collect();
        assert_eq!(ids, vec!["ok", "fractional"]);
        assert_eq!(wardrobe.skipped, 3);
        assert_eq!(wardrobe.garments[1].formality, Formality::SmartCasual);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_wardrobe("{not json").is_err());
        assert!(parse_wardrobe(r#"{"items": 3}"#).is_err());
    }

    #[test]
    fn test_load_demo_wardrobe() {
        let wardrobe = load_wardrobe("demos/wardrobe.json").unwrap();
        assert_eq!(wardrobe.garments.len(), 16);
        assert_eq!(wardrobe.skipped, 0);
        assert_eq!(wardrobe.uncategorised(), 1);
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_wardrobe("does/not/exist.json").unwrap_err();
        assert!(err.to_string().contains("does/not/exist.json"));
    }
}
