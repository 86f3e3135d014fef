use super::request::{SkinTone, Weather};
use crate::garment::{Garment, Occasion};
use crate::settings::settings;

impl SkinTone {
    pub fn color_advice(self) -> &'static str {
        match self {
            SkinTone::Cool => "These cool tones complement your skin undertone beautifully",
            SkinTone::Warm => "These warm colors enhance your natural glow",
            SkinTone::Neutral => "This balanced palette works perfectly with your neutral undertone",
        }
    }
}

pub fn recommended_colors(skin_tone: SkinTone) -> Vec<&'static str> {
    skin_tone
        .palette()
        .excellent
        .iter()
        .take(settings().recommend.recommended_colors)
        .map(|swatch| swatch.name)
        .collect()
}

/// Distinct item colors, in outfit order.
pub fn primary_palette<'a>(items: impl IntoIterator<Item = &'a Garment>) -> Vec<String> {
    let mut palette: Vec<String> = Vec::new();
    for color in items.into_iter().filter_map(|g| g.color.as_ref()) {
        if !palette.contains(color) {
            palette.push(color.clone());
        }
    }
    palette
}

fn occasion_tips(occasion: Occasion) -> &'static [&'static str] {
    match occasion {
        Occasion::Formal => &[
            "Ensure all items are wrinkle-free and well-fitted",
            "Consider adding a statement accessory for sophistication",
        ],
        Occasion::Casual | Occasion::Weekend => &[
            "Feel free to mix textures for visual interest",
            "Roll up sleeves or cuffs for a relaxed look",
        ],
        _ => &[],
    }
}

fn weather_tip(weather: Weather) -> Option<&'static str> {
    match weather {
        Weather::Cold | Weather::Cool => Some("Layer pieces for warmth and style versatility"),
        Weather::Hot => Some("Choose breathable fabrics and lighter colors"),
        _ => None,
    }
}

pub fn styling_tips<'a>(
    items: impl IntoIterator<Item = &'a Garment>,
    occasion: Occasion,
    weather: Weather,
) -> Vec<String> {
    let has_patterns = items.into_iter().any(|g| !g.pattern.is_solid());
    let pattern_tip = if has_patterns {
        "Keep accessories minimal to let patterns stand out"
    } else {
        "Add visual interest with textured accessories"
    };

    occasion_tips(occasion)
        .iter()
        .copied()
        .chain(weather_tip(weather))
        .chain(std::iter::once(pattern_tip))
        .take(settings().recommend.max_tips)
        .map(str::to_string)
        .collect()
}
