use super::request::SkinTone;
use crate::garment::Garment;

pub const TIER_EXCELLENT: f32 = 1.0;
pub const TIER_GOOD: f32 = 0.75;
pub const TIER_AVOID: f32 = 0.2;
pub const TIER_UNLISTED: f32 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Swatch {
    pub name: &'static str,
    pub hex: &'static str,
    pub family: &'static str,
}

const fn swatch(name: &'static str, hex: &'static str, family: &'static str) -> Swatch {
    Swatch { name, hex, family }
}

#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub excellent: &'static [Swatch],
    pub good: &'static [Swatch],
    pub avoid: &'static [Swatch],
}

const COOL: Palette = Palette {
    excellent: &[
        swatch("Royal Blue", "#4169e1", "blue"),
        swatch("Emerald Green", "#50c878", "green"),
        swatch("True Red", "#ff0000", "red"),
        swatch("Hot Pink", "#ff69b4", "pink"),
        swatch("Pure White", "#ffffff", "white"),
        swatch("Black", "#000000", "black"),
        swatch("Silver", "#c0c0c0", "metallic"),
        swatch("Cool Gray", "#808080", "neutral"),
        swatch("Navy Blue", "#000080", "blue"),
        swatch("Burgundy", "#800020", "red"),
    ],
    good: &[
        swatch("Teal", "#008080", "blue"),
        swatch("Purple", "#800080", "purple"),
        swatch("Magenta", "#ff00ff", "pink"),
        swatch("Cool Brown", "#8b4513", "brown"),
        swatch("Lavender", "#e6e6fa", "purple"),
        swatch("Ice Blue", "#87ceeb", "blue"),
        swatch("Charcoal", "#36454f", "neutral"),
    ],
    avoid: &[
        swatch("Orange", "#ffa500", "orange"),
        swatch("Warm Yellow", "#ffd700", "yellow"),
        swatch("Rust", "#b7410e", "orange"),
        swatch("Warm Beige", "#f5deb3", "beige"),
    ],
};

const WARM: Palette = Palette {
    excellent: &[
        swatch("Golden Yellow", "#ffd700", "yellow"),
        swatch("Coral", "#ff7f50", "orange"),
        swatch("Peach", "#ffcba4", "orange"),
        swatch("Warm Brown", "#a0522d", "brown"),
        swatch("Olive Green", "#808000", "green"),
        swatch("Rust Orange", "#b7410e", "orange"),
        swatch("Gold", "#ffd700", "metallic"),
        swatch("Cream", "#fffdd0", "white"),
        swatch("Camel", "#c19a6b", "brown"),
        swatch("Terracotta", "#e2725b", "red"),
    ],
    good: &[
        swatch("Forest Green", "#228b22", "green"),
        swatch("Warm Red", "#dc143c", "red"),
        swatch("Amber", "#ffbf00", "yellow"),
        swatch("Chocolate Brown", "#7b3f00", "brown"),
        swatch("Warm Gray", "#8b8680", "neutral"),
        swatch("Brick Red", "#cb4154", "red"),
    ],
    avoid: &[
        swatch("Cool Blue", "#0000ff", "blue"),
        swatch("Pure White", "#ffffff", "white"),
        swatch("Black", "#000000", "black"),
        swatch("Hot Pink", "#ff69b4", "pink"),
    ],
};

const NEUTRAL: Palette = Palette {
    excellent: &[
        swatch("Soft Pink", "#ffb6c1", "pink"),
        swatch("Sage Green", "#9caf88", "green"),
        swatch("Dusty Blue", "#6b8cae", "blue"),
        swatch("Mauve", "#e0b0ff", "purple"),
        swatch("Off White", "#faf0e6", "white"),
        swatch("Taupe", "#483c32", "brown"),
        swatch("Rose Gold", "#e8b4a0", "metallic"),
        swatch("Soft Gray", "#c0c0c0", "neutral"),
        swatch("Nude", "#f2d2a9", "beige"),
        swatch("Muted Coral", "#f88379", "coral"),
    ],
    good: &[
        swatch("Navy Blue", "#000080", "blue"),
        swatch("Burgundy", "#800020", "red"),
        swatch("Emerald Green", "#50c878", "green"),
        swatch("Camel", "#c19a6b", "brown"),
        swatch("Charcoal", "#36454f", "neutral"),
        swatch("Soft Yellow", "#ffffe0", "yellow"),
    ],
    avoid: &[],
};

impl SkinTone {
    pub fn palette(self) -> &'static Palette {
        match self {
            SkinTone::Cool => &COOL,
            SkinTone::Warm => &WARM,
            SkinTone::Neutral => &NEUTRAL,
        }
    }
}

impl Swatch {
    /// Loose match on a normalized garment color: either side containing the
    /// swatch name or family, or an exact hex value.
    fn matches(&self, color: &str) -> bool {
        let name = self.name.to_lowercase();
        color == self.hex
            || color.contains(&name)
            || color.contains(self.family)
            || name.contains(color)
            || self.family.contains(color)
    }
}

/// Tier score of one color for a skin tone, checking excellent, good then avoid.
pub fn color_tier(color: &str, skin_tone: SkinTone) -> f32 {
    let palette = skin_tone.palette();
    let tiers = [
        (palette.excellent, TIER_EXCELLENT),
        (palette.good, TIER_GOOD),
        (palette.avoid, TIER_AVOID),
    ];
    tiers
        .iter()
        .find(|(swatches, _)| swatches.iter().any(|s| s.matches(color)))
        .map_or(TIER_UNLISTED, |(_, score)| *score)
}

/// Mean tier score over the items. Uncoloured items count as unlisted.
pub fn skin_tone_score<'a>(
    items: impl IntoIterator<Item = &'a Garment>,
    skin_tone: SkinTone,
) -> f32 {
    let scores: Vec<f32> = items
        .into_iter()
        .map(|g| {
            g.color
                .as_deref()
                .map_or(TIER_UNLISTED, |color| color_tier(color, skin_tone))
        })
        .collect();
    if scores.is_empty() {
        return TIER_UNLISTED;
    }
    scores.iter().sum::<f32>() / scores.len() as f32
}
