use console::{measure_text_width, Style};

use crate::garment::Garment;
use crate::outfit::OutfitValidation;
use crate::recommend::{Recommendation, RecommendationResponse};
use crate::scoring::{PairScore, RecommendationLevel};
use crate::settings::settings;
use crate::utils::Wardrobe;

pub const TREE_BRANCH: char = '\u{251C}';
pub const TREE_END: char = '\u{2514}';
pub const TREE_HORIZ: char = '\u{2500}';

const TREE_PREFIX_WIDTH: usize = 4;
const VALUE_COLUMN: usize = 25;

fn tree_branch() -> String {
    dim()
        .apply_to(format!("{}{}{} ", TREE_BRANCH, TREE_HORIZ, TREE_HORIZ))
        .to_string()
}

fn tree_end() -> String {
    dim()
        .apply_to(format!("{}{}{} ", TREE_END, TREE_HORIZ, TREE_HORIZ))
        .to_string()
}

fn tree_space() -> String {
    "    ".to_string()
}

fn branch(i: usize, count: usize) -> String {
    if i + 1 == count {
        tree_end()
    } else {
        tree_branch()
    }
}

pub fn dim() -> Style {
    Style::new().dim()
}

fn magenta() -> Style {
    Style::new().magenta()
}

fn cyan() -> Style {
    Style::new().cyan()
}

fn green() -> Style {
    Style::new().green()
}

fn red() -> Style {
    Style::new().red()
}

fn yellow() -> Style {
    Style::new().yellow()
}

fn bold() -> Style {
    Style::new().bold()
}

fn wardrobe_prefix() -> String {
    cyan().apply_to("[WARDROBE]").to_string()
}

pub fn pad_label(label: &str, depth: usize) -> String {
    let prefix_width = depth * TREE_PREFIX_WIDTH;
    let target_width = VALUE_COLUMN.saturating_sub(prefix_width);
    let current_width = measure_text_width(label);
    if current_width < target_width {
        format!("{}{}", label, " ".repeat(target_width - current_width))
    } else {
        format!("{} ", label)
    }
}

fn level_style(level: RecommendationLevel) -> Style {
    match level {
        RecommendationLevel::Excellent => green(),
        RecommendationLevel::Good => cyan(),
        RecommendationLevel::Fair => yellow(),
        RecommendationLevel::Avoid => red(),
    }
}

pub fn format_score(value: f32) -> String {
    let style = level_style(RecommendationLevel::from_score(value));
    style.apply_to(format!("{value:.2}")).to_string()
}

fn format_level(level: RecommendationLevel) -> String {
    level_style(level).bold().apply_to(level).to_string()
}

pub fn log_wardrobe_loaded(path: &str, wardrobe: &Wardrobe) {
    println!(
        "{} loaded {} items from {}",
        wardrobe_prefix(),
        bold().apply_to(wardrobe.garments.len()),
        dim().apply_to(path)
    );

    let rows = [
        ("no category", wardrobe.uncategorised()),
        ("unreadable", wardrobe.skipped),
    ];
    let rows: Vec<_> = rows.iter().filter(|(_, count)| *count > 0).collect();
    for (i, (label, count)) in rows.iter().enumerate() {
        println!(
            "{}{} {}",
            branch(i, rows.len()),
            pad_label(label, 1),
            yellow().apply_to(count)
        );
    }
}

pub fn log_generic_error(prefix: &str, message: &str) {
    eprintln!("{} {}", red().apply_to(prefix), message);
}

fn push_tips(lines: &mut Vec<String>, tips: &[String]) {
    lines.push(String::new());
    lines.push(format!("{}", bold().apply_to("TIPS")));
    if tips.is_empty() {
        lines.push(format!("{}{}", tree_end(), dim().apply_to("none")));
    }
    for (i, tip) in tips.iter().enumerate() {
        lines.push(format!("{}{}", branch(i, tips.len()), tip));
    }
}

pub fn print_pair_score(a: &Garment, b: &Garment, score: &PairScore) {
    let mut lines: Vec<String> = Vec::new();

    lines.push(format!(
        "{} {} {} {}",
        magenta().apply_to(bold().apply_to("[PAIR]")),
        bold().apply_to(a.display_name()),
        dim().apply_to("+"),
        bold().apply_to(b.display_name())
    ));

    lines.push(String::new());
    lines.push(format!("{}", bold().apply_to("SCORES")));

    let mut rows = vec![
        ("formality", score.formality),
        ("color", score.color),
        ("pattern", score.pattern),
        ("style", score.style),
        ("category", score.category),
    ];
    if let Some(occasion) = score.occasion {
        rows.push(("occasion", occasion));
    }
    for (i, (label, value)) in rows.iter().enumerate() {
        lines.push(format!(
            "{}{}{}",
            branch(i, rows.len()),
            pad_label(label, 1),
            format_score(*value)
        ));
    }

    push_tips(&mut lines, &score.tips);

    lines.push(String::new());
    lines.push(format!("{}", bold().apply_to("RESULT")));
    lines.push(format!(
        "{}{}{}",
        tree_branch(),
        pad_label("overall", 1),
        format_score(score.overall)
    ));
    lines.push(format!(
        "{}{}{}",
        tree_end(),
        pad_label("level", 1),
        format_level(score.level)
    ));

    println!("{}\n", lines.join("\n"));
}

fn print_recommendation(rec: &Recommendation) {
    let mut lines: Vec<String> = Vec::new();

    lines.push(format!(
        "{} {} {}",
        magenta().apply_to(bold().apply_to(format!("[OUTFIT #{}]", rec.rank))),
        format_score(rec.confidence_score),
        format_level(rec.recommendation_level)
    ));

    lines.push(String::new());
    lines.push(format!("{}", bold().apply_to("ITEMS")));
    for (i, item) in rec.items.iter().enumerate() {
        let category = item
            .category
            .map(|c| c.to_string())
            .unwrap_or_else(|| "?".to_string());
        let detail = [item.primary_color.as_deref(), item.style.as_deref()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(", ");
        lines.push(format!(
            "{}{}{} {}",
            branch(i, rec.items.len()),
            pad_label(&category, 1),
            item.name.as_deref().unwrap_or(&item.item_id),
            dim().apply_to(detail)
        ));
    }

    let analysis = &rec.styling_analysis;
    lines.push(String::new());
    lines.push(format!("{}", bold().apply_to("ANALYSIS")));
    let mut rows = vec![
        ("formality", analysis.formality),
        ("color harmony", analysis.color),
        ("style coherence", analysis.style),
        ("patterns", analysis.pattern),
        ("category", analysis.category),
    ];
    if let Some(fit) = analysis.occasion {
        rows.push(("occasion fit", fit));
    }
    for (i, (label, value)) in rows.iter().enumerate() {
        lines.push(format!(
            "{}{}{}",
            branch(i, rows.len()),
            pad_label(label, 1),
            format_score(*value)
        ));
    }

    push_tips(&mut lines, &rec.styling_tips);

    let palette = &rec.color_coordination.primary_palette;
    lines.push(String::new());
    lines.push(format!("{}", bold().apply_to("COLORS")));
    lines.push(format!(
        "{}{}{}",
        tree_branch(),
        pad_label("palette", 1),
        if palette.is_empty() {
            dim().apply_to("none".to_string())
        } else {
            cyan().apply_to(palette.join(", "))
        }
    ));
    lines.push(format!(
        "{}{}{}",
        tree_branch(),
        pad_label("skin tone", 1),
        format_score(rec.color_coordination.skin_tone_score)
    ));
    lines.push(format!(
        "{}{}",
        tree_end(),
        dim().apply_to(rec.color_coordination.styling_advice)
    ));

    println!("{}\n", lines.join("\n"));
}

pub fn print_recommendations(response: &RecommendationResponse) {
    let request = &response.request_context;
    println!(
        "{} {} outfits for {} in {} weather",
        wardrobe_prefix(),
        bold().apply_to(response.recommendations.len()),
        cyan().apply_to(request.occasion),
        cyan().apply_to(request.weather)
    );
    println!(
        "{}{} {}",
        tree_end(),
        pad_label("your colors", 1),
        dim().apply_to(response.user_analysis.recommended_colors.join(", "))
    );
    println!();

    if response.recommendations.is_empty() {
        println!(
            "{}",
            yellow().apply_to("no complete outfits could be assembled from this wardrobe")
        );
        return;
    }

    for rec in &response.recommendations {
        print_recommendation(rec);
    }
}

pub fn print_validation(validation: &OutfitValidation) {
    let s = settings();
    let mut lines: Vec<String> = Vec::new();

    lines.push(format!("{}", bold().apply_to("VALIDATION")));

    let (status, style) = if validation.is_valid {
        ("valid", green().bold())
    } else {
        ("invalid", red().bold())
    };
    lines.push(format!(
        "{}{}{}",
        tree_branch(),
        pad_label("mean score", 1),
        format_score(validation.score)
    ));
    lines.push(format!(
        "{}{}{} {}",
        tree_branch(),
        pad_label("status", 1),
        style.apply_to(status),
        dim().apply_to(format!("(needs {:.2})", s.outfit.valid_mean_score))
    ));

    lines.push(format!("{}{}", tree_end(), pad_label("issues", 1)));
    if validation.issues.is_empty() {
        lines.push(format!(
            "{}{}{}",
            tree_space(),
            tree_end(),
            dim().apply_to("none")
        ));
    }
    for (i, issue) in validation.issues.iter().enumerate() {
        lines.push(format!(
            "{}{}{}",
            tree_space(),
            branch(i, validation.issues.len()),
            yellow().apply_to(issue)
        ));
    }

    println!("{}\n", lines.join("\n"));
}

pub fn log_dimmed(message: &str) {
    println!("{}", dim().apply_to(message));
}
