use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::subscriber::set_global_default;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use wardrobe_stylist::outfit::validate_outfit;
use wardrobe_stylist::recommend::{recommend, RecommendationQuery};
use wardrobe_stylist::utils::{
    load_wardrobe, log_dimmed, log_generic_error, log_wardrobe_loaded, print_recommendations,
    print_validation,
};

/// Ranked outfit recommendations from a wardrobe file.
#[derive(Debug, Parser)]
#[command(name = "wardrobe-stylist", version)]
struct Cli {
    /// Wardrobe JSON file (array of garments or `{ "items": [...] }`).
    #[arg(long, short, env = "WARDROBE_PATH", value_name = "FILE")]
    wardrobe: PathBuf,
    /// casual, formal, business_casual, smart_casual, work, date, party, weekend
    #[arg(long)]
    occasion: Option<String>,
    /// hot, warm, mild, cool, cold, rainy, sunny
    #[arg(long)]
    weather: Option<String>,
    /// cool, warm, neutral
    #[arg(long)]
    skin_tone: Option<String>,
    /// Number of outfits to return (1-10).
    #[arg(long, short = 'n', value_name = "N")]
    max: Option<i64>,
    /// Build every outfit around this garment id.
    #[arg(long, value_name = "ID")]
    item: Option<String>,
    /// Print the JSON response instead of the tree view.
    #[arg(long, default_value_t = false)]
    json: bool,
    /// Also print a pairwise validation of each outfit.
    #[arg(long, default_value_t = false)]
    validate: bool,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let subscriber = tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive("wardrobe_stylist=info".parse()?))
        .with(
            fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .with_writer(std::io::stderr)
                .compact(),
        );
    set_global_default(subscriber)?;

    let cli = Cli::parse();

    let query = RecommendationQuery {
        occasion: cli.occasion,
        weather: cli.weather,
        skin_tone: cli.skin_tone,
        max_recommendations: cli.max,
        item_id: cli.item,
    };
    let request = match query.parse() {
        Ok(request) => request,
        Err(e) => {
            log_generic_error("[REQUEST]", &e.to_string());
            std::process::exit(2);
        }
    };

    let loaded = load_wardrobe(&cli.wardrobe)?;
    if !cli.json {
        log_wardrobe_loaded(&cli.wardrobe.display().to_string(), &loaded);
    }
    let wardrobe = loaded.garments;

    let response = match recommend(&wardrobe, &request) {
        Ok(response) => response,
        Err(e) => {
            log_generic_error("[REQUEST]", &e.to_string());
            std::process::exit(1);
        }
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    print_recommendations(&response);

    if cli.validate {
        for rec in &response.recommendations {
            log_dimmed(&format!("{} validation", rec.outfit_id));
            let items = rec
                .items
                .iter()
                .filter_map(|item| wardrobe.iter().find(|g| g.id == item.item_id));
            print_validation(&validate_outfit(items));
        }
    }

    Ok(())
}
