use anyhow::{anyhow, Result};
use clap::Parser;
use std::path::PathBuf;
use wardrobe_stylist::garment::{Garment, Occasion};
use wardrobe_stylist::outfit::validate_outfit;
use wardrobe_stylist::scoring::{find_best_pairings, PairScorer};
use wardrobe_stylist::utils::{load_wardrobe, log_dimmed, print_pair_score, print_validation};

/// Scores two garments of a wardrobe against each other.
#[derive(Debug, Parser)]
#[command(name = "score-pair", version)]
struct Cli {
    /// Wardrobe JSON file.
    #[arg(long, short, env = "WARDROBE_PATH", value_name = "FILE")]
    wardrobe: PathBuf,
    /// Id of the first garment.
    first: String,
    /// Id of the second garment. Omit to rank the best partners for the first.
    second: Option<String>,
    /// Score occasion fit for this occasion as well.
    #[arg(long)]
    occasion: Option<String>,
    /// How many partners to list when no second garment is given.
    #[arg(long, short = 'n', default_value_t = 5)]
    max: usize,
}

fn find<'a>(wardrobe: &'a [Garment], id: &str) -> Result<&'a Garment> {
    wardrobe
        .iter()
        .find(|g| g.id == id)
        .ok_or_else(|| anyhow!("no garment with id {id} in wardrobe"))
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let occasion = cli
        .occasion
        .as_deref()
        .map(|raw| Occasion::parse(raw).ok_or_else(|| anyhow!("unknown occasion {raw}")))
        .transpose()?;
    let scorer = PairScorer::default().with_occasion(occasion);

    let wardrobe = load_wardrobe(&cli.wardrobe)?.garments;
    let first = find(&wardrobe, &cli.first)?;

    match cli.second.as_deref() {
        Some(id) => {
            let second = find(&wardrobe, id)?;
            print_pair_score(first, second, &scorer.evaluate(first, second));
            print_validation(&validate_outfit([first, second]));
        }
        None => {
            let pairings = find_best_pairings(&scorer, first, &wardrobe, cli.max);
            if pairings.is_empty() {
                log_dimmed("no complementary garments in wardrobe");
            }
            for score in &pairings {
                let second = find(&wardrobe, &score.second)?;
                print_pair_score(first, second, score);
            }
        }
    }

    Ok(())
}
