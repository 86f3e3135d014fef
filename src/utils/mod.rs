pub mod logs;
pub mod wardrobe;

pub use logs::*;
pub use wardrobe::{load_wardrobe, parse_wardrobe, Wardrobe};
