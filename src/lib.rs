pub mod garment;
pub mod outfit;
pub mod recommend;
pub mod scoring;
pub mod settings;
pub mod utils;
