pub mod player;

pub use player::{DerivedDataset, GameResult, PlayerRecord};
