pub mod error;
pub mod export;
pub mod fetch;
pub mod format;
pub mod grid;
pub mod model;
pub mod ranking;
pub mod render;
pub mod sheet;
pub mod xlsx;

pub use error::{Result, StandingsError};
pub use model::*;
