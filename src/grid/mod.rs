pub mod reader;

pub use reader::{parse_grid, parse_line, unbalanced_quote_lines, Grid};
