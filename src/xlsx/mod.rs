pub mod writer;

pub use writer::write_standings_to_xlsx;
