pub mod layout;
pub mod reader;

pub use layout::SheetLayout;
pub use reader::{extract, extract_strict, read_dataset, read_dataset_file};
