pub mod parser;

pub use parser::{ExtractOptions, extract_regions, read_regions};
