//! Parsing of the ING (www.ing.nl) CSV export format.

mod dto;
mod parser;

pub use dto::{IngRow, IngRowRaw};
pub use parser::read_rows;
