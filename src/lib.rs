//! Convert ING (www.ing.nl) CSV exports to OFX statements.
//!
//! ```rust,ignore
//! use ing2ofx::{convert, ofx};
//!
//! let batch = convert(&csv_content, false)?;
//! for (_, transactions) in batch.iter() {
//!     let document = ofx::render(transactions, today);
//! }
//! ```

mod batch;
mod convert;
mod fitid;
mod normalize;
mod types;

pub mod errors;
pub mod ing;
pub mod ofx;

pub use batch::Batch;
pub use convert::{convert, convert_file};
pub use fitid::FitIdRegistry;
pub use types::{Direction, Transaction, TrnType};
