//! # Inline Formatting
//!
//! Splits the text of a labelled paragraph into styled runs.
//!
//! ## Modules
//!
//! - **`kinds`**: Inline types with owned delimiters (`Strong`)
//! - **`cursor`**: `Cursor` for byte-wise scanning of a single line
//! - **`parser`**: `format_inline()` entry point
//!
//! Only bold spans are recognised. Anything that does not form a complete
//! `**...**` pair is kept as literal text.

pub mod cursor;
pub mod kinds;
pub mod parser;

pub use parser::format_inline;
