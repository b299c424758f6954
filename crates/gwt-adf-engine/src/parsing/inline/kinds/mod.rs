//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters. The parser refers
//! to these constants and never hardcodes `**` itself.

pub mod strong;

pub use strong::Strong;
