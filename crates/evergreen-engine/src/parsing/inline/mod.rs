//! # Inline Parsing
//!
//! Cursor-based extraction of links, images and emphasis from block text.
//!
//! ## Architecture
//!
//! Inline parsing runs once a block's text is complete (paragraphs, headings,
//! list items, blockquote paragraphs, table cells). It does not produce a
//! stream of text/markup nodes; instead each construct becomes a child
//! element and is replaced in the block text by a unique placeholder token.
//! Renderers splice children back by looking their `identifier` up in the
//! parent's `text`.
//!
//! ## Modules
//!
//! - **`kinds`**: Inline-specific types with owned delimiters (Link, Emphasis, Placeholder)
//! - **`cursor`**: `Cursor` for byte-by-byte scanning with balanced group skipping
//! - **`parser`**: `tokenize_inline()` main entry point with one pass per construct

pub mod cursor;
pub mod kinds;
pub mod parser;

pub use parser::tokenize_inline;
