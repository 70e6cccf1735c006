//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters.
//!
//! ## Types
//!
//! - **`Link`**: `[`, `]`, `(`, `)` and the `![` image opener
//! - **`Emphasis`**: `*` runs of length 1 to 3
//! - **`Placeholder`**: tokens left in parent text for extracted children
//!
//! The tokenizer calls these constants; it never hardcodes `![` or `*`.

pub mod emphasis;
pub mod link;
pub mod placeholder;

pub use emphasis::Emphasis;
pub use link::Link;
pub use placeholder::Placeholder;
