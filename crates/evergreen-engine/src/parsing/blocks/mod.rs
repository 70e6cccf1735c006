//! # Block Parsing
//!
//! Two-phase, line-oriented block parsing.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): each line becomes a `LineClass`
//!    carrying its kind, captured text and annotation groups. Only code
//!    fence state carries over between lines.
//!
//! 2. **Block Construction** (`builder`): a `BlockBuilder` keeps the div stack
//!    and the single open block (paragraph, list stack, blockquote stack,
//!    table or code) and emits `Element`s as blocks close.
//!
//! ## Modules
//!
//! - **`kinds`**: Block-specific types with owned delimiters (Heading, List, Table, Div, ...)
//! - **`classify`**: `LineClassifier` produces a `LineClass` for each line
//! - **`containers`**: Open container state (list and quote stacks, tables, divs)
//! - **`builder`**: `BlockBuilder` state machine for block construction
//!
//! ## Key Invariants
//!
//! - Nesting depth of lists, blockquotes and divs is unbounded
//! - Fenced code blocks are raw zones: no block/inline parsing inside
//! - Headings and blank lines close every open div

pub mod builder;
pub mod classify;
pub mod containers;
pub mod kinds;

pub use builder::{BlockBuilder, list_item_element};
pub use classify::{LineClass, LineClassifier};
