pub mod element;
pub mod error;
pub mod options;
pub mod parsing;
pub mod processor;

// Re-export key types for easier usage
pub use element::{Alignment, Element, ElementKind};
pub use error::ParseError;
pub use options::ParseOptions;
pub use parsing::attributes::Identifiers;
pub use processor::Processor;
