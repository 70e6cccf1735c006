pub mod block_quote;
pub mod code_fence;
pub mod div;
pub mod heading;
pub mod list;
pub mod paragraph;
pub mod rule;
pub mod table;

pub use block_quote::BlockQuote;
pub use code_fence::CodeFence;
pub use div::Div;
pub use heading::Heading;
pub use list::{List, ListLine, ListMarker};
pub use paragraph::Paragraph;
pub use rule::Rule;
pub use table::Table;
