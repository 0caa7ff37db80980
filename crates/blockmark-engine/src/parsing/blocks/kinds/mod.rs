pub mod block_quote;
pub mod list;
pub mod paragraph;
pub mod table;

pub use block_quote::BlockQuote;
pub use paragraph::Paragraph;
