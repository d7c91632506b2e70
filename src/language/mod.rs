// Types representing markdownish documents

mod error;
mod queue;
mod tree;
mod types;

// Re-export all public symbols
pub use error::*;
pub use queue::*;
pub use tree::*;
pub use types::*;
