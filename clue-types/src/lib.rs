pub mod clue;
pub mod errors;
pub mod group;
pub mod hints;
pub mod messages;

// Re-export all types
pub use clue::*;
pub use errors::*;
pub use group::*;
pub use hints::*;
pub use messages::*;
