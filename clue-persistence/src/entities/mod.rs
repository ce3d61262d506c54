pub mod clues;
pub mod groups;
pub mod members;
pub mod prelude;
pub mod solutions;
