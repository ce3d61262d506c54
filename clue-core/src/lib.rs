pub mod answers;
pub mod classification;
pub mod hints;
pub mod join_code;
pub mod scoring;

// Re-export main components
pub use answers::*;
pub use classification::*;
pub use hints::*;
pub use join_code::*;
pub use scoring::*;
