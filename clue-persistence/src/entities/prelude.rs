pub use super::clues::Entity as Clues;
pub use super::groups::Entity as Groups;
pub use super::members::Entity as Members;
pub use super::solutions::Entity as Solutions;
