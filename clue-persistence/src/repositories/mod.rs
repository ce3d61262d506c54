pub mod clue_repository;
pub mod group_repository;
pub mod member_repository;
pub mod solution_repository;

pub use clue_repository::ClueRepository;
pub use group_repository::GroupRepository;
pub use member_repository::MemberRepository;
pub use solution_repository::SolutionRepository;
