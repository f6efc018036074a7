//! Document repositories
//!
//! Repositories handle all direct document interactions.

pub mod contest_repo;
pub mod course_repo;
pub mod problem_repo;
pub mod topic_repo;

pub use contest_repo::ContestRepository;
pub use course_repo::CourseRepository;
pub use problem_repo::ProblemRepository;
pub use topic_repo::TopicRepository;
