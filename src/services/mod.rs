//! Business logic services

pub mod contest_service;
pub mod course_service;
pub mod problem_service;
pub mod topic_service;

pub use contest_service::ContestService;
pub use course_service::CourseService;
pub use problem_service::ProblemService;
pub use topic_service::TopicService;
