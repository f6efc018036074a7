//! Course response DTOs

use serde::Serialize;

use crate::models::Course;

/// Course response
#[derive(Debug, Serialize)]
pub struct CourseResponse {
    pub name: String,
    pub description: String,
    pub problems: Vec<String>,
    pub topics: Vec<String>,
    pub contests: Vec<String>,
}

impl From<Course> for CourseResponse {
    fn from(course: Course) -> Self {
        Self {
            name: course.name,
            description: course.description,
            problems: course.problems,
            topics: course.topics,
            contests: course.contests,
        }
    }
}

/// Course list response, sorted by name
#[derive(Debug, Serialize)]
pub struct CoursesListResponse {
    pub courses: Vec<CourseResponse>,
    pub total: usize,
}
