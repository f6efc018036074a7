//! Course repository

use crate::{constants::documents, error::AppResult, models::Course, store::JsonStore};

/// Repository for the course document
pub struct CourseRepository;

impl CourseRepository {
    /// Load all courses
    pub async fn load(store: &JsonStore) -> AppResult<Vec<Course>> {
        store.load(documents::COURSES).await
    }

    /// Replace the course document
    pub async fn save(store: &JsonStore, courses: &[Course]) -> AppResult<()> {
        store.save(documents::COURSES, courses).await
    }
}
