//! Course service

use crate::{
    error::{AppError, AppResult},
    handlers::courses::{
        request::{CreateCourseRequest, ReplaceAssignmentsRequest, UpdateCourseRequest},
        response::CourseResponse,
    },
    models::Course,
    store::{JsonStore, repositories::CourseRepository},
    utils::validation,
};

/// Course service for business logic
pub struct CourseService;

impl CourseService {
    /// List courses sorted by name
    pub async fn list_courses(store: &JsonStore) -> AppResult<Vec<CourseResponse>> {
        let mut courses = CourseRepository::load(store).await?;
        courses.sort_by(|a, b| a.name.cmp(&b.name));

        Ok(courses.into_iter().map(Into::into).collect())
    }

    /// Get a course by name
    pub async fn get_course(store: &JsonStore, name: &str) -> AppResult<CourseResponse> {
        let courses = CourseRepository::load(store).await?;
        let course = courses
            .into_iter()
            .find(|c| c.name == name)
            .ok_or_else(|| AppError::NotFound(format!("Course '{name}' not found")))?;

        Ok(course.into())
    }

    /// Create a new course with empty reference lists
    pub async fn create_course(
        store: &JsonStore,
        payload: CreateCourseRequest,
    ) -> AppResult<CourseResponse> {
        let name = validation::normalize_name(&payload.name)
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let mut courses = CourseRepository::load(store).await?;
        if courses.iter().any(|c| c.name == name) {
            return Err(AppError::AlreadyExists(format!(
                "A course named '{name}' already exists"
            )));
        }

        let course = Course {
            name,
            description: validation::sanitize_string(&payload.description),
            problems: Vec::new(),
            topics: Vec::new(),
            contests: Vec::new(),
        };
        courses.push(course.clone());
        CourseRepository::save(store, &courses).await?;

        tracing::info!(course = %course.name, "Created course");
        Ok(course.into())
    }

    /// Update a course, optionally renaming it
    pub async fn update_course(
        store: &JsonStore,
        name: &str,
        payload: UpdateCourseRequest,
    ) -> AppResult<CourseResponse> {
        let mut courses = CourseRepository::load(store).await?;
        let idx = courses
            .iter()
            .position(|c| c.name == name)
            .ok_or_else(|| AppError::NotFound(format!("Course '{name}' not found")))?;

        if let Some(new_name) = payload.name.as_deref() {
            let new_name = validation::normalize_name(new_name)
                .map_err(|e| AppError::Validation(e.to_string()))?;
            if new_name != name && courses.iter().any(|c| c.name == new_name) {
                return Err(AppError::AlreadyExists(format!(
                    "A course named '{new_name}' already exists"
                )));
            }
            courses[idx].name = new_name;
        }

        if let Some(description) = payload.description.as_deref() {
            courses[idx].description = validation::sanitize_string(description);
        }

        let course = courses[idx].clone();
        CourseRepository::save(store, &courses).await?;

        Ok(course.into())
    }

    /// Delete a course
    pub async fn delete_course(store: &JsonStore, name: &str) -> AppResult<()> {
        let mut courses = CourseRepository::load(store).await?;
        let before = courses.len();
        courses.retain(|c| c.name != name);

        if courses.len() == before {
            return Err(AppError::NotFound(format!("Course '{name}' not found")));
        }

        CourseRepository::save(store, &courses).await?;
        tracing::info!(course = %name, "Deleted course");
        Ok(())
    }

    /// Replace the course's problem/topic/contest reference lists.
    ///
    /// The references stay loose: nothing checks them against the other
    /// collections, and they may dangle later.
    pub async fn replace_assignments(
        store: &JsonStore,
        name: &str,
        payload: ReplaceAssignmentsRequest,
    ) -> AppResult<CourseResponse> {
        let mut courses = CourseRepository::load(store).await?;
        let idx = courses
            .iter()
            .position(|c| c.name == name)
            .ok_or_else(|| AppError::NotFound(format!("Course '{name}' not found")))?;

        courses[idx].problems = payload.problems;
        courses[idx].topics = payload.topics;
        courses[idx].contests = payload.contests;

        let course = courses[idx].clone();
        CourseRepository::save(store, &courses).await?;

        Ok(course.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_request(name: &str) -> CreateCourseRequest {
        CreateCourseRequest {
            name: name.to_string(),
            description: String::new(),
        }
    }

    #[tokio::test]
    async fn test_courses_list_sorted_by_name() {
        let dir = TempDir::new().unwrap();
        let store = JsonStore::new(dir.path().to_path_buf());

        for name in ["Winter Camp", "Advanced Track", "Monthly Practice"] {
            CourseService::create_course(&store, create_request(name))
                .await
                .unwrap();
        }

        let names: Vec<String> = CourseService::list_courses(&store)
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(
            names,
            vec!["Advanced Track", "Monthly Practice", "Winter Camp"]
        );
    }

    #[tokio::test]
    async fn test_duplicate_course_rejected() {
        let dir = TempDir::new().unwrap();
        let store = JsonStore::new(dir.path().to_path_buf());

        CourseService::create_course(&store, create_request("Camp"))
            .await
            .unwrap();
        let err = CourseService::create_course(&store, create_request("Camp"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::AlreadyExists(_)));
    }

    #[tokio::test]
    async fn test_replace_assignments() {
        let dir = TempDir::new().unwrap();
        let store = JsonStore::new(dir.path().to_path_buf());

        CourseService::create_course(&store, create_request("Camp"))
            .await
            .unwrap();

        let payload = ReplaceAssignmentsRequest {
            problems: vec!["p1".to_string(), "p2".to_string()],
            topics: vec!["Trees".to_string()],
            contests: Vec::new(),
        };
        let course = CourseService::replace_assignments(&store, "Camp", payload)
            .await
            .unwrap();

        assert_eq!(course.problems, vec!["p1", "p2"]);
        assert_eq!(course.topics, vec!["Trees"]);
        assert!(course.contests.is_empty());
    }

    #[tokio::test]
    async fn test_assignments_survive_unvalidated() {
        let dir = TempDir::new().unwrap();
        let store = JsonStore::new(dir.path().to_path_buf());

        CourseService::create_course(&store, create_request("Camp"))
            .await
            .unwrap();

        // references to records that do not exist are accepted as-is
        let payload = ReplaceAssignmentsRequest {
            problems: vec!["ghost-problem".to_string()],
            topics: vec!["ghost-topic".to_string()],
            contests: vec!["ghost-contest".to_string()],
        };
        let course = CourseService::replace_assignments(&store, "Camp", payload)
            .await
            .unwrap();
        assert_eq!(course.problems, vec!["ghost-problem"]);
    }

    #[tokio::test]
    async fn test_rename_collision_rejected() {
        let dir = TempDir::new().unwrap();
        let store = JsonStore::new(dir.path().to_path_buf());

        CourseService::create_course(&store, create_request("A"))
            .await
            .unwrap();
        CourseService::create_course(&store, create_request("B"))
            .await
            .unwrap();

        let payload = UpdateCourseRequest {
            name: Some("A".to_string()),
            description: None,
        };
        let err = CourseService::update_course(&store, "B", payload)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::AlreadyExists(_)));
    }
}
