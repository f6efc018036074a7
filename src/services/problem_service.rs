//! Problem service

use std::path::Path;

use crate::{
    catalog::{self, Direction},
    error::{AppError, AppResult},
    handlers::problems::{
        request::{CreateProblemRequest, UpdateProblemRequest},
        response::{ProblemGroupResponse, ProblemResponse},
    },
    models::Problem,
    store::{
        JsonStore,
        repositories::{ProblemRepository, TopicRepository},
    },
    utils::{
        files::{FileContent, read_catalog_file},
        validation,
    },
};

/// Problem service for business logic
pub struct ProblemService;

impl ProblemService {
    /// List problems grouped by principal topic, in display order
    pub async fn list_problems(store: &JsonStore) -> AppResult<Vec<ProblemGroupResponse>> {
        let problems = ProblemRepository::load(store).await?;
        let topics = TopicRepository::load(store).await?;

        let groups = catalog::group_by_principal_topic(&problems, &topics);
        Ok(groups.into_iter().map(Into::into).collect())
    }

    /// Get a problem by id
    pub async fn get_problem(store: &JsonStore, id: &str) -> AppResult<ProblemResponse> {
        let problems = ProblemRepository::load(store).await?;
        let problem = problems
            .into_iter()
            .find(|p| p.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Problem '{id}' not found")))?;

        Ok(problem.into())
    }

    /// Create a new problem
    pub async fn create_problem(
        store: &JsonStore,
        payload: CreateProblemRequest,
    ) -> AppResult<ProblemResponse> {
        let id = validation::normalize_name(&payload.id)
            .map_err(|e| AppError::Validation(e.to_string()))?;
        let url = Self::normalize_url(&payload.url)?;
        let solution_path = Self::normalize_path(payload.solution_path.as_deref())?;

        let mut problems = ProblemRepository::load(store).await?;
        if problems.iter().any(|p| p.id == id) {
            return Err(AppError::AlreadyExists(format!(
                "A problem with id '{id}' already exists"
            )));
        }

        let problem = Problem {
            id,
            url,
            contest: validation::normalize_optional(payload.contest.as_deref()),
            topics: payload.topics,
            solution_path,
            tag: validation::sanitize_string(&payload.tag),
        };
        problems.push(problem.clone());
        ProblemRepository::save(store, &problems).await?;

        tracing::info!(problem = %problem.id, "Created problem");
        Ok(problem.into())
    }

    /// Update a problem, optionally changing its id
    pub async fn update_problem(
        store: &JsonStore,
        id: &str,
        payload: UpdateProblemRequest,
    ) -> AppResult<ProblemResponse> {
        let mut problems = ProblemRepository::load(store).await?;
        let idx = problems
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Problem '{id}' not found")))?;

        if let Some(new_id) = payload.id.as_deref() {
            let new_id = validation::normalize_name(new_id)
                .map_err(|e| AppError::Validation(e.to_string()))?;
            if new_id != id && problems.iter().any(|p| p.id == new_id) {
                return Err(AppError::AlreadyExists(format!(
                    "A problem with id '{new_id}' already exists"
                )));
            }
            problems[idx].id = new_id;
        }

        if let Some(url) = payload.url.as_deref() {
            problems[idx].url = Self::normalize_url(url)?;
        }

        if let Some(contest) = payload.contest.as_deref() {
            problems[idx].contest = validation::normalize_optional(Some(contest));
        }

        if let Some(topics) = payload.topics {
            problems[idx].topics = topics;
        }

        if let Some(path) = payload.solution_path.as_deref() {
            problems[idx].solution_path = Self::normalize_path(Some(path))?;
        }

        if let Some(tag) = payload.tag.as_deref() {
            problems[idx].tag = validation::sanitize_string(tag);
        }

        let problem = problems[idx].clone();
        ProblemRepository::save(store, &problems).await?;

        Ok(problem.into())
    }

    /// Delete a problem
    pub async fn delete_problem(store: &JsonStore, id: &str) -> AppResult<()> {
        let mut problems = ProblemRepository::load(store).await?;
        let before = problems.len();
        problems.retain(|p| p.id != id);

        if problems.len() == before {
            return Err(AppError::NotFound(format!("Problem '{id}' not found")));
        }

        ProblemRepository::save(store, &problems).await?;
        tracing::info!(problem = %id, "Deleted problem");
        Ok(())
    }

    /// Move a problem one position up or down within its principal-topic
    /// group; a move past the group boundary is a no-op
    pub async fn move_problem(store: &JsonStore, id: &str, direction: Direction) -> AppResult<()> {
        let mut problems = ProblemRepository::load(store).await?;
        let topics = TopicRepository::load(store).await?;

        catalog::reorder_problem_within_group(&mut problems, &topics, id, direction)?;
        ProblemRepository::save(store, &problems).await
    }

    /// Stream a problem's solution file
    pub async fn open_solution(
        store: &JsonStore,
        files_dir: &Path,
        id: &str,
    ) -> AppResult<FileContent> {
        let problems = ProblemRepository::load(store).await?;
        let problem = problems
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Problem '{id}' not found")))?;

        let relative = problem
            .solution_path
            .as_deref()
            .filter(|p| !p.is_empty())
            .ok_or_else(|| {
                AppError::NotFound(format!("Problem '{id}' has no solution file"))
            })?;

        read_catalog_file(files_dir, relative).await
    }

    fn normalize_url(url: &str) -> AppResult<String> {
        let url = validation::sanitize_string(url);
        if url.is_empty() {
            return Err(AppError::Validation("URL cannot be empty".to_string()));
        }
        Ok(url)
    }

    fn normalize_path(path: Option<&str>) -> AppResult<Option<String>> {
        let Some(path) = validation::normalize_optional(path) else {
            return Ok(None);
        };
        validation::validate_relative_path(&path)
            .map_err(|e| AppError::Validation(e.to_string()))?;
        Ok(Some(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::NO_PRINCIPAL_TOPIC;
    use crate::handlers::topics::request::CreateTopicRequest;
    use crate::services::TopicService;
    use tempfile::TempDir;

    async fn seed_topic(store: &JsonStore, name: &str) {
        TopicService::create_topic(
            store,
            CreateTopicRequest {
                name: name.to_string(),
                category: None,
                resource_path: None,
            },
        )
        .await
        .unwrap();
    }

    fn create_request(id: &str, topics: &[&str], tag: &str) -> CreateProblemRequest {
        CreateProblemRequest {
            id: id.to_string(),
            url: format!("https://judge.example/{id}"),
            contest: None,
            topics: topics.iter().map(|t| t.to_string()).collect(),
            solution_path: None,
            tag: tag.to_string(),
        }
    }

    #[tokio::test]
    async fn test_listing_groups_by_principal_topic() {
        let dir = TempDir::new().unwrap();
        let store = JsonStore::new(dir.path().to_path_buf());

        seed_topic(&store, "Intro").await;
        seed_topic(&store, "Trees").await;

        ProblemService::create_problem(&store, create_request("1", &["Trees"], ""))
            .await
            .unwrap();
        ProblemService::create_problem(&store, create_request("2", &["Intro"], "introductorio"))
            .await
            .unwrap();
        ProblemService::create_problem(&store, create_request("3", &["Trees"], "introductorio"))
            .await
            .unwrap();

        let groups = ProblemService::list_problems(&store).await.unwrap();

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].name, "Intro");
        assert_eq!(groups[1].name, "Trees");
        let trees: Vec<&str> = groups[1].problems.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(trees, vec!["3", "1"]);
    }

    #[tokio::test]
    async fn test_duplicate_id_rejected() {
        let dir = TempDir::new().unwrap();
        let store = JsonStore::new(dir.path().to_path_buf());

        ProblemService::create_problem(&store, create_request("1", &[], ""))
            .await
            .unwrap();
        let err = ProblemService::create_problem(&store, create_request("1", &[], ""))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::AlreadyExists(_)));
    }

    #[tokio::test]
    async fn test_id_rename_collision_rejected() {
        let dir = TempDir::new().unwrap();
        let store = JsonStore::new(dir.path().to_path_buf());

        ProblemService::create_problem(&store, create_request("1", &[], ""))
            .await
            .unwrap();
        ProblemService::create_problem(&store, create_request("2", &[], ""))
            .await
            .unwrap();

        let payload = UpdateProblemRequest {
            id: Some("1".to_string()),
            url: None,
            contest: None,
            topics: None,
            solution_path: None,
            tag: None,
        };
        let err = ProblemService::update_problem(&store, "2", payload)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::AlreadyExists(_)));
    }

    #[tokio::test]
    async fn test_deleting_topic_leaves_problem_reference_dangling() {
        let dir = TempDir::new().unwrap();
        let store = JsonStore::new(dir.path().to_path_buf());

        seed_topic(&store, "Trees").await;
        ProblemService::create_problem(&store, create_request("1", &["Trees"], ""))
            .await
            .unwrap();

        TopicService::delete_topic(&store, "Trees").await.unwrap();

        // the problem still lists the dead reference and now groups under it
        let problem = ProblemService::get_problem(&store, "1").await.unwrap();
        assert_eq!(problem.topics, vec!["Trees"]);

        let groups = ProblemService::list_problems(&store).await.unwrap();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].name, "Trees");
    }

    #[tokio::test]
    async fn test_problem_without_topics_groups_under_sentinel() {
        let dir = TempDir::new().unwrap();
        let store = JsonStore::new(dir.path().to_path_buf());

        ProblemService::create_problem(&store, create_request("1", &[], ""))
            .await
            .unwrap();

        let groups = ProblemService::list_problems(&store).await.unwrap();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].name, NO_PRINCIPAL_TOPIC);
    }

    #[tokio::test]
    async fn test_move_within_group_persists_swap() {
        let dir = TempDir::new().unwrap();
        let store = JsonStore::new(dir.path().to_path_buf());

        seed_topic(&store, "Trees").await;
        ProblemService::create_problem(&store, create_request("a", &["Trees"], ""))
            .await
            .unwrap();
        ProblemService::create_problem(&store, create_request("b", &["Trees"], ""))
            .await
            .unwrap();

        ProblemService::move_problem(&store, "b", Direction::Up)
            .await
            .unwrap();

        let groups = ProblemService::list_problems(&store).await.unwrap();
        let ids: Vec<&str> = groups[0].problems.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[tokio::test]
    async fn test_move_at_group_boundary_is_noop() {
        let dir = TempDir::new().unwrap();
        let store = JsonStore::new(dir.path().to_path_buf());

        seed_topic(&store, "Trees").await;
        ProblemService::create_problem(&store, create_request("a", &["Trees"], ""))
            .await
            .unwrap();

        ProblemService::move_problem(&store, "a", Direction::Up)
            .await
            .unwrap();
        ProblemService::move_problem(&store, "a", Direction::Down)
            .await
            .unwrap();

        let groups = ProblemService::list_problems(&store).await.unwrap();
        assert_eq!(groups[0].problems.len(), 1);
    }

    #[tokio::test]
    async fn test_open_solution_streams_file() {
        let dir = TempDir::new().unwrap();
        let store = JsonStore::new(dir.path().to_path_buf());

        tokio::fs::write(dir.path().join("sol.cpp"), b"int main() {}")
            .await
            .unwrap();

        let mut request = create_request("1", &[], "");
        request.solution_path = Some("sol.cpp".to_string());
        ProblemService::create_problem(&store, request).await.unwrap();

        let content = ProblemService::open_solution(&store, dir.path(), "1")
            .await
            .unwrap();
        assert_eq!(content.bytes, b"int main() {}");
    }
}
