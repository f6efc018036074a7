//! Contest service

use crate::{
    catalog::{self, Direction},
    error::{AppError, AppResult},
    handlers::contests::{
        request::{CreateContestRequest, UpdateContestRequest},
        response::{ContestCategoryResponse, ContestGroupResponse, ContestResponse},
    },
    models::{Contest, ContestCategory},
    store::{JsonStore, repositories::ContestRepository},
    utils::validation,
};

/// Contest service for business logic
pub struct ContestService;

impl ContestService {
    /// List contests grouped per category, in category-rank order.
    ///
    /// Reading repairs the stored category document when contests carry
    /// labels it does not know yet.
    pub async fn list_contests(store: &JsonStore) -> AppResult<Vec<ContestGroupResponse>> {
        let contests = ContestRepository::load(store).await?;
        let categories = Self::reconciled_categories(store, &contests).await?;

        let groups = catalog::group_contests_by_category(&contests, &categories);
        Ok(groups.into_iter().map(Into::into).collect())
    }

    /// Get a contest by name
    pub async fn get_contest(store: &JsonStore, name: &str) -> AppResult<ContestResponse> {
        let contests = ContestRepository::load(store).await?;
        let contest = contests
            .into_iter()
            .find(|c| c.name == name)
            .ok_or_else(|| AppError::NotFound(format!("Contest '{name}' not found")))?;

        Ok(contest.into())
    }

    /// The reconciled category list, in rank order
    pub async fn list_categories(store: &JsonStore) -> AppResult<Vec<ContestCategoryResponse>> {
        let contests = ContestRepository::load(store).await?;
        let categories = Self::reconciled_categories(store, &contests).await?;

        Ok(categories.into_iter().map(Into::into).collect())
    }

    /// Create a new contest
    pub async fn create_contest(
        store: &JsonStore,
        payload: CreateContestRequest,
    ) -> AppResult<ContestResponse> {
        let name = validation::normalize_name(&payload.name)
            .map_err(|e| AppError::Validation(e.to_string()))?;
        let category = validation::normalize_optional(payload.category.as_deref());

        let mut contests = ContestRepository::load(store).await?;
        if contests.iter().any(|c| c.name == name) {
            return Err(AppError::AlreadyExists(format!(
                "A contest named '{name}' already exists"
            )));
        }

        let contest = Contest {
            name,
            year: payload.year,
            category,
        };
        contests.push(contest.clone());
        ContestRepository::save(store, &contests).await?;

        // pick up a freshly introduced category right away
        Self::reconciled_categories(store, &contests).await?;

        tracing::info!(contest = %contest.name, "Created contest");
        Ok(contest.into())
    }

    /// Update a contest, optionally renaming it.
    ///
    /// The year is always replaced by the (leniently parsed) payload value.
    pub async fn update_contest(
        store: &JsonStore,
        name: &str,
        payload: UpdateContestRequest,
    ) -> AppResult<ContestResponse> {
        let mut contests = ContestRepository::load(store).await?;
        let idx = contests
            .iter()
            .position(|c| c.name == name)
            .ok_or_else(|| AppError::NotFound(format!("Contest '{name}' not found")))?;

        if let Some(new_name) = payload.name.as_deref() {
            let new_name = validation::normalize_name(new_name)
                .map_err(|e| AppError::Validation(e.to_string()))?;
            if new_name != name && contests.iter().any(|c| c.name == new_name) {
                return Err(AppError::AlreadyExists(format!(
                    "A contest named '{new_name}' already exists"
                )));
            }
            contests[idx].name = new_name;
        }

        contests[idx].year = payload.year;

        if let Some(category) = payload.category.as_deref() {
            contests[idx].category = validation::normalize_optional(Some(category));
        }

        let contest = contests[idx].clone();
        ContestRepository::save(store, &contests).await?;

        Self::reconciled_categories(store, &contests).await?;

        Ok(contest.into())
    }

    /// Delete a contest.
    ///
    /// Its category entry stays; category ordering is curated separately.
    pub async fn delete_contest(store: &JsonStore, name: &str) -> AppResult<()> {
        let mut contests = ContestRepository::load(store).await?;
        let before = contests.len();
        contests.retain(|c| c.name != name);

        if contests.len() == before {
            return Err(AppError::NotFound(format!("Contest '{name}' not found")));
        }

        ContestRepository::save(store, &contests).await?;
        tracing::info!(contest = %name, "Deleted contest");
        Ok(())
    }

    /// Move a category one position up or down; a move past either end is a
    /// no-op
    pub async fn move_category(
        store: &JsonStore,
        name: &str,
        direction: Direction,
    ) -> AppResult<()> {
        let contests = ContestRepository::load(store).await?;
        // reconciled result is already in rank order
        let mut categories = Self::reconciled_categories(store, &contests).await?;

        catalog::reorder_category(&mut categories, name, direction)?;
        ContestRepository::save_categories(store, &categories).await
    }

    /// Load the stored categories, fold in any labels found on contests,
    /// and persist the repaired set
    async fn reconciled_categories(
        store: &JsonStore,
        contests: &[Contest],
    ) -> AppResult<Vec<ContestCategory>> {
        let stored = ContestRepository::load_categories(store).await?;
        let (categories, changed) = catalog::reconcile_categories(stored, contests);

        if changed {
            ContestRepository::save_categories(store, &categories).await?;
            tracing::info!(total = categories.len(), "Repaired contest category document");
        }

        Ok(categories)
    }
}
