//! Changelog service.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{Changelog, ChangelogChanges, NewChangelog};
use crate::errors::{AppResult, OptionExt};
use crate::infra::UnitOfWork;

/// Changelog service trait for dependency injection.
#[async_trait]
pub trait ChangelogService: Send + Sync {
    async fn list_changelogs(&self) -> AppResult<Vec<Changelog>>;

    async fn get_changelog(&self, id: Uuid) -> AppResult<Changelog>;

    async fn create_changelog(&self, input: NewChangelog) -> AppResult<Changelog>;

    async fn update_changelog(&self, id: Uuid, changes: ChangelogChanges) -> AppResult<Changelog>;

    async fn delete_changelog(&self, id: Uuid) -> AppResult<()>;

    async fn mark_read(&self, id: Uuid) -> AppResult<Changelog>;
}

/// Concrete implementation of ChangelogService using Unit of Work.
pub struct ChangelogManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> ChangelogManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> ChangelogService for ChangelogManager<U> {
    async fn list_changelogs(&self) -> AppResult<Vec<Changelog>> {
        self.uow.changelogs().list().await
    }

    async fn get_changelog(&self, id: Uuid) -> AppResult<Changelog> {
        self.uow.changelogs().find_by_id(id).await?.ok_or_not_found()
    }

    async fn create_changelog(&self, input: NewChangelog) -> AppResult<Changelog> {
        let changelog = self.uow.changelogs().create(input).await?;
        tracing::info!(changelog_id = %changelog.id, change_type = %changelog.change_type, "Changelog posted");
        Ok(changelog)
    }

    async fn update_changelog(&self, id: Uuid, changes: ChangelogChanges) -> AppResult<Changelog> {
        self.uow.changelogs().update(id, changes).await
    }

    async fn delete_changelog(&self, id: Uuid) -> AppResult<()> {
        self.uow.changelogs().delete(id).await
    }

    async fn mark_read(&self, id: Uuid) -> AppResult<Changelog> {
        self.uow.changelogs().mark_read(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use mockall::predicate::eq;

    use crate::errors::AppError;
    use crate::infra::MockChangelogRepository;
    use crate::services::test_support::TestUnitOfWork;

    #[tokio::test]
    async fn test_mark_read_passes_through() {
        let id = Uuid::new_v4();
        let mut repo = MockChangelogRepository::new();
        repo.expect_mark_read().with(eq(id)).times(1).returning(|id| {
            Ok(Changelog {
                id,
                content: "PDF download".to_string(),
                change_type: "feature".to_string(),
                was_read: true,
                created_date: Utc::now(),
            })
        });

        let uow = TestUnitOfWork {
            changelogs: Arc::new(repo),
            ..TestUnitOfWork::default()
        };
        let changelog = ChangelogManager::new(Arc::new(uow))
            .mark_read(id)
            .await
            .unwrap();

        assert!(changelog.was_read);
    }

    #[tokio::test]
    async fn test_get_missing_changelog() {
        let mut repo = MockChangelogRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));

        let uow = TestUnitOfWork {
            changelogs: Arc::new(repo),
            ..TestUnitOfWork::default()
        };
        let result = ChangelogManager::new(Arc::new(uow))
            .get_changelog(Uuid::new_v4())
            .await;

        assert!(matches!(result, Err(AppError::NotFound)));
    }
}
