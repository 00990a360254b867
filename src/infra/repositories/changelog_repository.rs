//! Changelog repository implementation.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};
use uuid::Uuid;

use super::base;
use super::entities::changelog::{self, ActiveModel, Entity as ChangelogEntity};
use crate::domain::{Changelog, ChangelogChanges, NewChangelog};
use crate::errors::AppResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Changelog repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ChangelogRepository: Send + Sync {
    /// List every changelog entry, newest first
    async fn list(&self) -> AppResult<Vec<Changelog>>;

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Changelog>>;

    async fn create(&self, input: NewChangelog) -> AppResult<Changelog>;

    async fn update(&self, id: Uuid, changes: ChangelogChanges) -> AppResult<Changelog>;

    async fn delete(&self, id: Uuid) -> AppResult<()>;

    /// Flag an entry as read
    async fn mark_read(&self, id: Uuid) -> AppResult<Changelog>;
}

/// Concrete implementation of ChangelogRepository
pub struct ChangelogStore {
    db: DatabaseConnection,
}

impl ChangelogStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ChangelogRepository for ChangelogStore {
    async fn list(&self) -> AppResult<Vec<Changelog>> {
        let models = ChangelogEntity::find()
            .order_by_desc(changelog::Column::CreatedDate)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Changelog::from).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Changelog>> {
        base::find_one::<ChangelogEntity, _, _>(&self.db, id).await
    }

    async fn create(&self, input: NewChangelog) -> AppResult<Changelog> {
        let active_model = ActiveModel {
            id: Set(Uuid::new_v4()),
            content: Set(input.content),
            change_type: Set(input.change_type),
            was_read: Set(false),
            created_date: Set(chrono::Utc::now()),
        };

        let model = active_model.insert(&self.db).await?;
        Ok(Changelog::from(model))
    }

    async fn update(&self, id: Uuid, changes: ChangelogChanges) -> AppResult<Changelog> {
        let existing = base::find_model::<ChangelogEntity, _>(&self.db, id).await?;

        let mut active: ActiveModel = existing.into();
        active.content = Set(changes.content);
        active.change_type = Set(changes.change_type);
        active.was_read = Set(changes.was_read);

        let model = active.update(&self.db).await?;
        Ok(Changelog::from(model))
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        base::delete_one::<ChangelogEntity, _>(&self.db, id).await
    }

    async fn mark_read(&self, id: Uuid) -> AppResult<Changelog> {
        let existing = base::find_model::<ChangelogEntity, _>(&self.db, id).await?;

        let mut active: ActiveModel = existing.into();
        active.was_read = Set(true);

        let model = active.update(&self.db).await?;
        Ok(Changelog::from(model))
    }
}
