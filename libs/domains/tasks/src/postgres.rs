use async_trait::async_trait;
use axum_helpers::{Page, PageRequest};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect,
};

use crate::{
    entity,
    error::{TaskError, TaskResult},
    models::{NewTask, Task},
    repository::TaskRepository,
};

#[derive(Clone)]
pub struct PgTaskRepository {
    db: DatabaseConnection,
}

impl PgTaskRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TaskRepository for PgTaskRepository {
    async fn create(&self, input: NewTask) -> TaskResult<Task> {
        let active_model: entity::ActiveModel = input.into();
        let model = active_model.insert(&self.db).await?;

        tracing::info!(task_id = model.id, project_id = model.project_id, "Created task");
        Ok(model.into())
    }

    async fn get_by_id(&self, id: i64) -> TaskResult<Option<Task>> {
        let model = entity::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Into::into))
    }

    async fn list_by_project(
        &self,
        project_id: i64,
        page: PageRequest,
    ) -> TaskResult<Page<Task>> {
        let query = entity::Entity::find().filter(entity::Column::ProjectId.eq(project_id));

        let total = query.clone().count(&self.db).await?;
        let models = query
            .order_by_asc(entity::Column::Id)
            .limit(page.limit())
            .offset(page.offset())
            .all(&self.db)
            .await?;

        Ok(Page::new(
            models.into_iter().map(Into::into).collect(),
            page,
            total,
        ))
    }

    async fn find_by_projects(&self, project_ids: Vec<i64>) -> TaskResult<Vec<Task>> {
        if project_ids.is_empty() {
            return Ok(Vec::new());
        }

        let models = entity::Entity::find()
            .filter(entity::Column::ProjectId.is_in(project_ids))
            .order_by_asc(entity::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn update(&self, task: Task) -> TaskResult<Task> {
        let id = task.id;
        let active_model: entity::ActiveModel = task.into();

        match active_model.update(&self.db).await {
            Ok(model) => {
                tracing::info!(task_id = id, "Updated task");
                Ok(model.into())
            }
            Err(DbErr::RecordNotUpdated) => Err(TaskError::NotFound(id)),
            Err(e) => Err(e.into()),
        }
    }

    async fn delete(&self, id: i64) -> TaskResult<bool> {
        let result = entity::Entity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected > 0 {
            tracing::info!(task_id = id, "Deleted task");
            Ok(true)
        } else {
            Ok(false)
        }
    }

    async fn delete_by_project(&self, project_id: i64) -> TaskResult<u64> {
        let result = entity::Entity::delete_many()
            .filter(entity::Column::ProjectId.eq(project_id))
            .exec(&self.db)
            .await?;

        tracing::info!(project_id, removed = result.rows_affected, "Deleted project tasks");
        Ok(result.rows_affected)
    }
}
