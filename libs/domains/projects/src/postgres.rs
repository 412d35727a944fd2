use async_trait::async_trait;
use axum_helpers::{Page, PageRequest};
use domain_tasks::{ProjectLookup, TaskResult};
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryOrder,
    QuerySelect,
};

use crate::{
    entity,
    error::{ProjectError, ProjectResult},
    models::{CreateProject, Project},
    repository::ProjectRepository,
};

#[derive(Clone)]
pub struct PgProjectRepository {
    db: DatabaseConnection,
}

impl PgProjectRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProjectRepository for PgProjectRepository {
    async fn create(&self, input: CreateProject) -> ProjectResult<Project> {
        let active_model: entity::ActiveModel = input.into();
        let model = active_model.insert(&self.db).await?;

        tracing::info!(project_id = model.id, "Created project");
        Ok(model.into())
    }

    async fn get_by_id(&self, id: i64) -> ProjectResult<Option<Project>> {
        let model = entity::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Into::into))
    }

    async fn list(&self, page: PageRequest) -> ProjectResult<Page<Project>> {
        let total = entity::Entity::find().count(&self.db).await?;
        let models = entity::Entity::find()
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

    async fn update(&self, project: Project) -> ProjectResult<Project> {
        let id = project.id;
        let active_model: entity::ActiveModel = project.into();

        match active_model.update(&self.db).await {
            Ok(model) => {
                tracing::info!(project_id = id, "Updated project");
                Ok(model.into())
            }
            Err(DbErr::RecordNotUpdated) => Err(ProjectError::NotFound(id)),
            Err(e) => Err(e.into()),
        }
    }

    async fn delete(&self, id: i64) -> ProjectResult<bool> {
        let result = entity::Entity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected > 0 {
            tracing::info!(project_id = id, "Deleted project");
            Ok(true)
        } else {
            Ok(false)
        }
    }

    async fn exists(&self, id: i64) -> ProjectResult<bool> {
        let count = entity::Entity::find_by_id(id).count(&self.db).await?;
        Ok(count > 0)
    }
}

#[async_trait]
impl ProjectLookup for PgProjectRepository {
    async fn project_exists(&self, project_id: i64) -> TaskResult<bool> {
        Ok(self.exists(project_id).await?)
    }
}
