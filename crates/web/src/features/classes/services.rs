use sqlx::PgPool;
use storage::{
    dto::class::{CreateClassRequest, UpdateClassRequest},
    error::Result,
    models::Class,
    repository::class::ClassRepository,
};
use uuid::Uuid;

/// List all classes
pub async fn list_classes(pool: &PgPool) -> Result<Vec<Class>> {
    let repo = ClassRepository::new(pool);
    repo.list().await
}

/// Get a class by id
pub async fn get_class(pool: &PgPool, id: Uuid) -> Result<Class> {
    let repo = ClassRepository::new(pool);
    repo.find_by_id(id).await
}

/// Create a new class
pub async fn create_class(pool: &PgPool, request: &CreateClassRequest) -> Result<Class> {
    let repo = ClassRepository::new(pool);
    repo.create(request).await
}

/// Update a class
pub async fn update_class(pool: &PgPool, id: Uuid, request: &UpdateClassRequest) -> Result<Class> {
    let repo = ClassRepository::new(pool);
    repo.update(id, request).await
}

/// Delete a class
pub async fn delete_class(pool: &PgPool, id: Uuid) -> Result<()> {
    let repo = ClassRepository::new(pool);
    repo.delete(id).await
}
