use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::class::{CreateClassRequest, UpdateClassRequest};
use crate::error::{Result, StorageError};
use crate::models::{Category, Class};

/// Repository for Class database operations
pub struct ClassRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ClassRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all classes, newest first
    pub async fn list(&self) -> Result<Vec<Class>> {
        let classes = sqlx::query_as::<_, Class>(
            r#"
            SELECT class_id, name, category, contact_email, is_active, created_at
            FROM classes
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(classes)
    }

    /// List classes of one category, name ascending
    pub async fn find_by_category(&self, category: Category) -> Result<Vec<Class>> {
        let classes = sqlx::query_as::<_, Class>(
            r#"
            SELECT class_id, name, category, contact_email, is_active, created_at
            FROM classes
            WHERE category = $1
            ORDER BY name ASC
            "#,
        )
        .bind(category.as_str())
        .fetch_all(self.pool)
        .await?;

        Ok(classes)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Class> {
        let class = sqlx::query_as::<_, Class>(
            r#"
            SELECT class_id, name, category, contact_email, is_active, created_at
            FROM classes
            WHERE class_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(class)
    }

    /// Fetch several classes at once; callers compare result length against
    /// the requested set to detect missing references.
    pub async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Class>> {
        let classes = sqlx::query_as::<_, Class>(
            r#"
            SELECT class_id, name, category, contact_email, is_active, created_at
            FROM classes
            WHERE class_id = ANY($1)
            "#,
        )
        .bind(ids)
        .fetch_all(self.pool)
        .await?;

        Ok(classes)
    }

    pub async fn create(&self, req: &CreateClassRequest) -> Result<Class> {
        let class = sqlx::query_as::<_, Class>(
            r#"
            INSERT INTO classes (name, category, contact_email, is_active)
            VALUES ($1, $2, $3, $4)
            RETURNING class_id, name, category, contact_email, is_active, created_at
            "#,
        )
        .bind(&req.name)
        .bind(&req.category)
        .bind(&req.contact_email)
        .bind(req.is_active)
        .fetch_one(self.pool)
        .await
        .map_err(|e| StorageError::from(e).on_unique("Class name already exists"))?;

        Ok(class)
    }

    pub async fn update(&self, id: Uuid, req: &UpdateClassRequest) -> Result<Class> {
        let class = sqlx::query_as::<_, Class>(
            r#"
            UPDATE classes
            SET
                name = COALESCE($2, name),
                category = COALESCE($3, category),
                contact_email = COALESCE($4, contact_email),
                is_active = COALESCE($5, is_active)
            WHERE class_id = $1
            RETURNING class_id, name, category, contact_email, is_active, created_at
            "#,
        )
        .bind(id)
        .bind(&req.name)
        .bind(&req.category)
        .bind(&req.contact_email)
        .bind(req.is_active)
        .fetch_optional(self.pool)
        .await
        .map_err(|e| StorageError::from(e).on_unique("Class name already exists"))?
        .ok_or(StorageError::NotFound)?;

        Ok(class)
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM classes WHERE class_id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}
