use crate::{
    db::{with_transaction, DbPool},
    error::AppError,
    models::category::{Category, CategoryCreateRequest, CategoryResponse, CategoryUpdateRequest},
    repository::category::CategoryRepository,
    utils::validation::validate_name,
};

// Cada operación abre su propia transacción: si algo falla, nada queda escrito
#[derive(Clone)]
pub struct CategoryService {
    repository: CategoryRepository,
    pool: DbPool,
}

impl CategoryService {
    pub fn new(repository: CategoryRepository, pool: DbPool) -> Self {
        Self { repository, pool }
    }

    pub async fn create(&self, request: CategoryCreateRequest) -> Result<CategoryResponse, AppError> {
        let repository = self.repository;

        with_transaction(&self.pool, move |conn| {
            Box::pin(async move {
                validate_name(&request.name)?;

                let category = repository
                    .save(conn, Category { id: 0, name: request.name })
                    .await?;

                tracing::info!("Categoría creada: id={}", category.id);
                Ok(CategoryResponse::from(category))
            })
        })
        .await
    }

    pub async fn update(
        &self,
        id: i64,
        request: CategoryUpdateRequest,
    ) -> Result<CategoryResponse, AppError> {
        let repository = self.repository;

        with_transaction(&self.pool, move |conn| {
            Box::pin(async move {
                validate_name(&request.name)?;

                let mut category = repository
                    .find_by_id(&mut *conn, id)
                    .await?
                    .ok_or_else(|| not_found(id))?;

                category.name = request.name;
                let category = repository.update(conn, category).await?;

                tracing::info!("Categoría actualizada: id={}", category.id);
                Ok(CategoryResponse::from(category))
            })
        })
        .await
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        let repository = self.repository;

        with_transaction(&self.pool, move |conn| {
            Box::pin(async move {
                let category = repository
                    .find_by_id(&mut *conn, id)
                    .await?
                    .ok_or_else(|| not_found(id))?;

                repository.delete(conn, category.id).await?;

                tracing::info!("Categoría eliminada: id={}", id);
                Ok(())
            })
        })
        .await
    }

    pub async fn find_by_id(&self, id: i64) -> Result<CategoryResponse, AppError> {
        let repository = self.repository;

        with_transaction(&self.pool, move |conn| {
            Box::pin(async move {
                let category = repository
                    .find_by_id(conn, id)
                    .await?
                    .ok_or_else(|| not_found(id))?;

                Ok(CategoryResponse::from(category))
            })
        })
        .await
    }

    pub async fn find_all(&self) -> Result<Vec<CategoryResponse>, AppError> {
        let repository = self.repository;

        with_transaction(&self.pool, move |conn| {
            Box::pin(async move {
                let categories = repository.find_all(conn).await?;
                Ok(categories.into_iter().map(CategoryResponse::from).collect())
            })
        })
        .await
    }
}

fn not_found(id: i64) -> AppError {
    AppError::NotFound(format!("Categoría {} no encontrada", id))
}
