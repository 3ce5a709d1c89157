use sqlx::AnyConnection;

use crate::models::category::Category;

// Acceso a la tabla `category`. Todas las operaciones reciben la conexión de
// una transacción abierta; el commit/rollback lo decide el servicio.
#[derive(Debug, Clone, Copy, Default)]
pub struct CategoryRepository;

impl CategoryRepository {
    pub fn new() -> Self {
        Self
    }

    // INSERT ... RETURNING nos devuelve el id generado por la base
    pub async fn save(
        &self,
        conn: &mut AnyConnection,
        category: Category,
    ) -> Result<Category, sqlx::Error> {
        sqlx::query_as::<_, Category>("INSERT INTO category (name) VALUES ($1) RETURNING id, name")
            .bind(category.name)
            .fetch_one(&mut *conn)
            .await
    }

    // Si el id no existe no pasa nada: la existencia la verifica quien llama
    pub async fn update(
        &self,
        conn: &mut AnyConnection,
        category: Category,
    ) -> Result<Category, sqlx::Error> {
        sqlx::query("UPDATE category SET name = $1 WHERE id = $2")
            .bind(category.name.as_str())
            .bind(category.id)
            .execute(&mut *conn)
            .await?;

        Ok(category)
    }

    pub async fn delete(&self, conn: &mut AnyConnection, id: i64) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM category WHERE id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await?;

        Ok(())
    }

    pub async fn find_by_id(
        &self,
        conn: &mut AnyConnection,
        id: i64,
    ) -> Result<Option<Category>, sqlx::Error> {
        sqlx::query_as::<_, Category>("SELECT id, name FROM category WHERE id = $1")
            .bind(id)
            .fetch_optional(&mut *conn)
            .await
    }

    pub async fn find_all(&self, conn: &mut AnyConnection) -> Result<Vec<Category>, sqlx::Error> {
        sqlx::query_as::<_, Category>("SELECT id, name FROM category ORDER BY id ASC")
            .fetch_all(&mut *conn)
            .await
    }
}
