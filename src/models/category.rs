use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// Fila de la tabla `category`
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

// Lo que recibimos en POST /api/categories
#[derive(Debug, Deserialize)]
pub struct CategoryCreateRequest {
    pub name: String,
}

// Lo que recibimos en PUT /api/categories/:id (el id viene en la URL)
#[derive(Debug, Deserialize)]
pub struct CategoryUpdateRequest {
    pub name: String,
}

// Lo que devolvemos dentro de `data`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryResponse {
    pub id: i64,
    pub name: String,
}

impl From<Category> for CategoryResponse {
    fn from(category: Category) -> Self {
        Self {
            id: category.id,
            name: category.name,
        }
    }
}
