use axum::{middleware, routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{handlers::category, state::AppState, utils::api_key::api_key_middleware};

pub fn create_routes(state: AppState) -> Router {
    let category_routes = Router::new()
        .route(
            "/api/categories",
            get(category::list_categories_handler)
                .post(category::create_category_handler)
                .fallback(category::method_not_allowed_handler),
        )
        .route(
            "/api/categories/:id",
            get(category::get_category_handler)
                .put(category::update_category_handler)
                .delete(category::delete_category_handler)
                .fallback(category::method_not_allowed_handler),
        )
        .fallback(category::fallback_handler);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // `layer` (no `route_layer`): la API key se exige también en rutas desconocidas
    category_routes
        .layer(middleware::from_fn_with_state(state.clone(), api_key_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
