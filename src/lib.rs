pub mod config;
pub mod controllers;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod state;
pub mod utils;

use axum::Router;

use middleware::cors::cors_middleware_with_origins;
use state::AppState;

/// Arma el router completo de la aplicación, con los cinco routers de
/// área montados bajo `/api` y la capa de CORS configurada.
pub fn create_app(state: AppState) -> Router {
    let cors = cors_middleware_with_origins(&state.config.cors_origins);

    Router::new()
        .nest("/api/auth", routes::auth_routes::create_auth_router())
        .nest(
            "/api/customer",
            routes::customer_routes::create_customer_router(state.clone()),
        )
        .nest(
            "/api/employee",
            routes::employee_routes::create_employee_router(state.clone()),
        )
        .nest(
            "/api/manager",
            routes::manager_routes::create_manager_router(state.clone()),
        )
        .nest(
            "/api/vehicle",
            routes::vehicle_routes::create_vehicle_router(state.clone()),
        )
        .layer(cors)
        .with_state(state)
}
