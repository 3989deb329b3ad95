//! Rutas de inventario de vehículos
//!
//! El listado de disponibles es público; la compra exige sesión de
//! cliente, de ahí los dos sub-routers.

use axum::{
    extract::{Path, State},
    middleware,
    routing::{get, post},
    Extension, Json, Router,
};

use crate::controllers::vehicle_controller::VehicleController;
use crate::dto::auth_dto::MessageResponse;
use crate::dto::vehicle_dto::{AvailableVehiclesResponse, BuyVehicleRequest};
use crate::middleware::auth::{require_customer, AuthenticatedUser};
use crate::state::AppState;
use crate::utils::errors::AppResult;

pub fn create_vehicle_router(state: AppState) -> Router<AppState> {
    let public_routes = Router::new().route("/vehicles", get(available_vehicles));

    let purchase_routes = Router::new()
        .route("/vehicles/buy/:vin", post(buy_vehicle))
        .route_layer(middleware::from_fn_with_state(state, require_customer));

    public_routes.merge(purchase_routes)
}

async fn available_vehicles(
    State(state): State<AppState>,
) -> AppResult<Json<AvailableVehiclesResponse>> {
    let controller = VehicleController::new(state.pool.clone());
    Ok(Json(controller.available_vehicles().await?))
}

async fn buy_vehicle(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthenticatedUser>,
    Path(vin): Path<String>,
    Json(request): Json<BuyVehicleRequest>,
) -> AppResult<Json<MessageResponse>> {
    let controller = VehicleController::new(state.pool.clone());
    Ok(Json(controller.buy_vehicle(auth.id(), &vin, request).await?))
}
