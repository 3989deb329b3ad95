//! Rutas del área de clientes
//!
//! Todo el router pasa por el gate `require_customer`; los handlers ya
//! reciben la identidad resuelta vía `AuthenticatedUser`.

use axum::{
    extract::{Path, State},
    middleware,
    routing::get,
    Extension, Json, Router,
};

use crate::controllers::customer_controller::CustomerController;
use crate::dto::customer_dto::{
    CustomerInfoResponse, CustomerSalesOrdersResponse, CustomerServiceRecordsResponse,
    CustomerVehiclesResponse, DueVehiclesResponse, EmployeeContactResponse,
    UpdateCustomerRequest, VehicleDetailResponse,
};
use crate::middleware::auth::{require_customer, AuthenticatedUser};
use crate::state::AppState;
use crate::utils::errors::AppResult;

pub fn create_customer_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/vehicles", get(vehicles))
        .route("/vehicle/:vin", get(vehicle_detail))
        .route("/info", get(info).put(update_info))
        .route("/my_sales_orders", get(my_sales_orders))
        .route("/my_service_records", get(my_service_records))
        .route("/vehicles_due_service", get(vehicles_due_service))
        .route("/employee/:employee_id", get(employee_details))
        .route_layer(middleware::from_fn_with_state(state, require_customer))
}

async fn vehicles(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthenticatedUser>,
) -> AppResult<Json<CustomerVehiclesResponse>> {
    let controller = CustomerController::new(state.pool.clone());
    Ok(Json(controller.vehicles(auth.id()).await?))
}

async fn vehicle_detail(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthenticatedUser>,
    Path(vin): Path<String>,
) -> AppResult<Json<VehicleDetailResponse>> {
    let controller = CustomerController::new(state.pool.clone());
    Ok(Json(controller.vehicle_detail(auth.id(), &vin).await?))
}

async fn info(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthenticatedUser>,
) -> AppResult<Json<CustomerInfoResponse>> {
    let controller = CustomerController::new(state.pool.clone());
    Ok(Json(controller.info(auth.id()).await?))
}

async fn update_info(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthenticatedUser>,
    Json(request): Json<UpdateCustomerRequest>,
) -> AppResult<Json<CustomerInfoResponse>> {
    let controller = CustomerController::new(state.pool.clone());
    Ok(Json(controller.update_info(auth.id(), request).await?))
}

async fn my_sales_orders(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthenticatedUser>,
) -> AppResult<Json<CustomerSalesOrdersResponse>> {
    let controller = CustomerController::new(state.pool.clone());
    Ok(Json(controller.my_sales_orders(auth.id()).await?))
}

async fn my_service_records(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthenticatedUser>,
) -> AppResult<Json<CustomerServiceRecordsResponse>> {
    let controller = CustomerController::new(state.pool.clone());
    Ok(Json(controller.my_service_records(auth.id()).await?))
}

async fn vehicles_due_service(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthenticatedUser>,
) -> AppResult<Json<DueVehiclesResponse>> {
    let controller = CustomerController::new(state.pool.clone());
    Ok(Json(controller.vehicles_due_service(auth.id()).await?))
}

async fn employee_details(
    State(state): State<AppState>,
    Path(employee_id): Path<i32>,
) -> AppResult<Json<EmployeeContactResponse>> {
    let controller = CustomerController::new(state.pool.clone());
    Ok(Json(controller.employee_details(employee_id).await?))
}
