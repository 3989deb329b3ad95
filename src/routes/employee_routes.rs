//! Rutas del área de empleados
//!
//! El grueso del router es staff-only (empleados y managers). El detalle
//! de vehículo por vin queda en un sub-router aparte porque lo puede
//! consultar cualquier principal autenticado, también clientes.

use axum::{
    extract::{Path, State},
    middleware,
    routing::{get, post, put},
    Extension, Json, Router,
};
use serde_json::Value;

use crate::controllers::employee_controller::EmployeeController;
use crate::dto::auth_dto::MessageResponse;
use crate::dto::customer_dto::{CustomerInfoResponse, VehicleDetailResponse};
use crate::dto::employee_dto::{
    AssignedSalesOrdersResponse, CustomerSalesHistoryResponse, CustomerServiceHistoryResponse,
    EmployeesResponse, SalesOrdersOverviewResponse, ShortageResponse,
    VehicleSalesHistoryResponse, VehicleServiceHistoryResponse,
};
use crate::middleware::auth::{require_authenticated, require_staff, AuthenticatedUser};
use crate::state::AppState;
use crate::utils::errors::AppResult;

pub fn create_employee_router(state: AppState) -> Router<AppState> {
    let staff_routes = Router::new()
        .route("/employees", get(employees))
        .route("/sales_orders", get(sales_orders))
        .route("/my_sales_orders", get(my_sales_orders))
        .route(
            "/sales_orders/assign/:employee_id/:sales_order_id",
            put(assign_employee),
        )
        .route("/customer/:customer_id", get(customer_details))
        .route("/sales/vehicle/:vin", get(sales_by_vehicle))
        .route("/sales/customer/:customer_id", get(sales_by_customer))
        .route("/service/vehicle/:vin", get(service_by_vehicle))
        .route("/service/customer/:customer_id", get(service_by_customer))
        .route("/parts/report_shortage", post(report_shortage))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_staff));

    let shared_routes = Router::new()
        .route("/vehicle/:vin", get(vehicle_details))
        .route_layer(middleware::from_fn_with_state(state, require_authenticated));

    staff_routes.merge(shared_routes)
}

async fn employees(State(state): State<AppState>) -> AppResult<Json<EmployeesResponse>> {
    let controller = EmployeeController::new(state.pool.clone());
    Ok(Json(controller.employees().await?))
}

async fn sales_orders(
    State(state): State<AppState>,
) -> AppResult<Json<SalesOrdersOverviewResponse>> {
    let controller = EmployeeController::new(state.pool.clone());
    Ok(Json(controller.sales_orders().await?))
}

async fn my_sales_orders(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthenticatedUser>,
) -> AppResult<Json<AssignedSalesOrdersResponse>> {
    let controller = EmployeeController::new(state.pool.clone());
    Ok(Json(controller.my_sales_orders(auth.id()).await?))
}

async fn assign_employee(
    State(state): State<AppState>,
    Path((employee_id, sales_order_id)): Path<(i32, i32)>,
) -> AppResult<Json<MessageResponse>> {
    let controller = EmployeeController::new(state.pool.clone());
    Ok(Json(
        controller.assign_employee(employee_id, sales_order_id).await?,
    ))
}

async fn customer_details(
    State(state): State<AppState>,
    Path(customer_id): Path<i32>,
) -> AppResult<Json<CustomerInfoResponse>> {
    let controller = EmployeeController::new(state.pool.clone());
    Ok(Json(controller.customer_details(customer_id).await?))
}

async fn vehicle_details(
    State(state): State<AppState>,
    Path(vin): Path<String>,
) -> AppResult<Json<VehicleDetailResponse>> {
    let controller = EmployeeController::new(state.pool.clone());
    Ok(Json(controller.vehicle_details(&vin).await?))
}

async fn sales_by_vehicle(
    State(state): State<AppState>,
    Path(vin): Path<String>,
) -> AppResult<Json<VehicleSalesHistoryResponse>> {
    let controller = EmployeeController::new(state.pool.clone());
    Ok(Json(controller.sales_by_vehicle(&vin).await?))
}

async fn sales_by_customer(
    State(state): State<AppState>,
    Path(customer_id): Path<i32>,
) -> AppResult<Json<CustomerSalesHistoryResponse>> {
    let controller = EmployeeController::new(state.pool.clone());
    Ok(Json(controller.sales_by_customer(customer_id).await?))
}

async fn service_by_vehicle(
    State(state): State<AppState>,
    Path(vin): Path<String>,
) -> AppResult<Json<VehicleServiceHistoryResponse>> {
    let controller = EmployeeController::new(state.pool.clone());
    Ok(Json(controller.service_by_vehicle(&vin).await?))
}

async fn service_by_customer(
    State(state): State<AppState>,
    Path(customer_id): Path<i32>,
) -> AppResult<Json<CustomerServiceHistoryResponse>> {
    let controller = EmployeeController::new(state.pool.clone());
    Ok(Json(controller.service_by_customer(customer_id).await?))
}

async fn report_shortage(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthenticatedUser>,
    body: Option<Json<Value>>,
) -> AppResult<Json<ShortageResponse>> {
    let controller = EmployeeController::new(state.pool.clone());
    Ok(Json(
        controller
            .report_shortage(&auth.user.username, body.map(|Json(v)| v))
            .await?,
    ))
}
