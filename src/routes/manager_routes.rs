//! Rutas del área de managers
//!
//! Agregados con `?by=` y reportes fijos. Todo bajo `require_manager`.

use axum::{
    extract::{Query, State},
    middleware,
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use crate::controllers::manager_controller::{
    GroupBy, ManagerController, SalesAggregate, ServiceSummary,
};
use crate::dto::manager_dto::{
    CustomerVehiclesReportRow, EmployeePerformanceReportRow, PartUsageRow, ReportResponse,
    WaitingVehiclesReportRow,
};
use crate::middleware::auth::require_manager;
use crate::state::AppState;
use crate::utils::errors::AppResult;

#[derive(Debug, Deserialize)]
struct AggregateParams {
    by: Option<String>,
}

#[derive(Debug, Deserialize)]
struct UsageParams {
    threshold: Option<String>,
}

pub fn create_manager_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/sales/aggregate", get(sales_aggregate))
        .route("/service/summary", get(service_summary))
        .route("/parts/usage", get(parts_usage))
        .route("/reports/customer-vehicles", get(customer_vehicles_report))
        .route("/reports/waiting-vehicles", get(waiting_vehicles_report))
        .route(
            "/reports/employee-performance",
            get(employee_performance_report),
        )
        .route_layer(middleware::from_fn_with_state(state, require_manager))
}

async fn sales_aggregate(
    State(state): State<AppState>,
    Query(params): Query<AggregateParams>,
) -> AppResult<Json<SalesAggregate>> {
    let controller = ManagerController::new(state.pool.clone());
    let by = GroupBy::from_param(params.by.as_deref());
    Ok(Json(controller.sales_aggregate(by).await?))
}

async fn service_summary(
    State(state): State<AppState>,
    Query(params): Query<AggregateParams>,
) -> AppResult<Json<ServiceSummary>> {
    let controller = ManagerController::new(state.pool.clone());
    let by = GroupBy::from_param(params.by.as_deref());
    Ok(Json(controller.service_summary(by).await?))
}

async fn parts_usage(
    State(state): State<AppState>,
    Query(params): Query<UsageParams>,
) -> AppResult<Json<ReportResponse<PartUsageRow>>> {
    let controller = ManagerController::new(state.pool.clone());
    Ok(Json(
        controller.parts_usage(params.threshold.as_deref()).await?,
    ))
}

async fn customer_vehicles_report(
    State(state): State<AppState>,
) -> AppResult<Json<ReportResponse<CustomerVehiclesReportRow>>> {
    let controller = ManagerController::new(state.pool.clone());
    Ok(Json(controller.customer_vehicles_report().await?))
}

async fn waiting_vehicles_report(
    State(state): State<AppState>,
) -> AppResult<Json<ReportResponse<WaitingVehiclesReportRow>>> {
    let controller = ManagerController::new(state.pool.clone());
    Ok(Json(controller.waiting_vehicles_report().await?))
}

async fn employee_performance_report(
    State(state): State<AppState>,
) -> AppResult<Json<ReportResponse<EmployeePerformanceReportRow>>> {
    let controller = ManagerController::new(state.pool.clone());
    Ok(Json(controller.employee_performance_report().await?))
}
