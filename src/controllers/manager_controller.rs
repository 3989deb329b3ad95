//! Controller de agregados y reportes de manager

use sqlx::PgPool;

use crate::dto::manager_dto::{
    AggregateResponse, CustomerVehiclesReportRow, EmployeePerformanceReportRow, PartUsageRow,
    ReportResponse, SalesByDateRow, SalesByEmployeeRow, ServiceSummaryByDateRow,
    ServiceSummaryByEmployeeRow, WaitingVehiclesReportRow,
};
use crate::repositories::report_repository::ReportRepository;
use crate::utils::errors::AppError;

/// Selector de agrupamiento de los agregados
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupBy {
    Date,
    Employee,
}

impl GroupBy {
    /// El selector desconocido cae a fecha en silencio.
    pub fn from_param(value: Option<&str>) -> Self {
        match value {
            Some("employee") => GroupBy::Employee,
            _ => GroupBy::Date,
        }
    }
}

/// Respuesta de agregados con las dos variantes de agrupamiento
#[derive(Debug, serde::Serialize)]
#[serde(untagged)]
pub enum SalesAggregate {
    ByDate(AggregateResponse<SalesByDateRow>),
    ByEmployee(AggregateResponse<SalesByEmployeeRow>),
}

#[derive(Debug, serde::Serialize)]
#[serde(untagged)]
pub enum ServiceSummary {
    ByDate(AggregateResponse<ServiceSummaryByDateRow>),
    ByEmployee(AggregateResponse<ServiceSummaryByEmployeeRow>),
}

pub struct ManagerController {
    reports: ReportRepository,
}

impl ManagerController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            reports: ReportRepository::new(pool),
        }
    }

    pub async fn sales_aggregate(&self, by: GroupBy) -> Result<SalesAggregate, AppError> {
        match by {
            GroupBy::Employee => {
                let data = self.reports.sales_by_employee().await?;
                Ok(SalesAggregate::ByEmployee(AggregateResponse {
                    by: "employee",
                    data,
                }))
            }
            GroupBy::Date => {
                let data = self.reports.sales_by_date().await?;
                Ok(SalesAggregate::ByDate(AggregateResponse { by: "date", data }))
            }
        }
    }

    pub async fn service_summary(&self, by: GroupBy) -> Result<ServiceSummary, AppError> {
        match by {
            GroupBy::Employee => {
                let data = self.reports.service_summary_by_employee().await?;
                Ok(ServiceSummary::ByEmployee(AggregateResponse {
                    by: "employee",
                    data,
                }))
            }
            GroupBy::Date => {
                let data = self.reports.service_summary_by_date().await?;
                Ok(ServiceSummary::ByDate(AggregateResponse { by: "date", data }))
            }
        }
    }

    /// Uso de repuestos; un umbral imparseable se ignora y el reporte
    /// sale completo.
    pub async fn parts_usage(
        &self,
        threshold: Option<&str>,
    ) -> Result<ReportResponse<PartUsageRow>, AppError> {
        let threshold: Option<i32> = threshold.and_then(|t| t.trim().parse().ok());

        let mut data = self.reports.parts_usage().await?;
        if let Some(threshold) = threshold {
            data.retain(|row| row.stock <= threshold);
        }

        Ok(ReportResponse { data })
    }

    pub async fn customer_vehicles_report(
        &self,
    ) -> Result<ReportResponse<CustomerVehiclesReportRow>, AppError> {
        let data = self.reports.customer_vehicles_report().await?;
        Ok(ReportResponse { data })
    }

    pub async fn waiting_vehicles_report(
        &self,
    ) -> Result<ReportResponse<WaitingVehiclesReportRow>, AppError> {
        let data = self.reports.waiting_vehicles_report().await?;
        Ok(ReportResponse { data })
    }

    pub async fn employee_performance_report(
        &self,
    ) -> Result<ReportResponse<EmployeePerformanceReportRow>, AppError> {
        let data = self.reports.employee_performance_report().await?;
        Ok(ReportResponse { data })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_by_defaults_to_date() {
        assert_eq!(GroupBy::from_param(None), GroupBy::Date);
        assert_eq!(GroupBy::from_param(Some("date")), GroupBy::Date);
        assert_eq!(GroupBy::from_param(Some("bogus")), GroupBy::Date);
    }

    #[test]
    fn test_group_by_employee() {
        assert_eq!(GroupBy::from_param(Some("employee")), GroupBy::Employee);
    }
}
