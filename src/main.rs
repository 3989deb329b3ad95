use anyhow::Result;
use dotenvy::dotenv;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};

use dealership_backend::config::database::DatabaseConfig;
use dealership_backend::config::environment::EnvironmentConfig;
use dealership_backend::create_app;
use dealership_backend::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("🚗 Dealership Backend - API REST");
    info!("================================");

    let config = EnvironmentConfig::default();

    // Inicializar base de datos
    let pool = match DatabaseConfig::default().create_pool().await {
        Ok(pool) => {
            info!("✅ Base de datos conectada exitosamente");
            pool
        }
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    let addr: SocketAddr = config.server_url().parse()?;
    let state = AppState::new(pool, config);

    // Barrido periódico de sesiones expiradas
    let sessions = state.sessions.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(std::time::Duration::from_secs(300));
        loop {
            interval.tick().await;
            sessions.cleanup_expired().await;
        }
    });

    let app = create_app(state);

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("🔑 Auth:");
    info!("   POST /api/auth/login - Iniciar sesión");
    info!("   POST /api/auth/logout - Cerrar sesión");
    info!("   GET  /api/auth/current_user - Sesión actual");
    info!("🧑 Customer:");
    info!("   GET  /api/customer/vehicles - Vehículos propios");
    info!("   GET  /api/customer/vehicle/:vin - Detalle de vehículo propio");
    info!("   GET  /api/customer/info - Perfil propio");
    info!("   PUT  /api/customer/info - Actualizar perfil");
    info!("   GET  /api/customer/my_sales_orders - Órdenes de venta propias");
    info!("   GET  /api/customer/my_service_records - Historial de servicio propio");
    info!("   GET  /api/customer/vehicles_due_service - Vehículos con servicio vencido");
    info!("   GET  /api/customer/employee/:id - Contacto de empleado");
    info!("🚗 Vehicle:");
    info!("   GET  /api/vehicle/vehicles - Vehículos disponibles");
    info!("   POST /api/vehicle/vehicles/buy/:vin - Comprar vehículo");
    info!("🧰 Employee:");
    info!("   GET  /api/employee/employees - Listado de empleados");
    info!("   GET  /api/employee/sales_orders - Todas las órdenes de venta");
    info!("   GET  /api/employee/my_sales_orders - Órdenes asignadas");
    info!("   PUT  /api/employee/sales_orders/assign/:employee_id/:sales_order_id - Reasignar orden");
    info!("   GET  /api/employee/customer/:id - Detalle de cliente");
    info!("   GET  /api/employee/vehicle/:vin - Detalle de vehículo");
    info!("   GET  /api/employee/sales/vehicle/:vin - Ventas por vehículo");
    info!("   GET  /api/employee/sales/customer/:id - Ventas por cliente");
    info!("   GET  /api/employee/service/vehicle/:vin - Servicio por vehículo");
    info!("   GET  /api/employee/service/customer/:id - Servicio por cliente");
    info!("   POST /api/employee/parts/report_shortage - Reporte de faltantes");
    info!("📊 Manager:");
    info!("   GET  /api/manager/sales/aggregate?by=date|employee - Agregado de ventas");
    info!("   GET  /api/manager/service/summary?by=date|employee - Resumen de servicio");
    info!("   GET  /api/manager/parts/usage - Uso de repuestos");
    info!("   GET  /api/manager/reports/customer-vehicles - Vehículos por cliente");
    info!("   GET  /api/manager/reports/waiting-vehicles - Vehículos en espera");
    info!("   GET  /api/manager/reports/employee-performance - Desempeño de empleados");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
