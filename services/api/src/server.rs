use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::portal_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use ops_readiness::config::AppConfig;
use ops_readiness::error::AppError;
use ops_readiness::telemetry;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
        portal: config.portal.clone(),
    };

    let app = portal_routes()
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        demo_mode = config.portal.demo_mode,
        default_scenario = %config.portal.default_scenario,
        "operational readiness portal ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
