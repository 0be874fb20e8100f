use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryCandidateDirectory, InMemoryEvaluationRepository};
use crate::routes::with_exam_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::Ordering;
use std::sync::Arc;

use shinsa::config::AppConfig;
use shinsa::error::AppError;
use shinsa::exam::ExamService;
use shinsa::telemetry;
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
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let repository = Arc::new(InMemoryEvaluationRepository::default());
    let directory = Arc::new(InMemoryCandidateDirectory::default());
    let exam_service = Arc::new(ExamService::new(repository, directory));

    let app = with_exam_routes(exam_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "dan examination service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
