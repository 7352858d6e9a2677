use std::sync::Arc;

use axum::{
    Json, Router, extract::State, http::StatusCode, response::IntoResponse, routing::get,
};

use crate::{
    application::usecases::services::ServiceUseCase,
    domain::repositories::services::ServiceRepository,
    infrastructure::{
        axum_http::error_responses::usecase_error,
        postgres::{
            postgres_connection::PgPoolSquad, repositories::services::ServicePostgres,
        },
    },
};

pub fn routes(db_pool: Arc<PgPoolSquad>) -> Router {
    let service_repository = ServicePostgres::new(Arc::clone(&db_pool));
    let service_usecase = ServiceUseCase::new(Arc::new(service_repository));

    Router::new()
        .route("/", get(list_active::<ServicePostgres>))
        .with_state(Arc::new(service_usecase))
}

pub async fn list_active<S>(
    State(service_usecase): State<Arc<ServiceUseCase<S>>>,
) -> impl IntoResponse
where
    S: ServiceRepository + Send + Sync + 'static,
{
    match service_usecase.list_active().await {
        Ok(services) => (StatusCode::OK, Json(services)).into_response(),
        Err(err) => usecase_error(err.status_code(), err),
    }
}
