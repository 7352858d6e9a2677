use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use uuid::Uuid;

use crate::{
    application::usecases::bookings::BookingUseCase,
    domain::{
        repositories::{bookings::BookingRepository, services::ServiceRepository},
        value_objects::bookings::InsertBookingModel,
    },
    infrastructure::{
        axum_http::error_responses::usecase_error,
        postgres::{
            postgres_connection::PgPoolSquad,
            repositories::{bookings::BookingPostgres, services::ServicePostgres},
        },
    },
};

pub fn routes(db_pool: Arc<PgPoolSquad>) -> Router {
    let booking_repository = BookingPostgres::new(Arc::clone(&db_pool));
    let service_repository = ServicePostgres::new(Arc::clone(&db_pool));
    let booking_usecase = BookingUseCase::new(
        Arc::new(booking_repository),
        Arc::new(service_repository),
    );

    Router::new()
        .route("/", post(create::<BookingPostgres, ServicePostgres>))
        .route("/:booking_id", get(get_by_id::<BookingPostgres, ServicePostgres>))
        .with_state(Arc::new(booking_usecase))
}

pub async fn create<B, S>(
    State(booking_usecase): State<Arc<BookingUseCase<B, S>>>,
    Json(insert_booking_model): Json<InsertBookingModel>,
) -> impl IntoResponse
where
    B: BookingRepository + Send + Sync + 'static,
    S: ServiceRepository + Send + Sync + 'static,
{
    match booking_usecase.create(insert_booking_model).await {
        Ok(booking) => (StatusCode::CREATED, Json(booking)).into_response(),
        Err(err) => usecase_error(err.status_code(), err),
    }
}

pub async fn get_by_id<B, S>(
    State(booking_usecase): State<Arc<BookingUseCase<B, S>>>,
    Path(booking_id): Path<Uuid>,
) -> impl IntoResponse
where
    B: BookingRepository + Send + Sync + 'static,
    S: ServiceRepository + Send + Sync + 'static,
{
    match booking_usecase.get(booking_id).await {
        Ok(booking) => (StatusCode::OK, Json(booking)).into_response(),
        Err(err) => usecase_error(err.status_code(), err),
    }
}
