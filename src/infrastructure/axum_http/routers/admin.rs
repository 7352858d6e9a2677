use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post, put},
};
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

use crate::{
    application::usecases::{
        admin_auth::AdminAuthUseCase, admin_bookings::AdminBookingUseCase,
        analytics::AnalyticsUseCase, contacts::ContactUseCase, services::ServiceUseCase,
    },
    auth::AuthAdmin,
    domain::{
        repositories::{
            admins::AdminRepository, analytics::AnalyticsRepository,
            bookings::BookingRepository, contacts::ContactRepository,
            services::ServiceRepository,
        },
        value_objects::{
            admins::AdminLoginModel,
            bookings::{ListBookingsFilter, UpdateBookingStatusModel},
            services::{EditServiceModel, InsertServiceModel},
        },
    },
    infrastructure::{
        axum_http::error_responses::usecase_error,
        postgres::{
            postgres_connection::PgPoolSquad,
            repositories::{
                admins::AdminPostgres, analytics::AnalyticsPostgres,
                bookings::BookingPostgres, contacts::ContactPostgres,
                services::ServicePostgres,
            },
        },
    },
};

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

pub fn routes(db_pool: Arc<PgPoolSquad>) -> Router {
    let admin_auth_usecase =
        AdminAuthUseCase::new(Arc::new(AdminPostgres::new(Arc::clone(&db_pool))));
    let admin_booking_usecase =
        AdminBookingUseCase::new(Arc::new(BookingPostgres::new(Arc::clone(&db_pool))));
    let contact_usecase =
        ContactUseCase::new(Arc::new(ContactPostgres::new(Arc::clone(&db_pool))));
    let service_usecase =
        ServiceUseCase::new(Arc::new(ServicePostgres::new(Arc::clone(&db_pool))));
    let analytics_usecase =
        AnalyticsUseCase::new(Arc::new(AnalyticsPostgres::new(Arc::clone(&db_pool))));

    let login_routes = Router::new()
        .route("/login", post(login::<AdminPostgres>))
        .with_state(Arc::new(admin_auth_usecase));

    let booking_routes = Router::new()
        .route("/bookings", get(list_bookings::<BookingPostgres>))
        .route(
            "/bookings/:booking_id/status",
            put(update_booking_status::<BookingPostgres>),
        )
        .route(
            "/bookings/:booking_id",
            delete(delete_booking::<BookingPostgres>),
        )
        .with_state(Arc::new(admin_booking_usecase));

    let contact_routes = Router::new()
        .route("/contacts", get(list_contacts::<ContactPostgres>))
        .route(
            "/contacts/:contact_id/read",
            put(mark_contact_read::<ContactPostgres>),
        )
        .route(
            "/contacts/:contact_id",
            delete(delete_contact::<ContactPostgres>),
        )
        .with_state(Arc::new(contact_usecase));

    let service_routes = Router::new()
        .route("/services", post(create_service::<ServicePostgres>))
        .route(
            "/services/:service_id",
            put(update_service::<ServicePostgres>)
                .delete(deactivate_service::<ServicePostgres>),
        )
        .with_state(Arc::new(service_usecase));

    let analytics_routes = Router::new()
        .route(
            "/analytics/summary",
            get(analytics_summary::<AnalyticsPostgres>),
        )
        .with_state(Arc::new(analytics_usecase));

    Router::new()
        .merge(login_routes)
        .merge(booking_routes)
        .merge(contact_routes)
        .merge(service_routes)
        .merge(analytics_routes)
}

pub async fn login<A>(
    State(admin_auth_usecase): State<Arc<AdminAuthUseCase<A>>>,
    Json(login_model): Json<AdminLoginModel>,
) -> impl IntoResponse
where
    A: AdminRepository + Send + Sync + 'static,
{
    match admin_auth_usecase.login(login_model).await {
        Ok(token) => (StatusCode::OK, Json(token)).into_response(),
        Err(err) => usecase_error(err.status_code(), err),
    }
}

pub async fn list_bookings<B>(
    State(admin_booking_usecase): State<Arc<AdminBookingUseCase<B>>>,
    _admin: AuthAdmin,
    Query(filter): Query<ListBookingsFilter>,
) -> impl IntoResponse
where
    B: BookingRepository + Send + Sync + 'static,
{
    match admin_booking_usecase.list(&filter).await {
        Ok(bookings) => (StatusCode::OK, Json(bookings)).into_response(),
        Err(err) => usecase_error(err.status_code(), err),
    }
}

pub async fn update_booking_status<B>(
    State(admin_booking_usecase): State<Arc<AdminBookingUseCase<B>>>,
    _admin: AuthAdmin,
    Path(booking_id): Path<Uuid>,
    Json(update_model): Json<UpdateBookingStatusModel>,
) -> impl IntoResponse
where
    B: BookingRepository + Send + Sync + 'static,
{
    match admin_booking_usecase
        .update_status(booking_id, update_model.status)
        .await
    {
        Ok(()) => (StatusCode::OK, Json(json!({ "updated": true }))).into_response(),
        Err(err) => usecase_error(err.status_code(), err),
    }
}

pub async fn delete_booking<B>(
    State(admin_booking_usecase): State<Arc<AdminBookingUseCase<B>>>,
    _admin: AuthAdmin,
    Path(booking_id): Path<Uuid>,
) -> impl IntoResponse
where
    B: BookingRepository + Send + Sync + 'static,
{
    match admin_booking_usecase.delete(booking_id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => usecase_error(err.status_code(), err),
    }
}

pub async fn list_contacts<C>(
    State(contact_usecase): State<Arc<ContactUseCase<C>>>,
    _admin: AuthAdmin,
    Query(page_query): Query<PageQuery>,
) -> impl IntoResponse
where
    C: ContactRepository + Send + Sync + 'static,
{
    let page = page_query.page.unwrap_or(1);
    let limit = page_query.limit.unwrap_or(20);

    match contact_usecase.list(page, limit).await {
        Ok(contacts) => (StatusCode::OK, Json(contacts)).into_response(),
        Err(err) => usecase_error(err.status_code(), err),
    }
}

pub async fn mark_contact_read<C>(
    State(contact_usecase): State<Arc<ContactUseCase<C>>>,
    _admin: AuthAdmin,
    Path(contact_id): Path<i64>,
) -> impl IntoResponse
where
    C: ContactRepository + Send + Sync + 'static,
{
    match contact_usecase.mark_read(contact_id).await {
        Ok(()) => (StatusCode::OK, Json(json!({ "read": true }))).into_response(),
        Err(err) => usecase_error(err.status_code(), err),
    }
}

pub async fn delete_contact<C>(
    State(contact_usecase): State<Arc<ContactUseCase<C>>>,
    _admin: AuthAdmin,
    Path(contact_id): Path<i64>,
) -> impl IntoResponse
where
    C: ContactRepository + Send + Sync + 'static,
{
    match contact_usecase.delete(contact_id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => usecase_error(err.status_code(), err),
    }
}

pub async fn create_service<S>(
    State(service_usecase): State<Arc<ServiceUseCase<S>>>,
    _admin: AuthAdmin,
    Json(insert_service_model): Json<InsertServiceModel>,
) -> impl IntoResponse
where
    S: ServiceRepository + Send + Sync + 'static,
{
    match service_usecase.create(insert_service_model).await {
        Ok(service_id) => (StatusCode::CREATED, Json(json!({ "id": service_id }))).into_response(),
        Err(err) => usecase_error(err.status_code(), err),
    }
}

pub async fn update_service<S>(
    State(service_usecase): State<Arc<ServiceUseCase<S>>>,
    _admin: AuthAdmin,
    Path(service_id): Path<i64>,
    Json(edit_service_model): Json<EditServiceModel>,
) -> impl IntoResponse
where
    S: ServiceRepository + Send + Sync + 'static,
{
    match service_usecase.update(service_id, edit_service_model).await {
        Ok(()) => (StatusCode::OK, Json(json!({ "updated": true }))).into_response(),
        Err(err) => usecase_error(err.status_code(), err),
    }
}

pub async fn deactivate_service<S>(
    State(service_usecase): State<Arc<ServiceUseCase<S>>>,
    _admin: AuthAdmin,
    Path(service_id): Path<i64>,
) -> impl IntoResponse
where
    S: ServiceRepository + Send + Sync + 'static,
{
    match service_usecase.deactivate(service_id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => usecase_error(err.status_code(), err),
    }
}

pub async fn analytics_summary<A>(
    State(analytics_usecase): State<Arc<AnalyticsUseCase<A>>>,
    _admin: AuthAdmin,
) -> impl IntoResponse
where
    A: AnalyticsRepository + Send + Sync + 'static,
{
    match analytics_usecase.summary().await {
        Ok(summary) => (StatusCode::OK, Json(summary)).into_response(),
        Err(err) => usecase_error(err.status_code(), err),
    }
}
